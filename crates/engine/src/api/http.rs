//! HTTP routes.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use spellbook_domain::{AuthProvider, FilterOptions, Spell};
use spellbook_shared::{
    CreateSpellRequest, ErrorResponse, RequestError, SessionResponse, SpellListResponse,
    SpellQuery,
};

use crate::app::App;
use crate::use_cases::{AuthError, CatalogError, FilteredSpells};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/spells", get(list_spells).post(create_spell))
        .route("/api/spells/options", get(filter_options))
        .route("/api/spells/{id}", get(get_spell))
        .route("/api/classes/{class}/spells", get(class_spells))
        .route("/api/auth/session", get(session))
        .route("/api/auth/sign-in/{provider}", post(sign_in))
        .route("/api/auth/sign-out", post(sign_out))
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Catalog
// =============================================================================

async fn list_spells(
    State(app): State<Arc<App>>,
    query: Result<Query<SpellQuery>, QueryRejection>,
) -> Result<Json<SpellListResponse>, ApiError> {
    let Query(query) = query?;
    let filter = query.into_filter()?;
    let result = app.catalog.filter(&filter).await;
    Ok(Json(list_response(result)))
}

async fn filter_options(State(app): State<Arc<App>>) -> Json<FilterOptions> {
    Json(app.catalog.options().clone())
}

async fn get_spell(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Spell>, ApiError> {
    let spell = app.catalog.get(&id).await?;
    Ok(Json(spell))
}

async fn class_spells(
    State(app): State<Arc<App>>,
    Path(class): Path<String>,
) -> Json<SpellListResponse> {
    let result = app.catalog.spells_for_class(&class).await;
    Json(list_response(result))
}

async fn create_spell(
    State(app): State<Arc<App>>,
    request: Result<Json<CreateSpellRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Spell>), ApiError> {
    let author = app
        .auth
        .current_user()
        .await
        .ok_or(ApiError::Unauthorized)?;
    let Json(request) = request?;
    let draft = request.into_new_spell()?;
    let spell = app.catalog.create_homebrew(&author, draft).await?;
    Ok((StatusCode::CREATED, Json(spell)))
}

fn list_response(result: FilteredSpells) -> SpellListResponse {
    SpellListResponse {
        total: result.total,
        shown: result.shown(),
        summary: result.summary(),
        filters_active: result.filters_active,
        spells: result.spells,
    }
}

// =============================================================================
// Session
// =============================================================================

async fn session(State(app): State<Arc<App>>) -> Json<SessionResponse> {
    Json(SessionResponse {
        user: app.auth.current_user().await,
    })
}

async fn sign_in(
    State(app): State<Arc<App>>,
    Path(provider): Path<String>,
) -> Result<Json<SessionResponse>, ApiError> {
    let provider: AuthProvider = provider
        .parse()
        .map_err(|e: spellbook_domain::DomainError| ApiError::BadRequest(e.to_string()))?;
    let user = app.auth.sign_in(provider).await?;
    Ok(Json(SessionResponse { user: Some(user) }))
}

async fn sign_out(State(app): State<Arc<App>>) -> Result<Json<SessionResponse>, ApiError> {
    app.auth.sign_out().await?;
    Ok(Json(SessionResponse { user: None }))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Unauthorized,
    Conflict(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Sign in to create spells".to_string(),
            ),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
        };
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound(_) => ApiError::NotFound(e.to_string()),
            CatalogError::Duplicate(_) => ApiError::Conflict(e.to_string()),
            CatalogError::InvalidSpell(_) => ApiError::BadRequest(e.to_string()),
            CatalogError::Source(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<RequestError> for ApiError {
    fn from(e: RequestError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(e: QueryRejection) -> Self {
        ApiError::BadRequest(e.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest(e.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use chrono::{TimeZone, Utc};
    use serde_json::{json, Value};
    use std::time::Duration;
    use tower::ServiceExt;

    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::content_sources::FixtureSpellSource;
    use crate::infrastructure::storage::MemoryStorage;
    use crate::use_cases::{MockAuth, SpellCatalog};

    async fn test_app() -> Arc<App> {
        let clock = Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        ));
        let catalog = Arc::new(SpellCatalog::new(
            Arc::new(FixtureSpellSource::new()),
            clock,
        ));
        catalog.load().await.unwrap();
        let auth = Arc::new(MockAuth::with_delay(
            Arc::new(MemoryStorage::new()),
            Duration::ZERO,
        ));
        Arc::new(App::new(catalog, auth))
    }

    async fn send(app: &Arc<App>, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = routes()
            .with_state(app.clone())
            .oneshot(request)
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    async fn get_json(app: &Arc<App>, uri: &str) -> (StatusCode, Value) {
        send(app, Method::GET, uri, None).await
    }

    fn names(body: &Value) -> Vec<String> {
        body["spells"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["name"].as_str().unwrap().to_string())
            .collect()
    }

    fn new_spell_body(name: &str) -> Value {
        json!({
            "name": name,
            "level": 2,
            "school": "Conjuration",
            "castingTime": "1 Bonus Action",
            "range": "Self",
            "components": ["V"],
            "duration": "Instantaneous",
            "description": "You vanish and reappear nearby.",
            "classes": ["Sorcerer"],
        })
    }

    #[tokio::test]
    async fn health_check() {
        let response = routes()
            .with_state(test_app().await)
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn unfiltered_listing() {
        let app = test_app().await;
        let (status, body) = get_json(&app, "/api/spells").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 5);
        assert_eq!(body["shown"], 5);
        assert_eq!(body["summary"], "Showing 5 spells");
        assert_eq!(body["filtersActive"], false);
    }

    #[tokio::test]
    async fn query_string_filters() {
        let app = test_app().await;

        let (_, body) = get_json(&app, "/api/spells?search=fire").await;
        assert_eq!(names(&body), ["Fireball", "Dragon's Breath"]);

        let (_, body) = get_json(&app, "/api/spells?classes=Warlock").await;
        assert_eq!(names(&body), ["Eldritch Blast"]);
        assert_eq!(body["summary"], "Showing 1 spell");

        let (_, body) = get_json(&app, "/api/spells?level=0").await;
        assert_eq!(names(&body), ["Eldritch Blast"]);

        let (_, body) = get_json(&app, "/api/spells?isRitual=true").await;
        assert_eq!(names(&body), ["Detect Magic"]);

        let (_, body) = get_json(
            &app,
            "/api/spells?classes=Wizard&school=Evocation&requiresConcentration=false",
        )
        .await;
        assert_eq!(names(&body), ["Fireball"]);
    }

    #[tokio::test]
    async fn empty_query_values_are_neutral() {
        let app = test_app().await;
        let (status, body) =
            get_json(&app, "/api/spells?search=&level=&school=&isHomebrew=").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["shown"], 5);
        assert_eq!(body["filtersActive"], false);
    }

    #[tokio::test]
    async fn invalid_query_values_are_bad_requests() {
        let app = test_app().await;
        for uri in [
            "/api/spells?level=10",
            "/api/spells?level=high",
            "/api/spells?school=Chronomancy",
            "/api/spells?isRitual=yes",
        ] {
            let (status, body) = get_json(&app, uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
            assert!(body["error"].is_string(), "{}", uri);
        }
    }

    #[tokio::test]
    async fn filter_options_listing() {
        let app = test_app().await;
        let (status, body) = get_json(&app, "/api/spells/options").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["classes"].as_array().unwrap().len(), 9);
        assert_eq!(body["levels"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn spell_by_id() {
        let app = test_app().await;
        let (status, body) = get_json(&app, "/api/spells/3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Eldritch Blast");

        let (status, body) = get_json(&app, "/api/spells/404").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("404"));
    }

    #[tokio::test]
    async fn class_listing() {
        let app = test_app().await;
        let (status, body) = get_json(&app, "/api/classes/Cleric/spells").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&body), ["Detect Magic"]);
        assert_eq!(body["filtersActive"], true);
    }

    #[tokio::test]
    async fn sign_in_and_out() {
        let app = test_app().await;

        let (_, body) = get_json(&app, "/api/auth/session").await;
        assert!(body["user"].is_null());

        let (status, body) = send(&app, Method::POST, "/api/auth/sign-in/google", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["displayName"], "John Doe");

        let (_, body) = get_json(&app, "/api/auth/session").await;
        assert_eq!(body["user"]["id"], "1");

        let (status, _) = send(&app, Method::POST, "/api/auth/sign-out", None).await;
        assert_eq!(status, StatusCode::OK);
        let (_, body) = get_json(&app, "/api/auth/session").await;
        assert!(body["user"].is_null());
    }

    #[tokio::test]
    async fn unknown_provider_is_rejected() {
        let app = test_app().await;
        let (status, _) = send(&app, Method::POST, "/api/auth/sign-in/github", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!app.auth.is_signed_in().await);
    }

    #[tokio::test]
    async fn creating_requires_sign_in() {
        let app = test_app().await;
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/spells",
            Some(new_spell_body("Misty Step")),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(app.catalog.count().await, 5);
    }

    #[tokio::test]
    async fn create_homebrew_spell() {
        let app = test_app().await;
        send(&app, Method::POST, "/api/auth/sign-in/apple", None).await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/spells",
            Some(new_spell_body("Misty Step")),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["isHomebrew"], true);
        assert_eq!(body["source"], "Homebrew");
        assert_eq!(body["createdBy"], "2");

        let (_, body) = get_json(&app, "/api/spells?isHomebrew=true").await;
        assert_eq!(names(&body), ["Arcane Ward", "Misty Step"]);
        assert_eq!(body["total"], 6);
    }

    #[tokio::test]
    async fn create_rejects_duplicates_and_bad_fields() {
        let app = test_app().await;
        send(&app, Method::POST, "/api/auth/sign-in/google", None).await;

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/spells",
            Some(new_spell_body("Fireball")),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);

        let mut bad_level = new_spell_body("Misty Step");
        bad_level["level"] = json!(12);
        let (status, _) = send(&app, Method::POST, "/api/spells", Some(bad_level)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let mut bad_school = new_spell_body("Misty Step");
        bad_school["school"] = json!("Chronomancy");
        let (status, _) = send(&app, Method::POST, "/api/spells", Some(bad_school)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, Method::POST, "/api/spells", Some(new_spell_body(" "))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        assert_eq!(app.catalog.count().await, 5);
    }

    #[tokio::test]
    async fn malformed_query_is_a_json_bad_request() {
        let app = test_app().await;
        let (status, body) = get_json(&app, "/api/spells?classes=Warlock&classes=Wizard").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn out_of_range_levels_are_json_bad_requests() {
        let app = test_app().await;
        send(&app, Method::POST, "/api/auth/sign-in/google", None).await;

        for level in [json!(300), json!(-1)] {
            let mut body = new_spell_body("Misty Step");
            body["level"] = level;
            let (status, body) = send(&app, Method::POST, "/api/spells", Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(body["error"].as_str().unwrap().contains("level"));
        }
        assert_eq!(app.catalog.count().await, 5);
    }

    #[tokio::test]
    async fn unparseable_body_is_a_json_bad_request() {
        let app = test_app().await;
        send(&app, Method::POST, "/api/auth/sign-in/google", None).await;

        let mut body = new_spell_body("Misty Step");
        body["level"] = json!("two");
        let (status, body) = send(&app, Method::POST, "/api/spells", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn signed_out_create_is_unauthorized_even_with_a_bad_body() {
        let app = test_app().await;
        let (status, body) = send(&app, Method::POST, "/api/spells", Some(json!({}))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body["error"].is_string());
    }

    #[test]
    fn catalog_errors_map_to_statuses() {
        let status = |e: CatalogError| ApiError::from(e).into_response().status();
        assert_eq!(
            status(CatalogError::NotFound("x".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status(CatalogError::Duplicate("x".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status(CatalogError::Source(
                crate::infrastructure::ports::SourceError::read("x", "y")
            )),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
