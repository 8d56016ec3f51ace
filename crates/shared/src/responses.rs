//! Response bodies for the catalog HTTP API.

use serde::{Deserialize, Serialize};

use spellbook_domain::{Spell, User};

/// Result of a filtered spell listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellListResponse {
    /// Matching spells, in catalog order
    pub spells: Vec<Spell>,
    /// Size of the unfiltered catalog
    pub total: usize,
    /// Number of matching spells
    pub shown: usize,
    /// Human-readable count, e.g. "Showing 1 spell"
    pub summary: String,
    /// Whether any filter dimension was constrained
    pub filters_active: bool,
}

/// The current mock sign-in state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub user: Option<User>,
}

/// JSON error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spellbook_domain::AuthProvider;

    #[test]
    fn signed_out_session_serializes_null_user() {
        let json = serde_json::to_value(SessionResponse { user: None }).unwrap();
        assert!(json["user"].is_null());
    }

    #[test]
    fn signed_in_session_carries_user() {
        let json = serde_json::to_value(SessionResponse {
            user: Some(AuthProvider::Google.mock_user()),
        })
        .unwrap();
        assert_eq!(json["user"]["displayName"], "John Doe");
    }

    #[test]
    fn list_response_uses_camel_case() {
        let json = serde_json::to_value(SpellListResponse {
            spells: vec![],
            total: 5,
            shown: 0,
            summary: "Showing 0 spells".into(),
            filters_active: true,
        })
        .unwrap();
        assert_eq!(json["filtersActive"], true);
        assert_eq!(json["total"], 5);
    }
}
