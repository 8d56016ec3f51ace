//! Signed-in user identity.
//!
//! Only the mock sign-in flow produces these. Nothing in the filter engine
//! reads them; the catalog uses the id to stamp homebrew spells.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub display_name: String,
    pub email: String,
    /// Avatar image URL
    #[serde(rename = "photoURL")]
    pub photo_url: String,
}

/// Sign-in providers offered by the mock flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthProvider {
    Google,
    Apple,
}

impl AuthProvider {
    pub fn slug(&self) -> &'static str {
        match self {
            AuthProvider::Google => "google",
            AuthProvider::Apple => "apple",
        }
    }

    /// The canned account each provider signs in as.
    pub fn mock_user(&self) -> User {
        match self {
            AuthProvider::Google => User {
                id: "1".to_string(),
                display_name: "John Doe".to_string(),
                email: "john.doe@example.com".to_string(),
                photo_url: "https://ui-avatars.com/api/?name=John+Doe&background=random"
                    .to_string(),
            },
            AuthProvider::Apple => User {
                id: "2".to_string(),
                display_name: "Jane Smith".to_string(),
                email: "jane.smith@example.com".to_string(),
                photo_url: "https://ui-avatars.com/api/?name=Jane+Smith&background=random"
                    .to_string(),
            },
        }
    }
}

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for AuthProvider {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "google" => Ok(AuthProvider::Google),
            "apple" => Ok(AuthProvider::Apple),
            _ => Err(DomainError::parse(format!("Unknown auth provider: {}", s))),
        }
    }
}
