//! Mock sign-in use cases.

mod mock_auth;

pub use mock_auth::{AuthError, MockAuth, DEFAULT_AUTH_DELAY, SESSION_KEY};
