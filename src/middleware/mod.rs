mod auth;
mod json;

pub use auth::{authenticate, BearerToken, CurrentUser};
pub use json::ValidJson;
