use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use crate::errors::{AppError, AppResult};
use crate::models::{AuthUser, User};
use crate::services::SignedToken;
use crate::state::AppState;

const BAD_HEADER: &str = "Missing or invalid Authorization header";

/// Resolves a raw bearer token to the active user it was issued for.
pub async fn authenticate(state: &AppState, raw_token: &str) -> AppResult<AuthUser> {
    let token = SignedToken::decode(raw_token.trim()).map_err(|e| {
        tracing::warn!("Rejected undecodable token: {}", e);
        AppError::Unauthorized("Invalid token".into())
    })?;

    let user = state
        .repo
        .find::<User>(token.email())
        .await?
        .filter(|user| user.is_active)
        .ok_or_else(|| {
            tracing::warn!("Token presented for unknown or inactive user {}", token.email());
            AppError::Unauthorized("User not found or inactive".into())
        })?;

    if !state.signer.verify(&token, &user.password_hash) {
        tracing::warn!("Token signature mismatch for {}", user.email);
        return Err(AppError::Unauthorized("Invalid token signature".into()));
    }

    Ok(AuthUser::from(&user))
}

/// Caller identity for routes that require authentication.
pub struct CurrentUser(pub AuthUser);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::Unauthorized(BAD_HEADER.into()))?;

        authenticate(state, bearer.token()).await.map(CurrentUser)
    }
}

/// Bearer token if the request carries one, unverified.
///
/// Used where authentication depends on the store contents (first-user
/// registration), so verification is left to the handler. A header that is
/// absent or not a Bearer credential (e.g. proxy-added Basic auth) yields `None`.
pub struct BearerToken(pub Option<String>);

#[async_trait]
impl FromRequestParts<AppState> for BearerToken {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
            .await
            .ok()
            .map(|TypedHeader(Authorization(bearer))| bearer.token().to_string());

        Ok(BearerToken(token))
    }
}
