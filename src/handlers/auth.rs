use axum::{extract::State, Json};
use crate::errors::{AppError, AppResult};
use crate::middleware::{authenticate, BearerToken, CurrentUser, ValidJson};
use crate::models::{AuthUser, LoginRequest, RegisterRequest, TokenResponse, User};
use crate::services::{hash_password, policy::{self, Action}};
use crate::state::AppState;

/// The first account may be created anonymously (with any role); after
/// that only core users can register accounts.
pub async fn register_user(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    ValidJson(mut payload): ValidJson<RegisterRequest>,
) -> AppResult<Json<AuthUser>> {
    payload.validate()?;

    let existing = state.repo.count::<User>().await?;
    if existing == 0 {
        if !state.config.auth.allow_bootstrap {
            tracing::warn!("Bootstrap registration attempted while disabled");
            return Err(AppError::Forbidden("Bootstrap registration is disabled".into()));
        }
        tracing::info!("Bootstrapping first account {} as {:?}", payload.email, payload.role);
    } else {
        let raw = token.ok_or_else(|| AppError::Unauthorized("Authentication required".into()))?;
        let current = authenticate(&state, &raw).await?;
        policy::require(&current, Action::RegisterUser)?;
    }

    let user = User::new(
        payload.name,
        payload.email,
        payload.role,
        hash_password(&payload.password),
    );
    if !state.repo.insert(&user).await? {
        return Err(AppError::Duplicate("Email already registered".into()));
    }

    tracing::info!("Registered user {} ({:?})", user.email, user.role);
    Ok(Json(AuthUser::from(&user)))
}

pub async fn login(
    State(state): State<AppState>,
    ValidJson(mut payload): ValidJson<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    payload.validate()?;

    let invalid = || AppError::Unauthorized("Invalid credentials".into());

    let user = state
        .repo
        .find::<User>(&payload.email)
        .await?
        .filter(|user| user.is_active)
        .ok_or_else(|| {
            tracing::warn!("Login for unknown or inactive user {}", payload.email);
            invalid()
        })?;

    if user.password_hash != hash_password(&payload.password) {
        tracing::warn!("Wrong password for {}", user.email);
        return Err(invalid());
    }

    let token = state.signer.issue(&user.email, &user.password_hash);
    tracing::info!("Issued token for {}", user.email);
    Ok(Json(TokenResponse {
        token: token.encode(),
        user: AuthUser::from(&user),
    }))
}

pub async fn me(CurrentUser(current): CurrentUser) -> Json<AuthUser> {
    Json(current)
}
