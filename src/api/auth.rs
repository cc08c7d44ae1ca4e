use axum::{
    Json,
    extract::{Request, State, rejection::JsonRejection},
    http::HeaderMap,
    middleware::Next,
    response::IntoResponse,
};
use std::sync::Arc;
use tower_sessions::Session;
use tracing::warn;

use super::validation::json_body;
use super::{ApiError, ApiResponse, AppState, MessageResponse};
use crate::domain::UserId;
use crate::models::user::{LoginIdentity, User};
use crate::services::AuthError;

const SESSION_USER_KEY: &str = "user_id";
const GATEWAY_KEY_HEADER: &str = "X-Gateway-Key";

/// The signed-in user, placed in request extensions by [`auth_middleware`].
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidGatewayKey => Self::unauthorized("Invalid gateway key"),
            AuthError::Validation(msg) => Self::validation(msg),
            AuthError::StoreUnavailable(msg) => Self::StoreUnavailable(msg),
        }
    }
}

// ============================================================================
// Middleware
// ============================================================================

/// Rejects requests without a live session and exposes the user to handlers.
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let user = require_user(&state, &session).await?;
    request.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(request).await)
}

/// Resolves the session user or fails with `Unauthorized`.
pub async fn require_user(state: &AppState, session: &Session) -> Result<User, ApiError> {
    let user = session_user(state, session)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Not authenticated"))?;

    tracing::Span::current().record("user_id", user.id.value());
    Ok(user)
}

async fn session_user(state: &AppState, session: &Session) -> Result<Option<User>, ApiError> {
    let Some(user_id) = session
        .get::<i32>(SESSION_USER_KEY)
        .await
        .map_err(|e| ApiError::internal(format!("Session error: {e}")))?
    else {
        return Ok(None);
    };

    Ok(state.auth_service().current_user(UserId::new(user_id)).await?)
}

// ============================================================================
// Handlers
// ============================================================================

/// Binds the session to an identity verified by the OAuth gateway.
///
/// # Endpoint
/// `POST /api/auth/login`
///
/// # Errors
/// - 401 if the `X-Gateway-Key` header is missing or wrong
/// - 400 if `openId` is empty
pub async fn login(
    State(state): State<Arc<AppState>>,
    session: Session,
    headers: HeaderMap,
    payload: Result<Json<LoginIdentity>, JsonRejection>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let gateway_key = headers
        .get(GATEWAY_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    let identity = json_body(payload)?;
    let user = state.auth_service().login(gateway_key, identity).await?;

    session
        .cycle_id()
        .await
        .map_err(|e| ApiError::internal(format!("Failed to create session: {e}")))?;
    session
        .insert(SESSION_USER_KEY, user.id.value())
        .await
        .map_err(|e| ApiError::internal(format!("Failed to create session: {e}")))?;

    Ok(Json(ApiResponse::success(user)))
}

/// # Endpoint
/// `POST /api/auth/logout`
pub async fn logout(session: Session) -> Json<ApiResponse<MessageResponse>> {
    let _ = session.flush().await;
    Json(ApiResponse::success(MessageResponse::bare()))
}

/// Current user, or `null` when signed out or when the user cannot be loaded.
///
/// # Endpoint
/// `GET /api/auth/me`
pub async fn me(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Json<ApiResponse<Option<User>>> {
    let user = session_user(&state, &session).await.unwrap_or_else(|e| {
        warn!(error = %e, "Failed to resolve session user");
        None
    });
    Json(ApiResponse::success(user))
}

/// Lets only admins through.
pub fn require_admin(user: &User) -> Result<(), ApiError> {
    if user.role.is_admin() {
        Ok(())
    } else {
        Err(ApiError::forbidden("Admin role required"))
    }
}
