use axum::{
    Extension, Json,
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::IntoResponse,
};
use chrono::Duration;
use shared::{cache::SessionStore, errors::ErrorResponse};
use std::sync::Arc;

const SESSION_TTL_MINUTES: i64 = 30;

/// Requires a live Redis session for the authenticated user and slides its
/// TTL on every request. Runs after `auth_middleware`.
pub async fn session_middleware(
    Extension(session_store): Extension<Arc<SessionStore>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let user_id = match req.extensions().get::<i32>() {
        Some(id) => *id,
        None => {
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse {
                    status: "fail".to_string(),
                    message: "Missing user_id in request context".to_string(),
                }),
            ));
        }
    };

    let key = format!("session:{user_id}");

    let session = match session_store.get_session(&key) {
        Some(session) => session,
        None => {
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse {
                    status: "fail".to_string(),
                    message: "Session expired or not found, please log in again".to_string(),
                }),
            ));
        }
    };

    session_store.refresh_session(&key, Duration::minutes(SESSION_TTL_MINUTES));

    req.extensions_mut().insert(session);

    Ok(next.run(req).await)
}
