use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;
use crate::profile::ports::ProfileRepository;
use crate::user::ports::UserRepository;

/// Identity resolved from a verified token, stored in request extensions.
///
/// Carries only the account identifier and lives for the request; it is
/// derived entirely from the token, never from a credential-store lookup.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware gating protected routes.
///
/// Exactly two outcomes per invocation: the request proceeds with an
/// identity attached, or it is rejected with 401 and no downstream work
/// runs. Which token failure occurred is logged server-side; the client
/// only ever sees "Invalid token".
pub async fn authenticate<UR, PR>(
    State(state): State<AppState<UR, PR>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response>
where
    UR: UserRepository,
    PR: ProfileRepository,
{
    let token = req
        .headers()
        .get(&*state.auth_header)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            unauthorized("No token, authorisation denied")
        })?;

    let claims = state.token_issuer.verify(token).map_err(|e| {
        tracing::warn!(error = %e, "Token verification failed");
        unauthorized("Invalid token")
    })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!(error = %e, "Token subject is not a valid user id");
        unauthorized("Invalid token")
    })?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

fn unauthorized(msg: &str) -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "msg": msg }))).into_response()
}
