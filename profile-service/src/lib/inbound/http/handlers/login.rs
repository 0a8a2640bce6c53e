use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::TokenResponseData;
use crate::domain::user::models::EmailAddress;
use crate::inbound::http::router::AppState;
use crate::profile::ports::ProfileRepository;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

pub async fn login<UR, PR>(
    State(state): State<AppState<UR, PR>>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<TokenResponseData>, ApiError>
where
    UR: UserRepository,
    PR: ProfileRepository,
{
    // An unparseable email can never match an account
    let email = EmailAddress::new(body.email)
        .map_err(|_| ApiError::BadRequest("Invalid credentials".to_string()))?;

    let user = state
        .user_service
        .authenticate(&email, &body.password)
        .await
        .map_err(ApiError::from)?;

    let token = state
        .token_issuer
        .issue(&user.id.to_string())
        .map_err(|e| ApiError::InternalServerError(format!("Token issuance failed: {}", e)))?;

    Ok(ApiSuccess::new(StatusCode::OK, TokenResponseData { token }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}
