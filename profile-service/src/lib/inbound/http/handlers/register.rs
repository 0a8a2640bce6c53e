use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use super::TokenResponseData;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::inbound::http::router::AppState;
use crate::profile::ports::ProfileRepository;
use crate::user::errors::EmailError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Passwords shorter than this are rejected at the boundary.
const PASSWORD_MIN_LENGTH: usize = 6;

pub async fn register<UR, PR>(
    State(state): State<AppState<UR, PR>>,
    Json(body): Json<RegisterRequest>,
) -> Result<ApiSuccess<TokenResponseData>, ApiError>
where
    UR: UserRepository,
    PR: ProfileRepository,
{
    let user = state
        .user_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)?;

    let token = state
        .token_issuer
        .issue(&user.id.to_string())
        .map_err(|e| ApiError::InternalServerError(format!("Token issuance failed: {}", e)))?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        TokenResponseData { token },
    ))
}

/// HTTP request body for registering a user (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    avatar: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterRequestError {
    #[error("Name is required")]
    MissingName,

    #[error("Please, include a valid email")]
    Email(#[from] EmailError),

    #[error("Password must contains at least 6 symbols")]
    PasswordTooShort,
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<CreateUserCommand, ParseRegisterRequestError> {
        if self.name.trim().is_empty() {
            return Err(ParseRegisterRequestError::MissingName);
        }
        let email = EmailAddress::new(self.email)?;
        if self.password.chars().count() < PASSWORD_MIN_LENGTH {
            return Err(ParseRegisterRequestError::PasswordTooShort);
        }
        Ok(CreateUserCommand::new(
            self.name,
            email,
            self.password,
            self.avatar,
        ))
    }
}

impl From<ParseRegisterRequestError> for ApiError {
    fn from(err: ParseRegisterRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
