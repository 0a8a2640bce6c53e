use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::MessageData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::profile::ports::ProfileRepository;
use crate::profile::ports::ProfileServicePort;
use crate::user::ports::UserRepository;

pub async fn delete_account<UR, PR>(
    State(state): State<AppState<UR, PR>>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<MessageData>, ApiError>
where
    UR: UserRepository,
    PR: ProfileRepository,
{
    state
        .profile_service
        .delete_account(&auth.user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageData {
            msg: "User removed".to_string(),
        },
    ))
}
