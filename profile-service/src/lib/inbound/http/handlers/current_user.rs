use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::profile::ports::ProfileRepository;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

pub async fn current_user<UR, PR>(
    State(state): State<AppState<UR, PR>>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<UserData>, ApiError>
where
    UR: UserRepository,
    PR: ProfileRepository,
{
    state
        .user_service
        .get_user(&auth.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}
