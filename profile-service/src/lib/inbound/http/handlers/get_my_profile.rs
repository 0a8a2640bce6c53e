use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::ProfileWithOwnerData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::profile::ports::ProfileRepository;
use crate::profile::ports::ProfileServicePort;
use crate::user::ports::UserRepository;

pub async fn get_my_profile<UR, PR>(
    State(state): State<AppState<UR, PR>>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<ProfileWithOwnerData>, ApiError>
where
    UR: UserRepository,
    PR: ProfileRepository,
{
    state
        .profile_service
        .get_own_profile(&auth.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref with_owner| ApiSuccess::new(StatusCode::OK, with_owner.into()))
}
