use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::ProfileWithOwnerData;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;
use crate::profile::errors::ProfileError;
use crate::profile::ports::ProfileRepository;
use crate::profile::ports::ProfileServicePort;
use crate::user::ports::UserRepository;

pub async fn get_profile_by_user<UR, PR>(
    State(state): State<AppState<UR, PR>>,
    Path(user_id): Path<String>,
) -> Result<ApiSuccess<ProfileWithOwnerData>, ApiError>
where
    UR: UserRepository,
    PR: ProfileRepository,
{
    // A malformed id cannot own a profile; same response as a missing one
    let user_id = UserId::from_string(&user_id)
        .map_err(|e| ApiError::from(ProfileError::InvalidUserId(e)))?;

    state
        .profile_service
        .get_profile_by_user(&user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref with_owner| ApiSuccess::new(StatusCode::OK, with_owner.into()))
}
