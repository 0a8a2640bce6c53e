use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::ProfileWithOwnerData;
use crate::inbound::http::router::AppState;
use crate::profile::ports::ProfileRepository;
use crate::profile::ports::ProfileServicePort;
use crate::user::ports::UserRepository;

pub async fn list_profiles<UR, PR>(
    State(state): State<AppState<UR, PR>>,
) -> Result<ApiSuccess<Vec<ProfileWithOwnerData>>, ApiError>
where
    UR: UserRepository,
    PR: ProfileRepository,
{
    let profiles = state
        .profile_service
        .list_profiles()
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        profiles.iter().map(ProfileWithOwnerData::from).collect(),
    ))
}
