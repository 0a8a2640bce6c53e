use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use uuid::Uuid;

use super::ApiError;
use super::ApiSuccess;
use super::ProfileData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::profile::ports::ProfileRepository;
use crate::profile::ports::ProfileServicePort;
use crate::user::ports::UserRepository;

pub async fn remove_education<UR, PR>(
    State(state): State<AppState<UR, PR>>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(edu_id): Path<String>,
) -> Result<ApiSuccess<ProfileData>, ApiError>
where
    UR: UserRepository,
    PR: ProfileRepository,
{
    let entry_id = Uuid::parse_str(&edu_id)
        .map_err(|_| ApiError::BadRequest("Invalid entry id".to_string()))?;

    state
        .profile_service
        .remove_education(&auth.user_id, &entry_id)
        .await
        .map_err(ApiError::from)
        .map(|ref profile| ApiSuccess::new(StatusCode::OK, profile.into()))
}
