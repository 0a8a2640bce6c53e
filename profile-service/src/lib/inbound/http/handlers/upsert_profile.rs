use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use super::ProfileData;
use crate::domain::profile::models::SocialLinks;
use crate::domain::profile::models::UpsertProfileCommand;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::profile::ports::ProfileRepository;
use crate::profile::ports::ProfileServicePort;
use crate::user::ports::UserRepository;

pub async fn upsert_profile<UR, PR>(
    State(state): State<AppState<UR, PR>>,
    Extension(auth): Extension<AuthenticatedUser>,
    Json(body): Json<UpsertProfileRequest>,
) -> Result<ApiSuccess<ProfileData>, ApiError>
where
    UR: UserRepository,
    PR: ProfileRepository,
{
    state
        .profile_service
        .upsert_profile(&auth.user_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref profile| ApiSuccess::new(StatusCode::OK, profile.into()))
}

/// HTTP request body for creating or updating a profile (raw JSON).
///
/// Skills arrive as a single comma-separated string; social links are
/// top-level fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpsertProfileRequest {
    #[serde(default)]
    status: String,
    #[serde(default)]
    skills: String,
    #[serde(default)]
    company: Option<String>,
    #[serde(default)]
    website: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    bio: Option<String>,
    #[serde(default)]
    github_username: Option<String>,
    #[serde(default)]
    youtube: Option<String>,
    #[serde(default)]
    twitter: Option<String>,
    #[serde(default)]
    facebook: Option<String>,
    #[serde(default)]
    linkedin: Option<String>,
    #[serde(default)]
    instagram: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseUpsertProfileRequestError {
    #[error("Status is required")]
    MissingStatus,

    #[error("Skills is required")]
    MissingSkills,
}

impl UpsertProfileRequest {
    fn try_into_command(self) -> Result<UpsertProfileCommand, ParseUpsertProfileRequestError> {
        if self.status.trim().is_empty() {
            return Err(ParseUpsertProfileRequestError::MissingStatus);
        }

        let skills: Vec<String> = self
            .skills
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if skills.is_empty() {
            return Err(ParseUpsertProfileRequestError::MissingSkills);
        }

        Ok(UpsertProfileCommand {
            status: self.status,
            skills,
            company: self.company,
            website: self.website,
            location: self.location,
            bio: self.bio,
            github_username: self.github_username,
            social: SocialLinks {
                youtube: self.youtube,
                twitter: self.twitter,
                facebook: self.facebook,
                linkedin: self.linkedin,
                instagram: self.instagram,
            },
        })
    }
}

impl From<ParseUpsertProfileRequestError> for ApiError {
    fn from(err: ParseUpsertProfileRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
