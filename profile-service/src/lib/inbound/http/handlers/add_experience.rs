use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use super::ProfileData;
use crate::domain::profile::models::AddExperienceCommand;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::profile::ports::ProfileRepository;
use crate::profile::ports::ProfileServicePort;
use crate::user::ports::UserRepository;

pub async fn add_experience<UR, PR>(
    State(state): State<AppState<UR, PR>>,
    Extension(auth): Extension<AuthenticatedUser>,
    Json(body): Json<AddExperienceRequest>,
) -> Result<ApiSuccess<ProfileData>, ApiError>
where
    UR: UserRepository,
    PR: ProfileRepository,
{
    state
        .profile_service
        .add_experience(&auth.user_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref profile| ApiSuccess::new(StatusCode::OK, profile.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddExperienceRequest {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    company: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    from: Option<NaiveDate>,
    #[serde(default)]
    to: Option<NaiveDate>,
    #[serde(default)]
    current: bool,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseAddExperienceRequestError {
    #[error("Title is required")]
    MissingTitle,

    #[error("Company is required")]
    MissingCompany,

    #[error("From date is required")]
    MissingFromDate,
}

impl AddExperienceRequest {
    fn try_into_command(self) -> Result<AddExperienceCommand, ParseAddExperienceRequestError> {
        let title = self
            .title
            .filter(|t| !t.trim().is_empty())
            .ok_or(ParseAddExperienceRequestError::MissingTitle)?;
        let company = self
            .company
            .filter(|c| !c.trim().is_empty())
            .ok_or(ParseAddExperienceRequestError::MissingCompany)?;
        let from = self
            .from
            .ok_or(ParseAddExperienceRequestError::MissingFromDate)?;

        Ok(AddExperienceCommand {
            title,
            company,
            location: self.location,
            from,
            to: self.to,
            current: self.current,
            description: self.description,
        })
    }
}

impl From<ParseAddExperienceRequestError> for ApiError {
    fn from(err: ParseAddExperienceRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
