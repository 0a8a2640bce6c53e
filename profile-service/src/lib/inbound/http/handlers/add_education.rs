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
use crate::domain::profile::models::AddEducationCommand;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::profile::ports::ProfileRepository;
use crate::profile::ports::ProfileServicePort;
use crate::user::ports::UserRepository;

pub async fn add_education<UR, PR>(
    State(state): State<AppState<UR, PR>>,
    Extension(auth): Extension<AuthenticatedUser>,
    Json(body): Json<AddEducationRequest>,
) -> Result<ApiSuccess<ProfileData>, ApiError>
where
    UR: UserRepository,
    PR: ProfileRepository,
{
    state
        .profile_service
        .add_education(&auth.user_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref profile| ApiSuccess::new(StatusCode::OK, profile.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddEducationRequest {
    #[serde(default)]
    school: Option<String>,
    #[serde(default)]
    degree: Option<String>,
    #[serde(default)]
    field_of_study: Option<String>,
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
enum ParseAddEducationRequestError {
    #[error("School is required")]
    MissingSchool,

    #[error("Degree is required")]
    MissingDegree,

    #[error("Field of study is required")]
    MissingFieldOfStudy,

    #[error("From date is required")]
    MissingFromDate,
}

impl AddEducationRequest {
    fn try_into_command(self) -> Result<AddEducationCommand, ParseAddEducationRequestError> {
        let school = self
            .school
            .filter(|s| !s.trim().is_empty())
            .ok_or(ParseAddEducationRequestError::MissingSchool)?;
        let degree = self
            .degree
            .filter(|d| !d.trim().is_empty())
            .ok_or(ParseAddEducationRequestError::MissingDegree)?;
        let field_of_study = self
            .field_of_study
            .filter(|f| !f.trim().is_empty())
            .ok_or(ParseAddEducationRequestError::MissingFieldOfStudy)?;
        let from = self
            .from
            .ok_or(ParseAddEducationRequestError::MissingFromDate)?;

        Ok(AddEducationCommand {
            school,
            degree,
            field_of_study,
            from,
            to: self.to,
            current: self.current,
            description: self.description,
        })
    }
}

impl From<ParseAddEducationRequestError> for ApiError {
    fn from(err: ParseAddEducationRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
