use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use serde_json::json;

use crate::domain::profile::models::Education;
use crate::domain::profile::models::Experience;
use crate::domain::profile::models::Profile;
use crate::domain::profile::models::ProfileWithOwner;
use crate::domain::profile::models::SocialLinks;
use crate::domain::user::models::User;
use crate::profile::errors::ProfileError;
use crate::user::errors::UserError;

pub mod add_education;
pub mod add_experience;
pub mod current_user;
pub mod delete_account;
pub mod get_my_profile;
pub mod get_profile_by_user;
pub mod list_profiles;
pub mod login;
pub mod register;
pub mod remove_education;
pub mod remove_experience;
pub mod upsert_profile;

/// Successful handler response: a status code and the bare resource body.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Failed handler response.
///
/// Every error renders as `{"msg": "..."}`. Internal failures keep their
/// detail server-side: the client only ever sees the generic body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    InternalServerError(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::InternalServerError(detail) => {
                tracing::error!(detail = %detail, "Request failed with internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "msg": message }))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::EmailAlreadyExists(_) => ApiError::BadRequest("User already exists".to_string()),
            UserError::InvalidCredentials => ApiError::BadRequest("Invalid credentials".to_string()),
            UserError::NotFound(_) => ApiError::BadRequest("User not found".to_string()),
            UserError::InvalidUserId(_) | UserError::InvalidEmail(_) => {
                ApiError::BadRequest(err.to_string())
            }
            UserError::Password(_) | UserError::DatabaseError(_) | UserError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<ProfileError> for ApiError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::MissingOwnProfile | ProfileError::NotFound => {
                ApiError::BadRequest(err.to_string())
            }
            // An unparseable user id behaves like a missing profile
            ProfileError::InvalidUserId(_) => ApiError::BadRequest("Profile not found".to_string()),
            ProfileError::User(e) => ApiError::from(e),
            ProfileError::DatabaseError(_) | ProfileError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

/// Issued-token response body (registration and login).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponseData {
    pub token: String,
}

/// Simple confirmation message body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageData {
    pub msg: String,
}

/// Public representation of a user (never carries the password hash).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.as_str().to_string(),
            avatar: user.avatar.clone(),
            created_at: user.created_at,
        }
    }
}

/// Serialized profile body shared by all profile handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileData {
    pub id: String,
    pub user: String,
    pub status: String,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_username: Option<String>,
    pub social: SocialLinks,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Profile> for ProfileData {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id.to_string(),
            user: profile.user_id.to_string(),
            status: profile.status.clone(),
            skills: profile.skills.clone(),
            company: profile.company.clone(),
            website: profile.website.clone(),
            location: profile.location.clone(),
            bio: profile.bio.clone(),
            github_username: profile.github_username.clone(),
            social: profile.social.clone(),
            experience: profile.experience.clone(),
            education: profile.education.clone(),
            updated_at: profile.updated_at,
        }
    }
}

/// Profile body with the owning user's public fields attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileWithOwnerData {
    #[serde(flatten)]
    pub profile: ProfileData,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl From<&ProfileWithOwner> for ProfileWithOwnerData {
    fn from(with_owner: &ProfileWithOwner) -> Self {
        Self {
            profile: ProfileData::from(&with_owner.profile),
            name: with_owner.owner.name.clone(),
            avatar: with_owner.owner.avatar.clone(),
        }
    }
}
