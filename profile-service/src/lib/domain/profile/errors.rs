use thiserror::Error;

use crate::user::errors::UserError;
use crate::user::errors::UserIdError;

/// Top-level error for all profile-related operations
#[derive(Debug, Clone, Error)]
pub enum ProfileError {
    /// The authenticated user has not created a profile yet.
    #[error("There is no profile for this user")]
    MissingOwnProfile,

    /// No profile exists for the requested user.
    #[error("Profile not found")]
    NotFound,

    #[error("Invalid user ID: {0}")]
    InvalidUserId(#[from] UserIdError),

    #[error(transparent)]
    User(#[from] UserError),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
