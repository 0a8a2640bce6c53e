use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::profile::models::AddEducationCommand;
use crate::domain::profile::models::AddExperienceCommand;
use crate::domain::profile::models::Profile;
use crate::domain::profile::models::ProfileWithOwner;
use crate::domain::profile::models::UpsertProfileCommand;
use crate::domain::user::models::UserId;
use crate::profile::errors::ProfileError;

/// Port for profile domain service operations.
#[async_trait]
pub trait ProfileServicePort: Send + Sync + 'static {
    /// Retrieve the authenticated user's own profile with owner fields.
    ///
    /// # Errors
    /// * `MissingOwnProfile` - User has not created a profile
    /// * `DatabaseError` - Database operation failed
    async fn get_own_profile(&self, user_id: &UserId) -> Result<ProfileWithOwner, ProfileError>;

    /// Create the user's profile or update it when one already exists.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn upsert_profile(
        &self,
        user_id: &UserId,
        command: UpsertProfileCommand,
    ) -> Result<Profile, ProfileError>;

    /// List every profile with owner name and avatar attached.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_profiles(&self) -> Result<Vec<ProfileWithOwner>, ProfileError>;

    /// Retrieve a profile by the owning user's identifier.
    ///
    /// # Errors
    /// * `NotFound` - No profile exists for this user
    /// * `DatabaseError` - Database operation failed
    async fn get_profile_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<ProfileWithOwner, ProfileError>;

    /// Delete the user's profile and the user account itself.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete_account(&self, user_id: &UserId) -> Result<(), ProfileError>;

    /// Prepend a work experience entry to the user's profile.
    ///
    /// # Errors
    /// * `MissingOwnProfile` - User has not created a profile
    /// * `DatabaseError` - Database operation failed
    async fn add_experience(
        &self,
        user_id: &UserId,
        command: AddExperienceCommand,
    ) -> Result<Profile, ProfileError>;

    /// Remove a work experience entry by its identifier.
    ///
    /// A non-matching identifier leaves the profile unchanged.
    ///
    /// # Errors
    /// * `MissingOwnProfile` - User has not created a profile
    /// * `DatabaseError` - Database operation failed
    async fn remove_experience(
        &self,
        user_id: &UserId,
        entry_id: &Uuid,
    ) -> Result<Profile, ProfileError>;

    /// Prepend an education entry to the user's profile.
    ///
    /// # Errors
    /// * `MissingOwnProfile` - User has not created a profile
    /// * `DatabaseError` - Database operation failed
    async fn add_education(
        &self,
        user_id: &UserId,
        command: AddEducationCommand,
    ) -> Result<Profile, ProfileError>;

    /// Remove an education entry by its identifier.
    ///
    /// A non-matching identifier leaves the profile unchanged.
    ///
    /// # Errors
    /// * `MissingOwnProfile` - User has not created a profile
    /// * `DatabaseError` - Database operation failed
    async fn remove_education(
        &self,
        user_id: &UserId,
        entry_id: &Uuid,
    ) -> Result<Profile, ProfileError>;
}

/// Persistence operations for the profile aggregate.
#[async_trait]
pub trait ProfileRepository: Send + Sync + 'static {
    /// Insert the profile, or replace it when the user already has one.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn upsert(&self, profile: Profile) -> Result<Profile, ProfileError>;

    /// Retrieve the profile owned by a user.
    ///
    /// # Returns
    /// Optional profile entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Profile>, ProfileError>;

    /// Retrieve all profiles.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Profile>, ProfileError>;

    /// Remove the profile owned by a user, if any.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete_by_user(&self, user_id: &UserId) -> Result<(), ProfileError>;
}
