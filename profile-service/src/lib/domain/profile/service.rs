use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::profile::models::AddEducationCommand;
use crate::domain::profile::models::AddExperienceCommand;
use crate::domain::profile::models::Education;
use crate::domain::profile::models::Experience;
use crate::domain::profile::models::Profile;
use crate::domain::profile::models::ProfileOwner;
use crate::domain::profile::models::ProfileWithOwner;
use crate::domain::profile::models::UpsertProfileCommand;
use crate::domain::user::models::UserId;
use crate::profile::errors::ProfileError;
use crate::profile::ports::ProfileRepository;
use crate::profile::ports::ProfileServicePort;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;

/// Domain service implementation for profile operations.
///
/// Holds both repositories: owner fields (name, avatar) come from the user
/// store, and deleting an account removes the profile and the user in turn.
pub struct ProfileService<PR, UR>
where
    PR: ProfileRepository,
    UR: UserRepository,
{
    profiles: Arc<PR>,
    users: Arc<UR>,
}

impl<PR, UR> ProfileService<PR, UR>
where
    PR: ProfileRepository,
    UR: UserRepository,
{
    /// Create a new profile service with injected repositories.
    pub fn new(profiles: Arc<PR>, users: Arc<UR>) -> Self {
        Self { profiles, users }
    }

    async fn attach_owner(
        &self,
        profile: Profile,
        missing: ProfileError,
    ) -> Result<ProfileWithOwner, ProfileError> {
        let owner = self
            .users
            .find_by_id(&profile.user_id)
            .await?
            .ok_or(missing)?;

        Ok(ProfileWithOwner {
            profile,
            owner: ProfileOwner {
                name: owner.name,
                avatar: owner.avatar,
            },
        })
    }
}

#[async_trait]
impl<PR, UR> ProfileServicePort for ProfileService<PR, UR>
where
    PR: ProfileRepository,
    UR: UserRepository,
{
    async fn get_own_profile(&self, user_id: &UserId) -> Result<ProfileWithOwner, ProfileError> {
        let profile = self
            .profiles
            .find_by_user(user_id)
            .await?
            .ok_or(ProfileError::MissingOwnProfile)?;

        self.attach_owner(profile, ProfileError::MissingOwnProfile)
            .await
    }

    async fn upsert_profile(
        &self,
        user_id: &UserId,
        command: UpsertProfileCommand,
    ) -> Result<Profile, ProfileError> {
        let profile = match self.profiles.find_by_user(user_id).await? {
            Some(mut existing) => {
                existing.apply(command);
                existing
            }
            None => Profile::new(*user_id, command),
        };

        self.profiles.upsert(profile).await
    }

    async fn list_profiles(&self) -> Result<Vec<ProfileWithOwner>, ProfileError> {
        let profiles = self.profiles.list_all().await?;

        let user_ids: Vec<UserId> = profiles.iter().map(|p| p.user_id).collect();
        let mut owners: HashMap<UserId, ProfileOwner> = self
            .users
            .find_by_ids(&user_ids)
            .await?
            .into_iter()
            .map(|user| {
                (
                    user.id,
                    ProfileOwner {
                        name: user.name,
                        avatar: user.avatar,
                    },
                )
            })
            .collect();

        // A profile whose owner row is gone mid-listing is skipped rather
        // than failing the whole listing.
        Ok(profiles
            .into_iter()
            .filter_map(|profile| {
                owners
                    .remove(&profile.user_id)
                    .map(|owner| ProfileWithOwner { profile, owner })
            })
            .collect())
    }

    async fn get_profile_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<ProfileWithOwner, ProfileError> {
        let profile = self
            .profiles
            .find_by_user(user_id)
            .await?
            .ok_or(ProfileError::NotFound)?;

        self.attach_owner(profile, ProfileError::NotFound).await
    }

    async fn delete_account(&self, user_id: &UserId) -> Result<(), ProfileError> {
        self.profiles.delete_by_user(user_id).await?;

        // The token may outlive the account; a user already removed is fine.
        match self.users.delete(user_id).await {
            Ok(()) | Err(UserError::NotFound(_)) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn add_experience(
        &self,
        user_id: &UserId,
        command: AddExperienceCommand,
    ) -> Result<Profile, ProfileError> {
        let mut profile = self
            .profiles
            .find_by_user(user_id)
            .await?
            .ok_or(ProfileError::MissingOwnProfile)?;

        profile.experience.insert(0, Experience::from(command));
        profile.updated_at = Utc::now();

        self.profiles.upsert(profile).await
    }

    async fn remove_experience(
        &self,
        user_id: &UserId,
        entry_id: &Uuid,
    ) -> Result<Profile, ProfileError> {
        let mut profile = self
            .profiles
            .find_by_user(user_id)
            .await?
            .ok_or(ProfileError::MissingOwnProfile)?;

        profile.experience.retain(|entry| entry.id != *entry_id);
        profile.updated_at = Utc::now();

        self.profiles.upsert(profile).await
    }

    async fn add_education(
        &self,
        user_id: &UserId,
        command: AddEducationCommand,
    ) -> Result<Profile, ProfileError> {
        let mut profile = self
            .profiles
            .find_by_user(user_id)
            .await?
            .ok_or(ProfileError::MissingOwnProfile)?;

        profile.education.insert(0, Education::from(command));
        profile.updated_at = Utc::now();

        self.profiles.upsert(profile).await
    }

    async fn remove_education(
        &self,
        user_id: &UserId,
        entry_id: &Uuid,
    ) -> Result<Profile, ProfileError> {
        let mut profile = self
            .profiles
            .find_by_user(user_id)
            .await?
            .ok_or(ProfileError::MissingOwnProfile)?;

        profile.education.retain(|entry| entry.id != *entry_id);
        profile.updated_at = Utc::now();

        self.profiles.upsert(profile).await
    }
}
