use std::fmt;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::user::models::UserId;

/// Profile aggregate entity.
///
/// One profile per user. Skills, social links, and the experience and
/// education histories are sub-documents owned by the profile; they are
/// only ever mutated through the profile as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: ProfileId,
    pub user_id: UserId,
    pub status: String,
    pub skills: Vec<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub social: SocialLinks,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Build a fresh profile for a user from an upsert command.
    pub fn new(user_id: UserId, command: UpsertProfileCommand) -> Self {
        Self {
            id: ProfileId::new(),
            user_id,
            status: command.status,
            skills: command.skills,
            company: command.company,
            website: command.website,
            location: command.location,
            bio: command.bio,
            github_username: command.github_username,
            social: command.social,
            experience: Vec::new(),
            education: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    /// Apply an upsert command to an existing profile.
    ///
    /// Required fields are replaced, optional fields are only overwritten
    /// when provided, and the social links block is replaced wholesale.
    pub fn apply(&mut self, command: UpsertProfileCommand) {
        self.status = command.status;
        self.skills = command.skills;
        if command.company.is_some() {
            self.company = command.company;
        }
        if command.website.is_some() {
            self.website = command.website;
        }
        if command.location.is_some() {
            self.location = command.location;
        }
        if command.bio.is_some() {
            self.bio = command.bio;
        }
        if command.github_username.is_some() {
            self.github_username = command.github_username;
        }
        self.social = command.social;
        self.updated_at = Utc::now();
    }
}

/// Profile unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProfileId(pub Uuid);

impl ProfileId {
    /// Generate a new random profile ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProfileId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Social network links sub-document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

/// Work experience entry sub-document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub from: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    pub current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<AddExperienceCommand> for Experience {
    fn from(command: AddExperienceCommand) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: command.title,
            company: command.company,
            location: command.location,
            from: command.from,
            to: command.to,
            current: command.current,
            description: command.description,
        }
    }
}

/// Education entry sub-document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    pub current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<AddEducationCommand> for Education {
    fn from(command: AddEducationCommand) -> Self {
        Self {
            id: Uuid::new_v4(),
            school: command.school,
            degree: command.degree,
            field_of_study: command.field_of_study,
            from: command.from,
            to: command.to,
            current: command.current,
            description: command.description,
        }
    }
}

/// Command to create or update a user's profile.
#[derive(Debug, Clone)]
pub struct UpsertProfileCommand {
    pub status: String,
    pub skills: Vec<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub social: SocialLinks,
}

/// Command to add a work experience entry.
#[derive(Debug, Clone)]
pub struct AddExperienceCommand {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

/// Command to add an education entry.
#[derive(Debug, Clone)]
pub struct AddEducationCommand {
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

/// A profile joined with the owning user's public fields (name, avatar).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileWithOwner {
    pub profile: Profile,
    pub owner: ProfileOwner,
}

/// Public fields of the user owning a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileOwner {
    pub name: String,
    pub avatar: Option<String>,
}
