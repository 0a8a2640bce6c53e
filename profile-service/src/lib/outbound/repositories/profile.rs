use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::profile::models::Education;
use crate::domain::profile::models::Experience;
use crate::domain::profile::models::Profile;
use crate::domain::profile::models::ProfileId;
use crate::domain::profile::models::SocialLinks;
use crate::domain::user::models::UserId;
use crate::profile::errors::ProfileError;
use crate::profile::ports::ProfileRepository;

/// Postgres-backed profile store.
///
/// The aggregate's sub-documents live in JSONB columns, so a profile reads
/// and writes as a single row with no join fan-out.
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn db_err(e: impl std::fmt::Display) -> ProfileError {
    ProfileError::DatabaseError(e.to_string())
}

fn map_row(row: &PgRow) -> Result<Profile, ProfileError> {
    let skills: Json<Vec<String>> = row.try_get("skills").map_err(db_err)?;
    let social: Json<SocialLinks> = row.try_get("social").map_err(db_err)?;
    let experience: Json<Vec<Experience>> = row.try_get("experience").map_err(db_err)?;
    let education: Json<Vec<Education>> = row.try_get("education").map_err(db_err)?;

    Ok(Profile {
        id: ProfileId(row.try_get("id").map_err(db_err)?),
        user_id: UserId(row.try_get("user_id").map_err(db_err)?),
        status: row.try_get("status").map_err(db_err)?,
        skills: skills.0,
        company: row.try_get("company").map_err(db_err)?,
        website: row.try_get("website").map_err(db_err)?,
        location: row.try_get("location").map_err(db_err)?,
        bio: row.try_get("bio").map_err(db_err)?,
        github_username: row.try_get("github_username").map_err(db_err)?,
        social: social.0,
        experience: experience.0,
        education: education.0,
        updated_at: row.try_get("updated_at").map_err(db_err)?,
    })
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn upsert(&self, profile: Profile) -> Result<Profile, ProfileError> {
        sqlx::query(
            r#"
            INSERT INTO profiles (
                id, user_id, status, skills, company, website, location,
                bio, github_username, social, experience, education, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ON CONFLICT (user_id) DO UPDATE SET
                status = EXCLUDED.status,
                skills = EXCLUDED.skills,
                company = EXCLUDED.company,
                website = EXCLUDED.website,
                location = EXCLUDED.location,
                bio = EXCLUDED.bio,
                github_username = EXCLUDED.github_username,
                social = EXCLUDED.social,
                experience = EXCLUDED.experience,
                education = EXCLUDED.education,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(profile.id.0)
        .bind(profile.user_id.0)
        .bind(&profile.status)
        .bind(Json(&profile.skills))
        .bind(&profile.company)
        .bind(&profile.website)
        .bind(&profile.location)
        .bind(&profile.bio)
        .bind(&profile.github_username)
        .bind(Json(&profile.social))
        .bind(Json(&profile.experience))
        .bind(Json(&profile.education))
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(profile)
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Profile>, ProfileError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, status, skills, company, website, location,
                   bio, github_username, social, experience, education, updated_at
            FROM profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.as_ref().map(map_row).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Profile>, ProfileError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, status, skills, company, website, location,
                   bio, github_username, social, experience, education, updated_at
            FROM profiles
            ORDER BY updated_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.iter().map(map_row).collect()
    }

    async fn delete_by_user(&self, user_id: &UserId) -> Result<(), ProfileError> {
        // Absence is fine: deleting an account without a profile is a no-op here
        sqlx::query(
            r#"
            DELETE FROM profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.0)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(())
    }
}
