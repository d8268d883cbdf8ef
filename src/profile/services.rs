use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::SqlitePool;
use tracing::info;

use super::models::*;
use super::targets::{TargetError, TargetList};
use crate::applications::store::{OwnerProfile, ProfileStore, StoreError};
use crate::auth::models::User;
use crate::common::now_rfc3339;

pub struct ProfileService {
    db: SqlitePool,
}

#[derive(Debug, thiserror::Error)]
pub enum TargetUpdateError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Invalid(#[from] TargetError),
}

impl From<sqlx::Error> for TargetUpdateError {
    fn from(e: sqlx::Error) -> Self {
        TargetUpdateError::Store(e.into())
    }
}

impl ProfileService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    async fn find_row(&self, owner_id: &str) -> Result<Option<ProfileRow>, StoreError> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            "SELECT {} FROM profiles WHERE user_id = ?",
            PROFILE_COLUMNS
        ))
        .bind(owner_id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    pub async fn get_profile(&self, owner_id: &str) -> Result<Profile, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, name, created_at FROM users WHERE id = ?",
        )
        .bind(owner_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or(StoreError::NotFound("User"))?;

        let mut profile = Profile {
            user_id: user.id,
            email: user.email,
            name: user.name,
            ..Profile::default()
        };

        if let Some(row) = self.find_row(owner_id).await? {
            profile.phone = row.phone;
            profile.location = row.location;
            profile.headline = row.headline;
            profile.summary = row.summary;
            profile.linkedin_url = row.linkedin_url;
            profile.portfolio_url = row.portfolio_url;
            profile.github_url = row.github_url;
            profile.skills = row.skills.map(|j| j.0).unwrap_or_default();
            profile.experience = row.experience.map(|j| j.0).unwrap_or_default();
            profile.education = row.education.map(|j| j.0).unwrap_or_default();
            profile.target_companies = row.target_companies.map(|j| j.0).unwrap_or_default();
            profile.target_roles = row.target_roles.map(|j| j.0).unwrap_or_default();
            profile.updated_at = row.updated_at;
        }

        Ok(profile)
    }

    /// Upserts the profile row; only the fields present in `request` change
    pub async fn update_profile(
        &self,
        owner_id: &str,
        request: UpdateProfileRequest,
    ) -> Result<Profile, StoreError> {
        let now = now_rfc3339();
        let skills = request
            .skills
            .map(|s| s.into_iter().map(|s| s.trim().to_string()).collect::<Vec<_>>());

        let mut tx = self.db.begin().await?;

        if let Some(name) = &request.name {
            sqlx::query("UPDATE users SET name = ? WHERE id = ?")
                .bind(name.trim())
                .bind(owner_id)
                .execute(&mut *tx)
                .await?;
        }

        sqlx::query(
            r#"
            INSERT INTO profiles (
                user_id, phone, location, headline, summary, linkedin_url,
                portfolio_url, github_url, skills, experience, education, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(user_id) DO UPDATE SET
                phone = COALESCE(excluded.phone, phone),
                location = COALESCE(excluded.location, location),
                headline = COALESCE(excluded.headline, headline),
                summary = COALESCE(excluded.summary, summary),
                linkedin_url = COALESCE(excluded.linkedin_url, linkedin_url),
                portfolio_url = COALESCE(excluded.portfolio_url, portfolio_url),
                github_url = COALESCE(excluded.github_url, github_url),
                skills = COALESCE(excluded.skills, skills),
                experience = COALESCE(excluded.experience, experience),
                education = COALESCE(excluded.education, education),
                updated_at = excluded.updated_at
            "#,
        )
        .bind(owner_id)
        .bind(request.phone.as_deref())
        .bind(request.location.as_deref())
        .bind(request.headline.as_deref())
        .bind(request.summary.as_deref())
        .bind(request.linkedin_url.as_deref())
        .bind(request.portfolio_url.as_deref())
        .bind(request.github_url.as_deref())
        .bind(skills.map(Json))
        .bind(request.experience.map(Json))
        .bind(request.education.map(Json))
        .bind(&now)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(user_id = %owner_id, "Profile updated");
        self.get_profile(owner_id).await
    }

    pub async fn add_target(
        &self,
        owner_id: &str,
        kind: TargetKind,
        value: &str,
    ) -> Result<TargetListResponse, TargetUpdateError> {
        self.modify_targets(owner_id, kind, |list| list.add(value))
            .await
    }

    pub async fn remove_target(
        &self,
        owner_id: &str,
        kind: TargetKind,
        value: &str,
    ) -> Result<TargetListResponse, TargetUpdateError> {
        self.modify_targets(owner_id, kind, |list| list.remove(value))
            .await
    }

    /// Read-modify-write of one target list inside a transaction
    async fn modify_targets<F>(
        &self,
        owner_id: &str,
        kind: TargetKind,
        change: F,
    ) -> Result<TargetListResponse, TargetUpdateError>
    where
        F: FnOnce(&mut TargetList) -> Result<bool, TargetError>,
    {
        let column = kind.column();
        let mut tx = self.db.begin().await?;

        let stored: Option<Option<Json<Vec<String>>>> = sqlx::query_scalar(&format!(
            "SELECT {} FROM profiles WHERE user_id = ?",
            column
        ))
        .bind(owner_id)
        .fetch_optional(&mut *tx)
        .await?;

        let mut list = TargetList::new(stored.flatten().map(|j| j.0).unwrap_or_default());
        let changed = change(&mut list)?;

        if changed {
            sqlx::query(&format!(
                "INSERT INTO profiles (user_id, {col}, updated_at) VALUES (?, ?, ?) \
                 ON CONFLICT(user_id) DO UPDATE SET {col} = excluded.{col}, updated_at = excluded.updated_at",
                col = column
            ))
            .bind(owner_id)
            .bind(Json(list.as_slice()))
            .bind(now_rfc3339())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        info!(user_id = %owner_id, list = %column, changed = changed, "Target list updated");

        Ok(TargetListResponse {
            kind,
            items: list.into_vec(),
            changed,
        })
    }
}

#[async_trait]
impl ProfileStore for ProfileService {
    async fn owner_profile(&self, owner_id: &str) -> Result<Option<OwnerProfile>, StoreError> {
        let name: Option<Option<String>> =
            sqlx::query_scalar("SELECT name FROM users WHERE id = ?")
                .bind(owner_id)
                .fetch_optional(&self.db)
                .await?;

        let Some(name) = name else {
            return Ok(None);
        };

        let skills: Option<Option<Json<Vec<String>>>> =
            sqlx::query_scalar("SELECT skills FROM profiles WHERE user_id = ?")
                .bind(owner_id)
                .fetch_optional(&self.db)
                .await?;

        Ok(Some(OwnerProfile {
            name,
            skills: skills.flatten().map(|j| j.0).unwrap_or_default(),
        }))
    }
}

impl From<TargetUpdateError> for crate::common::ApiError {
    fn from(e: TargetUpdateError) -> Self {
        match e {
            TargetUpdateError::Store(e) => e.into(),
            TargetUpdateError::Invalid(e) => crate::common::ApiError::ValidationError(e.to_string()),
        }
    }
}
