use sqlx::SqlitePool;
use tracing::info;

use super::models::{NewResume, Resume, RESUME_COLUMNS};
use crate::applications::store::StoreError;
use crate::common::now_rfc3339;

pub struct ResumesService {
    db: SqlitePool,
}

impl ResumesService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn list_resumes(&self, owner_id: &str) -> Result<Vec<Resume>, StoreError> {
        let resumes = sqlx::query_as::<_, Resume>(&format!(
            "SELECT {} FROM resumes WHERE user_id = ? ORDER BY created_at DESC, id DESC",
            RESUME_COLUMNS
        ))
        .bind(owner_id)
        .fetch_all(&self.db)
        .await?;
        Ok(resumes)
    }

    pub async fn get_owned(&self, owner_id: &str, resume_id: &str) -> Result<Resume, StoreError> {
        sqlx::query_as::<_, Resume>(&format!(
            "SELECT {} FROM resumes WHERE id = ? AND user_id = ?",
            RESUME_COLUMNS
        ))
        .bind(resume_id)
        .bind(owner_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or(StoreError::NotFound("Resume"))
    }

    pub async fn create_resume(&self, new: NewResume) -> Result<Resume, StoreError> {
        let now = now_rfc3339();
        let mut tx = self.db.begin().await?;

        if new.is_default {
            sqlx::query("UPDATE resumes SET is_default = 0, updated_at = ? WHERE user_id = ?")
                .bind(&now)
                .bind(&new.user_id)
                .execute(&mut *tx)
                .await?;
        }

        sqlx::query(
            r#"
            INSERT INTO resumes (id, user_id, name, file_url, file_key, mime_type, file_size, is_default, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&new.id)
        .bind(&new.user_id)
        .bind(&new.name)
        .bind(&new.file_url)
        .bind(&new.file_key)
        .bind(&new.mime_type)
        .bind(new.file_size)
        .bind(new.is_default)
        .bind(&now)
        .bind(&now)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(
            user_id = %new.user_id,
            resume_id = %new.id,
            file_size = new.file_size,
            "Resume created"
        );

        self.get_owned(&new.user_id, &new.id).await
    }

    /// Deletes the row and returns it so the caller can remove the stored object
    pub async fn delete_resume(&self, owner_id: &str, resume_id: &str) -> Result<Resume, StoreError> {
        let resume = self.get_owned(owner_id, resume_id).await?;

        sqlx::query("DELETE FROM resumes WHERE id = ? AND user_id = ?")
            .bind(resume_id)
            .bind(owner_id)
            .execute(&self.db)
            .await?;

        info!(user_id = %owner_id, resume_id = %resume_id, "Resume deleted");
        Ok(resume)
    }

    pub async fn set_default(&self, owner_id: &str, resume_id: &str) -> Result<Resume, StoreError> {
        self.get_owned(owner_id, resume_id).await?;

        // One statement so the owner never has two defaults
        sqlx::query(
            "UPDATE resumes SET is_default = (id = ?), updated_at = ? WHERE user_id = ?",
        )
        .bind(resume_id)
        .bind(now_rfc3339())
        .bind(owner_id)
        .execute(&self.db)
        .await?;

        self.get_owned(owner_id, resume_id).await
    }
}
