use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::SqlitePool;
use tracing::info;

use super::models::{CreateTemplateRequest, Template, TemplateType, UpdateTemplateRequest};
use super::render::extract_variables;
use crate::applications::store::{StoreError, TemplateStore};
use crate::common::{generate_template_id, now_rfc3339};

const TEMPLATE_COLUMNS: &str =
    "id, user_id, name, type, content, variables, is_default, created_at, updated_at";

pub struct TemplatesService {
    db: SqlitePool,
}

impl TemplatesService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn list_templates(
        &self,
        owner_id: &str,
        template_type: Option<TemplateType>,
    ) -> Result<Vec<Template>, StoreError> {
        let templates = match template_type {
            Some(t) => {
                sqlx::query_as::<_, Template>(&format!(
                    "SELECT {} FROM templates WHERE user_id = ? AND type = ? \
                     ORDER BY is_default DESC, created_at DESC",
                    TEMPLATE_COLUMNS
                ))
                .bind(owner_id)
                .bind(t)
                .fetch_all(&self.db)
                .await?
            }
            None => {
                sqlx::query_as::<_, Template>(&format!(
                    "SELECT {} FROM templates WHERE user_id = ? \
                     ORDER BY is_default DESC, created_at DESC",
                    TEMPLATE_COLUMNS
                ))
                .bind(owner_id)
                .fetch_all(&self.db)
                .await?
            }
        };

        Ok(templates)
    }

    /// A template owned by `owner_id`; other owners' templates are reported as missing
    pub async fn get_owned(&self, owner_id: &str, template_id: &str) -> Result<Template, StoreError> {
        match self.get_template(template_id).await? {
            Some(t) if t.user_id == owner_id => Ok(t),
            _ => Err(StoreError::NotFound("Template")),
        }
    }

    pub async fn create_template(
        &self,
        owner_id: &str,
        request: CreateTemplateRequest,
    ) -> Result<Template, StoreError> {
        let id = generate_template_id();
        let now = now_rfc3339();
        let variables = request
            .variables
            .unwrap_or_else(|| extract_variables(&request.content));

        let mut tx = self.db.begin().await?;

        if request.is_default {
            clear_defaults(&mut tx, owner_id, request.template_type, &now).await?;
        }

        sqlx::query(
            r#"
            INSERT INTO templates (id, user_id, name, type, content, variables, is_default, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(owner_id)
        .bind(request.name.trim())
        .bind(request.template_type)
        .bind(&request.content)
        .bind(Json(&variables))
        .bind(request.is_default)
        .bind(&now)
        .bind(&now)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(user_id = %owner_id, template_id = %id, "Template created");
        self.get_owned(owner_id, &id).await
    }

    pub async fn update_template(
        &self,
        owner_id: &str,
        template_id: &str,
        request: UpdateTemplateRequest,
    ) -> Result<Template, StoreError> {
        let existing = self.get_owned(owner_id, template_id).await?;
        let now = now_rfc3339();

        // New content without explicit variables re-derives them
        let variables = match (&request.variables, &request.content) {
            (Some(v), _) => v.clone(),
            (None, Some(content)) => extract_variables(content),
            (None, None) => existing.variables.map(|v| v.0).unwrap_or_default(),
        };
        let content = request.content.unwrap_or(existing.content);
        let name = request
            .name
            .map(|n| n.trim().to_string())
            .unwrap_or(existing.name);
        let is_default = request.is_default.unwrap_or(existing.is_default);

        let mut tx = self.db.begin().await?;

        if is_default && !existing.is_default {
            clear_defaults(&mut tx, owner_id, existing.template_type, &now).await?;
        }

        sqlx::query(
            r#"
            UPDATE templates
            SET name = ?, content = ?, variables = ?, is_default = ?, updated_at = ?
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(&name)
        .bind(&content)
        .bind(Json(&variables))
        .bind(is_default)
        .bind(&now)
        .bind(template_id)
        .bind(owner_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        self.get_owned(owner_id, template_id).await
    }

    pub async fn delete_template(&self, owner_id: &str, template_id: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM templates WHERE id = ? AND user_id = ?")
            .bind(template_id)
            .bind(owner_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound("Template"));
        }

        info!(user_id = %owner_id, template_id = %template_id, "Template deleted");
        Ok(())
    }
}

async fn clear_defaults(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    owner_id: &str,
    template_type: TemplateType,
    now: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE templates SET is_default = 0, updated_at = ? WHERE user_id = ? AND type = ? AND is_default = 1",
    )
    .bind(now)
    .bind(owner_id)
    .bind(template_type)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

#[async_trait]
impl TemplateStore for TemplatesService {
    async fn get_template(&self, template_id: &str) -> Result<Option<Template>, StoreError> {
        let template = sqlx::query_as::<_, Template>(&format!(
            "SELECT {} FROM templates WHERE id = ?",
            TEMPLATE_COLUMNS
        ))
        .bind(template_id)
        .fetch_optional(&self.db)
        .await?;
        Ok(template)
    }
}
