use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum TemplateType {
    CoverLetter,
    ApplicationForm,
}

#[derive(FromRow, Serialize, Debug, Clone)]
pub struct Template {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub template_type: TemplateType,
    pub content: String,
    pub variables: Option<Json<Vec<String>>>,
    pub is_default: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTemplateRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub template_type: TemplateType,
    pub content: String,
    /// Derived from the content's placeholders when omitted
    pub variables: Option<Vec<String>>,
    #[serde(default)]
    pub is_default: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateTemplateRequest {
    pub name: Option<String>,
    pub content: Option<String>,
    pub variables: Option<Vec<String>>,
    pub is_default: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct TemplateListParams {
    #[serde(rename = "type")]
    pub template_type: Option<TemplateType>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Friendly,
    Enthusiastic,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Friendly => "friendly",
            Tone::Enthusiastic => "enthusiastic",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateCoverLetterRequest {
    pub job_id: String,
    pub tone: Option<Tone>,
}

#[derive(Debug, Deserialize)]
pub struct PreviewTemplateRequest {
    pub job_id: String,
}

/// Body of both the generate and preview endpoints
#[derive(Debug, Serialize)]
pub struct ContentResponse {
    pub content: String,
}
