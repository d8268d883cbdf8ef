use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(FromRow, Serialize, Debug, Clone)]
pub struct Resume {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub file_url: String,
    #[serde(skip_serializing)]
    pub file_key: String,
    pub mime_type: Option<String>,
    pub file_size: Option<i64>,
    pub is_default: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

pub const RESUME_COLUMNS: &str =
    "id, user_id, name, file_url, file_key, mime_type, file_size, is_default, created_at, updated_at";

/// Upload body; `file_data` is the base64-encoded file
#[derive(Debug, Deserialize)]
pub struct UploadResumeRequest {
    pub name: String,
    pub file_data: String,
    /// Declared type, checked against the sniffed content
    pub mime_type: Option<String>,
    #[serde(default)]
    pub is_default: bool,
}

/// Insert payload once the file has been stored
#[derive(Debug, Clone)]
pub struct NewResume {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub file_url: String,
    pub file_key: String,
    pub mime_type: String,
    pub file_size: i64,
    pub is_default: bool,
}
