// src/resumes/validators.rs

use super::models::UploadResumeRequest;
use crate::common::{ValidationResult, Validator};

pub const MAX_RESUME_BYTES: usize = 10 * 1024 * 1024;

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOC: &str = "application/msword";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

pub struct UploadResumeValidator;

impl Validator<UploadResumeRequest> for UploadResumeValidator {
    fn validate(&self, data: &UploadResumeRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.name.trim().is_empty() {
            result.add_error("name", "Resume name is required");
        } else if data.name.len() > 255 {
            result.add_error("name", "Resume name must be less than 255 characters");
        }

        if data.file_data.trim().is_empty() {
            result.add_error("file_data", "File data is required");
        }

        if let Some(mime) = &data.mime_type {
            if extension_for(mime).is_none() {
                result.add_error("mime_type", "Only PDF, DOC and DOCX files are allowed");
            }
        }

        result
    }
}

/// File extension for an accepted resume MIME type
pub fn extension_for(mime: &str) -> Option<&'static str> {
    match mime {
        MIME_PDF => Some("pdf"),
        MIME_DOC => Some("doc"),
        MIME_DOCX => Some("docx"),
        _ => None,
    }
}

/// Sniffs the decoded bytes and returns the accepted MIME type and extension.
///
/// Declared and sniffed types must agree when both are known.
pub fn check_resume_file(
    bytes: &[u8],
    declared: Option<&str>,
) -> Result<(&'static str, &'static str), String> {
    if bytes.is_empty() {
        return Err("File is empty".to_string());
    }
    if bytes.len() > MAX_RESUME_BYTES {
        return Err("File must be at most 10 MB".to_string());
    }

    let sniffed = infer::get(bytes)
        .map(|kind| kind.mime_type())
        .ok_or_else(|| "Unrecognized file type. Upload a PDF, DOC or DOCX file".to_string())?;

    let (mime, ext) = match sniffed {
        MIME_PDF => (MIME_PDF, "pdf"),
        MIME_DOC => (MIME_DOC, "doc"),
        MIME_DOCX => (MIME_DOCX, "docx"),
        other => {
            return Err(format!(
                "Only PDF, DOC and DOCX files are allowed, got {}",
                other
            ))
        }
    };

    if let Some(declared) = declared {
        if declared != mime {
            return Err(format!(
                "Declared type {} does not match file content ({})",
                declared, mime
            ));
        }
    }

    Ok((mime, ext))
}
