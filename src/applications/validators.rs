// src/applications/validators.rs

use super::models::*;
use crate::common::{ValidationResult, Validator};

const MAX_COVER_LETTER_LEN: usize = 10_000;
const MAX_NOTES_LEN: usize = 5_000;
const MAX_CUSTOM_ANSWERS: usize = 50;

fn check_draft_fields(
    result: &mut ValidationResult,
    cover_letter: Option<&String>,
    notes: Option<&String>,
    custom_answers: Option<&std::collections::HashMap<String, String>>,
) {
    if cover_letter.is_some_and(|c| c.len() > MAX_COVER_LETTER_LEN) {
        result.add_error(
            "cover_letter",
            "Cover letter must be less than 10000 characters",
        );
    }

    if notes.is_some_and(|n| n.len() > MAX_NOTES_LEN) {
        result.add_error("notes", "Notes must be less than 5000 characters");
    }

    if let Some(answers) = custom_answers {
        if answers.len() > MAX_CUSTOM_ANSWERS {
            result.add_error("custom_answers", "At most 50 custom answers are allowed");
        }
        if answers.keys().any(|k| k.trim().is_empty()) {
            result.add_error("custom_answers", "Question keys cannot be empty");
        }
    }
}

pub struct CreateApplicationValidator;

impl Validator<CreateApplicationRequest> for CreateApplicationValidator {
    fn validate(&self, data: &CreateApplicationRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.job_id.trim().is_empty() {
            result.add_error("job_id", "Job ID is required");
        }

        check_draft_fields(
            &mut result,
            data.cover_letter.as_ref(),
            data.notes.as_ref(),
            data.custom_answers.as_ref(),
        );

        result
    }
}

pub struct UpdateApplicationValidator;

impl Validator<UpdateApplicationRequest> for UpdateApplicationValidator {
    fn validate(&self, data: &UpdateApplicationRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        check_draft_fields(
            &mut result,
            data.cover_letter.as_ref(),
            data.notes.as_ref(),
            data.custom_answers.as_ref(),
        );

        result
    }
}
