// src/templates/validators.rs

use super::models::*;
use crate::common::{ValidationResult, Validator};

const MAX_CONTENT_LEN: usize = 20_000;

fn check_name(result: &mut ValidationResult, name: &str) {
    if name.trim().is_empty() {
        result.add_error("name", "Template name is required");
    } else if name.len() > 255 {
        result.add_error("name", "Template name must be less than 255 characters");
    }
}

fn check_content(result: &mut ValidationResult, content: &str) {
    if content.trim().is_empty() {
        result.add_error("content", "Template content is required");
    } else if content.len() > MAX_CONTENT_LEN {
        result.add_error("content", "Template content must be less than 20000 characters");
    }
}

pub struct CreateTemplateValidator;

impl Validator<CreateTemplateRequest> for CreateTemplateValidator {
    fn validate(&self, data: &CreateTemplateRequest) -> ValidationResult {
        let mut result = ValidationResult::new();
        check_name(&mut result, &data.name);
        check_content(&mut result, &data.content);
        result
    }
}

pub struct UpdateTemplateValidator;

impl Validator<UpdateTemplateRequest> for UpdateTemplateValidator {
    fn validate(&self, data: &UpdateTemplateRequest) -> ValidationResult {
        let mut result = ValidationResult::new();
        if let Some(name) = &data.name {
            check_name(&mut result, name);
        }
        if let Some(content) = &data.content {
            check_content(&mut result, content);
        }
        result
    }
}
