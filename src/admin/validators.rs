// src/admin/validators.rs

use super::models::*;
use crate::common::validation::check_optional_url;
use crate::common::{ValidationResult, Validator};

fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.len() <= 64
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !slug.starts_with('-')
        && !slug.ends_with('-')
}

pub struct CreateJobBoardValidator;

impl Validator<CreateJobBoardRequest> for CreateJobBoardValidator {
    fn validate(&self, data: &CreateJobBoardRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.name.trim().is_empty() {
            result.add_error("name", "Job board name is required");
        } else if data.name.len() > 255 {
            result.add_error("name", "Job board name must be less than 255 characters");
        }

        if !is_valid_slug(&data.slug) {
            result.add_error(
                "slug",
                "Slug must be lowercase letters, digits and inner hyphens",
            );
        }

        check_optional_url(&mut result, "logo_url", data.logo_url.as_deref());
        check_optional_url(&mut result, "website_url", data.website_url.as_deref());
        check_optional_url(&mut result, "api_endpoint", data.api_endpoint.as_deref());

        result
    }
}

pub struct UpdateJobBoardValidator;

impl Validator<UpdateJobBoardRequest> for UpdateJobBoardValidator {
    fn validate(&self, data: &UpdateJobBoardRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if let Some(name) = &data.name {
            if name.trim().is_empty() {
                result.add_error("name", "Job board name cannot be empty");
            }
        }

        check_optional_url(&mut result, "logo_url", data.logo_url.as_deref());
        check_optional_url(&mut result, "website_url", data.website_url.as_deref());
        check_optional_url(&mut result, "api_endpoint", data.api_endpoint.as_deref());

        result
    }
}
