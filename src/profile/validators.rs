// src/profile/validators.rs

use super::models::*;
use crate::common::validation::check_optional_url;
use crate::common::{ValidationResult, Validator};

pub struct UpdateProfileValidator;

impl Validator<UpdateProfileRequest> for UpdateProfileValidator {
    fn validate(&self, data: &UpdateProfileRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if let Some(name) = &data.name {
            if name.trim().is_empty() {
                result.add_error("name", "Name cannot be empty");
            } else if name.len() > 255 {
                result.add_error("name", "Name must be less than 255 characters");
            }
        }

        if let Some(headline) = &data.headline {
            if headline.len() > 255 {
                result.add_error("headline", "Headline must be less than 255 characters");
            }
        }

        if let Some(summary) = &data.summary {
            if summary.len() > 5000 {
                result.add_error("summary", "Summary must be less than 5000 characters");
            }
        }

        check_optional_url(&mut result, "linkedin_url", data.linkedin_url.as_deref());
        check_optional_url(&mut result, "portfolio_url", data.portfolio_url.as_deref());
        check_optional_url(&mut result, "github_url", data.github_url.as_deref());

        if let Some(skills) = &data.skills {
            if skills.len() > 100 {
                result.add_error("skills", "At most 100 skills are allowed");
            }
            if skills.iter().any(|s| s.trim().is_empty()) {
                result.add_error("skills", "Skills cannot be empty");
            }
        }

        if let Some(experience) = &data.experience {
            if experience
                .iter()
                .any(|e| e.title.trim().is_empty() || e.company.trim().is_empty())
            {
                result.add_error("experience", "Each entry needs a title and a company");
            }
        }

        if let Some(education) = &data.education {
            if education
                .iter()
                .any(|e| e.degree.trim().is_empty() || e.school.trim().is_empty())
            {
                result.add_error("education", "Each entry needs a degree and a school");
            }
        }

        result
    }
}
