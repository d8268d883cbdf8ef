// src/jobs/validators.rs

use super::models::*;
use crate::common::{ValidationResult, Validator};

pub const DEFAULT_PAGE_SIZE: i64 = 20;
pub const MAX_PAGE_SIZE: i64 = 100;

pub struct JobFiltersValidator;

impl Validator<JobFilters> for JobFiltersValidator {
    fn validate(&self, data: &JobFilters) -> ValidationResult {
        let mut result = ValidationResult::new();

        if let Some(limit) = data.limit {
            if !(1..=MAX_PAGE_SIZE).contains(&limit) {
                result.add_error("limit", "Limit must be between 1 and 100");
            }
        }

        if let Some(offset) = data.offset {
            if offset < 0 {
                result.add_error("offset", "Offset cannot be negative");
            }
        }

        if let (Some(min), Some(max)) = (data.salary_min, data.salary_max) {
            if min > max {
                result.add_error(
                    "salary_range",
                    "Minimum salary cannot be greater than maximum salary",
                );
            }
        }

        if let Some(search) = &data.search {
            if search.len() > 200 {
                result.add_error("search", "Search must be less than 200 characters");
            }
        }

        result
    }
}

pub struct NewJobValidator;

impl Validator<NewJob> for NewJobValidator {
    fn validate(&self, data: &NewJob) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.title.trim().is_empty() {
            result.add_error("title", "Job title is required");
        } else if data.title.len() > 255 {
            result.add_error("title", "Job title must be less than 255 characters");
        }

        if data.company.trim().is_empty() {
            result.add_error("company", "Company is required");
        }

        if let (Some(min), Some(max)) = (data.salary_min, data.salary_max) {
            if min < 0 || max < 0 {
                result.add_error("salary_range", "Salary cannot be negative");
            }
            if min > max {
                result.add_error(
                    "salary_range",
                    "Minimum salary cannot be greater than maximum salary",
                );
            }
        }

        crate::common::validation::check_optional_url(
            &mut result,
            "application_url",
            data.application_url.as_deref(),
        );

        result
    }
}
