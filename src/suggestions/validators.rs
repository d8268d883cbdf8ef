use super::models::SuggestionParams;
use crate::common::{ValidationResult, Validator};

pub const MAX_QUERY_LEN: usize = 100;

pub struct SuggestionParamsValidator;

impl Validator<SuggestionParams> for SuggestionParamsValidator {
    fn validate(&self, data: &SuggestionParams) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.q.chars().count() > MAX_QUERY_LEN {
            result.add_error("q", "Query must not exceed 100 characters");
        }

        result
    }
}
