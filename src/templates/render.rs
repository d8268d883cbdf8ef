//! Placeholder substitution for templates.
//!
//! Placeholders look like `{{name}}`. Only `name`, `company`, `position` and
//! `skills` have values; any other placeholder is kept as written.

use regex::{Captures, Regex};
use std::sync::OnceLock;

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| {
        Regex::new(r"\{\{([A-Za-z_][A-Za-z0-9_]*)\}\}").unwrap_or_else(|e| {
            unreachable!("placeholder pattern is a valid literal: {}", e)
        })
    })
}

/// Values available to a template for one (applicant, job) pair
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub name: String,
    pub company: String,
    pub position: String,
    pub skills: Vec<String>,
}

impl RenderContext {
    fn value_of(&self, variable: &str) -> Option<String> {
        match variable {
            "name" => Some(self.name.clone()),
            "company" => Some(self.company.clone()),
            "position" => Some(self.position.clone()),
            "skills" => Some(self.skills.join(", ")),
            _ => None,
        }
    }
}

pub fn render_template(content: &str, context: &RenderContext) -> String {
    placeholder_regex()
        .replace_all(content, |caps: &Captures| {
            context
                .value_of(&caps[1])
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Distinct placeholder names in order of first appearance
pub fn extract_variables(content: &str) -> Vec<String> {
    let mut variables: Vec<String> = Vec::new();
    for caps in placeholder_regex().captures_iter(content) {
        let name = &caps[1];
        if !variables.iter().any(|v| v == name) {
            variables.push(name.to_string());
        }
    }
    variables
}
