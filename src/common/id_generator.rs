// src/common/id_generator.rs
//! Crockford Base32 ID Generator
//!
//! Generates human-readable, prefixed IDs using Crockford Base32 encoding.
//! Format: PREFIX_XXXXXX (e.g., J_K7NP3X for jobs)
//!
//! The alphabet excludes I, L, O and U, so ids can be read aloud and typed
//! without ambiguity.

use rand::Rng;

/// Crockford Base32 alphabet (excludes I, L, O, U to avoid confusion)
const CROCKFORD_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Entity type prefixes for ID generation
#[derive(Debug, Clone, Copy)]
pub enum EntityPrefix {
    /// Job listing (J_)
    Job,
    /// Resume (R_)
    Resume,
    /// Application (A_)
    Application,
    /// Cover letter / application form template (T_)
    Template,
    /// Job board integration (B_)
    JobBoard,
}

impl EntityPrefix {
    /// Get the string prefix for this entity type
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityPrefix::Job => "J",
            EntityPrefix::Resume => "R",
            EntityPrefix::Application => "A",
            EntityPrefix::Template => "T",
            EntityPrefix::JobBoard => "B",
        }
    }
}

/// Generate a random Crockford Base32 string of specified length
fn generate_crockford_string(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..32);
            CROCKFORD_ALPHABET[idx] as char
        })
        .collect()
}

/// Generate a prefixed ID using Crockford Base32 encoding
///
/// Returns a string in format "PREFIX_XXXXXX" (e.g., "J_K7NP3X")
pub fn generate_id(prefix: EntityPrefix) -> String {
    format!("{}_{}", prefix.as_str(), generate_crockford_string(6))
}

// ============================================================================
// Convenience functions for each entity type
// ============================================================================

pub fn generate_job_id() -> String {
    generate_id(EntityPrefix::Job)
}

pub fn generate_resume_id() -> String {
    generate_id(EntityPrefix::Resume)
}

pub fn generate_application_id() -> String {
    generate_id(EntityPrefix::Application)
}

pub fn generate_template_id() -> String {
    generate_id(EntityPrefix::Template)
}

pub fn generate_job_board_id() -> String {
    generate_id(EntityPrefix::JobBoard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_id_format() {
        let job_id = generate_job_id();
        assert!(job_id.starts_with("J_"));
        assert_eq!(job_id.len(), 8); // "J_" + 6 chars

        let application_id = generate_application_id();
        assert!(application_id.starts_with("A_"));
        assert_eq!(application_id.len(), 8);
    }

    #[test]
    fn test_crockford_alphabet_only() {
        let id = generate_template_id();
        let random_part = &id[2..];

        for c in random_part.chars() {
            assert!(
                CROCKFORD_ALPHABET.contains(&(c as u8)),
                "Character '{}' not in Crockford alphabet",
                c
            );
        }
    }

    #[test]
    fn test_uniqueness() {
        let mut ids = HashSet::new();
        for _ in 0..1000 {
            let id = generate_application_id();
            assert!(ids.insert(id), "Duplicate ID generated");
        }
    }

    #[test]
    fn test_all_prefixes() {
        assert!(generate_job_id().starts_with("J_"));
        assert!(generate_resume_id().starts_with("R_"));
        assert!(generate_application_id().starts_with("A_"));
        assert!(generate_template_id().starts_with("T_"));
        assert!(generate_job_board_id().starts_with("B_"));
    }
}
