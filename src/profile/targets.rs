//! Target lists: the companies and roles a user has committed to

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    #[error("Target entry must not be empty")]
    Empty,

    #[error("Target entry must be at most {0} characters")]
    TooLong(usize),

    #[error("A target list holds at most {0} entries")]
    Full(usize),
}

pub const MAX_ENTRY_LEN: usize = 200;
pub const MAX_ENTRIES: usize = 100;

/// Insertion-ordered list with no exact duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetList(Vec<String>);

impl TargetList {
    pub fn new(items: Vec<String>) -> Self {
        let mut list = Self::default();
        for item in items {
            // stored lists may predate trimming; keep what is valid
            let _ = list.add(&item);
        }
        list
    }

    /// Returns false when the trimmed entry is already present
    pub fn add(&mut self, entry: &str) -> Result<bool, TargetError> {
        let entry = normalize(entry)?;
        if self.0.iter().any(|e| *e == entry) {
            return Ok(false);
        }
        if self.0.len() >= MAX_ENTRIES {
            return Err(TargetError::Full(MAX_ENTRIES));
        }
        self.0.push(entry);
        Ok(true)
    }

    /// Returns false when the trimmed entry was not present
    pub fn remove(&mut self, entry: &str) -> Result<bool, TargetError> {
        let entry = normalize(entry)?;
        let before = self.0.len();
        self.0.retain(|e| *e != entry);
        Ok(self.0.len() != before)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

fn normalize(entry: &str) -> Result<String, TargetError> {
    let entry = entry.trim();
    if entry.is_empty() {
        return Err(TargetError::Empty);
    }
    if entry.chars().count() > MAX_ENTRY_LEN {
        return Err(TargetError::TooLong(MAX_ENTRY_LEN));
    }
    Ok(entry.to_string())
}
