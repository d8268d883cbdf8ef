//! Suggestion engine: local match, conditional remote augmentation, dedupe and cap

use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, warn};

use super::remote::RemoteLookup;

/// Queries shorter than this (after trimming) produce no suggestions
pub const MIN_QUERY_LEN: usize = 2;
pub const MAX_SUGGESTIONS: usize = 10;
/// The remote lookup is consulted only when local matches are fewer than this
pub const REMOTE_AUGMENT_THRESHOLD: usize = 5;

/// A source of local candidates for an already-normalized query
pub trait LocalSource: Send + Sync {
    fn matches(&self, normalized_query: &str) -> Vec<String>;
}

/// Plain static list: case-insensitive substring filter, list order kept
pub struct StaticList<'a>(pub &'a [&'a str]);

impl LocalSource for StaticList<'_> {
    fn matches(&self, normalized_query: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|candidate| candidate.to_lowercase().contains(normalized_query))
            .map(|candidate| candidate.to_string())
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct SuggestionQuery {
    raw: String,
    normalized: String,
}

impl SuggestionQuery {
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            normalized: raw.trim().to_lowercase(),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn is_searchable(&self) -> bool {
        self.normalized.chars().count() >= MIN_QUERY_LEN
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Suggestions {
    /// Whether there is anything to show
    pub open: bool,
    pub suggestions: Vec<String>,
    /// True when the remote lookup contributed at least one entry
    pub augmented: bool,
}

impl Suggestions {
    pub fn closed() -> Self {
        Self::default()
    }

    fn from_list(suggestions: Vec<String>, augmented: bool) -> Self {
        Self {
            open: !suggestions.is_empty(),
            suggestions,
            augmented,
        }
    }
}

/// Appends `incoming` to `merged`, skipping case-insensitive duplicates,
/// until `merged` holds `MAX_SUGGESTIONS` entries. Returns how many were added.
fn merge_into(
    merged: &mut Vec<String>,
    seen: &mut HashSet<String>,
    incoming: impl IntoIterator<Item = String>,
) -> usize {
    let mut added = 0;
    for candidate in incoming {
        if merged.len() >= MAX_SUGGESTIONS {
            break;
        }
        if seen.insert(candidate.to_lowercase()) {
            merged.push(candidate);
            added += 1;
        }
    }
    added
}

/// Runs one suggestion pass. Remote failures are logged and the local
/// matches are returned alone.
pub async fn suggest(
    query: &SuggestionQuery,
    local: &dyn LocalSource,
    remote: Option<&dyn RemoteLookup>,
) -> Suggestions {
    if !query.is_searchable() {
        return Suggestions::closed();
    }

    let local_matches = local.matches(query.normalized());
    let local_count = local_matches.len();

    let mut seen = HashSet::new();
    let mut merged = Vec::with_capacity(MAX_SUGGESTIONS);
    merge_into(&mut merged, &mut seen, local_matches);

    let mut augmented = false;
    if let Some(remote) = remote {
        if local_count < REMOTE_AUGMENT_THRESHOLD {
            match remote.lookup(query.raw()).await {
                Ok(remote_matches) => {
                    let added = merge_into(&mut merged, &mut seen, remote_matches);
                    augmented = added > 0;
                    debug!(
                        query = %query.normalized(),
                        local = local_count,
                        remote_added = added,
                        "Suggestions augmented from remote lookup"
                    );
                }
                Err(e) => {
                    warn!(
                        query = %query.normalized(),
                        error = %e,
                        "Remote suggestion lookup failed, using local results only"
                    );
                }
            }
        }
    }

    Suggestions::from_list(merged, augmented)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestions::remote::LookupError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedRemote {
        results: Vec<&'static str>,
        calls: AtomicUsize,
    }

    impl FixedRemote {
        fn new(results: Vec<&'static str>) -> Self {
            Self {
                results,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl RemoteLookup for FixedRemote {
        async fn lookup(&self, _query: &str) -> Result<Vec<String>, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.results.iter().map(|s| s.to_string()).collect())
        }
    }

    struct FailingRemote;

    #[async_trait]
    impl RemoteLookup for FailingRemote {
        async fn lookup(&self, _query: &str) -> Result<Vec<String>, LookupError> {
            Err(LookupError::Status(503))
        }
    }

    const COMPANIES: &[&str] = &["Acme", "Acme Labs", "Globex", "Initech", "Umbrella"];

    #[tokio::test]
    async fn test_short_query_is_closed() {
        let remote = FixedRemote::new(vec!["Acme Remote"]);
        for raw in ["", "a", " a ", "   "] {
            let result = suggest(
                &SuggestionQuery::new(raw),
                &StaticList(COMPANIES),
                Some(&remote),
            )
            .await;
            assert_eq!(result, Suggestions::closed());
        }
        assert_eq!(remote.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_local_match_is_case_insensitive_and_ordered() {
        let result = suggest(&SuggestionQuery::new(" ACM"), &StaticList(COMPANIES), None).await;
        assert!(result.open);
        assert_eq!(result.suggestions, vec!["Acme", "Acme Labs"]);
        assert!(!result.augmented);
    }

    #[tokio::test]
    async fn test_remote_merged_after_local_without_duplicates() {
        let remote = FixedRemote::new(vec!["acme", "Acme Corp", "Acme Labs"]);
        let result = suggest(
            &SuggestionQuery::new("acme"),
            &StaticList(COMPANIES),
            Some(&remote),
        )
        .await;

        assert_eq!(result.suggestions, vec!["Acme", "Acme Labs", "Acme Corp"]);
        assert!(result.augmented);
    }

    #[tokio::test]
    async fn test_local_spelling_wins_over_remote_casing() {
        let remote = FixedRemote::new(vec!["ACME", "Acme Corp"]);
        let result = suggest(
            &SuggestionQuery::new("acme"),
            &StaticList(&["Acme"]),
            Some(&remote),
        )
        .await;

        assert_eq!(result.suggestions, vec!["Acme", "Acme Corp"]);
    }

    #[tokio::test]
    async fn test_remote_skipped_when_local_is_sufficient() {
        let many: Vec<String> = (0..6).map(|i| format!("Acme {}", i)).collect();
        let many_refs: Vec<&str> = many.iter().map(String::as_str).collect();
        let remote = FixedRemote::new(vec!["Acme Remote"]);

        let result = suggest(
            &SuggestionQuery::new("acme"),
            &StaticList(&many_refs),
            Some(&remote),
        )
        .await;

        assert_eq!(result.suggestions.len(), 6);
        assert_eq!(remote.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_remote_failure_returns_local_only() {
        let result = suggest(
            &SuggestionQuery::new("glob"),
            &StaticList(COMPANIES),
            Some(&FailingRemote),
        )
        .await;

        assert_eq!(result.suggestions, vec!["Globex"]);
        assert!(result.open);
        assert!(!result.augmented);
    }

    #[tokio::test]
    async fn test_output_is_capped() {
        let remote = FixedRemote::new(vec![
            "Acme 1", "Acme 2", "Acme 3", "Acme 4", "Acme 5", "Acme 6", "Acme 7", "Acme 8",
            "Acme 9", "Acme 10", "Acme 11",
        ]);
        let result = suggest(
            &SuggestionQuery::new("acme"),
            &StaticList(COMPANIES),
            Some(&remote),
        )
        .await;

        assert_eq!(result.suggestions.len(), MAX_SUGGESTIONS);
        assert_eq!(&result.suggestions[..2], &["Acme", "Acme Labs"]);
    }

    #[tokio::test]
    async fn test_local_duplicates_collapse() {
        let list = ["Stripe", "stripe", "STRIPE", "Stripe Atlas"];
        let result = suggest(&SuggestionQuery::new("str"), &StaticList(&list), None).await;
        assert_eq!(result.suggestions, vec!["Stripe", "Stripe Atlas"]);

        let lowered: HashSet<String> = result.suggestions.iter().map(|s| s.to_lowercase()).collect();
        assert_eq!(lowered.len(), result.suggestions.len());
    }

    #[tokio::test]
    async fn test_no_match_is_closed() {
        let result = suggest(&SuggestionQuery::new("zzz"), &StaticList(COMPANIES), None).await;
        assert!(!result.open);
        assert!(result.suggestions.is_empty());
    }
}
