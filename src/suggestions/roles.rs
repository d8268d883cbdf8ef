//! Job-role search: abbreviation expansion and relevance ranking

use super::engine::{LocalSource, MAX_SUGGESTIONS, MIN_QUERY_LEN};

/// Common abbreviations in role titles and the phrases they stand for
const ABBREVIATIONS: &[(&str, &[&str])] = &[
    ("dev", &["developer", "development"]),
    ("eng", &["engineer", "engineering"]),
    ("mgr", &["manager", "management"]),
    ("sr", &["senior"]),
    ("jr", &["junior"]),
    ("swe", &["software engineer"]),
    ("sde", &["software development engineer"]),
    ("pm", &["product manager", "project manager", "program manager"]),
    ("ux", &["user experience", "ux designer", "ux researcher"]),
    ("ui", &["user interface", "ui designer"]),
    ("qa", &["quality assurance", "qa engineer", "qa analyst"]),
    ("ml", &["machine learning", "ml engineer"]),
    ("ai", &["artificial intelligence", "ai engineer"]),
    ("fe", &["frontend", "front-end", "front end"]),
    ("be", &["backend", "back-end", "back end"]),
    ("fs", &["full stack", "fullstack", "full-stack"]),
    ("devops", &["dev ops", "development operations"]),
    ("sre", &["site reliability engineer", "site reliability"]),
    ("tpm", &["technical program manager"]),
    ("em", &["engineering manager"]),
    ("vp", &["vice president"]),
    ("cto", &["chief technology officer"]),
    ("ceo", &["chief executive officer"]),
    ("cfo", &["chief financial officer"]),
    ("coo", &["chief operating officer"]),
    ("hr", &["human resources"]),
    ("ops", &["operations"]),
    ("biz", &["business"]),
    ("mktg", &["marketing"]),
];

fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Widens a role query with the expansions of every abbreviation it equals
/// or contains. The normalized query itself is always the first entry.
pub fn expand_abbreviation(query: &str) -> Vec<String> {
    let normalized = normalize(query);
    let mut expansions = vec![normalized.clone()];

    for (abbreviation, phrases) in ABBREVIATIONS {
        if normalized.contains(abbreviation) {
            for phrase in *phrases {
                if !expansions.iter().any(|e| e == phrase) {
                    expansions.push(phrase.to_string());
                }
            }
        }
    }

    expansions
}

/// Orders candidates as exact match, then prefix match, then the rest.
/// Each tier is alphabetical, case-insensitive first with the raw string
/// breaking ties. At most `MAX_SUGGESTIONS` are returned.
pub fn rank_matches<I, S>(query: &str, candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let normalized = normalize(query);

    let mut keyed: Vec<(u8, String, String)> = candidates
        .into_iter()
        .map(|candidate| {
            let raw: String = candidate.into();
            let lower = raw.to_lowercase();
            let tier = if lower == normalized {
                0
            } else if lower.starts_with(&normalized) {
                1
            } else {
                2
            };
            (tier, lower, raw)
        })
        .collect();

    keyed.sort();

    keyed
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, _, raw)| raw)
        .collect()
}

/// Roles containing the query or any of its expansions, ranked
pub fn search_roles(query: &str, roles: &[&str]) -> Vec<String> {
    if query.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }

    let expansions = expand_abbreviation(query);
    let mut matches: Vec<&str> = Vec::new();

    for expansion in &expansions {
        for role in roles {
            if role.to_lowercase().contains(expansion.as_str()) && !matches.contains(role) {
                matches.push(role);
            }
        }
    }

    rank_matches(query, matches)
}

/// Role catalog as a suggestion source, with expansion and ranking
pub struct RoleCatalog<'a> {
    roles: &'a [&'a str],
}

impl<'a> RoleCatalog<'a> {
    pub fn new(roles: &'a [&'a str]) -> Self {
        Self { roles }
    }
}

impl LocalSource for RoleCatalog<'_> {
    fn matches(&self, normalized_query: &str) -> Vec<String> {
        search_roles(normalized_query, self.roles)
    }
}
