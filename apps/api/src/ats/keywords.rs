//! Keyword extraction: which catalog keywords a job description mentions.

use super::catalog::KeywordCatalog;

/// Scans `job_description` for every catalog keyword.
///
/// Matching is case-insensitive substring containment, so short keywords can
/// fire inside longer words. The result follows catalog order and holds each
/// keyword once.
pub fn extract_keywords(catalog: &KeywordCatalog, job_description: &str) -> Vec<String> {
    if job_description.trim().is_empty() {
        return vec![];
    }

    let haystack = job_description.to_lowercase();
    let mut keywords: Vec<String> = Vec::new();

    for keyword in catalog.keywords() {
        if haystack.contains(keyword) && !keywords.iter().any(|k| k == keyword) {
            keywords.push(keyword.to_string());
        }
    }

    keywords
}
