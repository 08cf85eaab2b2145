//! Substring search over the catalog snapshot
//!
//! A linear scan in traversal order with no relevance scoring: industries
//! before products, actions before topics before agents, file names in map
//! order. A record is matched against its title (file name with underscores
//! as spaces), its description and its source file path.

use serde::Serialize;

use crate::domain::{AppData, AssetType, Category};

/// One matching asset with a navigable URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub title: String,
    pub category: Category,
    pub category_name: String,
    pub asset_type: AssetType,
    pub file_name: String,
    pub description: String,
    pub url: String,
}

/// Case-insensitive substring search; a blank term matches nothing
pub fn search_assets(data: &AppData, term: &str) -> Vec<SearchResult> {
    if term.trim().is_empty() {
        return Vec::new();
    }
    let term = term.to_lowercase();

    data.entries()
        .filter_map(|entry| {
            let location = entry.location();
            let title = location.title();
            let description = entry.record.description.clone().unwrap_or_default();
            let source_file = entry.record.source_file().unwrap_or_default();

            let matches = title.to_lowercase().contains(&term)
                || description.to_lowercase().contains(&term)
                || source_file.to_lowercase().contains(&term);
            if !matches {
                return None;
            }

            Some(SearchResult {
                title,
                url: location.url(),
                category: location.category,
                category_name: location.category_name,
                asset_type: location.asset_type,
                file_name: location.file_name,
                description,
            })
        })
        .collect()
}

/// Search state owned by whoever drives the search (a command, a request)
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    term: String,
    results: Vec<SearchResult>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the term and rerun the search against `data`
    pub fn set_term(&mut self, data: &AppData, term: &str) {
        self.term = term.to_string();
        self.results = search_assets(data, term);
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    /// Active whenever the term has non-whitespace content, even with no results
    pub fn is_active(&self) -> bool {
        !self.term.trim().is_empty()
    }
}

/// Capitalize every word: first letter upper, rest lower
pub fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphanumeric() || c == '_' {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// Display form of titles and category names: camelCase split, words capitalized
pub fn to_sentence_case(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut spaced = String::with_capacity(text.len() + 4);
    let mut prev: Option<char> = None;
    for c in text.chars() {
        if let Some(p) = prev {
            if p.is_ascii_lowercase() && c.is_ascii_uppercase() {
                spaced.push(' ');
            }
        }
        spaced.push(c);
        prev = Some(c);
    }
    capitalize_words(&spaced)
}
