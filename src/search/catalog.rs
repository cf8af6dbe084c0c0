use crate::config::SearchSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query is shorter than the configured minimum; nothing is shown.
    TooShort,
    Matches {
        entries: Vec<CatalogEntry>,
        truncated: bool,
    },
}

/// A fixed list of selectable entries searched by case-insensitive
/// substring.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = labels
            .into_iter()
            .enumerate()
            .map(|(index, label)| CatalogEntry {
                id: index.to_string(),
                label: label.into(),
            })
            .collect();
        Self { entries }
    }

    /// One label per line; blank lines are skipped.
    pub fn load(path: &Path) -> io::Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(Self::from_labels(
            raw.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        ))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn lookup(&self, query: &str, settings: &SearchSettings) -> SearchOutcome {
        let query = query.trim();
        if query.chars().count() < settings.minimum_search_length {
            return SearchOutcome::TooShort;
        }

        let needle = query.to_lowercase();
        let mut entries = self
            .entries
            .iter()
            .filter(|entry| entry.label.to_lowercase().contains(&needle))
            .cloned()
            .collect::<Vec<_>>();

        let truncated = match settings.max_results {
            Some(max) if entries.len() > max => {
                entries.truncate(max);
                true
            }
            _ => false,
        };

        SearchOutcome::Matches { entries, truncated }
    }
}
