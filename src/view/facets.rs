use std::collections::BTreeSet;
use tracing::{debug, warn};

use crate::record::FileRecord;

use super::filter::FilterState;

/// Label shown for records without an extension
pub const NO_EXTENSION_LABEL: &str = "no-ext";

/// One extension tag as presented to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facet {
    pub extension: String,
    pub active: bool,
}

impl Facet {
    pub fn label(&self) -> &str {
        facet_label(&self.extension)
    }
}

pub fn facet_label(extension: &str) -> &str {
    if extension.is_empty() {
        NO_EXTENSION_LABEL
    } else {
        extension
    }
}

/// Normalize user input ("TXT", ".txt", "no-ext") to a facet key
pub fn normalize_extension(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case(NO_EXTENSION_LABEL) || trimmed.is_empty() {
        return String::new();
    }

    let lower = trimmed.to_lowercase();
    if lower.starts_with('.') {
        lower
    } else {
        format!(".{}", lower)
    }
}

/// Tracks the extensions present in the imported set and which of them filter
#[derive(Debug, Clone, Default)]
pub struct FacetController {
    available: BTreeSet<String>,
    filter: FilterState,
}

impl FacetController {
    /// Replace the facet set from a fresh import and clear the filter
    pub fn reset(&mut self, records: &[FileRecord]) {
        self.available = distinct_extensions(records);
        self.filter = FilterState::default();
        debug!(facets = self.available.len(), "Facets rebuilt");
    }

    /// Recompute facets after names changed; active entries that vanished are dropped
    pub fn refresh(&mut self, records: &[FileRecord]) {
        self.available = distinct_extensions(records);
        let available = &self.available;
        self.filter
            .active_extensions
            .retain(|ext| available.contains(ext));
    }

    /// Flip membership of `extension` in the filter; returns whether it is now active
    pub fn toggle(&mut self, extension: &str) -> bool {
        let key = normalize_extension(extension);

        if !self.available.contains(&key) {
            warn!(extension = %facet_label(&key), "Toggling extension not present in imported files");
        }

        if self.filter.active_extensions.remove(&key) {
            false
        } else {
            self.filter.active_extensions.insert(key);
            true
        }
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// All facets in lexicographic order
    pub fn facets(&self) -> Vec<Facet> {
        self.available
            .iter()
            .map(|ext| Facet {
                extension: ext.clone(),
                active: self.filter.active_extensions.contains(ext),
            })
            .collect()
    }
}

fn distinct_extensions(records: &[FileRecord]) -> BTreeSet<String> {
    records.iter().map(|r| r.extension.clone()).collect()
}
