use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::record::FileRecord;

/// Extensions currently included by the filter; empty means everything passes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub active_extensions: BTreeSet<String>,
}

impl FilterState {
    pub fn matches(&self, record: &FileRecord) -> bool {
        self.active_extensions.is_empty() || self.active_extensions.contains(&record.extension)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SortField {
    Name,
    Time,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: SortField,
    pub descending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: SortField::Name,
            descending: false,
        }
    }
}

impl SortState {
    pub fn new(field: SortField, descending: bool) -> Self {
        Self { field, descending }
    }

    /// Header-click semantics: same field flips direction, a new field starts ascending
    pub fn select(&mut self, field: SortField) {
        if self.field == field {
            self.descending = !self.descending;
        } else {
            self.field = field;
            self.descending = false;
        }
    }

    pub fn compare(&self, a: &FileRecord, b: &FileRecord) -> Ordering {
        let ordering = match self.field {
            // Ordinal byte order, no locale folding
            SortField::Name => a.name.cmp(&b.name),
            SortField::Time => a.modified.cmp(&b.modified),
        };

        if self.descending {
            ordering.reverse()
        } else {
            ordering
        }
    }

    pub fn description(&self) -> String {
        let field = match self.field {
            SortField::Name => "name",
            SortField::Time => "time",
        };
        let direction = if self.descending { "desc" } else { "asc" };
        format!("{} {}", field, direction)
    }
}

/// Filter then sort. The sort is stable, so ties keep import order.
pub fn apply(records: &[FileRecord], filter: &FilterState, sort: &SortState) -> Vec<FileRecord> {
    let mut result: Vec<FileRecord> = records
        .iter()
        .filter(|r| filter.matches(r))
        .cloned()
        .collect();

    result.sort_by(|a, b| sort.compare(a, b));

    result
}
