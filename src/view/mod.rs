mod facets;
mod filter;
mod pagination;

pub use facets::{facet_label, normalize_extension, Facet, FacetController, NO_EXTENSION_LABEL};
pub use filter::{apply, FilterState, SortField, SortState};
pub use pagination::{page, page_count, Pagination, DEFAULT_PAGE_SIZE};

use serde::Serialize;

use crate::record::FileRecord;
use crate::rename::{compute_new_name, validate_file_name, RenameMode};

/// One table row: current name, previewed name and modification time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewRow {
    pub name: String,
    pub new_name: String,
    pub modified: String,
    /// Whether the new name differs from the current one
    pub changed: bool,
    /// Set when the new name would be refused by the filesystem capability
    pub invalid: Option<String>,
}

impl PreviewRow {
    pub fn build(record: &FileRecord, mode: &RenameMode) -> Self {
        let new_name = compute_new_name(&record.name, mode);
        let changed = new_name != record.name;
        let invalid = if changed {
            validate_file_name(&new_name).err().map(|e| e.to_string())
        } else {
            None
        };

        Self {
            name: record.name.clone(),
            new_name,
            modified: record.modified_display(),
            changed,
            invalid,
        }
    }
}

/// Everything the presentation layer needs to draw one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub rows: Vec<PreviewRow>,
    pub page: usize,
    pub page_count: usize,
    /// Records imported
    pub total: usize,
    /// Records passing the filter
    pub filtered: usize,
}

impl PageView {
    pub fn is_imported(&self) -> bool {
        self.total > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_preview_row_unchanged() {
        let record = FileRecord::new(PathBuf::from("/f/a.txt"), "a.txt".to_string(), 0);
        let row = PreviewRow::build(&record, &RenameMode::default());

        assert_eq!(row.new_name, "a.txt");
        assert!(!row.changed);
        assert!(row.invalid.is_none());
    }

    #[test]
    fn test_preview_row_flags_invalid_name() {
        let record = FileRecord::new(PathBuf::from("/f/a.txt"), "a.txt".to_string(), 0);
        let row = PreviewRow::build(&record, &RenameMode::Prefix("x:".to_string()));

        assert_eq!(row.new_name, "x:a.txt");
        assert!(row.changed);
        assert!(row.invalid.unwrap().contains("':'"));
    }
}
