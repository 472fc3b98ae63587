//! Application state for one renaming session.
//!
//! Every user intent (import, facet toggle, sort header, page navigation,
//! mode edit, batch commit) is a method here. The derived filtered/sorted
//! list is recomputed eagerly after each intent that can change it, and the
//! page is reset to 1 whenever that happens.

use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

use crate::record::FileRecord;
use crate::rename::{ExecutionReport, RenameMode};
use crate::view::{
    self, page, page_count, Facet, FacetController, PageView, Pagination, PreviewRow, SortField,
    SortState,
};

#[derive(Debug, Clone, Default)]
pub struct AppState {
    records: Vec<FileRecord>,
    filtered: Vec<FileRecord>,
    facets: FacetController,
    sort: SortState,
    pagination: Pagination,
    mode: RenameMode,
}

impl AppState {
    pub fn new(page_size: usize) -> Self {
        Self {
            pagination: Pagination::new(page_size),
            ..Self::default()
        }
    }

    /// Replace the whole record set; facets are rebuilt and the filter cleared
    pub fn import(&mut self, records: Vec<FileRecord>) {
        debug!(count = records.len(), "Importing records");
        self.records = records;
        self.facets.reset(&self.records);
        self.refilter();
    }

    pub fn toggle_extension(&mut self, extension: &str) -> bool {
        let active = self.facets.toggle(extension);
        self.refilter();
        active
    }

    /// Sort-header click
    pub fn select_sort(&mut self, field: SortField) {
        self.sort.select(field);
        self.refilter();
    }

    pub fn set_sort(&mut self, sort: SortState) {
        self.sort = sort;
        self.refilter();
    }

    pub fn set_mode(&mut self, mode: RenameMode) {
        self.mode = mode;
    }

    pub fn next_page(&mut self) -> bool {
        self.pagination.next(self.filtered.len())
    }

    pub fn prev_page(&mut self) -> bool {
        self.pagination.prev()
    }

    pub fn go_to_page(&mut self, page_number: usize) -> usize {
        self.pagination.go_to(page_number, self.filtered.len())
    }

    pub fn mode(&self) -> &RenameMode {
        &self.mode
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn filtered(&self) -> &[FileRecord] {
        &self.filtered
    }

    pub fn facets(&self) -> Vec<Facet> {
        self.facets.facets()
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current()
    }

    pub fn page_count(&self) -> usize {
        page_count(self.filtered.len(), self.pagination.page_size())
    }

    /// Copy of the filtered/sorted list, as handed to a batch run
    pub fn snapshot(&self) -> Vec<FileRecord> {
        self.filtered.clone()
    }

    /// Preview rows for the whole filtered list
    pub fn preview_all(&self) -> Vec<PreviewRow> {
        self.filtered
            .iter()
            .map(|r| PreviewRow::build(r, &self.mode))
            .collect()
    }

    /// Derive the current page with name previews
    pub fn view(&self) -> PageView {
        let rows = page(
            &self.filtered,
            self.pagination.current(),
            self.pagination.page_size(),
        )
        .iter()
        .map(|r| PreviewRow::build(r, &self.mode))
        .collect();

        PageView {
            rows,
            page: self.pagination.current(),
            page_count: self.page_count(),
            total: self.records.len(),
            filtered: self.filtered.len(),
        }
    }

    /// Fold the successful renames of a batch back into the record set
    pub fn commit(&mut self, report: &ExecutionReport) {
        if report.renamed.is_empty() {
            return;
        }

        let by_source: HashMap<&PathBuf, (&PathBuf, &String)> = report
            .renamed
            .iter()
            .map(|r| (&r.source_path, (&r.destination_path, &r.to)))
            .collect();

        for record in &mut self.records {
            if let Some((path, name)) = by_source.get(&record.path) {
                record.commit_rename((*path).clone(), (*name).clone());
            }
        }

        debug!(renamed = report.renamed.len(), "Committed renames");
        self.facets.refresh(&self.records);
        self.refilter();
    }

    fn refilter(&mut self) {
        self.filtered = view::apply(&self.records, self.facets.filter(), &self.sort);
        self.pagination.reset();
    }
}
