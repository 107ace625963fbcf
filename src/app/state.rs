//! Application state: the in-memory catalog and everything the UI needs.
//!
//! [`AppState`] is the single source of truth for rendering. The record list
//! is only mutated through the store operations below, and every mutation
//! re-applies the search filter so the cached view and the selection never
//! point past the end of the list.
//!
//! # State Components
//!
//! - **Records**: Catalog copy, newest first after a create
//! - **Query**: Normalized search text, plus the raw text being typed
//! - **Filtered view**: Indices of records matching the query
//! - **Selection**: Cursor within the filtered view; delete acts on it
//! - **Modes**: Input mode and the in-flight request state
//! - **Form**: Add-configuration form contents
//! - **Status**: Last error or success message

use super::form::FormState;
use super::modes::{InputMode, RequestState};
use crate::api::ApiClient;
use crate::domain::PcRecord;
use crate::ui::theme::Theme;

/// Tone of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Message shown under the summary line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Message text.
    pub text: String,
    /// Success or error tone.
    pub kind: StatusKind,
}

/// Aggregate figures over the whole catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    /// Number of records.
    pub count: usize,
    /// Summed RAM in GB.
    pub ram: u64,
    /// Summed storage in GB.
    pub storage: u64,
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Catalog records in display order.
    pub records: Vec<PcRecord>,

    /// Trimmed, lowercased search query. Empty means no filter.
    pub query: String,

    /// Search text exactly as typed.
    pub search_input: String,

    /// Indices into `records` that match `query`, in display order.
    filtered: Vec<usize>,

    /// Zero-based cursor within the filtered view.
    pub selected_index: usize,

    /// Where keystrokes go: list, search box or form.
    pub input_mode: InputMode,

    /// Request in flight, if any. Only one is allowed at a time.
    pub request_state: RequestState,

    /// Add-configuration form. Kept across open and close until a save succeeds.
    pub form: FormState,

    /// Message shown under the summary.
    pub status: Option<StatusMessage>,

    /// Builds the catalog requests.
    pub api: ApiClient,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates an empty state. Records arrive with the first list load.
    #[must_use]
    pub fn new(api: ApiClient, theme: Theme) -> Self {
        Self {
            records: Vec::new(),
            query: String::new(),
            search_input: String::new(),
            filtered: Vec::new(),
            selected_index: 0,
            input_mode: InputMode::Normal,
            request_state: RequestState::Idle,
            form: FormState::default(),
            status: None,
            api,
            theme,
        }
    }

    /// Replaces the whole catalog, e.g. after a list load.
    pub fn replace_all(&mut self, records: Vec<PcRecord>) {
        self.records = records;
        self.selected_index = 0;
        self.apply_search_filter();
    }

    /// Inserts a record at the front of the catalog.
    ///
    /// The selection moves to the new record when it is visible under the
    /// current filter; otherwise it stays on the record it was on.
    pub fn prepend(&mut self, record: PcRecord) {
        self.records.insert(0, record);
        self.apply_search_filter();
        if self.filtered.first() == Some(&0) {
            self.selected_index = 0;
        }
    }

    /// Removes the record with `id`. Returns whether anything was removed.
    pub fn remove_by_id(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        let removed = self.records.len() != before;
        if removed {
            self.apply_search_filter();
        }
        removed
    }

    /// Sets the search text and re-filters.
    ///
    /// The raw text is kept for the search bar; the query used for matching is
    /// trimmed and lowercased.
    pub fn set_query(&mut self, text: &str) {
        text.clone_into(&mut self.search_input);
        self.query = text.trim().to_lowercase();
        self.apply_search_filter();
    }

    /// Recomputes the filtered view and clamps the selection.
    pub fn apply_search_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_search_filter",
            total_records = self.records.len(),
            query_len = self.query.len()
        )
        .entered();

        self.filtered = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.matches(&self.query))
            .map(|(idx, _)| idx)
            .collect();

        if self.filtered.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.filtered.len() - 1);
        }

        tracing::trace!(filtered_count = self.filtered.len(), "search filter applied");
    }

    /// Records visible under the current query, in display order.
    pub fn filtered(&self) -> impl Iterator<Item = &PcRecord> + '_ {
        self.filtered.iter().filter_map(|&idx| self.records.get(idx))
    }

    /// Number of records visible under the current query.
    #[must_use]
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Count, RAM and storage summed over every record, filtered or not.
    #[must_use]
    pub fn totals(&self) -> Totals {
        self.records.iter().fold(Totals::default(), |acc, record| Totals {
            count: acc.count + 1,
            ram: acc.ram.saturating_add(record.ram),
            storage: acc.storage.saturating_add(record.storage),
        })
    }

    /// The record under the cursor, if any.
    #[must_use]
    pub fn selected_record(&self) -> Option<&PcRecord> {
        self.filtered
            .get(self.selected_index)
            .and_then(|&idx| self.records.get(idx))
    }

    /// Moves the cursor down, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.filtered.len();
    }

    /// Moves the cursor up, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.filtered.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind: StatusKind::Error,
        });
    }

    pub fn set_success(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind: StatusKind::Success,
        });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pc(id: &str, name: &str, cpu: &str, ram: u64, storage: u64) -> PcRecord {
        PcRecord {
            id: id.to_string(),
            name: name.to_string(),
            cpu: cpu.to_string(),
            ram,
            storage,
            purpose: "Work".to_string(),
            note: None,
            created_at: None,
        }
    }

    fn state() -> AppState {
        let mut state = AppState::new(ApiClient::default(), Theme::default());
        state.replace_all(vec![
            pc("a", "Ryzen Box", "Ryzen 5 5600", 8, 256),
            pc("b", "Laptop", "Intel i7", 16, 512),
            pc("c", "Server", "EPYC", 64, 4000),
        ]);
        state
    }

    #[test]
    fn totals_ignore_the_filter() {
        let mut state = state();
        state.set_query("laptop");
        assert_eq!(state.filtered_len(), 1);
        assert_eq!(
            state.totals(),
            Totals { count: 3, ram: 88, storage: 4768 }
        );
    }

    #[test]
    fn set_query_normalizes_but_keeps_raw_input() {
        let mut state = state();
        state.set_query("  RYZEN ");
        assert_eq!(state.query, "ryzen");
        assert_eq!(state.search_input, "  RYZEN ");
        let ids: Vec<&str> = state.filtered().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a"]);

        state.set_query("");
        assert_eq!(state.filtered_len(), 3);
    }

    #[test]
    fn prepend_puts_record_first_and_selects_it() {
        let mut state = state();
        state.move_selection_down();
        state.prepend(pc("d", "New", "M2", 24, 1000));
        assert_eq!(state.records[0].id, "d");
        assert_eq!(state.selected_record().map(|r| r.id.as_str()), Some("d"));
    }

    #[test]
    fn prepend_hidden_by_filter_keeps_cursor_on_same_record() {
        let mut state = state();
        state.set_query("work");
        state.move_selection_down();
        assert_eq!(state.selected_record().map(|r| r.id.as_str()), Some("b"));

        let mut hidden = pc("d", "New", "M2", 24, 1000);
        hidden.purpose = "Games".to_string();
        state.prepend(hidden);
        assert_eq!(state.selected_record().map(|r| r.id.as_str()), Some("b"));
    }

    #[test]
    fn remove_by_id_is_noop_for_unknown_id() {
        let mut state = state();
        assert!(!state.remove_by_id("zzz"));
        assert_eq!(state.records.len(), 3);
        assert!(state.remove_by_id("b"));
        assert_eq!(state.records.len(), 2);
    }

    #[test]
    fn selection_is_clamped_after_removal() {
        let mut state = state();
        state.move_selection_up();
        assert_eq!(state.selected_record().map(|r| r.id.as_str()), Some("c"));
        state.remove_by_id("c");
        assert_eq!(state.selected_record().map(|r| r.id.as_str()), Some("b"));
    }

    #[test]
    fn selection_wraps() {
        let mut state = state();
        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }
}
