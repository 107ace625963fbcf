//! View model types and the projection from [`AppState`].
//!
//! [`compute_viewmodel`] is a pure function of the state (and the terminal
//! size): it applies the filter rules, chooses the placeholder text, formats
//! every visible record and computes the summary over the whole catalog. The
//! component renderers only print what it produced.

use crate::app::{AppState, FormField, InputMode, StatusKind};
use crate::ui::helpers::{substring_ranges, truncate};

/// Placeholder when the catalog itself is empty.
pub const EMPTY_CATALOG: &str = "No configurations yet. Add your first machine.";

/// Placeholder when records exist but none match the filter.
pub const NO_MATCH: &str = "No configuration matches the filter.";

/// Shown instead of a blank note.
pub const NO_NOTE: &str = "No note.";

/// Rows used by one list item: name, spec, purpose, note, spacer.
pub const ITEM_HEIGHT: usize = 5;

/// Rows always taken by chrome: top margin, header, border, summary, status,
/// bottom border, footer and the last row left blank.
const BASE_CHROME_ROWS: usize = 8;

/// Extra rows taken by the search box.
const SEARCH_BOX_ROWS: usize = 3;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Title line.
    pub header: HeaderInfo,

    /// Totals over the unfiltered catalog.
    pub summary: String,

    /// Last success or error message, if any.
    pub status: Option<StatusLine>,

    /// Present while searching or while a filter is active.
    pub search_bar: Option<SearchBarInfo>,

    /// List, placeholder or form.
    pub body: Body,

    /// Key hints for the current mode.
    pub footer: FooterInfo,
}

/// Main area of the screen.
#[derive(Debug, Clone)]
pub enum Body {
    /// Visible window of matching records.
    List(Vec<DisplayItem>),
    /// Nothing to list.
    Placeholder(EmptyState),
    /// The add-configuration form.
    Form(Vec<FormFieldView>),
}

/// Display information for a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Record id; the delete control acts on the selected item's id.
    pub id: String,
    /// Record name, truncated to the card width.
    pub name: String,
    /// `"CPU: … • RAM: …GB • Storage: …GB"`.
    pub spec: String,
    /// `"Purpose: …"`.
    pub purpose: String,
    /// Note text or [`NO_NOTE`].
    pub note: String,
    /// False when `note` holds the [`NO_NOTE`] placeholder.
    pub has_note: bool,
    /// Relative creation time, when the backend sent one.
    pub age: Option<String>,
    /// Whether this item is under the cursor.
    pub is_selected: bool,
    /// Character ranges of the query inside `name`, `(start, end)` exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// One labelled input of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFieldView {
    /// Field label, e.g. `"RAM (GB)"`.
    pub label: &'static str,
    /// Text typed so far.
    pub value: String,
    /// Whether keystrokes currently go to this field.
    pub is_focused: bool,
    /// Input hint shown while the field is empty.
    pub hint: Option<&'static str>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title with record counts, plus the busy label while a request is pending.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Key hints for the current mode.
    pub keybindings: String,
}

/// Placeholder message shown instead of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// [`EMPTY_CATALOG`] or [`NO_MATCH`].
    pub message: String,
    /// Hint for the next step.
    pub subtitle: String,
}

/// Search box display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Text typed into the search box.
    pub query: String,
    /// Whether keystrokes currently go to the search bar.
    pub is_active: bool,
}

/// Message shown under the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    /// Message text.
    pub text: String,
    /// Picks the success or error color.
    pub kind: StatusKind,
}

/// Computes the view model for the current time.
#[must_use]
pub fn compute_viewmodel(state: &AppState, rows: usize, cols: usize) -> UIViewModel {
    compute_viewmodel_at(state, rows, cols, chrono::Utc::now())
}

/// Computes the view model with an explicit clock, for relative ages.
#[must_use]
pub fn compute_viewmodel_at(
    state: &AppState,
    rows: usize,
    cols: usize,
    now: chrono::DateTime<chrono::Utc>,
) -> UIViewModel {
    let search_bar = compute_search_bar(state);

    let body = if state.input_mode == InputMode::Form {
        Body::Form(compute_form(state))
    } else if state.filtered_len() == 0 {
        Body::Placeholder(compute_empty_state(state))
    } else {
        let available = available_rows(rows, search_bar.is_some());
        Body::List(compute_items(state, available, cols, now))
    };

    UIViewModel {
        header: compute_header(state),
        summary: compute_summary(state),
        status: state.status.as_ref().map(|status| StatusLine {
            text: status.text.clone(),
            kind: status.kind,
        }),
        search_bar,
        body,
        footer: compute_footer(state),
    }
}

/// Rows left for the list after the chrome.
const fn available_rows(total_rows: usize, has_search_bar: bool) -> usize {
    let chrome = if has_search_bar {
        BASE_CHROME_ROWS + SEARCH_BOX_ROWS
    } else {
        BASE_CHROME_ROWS
    };
    total_rows.saturating_sub(chrome)
}

fn compute_items(
    state: &AppState,
    available_rows: usize,
    cols: usize,
    now: chrono::DateTime<chrono::Utc>,
) -> Vec<DisplayItem> {
    let per_page = (available_rows / ITEM_HEIGHT).max(1);
    let total = state.filtered_len();

    // Centre on the selection, but never leave free rows at the bottom.
    let visible_start = state
        .selected_index
        .saturating_sub(per_page / 2)
        .min(total.saturating_sub(per_page));
    let visible_end = (visible_start + per_page).min(total);

    let text_width = cols.saturating_sub(4).max(8);

    state
        .filtered()
        .enumerate()
        .skip(visible_start)
        .take(visible_end - visible_start)
        .map(|(idx, record)| {
            let note = record.note_text();
            let name = truncate(&record.name, text_width);
            // A cut name ends in an ellipsis that must not be highlighted.
            let visible = if name == record.name {
                text_width
            } else {
                text_width - 1
            };
            DisplayItem {
                id: record.id.clone(),
                name,
                spec: truncate(&record.spec_line(), text_width),
                purpose: truncate(&format!("Purpose: {}", record.purpose), text_width),
                note: truncate(note.unwrap_or(NO_NOTE), text_width),
                has_note: note.is_some(),
                age: record.added_ago(now),
                is_selected: idx == state.selected_index,
                highlight_ranges: substring_ranges(&record.name, &state.query)
                    .into_iter()
                    .filter(|&(_, end)| end <= visible)
                    .collect(),
            }
        })
        .collect()
}

fn compute_empty_state(state: &AppState) -> EmptyState {
    if state.records.is_empty() {
        EmptyState {
            message: EMPTY_CATALOG.to_string(),
            subtitle: "Press 'a' to add a configuration".to_string(),
        }
    } else {
        EmptyState {
            message: NO_MATCH.to_string(),
            subtitle: "Press Esc to clear the filter".to_string(),
        }
    }
}

fn compute_form(state: &AppState) -> Vec<FormFieldView> {
    FormField::ALL
        .iter()
        .map(|&field| FormFieldView {
            label: field.label(),
            value: state.form.value(field).to_string(),
            is_focused: state.form.focus == field,
            hint: if field.is_numeric() {
                Some("whole number")
            } else if field == FormField::Note {
                Some("optional")
            } else {
                None
            },
        })
        .collect()
}

fn compute_header(state: &AppState) -> HeaderInfo {
    let shown = state.filtered_len();
    let total = state.records.len();
    let counts = if state.query.is_empty() {
        format!("{total}")
    } else {
        format!("{shown}/{total}")
    };
    let title = match (state.input_mode, state.request_state.busy_label()) {
        (InputMode::Form, None) => " Add Configuration ".to_string(),
        (InputMode::Form, Some(busy)) => format!(" Add Configuration · {busy} "),
        (_, None) => format!(" PC Catalog ({counts}) "),
        (_, Some(busy)) => format!(" PC Catalog ({counts}) · {busy} "),
    };
    HeaderInfo { title }
}

fn compute_summary(state: &AppState) -> String {
    let totals = state.totals();
    format!(
        "Machines: {} • RAM: {}GB • Storage: {}GB",
        totals.count, totals.ram, totals.storage
    )
}

fn compute_search_bar(state: &AppState) -> Option<SearchBarInfo> {
    let is_active = state.input_mode == InputMode::Search;
    if is_active || (!state.query.is_empty() && state.input_mode == InputMode::Normal) {
        Some(SearchBarInfo {
            query: state.search_input.clone(),
            is_active,
        })
    } else {
        None
    }
}

fn compute_footer(state: &AppState) -> FooterInfo {
    let keybindings = match state.input_mode {
        InputMode::Normal => {
            "j/k: navigate  /: search  a: add  d: delete  r: reload  Esc: clear filter  q: quit"
        }
        InputMode::Search => "Type to filter  Enter: keep filter  Esc: clear",
        InputMode::Form => "Tab/Shift+Tab: field  Enter: save  Esc: back to list",
    };
    FooterInfo {
        keybindings: keybindings.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::domain::PcRecord;
    use crate::ui::theme::Theme;

    fn pc(id: &str, name: &str, note: Option<&str>) -> PcRecord {
        PcRecord {
            id: id.to_string(),
            name: name.to_string(),
            cpu: "Ryzen 5".to_string(),
            ram: 8,
            storage: 256,
            purpose: "Office".to_string(),
            note: note.map(String::from),
            created_at: None,
        }
    }

    fn items(vm: &UIViewModel) -> &[DisplayItem] {
        match &vm.body {
            Body::List(items) => items,
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn empty_catalog_shows_add_placeholder() {
        let state = AppState::new(ApiClient::default(), Theme::default());
        let vm = compute_viewmodel(&state, 40, 80);
        match vm.body {
            Body::Placeholder(empty) => assert_eq!(empty.message, EMPTY_CATALOG),
            other => panic!("expected placeholder, got {other:?}"),
        }
        assert_eq!(vm.summary, "Machines: 0 • RAM: 0GB • Storage: 0GB");
    }

    #[test]
    fn unmatched_filter_shows_no_match_placeholder() {
        let mut state = AppState::new(ApiClient::default(), Theme::default());
        state.replace_all(vec![pc("a", "Desk", None)]);
        state.set_query("xeon");
        let vm = compute_viewmodel(&state, 40, 80);
        match vm.body {
            Body::Placeholder(empty) => assert_eq!(empty.message, NO_MATCH),
            other => panic!("expected placeholder, got {other:?}"),
        }
        assert_eq!(vm.summary, "Machines: 1 • RAM: 8GB • Storage: 256GB");
    }

    #[test]
    fn item_lines_follow_display_format() {
        let mut state = AppState::new(ApiClient::default(), Theme::default());
        state.replace_all(vec![pc("a", "Desk", None), pc("b", "Tower", Some("RGB"))]);
        let vm = compute_viewmodel(&state, 40, 80);
        let items = items(&vm);
        assert_eq!(items[0].spec, "CPU: Ryzen 5 • RAM: 8GB • Storage: 256GB");
        assert_eq!(items[0].purpose, "Purpose: Office");
        assert_eq!(items[0].note, NO_NOTE);
        assert!(!items[0].has_note);
        assert_eq!(items[1].note, "RGB");
        assert!(items[0].is_selected);
        assert_eq!(items[1].id, "b");
    }

    #[test]
    fn query_match_in_name_is_highlighted() {
        let mut state = AppState::new(ApiClient::default(), Theme::default());
        state.replace_all(vec![pc("a", "My Ryzen Build", None)]);
        state.set_query("RYZEN");
        let vm = compute_viewmodel(&state, 40, 80);
        assert_eq!(items(&vm)[0].highlight_ranges, vec![(3, 8)]);
        assert!(vm.search_bar.is_some());
    }

    #[test]
    fn list_is_windowed_around_selection() {
        let mut state = AppState::new(ApiClient::default(), Theme::default());
        let records = (0..20).map(|i| pc(&i.to_string(), "Box", None)).collect();
        state.replace_all(records);
        for _ in 0..15 {
            state.move_selection_down();
        }
        // 8 chrome rows leave 20 rows, i.e. four items.
        let vm = compute_viewmodel(&state, 28, 80);
        let items = items(&vm);
        assert_eq!(items.len(), 4);
        assert!(items.iter().any(|item| item.is_selected && item.id == "15"));
    }

    #[test]
    fn short_list_near_the_end_shows_every_record() {
        let mut state = AppState::new(ApiClient::default(), Theme::default());
        let records = (0..5).map(|i| pc(&i.to_string(), "Box", None)).collect();
        state.replace_all(records);
        // Wraps from the first record to the last.
        state.move_selection_up();
        assert_eq!(state.selected_index, 4);

        // 32 rows leave room for six items.
        let vm = compute_viewmodel(&state, 40, 80);
        let ids: Vec<&str> = items(&vm).iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, ["0", "1", "2", "3", "4"]);
        assert!(items(&vm)[4].is_selected);
    }

    #[test]
    fn form_mode_lists_all_fields_with_focus() {
        let mut state = AppState::new(ApiClient::default(), Theme::default());
        state.input_mode = InputMode::Form;
        let vm = compute_viewmodel(&state, 40, 80);
        match vm.body {
            Body::Form(fields) => {
                assert_eq!(fields.len(), 6);
                assert!(fields[0].is_focused);
                assert_eq!(fields[2].hint, Some("whole number"));
            }
            other => panic!("expected form, got {other:?}"),
        }
    }
}
