//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place that mutates [`AppState`]. Key presses,
//! the bootstrap signal and catalog responses all arrive as [`Event`]s; the
//! handler validates input, updates the store, and returns the actions to run.
//!
//! # Request lifecycle
//!
//! ```text
//! Idle --Submit--------> Submitting --ApiResponse(create)--> Idle
//! Idle --DeleteSelected-> Deleting  --ApiResponse(remove)--> Idle
//! Idle --Bootstrap/Reload-> Loading --ApiResponse(list)----> Idle
//! ```
//!
//! Only one request is in flight at a time. Submit, delete and reload are
//! refused while another request is pending, so two responses can never race
//! to mutate the catalog. Search input is handled synchronously in any state.
//!
//! All validation and API errors stop here: they become the status message and
//! the handler still returns `Ok`.

use super::modes::{InputMode, RequestState};
use crate::api::{decode_create, decode_list, decode_remove, ApiOperation, ApiResponse};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::validate_submission;

/// Status text after a successful create.
pub const SAVED_MESSAGE: &str = "Configuration saved.";

/// Status text when an action is refused because a request is pending.
pub const BUSY_MESSAGE: &str = "Please wait for the current request to finish.";

/// Events triggered by user input, the plugin lifecycle, or catalog responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Permissions granted; load the catalog for the first time.
    Bootstrap,
    /// Reload the catalog on demand.
    Reload,

    /// Moves the cursor down one record (wraps to top).
    KeyDown,
    /// Moves the cursor up one record (wraps to bottom).
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,

    /// Enters search mode, keeping the current query.
    SearchMode,
    /// Leaves search mode, keeping the query as the active filter.
    ConfirmSearch,
    /// Clears the query and leaves search mode.
    ClearSearch,

    /// Opens the add-configuration form.
    OpenForm,
    /// Leaves the form without submitting. Typed values are kept.
    CancelForm,
    /// Focuses the next form field.
    NextField,
    /// Focuses the previous form field.
    PrevField,
    /// Validates the form and sends a create request.
    Submit,

    /// Deletes the record under the cursor.
    DeleteSelected,

    /// Typed character, routed to the search bar or the focused form field.
    Char(char),
    /// Removes the last character from the search bar or focused field.
    Backspace,

    /// Result of a catalog request.
    ApiResponse(ApiResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The boolean is `true` when the UI should re-render.
///
/// # Errors
///
/// Currently infallible for user-facing failures, which are reported through
/// the status line. The `Result` is kept for failures of the plugin itself.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event_kind(event)).entered();

    match event {
        Event::Bootstrap | Event::Reload => Ok(start_load(state)),
        Event::KeyDown => {
            if state.input_mode != InputMode::Normal {
                return Ok((false, vec![]));
            }
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            if state.input_mode != InputMode::Normal {
                return Ok((false, vec![]));
            }
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::ConfirmSearch => {
            tracing::debug!(query = %state.query, "keeping search filter");
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::ClearSearch => {
            state.input_mode = InputMode::Normal;
            state.set_query("");
            Ok((true, vec![]))
        }
        Event::OpenForm => {
            state.input_mode = InputMode::Form;
            state.clear_status();
            Ok((true, vec![]))
        }
        Event::CancelForm => {
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::NextField => {
            if state.input_mode != InputMode::Form {
                return Ok((false, vec![]));
            }
            state.form.focus_next();
            Ok((true, vec![]))
        }
        Event::PrevField => {
            if state.input_mode != InputMode::Form {
                return Ok((false, vec![]));
            }
            state.form.focus_prev();
            Ok((true, vec![]))
        }
        Event::Submit => Ok(submit(state)),
        Event::DeleteSelected => Ok(delete_selected(state)),
        Event::Char(c) => match state.input_mode {
            InputMode::Search => {
                let mut text = state.search_input.clone();
                text.push(*c);
                state.set_query(&text);
                tracing::trace!(query = %state.query, "search query updated");
                Ok((true, vec![]))
            }
            InputMode::Form => {
                state.form.push(*c);
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::Backspace => match state.input_mode {
            InputMode::Search => {
                let mut text = state.search_input.clone();
                text.pop();
                state.set_query(&text);
                Ok((true, vec![]))
            }
            InputMode::Form => {
                state.form.pop();
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::ApiResponse(response) => Ok(apply_response(state, response)),
    }
}

/// Name of the event variant without its payload, for spans.
const fn event_kind(event: &Event) -> &'static str {
    match event {
        Event::Bootstrap => "Bootstrap",
        Event::Reload => "Reload",
        Event::KeyDown => "KeyDown",
        Event::KeyUp => "KeyUp",
        Event::CloseFocus => "CloseFocus",
        Event::SearchMode => "SearchMode",
        Event::ConfirmSearch => "ConfirmSearch",
        Event::ClearSearch => "ClearSearch",
        Event::OpenForm => "OpenForm",
        Event::CancelForm => "CancelForm",
        Event::NextField => "NextField",
        Event::PrevField => "PrevField",
        Event::Submit => "Submit",
        Event::DeleteSelected => "DeleteSelected",
        Event::Char(_) => "Char",
        Event::Backspace => "Backspace",
        Event::ApiResponse(_) => "ApiResponse",
    }
}

/// Refuses an action because a request is already pending.
fn refuse_busy(state: &mut AppState) -> (bool, Vec<Action>) {
    tracing::debug!(pending = ?state.request_state, "request in flight, refusing action");
    state.set_error(BUSY_MESSAGE);
    (true, vec![])
}

fn start_load(state: &mut AppState) -> (bool, Vec<Action>) {
    if state.request_state != RequestState::Idle {
        return refuse_busy(state);
    }
    tracing::debug!(url = %state.api.base_url(), "loading catalog");
    state.request_state = RequestState::Loading;
    (true, vec![Action::SendRequest(state.api.list_all())])
}

fn submit(state: &mut AppState) -> (bool, Vec<Action>) {
    if state.input_mode != InputMode::Form {
        return (false, vec![]);
    }
    state.clear_status();

    if state.request_state != RequestState::Idle {
        return refuse_busy(state);
    }

    let validated = match validate_submission(&state.form.fields) {
        Ok(validated) => validated,
        Err(e) => {
            tracing::debug!(error = %e, "submission rejected by validation");
            state.set_error(e.to_string());
            return (true, vec![]);
        }
    };

    let record = validated.into_new_record(uuid::Uuid::new_v4().to_string());
    match state.api.create(&record) {
        Ok(request) => {
            tracing::debug!(id = %record.id, name = %record.name, "submitting configuration");
            state.request_state = RequestState::Submitting;
            (true, vec![Action::SendRequest(request)])
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to build create request");
            state.set_error(e.to_string());
            (true, vec![])
        }
    }
}

fn delete_selected(state: &mut AppState) -> (bool, Vec<Action>) {
    if state.input_mode != InputMode::Normal {
        return (false, vec![]);
    }
    let Some(id) = state.selected_record().map(|record| record.id.clone()) else {
        tracing::debug!("no record selected to delete");
        return (false, vec![]);
    };
    if state.request_state != RequestState::Idle {
        return refuse_busy(state);
    }

    tracing::debug!(id = %id, "deleting configuration");
    state.clear_status();
    let request = state.api.remove(&id);
    state.request_state = RequestState::Deleting { id };
    (true, vec![Action::SendRequest(request)])
}

fn apply_response(state: &mut AppState, response: &ApiResponse) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!(
        "api_response",
        operation = response.operation.name(),
        status = response.status,
        body_len = response.body.len()
    )
    .entered();

    let expected = match &response.operation {
        ApiOperation::List => state.request_state == RequestState::Loading,
        ApiOperation::Create { .. } => state.request_state == RequestState::Submitting,
        ApiOperation::Remove { id } => {
            state.request_state == RequestState::Deleting { id: id.clone() }
        }
    };
    if !expected {
        tracing::warn!(pending = ?state.request_state, "response does not match the pending request");
    }
    state.request_state = RequestState::Idle;

    match &response.operation {
        ApiOperation::List => match decode_list(response.status, &response.body) {
            Ok(records) => {
                tracing::debug!(record_count = records.len(), "catalog loaded");
                state.replace_all(records);
            }
            Err(e) => {
                tracing::debug!(error = %e, "catalog load failed");
                state.replace_all(Vec::new());
                state.set_error(e.to_string());
            }
        },
        ApiOperation::Create { id } => match decode_create(response.status, &response.body) {
            Ok(record) => {
                tracing::debug!(id = %record.id, requested_id = %id, "configuration stored");
                state.prepend(record);
                state.form.reset();
                // The user may have left the form while the save was pending.
                if state.input_mode == InputMode::Form {
                    state.input_mode = InputMode::Normal;
                }
                state.set_success(SAVED_MESSAGE);
            }
            Err(e) => {
                tracing::debug!(error = %e, "create failed");
                state.set_error(e.to_string());
            }
        },
        ApiOperation::Remove { id } => match decode_remove(response.status, &response.body) {
            Ok(()) => {
                let removed = state.remove_by_id(id);
                tracing::debug!(id = %id, removed, "configuration deleted");
            }
            Err(e) => {
                tracing::debug!(id = %id, error = %e, "delete failed");
                state.set_error(e.to_string());
            }
        },
    }

    (true, vec![])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiClient, Method};
    use crate::app::modes::FormField;
    use crate::ui::theme::Theme;

    fn fresh() -> AppState {
        AppState::new(ApiClient::new("http://host/api/pcs"), Theme::default())
    }

    fn sent(actions: &[Action]) -> Vec<&crate::api::ApiRequest> {
        actions
            .iter()
            .filter_map(|a| match a {
                Action::SendRequest(r) => Some(r),
                Action::CloseFocus => None,
            })
            .collect()
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    #[test]
    fn bootstrap_sends_one_list_request() {
        let mut state = fresh();
        let (render, actions) = handle_event(&mut state, &Event::Bootstrap).unwrap();
        assert!(render);
        let requests = sent(&actions);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Get);
        assert_eq!(state.request_state, RequestState::Loading);
    }

    #[test]
    fn reload_is_refused_while_loading() {
        let mut state = fresh();
        handle_event(&mut state, &Event::Bootstrap).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::Reload).unwrap();
        assert!(actions.is_empty());
        assert_eq!(state.status.as_ref().map(|s| s.text.as_str()), Some(BUSY_MESSAGE));
    }

    #[test]
    fn failed_load_empties_catalog_and_reports() {
        let mut state = fresh();
        state.replace_all(vec![crate::domain::NewPcRecord {
            id: "old".into(),
            name: "n".into(),
            cpu: "c".into(),
            ram: 1,
            storage: 1,
            purpose: "p".into(),
            note: String::new(),
        }
        .into()]);
        handle_event(&mut state, &Event::Reload).unwrap();
        handle_event(
            &mut state,
            &Event::ApiResponse(ApiResponse {
                operation: ApiOperation::List,
                status: 200,
                body: b"{}".to_vec(),
            }),
        )
        .unwrap();
        assert!(state.records.is_empty());
        assert_eq!(state.request_state, RequestState::Idle);
        assert!(state.status.is_some());
    }

    #[test]
    fn form_typing_fills_focused_field() {
        let mut state = fresh();
        handle_event(&mut state, &Event::OpenForm).unwrap();
        type_text(&mut state, "Box");
        handle_event(&mut state, &Event::NextField).unwrap();
        type_text(&mut state, "i9");
        assert_eq!(state.form.value(FormField::Name), "Box");
        assert_eq!(state.form.value(FormField::Cpu), "i9");
        assert_eq!(state.form.focus, FormField::Cpu);
    }

    #[test]
    fn chars_in_normal_mode_are_ignored() {
        let mut state = fresh();
        let (render, actions) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert!(state.search_input.is_empty());
    }

    #[test]
    fn delete_without_selection_does_nothing() {
        let mut state = fresh();
        let (_, actions) = handle_event(&mut state, &Event::DeleteSelected).unwrap();
        assert!(actions.is_empty());
        assert_eq!(state.request_state, RequestState::Idle);
    }

    #[test]
    fn create_finishing_after_leaving_the_form_keeps_search_mode() {
        let mut state = fresh();
        handle_event(&mut state, &Event::OpenForm).unwrap();
        for (i, value) in ["Box", "Xeon", "32", "2000", "Server"].iter().enumerate() {
            if i > 0 {
                handle_event(&mut state, &Event::NextField).unwrap();
            }
            type_text(&mut state, value);
        }
        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        let operation = sent(&actions)[0].operation.clone();

        handle_event(&mut state, &Event::CancelForm).unwrap();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        type_text(&mut state, "z");

        let stored = br#"{"id":"x","name":"Box","cpu":"Xeon","ram":32,"storage":2000,"purpose":"Server","note":""}"#;
        handle_event(
            &mut state,
            &Event::ApiResponse(ApiResponse {
                operation,
                status: 201,
                body: stored.to_vec(),
            }),
        )
        .unwrap();

        assert_eq!(state.records.len(), 1);
        assert_eq!(state.input_mode, InputMode::Search);
        assert_eq!(state.search_input, "z");
    }
}
