//! Zellij plugin wrapper and entry point.
//!
//! A thin layer between the rigbook library and the Zellij plugin API. It
//! maps keys and web request results to library [`Event`]s, runs
//! [`handle_event`], and executes the returned [`Action`]s.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse configuration, start tracing, build the state
//! 2. **Permissions**: Request `WebAccess`, and `ChangeApplicationState` for `hide_self`
//! 3. **Bootstrap**: Once granted, send the first list request
//! 4. **Update**: Keys and `WebRequestResult`s flow through the handler
//! 5. **Render**: Delegate to the library renderer
//!
//! # Keybindings
//!
//! Normal mode:
//! - `j`/`Down`, `k`/`Up`, `Ctrl+n`/`Ctrl+p`: Move selection
//! - `/`: Search
//! - `a`: Add configuration
//! - `d`: Delete selected configuration
//! - `r`: Reload catalog
//! - `Esc`: Clear filter
//! - `q`: Close plugin
//!
//! Search mode: type to filter, `Enter` keeps the filter, `Esc` clears it.
//!
//! Form mode: type into the focused field, `Tab`/`Down` and
//! `Shift+Tab`/`Up` move between fields, `Enter` saves, `Esc` goes back.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use rigbook::api::{ApiOperation, ApiResponse, Method};
use rigbook::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);

/// Message shown when the host refuses web access.
const PERMISSION_DENIED: &str = "Web access was denied; the catalog cannot be loaded.";

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: rigbook::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: rigbook::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        rigbook::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        tracing::debug!(api_url = %config.api_url, "parsed configuration");
        self.app = rigbook::initialize(&config);

        request_permission(&[
            PermissionType::WebAccess,
            PermissionType::ChangeApplicationState,
        ]);

        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Returns `true` when the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_result(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Granted) => {
                tracing::debug!("permissions granted - loading catalog");
                Event::Bootstrap
            }
            zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Denied) => {
                tracing::warn!("permissions denied");
                self.app.set_error(PERMISSION_DENIED);
                return true;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        rigbook::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps a key press to an application event for the current input mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, mode = ?self.app.input_mode, "key event");

        let ctrl = key.key_modifiers.contains(&KeyModifier::Ctrl);
        let alt = key.key_modifiers.contains(&KeyModifier::Alt);
        let shift = key.key_modifiers.contains(&KeyModifier::Shift);

        if ctrl && self.app.input_mode == InputMode::Normal {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        Some(match self.app.input_mode {
            InputMode::Normal => match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Char('/') => Event::SearchMode,
                BareKey::Char('a') => Event::OpenForm,
                BareKey::Char('d') => Event::DeleteSelected,
                BareKey::Char('r') => Event::Reload,
                BareKey::Char('q') => Event::CloseFocus,
                BareKey::Esc => Event::ClearSearch,
                _ => return None,
            },
            InputMode::Search => match key.bare_key {
                BareKey::Enter => Event::ConfirmSearch,
                BareKey::Esc => Event::ClearSearch,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) if !ctrl && !alt => Event::Char(c),
                _ => return None,
            },
            InputMode::Form => match key.bare_key {
                BareKey::Tab if shift => Event::PrevField,
                BareKey::Tab | BareKey::Down => Event::NextField,
                BareKey::Up => Event::PrevField,
                BareKey::Enter => Event::Submit,
                BareKey::Esc => Event::CancelForm,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) if !ctrl && !alt => Event::Char(c),
                _ => return None,
            },
        })
    }

    /// Routes a web request result back to the operation that sent it.
    fn map_web_result(
        status: u16,
        body: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let Some(operation) = ApiOperation::from_context(context) else {
            tracing::debug!(?context, "ignoring web result without a catalog operation");
            return None;
        };
        tracing::debug!(operation = operation.name(), status, body_len = body.len(), "web result");
        Some(Event::ApiResponse(ApiResponse {
            operation,
            status,
            body,
        }))
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::SendRequest(request) => {
                let verb = match request.method {
                    Method::Get => HttpVerb::Get,
                    Method::Post => HttpVerb::Post,
                    Method::Delete => HttpVerb::Delete,
                };
                tracing::debug!(url = %request.url, operation = request.operation.name(), "sending request");
                web_request(
                    &request.url,
                    verb,
                    request.headers.clone(),
                    request.body.clone(),
                    request.context(),
                );
            }
        }
    }
}
