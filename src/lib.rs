//! Rigbook: a Zellij plugin for keeping a catalog of PC configurations.
//!
//! The catalog lives behind a small REST collection (`GET`/`POST`/`DELETE` on
//! `/api/pcs`). The plugin lists the stored machines, filters them as you
//! type, shows totals for RAM and storage, and lets you add or delete
//! configurations from a form inside the pane.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← keys, web_request
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, request lifecycle                │
//! │  - Catalog store, search filter, form               │
//! └─────────────────────────────────────────────────────┘
//!         │                                        │
//! ┌───────────────────────┐          ┌───────────────────────┐
//! │ UI Layer (ui/)        │          │ API Layer (api/)      │
//! │ - View model          │          │ - Request builders    │
//! │ - Components, themes  │          │ - Response decoding   │
//! └───────────────────────┘          └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Records, validation, errors (domain/)            │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing to an OTLP JSON file       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing below `main.rs` talks to Zellij. Requests leave the handler as
//! [`Action::SendRequest`] values and come back as [`Event::ApiResponse`], so
//! the whole flow runs in plain unit tests.
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/rigbook.wasm" {
//!         api_url "http://127.0.0.1:4173/api/pcs"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use rigbook::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (_, actions) = handle_event(&mut state, &Event::Bootstrap)?;
//! assert!(matches!(actions.as_slice(), [Action::SendRequest(_)]));
//! # Ok::<(), rigbook::RigbookError>(())
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, RequestState};
pub use domain::{PcRecord, Result, RigbookError};
pub use ui::Theme;

use api::{ApiClient, DEFAULT_API_URL};
use std::collections::BTreeMap;

/// Plugin configuration parsed from the Zellij plugin block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Collection URL of the catalog API.
    pub api_url: String,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme; `~` is the host home. See [`ui::theme`].
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses the configuration map Zellij hands to `load`.
    ///
    /// Blank values count as unset.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use rigbook::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_url".to_string(), "http://nas:8080/api/pcs".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.api_url, "http://nas:8080/api/pcs");
    /// assert_eq!(config.theme_name, None);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        Self {
            api_url: get("api_url").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level"),
        }
    }

    /// Resolves the theme: file first, then built-in name, then the default.
    ///
    /// # Errors
    ///
    /// Returns [`RigbookError::Theme`] when the file is unreadable or invalid,
    /// and [`RigbookError::Config`] for an unknown built-in name.
    pub fn load_theme(&self) -> Result<Theme> {
        if let Some(file) = &self.theme_file {
            return Theme::from_file(infrastructure::expand_tilde(file));
        }
        match &self.theme_name {
            Some(name) => Theme::from_name(name)
                .ok_or_else(|| RigbookError::Config(format!("unknown theme '{name}'"))),
            None => Ok(Theme::default()),
        }
    }
}

/// Builds the initial state. The catalog is empty until the first load.
///
/// A theme that fails to load is logged and replaced by the default.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(api_url = %config.api_url, "initializing rigbook plugin");

    let theme = config.load_theme().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load theme, using default");
        Theme::default()
    });

    AppState::new(ApiClient::new(config.api_url.clone()), theme)
}
