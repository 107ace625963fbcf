//! Sandbox environment helpers.
//!
//! Zellij mounts the host filesystem under `/host`; everything here maps
//! between that view and the paths users write in their configuration.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
