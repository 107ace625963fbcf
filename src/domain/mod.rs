//! Domain layer for the rigbook plugin.
//!
//! Core types and rules that do not depend on Zellij or on how requests are
//! carried: the record model, form validation and the error taxonomy.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`record`]: PC configuration records and the create body
//! - [`validate`]: Form validation and positive-integer parsing

pub mod error;
pub mod record;
pub mod validate;

pub use error::{ApiError, Result, RigbookError, ValidationError};
pub use record::{NewPcRecord, PcRecord};
pub use validate::{parse_positive_integer, validate_submission, FormFields, ValidatedRecord};
