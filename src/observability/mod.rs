//! OpenTelemetry tracing with file-based OTLP export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK tracer → OtlpFileExporter → rigbook-otlp.json
//! ```
//!
//! Spans land in `~/.local/share/zellij/rigbook/rigbook-otlp.json` (seen as
//! `/host/...` from inside the sandbox), one OTLP JSON document per line. The
//! file rotates at 10 MiB and keeps three backups.
//!
//! The filter comes from the `trace_level` plugin option, default `info`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`exporter`]: `SpanExporter` writing OTLP JSON
//! - [`rotating`]: Size-based rotating line writer

mod exporter;
mod init;
mod rotating;

pub use init::{init_tracing, TRACE_FILE_NAME};
