//! Logging.
//!
//! Two layers:
//! - process diagnostics go through the `log` facade, backed by `env_logger`
//!   (see [`init_logging`])
//! - render command instrumentation goes through a per-backend [`RenderLogger`]
//!   writing to stdout, a file, or an in-memory [`LogRing`]

mod config;
mod init;
mod render_logger;
mod ring;

pub use config::{RenderLogLevel, RenderLogSink, RenderLoggerConfig};
pub use init::{init_logging, LoggingConfig};
pub use render_logger::{CommandSpan, RenderLogger};
pub use ring::{LogRing, RenderLogEntry};
