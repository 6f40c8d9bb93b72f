//! Poke-theme observability: tracing subscriber setup for plugin hosts.
//!
//! The `poke-theme` library only emits `tracing` events. A host embedding it
//! calls [`init`] once to get console output and, optionally, every formatted
//! line forwarded to its own log view (e.g. a devtools console).
//!
//! # Quick Start
//!
//! ```no_run
//! use poke_theme_observability::{ObservabilityConfig, init};
//!
//! let config = ObservabilityConfig::new("my-terminal")
//!     .with_log_level("poke_theme=debug");
//!
//! init(config)?;
//!
//! // Or initialize from environment variables
//! // poke_theme_observability::init_from_env()?;
//!
//! tracing::info!("host started");
//! # Ok::<(), poke_theme_observability::ObservabilityError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `POKE_THEME_SERVICE_NAME` - Service name
//! - `POKE_THEME_LOG` or `RUST_LOG` - Log level filter
//! - `POKE_THEME_LOG_CONSOLE` - `false` disables console output

pub mod config;
pub mod error;
pub mod host_log_layer;
pub mod telemetry;

pub use config::{LogSink, ObservabilityConfig};
pub use error::ObservabilityError;
pub use host_log_layer::{HostLogLayer, host_log_layer};
pub use telemetry::{init, init_from_env};
