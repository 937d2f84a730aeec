//! Bridges from other logging crates
//!
//! Records from the `log` and `tracing` ecosystems are mapped onto
//! [`Severity`](crate::Severity) and dispatched through a
//! [`Logger`](crate::Logger). Neither ecosystem has a fatal level, so bridged
//! records never terminate.

#[cfg(feature = "log-compat")]
pub mod log_bridge;

#[cfg(feature = "tracing-compat")]
pub mod tracing_bridge;

#[cfg(feature = "log-compat")]
pub use log_bridge::{LogBridge, init_log_bridge};

#[cfg(feature = "tracing-compat")]
pub use tracing_bridge::{TracingBridge, init_tracing_bridge};
