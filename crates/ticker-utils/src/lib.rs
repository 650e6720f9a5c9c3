//! Shared utilities for taiex-ticker
//!
//! Logging setup used by every binary in the workspace.

pub mod logging;

pub use logging::{DEFAULT_FILTER, init_tracing, init_tracing_with_default};
