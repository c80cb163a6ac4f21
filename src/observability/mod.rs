//! Structured logging built on `tracing`.
//!
//! Loading, faceting and query evaluation emit debug-level spans and events. The
//! binary installs a `tracing-subscriber` pipeline; library users may install
//! their own subscriber instead.
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer (compact) → stderr
//! ```
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`

mod init;

pub use init::init_tracing;
