//! Application layer coordinating the catalog, constraints and events.
//!
//! The data flow is explicit and unidirectional:
//!
//! ```text
//! User Edit → Event → handle_event → ConstraintState mutation → changed?
//!                                                                  ↓
//!                              presentation ← current_results() ←──┘
//! ```
//!
//! # Modules
//!
//! - [`handler`]: Event type and dispatch onto constraint mutators
//! - [`session`]: Shared catalog plus per-user constraints

pub mod handler;
pub mod session;

pub use handler::{handle_event, Event};
pub use session::BrowseSession;
