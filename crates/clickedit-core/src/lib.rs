//! ClickEdit Core Library
//!
//! Platform-agnostic editing state machine for the ClickEdit
//! inline-edit widget. No UI dependencies; the widget crate drives the
//! session from whatever event loop it lives in.

pub mod session;

pub use session::{EditMode, EditSession, REVERT_DELAY};
