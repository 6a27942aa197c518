//! Inline click-to-edit widget for egui.
//!
//! This crate provides [`Editable`], a widget that renders a value as
//! static text and swaps to a text input when activated:
//!
//! - **Read view**: plain text (or a caller-supplied renderer) with a
//!   "click to edit" tooltip, entered by double-click or, optionally,
//!   a single click
//! - **Edit view**: an uncontrolled single-line text input, focused
//!   and fully selected on entry
//! - **Commit**: Enter or blur submits the trimmed value; blank input
//!   is never submitted

pub mod editable;

pub use clickedit_core::{EditMode, EditSession};
pub use editable::{
    CLICK_TO_EDIT, DOUBLE_CLICK_TO_EDIT, Editable, EditableOutput, ReadViewProps,
};
