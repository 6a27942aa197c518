//! ClickEdit Demo Application
//!
//! A small application shell providing windowing, the egui render
//! pass, and a demo page exercising every option of the Editable
//! widget.

mod app;
mod ui;

pub use app::{App, AppConfig, ShellError};
pub use ui::{UiState, render_ui};
