//! Demo page UI using egui.

use clickedit_widgets::Editable;
use egui::{Color32, Context, Label, RichText, TextStyle};

/// Maximum entries kept in the submission history.
const HISTORY_LIMIT: usize = 8;

/// State for the demo page.
pub struct UiState {
    /// Value edited via double-click.
    pub title: String,
    /// Value edited via single click.
    pub tag: String,
    /// Value shown through a custom read view.
    pub author: String,
    /// Recent submissions, newest first.
    pub history: Vec<String>,
    /// Field currently being edited, if any.
    pub active_field: Option<&'static str>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            title: "Untitled document".to_string(),
            tag: "draft".to_string(),
            author: "anonymous".to_string(),
            history: Vec::new(),
            active_field: None,
        }
    }
}

impl UiState {
    /// Record a committed value for a field.
    fn record(&mut self, field: &'static str, value: &str) {
        log::debug!("{field} submitted: {value}");
        self.history.insert(0, format!("{field} → {value}"));
        self.history.truncate(HISTORY_LIMIT);
        if self.active_field == Some(field) {
            self.active_field = None;
        }
    }
}

/// Render the demo page.
pub fn render_ui(ctx: &Context, state: &mut UiState) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("ClickEdit");
        ui.label("Inline click-to-edit fields. Enter or blur commits; blank input is ignored.");
        ui.add_space(12.0);

        egui::Grid::new("fields")
            .num_columns(2)
            .spacing([16.0, 10.0])
            .show(ui, |ui| {
                // Double-click to edit, rendered as a heading.
                ui.label("Title");
                let output = Editable::new("title", &state.title)
                    .text_style(TextStyle::Heading)
                    .desired_width(280.0)
                    .show(ui);
                if output.edit_started {
                    state.active_field = Some("title");
                }
                if let Some(value) = output.submitted {
                    state.record("title", &value);
                    state.title = value;
                }
                ui.end_row();

                // Single click to edit, length-limited.
                ui.label("Tag");
                let output = Editable::new("tag", &state.tag)
                    .single_click(true)
                    .char_limit(24)
                    .show(ui);
                if output.edit_started {
                    state.active_field = Some("tag");
                }
                if let Some(value) = output.submitted {
                    state.record("tag", &value);
                    state.tag = value;
                }
                ui.end_row();

                // Custom read view.
                ui.label("Author");
                let output = Editable::new("author", &state.author)
                    .read_view(|ui, value, props| {
                        let text = RichText::new(format!("by {value}"))
                            .italics()
                            .color(Color32::from_gray(110));
                        ui.add(Label::new(text).sense(props.sense))
                    })
                    .show(ui);
                if output.edit_started {
                    state.active_field = Some("author");
                }
                if let Some(value) = output.submitted {
                    state.record("author", &value);
                    state.author = value;
                }
                ui.end_row();
            });

        ui.add_space(16.0);
        if let Some(field) = state.active_field {
            ui.label(RichText::new(format!("Editing {field}…")).weak());
        }

        ui.separator();
        ui.label(RichText::new("Submissions").strong());
        if state.history.is_empty() {
            ui.label(RichText::new("Nothing submitted yet").weak());
        } else {
            for entry in &state.history {
                ui.label(entry);
            }
        }
    });
}
