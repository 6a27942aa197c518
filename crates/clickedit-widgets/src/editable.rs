//! Inline click-to-edit text widget.

use clickedit_core::EditSession;
use egui::text::{CCursor, CCursorRange};
use egui::{Color32, CursorIcon, Id, Label, Response, RichText, Sense, TextEdit, TextStyle, Ui};

/// Tooltip shown on the read view when single-click editing is enabled.
pub const CLICK_TO_EDIT: &str = "Click to edit";
/// Tooltip shown on the read view when a double-click is required.
pub const DOUBLE_CLICK_TO_EDIT: &str = "Double click to edit";

/// Pick the read-view tooltip for the configured click mode.
fn tooltip_for(single_click: bool) -> &'static str {
    if single_click {
        CLICK_TO_EDIT
    } else {
        DOUBLE_CLICK_TO_EDIT
    }
}

/// Derived presentation props handed to a custom read view.
///
/// The widget attaches the tooltip and the click wiring to whatever
/// [`Response`] the renderer returns; the renderer must allocate its
/// element with [`ReadViewProps::sense`] for clicks to register.
pub struct ReadViewProps {
    /// Hover tooltip matching the configured click mode.
    pub tooltip: &'static str,
    /// Sense the rendered element must use.
    pub sense: Sense,
    /// Resolved text style.
    pub text_style: TextStyle,
    /// Resolved text color (`None` = current visuals).
    pub text_color: Option<Color32>,
}

type ReadViewFn<'a> = Box<dyn FnOnce(&mut Ui, &str, &ReadViewProps) -> Response + 'a>;

/// What happened during a call to [`Editable::show`].
pub struct EditableOutput {
    /// Response of the rendered read or edit element.
    pub response: Response,
    /// The trimmed new value, present exactly on the frame a commit
    /// was accepted. The caller applies it to its own state.
    pub submitted: Option<String>,
    /// True exactly on the frame the widget entered edit mode.
    pub edit_started: bool,
    /// Whether the widget is in edit mode after this frame.
    pub editing: bool,
}

/// An inline-editable text value.
///
/// Shows the value as static text until double-clicked (or clicked,
/// with [`Editable::single_click`]), then swaps to a text input seeded
/// with the value. Enter or losing focus commits; the trimmed result
/// is reported through [`EditableOutput::submitted`]. Blank input is
/// never submitted — the widget simply stays in edit mode.
pub struct Editable<'a> {
    id_salt: Id,
    value: &'a str,
    single_click: bool,
    read_view: Option<ReadViewFn<'a>>,
    text_style: Option<TextStyle>,
    text_color: Option<Color32>,
    desired_width: Option<f32>,
    char_limit: Option<usize>,
}

impl<'a> Editable<'a> {
    /// Create a new editable value with a stable identity.
    pub fn new(id_salt: impl std::hash::Hash, value: &'a str) -> Self {
        Self {
            id_salt: Id::new(id_salt),
            value,
            single_click: false,
            read_view: None,
            text_style: None,
            text_color: None,
            desired_width: None,
            char_limit: None,
        }
    }

    /// Let a single click start editing (default requires double-click).
    pub fn single_click(mut self, single_click: bool) -> Self {
        self.single_click = single_click;
        self
    }

    /// Override the read view rendering.
    ///
    /// The closure receives the current value and the derived
    /// [`ReadViewProps`] and returns the response of the element it
    /// rendered.
    pub fn read_view(
        mut self,
        render: impl FnOnce(&mut Ui, &str, &ReadViewProps) -> Response + 'a,
    ) -> Self {
        self.read_view = Some(Box::new(render));
        self
    }

    /// Set the text style for both views.
    pub fn text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = Some(text_style);
        self
    }

    /// Set the text color for both views.
    pub fn text_color(mut self, color: Color32) -> Self {
        self.text_color = Some(color);
        self
    }

    /// Set the width of the text input.
    pub fn desired_width(mut self, width: f32) -> Self {
        self.desired_width = Some(width);
        self
    }

    /// Limit the input length in characters.
    pub fn char_limit(mut self, limit: usize) -> Self {
        self.char_limit = Some(limit);
        self
    }

    /// Show the widget and report what happened.
    pub fn show(self, ui: &mut Ui) -> EditableOutput {
        let id = ui.make_persistent_id(self.id_salt);
        let mut session = ui
            .data_mut(|d| d.get_temp::<EditSession>(id))
            .unwrap_or_default();

        let props = ReadViewProps {
            tooltip: tooltip_for(self.single_click),
            sense: Sense::click(),
            text_style: self.text_style.unwrap_or(TextStyle::Body),
            text_color: self.text_color,
        };

        let mut submitted = None;
        let mut edit_started = false;

        let response = if session.is_editing() {
            let mut edit = TextEdit::singleline(session.buffer_mut())
                .id(id.with("input"))
                .font(props.text_style.clone());
            if let Some(color) = props.text_color {
                edit = edit.text_color(color);
            }
            if let Some(width) = self.desired_width {
                edit = edit.desired_width(width);
            }
            if let Some(limit) = self.char_limit {
                edit = edit.char_limit(limit);
            }
            let mut output = edit.show(ui);

            if session.take_focus_request() {
                // The input exists only now, one frame after the
                // transition: focus it and select the whole value.
                output.response.request_focus();
                let end = session.buffer().chars().count();
                output.state.cursor.set_char_range(Some(CCursorRange::two(
                    CCursor::new(0),
                    CCursor::new(end),
                )));
                output.state.store(ui.ctx(), output.response.id);
            }

            // Enter surrenders focus, and so does Escape: both land
            // here as a blur, which saves.
            // TODO: swallow the escape-triggered blur so Escape
            // cancels instead of saving.
            if output.response.lost_focus() {
                submitted = session.commit();
            }

            if session.poll() {
                // Back in read mode; swap views promptly.
                ui.ctx().request_repaint();
            } else if let Some(delay) = session.time_until_revert() {
                ui.ctx().request_repaint_after(delay);
            }

            output.response
        } else {
            let response = match self.read_view {
                Some(render) => render(ui, self.value, &props),
                None => {
                    let mut text =
                        RichText::new(self.value).text_style(props.text_style.clone());
                    if let Some(color) = props.text_color {
                        text = text.color(color);
                    }
                    ui.add(Label::new(text).sense(props.sense))
                }
            };

            let start_edit =
                response.double_clicked() || (self.single_click && response.clicked());
            if start_edit && session.begin_edit(self.value) {
                edit_started = true;
                // The input renders on the next frame; make sure it
                // arrives so the deferred focus can land.
                ui.ctx().request_repaint();
            }

            response
                .on_hover_text(props.tooltip)
                .on_hover_cursor(CursorIcon::Text)
        };

        let editing = session.is_editing();
        if editing {
            ui.data_mut(|d| d.insert_temp(id, session));
        } else {
            // Read mode needs no state; dropping it resets the widget.
            ui.data_mut(|d| d.remove::<EditSession>(id));
        }

        EditableOutput {
            response,
            submitted,
            edit_started,
            editing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{
        CentralPanel, Context, Event, Key, Modifiers, PointerButton, Pos2, RawInput, Rect, vec2,
    };

    fn raw_input(time: f64, events: Vec<Event>) -> RawInput {
        RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(640.0, 480.0))),
            time: Some(time),
            events,
            ..Default::default()
        }
    }

    fn press_release(pos: Pos2) -> Vec<Event> {
        vec![
            Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed: true,
                modifiers: Modifiers::NONE,
            },
            Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed: false,
                modifiers: Modifiers::NONE,
            },
        ]
    }

    fn double_click(pos: Pos2) -> Vec<Event> {
        let mut events = press_release(pos);
        events.extend(press_release(pos));
        events
    }

    fn key_press(key: Key) -> Vec<Event> {
        vec![Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::NONE,
        }]
    }

    /// Run one frame, showing an `Editable` built by `build`.
    fn frame(
        ctx: &Context,
        time: f64,
        events: Vec<Event>,
        build: impl FnOnce() -> Editable<'static>,
    ) -> EditableOutput {
        let mut output = None;
        let mut build = Some(build);
        let _ = ctx.run(raw_input(time, events), |ctx| {
            CentralPanel::default().show(ctx, |ui| {
                if let Some(build) = build.take() {
                    output = Some(build().show(ui));
                }
            });
        });
        output.expect("widget was not shown")
    }

    #[test]
    fn test_tooltip_matches_click_mode() {
        assert_eq!(tooltip_for(true), CLICK_TO_EDIT);
        assert_eq!(tooltip_for(false), DOUBLE_CLICK_TO_EDIT);
    }

    #[test]
    fn test_starts_in_read_mode() {
        let ctx = Context::default();
        let output = frame(&ctx, 0.0, vec![], || Editable::new("field", "hello"));

        assert!(!output.editing);
        assert!(!output.edit_started);
        assert!(output.submitted.is_none());
    }

    #[test]
    fn test_double_click_enters_edit_mode() {
        let ctx = Context::default();
        // Warm-up frame so the label rect is known for hit testing.
        let output = frame(&ctx, 0.0, vec![], || Editable::new("field", "hello"));
        let pos = output.response.rect.center();

        let output = frame(&ctx, 0.1, double_click(pos), || {
            Editable::new("field", "hello")
        });

        assert!(output.edit_started);
        assert!(output.editing);
        assert!(output.submitted.is_none());
    }

    #[test]
    fn test_single_click_ignored_by_default() {
        let ctx = Context::default();
        let output = frame(&ctx, 0.0, vec![], || Editable::new("field", "hello"));
        let pos = output.response.rect.center();

        let output = frame(&ctx, 0.1, press_release(pos), || {
            Editable::new("field", "hello")
        });

        assert!(!output.edit_started);
        assert!(!output.editing); // No mode change
    }

    #[test]
    fn test_single_click_enters_edit_when_enabled() {
        let ctx = Context::default();
        let output = frame(&ctx, 0.0, vec![], || {
            Editable::new("field", "hello").single_click(true)
        });
        let pos = output.response.rect.center();

        let output = frame(&ctx, 0.1, press_release(pos), || {
            Editable::new("field", "hello").single_click(true)
        });

        assert!(output.edit_started);
        assert!(output.editing);
    }

    #[test]
    fn test_edit_start_reported_once() {
        let ctx = Context::default();
        let output = frame(&ctx, 0.0, vec![], || Editable::new("field", "hello"));
        let pos = output.response.rect.center();

        let output = frame(&ctx, 0.1, double_click(pos), || {
            Editable::new("field", "hello")
        });
        assert!(output.edit_started);

        // Subsequent frames stay in edit mode without re-reporting.
        let output = frame(&ctx, 0.2, vec![], || Editable::new("field", "hello"));
        assert!(output.editing);
        assert!(!output.edit_started);
    }

    #[test]
    fn test_type_and_enter_submits_trimmed_value() {
        let ctx = Context::default();
        let output = frame(&ctx, 0.0, vec![], || Editable::new("field", "hello"));
        let pos = output.response.rect.center();

        // Enter edit mode, then let the deferred focus-and-select land.
        frame(&ctx, 0.1, double_click(pos), || {
            Editable::new("field", "hello")
        });
        frame(&ctx, 0.2, vec![], || Editable::new("field", "hello"));

        // Typing replaces the selected seed value.
        let output = frame(&ctx, 0.3, vec![Event::Text("  world ".into())], || {
            Editable::new("field", "hello")
        });
        assert!(output.editing);
        assert!(output.submitted.is_none());

        let output = frame(&ctx, 0.4, key_press(Key::Enter), || {
            Editable::new("field", "hello")
        });
        assert_eq!(output.submitted.as_deref(), Some("world"));
        // The edit view lingers until the revert delay elapses.
        assert!(output.editing);
    }

    #[test]
    fn test_reverts_to_read_view_after_delay() {
        let ctx = Context::default();
        let output = frame(&ctx, 0.0, vec![], || Editable::new("field", "hello"));
        let pos = output.response.rect.center();

        frame(&ctx, 0.1, double_click(pos), || {
            Editable::new("field", "hello")
        });
        frame(&ctx, 0.2, vec![], || Editable::new("field", "hello"));
        let output = frame(&ctx, 0.3, key_press(Key::Enter), || {
            Editable::new("field", "hello")
        });
        assert!(output.submitted.is_some());

        std::thread::sleep(std::time::Duration::from_millis(150));

        // Caller re-renders with the committed value.
        let output = frame(&ctx, 0.5, vec![], || Editable::new("field", "world"));
        assert!(!output.editing);
    }

    #[test]
    fn test_escape_still_commits_nonempty_content() {
        let ctx = Context::default();
        let output = frame(&ctx, 0.0, vec![], || Editable::new("field", "hello"));
        let pos = output.response.rect.center();

        frame(&ctx, 0.1, double_click(pos), || {
            Editable::new("field", "hello")
        });
        frame(&ctx, 0.2, vec![], || Editable::new("field", "hello"));

        // Escape surrenders focus, and the blur path saves.
        let output = frame(&ctx, 0.3, key_press(Key::Escape), || {
            Editable::new("field", "hello")
        });

        assert_eq!(output.submitted.as_deref(), Some("hello"));
    }

    #[test]
    fn test_cleared_input_is_not_submitted() {
        let ctx = Context::default();
        let output = frame(&ctx, 0.0, vec![], || Editable::new("field", "hello"));
        let pos = output.response.rect.center();

        frame(&ctx, 0.1, double_click(pos), || {
            Editable::new("field", "hello")
        });
        frame(&ctx, 0.2, vec![], || Editable::new("field", "hello"));

        // Backspace deletes the selected seed value, then Enter.
        frame(&ctx, 0.3, key_press(Key::Backspace), || {
            Editable::new("field", "hello")
        });
        let output = frame(&ctx, 0.4, key_press(Key::Enter), || {
            Editable::new("field", "hello")
        });

        assert!(output.submitted.is_none());
        assert!(output.editing); // Stays in edit mode with empty input
    }
}
