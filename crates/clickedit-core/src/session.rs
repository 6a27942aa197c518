//! Editing session state machine for inline click-to-edit widgets.

use std::time::Duration;

// Use web_time for WASM compatibility
#[cfg(target_arch = "wasm32")]
use web_time::Instant;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

/// Delay between an accepted commit and the return to read mode.
///
/// This gives the caller's re-render (showing the committed value)
/// time to land before the read view reappears, so the stale value
/// never flashes.
pub const REVERT_DELAY: Duration = Duration::from_millis(100);

/// Which view of the widget is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditMode {
    /// Showing the value as static text.
    #[default]
    Reading,
    /// Showing the text input.
    Editing,
}

/// Per-instance editing state, carried across frames.
///
/// The session owns the uncontrolled edit buffer: it is seeded from
/// the caller's value once when editing starts, and the caller's value
/// is not consulted again until commit.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    mode: EditMode,
    buffer: String,
    /// Focus-and-select is deferred to the first edit-view render;
    /// the input only exists after that render completes.
    focus_pending: bool,
    /// Set once a commit is accepted; the session returns to read
    /// mode when the deadline passes.
    revert_at: Option<Instant>,
}

impl EditSession {
    /// Create a new session in read mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current mode.
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Check if the edit view is active.
    pub fn is_editing(&self) -> bool {
        self.mode == EditMode::Editing
    }

    /// Get the edit buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Get mutable access to the edit buffer (bound to the text input).
    pub fn buffer_mut(&mut self) -> &mut String {
        &mut self.buffer
    }

    /// Check if a commit was accepted and the revert delay is running.
    pub fn commit_pending(&self) -> bool {
        self.revert_at.is_some()
    }

    /// Enter edit mode, seeding the buffer from the current value.
    ///
    /// Returns `false` if the session is already editing.
    pub fn begin_edit(&mut self, value: &str) -> bool {
        if self.mode == EditMode::Editing {
            return false;
        }
        self.mode = EditMode::Editing;
        self.buffer.clear();
        self.buffer.push_str(value);
        self.focus_pending = true;
        true
    }

    /// Consume the deferred focus-and-select request.
    ///
    /// Returns `true` exactly once per [`EditSession::begin_edit`].
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_pending)
    }

    /// Try to commit the edit buffer.
    ///
    /// Trims leading/trailing whitespace. An empty result is rejected:
    /// nothing is returned and the session stays in edit mode. A
    /// non-empty result is returned exactly once; repeat calls while
    /// the revert delay runs are no-ops, so Enter followed by a blur
    /// does not submit twice.
    pub fn commit(&mut self) -> Option<String> {
        if self.mode != EditMode::Editing || self.revert_at.is_some() {
            return None;
        }

        let value = self.buffer.trim();
        if value.is_empty() {
            // Don't do anything if it's empty
            return None;
        }

        let value = value.to_string();
        self.revert_at = Some(Instant::now() + REVERT_DELAY);
        Some(value)
    }

    /// Get the time left until the deferred return to read mode.
    ///
    /// `None` when no commit is pending.
    pub fn time_until_revert(&self) -> Option<Duration> {
        self.revert_at
            .map(|at| at.saturating_duration_since(Instant::now()))
    }

    /// Finalize the deferred return to read mode.
    ///
    /// Returns `true` if the session just reverted to reading.
    pub fn poll(&mut self) -> bool {
        match self.revert_at {
            Some(at) if Instant::now() >= at => {
                self.mode = EditMode::Reading;
                self.buffer.clear();
                self.focus_pending = false;
                self.revert_at = None;
                true
            }
            _ => false,
        }
    }
}
