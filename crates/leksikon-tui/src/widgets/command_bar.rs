//! Command bar, a single-line overlay on the bottom row of the screen.
//!
//! Opened with `:` from any pane except the search bar. `Enter` and `Escape`
//! belong to the App shell; this widget edits the line and shows the error
//! of the last rejected command until the next key.
//!
//! See [`crate::commands::Command`] for the vocabulary.

use crate::event::AppEvent;
use crate::theme::Theme;
use crate::widgets::line_input::LineInput;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Clear, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct CommandBarState {
    input: LineInput,
    /// Why the last command was rejected.
    pub error: Option<String>,
}

impl CommandBarState {
    /// Blank line, no error. Called whenever the bar opens or closes.
    pub fn clear(&mut self) {
        self.input.clear();
        self.error = None;
    }

    pub fn text(&self) -> &str {
        self.input.as_str()
    }

    pub fn handle(&mut self, event: &AppEvent) {
        self.error = None;
        self.input.edit(event);
    }

    /// Terminal column of the text cursor; the `:` prompt takes column 0.
    pub fn cursor_col(&self, area: Rect) -> u16 {
        (area.x + 1 + self.input.column()).min(area.right().saturating_sub(1))
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct CommandBar<'a> {
    state: &'a CommandBarState,
    theme: &'a Theme,
}

impl<'a> CommandBar<'a> {
    pub fn new(state: &'a CommandBarState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for CommandBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let line = match &self.state.error {
            Some(err) => Line::from(Span::styled(format!("E  {err}"), self.theme.error)),
            None => Line::from(vec![
                Span::styled(":", self.theme.border_command_bar.add_modifier(Modifier::BOLD)),
                Span::raw(self.state.text()),
            ]),
        };
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
