//! Search bar at the bottom of the browse tab.
//!
//! Edits do not search by themselves: [`QueryBarState::handle`] reports
//! whether the text changed and the App shell schedules the debounced search.
//! The right-hand side shows the hit count and search mode, or the last
//! remote failure.

use crate::event::AppEvent;
use crate::theme::Theme;
use crate::widgets::line_input::LineInput;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

const PLACEHOLDER: &str = "press / to search terms, definitions, variants…";

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct QueryBarState {
    input: LineInput,
}

impl QueryBarState {
    pub fn text(&self) -> &str {
        self.input.as_str()
    }

    /// Apply an editing event. Returns `true` when the query text changed.
    pub fn handle(&mut self, event: &AppEvent) -> bool {
        let changed = self.input.edit(event);
        if changed {
            tracing::debug!(query = %self.input.as_str(), "query: edited");
        }
        changed
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct QueryBar<'a> {
    state: &'a QueryBarState,
    focused: bool,
    /// Right-aligned status, e.g. `"12 hits · local"`.
    status: &'a str,
    theme: &'a Theme,
}

impl<'a> QueryBar<'a> {
    pub fn new(state: &'a QueryBarState, focused: bool, status: &'a str, theme: &'a Theme) -> Self {
        Self {
            state,
            focused,
            status,
            theme,
        }
    }

    /// Terminal position of the text cursor inside the bordered `area`.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let x = (area.x + 1 + self.state.input.column()).min(area.right().saturating_sub(1));
        (x, area.y + 1)
    }
}

impl Widget for QueryBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("Search")
            .border_style(self.theme.border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        let status_width = (self.status.chars().count() as u16).saturating_add(1);
        let [text_area, status_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(status_width)]).areas(inner);

        let text = if self.state.input.is_empty() && !self.focused {
            Line::from(Span::styled(PLACEHOLDER, self.theme.muted))
        } else {
            Line::from(self.state.text())
        };
        Paragraph::new(text).render(text_area, buf);

        let status_style = if self.status.starts_with("search failed") {
            self.theme.error
        } else {
            self.theme.muted
        };
        Paragraph::new(Line::from(Span::styled(self.status, status_style))).render(status_area, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
