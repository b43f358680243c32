//! Entry list widget — the current page of browse results.
//!
//! # Navigation (when pane is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Move cursor up one row |
//! | `↓` / `j` | Move cursor down one row |
//! | `[` / `]`, `PageUp` / `PageDown` | Previous / next page (handled by the App) |
//! | `g` / `G` | First / last page (handled by the App) |
//! | `Enter` | Open the entry under the cursor in a new tab |
//!
//! The cursor is an index into the rows of the current page only; the App
//! resets it whenever the page or the filter changes.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use leksikon_core::data::region_name;
use leksikon_core::highlight::{Highlighter, Segment};
use leksikon_core::paginate::{render_pager, PageToken};
use leksikon_core::view::{ViewPage, ViewRow};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct EntryListState {
    /// Row index within the current page.
    pub cursor: usize,
}

impl EntryListState {
    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor. `rows` is the number of rows on the current page.
    pub fn handle(&mut self, event: &AppEvent, rows: usize) {
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
                tracing::debug!(cursor = self.cursor, "entries: cursor up");
            }
            AppEvent::Nav(Direction::Down) => {
                if self.cursor + 1 < rows {
                    self.cursor += 1;
                }
                tracing::debug!(cursor = self.cursor, "entries: cursor down");
            }
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct EntryList<'a> {
    state: &'a EntryListState,
    page: &'a ViewPage<'a>,
    /// Query to emphasize in terms and definitions.
    query: &'a str,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> EntryList<'a> {
    pub fn new(
        state: &'a EntryListState,
        page: &'a ViewPage<'a>,
        query: &'a str,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            state,
            page,
            query,
            focused,
            theme,
        }
    }
}

impl Widget for EntryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let pagination = &self.page.pagination;
        let title = if pagination.total_pages > 0 {
            format!("Entries · page {}/{}", pagination.page, pagination.total_pages)
        } else {
            "Entries".to_string()
        };
        let block = Block::bordered()
            .title(title)
            .border_style(self.theme.border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        let [rows_area, footer_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(inner);

        let highlighter = Highlighter::new(self.query);
        let lines: Vec<Line<'_>> = if self.page.rows.is_empty() {
            let msg = if self.query.trim().is_empty() {
                "No entries in this region".to_string()
            } else {
                format!("No entries match \"{}\"", self.query.trim())
            };
            vec![Line::from(Span::styled(msg, self.theme.muted))]
        } else {
            self.page
                .rows
                .iter()
                .enumerate()
                .map(|(idx, row)| {
                    let line = render_row(row, &highlighter, self.theme);
                    if self.focused && idx == self.state.cursor {
                        line.patch_style(Style::default().add_modifier(Modifier::REVERSED))
                    } else {
                        line
                    }
                })
                .collect()
        };
        Paragraph::new(lines).render(rows_area, buf);

        let mut footer = pager_spans(&pagination.pages, pagination.page, self.theme);
        if !footer.is_empty() {
            footer.push(Span::raw("   "));
        }
        footer.push(Span::styled(pagination.summary(), self.theme.muted));
        buf.set_line(
            footer_area.x,
            footer_area.y,
            &Line::from(footer),
            footer_area.width,
        );
    }
}

// ---------------------------------------------------------------------------
// Row rendering
// ---------------------------------------------------------------------------

fn render_row<'a>(row: &ViewRow<'a>, highlighter: &Highlighter, theme: &Theme) -> Line<'a> {
    let entry = &row.item.entry;
    let mut spans = vec![Span::styled(
        format!("{:<10} ", region_name(&row.item.region)),
        theme.region_style(&row.item.region),
    )];
    spans.extend(emphasized(
        highlighter.segments(&entry.term),
        theme.term,
        theme.search_highlight,
    ));
    spans.push(Span::styled(" · ", theme.muted));
    spans.extend(emphasized(
        highlighter.segments(&entry.definition),
        theme.definition,
        theme.search_highlight,
    ));
    if !row.matches.is_empty() {
        let fields: Vec<&str> = row.matches.iter().map(|f| f.as_str()).collect();
        spans.push(Span::styled(format!("  [{}]", fields.join(", ")), theme.muted));
    }
    Line::from(spans)
}

fn emphasized<'a>(segments: Vec<Segment<'a>>, base: Style, hit: Style) -> Vec<Span<'a>> {
    segments
        .into_iter()
        .map(|segment| match segment {
            Segment::Plain(text) => Span::styled(text, base),
            Segment::Emphasized(text) => Span::styled(text, base.patch(hit)),
        })
        .collect()
}

fn pager_spans(tokens: &[PageToken], current: usize, theme: &Theme) -> Vec<Span<'static>> {
    // Token text is shared with the headless pager so both read the same.
    render_pager(tokens, current)
        .split(' ')
        .filter(|word| !word.is_empty())
        .enumerate()
        .flat_map(|(i, word)| {
            let style = if word.starts_with('[') {
                theme.pager_current
            } else {
                theme.pager_other
            };
            let sep = (i > 0).then(|| Span::raw(" "));
            sep.into_iter().chain(Some(Span::styled(word.to_string(), style)))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
