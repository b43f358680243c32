//! Region list widget — the region filter in the left pane.
//!
//! # Navigation
//! - `↑`/`k` and `↓`/`j` move the cursor.
//! - `Enter`, `Space` or `→`/`l` apply the region under the cursor as the
//!   browse filter. The first row, "All regions", clears the filter.
//!
//! The applied region is marked with `●`; the cursor row is reversed.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use leksikon_core::data::region_name;
use leksikon_core::LexiconSource;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, StatefulWidget, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionItem {
    /// `None` for the "All regions" row.
    pub key: Option<String>,
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Default)]
pub struct RegionListState {
    pub items: Vec<RegionItem>,
    pub cursor: usize,
    /// Index of the applied filter row.
    pub applied: usize,
}

impl RegionListState {
    pub fn new(source: &impl LexiconSource) -> Self {
        let mut items = vec![RegionItem {
            key: None,
            label: "All regions".to_string(),
            count: source.entries().len(),
        }];
        items.extend(source.regions().into_iter().map(|key| RegionItem {
            key: Some(key.to_string()),
            label: region_name(key).to_string(),
            count: source.region(key).map_or(0, <[_]>::len),
        }));
        Self {
            items,
            cursor: 0,
            applied: 0,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.iter().any(|i| i.key.as_deref() == Some(key))
    }

    /// Mark `key` as applied and move the cursor to it. Unknown keys are
    /// ignored.
    pub fn mark_applied(&mut self, key: Option<&str>) {
        if let Some(idx) = self.items.iter().position(|i| i.key.as_deref() == key) {
            self.applied = idx;
            self.cursor = idx;
        }
    }

    /// Handle a navigation event. Returns the region to apply when the user
    /// picked a row (`Some(None)` for "All regions").
    pub fn handle(&mut self, event: &AppEvent) -> Option<Option<String>> {
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
                tracing::debug!(cursor = self.cursor, "regions: cursor up");
                None
            }
            AppEvent::Nav(Direction::Down) => {
                if self.cursor + 1 < self.items.len() {
                    self.cursor += 1;
                }
                tracing::debug!(cursor = self.cursor, "regions: cursor down");
                None
            }
            AppEvent::Enter | AppEvent::Char(' ') | AppEvent::Nav(Direction::Right) => {
                let item = self.items.get(self.cursor)?;
                self.applied = self.cursor;
                tracing::debug!(region = ?item.key, "regions: applied");
                Some(item.key.clone())
            }
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct RegionList<'a> {
    state: &'a RegionListState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> RegionList<'a> {
    pub fn new(state: &'a RegionListState, focused: bool, theme: &'a Theme) -> Self {
        Self {
            state,
            focused,
            theme,
        }
    }
}

impl Widget for RegionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("Regions")
            .border_style(self.theme.border(self.focused));

        let inner = block.inner(area);
        block.render(area, buf);

        let items: Vec<ListItem> = self
            .state
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                let marker = if idx == self.state.applied { "● " } else { "  " };
                let label_style = match &item.key {
                    Some(key) => self.theme.region_style(key),
                    None => Style::default(),
                };
                ListItem::new(Line::from(vec![
                    Span::raw(marker),
                    Span::styled(item.label.clone(), label_style),
                    Span::styled(format!(" ({})", item.count), self.theme.muted),
                ]))
            })
            .collect();

        let list = List::new(items).highlight_style(if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        });

        let mut list_state = ListState::default().with_selected(Some(self.state.cursor));
        StatefulWidget::render(list, inner, buf, &mut list_state);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
