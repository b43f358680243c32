//! Top row: one label per open tab, plus the key hints.
//!
//! Entry tabs take the colour of their region so several open entries from
//! different regions stay distinguishable. A trailing `●` means the browse
//! tab still has a search scheduled or in flight.

use crate::app::{TabKind, TabState};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Tabs, Widget},
};

const HINT: &str = " q:quit  ::command  ?:help ";

pub struct TabBar<'a> {
    tabs: &'a [TabState],
    active: usize,
    theme: &'a Theme,
}

impl<'a> TabBar<'a> {
    pub fn new(tabs: &'a [TabState], active: usize, theme: &'a Theme) -> Self {
        Self {
            tabs,
            active,
            theme,
        }
    }

    fn tab_line(&self, number: usize, tab: &TabState) -> Line<'static> {
        let style = match &tab.kind {
            TabKind::Browse => Style::default(),
            TabKind::Entry(detail) => self.theme.region_style(&detail.item.region),
        };
        let mut spans = vec![
            Span::styled(format!(" {number}:"), self.theme.muted),
            Span::styled(tab.label().to_string(), style),
        ];
        if tab.pending {
            spans.push(Span::styled(" ●", self.theme.search_highlight));
        }
        spans.push(Span::raw(" "));
        Line::from(spans)
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let labels: Vec<Line> = self
            .tabs
            .iter()
            .enumerate()
            .map(|(idx, tab)| self.tab_line(idx + 1, tab))
            .collect();

        Tabs::new(labels)
            .select(self.active)
            .highlight_style(self.theme.pager_current.add_modifier(Modifier::BOLD))
            .divider("")
            .padding("", "")
            .render(area, buf);

        let hint_x = area.right().saturating_sub(HINT.chars().count() as u16);
        buf.set_string(hint_x, area.y, HINT, self.theme.muted);
    }
}
