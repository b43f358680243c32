//! Help popup listing keys and `:` commands, grouped by what they act on.
//!
//! Toggle with `?` or `:help`; close with `?` or `Escape`.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Browse",
        &[
            ("Tab", "regions → entries → search"),
            ("↑ k  ↓ j", "move cursor, scroll an open entry"),
            ("Enter  Space", "apply region, open entry"),
            ("1 – 9", "switch tab"),
            ("q  Ctrl+c", "close entry tab, quit"),
        ],
    ),
    (
        "Search",
        &[
            ("/", "edit the query"),
            ("Escape", "leave the query bar"),
        ],
    ),
    (
        "Pages",
        &[
            ("[  PageUp", "previous page"),
            ("]  PageDown", "next page"),
            ("g  G", "first, last page"),
        ],
    ),
    (
        "Commands",
        &[
            (":page <n>", "jump to page n"),
            (":region [key]", "narrow to a region, or all"),
            (":open <slug>", "open an entry by slug"),
            (":theme <name>", "default or gruvbox"),
            (":q  :q!", "close tab, quit"),
        ],
    ),
];

pub struct HelpPopup<'a> {
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (idx, (title, bindings)) in SECTIONS.iter().enumerate() {
            if idx > 0 {
                lines.push(Line::default());
            }
            lines.push(Line::styled(*title, self.theme.term.add_modifier(Modifier::BOLD)));
            lines.extend(bindings.iter().map(|(keys, action)| {
                Line::from(vec![
                    Span::styled(format!("  {keys:<16}"), self.theme.label),
                    Span::styled(*action, self.theme.definition),
                ])
            }));
        }
        lines
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        let popup = centered_rect(56, lines.len() as u16 + 2, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" leksikon help (? to close) ")
            .border_style(self.theme.border_focused.add_modifier(Modifier::BOLD));
        let inner = block.inner(popup);
        block.render(popup, buf);
        Paragraph::new(lines).render(inner, buf);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
