//! Entry detail widget — every field of one entry, opened in its own tab.
//!
//! Absent optional fields render as `—`. The query that was active when the
//! tab was opened stays emphasized in the text.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use leksikon_core::data::REGIONS;
use leksikon_core::highlight::{Highlighter, Segment};
use leksikon_core::types::{LexiconEntry, RegionalEntry};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

const LABEL_WIDTH: usize = 18;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct EntryDetailState {
    pub item: RegionalEntry,
    pub query: String,
    /// Lines scrolled off the top.
    pub scroll: u16,
}

impl EntryDetailState {
    pub fn new(item: RegionalEntry, query: impl Into<String>) -> Self {
        Self {
            item,
            query: query.into(),
            scroll: 0,
        }
    }

    /// Tab label: the headword.
    pub fn label(&self) -> &str {
        &self.item.entry.term
    }

    pub fn handle(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Nav(Direction::Up) => self.scroll = self.scroll.saturating_sub(1),
            AppEvent::Nav(Direction::Down) => self.scroll = self.scroll.saturating_add(1),
            AppEvent::PrevPage => self.scroll = self.scroll.saturating_sub(10),
            AppEvent::NextPage => self.scroll = self.scroll.saturating_add(10),
            AppEvent::FirstPage => self.scroll = 0,
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct EntryDetail<'a> {
    state: &'a EntryDetailState,
    theme: &'a Theme,
}

impl<'a> EntryDetail<'a> {
    pub fn new(state: &'a EntryDetailState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for EntryDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let item = &self.state.item;
        let block = Block::bordered()
            .title(format!("{} · {}", item.entry.term, item.entry.slug()))
            .border_style(self.theme.border(true));

        let lines = detail_lines(item, &Highlighter::new(&self.state.query), self.theme);
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.state.scroll, 0))
            .render(area, buf);
    }
}

fn detail_lines<'a>(
    item: &'a RegionalEntry,
    highlighter: &Highlighter,
    theme: &Theme,
) -> Vec<Line<'a>> {
    let entry = &item.entry;
    let region = match REGIONS.get(item.region.as_str()) {
        Some(info) => format!("{} ({})", info.name, info.area),
        None => item.region.clone(),
    };
    let variants = (!entry.variants.is_empty()).then(|| entry.variants.join(", "));

    let mut lines = vec![
        field(theme, "Term", &entry.term, highlighter, theme.term),
        field(
            theme,
            "Transliteration",
            LexiconEntry::display(entry.transliteration.as_deref()),
            highlighter,
            theme.definition,
        ),
        field(theme, "Term code", &entry.term_code, highlighter, theme.muted),
        owned_field(theme, "Region", region, theme.region_style(&item.region)),
        Line::default(),
        field(theme, "Definition", &entry.definition, highlighter, theme.definition),
        field(
            theme,
            "Etymology",
            LexiconEntry::display(entry.etymology.as_deref()),
            highlighter,
            theme.definition,
        ),
        field(
            theme,
            "Cultural meaning",
            LexiconEntry::display(entry.cultural_meaning.as_deref()),
            highlighter,
            theme.definition,
        ),
        field(
            theme,
            "Common meaning",
            LexiconEntry::display(entry.common_meaning.as_deref()),
            highlighter,
            theme.definition,
        ),
    ];
    lines.push(owned_field(
        theme,
        "Variants",
        LexiconEntry::display(variants.as_deref()).to_string(),
        theme.definition,
    ));
    lines.push(field(
        theme,
        "Note",
        LexiconEntry::display(entry.note.as_deref()),
        highlighter,
        theme.definition,
    ));
    lines.push(Line::default());
    lines.push(field(
        theme,
        "Availability",
        LexiconEntry::display(entry.availability.as_deref()),
        highlighter,
        theme.muted,
    ));
    lines.push(field(
        theme,
        "Image",
        LexiconEntry::display(entry.image_id.as_deref()),
        highlighter,
        theme.muted,
    ));
    lines
}

fn label<'a>(theme: &Theme, name: &'a str) -> Span<'a> {
    Span::styled(format!("{name:<LABEL_WIDTH$}"), theme.label)
}

fn field<'a>(
    theme: &Theme,
    name: &'a str,
    value: &'a str,
    highlighter: &Highlighter,
    style: Style,
) -> Line<'a> {
    let mut spans = vec![label(theme, name)];
    spans.extend(highlighter.segments(value).into_iter().map(|segment| match segment {
        Segment::Plain(text) => Span::styled(text, style),
        Segment::Emphasized(text) => Span::styled(text, style.patch(theme.search_highlight)),
    }));
    Line::from(spans)
}

fn owned_field<'a>(theme: &Theme, name: &'a str, value: String, style: Style) -> Line<'a> {
    Line::from(vec![label(theme, name), Span::styled(value, style)])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use leksikon_core::types::NO_VALUE;
    use pretty_assertions::assert_eq;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn pujan() -> RegionalEntry {
        let mut entry = LexiconEntry::new("tengger", "Pujan", "Upacara adat Tengger");
        entry.variants = vec!["Pujan Kapat".into(), "Pujan Kasanga".into()];
        RegionalEntry::new("tengger", entry)
    }

    #[test]
    fn absent_fields_render_as_dash() {
        let theme = Theme::load_default();
        let item = pujan();
        let lines = detail_lines(&item, &Highlighter::new(""), &theme);
        let etymology = lines
            .iter()
            .map(line_text)
            .find(|l| l.starts_with("Etymology"))
            .unwrap();
        assert!(etymology.ends_with(NO_VALUE));
    }

    #[test]
    fn region_shows_name_and_area() {
        let theme = Theme::load_default();
        let item = pujan();
        let lines = detail_lines(&item, &Highlighter::new(""), &theme);
        let region = lines.iter().map(line_text).find(|l| l.starts_with("Region")).unwrap();
        assert!(region.contains("Tengger (Bromo highlands"));
        let variants = lines.iter().map(line_text).find(|l| l.starts_with("Variants")).unwrap();
        assert!(variants.ends_with("Pujan Kapat, Pujan Kasanga"));
    }

    #[test]
    fn query_is_emphasized_in_definition() {
        let theme = Theme::load_default();
        let item = pujan();
        let lines = detail_lines(&item, &Highlighter::new("adat"), &theme);
        let definition = lines
            .iter()
            .find(|l| line_text(l).starts_with("Definition"))
            .unwrap();
        let hit = definition.spans.iter().find(|s| s.content == "adat").unwrap();
        assert_eq!(hit.style, theme.definition.patch(theme.search_highlight));
    }

    #[test]
    fn scroll_saturates_at_top() {
        let mut state = EntryDetailState::new(pujan(), "");
        state.handle(&AppEvent::Nav(Direction::Up));
        assert_eq!(state.scroll, 0);
        state.handle(&AppEvent::NextPage);
        state.handle(&AppEvent::Nav(Direction::Down));
        assert_eq!(state.scroll, 11);
        state.handle(&AppEvent::FirstPage);
        assert_eq!(state.scroll, 0);
        assert_eq!(state.label(), "Pujan");
    }
}
