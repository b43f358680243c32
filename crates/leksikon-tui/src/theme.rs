//! Colour theme for the leksikon terminal browser.
//!
//! Themes are defined as TOML files. Both shipped themes are embedded in the
//! binary via [`include_str!`] so the browser works without any files on
//! disk. Pick one with [`Theme::by_name`] at startup and pass the result
//! through the application as a shared reference.
//!
//! # Colour assignment for regions
//!
//! Region keys are hashed to a stable index into the palette so the same
//! region always gets the same colour, in the region list and in entry rows
//! alike.

use config::{Config, File, FileFormat};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

/// Embedded themes: accepted names, then the TOML source. The first is the
/// fallback.
const BUILTIN: &[(&[&str], &str)] = &[
    (&["default"], include_str!("themes/default.toml")),
    (
        &["gruvbox", "gruvbox_dark", "gruvbox-dark"],
        include_str!("themes/gruvbox_dark.toml"),
    ),
];

// ---------------------------------------------------------------------------
// Raw (serde) types — mirror the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underlined: bool,
}

impl RawStyle {
    fn into_style(self) -> Style {
        let modifiers = [
            (self.bold, Modifier::BOLD),
            (self.dim, Modifier::DIM),
            (self.italic, Modifier::ITALIC),
            (self.underlined, Modifier::UNDERLINED),
        ]
        .into_iter()
        .filter(|(on, _)| *on)
        .fold(Modifier::empty(), |acc, (_, m)| acc | m);

        let mut style = Style::default().add_modifier(modifiers);
        if let Some(c) = self.fg.as_deref().and_then(parse_color) {
            style = style.fg(c);
        }
        if let Some(c) = self.bg.as_deref().and_then(parse_color) {
            style = style.bg(c);
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct RawText {
    #[serde(default)]
    term: RawStyle,
    #[serde(default)]
    definition: RawStyle,
    #[serde(default)]
    label: RawStyle,
    #[serde(default)]
    muted: RawStyle,
    #[serde(default)]
    error: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    command_bar: RawStyle,
    unfocused: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawSearch {
    highlight: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawPager {
    current: RawStyle,
    #[serde(default)]
    other: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawRegions {
    palette: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    text: RawText,
    borders: RawBorders,
    search: RawSearch,
    pager: RawPager,
    regions: RawRegions,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Application colour theme. All styles are pre-resolved ratatui [`Style`]
/// values, so nothing is parsed at render time.
#[derive(Debug, Clone)]
pub struct Theme {
    pub term: Style,
    pub definition: Style,
    /// Field labels in the entry detail pane.
    pub label: Style,
    /// Secondary text: term codes, counts, placeholders.
    pub muted: Style,
    /// Remote failures in the status line.
    pub error: Style,

    pub border_focused: Style,
    pub border_command_bar: Style,
    pub border_unfocused: Style,

    /// Inline highlight applied to query matches.
    pub search_highlight: Style,

    pub pager_current: Style,
    pub pager_other: Style,

    region_palette: Vec<Color>,
}

impl Theme {
    /// The embedded default theme.
    ///
    /// # Panics
    ///
    /// If the embedded TOML is malformed; `builtin_themes_parse` covers it.
    pub fn load_default() -> Self {
        Self::from_toml_str(BUILTIN[0].1).expect("embedded default theme is valid")
    }

    /// An embedded theme by (case-insensitive) name.
    pub fn builtin(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        let (_, src) = BUILTIN.iter().find(|(names, _)| names.contains(&name.as_str()))?;
        match Self::from_toml_str(src) {
            Ok(theme) => Some(theme),
            Err(err) => {
                tracing::error!(theme = %name, error = %err, "theme: embedded theme failed to parse");
                None
            }
        }
    }

    /// Resolve a theme name from config or the `:theme` command. Unknown
    /// names fall back to the default theme.
    pub fn by_name(name: &str) -> Self {
        Self::builtin(name).unwrap_or_else(|| {
            tracing::debug!(theme = name, "theme: unknown name, using default");
            Self::load_default()
        })
    }

    /// Parse a theme from a TOML string.
    ///
    /// Unknown keys are ignored so user themes stay forward-compatible.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            term: raw.text.term.into_style(),
            definition: raw.text.definition.into_style(),
            label: raw.text.label.into_style(),
            muted: raw.text.muted.into_style(),
            error: raw.text.error.into_style(),
            border_focused: raw.borders.focused.into_style(),
            border_command_bar: raw.borders.command_bar.into_style(),
            border_unfocused: raw.borders.unfocused.into_style(),
            search_highlight: raw.search.highlight.into_style(),
            pager_current: raw.pager.current.into_style(),
            pager_other: raw.pager.other.into_style(),
            region_palette: raw
                .regions
                .palette
                .iter()
                .filter_map(|s| parse_color(s))
                .collect(),
        })
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.border_focused
        } else {
            self.border_unfocused
        }
    }

    /// Stable [`Style`] for a region key.
    pub fn region_style(&self, region: &str) -> Style {
        if self.region_palette.is_empty() {
            return Style::default();
        }
        let idx = stable_hash(region) % self.region_palette.len();
        Style::default().fg(self.region_palette[idx])
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// djb2-style hash, stable across Rust versions and process restarts.
fn stable_hash(s: &str) -> usize {
    s.bytes().fold(5381usize, |acc, b| {
        acc.wrapping_mul(31).wrapping_add(b as usize)
    })
}

/// Parse a theme colour.
///
/// Anything ratatui's `Color::from_str` accepts (`red`, `dark_gray`,
/// `reset`, `#rrggbb`, a bare index), plus `indexed:N`.
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    match s.strip_prefix("indexed:") {
        Some(n) => n.parse().ok().map(Color::Indexed),
        None => s.parse().ok(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
