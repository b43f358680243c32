//! `:` commands.
//!
//! | Command | Action |
//! |---------|--------|
//! | `q`, `quit` | Close the entry tab, or quit from the browse tab |
//! | `q!`, `quit!` | Quit from anywhere |
//! | `help` | Toggle the help popup |
//! | `theme <name>` | Switch theme (`default`, `gruvbox`) |
//! | `page <n>` | Jump to page `n` of the current results |
//! | `region [key]` | Narrow to one region, or all regions without a key |
//! | `open <slug>` | Open the entry whose term slugifies to `slug` |

use thiserror::Error;

use crate::{app::AppState, theme::Theme};

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Close the focused entry tab; on the browse tab, close the app
    Quit,
    // Regardless of focused tab, close the app
    Exit,
    Help,
    Theme(String),
    Page(usize),
    // None clears the region filter
    Region(Option<String>),
    Open(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Nothing typed; close the bar without acting.
    #[error("")]
    Empty,
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("unknown command: {0}")]
    Unknown(String),
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    pub fn parse(input: &str) -> Result<Command, CommandError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(CommandError::Empty);
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" => Ok(Command::Quit),
            "q!" | "quit!" => Ok(Command::Exit),
            "help" => Ok(Command::Help),
            "theme" if rest.is_empty() => Err(CommandError::Usage("theme <default|gruvbox>")),
            "theme" => Ok(Command::Theme(rest.to_string())),
            "page" | "p" => match rest.parse::<usize>() {
                Ok(n) if n >= 1 => Ok(Command::Page(n)),
                _ => Err(CommandError::Usage("page <n>, n ≥ 1")),
            },
            "region" | "r" if rest.is_empty() || rest == "all" => Ok(Command::Region(None)),
            "region" | "r" => Ok(Command::Region(Some(rest.to_ascii_lowercase()))),
            "open" | "o" if rest.is_empty() => Err(CommandError::Usage("open <slug>")),
            "open" | "o" => Ok(Command::Open(rest.to_string())),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Execute a parsed [`Command`] against the application state.
///
/// Returns a message for the command bar when the command could not be
/// applied (unknown region, page out of range, no such entry).
pub fn execute_command(s: &mut AppState, cmd: Command) -> Result<(), String> {
    match cmd {
        Command::Quit => s.close_tab(),
        Command::Exit => s.quit = true,
        Command::Help => s.show_help = !s.show_help,
        Command::Theme(name) => s.theme = Theme::by_name(&name),
        Command::Page(n) => {
            if !s.browse.view.go_to(n) {
                return Err(format!(
                    "page {n} out of range (1–{})",
                    s.browse.view.total_pages()
                ));
            }
            s.browse.entries.reset_cursor();
        }
        Command::Region(region) => {
            if let Some(key) = &region {
                if !s.browse.regions.contains(key) {
                    return Err(format!("unknown region: {key}"));
                }
            }
            s.set_region(region);
        }
        Command::Open(slug) => {
            if !s.open_slug(&slug) {
                return Err(format!("no entry with slug {slug}"));
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
