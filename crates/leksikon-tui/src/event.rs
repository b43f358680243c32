//! Key handling for the lexicon browser: crossterm events are mapped to
//! [`AppEvent`] here, so widgets never see crossterm types.
//!
//! The event loop picks [`to_app_event`] or [`to_app_event_insert`]
//! depending on whether a text input has focus.
//!
//! # Keybindings
//!
//! | Key(s)                     | Event            |
//! |----------------------------|------------------|
//! | `q`, `Ctrl+c`              | `Quit`           |
//! | `Tab`                      | `FocusNext`      |
//! | `/`                        | `QueryFocus`     |
//! | `[`, `PageUp`, `Ctrl+u`    | `PrevPage`       |
//! | `]`, `PageDown`, `Ctrl+d`  | `NextPage`       |
//! | `g`, `Home`                | `FirstPage`      |
//! | `G`, `End`                 | `LastPage`       |
//! | `↑` / `k`                  | `Nav(Up)`        |
//! | `↓` / `j`                  | `Nav(Down)`      |
//! | `←` / `h`                  | `Nav(Left)`      |
//! | `→` / `l`                  | `Nav(Right)`     |
//! | printable char             | `Char(c)`        |
//! | `Backspace`                | `Backspace`      |
//! | `Enter`                    | `Enter`          |
//! | terminal resize            | `Resize(w, h)`   |
//!
//! ## Insert mode
//!
//! When a text-input widget (query bar, command bar) is focused, the event
//! loop calls [`to_app_event_insert`] instead. In insert mode:
//! - hjkl, q, g, G, `/`, `[` and `]` produce `Char` events
//! - Arrow keys still produce `Nav` for cursor movement
//! - `PageUp` / `PageDown` still turn pages, so results can be paged while
//!   typing
//! - Only `Ctrl+c`, `Escape`, `Enter`, `Tab`, and `Backspace` keep their
//!   special bindings

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

/// Cardinal direction for list and cursor navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A semantic application event derived from a raw crossterm [`Event`].
///
/// Widgets receive `AppEvent` values and never inspect crossterm types. The
/// App shell routes events to widgets based on the current focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Exit the application (or close the focused entry tab).
    Quit,
    /// Move keyboard focus to the next pane (Tab-cycle).
    FocusNext,
    /// Transfer focus to the query bar.
    QueryFocus,
    PrevPage,
    NextPage,
    FirstPage,
    LastPage,
    /// Move within the focused list or text input.
    Nav(Direction),
    /// A printable character forwarded to the active text input.
    Char(char),
    /// Delete the character before the cursor in the active text input.
    Backspace,
    /// Confirm the active input, select a region or open an entry.
    Enter,
    /// The terminal was resized to the given (width, height).
    Resize(u16, u16),
    /// Dismiss the active modal (query bar focus, help popup, command bar).
    Escape,
}

/// Map a raw crossterm [`Event`] for browsing (normal mode).
///
/// Returns `None` for events with no meaning here (mouse, unbound keys).
pub fn to_app_event(event: Event) -> Option<AppEvent> {
    map_event(event, map_key)
}

/// Map a raw crossterm [`Event`] while a text input has focus.
pub fn to_app_event_insert(event: Event) -> Option<AppEvent> {
    map_event(event, |key| shared_key(key).or_else(|| typed_char(key)))
}

fn map_event(event: Event, keys: impl Fn(KeyEvent) -> Option<AppEvent>) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => keys(key),
        _ => None,
    }
}

/// Bindings that hold in both modes: nothing here is a printable character,
/// apart from `Ctrl+c`.
fn shared_key(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;

    let plain = key.modifiers == KeyModifiers::NONE;
    let event = match key.code {
        Char('c') if key.modifiers == KeyModifiers::CONTROL => AppEvent::Quit,
        Up => AppEvent::Nav(Direction::Up),
        Down => AppEvent::Nav(Direction::Down),
        Left => AppEvent::Nav(Direction::Left),
        Right => AppEvent::Nav(Direction::Right),
        PageUp => AppEvent::PrevPage,
        PageDown => AppEvent::NextPage,
        Tab if plain => AppEvent::FocusNext,
        Backspace if plain => AppEvent::Backspace,
        Enter if plain => AppEvent::Enter,
        Esc => AppEvent::Escape,
        _ => return None,
    };
    Some(event)
}

fn typed_char(key: KeyEvent) -> Option<AppEvent> {
    match key.code {
        KeyCode::Char(c) if matches!(key.modifiers, KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            Some(AppEvent::Char(c))
        }
        _ => None,
    }
}

/// Normal mode: shared keys, then single-letter shortcuts, then anything
/// printable as `Char` (digits switch tabs, `?` and `:` open overlays).
fn map_key(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;

    if let Some(event) = shared_key(key) {
        return Some(event);
    }
    let plain = key.modifiers == KeyModifiers::NONE;
    let ctrl = key.modifiers == KeyModifiers::CONTROL;
    let event = match key.code {
        Char('q') if plain => AppEvent::Quit,
        Char('/') if plain => AppEvent::QueryFocus,
        Char('[') if plain => AppEvent::PrevPage,
        Char(']') if plain => AppEvent::NextPage,
        Char('u') if ctrl => AppEvent::PrevPage,
        Char('d') if ctrl => AppEvent::NextPage,
        Char('g') if plain => AppEvent::FirstPage,
        Home => AppEvent::FirstPage,
        // SHIFT may or may not be set depending on the terminal
        Char('G') => AppEvent::LastPage,
        End => AppEvent::LastPage,
        Char('k') if plain => AppEvent::Nav(Direction::Up),
        Char('j') if plain => AppEvent::Nav(Direction::Down),
        Char('h') if plain => AppEvent::Nav(Direction::Left),
        Char('l') if plain => AppEvent::Nav(Direction::Right),
        _ => return typed_char(key),
    };
    Some(event)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
