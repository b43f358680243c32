//! Single-line text editing shared by the search bar and the command bar.
//!
//! The cursor is a byte offset that always sits on a `char` boundary, so
//! multi-byte input such as `é` or `ꦗ` is inserted and deleted whole.

use crate::event::{AppEvent, Direction};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LineInput {
    text: String,
    cursor: usize,
}

impl LineInput {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Display column of the cursor, counted in chars from the start.
    pub fn column(&self) -> u16 {
        self.text[..self.cursor].chars().count() as u16
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Apply one editing event. Returns `true` when the text changed; cursor
    /// moves and unrelated events return `false`.
    pub fn edit(&mut self, event: &AppEvent) -> bool {
        match event {
            AppEvent::Char(c) => {
                self.text.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                true
            }
            AppEvent::Backspace => match self.before_cursor() {
                Some(c) => {
                    self.cursor -= c.len_utf8();
                    self.text.remove(self.cursor);
                    true
                }
                None => false,
            },
            AppEvent::Nav(Direction::Left) => {
                if let Some(c) = self.before_cursor() {
                    self.cursor -= c.len_utf8();
                }
                false
            }
            AppEvent::Nav(Direction::Right) => {
                if let Some(c) = self.text[self.cursor..].chars().next() {
                    self.cursor += c.len_utf8();
                }
                false
            }
            _ => false,
        }
    }

    fn before_cursor(&self) -> Option<char> {
        self.text[..self.cursor].chars().next_back()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
