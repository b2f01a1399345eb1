//! Input field handling for the terminal user interface.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A text input field with cursor position and active state management.
///
/// The cursor counts characters, not bytes.
#[derive(Clone, Debug, Default)]
pub struct InputField {
    pub value: String,
    pub cursor: usize,
    pub active: bool,
    pub multiline: bool,
}

impl InputField {
    /// Create a new empty single-line input field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty field that accepts line breaks.
    pub fn multiline() -> Self {
        Self {
            multiline: true,
            ..Self::default()
        }
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    /// Insert a character at the current cursor position.
    pub fn handle_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn handle_backspace(&mut self) {
        if self.cursor > 0 {
            let at = self.byte_offset(self.cursor - 1);
            self.value.remove(at);
            self.cursor -= 1;
        }
    }

    /// Delete the character at the cursor position.
    pub fn handle_delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_offset(self.cursor);
            self.value.remove(at);
        }
    }

    /// Move cursor one position to the left.
    pub fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor one position to the right.
    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Apply an editing key. Returns false for keys the field does not handle.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter if self.multiline && key.modifiers.contains(KeyModifiers::ALT) => {
                self.handle_char('\n');
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.handle_char(c);
            }
            KeyCode::Backspace => self.handle_backspace(),
            KeyCode::Delete => self.handle_delete(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Home => self.move_cursor_home(),
            KeyCode::End => self.move_cursor_end(),
            _ => return false,
        }
        true
    }

    /// Cursor position as (line, column) within the text, both 0-based.
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let before = &self.value[..self.byte_offset(self.cursor)];
        let line = before.matches('\n').count();
        let col = before.rsplit('\n').next().map_or(0, |l| l.chars().count());
        (line, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn typed(text: &str) -> InputField {
        let mut field = InputField::new();
        for c in text.chars() {
            field.handle_char(c);
        }
        field
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut field = typed("abc");
        assert_eq!(field.value, "abc");
        assert_eq!(field.cursor, 3);
        field.handle_backspace();
        assert_eq!(field.value, "ab");
        field.move_cursor_home();
        field.handle_backspace();
        assert_eq!(field.value, "ab");
    }

    #[test]
    fn test_insert_in_middle_of_multibyte_text() {
        let mut field = typed("héllo");
        field.move_cursor_left();
        field.move_cursor_left();
        field.handle_char('✓');
        assert_eq!(field.value, "hél✓lo");
        field.handle_delete();
        assert_eq!(field.value, "hél✓o");
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut field = typed("ab");
        field.move_cursor_right();
        assert_eq!(field.cursor, 2);
        field.handle_delete();
        assert_eq!(field.value, "ab");
        field.move_cursor_home();
        field.move_cursor_left();
        assert_eq!(field.cursor, 0);
    }

    #[test]
    fn test_handle_key_ignores_control_chords_and_plain_enter() {
        let mut field = InputField::multiline();
        assert!(!field.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!field.handle_key(key(KeyCode::Enter)));
        assert!(field.handle_key(key(KeyCode::Char('x'))));
        assert!(field.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT)));
        assert!(field.handle_key(key(KeyCode::Char('y'))));
        assert_eq!(field.value, "x\ny");
        assert_eq!(field.cursor_line_col(), (1, 1));
    }

    #[test]
    fn test_single_line_rejects_newline() {
        let mut field = InputField::new();
        assert!(!field.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT)));
        assert!(field.value.is_empty());
    }
}
