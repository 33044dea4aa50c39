/// Cursor-aware text buffer backing the search bar.
///
/// The cursor is a byte offset and is kept on a char boundary at all times,
/// so multi-byte input is safe.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    buffer: String,
    cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.buffer.remove(prev);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.buffer[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn set(&mut self, text: String) {
        self.cursor = text.len();
        self.buffer = text;
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(idx, _)| idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_with(text: &str) -> InputState {
        let mut input = InputState::new();
        input.set(text.to_string());
        input
    }

    #[test]
    fn test_new_is_empty() {
        let input = InputState::new();
        assert!(input.is_empty());
        assert_eq!(input.as_str(), "");
        assert_eq!(input.cursor_pos(), 0);
    }

    #[test]
    fn test_insert_and_edit_midline() {
        let mut input = input_with("ac");
        input.move_left();
        input.insert_char('b');
        assert_eq!(input.as_str(), "abc");
        assert_eq!(input.cursor_pos(), 2);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = input_with("a");
        input.move_home();
        input.backspace();
        assert_eq!(input.as_str(), "a");
    }

    #[test]
    fn test_delete_removes_char_under_cursor() {
        let mut input = input_with("abc");
        input.move_home();
        input.delete();
        assert_eq!(input.as_str(), "bc");
        assert_eq!(input.cursor_pos(), 0);

        input.move_end();
        input.delete();
        assert_eq!(input.as_str(), "bc");
    }

    #[test]
    fn test_set_places_cursor_at_end() {
        let input = input_with("pharma");
        assert_eq!(input.cursor_pos(), 6);
    }

    #[test]
    fn test_clear() {
        let mut input = input_with("query");
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor_pos(), 0);
    }

    #[test]
    fn test_multibyte_navigation() {
        // "a" + e-acute (2 bytes) + emoji (4 bytes)
        let mut input = input_with("a\u{00e9}\u{1f600}");
        assert_eq!(input.cursor_pos(), 7);

        input.move_left();
        assert_eq!(input.cursor_pos(), 3);
        input.move_left();
        assert_eq!(input.cursor_pos(), 1);

        input.backspace();
        assert_eq!(input.as_str(), "\u{00e9}\u{1f600}");
        assert_eq!(input.cursor_pos(), 0);

        input.move_right();
        assert_eq!(input.cursor_pos(), 2);
    }

    #[test]
    fn test_backspace_multibyte_at_end() {
        let mut input = input_with("caf\u{00e9}");
        input.backspace();
        assert_eq!(input.as_str(), "caf");
        assert_eq!(input.cursor_pos(), 3);
    }
}
