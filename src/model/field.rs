use unicode_width::UnicodeWidthStr;

/// Single-line editable text with a byte-indexed cursor that always sits on a
/// char boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    text: String,
    cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Replace the contents and park the cursor at the end.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Terminal columns between the start of the text and the cursor.
    pub fn cursor_column(&self) -> usize {
        self.text[..self.cursor].width()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.prev_boundary();
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.next_boundary();
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub fn move_right(&mut self) {
        self.cursor = self.next_boundary();
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let head = &self.text[..self.cursor];
        let trimmed = head.trim_end_matches(' ');
        let start = trimmed.rfind(' ').map(|i| i + 1).unwrap_or(0);
        self.text.drain(start..self.cursor);
        self.cursor = start;
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.text[self.cursor..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| self.cursor + i)
            .unwrap_or(self.text.len())
    }
}

impl From<&str> for TextField {
    fn from(text: &str) -> Self {
        let mut field = Self::new();
        field.set(text);
        field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing_respects_char_boundaries() {
        let mut field = TextField::new();
        for c in "añb".chars() {
            field.insert_char(c);
        }
        field.move_left();
        field.delete_back();
        assert_eq!(field.as_str(), "ab");
        assert_eq!(field.cursor_column(), 1);

        field.move_home();
        field.delete_forward();
        assert_eq!(field.as_str(), "b");
    }

    #[test]
    fn test_delete_word_back() {
        let mut field = TextField::from("buy more milk  ");
        field.delete_word_back();
        assert_eq!(field.as_str(), "buy more ");
        field.delete_word_back();
        assert_eq!(field.as_str(), "buy ");
    }

    #[test]
    fn test_clear_resets_cursor() {
        let mut field = TextField::from("hello");
        field.clear();
        assert_eq!(field.as_str(), "");
        assert_eq!(field.cursor_column(), 0);
        field.insert_char('x');
        assert_eq!(field.as_str(), "x");
    }
}
