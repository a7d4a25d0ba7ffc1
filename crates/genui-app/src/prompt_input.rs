//! Multi-line prompt editor buffer
//!
//! The cursor is a char index into the text, so editing works on whole
//! characters regardless of their UTF-8 width.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptInput {
    text: String,
    cursor: usize,
}

impl PromptInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.text.insert(idx, c);
        self.cursor += 1;
    }

    /// Insert text at the cursor; `\r\n` and `\r` become `\n`
    pub fn insert_str(&mut self, text: &str) {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let idx = self.byte_index(self.cursor);
        self.text.insert_str(idx, &normalized);
        self.cursor += normalized.chars().count();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let idx = self.byte_index(self.cursor);
        self.text.remove(idx);
    }

    /// Delete the character under the cursor
    pub fn delete(&mut self) {
        if self.cursor >= self.char_count() {
            return;
        }
        let idx = self.byte_index(self.cursor);
        self.text.remove(idx);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    /// Start of the current line
    pub fn move_home(&mut self) {
        let (line, _) = self.cursor_position();
        self.cursor = self.line_start(line);
    }

    /// End of the current line
    pub fn move_end(&mut self) {
        let (line, _) = self.cursor_position();
        self.cursor = self.line_start(line) + self.line_len(line);
    }

    pub fn move_up(&mut self) {
        let (line, col) = self.cursor_position();
        if line == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.line_start(line - 1) + col.min(self.line_len(line - 1));
    }

    pub fn move_down(&mut self) {
        let (line, col) = self.cursor_position();
        if line + 1 >= self.line_count() {
            self.cursor = self.char_count();
            return;
        }
        self.cursor = self.line_start(line + 1) + col.min(self.line_len(line + 1));
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Lines of the buffer; a trailing newline yields a final empty line
    pub fn lines(&self) -> Vec<&str> {
        self.text.split('\n').collect()
    }

    fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    fn line_len(&self, line: usize) -> usize {
        self.text
            .split('\n')
            .nth(line)
            .map(|l| l.chars().count())
            .unwrap_or(0)
    }

    fn line_start(&self, line: usize) -> usize {
        self.text
            .split('\n')
            .take(line)
            .map(|l| l.chars().count() + 1)
            .sum()
    }

    /// (line, column) of the cursor, both in chars
    pub fn cursor_position(&self) -> (usize, usize) {
        let mut line = 0;
        let mut col = 0;
        for c in self.text.chars().take(self.cursor) {
            if c == '\n' {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (line, col)
    }
}
