//! Single-line editing buffer
//!
//! Cursor-addressed text with bounded history and a horizontal viewport.
//! Positions are counted in chars. Nothing here fails: out-of-range requests
//! clamp or do nothing.
//!
//! History browsing is an explicit mode. While `Editing`, every change to the
//! content is cached as the draft; entering `Browsing` snapshots the draft
//! once more, and walking forward past the newest entry restores it.

use crate::core::history::History;
use crate::core::viewport::Viewport;

/// Whether the buffer holds the live draft or a history entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditMode {
    /// Editing the live draft (history pointer == history length)
    #[default]
    Editing,
    /// Showing the history entry at this index
    Browsing(usize),
}

/// Visible part of the line, as produced by [`LineBuffer::view`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLine {
    /// Visible text
    pub text: String,
    /// Cursor column relative to `text`; may equal its length
    pub cursor: usize,
}

impl ViewLine {
    /// The visible text with `marker` inserted at the cursor column
    pub fn marked(&self, marker: char) -> String {
        let mut out = String::with_capacity(self.text.len() + marker.len_utf8());
        let mut inserted = false;
        for (i, ch) in self.text.chars().enumerate() {
            if i == self.cursor {
                out.push(marker);
                inserted = true;
            }
            out.push(ch);
        }
        if !inserted {
            out.push(marker);
        }
        out
    }
}

/// Line editor state
#[derive(Debug, Clone, Default)]
pub struct LineBuffer {
    content: String,
    cursor: usize,
    history: History,
    mode: EditMode,
    draft: String,
    viewport: Viewport,
}

impl LineBuffer {
    /// Create an empty buffer with the default history size
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer keeping at most `history_size` lines
    pub fn with_history_size(history_size: usize) -> Self {
        Self {
            history: History::with_size(history_size),
            ..Self::default()
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Cursor position in chars
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Length of the content in chars
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_browsing(&self) -> bool {
        matches!(self.mode, EditMode::Browsing(_))
    }

    /// Index of the shown history entry, or the history length while editing
    pub fn history_pointer(&self) -> usize {
        match self.mode {
            EditMode::Editing => self.history.len(),
            EditMode::Browsing(index) => index,
        }
    }

    /// Cached draft restored when history browsing ends
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    // =========================================================================
    // EDITING
    // =========================================================================

    /// Insert text at the cursor and move the cursor past it
    pub fn insert_text(&mut self, text: &str) {
        let at = self.byte_index(self.cursor);
        self.content.insert_str(at, text);
        self.cursor += text.chars().count();
        self.cache_draft();
    }

    /// Delete the char before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
        self.cache_draft();
    }

    /// Delete the char under the cursor
    pub fn delete_forward(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
        self.cache_draft();
    }

    /// Drop everything before the cursor
    pub fn delete_to_start(&mut self) {
        let at = self.byte_index(self.cursor);
        self.content.replace_range(..at, "");
        self.cursor = 0;
        self.cache_draft();
    }

    /// Drop everything from the cursor onward
    pub fn delete_to_end(&mut self) {
        let at = self.byte_index(self.cursor);
        self.content.truncate(at);
        self.cache_draft();
    }

    /// Empty the line without touching history
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
        self.cache_draft();
    }

    // =========================================================================
    // CURSOR MOVEMENT
    // =========================================================================

    /// Move the cursor by `delta` chars, clamped to the line
    pub fn move_cursor(&mut self, delta: isize) {
        self.cursor = if delta < 0 {
            self.cursor.saturating_sub(delta.unsigned_abs())
        } else {
            self.cursor.saturating_add(delta as usize).min(self.len())
        };
    }

    pub fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_end(&mut self) {
        self.cursor = self.len();
    }

    // =========================================================================
    // HISTORY
    // =========================================================================

    /// Show the previous (older) history entry
    pub fn history_prev(&mut self) {
        let index = match self.mode {
            EditMode::Editing if self.history.is_empty() => return,
            EditMode::Editing => {
                self.draft = self.content.clone();
                self.history.len()
            }
            EditMode::Browsing(0) => return,
            EditMode::Browsing(index) => index,
        };
        self.show_entry(index - 1);
    }

    /// Show the next (newer) history entry, or the draft past the newest one
    pub fn history_next(&mut self) {
        let EditMode::Browsing(index) = self.mode else {
            return;
        };

        let next = index + 1;
        if next >= self.history.len() {
            self.mode = EditMode::Editing;
            let draft = self.draft.clone();
            self.load(draft);
        } else {
            self.show_entry(next);
        }
    }

    /// Submit the current line.
    ///
    /// Non-blank lines that differ from the latest entry go into history.
    /// The buffer is emptied and returns to editing.
    pub fn commit(&mut self) -> String {
        let line = std::mem::take(&mut self.content);
        self.history.push(&line);
        self.cursor = 0;
        self.draft.clear();
        self.mode = EditMode::Editing;
        self.viewport = Viewport::new();
        line
    }

    // =========================================================================
    // VIEWPORT
    // =========================================================================

    /// Scroll the viewport so the cursor fits in `width` columns
    pub fn recompute_viewport(&mut self, width: usize) {
        let len = self.len();
        self.viewport.scroll_into_view(self.cursor, len, width);
    }

    /// Visible slice of the line for a `width`-column display
    pub fn view(&mut self, width: usize) -> ViewLine {
        self.recompute_viewport(width);
        let Viewport { left, right } = self.viewport;
        ViewLine {
            text: self.content.chars().skip(left).take(right - left).collect(),
            cursor: self.cursor - left,
        }
    }

    // =========================================================================
    // HELPERS
    // =========================================================================

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map_or(self.content.len(), |(i, _)| i)
    }

    fn cache_draft(&mut self) {
        self.draft = self.content.clone();
        self.mode = EditMode::Editing;
    }

    fn show_entry(&mut self, index: usize) {
        let entry = self.history.get(index).unwrap_or_default().to_string();
        self.mode = EditMode::Browsing(index);
        self.load(entry);
    }

    fn load(&mut self, text: String) {
        self.content = text;
        self.cursor = self.len();
    }
}
