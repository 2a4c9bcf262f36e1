//! Character-indexed view over a string
//!
//! Chunk sizes and offsets are measured in `char`s. This keeps a table of
//! byte offsets so windows can be sliced without splitting a code point.

pub(crate) struct CharIndex<'a> {
    text: &'a str,
    /// Byte offset of every char, followed by `text.len()`
    boundaries: Vec<usize>,
}

impl<'a> CharIndex<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        let mut boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        boundaries.push(text.len());
        Self { text, boundaries }
    }

    /// Number of chars
    pub(crate) fn len(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Byte offset of a char position, clamped to the end of the text
    pub(crate) fn byte_offset(&self, char_pos: usize) -> usize {
        self.boundaries
            .get(char_pos)
            .copied()
            .unwrap_or(self.text.len())
    }

    /// Char position of a byte offset that lies on a char boundary
    pub(crate) fn char_offset(&self, byte_pos: usize) -> usize {
        match self.boundaries.binary_search(&byte_pos) {
            Ok(pos) | Err(pos) => pos,
        }
    }

    /// Slice `[start, end)` in char positions
    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a str {
        let start = self.byte_offset(start);
        let end = self.byte_offset(end).max(start);
        &self.text[start..end]
    }

    /// Last occurrence of `needle` in `[start, end)`
    pub(crate) fn rfind_char(&self, needle: char, start: usize, end: usize) -> Option<usize> {
        let window = self.slice(start, end);
        window
            .rfind(needle)
            .map(|byte| self.char_offset(self.byte_offset(start) + byte))
    }

    /// First occurrence of `needle` in `[start, end)`
    pub(crate) fn find_char(&self, needle: char, start: usize, end: usize) -> Option<usize> {
        let window = self.slice(start, end);
        window
            .find(needle)
            .map(|byte| self.char_offset(self.byte_offset(start) + byte))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_slicing() {
        let index = CharIndex::new("Hello world. This is a test.");
        assert_eq!(index.len(), 28);
        assert_eq!(index.slice(0, 5), "Hello");
        assert_eq!(index.slice(6, 100), "world. This is a test.");
        assert_eq!(index.rfind_char('.', 0, 15), Some(11));
        assert_eq!(index.find_char('.', 12, 28), Some(27));
        assert_eq!(index.find_char('!', 0, 28), None);
    }

    #[test]
    fn test_multibyte_offsets() {
        let index = CharIndex::new("héllo. wörld.");
        assert_eq!(index.len(), 13);
        assert_eq!(index.slice(0, 6), "héllo.");
        assert_eq!(index.rfind_char('.', 0, 13), Some(12));
        assert_eq!(index.find_char('.', 0, 13), Some(5));
        assert_eq!(index.char_offset("héllo".len()), 5);
    }

    #[test]
    fn test_empty_text() {
        let index = CharIndex::new("");
        assert_eq!(index.len(), 0);
        assert_eq!(index.slice(0, 10), "");
    }
}
