//! Position-addressable cursor over dump text.
//!
//! All structural characters in the dump (indentation glyphs, dashes,
//! quotes, newlines) are ASCII, so the cursor works on bytes. Methods that
//! move the cursor only ever stop right after an ASCII byte or at a position
//! reached through [`Cursor::reset`], which keeps the position on a UTF-8
//! character boundary for [`Cursor::rest_of_line`].

use memchr::memmem;

/// Saved cursor position, produced by [`Cursor::mark`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Mark(usize);

/// Cursor over a fixed text buffer.
///
/// # Invariant
///
/// `pos <= src.len()`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `src`.
    pub fn new(src: &'a str) -> Self {
        Cursor { src, pos: 0 }
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    #[inline]
    fn rest(&self) -> &'a [u8] {
        &self.src.as_bytes()[self.pos..]
    }

    /// Byte at the current position, `None` at end of input.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    /// Return the current byte and step past it.
    #[inline]
    pub fn consume(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    // === Save / Restore ===

    #[inline]
    pub fn mark(&self) -> Mark {
        Mark(self.pos)
    }

    /// Return to a previously saved position.
    #[inline]
    pub fn reset(&mut self, mark: Mark) {
        debug_assert!(mark.0 <= self.src.len(), "mark {} out of bounds", mark.0);
        self.pos = mark.0.min(self.src.len());
    }

    // === Skipping ===

    /// Advance past a maximal run of `ch`, stopping on the first other byte.
    pub fn skip_run(&mut self, ch: u8) {
        let run = self.rest().iter().take_while(|&&b| b == ch).count();
        self.pos += run;
    }

    /// Advance to and past the next newline, or to end of input.
    pub fn skip_to_newline(&mut self) {
        match memchr::memchr(b'\n', self.rest()) {
            Some(offset) => self.pos += offset + 1,
            None => self.pos = self.src.len(),
        }
    }

    // === Lookahead (never moves the cursor) ===

    /// Check whether the input at the current position starts with `text`.
    pub fn matches_prefix(&self, text: &str) -> bool {
        self.rest().starts_with(text.as_bytes())
    }

    /// Search for `needle` between the current position and the next
    /// `boundary` byte (or end of input).
    pub fn find_before(&self, needle: &str, boundary: u8) -> bool {
        let rest = self.rest();
        let window = match memchr::memchr(boundary, rest) {
            Some(end) => &rest[..end],
            None => rest,
        };
        memmem::find(window, needle.as_bytes()).is_some()
    }

    /// Text from the current position up to, not including, the next newline.
    pub fn rest_of_line(&self) -> &'a str {
        let end = memchr::memchr(b'\n', self.rest()).map_or(self.src.len(), |o| self.pos + o);
        self.src.get(self.pos..end).unwrap_or_default()
    }
}
