/// A forward-only walker over the decoded document, with one character of lookahead.
///
/// Positions are byte offsets into the document and always sit on a character boundary.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Cursor { input, position: 0 }
    }

    /// The character that the next call to `next` would return, without consuming it.
    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    #[cfg(test)]
    pub(crate) fn position(&self) -> usize {
        self.position
    }

    #[cfg(test)]
    pub(crate) fn is_exhausted(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Text between the current position and `end`.
    pub(crate) fn slice_to(&self, end: usize) -> &'a str {
        &self.input[self.position..end]
    }

    /// Text that has not been consumed yet.
    pub(crate) fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    /// Find the first occurrence of `needle` at or after the current position. The returned
    /// offset is absolute, i.e. relative to the start of the document.
    pub(crate) fn find(&self, needle: &str) -> Option<usize> {
        fast_find(needle, &self.input[self.position..]).map(|offset| self.position + offset)
    }

    /// Move forward to `position`, e.g. past a terminator located with [`Cursor::find`].
    pub(crate) fn jump_to(&mut self, position: usize) {
        debug_assert!(position >= self.position, "cursor must not move backwards");
        debug_assert!(self.input.is_char_boundary(position));
        self.position = position.min(self.input.len());
    }

    /// Skip the remainder of the document.
    pub(crate) fn exhaust(&mut self) {
        self.position = self.input.len();
    }

    /// Consume whitespace up to the next other character.
    pub(crate) fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.position += c.len_utf8();
        }
    }
}

impl Iterator for Cursor<'_> {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        Some(c)
    }
}

#[cfg(feature = "jetscii")]
#[inline]
fn fast_find(needle: &str, haystack: &str) -> Option<usize> {
    jetscii::Substring::new(needle).find(haystack)
}

#[cfg(not(feature = "jetscii"))]
#[inline]
fn fast_find(needle: &str, haystack: &str) -> Option<usize> {
    haystack.find(needle)
}
