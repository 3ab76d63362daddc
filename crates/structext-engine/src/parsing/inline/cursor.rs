/// A byte cursor over inline text with position tracking.
///
/// Only ever stops on ASCII delimiter bytes, so every position it reports
/// is a valid `str` boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// The byte immediately before the current position.
    pub fn prev(&self) -> Option<u8> {
        self.i
            .checked_sub(1)
            .and_then(|j| self.s.as_bytes().get(j).copied())
    }

    /// The byte `n` positions after the current one.
    pub fn peek_at(&self, n: usize) -> Option<u8> {
        self.s.as_bytes().get(self.i + n).copied()
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Moves to the next occurrence of `b` at or after the current position.
    ///
    /// Returns false (and moves to EOF) if there is none.
    pub fn seek(&mut self, b: u8) -> bool {
        match self.s.as_bytes()[self.i.min(self.s.len())..]
            .iter()
            .position(|&x| x == b)
        {
            Some(rel) => {
                self.i += rel;
                true
            }
            None => {
                self.i = self.s.len();
                false
            }
        }
    }
}
