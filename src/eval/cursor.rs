/// Read position over an expression.
///
/// `pos` is the byte offset of `ch` and sits at -1 until the first
/// [`Cursor::next_char`]. Past the end `ch` is `None` and `pos` keeps
/// counting up, so `at_end` stays true.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'s> {
    text: &'s str,
    pos: isize,
    ch: Option<char>,
}

impl<'s> Cursor<'s> {
    pub(crate) fn new(text: &'s str) -> Self {
        Self {
            text,
            pos: -1,
            ch: None,
        }
    }

    /// Advances one character and refreshes the cached one.
    pub(crate) fn next_char(&mut self) {
        self.pos += self.ch.map_or(1, |c| c.len_utf8() as isize);
        self.ch = self.char_at(self.pos);
    }

    pub(crate) fn current(&self) -> Option<char> {
        self.ch
    }

    /// The character right after the current one, without consuming anything.
    pub(crate) fn peek(&self) -> Option<char> {
        let width = self.ch.map_or(1, |c| c.len_utf8() as isize);
        self.char_at(self.pos + width)
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.text.len() as isize
    }

    /// Skips whitespace, then consumes `c` if it is next.
    pub(crate) fn eat(&mut self, c: char) -> bool {
        self.eat_any(&[c]).is_some()
    }

    /// Skips whitespace, then consumes the next character if it is one of
    /// `candidates`.
    pub(crate) fn eat_any(&mut self, candidates: &[char]) -> Option<char> {
        while self.ch.is_some_and(char::is_whitespace) {
            self.next_char();
        }
        match self.ch {
            Some(c) if candidates.contains(&c) => {
                self.next_char();
                Some(c)
            }
            _ => None,
        }
    }

    /// Consumes characters while `pred` holds and returns the consumed run.
    pub(crate) fn eat_while<P>(&mut self, pred: P) -> &'s str
    where
        P: Fn(char) -> bool,
    {
        let start = self.offset();
        while self.ch.is_some_and(&pred) {
            self.next_char();
        }
        let end = self.offset().min(self.text.len());
        &self.text[start.min(end)..end]
    }

    fn offset(&self) -> usize {
        self.pos.max(0) as usize
    }

    fn char_at(&self, pos: isize) -> Option<char> {
        usize::try_from(pos)
            .ok()
            .and_then(|p| self.text.get(p..))
            .and_then(|rest| rest.chars().next())
    }
}
