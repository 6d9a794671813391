//! Line-oriented cursor over manifest bytes.
//!
//! The manifest format is a sequence of lines terminated by `CR LF`, `LF` or a lone `CR`.
//! [`crate::file::parser::Parser`] walks a byte slice and hands out one [`Line`] at a time,
//! tracking the 1-based line number for error reporting. It performs no
//! decoding; the manifest reader works on raw bytes so that values folded across continuation
//! lines can be reassembled before UTF-8 validation.

/// A single physical line of manifest text, without its terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Line content, excluding `CR`/`LF`
    pub content: &'a [u8],
    /// 1-based line number
    pub number: usize,
    /// `false` when the line ran into the end of input without a terminator
    pub terminated: bool,
}

impl Line<'_> {
    /// Returns `true` for a line with no content (a section separator).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns `true` if the line continues the previous header value.
    #[must_use]
    pub fn is_continuation(&self) -> bool {
        self.content.first() == Some(&b' ')
    }
}

/// A cursor-based reader that splits manifest data into lines.
///
/// # Examples
///
/// ```rust
/// use bundlescope::Parser;
///
/// let mut parser = Parser::new(b"Bundle-Version: 1.0\r\n \r\nName: a\n");
/// let first = parser.next_line().unwrap();
/// assert_eq!(first.content, b"Bundle-Version: 1.0");
/// assert!(parser.next_line().unwrap().is_continuation());
/// assert_eq!(parser.next_line().unwrap().number, 3);
/// assert!(parser.next_line().is_none());
/// ```
pub struct Parser<'a> {
    /// The data being parsed
    data: &'a [u8],
    /// Current position within the data buffer
    position: usize,
    /// Number of lines handed out so far
    line: usize,
}

impl<'a> Parser<'a> {
    /// Create a new [`crate::file::parser::Parser`] from a byte slice.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Parser {
            data,
            position: 0,
            line: 0,
        }
    }

    /// Returns `true` while unread bytes remain.
    #[must_use]
    pub fn has_more_data(&self) -> bool {
        self.position < self.data.len()
    }

    /// Peek at the next line without consuming it.
    #[must_use]
    pub fn peek_line(&self) -> Option<Line<'a>> {
        self.scan_line().map(|(line, _)| line)
    }

    /// Read the next line and advance past its terminator.
    ///
    /// Returns `None` once all data has been consumed. A final line lacking a terminator is
    /// still returned, with [`Line::terminated`] set to `false`.
    pub fn next_line(&mut self) -> Option<Line<'a>> {
        let (line, next) = self.scan_line()?;
        self.position = next;
        self.line += 1;
        Some(line)
    }

    fn scan_line(&self) -> Option<(Line<'a>, usize)> {
        if !self.has_more_data() {
            return None;
        }

        let start = self.position;
        let rest = &self.data[start..];
        let number = self.line + 1;

        match rest.iter().position(|&b| b == b'\r' || b == b'\n') {
            Some(end) => {
                let terminator_len = if rest[end] == b'\r' && rest.get(end + 1) == Some(&b'\n') {
                    2
                } else {
                    1
                };

                Some((
                    Line {
                        content: &rest[..end],
                        number,
                        terminated: true,
                    },
                    start + end + terminator_len,
                ))
            }
            None => Some((
                Line {
                    content: rest,
                    number,
                    terminated: false,
                },
                self.data.len(),
            )),
        }
    }
}
