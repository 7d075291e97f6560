use memchr::memchr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanLine<'a> {
    /// 1-based line number in the input.
    pub number: usize,
    pub text: &'a str,
}

impl ScanLine<'_> {
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Forward-only line reader over the input. `\n` ends a line, a trailing `\r`
/// is dropped, and nothing is yielded for the empty tail after a final newline.
#[derive(Debug)]
pub struct Lines<'a> {
    input: &'a str,
    pos: usize,
    number: usize,
}

impl<'a> Lines<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            number: 0,
        }
    }

    /// Number of the last line handed out, 0 before the first one.
    pub fn line_number(&self) -> usize {
        self.number
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = ScanLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }
        let rest = &self.input[self.pos..];
        let (raw, advance) = match memchr(b'\n', rest.as_bytes()) {
            Some(idx) => (&rest[..idx], idx + 1),
            None => (rest, rest.len()),
        };
        self.pos += advance;
        self.number += 1;
        Some(ScanLine {
            number: self.number,
            text: raw.strip_suffix('\r').unwrap_or(raw),
        })
    }
}
