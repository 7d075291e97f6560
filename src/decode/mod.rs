mod line;
mod scan;

use std::io::Read;

use tracing::{debug, trace};

pub use line::{classify, parse_header, resolve_token, BlockKind, LineKind, Token};
pub use scan::{Lines, ScanLine};

use crate::value::{Document, Map, Value};
use crate::{DecodeOptions, Error, Result};

pub fn from_str(input: &str, options: &DecodeOptions) -> Result<Document> {
    let mut decoder = Decoder::new(input, options);
    decoder.decode_document()
}

pub fn from_slice(input: &[u8], options: &DecodeOptions) -> Result<Document> {
    let text = std::str::from_utf8(input)?;
    from_str(text, options)
}

pub fn from_reader<R: Read>(mut reader: R, options: &DecodeOptions) -> Result<Document> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    from_slice(&buf, options)
}

pub fn validate_str(input: &str, options: &DecodeOptions) -> Result<()> {
    from_str(input, options).map(|_| ())
}

/// The block currently being filled, kept for error reporting.
#[derive(Clone, Copy, Debug)]
struct Opener<'a> {
    key: &'a str,
    line_number: usize,
}

struct Decoder<'a> {
    lines: Lines<'a>,
    strict: bool,
    max_depth: usize,
    depth: usize,
}

impl<'a> Decoder<'a> {
    fn new(input: &'a str, options: &DecodeOptions) -> Self {
        Self {
            lines: Lines::new(input),
            strict: options.strict,
            max_depth: options.max_depth,
            depth: 0,
        }
    }

    fn decode_document(&mut self) -> Result<Document> {
        let header = self
            .lines
            .by_ref()
            .find(|line| !line.is_blank())
            .ok_or(Error::EmptyInput)?;
        let key = parse_header(header.text).ok_or_else(|| Error::MalformedHeader {
            line: header.text.to_string(),
        })?;
        let opener = Opener {
            key,
            line_number: header.number,
        };

        let root = self.parse_dictionary(opener)?;
        if self.strict {
            self.ensure_no_trailing_content()?;
        }
        debug!(key, entries = root.len(), "decoded document");
        Ok(Document::new(key, root))
    }

    fn ensure_no_trailing_content(&mut self) -> Result<()> {
        match self.lines.by_ref().find(|line| !line.is_blank()) {
            Some(line) => Err(Error::TrailingContent {
                line: line.text.to_string(),
                line_number: line.number,
            }),
            None => Ok(()),
        }
    }

    fn parse_dictionary(&mut self, opener: Opener<'a>) -> Result<Map> {
        self.enter(opener, BlockKind::Dictionary)?;
        let mut map = Map::new();
        while let Some((key, value)) = self.next_entry(opener, BlockKind::Dictionary)? {
            if map.insert(key.to_string(), value).is_some() {
                trace!(key, "duplicate key, keeping the later value");
            }
        }
        self.leave(opener, BlockKind::Dictionary);
        Ok(map)
    }

    fn parse_array(&mut self, opener: Opener<'a>) -> Result<Vec<Value>> {
        self.enter(opener, BlockKind::Array)?;
        let mut items = Vec::new();
        while let Some((_, value)) = self.next_entry(opener, BlockKind::Array)? {
            items.push(value);
        }
        self.leave(opener, BlockKind::Array);
        Ok(items)
    }

    fn enter(&mut self, opener: Opener<'a>, kind: BlockKind) -> Result<()> {
        if self.depth >= self.max_depth {
            return Err(Error::DepthLimitExceeded {
                limit: self.max_depth,
                line_number: opener.line_number,
            });
        }
        self.depth += 1;
        trace!(key = opener.key, depth = self.depth, ?kind, "open block");
        Ok(())
    }

    fn leave(&mut self, opener: Opener<'a>, kind: BlockKind) {
        trace!(key = opener.key, depth = self.depth, ?kind, "close block");
        self.depth -= 1;
    }

    /// Reads one line of the current block. `None` means the block is closed.
    fn next_entry(
        &mut self,
        opener: Opener<'a>,
        kind: BlockKind,
    ) -> Result<Option<(&'a str, Value)>> {
        let Some(line) = self.lines.next() else {
            return self.end_of_input(opener).map(|()| None);
        };
        match classify(line.text, kind, self.strict) {
            LineKind::Entry { key, token } => {
                let value = self.resolve_value(key, token, line.number)?;
                Ok(Some((key, value)))
            }
            LineKind::Item(item) => Ok(Some(("", Value::from(item)))),
            LineKind::Close => Ok(None),
            LineKind::Malformed => Err(Error::MalformedLine {
                line: line.text.to_string(),
                line_number: line.number,
            }),
        }
    }

    fn resolve_value(
        &mut self,
        key: &'a str,
        token: &'a str,
        line_number: usize,
    ) -> Result<Value> {
        let opener = Opener { key, line_number };
        match resolve_token(token) {
            Token::Open(BlockKind::Dictionary) => self.parse_dictionary(opener).map(Value::from),
            Token::Open(BlockKind::Array) => self.parse_array(opener).map(Value::from),
            Token::Text(text) => Ok(Value::from(text)),
        }
    }

    fn end_of_input(&self, opener: Opener<'a>) -> Result<()> {
        if self.strict {
            return Err(Error::UnterminatedBlock {
                key: opener.key.to_string(),
                line_number: opener.line_number,
            });
        }
        trace!(
            key = opener.key,
            last_line = self.lines.line_number(),
            "end of input closes block"
        );
        Ok(())
    }
}
