use crate::constants::DEFAULT_MAX_DEPTH;

#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Reject unterminated blocks, loose closers and content after the
    /// top-level block instead of accepting them.
    pub strict: bool,
    pub max_depth: usize,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            strict: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
