/// Separator between a key and its value token.
pub const SEPARATOR: &str = " : ";

/// Value token that opens a nested dictionary.
pub const DICTIONARY_OPENER: &str = "<dictionary> {";

/// Value token that opens a nested array.
pub const ARRAY_OPENER: &str = "<array> {";

/// Required suffix of the first line; the top key is everything before it.
pub const HEADER_SUFFIX: &str = " <dictionary> {";

pub const BLOCK_OPENER: char = '{';

pub const BLOCK_CLOSER: char = '}';

pub const DEFAULT_MAX_DEPTH: usize = 128;
