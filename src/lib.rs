//! Converts the brace-delimited key/value dumps printed by `scutil`
//! (for example `scutil --nc show` or `show State:/Network/Global/IPv4`)
//! into JSON.
//!
//! ```
//! let input = "State:/Network/Global/IPv4 <dictionary> {\n  Router : 192.168.1.1\n}\n";
//! let json = scutil_json::convert(input.as_bytes())?;
//! assert_eq!(json, b"{\"State:/Network/Global/IPv4\":{\"Router\":\"192.168.1.1\"}}\n");
//! # Ok::<(), scutil_json::Error>(())
//! ```

pub mod constants;
pub mod decode;
pub mod encode;
pub mod error;
pub mod options;
pub mod value;

use std::io::{Read, Write};

pub use crate::error::{Error, ErrorKind};
pub use crate::options::DecodeOptions;
pub use crate::value::{Document, Map, Value};

pub type Result<T> = std::result::Result<T, Error>;

/// Reads a whole `scutil` dump from `reader` and returns the JSON bytes,
/// newline terminated.
pub fn convert<R: Read>(reader: R) -> Result<Vec<u8>> {
    let document = from_reader(reader)?;
    to_vec(&document)
}

pub fn convert_to_writer<R: Read, W: Write>(reader: R, writer: W) -> Result<()> {
    convert_with_options(reader, writer, &DecodeOptions::default())
}

pub fn convert_with_options<R: Read, W: Write>(
    reader: R,
    writer: W,
    options: &DecodeOptions,
) -> Result<()> {
    let document = decode::from_reader(reader, options)?;
    encode::to_writer(writer, &document)
}

pub fn from_str(input: &str) -> Result<Document> {
    from_str_with_options(input, &DecodeOptions::default())
}

pub fn from_str_with_options(input: &str, options: &DecodeOptions) -> Result<Document> {
    decode::from_str(input, options)
}

pub fn from_slice(input: &[u8]) -> Result<Document> {
    from_slice_with_options(input, &DecodeOptions::default())
}

pub fn from_slice_with_options(input: &[u8], options: &DecodeOptions) -> Result<Document> {
    decode::from_slice(input, options)
}

pub fn from_reader<R: Read>(reader: R) -> Result<Document> {
    from_reader_with_options(reader, &DecodeOptions::default())
}

pub fn from_reader_with_options<R: Read>(reader: R, options: &DecodeOptions) -> Result<Document> {
    decode::from_reader(reader, options)
}

pub fn decode_to_value(input: &str) -> Result<serde_json::Value> {
    decode_to_value_with_options(input, &DecodeOptions::default())
}

pub fn decode_to_value_with_options(
    input: &str,
    options: &DecodeOptions,
) -> Result<serde_json::Value> {
    decode::from_str(input, options).map(Into::into)
}

pub fn validate_str(input: &str) -> Result<()> {
    validate_str_with_options(input, &DecodeOptions::default())
}

pub fn validate_str_with_options(input: &str, options: &DecodeOptions) -> Result<()> {
    decode::validate_str(input, options)
}

pub fn to_string(document: &Document) -> Result<String> {
    encode::to_string(document)
}

pub fn to_vec(document: &Document) -> Result<Vec<u8>> {
    encode::to_vec(document)
}

pub fn to_writer<W: Write>(writer: W, document: &Document) -> Result<()> {
    encode::to_writer(writer, document)
}
