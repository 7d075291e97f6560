use std::io::Write;

use serde::ser::Error as _;

use crate::value::Document;
use crate::{Error, Result};

/// Writes `document` as one compact JSON line and flushes.
pub fn to_writer<W: Write>(mut writer: W, document: &Document) -> Result<()> {
    serde_json::to_writer(&mut writer, document)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

pub fn to_vec(document: &Document) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(128);
    to_writer(&mut out, document)?;
    Ok(out)
}

pub fn to_string(document: &Document) -> Result<String> {
    let bytes = to_vec(document)?;
    String::from_utf8(bytes).map_err(|err| Error::Encode(serde_json::Error::custom(err)))
}
