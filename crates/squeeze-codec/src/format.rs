//! The squeeze wire format
//!
//! An encoded blob is three fields concatenated with no delimiters:
//!
//! ```text
//! [4 bytes: decimal length of meta, space-padded]
//! [meta: per distinct symbol, ascending byte order:
//!     1 raw symbol byte + 8-char space-padded hex count]
//! [payload: each input byte's code as '0'/'1' characters]
//! ```
//!
//! The fixed field widths make the format self-delimiting, and the meta
//! section carries everything decode needs to rebuild the Huffman tree.
//! The exact byte layout is load-bearing: blobs written by earlier versions
//! must keep decoding.

use crate::frequency::FrequencyTable;
use squeeze_types::{Error, Result};

/// Width of the decimal meta-length header
pub const SIZE_HEADER_WIDTH: usize = 4;

/// Width of one hexadecimal frequency field
pub const FREQUENCY_FIELD_WIDTH: usize = 8;

/// Width of one meta record: a raw symbol byte plus its frequency field
pub const META_RECORD_WIDTH: usize = 1 + FREQUENCY_FIELD_WIDTH;

/// Serialize a frequency table into the meta section
///
/// Symbols are emitted in ascending byte order so the layout is a pure
/// function of the table.
pub fn serialize_meta(table: &FrequencyTable) -> Vec<u8> {
    let mut meta = Vec::with_capacity(table.distinct_symbols() * META_RECORD_WIDTH);
    for (symbol, count) in table.iter_nonzero() {
        meta.push(symbol);
        meta.extend_from_slice(format!("{count:8x}").as_bytes());
    }
    meta
}

/// Format the meta length as the blob's leading size header
pub fn size_header(meta: &[u8]) -> Vec<u8> {
    format!("{:4}", meta.len()).into_bytes()
}

/// Split a blob into its meta and payload sections
///
/// Reads the size header, takes that many bytes as meta, and returns the
/// rest as payload.
pub fn split(blob: &[u8]) -> Result<(&[u8], &[u8])> {
    if blob.len() < SIZE_HEADER_WIDTH {
        return Err(Error::format(format!(
            "blob of {} bytes is shorter than the {}-byte size header",
            blob.len(),
            SIZE_HEADER_WIDTH
        )));
    }
    let header = std::str::from_utf8(&blob[..SIZE_HEADER_WIDTH])
        .map_err(|_| Error::format("size header is not valid ASCII"))?;
    let meta_len: usize = header
        .trim()
        .parse()
        .map_err(|_| Error::format(format!("size header {header:?} is not a decimal length")))?;

    let rest = &blob[SIZE_HEADER_WIDTH..];
    if rest.len() < meta_len {
        return Err(Error::format(format!(
            "blob declares {} bytes of meta but only {} remain",
            meta_len,
            rest.len()
        )));
    }
    Ok(rest.split_at(meta_len))
}
