//! The Huffman codec
//!
//! Orchestrates frequency analysis, tree construction, and the wire format
//! into the [`Codec`] capability. Encode and decode each own their table,
//! tree, and code table exclusively; nothing is shared between calls.

use tracing::debug;

use squeeze_types::{Codec, Error, Result};

use crate::format;
use crate::frequency::FrequencyTable;
use crate::tree::HuffmanTree;

/// Name the Huffman codec is registered under
pub const HUFFMAN_NAME: &str = "huffman";

/// Huffman coding engine
///
/// Stateless: all per-call state lives in the call itself, so a single
/// instance can serve any number of concurrent callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanCodec;

impl HuffmanCodec {
    /// Create a new Huffman codec
    pub fn new() -> Self {
        Self
    }
}

impl Codec for HuffmanCodec {
    fn name(&self) -> &'static str {
        HUFFMAN_NAME
    }

    fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let table = FrequencyTable::count(input);
        if table.is_empty() {
            return Err(Error::EmptyInput);
        }

        let meta = format::serialize_meta(&table);
        let tree = HuffmanTree::build(&table)?;
        let codes = tree.code_table();

        let mut blob = format::size_header(&meta);
        blob.extend_from_slice(&meta);
        for &byte in input {
            let code = codes
                .get(byte)
                .ok_or_else(|| Error::format(format!("no code assigned for symbol {byte:#04x}")))?;
            blob.extend_from_slice(code.as_bytes());
        }

        debug!(
            input_len = input.len(),
            blob_len = blob.len(),
            distinct_symbols = table.distinct_symbols(),
            "encoded input"
        );
        Ok(blob)
    }

    fn decode(&self, blob: &[u8]) -> Result<Vec<u8>> {
        let (meta, payload) = format::split(blob)?;
        let table = FrequencyTable::deserialize(meta)?;
        // The deterministic merge rebuilds the exact tree the encoder used.
        let tree = HuffmanTree::build(&table)?;
        let output = tree.decode_payload(payload)?;

        debug!(
            blob_len = blob.len(),
            output_len = output.len(),
            "decoded blob"
        );
        Ok(output)
    }
}
