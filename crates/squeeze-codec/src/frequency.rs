//! Per-byte frequency analysis
//!
//! A [`FrequencyTable`] is built once per encode or decode call and never
//! mutated afterwards. It is the single source of truth the Huffman tree is
//! built from, on both sides of the wire.

use crate::format::META_RECORD_WIDTH;
use squeeze_types::{Error, Result, Symbol, ALPHABET_SIZE};

/// Occurrence count of every possible byte value in an input
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    counts: [u64; ALPHABET_SIZE],
}

impl FrequencyTable {
    /// Count the occurrences of each byte in `input`
    ///
    /// An empty input yields the all-zero table.
    pub fn count(input: &[u8]) -> Self {
        let mut counts = [0u64; ALPHABET_SIZE];
        for &byte in input {
            counts[usize::from(byte)] += 1;
        }
        Self { counts }
    }

    /// Rebuild a table from serialized frequency metadata
    ///
    /// Inverse of [`crate::format::serialize_meta`]: a sequence of 9-byte
    /// records, each one raw symbol byte followed by an 8-character
    /// space-padded hexadecimal count.
    pub fn deserialize(meta: &[u8]) -> Result<Self> {
        if meta.len() % META_RECORD_WIDTH != 0 {
            return Err(Error::format(format!(
                "meta length {} is not a multiple of the {}-byte record width",
                meta.len(),
                META_RECORD_WIDTH
            )));
        }

        let mut counts = [0u64; ALPHABET_SIZE];
        for record in meta.chunks_exact(META_RECORD_WIDTH) {
            let symbol = record[0];
            let field = std::str::from_utf8(&record[1..])
                .map_err(|_| Error::format("frequency field is not valid ASCII"))?;
            let count = u64::from_str_radix(field.trim(), 16).map_err(|_| {
                Error::format(format!(
                    "frequency field {:?} for symbol {:#04x} is not valid hexadecimal",
                    field, symbol
                ))
            })?;
            counts[usize::from(symbol)] = count;
        }
        Ok(Self { counts })
    }

    /// Occurrence count of a single symbol
    pub fn get(&self, symbol: Symbol) -> u64 {
        self.counts[usize::from(symbol)]
    }

    /// Whether no symbol occurred at all
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    /// Number of distinct symbols with a non-zero count
    pub fn distinct_symbols(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    /// Iterate over `(symbol, count)` pairs with non-zero counts, in
    /// ascending symbol order
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as Symbol, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_basic() {
        let table = FrequencyTable::count(b"hello");
        assert_eq!(table.get(b'h'), 1);
        assert_eq!(table.get(b'e'), 1);
        assert_eq!(table.get(b'l'), 2);
        assert_eq!(table.get(b'o'), 1);
        assert_eq!(table.get(b'z'), 0);
        assert_eq!(table.distinct_symbols(), 4);
    }

    #[test]
    fn test_count_empty_input() {
        let table = FrequencyTable::count(b"");
        assert!(table.is_empty());
        assert_eq!(table.distinct_symbols(), 0);
    }

    #[test]
    fn test_iter_nonzero_ascending() {
        let table = FrequencyTable::count(b"hello");
        let pairs: Vec<_> = table.iter_nonzero().collect();
        assert_eq!(
            pairs,
            vec![(b'e', 1), (b'h', 1), (b'l', 2), (b'o', 1)]
        );
    }

    #[test]
    fn test_deserialize_roundtrip() {
        let table = FrequencyTable::count(b"hello");
        let meta = crate::format::serialize_meta(&table);
        let rebuilt = FrequencyTable::deserialize(&meta).unwrap();
        for symbol in 0..=u8::MAX {
            assert_eq!(rebuilt.get(symbol), table.get(symbol));
        }
    }

    #[test]
    fn test_deserialize_rejects_bad_record_width() {
        let err = FrequencyTable::deserialize(b"e       1h").unwrap_err();
        assert_eq!(err.kind(), squeeze_types::ErrorKind::Format);
    }

    #[test]
    fn test_deserialize_rejects_bad_hex() {
        // 'z' is not a hexadecimal digit
        let err = FrequencyTable::deserialize(b"e       z").unwrap_err();
        assert_eq!(err.kind(), squeeze_types::ErrorKind::Format);
    }

    #[test]
    fn test_deserialize_rejects_blank_field() {
        let err = FrequencyTable::deserialize(b"e        ").unwrap_err();
        assert_eq!(err.kind(), squeeze_types::ErrorKind::Format);
    }
}
