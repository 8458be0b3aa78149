//! Huffman coding engine for squeeze
//!
//! This crate implements the one concrete codec of the squeeze framework: a
//! Huffman coder producing a self-describing textual blob. It includes:
//!
//! - **Frequency analysis**: per-byte occurrence counts over a fixed
//!   256-symbol alphabet
//! - **Tree construction**: priority-ordered merge with a deterministic
//!   tie-break, so the decode side rebuilds the identical tree from the
//!   frequency metadata alone
//! - **Wire format**: the size-header + frequency-meta + bit-path layout
//! - **Registry**: name-keyed lookup of codec instances
//!
//! # Examples
//!
//! ```rust
//! use squeeze_codec::HuffmanCodec;
//! use squeeze_types::Codec;
//!
//! let codec = HuffmanCodec::new();
//! let blob = codec.encode(b"hello")?;
//! assert_eq!(codec.decode(&blob)?, b"hello");
//! # Ok::<(), squeeze_types::Error>(())
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod format;
pub mod frequency;
pub mod huffman;
pub mod registry;
pub mod tree;

// Re-export main types
pub use frequency::FrequencyTable;
pub use huffman::HuffmanCodec;
pub use registry::{default_registry, CodecRegistry};
pub use tree::{CodeTable, HuffmanTree, Node};
