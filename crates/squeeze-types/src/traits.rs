//! Core traits for squeeze operations
//!
//! This module defines the capability trait that enables polymorphic behavior
//! across codec implementations. The registry stores codecs as trait objects,
//! so every implementation must be object-safe and usable from concurrent
//! calling contexts.

use crate::result::Result;

/// Trait for text/byte codec implementations
///
/// A codec converts arbitrary byte input into a self-describing encoded blob
/// and reconstructs the original bytes from that blob without external state.
pub trait Codec: Send + Sync + std::fmt::Debug {
    /// The name this codec is registered under
    fn name(&self) -> &'static str;

    /// Encode `input` into a self-describing blob
    ///
    /// Decoding the returned blob with the same codec reproduces `input`
    /// exactly.
    fn encode(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Decode a blob previously produced by [`Codec::encode`]
    fn decode(&self, blob: &[u8]) -> Result<Vec<u8>>;
}
