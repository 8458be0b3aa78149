//! Name-keyed codec registry
//!
//! Pure lookup plumbing: the capability-selection seam callers reach the
//! core through. The process-wide default registry is built once and never
//! mutated, so it is safe to share across threads.

use once_cell::sync::Lazy;
use tracing::trace;

use squeeze_types::{Codec, Error, Result};

use crate::huffman::HuffmanCodec;

/// Registry mapping algorithm names to codec instances
///
/// Names keep their insertion order.
#[derive(Default)]
pub struct CodecRegistry {
    codecs: Vec<Box<dyn Codec>>,
}

impl CodecRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { codecs: Vec::new() }
    }

    /// Create a registry holding every built-in codec
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(HuffmanCodec::new()));
        registry
    }

    /// Register a codec under its own name
    ///
    /// Re-registering a name replaces the previous codec in place, keeping
    /// the original position in [`CodecRegistry::names`].
    pub fn register(&mut self, codec: Box<dyn Codec>) {
        if let Some(existing) = self
            .codecs
            .iter_mut()
            .find(|existing| existing.name() == codec.name())
        {
            *existing = codec;
        } else {
            self.codecs.push(codec);
        }
    }

    /// Whether a codec is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.codecs.iter().any(|codec| codec.name() == name)
    }

    /// All registered names, in insertion order
    pub fn names(&self) -> Vec<&'static str> {
        self.codecs.iter().map(|codec| codec.name()).collect()
    }

    /// Look up a codec by name
    pub fn get(&self, name: &str) -> Option<&dyn Codec> {
        self.codecs
            .iter()
            .find(|codec| codec.name() == name)
            .map(Box::as_ref)
    }

    /// Select a codec by name, failing with an unknown-algorithm error
    pub fn select(&self, name: &str) -> Result<&dyn Codec> {
        trace!(name, "selecting codec");
        self.get(name).ok_or_else(|| Error::unknown_algorithm(name))
    }
}

/// The process-wide registry of built-in codecs
///
/// Built on first use and immutable afterwards.
pub fn default_registry() -> &'static CodecRegistry {
    static REGISTRY: Lazy<CodecRegistry> = Lazy::new(CodecRegistry::with_builtin);
    &REGISTRY
}
