//! Core type system and error handling for squeeze
//!
//! This crate provides the foundational types shared by every squeeze crate:
//!
//! - **Error handling**: the library-wide [`Error`] enum with error kinds
//! - **Core types**: the byte-alphabet [`Symbol`] and alphabet constants
//! - **Traits**: the [`Codec`] capability every algorithm implements
//!
//! # Features
//!
//! - `serde`: Enable serialization support for public types
//!
//! # Examples
//!
//! ```rust
//! use squeeze_types::{Codec, Result};
//!
//! fn roundtrip(codec: &dyn Codec, input: &[u8]) -> Result<Vec<u8>> {
//!     let blob = codec.encode(input)?;
//!     codec.decode(&blob)
//! }
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod result;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{Error, ErrorKind};
pub use result::Result;
pub use traits::Codec;
pub use types::{Symbol, ALPHABET_SIZE};
