//! File encode/decode plumbing for squeeze
//!
//! Thin collaborator around the codec core: read a file, run a codec over
//! its bytes, write the result next to the original under a derived name.
//! The core itself performs no I/O.
//!
//! # Examples
//!
//! ```rust,no_run
//! use squeeze_codec::default_registry;
//! use squeeze_io::encode_file;
//!
//! let codec = default_registry().select("huffman")?;
//! let encoded_path = encode_file("notes.txt", codec)?;
//! assert_eq!(encoded_path.to_str(), Some("notes.txt_encoded"));
//! # Ok::<(), squeeze_types::Error>(())
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use squeeze_types::{Codec, Result};

/// Suffix appended to a file path when encoding
pub const ENCODED_SUFFIX: &str = "_encoded";

/// Suffix appended to a file path when decoding
pub const DECODED_SUFFIX: &str = "_decoded";

/// Encode a file's bytes and write the blob to `<path>_encoded`
///
/// Returns the path the blob was written to.
pub fn encode_file<P: AsRef<Path>>(path: P, codec: &dyn Codec) -> Result<PathBuf> {
    let path = path.as_ref();
    let data = fs::read(path)?;
    let encoded = codec.encode(&data)?;
    let target = derived_path(path, ENCODED_SUFFIX);
    fs::write(&target, &encoded)?;

    info!(
        source = %path.display(),
        target = %target.display(),
        algorithm = codec.name(),
        input_len = data.len(),
        output_len = encoded.len(),
        "encoded file"
    );
    Ok(target)
}

/// Decode an encoded file and write the original bytes to `<path>_decoded`
///
/// Returns the path the decoded bytes were written to.
pub fn decode_file<P: AsRef<Path>>(path: P, codec: &dyn Codec) -> Result<PathBuf> {
    let path = path.as_ref();
    let blob = fs::read(path)?;
    let decoded = codec.decode(&blob)?;
    let target = derived_path(path, DECODED_SUFFIX);
    fs::write(&target, &decoded)?;

    info!(
        source = %path.display(),
        target = %target.display(),
        algorithm = codec.name(),
        "decoded file"
    );
    Ok(target)
}

fn derived_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}
