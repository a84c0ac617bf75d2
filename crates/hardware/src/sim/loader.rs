//! Binary Loader.
//!
//! This module reads SIA program images from disk. An image is a flat byte stream of 2- and
//! 4-byte instructions in program order, with no header or padding; it is loaded at memory
//! offset 0 by [`Simulator::load_program`](crate::sim::Simulator::load_program).

use std::fs;
use std::path::Path;

use crate::common::error::{SimError, SimResult};

/// Loads a binary file from disk into a byte vector.
///
/// # Arguments
///
/// * `path` - Path to the binary file.
///
/// # Returns
///
/// The raw bytes of the file.
///
/// # Errors
///
/// `SimError::Io` if the file cannot be read.
pub fn load_binary(path: impl AsRef<Path>) -> SimResult<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })
}
