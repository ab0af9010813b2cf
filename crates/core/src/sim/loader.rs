//! Binary Image Loader.
//!
//! Reads a flat binary of raw little-endian instruction words into memory.
//! There is no header or metadata: the file's bytes are the program image,
//! and its length is the end boundary for the fetch loop.

use std::fs;
use std::io;
use std::path::Path;

/// Loads a program image from disk.
///
/// The whole file is read before execution begins; the core never touches
/// the filesystem during the run.
///
/// # Errors
///
/// Propagates any I/O error from reading the file.
pub fn load_binary<P: AsRef<Path>>(path: P) -> io::Result<Vec<u8>> {
    fs::read(path)
}
