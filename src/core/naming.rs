//! Content-hashed output names for cache busting.

use crate::core::models::AssetKind;
use std::path::{Path, PathBuf};

/// Number of trailing hex characters of the digest kept in file names
pub const HASH_SUFFIX_LEN: usize = 10;

/// Hex-encoded BLAKE3 digest of `content`
pub fn content_hash(content: &[u8]) -> String {
    blake3::hash(content).to_hex().to_string()
}

/// Last [`HASH_SUFFIX_LEN`] hex characters of the digest of `content`
pub fn hash_suffix(content: &[u8]) -> String {
    let hex = content_hash(content);
    hex[hex.len() - HASH_SUFFIX_LEN..].to_string()
}

/// Insert `.<suffix>` right before the final extension of `path`.
///
/// Paths whose extension is not the one of `kind` come back unchanged.
pub fn splice_hash(path: &Path, kind: AssetKind, suffix: &str) -> PathBuf {
    if path.extension().and_then(|e| e.to_str()) != Some(kind.extension()) {
        return path.to_path_buf();
    }

    let stem = match path.file_stem().and_then(|s| s.to_str()) {
        Some(stem) => stem,
        None => return path.to_path_buf(),
    };

    path.with_file_name(format!("{}.{}.{}", stem, suffix, kind.extension()))
}
