use crate::core::models::*;
use crate::utils::Result;
use async_trait::async_trait;
use std::path::Path;

/// File system operations interface
#[async_trait]
pub trait FileSystemService: Send + Sync {
    /// Names of all non-directory entries in `dir`, sorted ascending
    async fn list_files(&self, dir: &Path) -> Result<Vec<String>>;
    async fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
    /// Delete `path` if it exists. Returns whether a file was removed.
    async fn remove_file(&self, path: &Path) -> Result<bool>;
    async fn write_file(&self, path: &Path, content: &[u8]) -> Result<()>;
}

/// Text minification for one asset kind.
///
/// Implementations are pure: the same input always yields the same output.
pub trait Minifier: Send + Sync {
    fn kind(&self) -> AssetKind;
    fn minify(&self, source: &str) -> Result<String>;
}

/// Bundle build interface
#[async_trait]
pub trait BuildService: Send + Sync {
    async fn build(&self, config: &BundleConfig) -> Result<BundleResult>;
}
