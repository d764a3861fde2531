use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The two kinds of asset a bundle can be built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Css,
    Js,
}

impl AssetKind {
    /// File extension, without the dot, that selects source files
    pub fn extension(&self) -> &'static str {
        match self {
            AssetKind::Css => "css",
            AssetKind::Js => "js",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            AssetKind::Css => "text/css",
            AssetKind::Js => "text/javascript",
        }
    }

    /// Strategy used when none is configured.
    ///
    /// CSS is concatenated first and minified as a whole, JavaScript is
    /// minified file by file.
    pub fn default_strategy(&self) -> MinifyStrategy {
        match self {
            AssetKind::Css => MinifyStrategy::ConcatenateThenMinify,
            AssetKind::Js => MinifyStrategy::MinifyThenConcatenate,
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mime_type())
    }
}

/// Order in which concatenation and minification happen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MinifyStrategy {
    /// Join the raw files, then minify the joined text once
    ConcatenateThenMinify,
    /// Minify every file on its own, then join the minified fragments
    MinifyThenConcatenate,
}

impl std::fmt::Display for MinifyStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MinifyStrategy::ConcatenateThenMinify => f.write_str("concatenate-then-minify"),
            MinifyStrategy::MinifyThenConcatenate => f.write_str("minify-then-concatenate"),
        }
    }
}

/// One bundle to produce: every `kind` file in `input_dir` into `output`
#[derive(Debug, Clone)]
pub struct BundleConfig {
    pub kind: AssetKind,
    pub input_dir: PathBuf,
    pub output: PathBuf,
    pub hash: bool,
    pub strategy: MinifyStrategy,
}

impl BundleConfig {
    pub fn new(kind: AssetKind, input_dir: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            input_dir: input_dir.into(),
            output: output.into(),
            hash: false,
            strategy: kind.default_strategy(),
        }
    }

    pub fn with_hash(mut self, hash: bool) -> Self {
        self.hash = hash;
        self
    }

    pub fn with_strategy(mut self, strategy: MinifyStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

#[derive(Debug, Clone)]
pub struct BundleResult {
    pub kind: AssetKind,
    /// Final path, including the hash segment when one was spliced in
    pub output_path: PathBuf,
    /// Names of the source files that went into the bundle, in order
    pub files: Vec<String>,
    pub original_size: usize,
    pub minified_size: usize,
    pub hash: Option<String>,
}

impl BundleResult {
    pub fn stats(&self) -> MinificationStats {
        MinificationStats::new(self.original_size, self.minified_size)
    }
}

#[derive(Debug, Clone)]
pub struct MinificationStats {
    pub original_size: usize,
    pub minified_size: usize,
    pub reduction_percentage: f64,
    pub saved_bytes: usize,
}

impl MinificationStats {
    pub fn new(original_size: usize, minified_size: usize) -> Self {
        let reduction_percentage = if original_size == 0 {
            0.0
        } else {
            ((original_size as f64 - minified_size as f64) / original_size as f64) * 100.0
        };

        Self {
            original_size,
            minified_size,
            reduction_percentage,
            saved_bytes: original_size.saturating_sub(minified_size),
        }
    }
}

impl std::fmt::Display for MinificationStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Minification: {:.1}% reduction ({} → {} bytes, saved {})",
            self.reduction_percentage, self.original_size, self.minified_size, self.saved_bytes
        )
    }
}
