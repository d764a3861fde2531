use crate::core::{interfaces::*, models::*, naming};
use crate::utils::{Logger, MinicatError, Result, Timer};
use std::path::Path;
use std::sync::Arc;

/// Output of the concatenate/minify stages, before anything is written
#[derive(Debug)]
struct Assembled {
    files: Vec<String>,
    original_size: usize,
    minified: Vec<u8>,
}

/// Directory → concatenation → minification → (hash) → output file
pub struct BundleService {
    fs_service: Arc<dyn FileSystemService>,
    minifier: Arc<dyn Minifier>,
}

impl BundleService {
    pub fn new(fs_service: Arc<dyn FileSystemService>, minifier: Arc<dyn Minifier>) -> Self {
        Self {
            fs_service,
            minifier,
        }
    }

    /// Source files of `kind` in `dir`, in concatenation order
    pub async fn matching_files(&self, dir: &Path, kind: AssetKind) -> Result<Vec<String>> {
        let names = self.fs_service.list_files(dir).await?;

        Ok(names
            .into_iter()
            .filter(|name| {
                Path::new(name).extension().and_then(|e| e.to_str()) == Some(kind.extension())
            })
            .collect())
    }

    /// Raw bytes of `files` joined in order, with nothing in between
    pub async fn concatenate(&self, dir: &Path, files: &[String]) -> Result<Vec<u8>> {
        let _timer = Timer::start("Concatenating sources");

        let mut combined = Vec::new();
        for name in files {
            let path = dir.join(name);
            Logger::reading_file(&path);
            combined.extend_from_slice(&self.fs_service.read_file(&path).await?);
        }

        Ok(combined)
    }

    /// Minify raw bytes with the configured minifier
    pub fn minify(&self, source: &[u8]) -> Result<String> {
        let kind = self.minifier.kind();
        let text = std::str::from_utf8(source)
            .map_err(|e| MinicatError::minify(kind, format!("input is not valid UTF-8: {}", e)))?;

        self.minifier.minify(text)
    }

    async fn assemble(&self, config: &BundleConfig) -> Result<Assembled> {
        let files = self.matching_files(&config.input_dir, config.kind).await?;
        Logger::found_files(files.len(), config.kind.extension());

        match config.strategy {
            MinifyStrategy::ConcatenateThenMinify => {
                let combined = self.concatenate(&config.input_dir, &files).await?;

                let _timer = Timer::start("Minifying bundle");
                let minified = self.minify(&combined)?;

                Ok(Assembled {
                    files,
                    original_size: combined.len(),
                    minified: minified.into_bytes(),
                })
            }
            MinifyStrategy::MinifyThenConcatenate => {
                let _timer = Timer::start("Minifying files");

                let mut original_size = 0;
                let mut minified = Vec::new();
                for name in &files {
                    let path = config.input_dir.join(name);
                    Logger::reading_file(&path);
                    let source = self.fs_service.read_file(&path).await?;
                    original_size += source.len();

                    Logger::minifying(name);
                    let fragment = self.minify(&source).map_err(|e| e.in_file(path))?;
                    minified.extend_from_slice(fragment.as_bytes());
                }

                Ok(Assembled {
                    files,
                    original_size,
                    minified,
                })
            }
        }
    }
}

#[async_trait::async_trait]
impl BuildService for BundleService {
    async fn build(&self, config: &BundleConfig) -> Result<BundleResult> {
        if config.kind != self.minifier.kind() {
            return Err(MinicatError::config(format!(
                "cannot bundle {} with a {} minifier",
                config.kind,
                self.minifier.kind()
            )));
        }

        let timer = Timer::start("Bundle");
        Logger::bundle_start(config);

        let assembled = self.assemble(config).await?;

        let (output_path, hash) = if config.hash {
            let suffix = naming::hash_suffix(&assembled.minified);
            let path = naming::splice_hash(&config.output, config.kind, &suffix);
            if path == config.output {
                Logger::warn(&format!(
                    "Not hashing {}: extension is not .{}",
                    config.output.display(),
                    config.kind.extension()
                ));
                (path, None)
            } else {
                (path, Some(suffix))
            }
        } else {
            (config.output.clone(), None)
        };

        if self.fs_service.remove_file(&output_path).await? {
            Logger::removed_existing(&output_path);
        }
        self.fs_service
            .write_file(&output_path, &assembled.minified)
            .await?;

        let result = BundleResult {
            kind: config.kind,
            output_path,
            files: assembled.files,
            original_size: assembled.original_size,
            minified_size: assembled.minified.len(),
            hash,
        };

        Logger::bundle_complete(&result, timer.elapsed());
        Ok(result)
    }
}
