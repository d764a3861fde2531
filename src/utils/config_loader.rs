use crate::core::models::{AssetKind, BundleConfig, MinifyStrategy};
use crate::utils::{Logger, MinicatError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "minicat.config.json";

/// One bundle section of the config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleSection {
    /// Directory holding the source files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,

    /// Output file path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Splice a content hash into the output name (default: false)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<MinifyStrategy>,
}

/// Configuration file format (minicat.config.json)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MinicatConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css: Option<BundleSection>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub js: Option<BundleSection>,
}

impl MinicatConfig {
    pub fn section(&self, kind: AssetKind) -> Option<&BundleSection> {
        match kind {
            AssetKind::Css => self.css.as_ref(),
            AssetKind::Js => self.js.as_ref(),
        }
    }
}

/// Bundle options given on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    /// `Some(false)` turns hashing off even when the file enables it
    pub hash: Option<bool>,
    pub strategy: Option<MinifyStrategy>,
}

/// Config loader that supports config files with CLI override
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from `path` if it exists
    pub fn load_from_file(path: &Path) -> Result<Option<MinicatConfig>> {
        if !path.exists() {
            Logger::debug(&format!("No {} found, using CLI arguments only", path.display()));
            return Ok(None);
        }

        Logger::debug(&format!("Loading config from {}", path.display()));

        let content = std::fs::read_to_string(path).map_err(|e| {
            MinicatError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: MinicatConfig = serde_json::from_str(&content).map_err(|e| {
            MinicatError::config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        Ok(Some(config))
    }

    /// Merge the file section for `kind` with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(
        file_config: Option<&MinicatConfig>,
        kind: AssetKind,
        cli: &CliOverrides,
    ) -> Result<BundleConfig> {
        let section = file_config
            .and_then(|c| c.section(kind))
            .cloned()
            .unwrap_or_default();

        let input = cli.input.clone().or(section.input).ok_or_else(|| {
            MinicatError::config(format!("no input directory given for {} bundle", kind.extension()))
        })?;
        let output = cli.output.clone().or(section.output).ok_or_else(|| {
            MinicatError::config(format!("no output file given for {} bundle", kind.extension()))
        })?;

        let strategy = cli
            .strategy
            .or(section.strategy)
            .unwrap_or_else(|| kind.default_strategy());

        Ok(BundleConfig::new(kind, input, output)
            .with_hash(cli.hash.or(section.hash).unwrap_or(false))
            .with_strategy(strategy))
    }

    /// Bundles declared in the config file, CSS first
    pub fn bundles(config: &MinicatConfig) -> Result<Vec<BundleConfig>> {
        [AssetKind::Css, AssetKind::Js]
            .into_iter()
            .filter(|kind| config.section(*kind).is_some())
            .map(|kind| Self::merge_with_cli(Some(config), kind, &CliOverrides::default()))
            .collect()
    }

    /// Generate example config file
    pub fn generate_example() -> String {
        let example = MinicatConfig {
            css: Some(BundleSection {
                input: Some(PathBuf::from("assets/css")),
                output: Some(PathBuf::from("public/app.css")),
                hash: Some(true),
                strategy: Some(MinifyStrategy::ConcatenateThenMinify),
            }),
            js: Some(BundleSection {
                input: Some(PathBuf::from("assets/js")),
                output: Some(PathBuf::from("public/app.js")),
                hash: Some(true),
                strategy: Some(MinifyStrategy::MinifyThenConcatenate),
            }),
        };

        serde_json::to_string_pretty(&example).unwrap_or_default()
    }
}
