use crate::core::{interfaces::*, models::*};
use crate::infrastructure::{minifier_for, TokioFileSystemService};
use crate::utils::{CliOverrides, ConfigLoader, Logger, MinicatError, Result, CONFIG_FILE_NAME};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "minicat")]
#[command(about = "Concatenate, minify and content-hash a directory of CSS or JavaScript files")]
pub struct Cli {
    /// Config file with bundle definitions
    #[arg(short, long, global = true, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Log every file and stage
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Bundle the .css files of a directory
    Css(BundleArgs),
    /// Bundle the .js files of a directory
    Js(BundleArgs),
    /// Build every bundle declared in the config file
    Build,
    /// Print an example config file
    Init,
}

#[derive(Args)]
pub struct BundleArgs {
    /// Directory holding the source files
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// Output file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Splice a content hash into the output file name
    #[arg(long, overrides_with = "no_hash")]
    pub hash: bool,
    /// Keep the plain output name even if the config file enables hashing
    #[arg(long, overrides_with = "hash")]
    pub no_hash: bool,
    /// Order of concatenation and minification
    #[arg(long, value_enum)]
    pub strategy: Option<MinifyStrategy>,
}

impl From<BundleArgs> for CliOverrides {
    fn from(args: BundleArgs) -> Self {
        Self {
            input: args.input,
            output: args.output,
            hash: match (args.hash, args.no_hash) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
            strategy: args.strategy,
        }
    }
}

pub struct CliHandler;

impl CliHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn run(&self) -> Result<()> {
        let cli = Cli::parse();
        Logger::init(cli.verbose);

        match cli.command {
            Commands::Css(args) => {
                self.handle_bundle_command(&cli.config, AssetKind::Css, args.into())
                    .await
            }
            Commands::Js(args) => {
                self.handle_bundle_command(&cli.config, AssetKind::Js, args.into())
                    .await
            }
            Commands::Build => self.handle_build_command(&cli.config).await,
            Commands::Init => {
                println!("{}", ConfigLoader::generate_example());
                Ok(())
            }
        }
    }

    async fn handle_bundle_command(
        &self,
        config_path: &Path,
        kind: AssetKind,
        overrides: CliOverrides,
    ) -> Result<()> {
        let file_config = ConfigLoader::load_from_file(config_path)?;
        let config = ConfigLoader::merge_with_cli(file_config.as_ref(), kind, &overrides)?;

        self.run_bundle(&config).await?;
        Ok(())
    }

    async fn handle_build_command(&self, config_path: &Path) -> Result<()> {
        let file_config = ConfigLoader::load_from_file(config_path)?.ok_or_else(|| {
            MinicatError::config(format!("{} not found", config_path.display()))
        })?;

        let bundles = ConfigLoader::bundles(&file_config)?;
        if bundles.is_empty() {
            Logger::warn(&format!("{} declares no bundles", config_path.display()));
        }

        for config in &bundles {
            self.run_bundle(config).await?;
        }

        Ok(())
    }

    async fn run_bundle(&self, config: &BundleConfig) -> Result<BundleResult> {
        let build_service: Arc<dyn BuildService> = Arc::new(crate::core::BundleService::new(
            Arc::new(TokioFileSystemService),
            minifier_for(config.kind),
        ));

        build_service.build(config).await
    }
}

impl Default for CliHandler {
    fn default() -> Self {
        Self::new()
    }
}
