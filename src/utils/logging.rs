use crate::core::models::{BundleConfig, BundleResult};
use std::time::Instant;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

pub struct Logger;

impl Logger {
    /// Install the global subscriber. `RUST_LOG` wins over `verbose`.
    pub fn init(verbose: bool) {
        let default = if verbose { "minicat=debug" } else { "minicat=info" };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    }

    pub fn bundle_start(config: &BundleConfig) {
        info!("📦 Bundling {} files", config.kind.extension());
        info!("📁 Input: {}", config.input_dir.display());
        info!("🎯 Output: {}", config.output.display());
        debug!("⚙️  Strategy: {}, hash: {}", config.strategy, config.hash);
    }

    pub fn found_files(count: usize, ext: &str) {
        info!("🔍 Found {} .{} files", count, ext);
    }

    pub fn reading_file(path: &std::path::Path) {
        debug!("📄 file path {}", path.display());
    }

    pub fn minifying(name: &str) {
        debug!("⚡ Minifying: {}", name);
    }

    pub fn removed_existing(path: &std::path::Path) {
        debug!("🗑️  Removed existing {}", path.display());
    }

    pub fn bundle_complete(result: &BundleResult, build_time: std::time::Duration) {
        info!("  • {}", result.stats());
        if let Some(ref hash) = result.hash {
            info!("  • Content hash: {}", hash);
        }
        info!("  • Build time: {:.2?}", build_time);
        info!("✅ Wrote {}", result.output_path.display());
    }

    pub fn error(msg: &str) {
        error!("❌ {}", msg);
    }

    pub fn warn(msg: &str) {
        warn!("⚠️  {}", msg);
    }

    pub fn debug(msg: &str) {
        debug!("{}", msg);
    }
}

pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    pub fn start(name: &str) -> Self {
        debug!("⏱️  Starting: {}", name);
        Self {
            start: Instant::now(),
            name: name.to_string(),
        }
    }

    pub fn elapsed(&self) -> std::time::Duration {
        self.start.elapsed()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        debug!("⏱️  Completed: {} in {:.2?}", self.name, self.elapsed());
    }
}
