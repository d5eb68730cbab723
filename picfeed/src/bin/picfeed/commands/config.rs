use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use picfeed::AppConfig;

use crate::examples::ExampleGroup;
use crate::output::OutputManager;

pub const EXAMPLES: &[ExampleGroup] = &[ExampleGroup {
    title: "Effective Configuration",
    commands: &[
        "picfeed config                      # Show settings from ./picfeed.toml or defaults",
        "picfeed --config alt.toml config    # Show settings from another file",
        "picfeed --output json config        # Print settings as JSON",
    ],
}];

/// Resolves the configuration: an explicit path must exist, otherwise
/// `picfeed.toml` in the working directory is used when present.
pub fn load_config(explicit: Option<&Path>, output: &OutputManager) -> Result<AppConfig> {
    match explicit {
        Some(path) => {
            output.verbose(&format!("loading config from {}", path.display()));
            AppConfig::from_path(path).with_context(|| format!("Failed to load {}", path.display()))
        }
        None => {
            let cwd: PathBuf = std::env::current_dir().context("Failed to get current directory")?;
            output.verbose(&format!("looking for {} in {}", picfeed::config::CONFIG_FILE_NAME, cwd.display()));
            AppConfig::discover(&cwd).context("Failed to load picfeed.toml")
        }
    }
}

pub fn handle_config(config: &AppConfig, output: &OutputManager) -> Result<()> {
    output.display(config)
}
