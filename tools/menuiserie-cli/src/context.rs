//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};
use menuiserie_core::money::Locale;
use menuiserie_core::pricing::PricingRules;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            match find_config_file(&cwd) {
                Some(path) => {
                    let path_str = path.to_string_lossy();
                    (CliConfig::load(&path_str)?, Some(path))
                }
                None => (CliConfig::default(), None),
            }
        };

        let errors = config.pricing.validate();
        if !errors.is_empty() {
            bail!("Invalid configuration: {}", errors.join("; "));
        }
        if let Some(path) = &config_path {
            output.debug(&format!("Using config: {}", path.display()));
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Pricing constants after config overrides.
    pub fn rules(&self) -> PricingRules {
        self.config.pricing.rules()
    }

    pub fn locale(&self) -> Locale {
        self.config.display.locale
    }
}

/// Find a config file in the directory tree, nearest first.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_searches_upward() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("chantier").join("lot-2");
        std::fs::create_dir_all(&nested).unwrap();
        assert_eq!(find_config_file(&nested), None);

        std::fs::write(dir.path().join(".menuiserie.toml"), "").unwrap();
        assert_eq!(
            find_config_file(&nested),
            Some(dir.path().join(".menuiserie.toml"))
        );

        // nearer and earlier-listed names win
        std::fs::write(nested.join("menuiserie.json"), "{}").unwrap();
        assert_eq!(find_config_file(&nested), Some(nested.join("menuiserie.json")));
    }
}
