//! Configuration settings for the N-Queens SAT solver

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub run: RunConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// First board size to solve
    pub start_size: usize,
    /// One past the last board size to solve
    pub end_size: usize,
    /// Print solved boards; when false, report solve times instead
    pub print_boards: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub save_solutions: bool,
    pub output_directory: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            run: RunConfig {
                start_size: 5,
                end_size: 6,
                print_boards: true,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                save_solutions: false,
                output_directory: PathBuf::from("output/solutions"),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    ///
    /// Board sizes below 1 have no defined encoding, so they are rejected
    /// here rather than handed to the encoder.
    pub fn validate(&self) -> Result<()> {
        if self.run.start_size == 0 {
            anyhow::bail!("Start board size must be positive");
        }

        if self.run.end_size < self.run.start_size {
            anyhow::bail!(
                "End board size {} must not be below start size {}",
                self.run.end_size,
                self.run.start_size
            );
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    ///
    /// An explicit start size without an end size solves that single size.
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(start_size) = cli_overrides.start_size {
            self.run.start_size = start_size;
            self.run.end_size = start_size + 1;
        }
        if let Some(end_size) = cli_overrides.end_size {
            self.run.end_size = end_size;
        }
        if let Some(print_boards) = cli_overrides.print_boards {
            self.run.print_boards = print_boards;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub start_size: Option<usize>,
    pub end_size: Option<usize>,
    pub print_boards: Option<bool>,
}
