mod file_config;

pub use file_config::FileConfig;

use anyhow::{anyhow, bail, Result};
use clap::ValueEnum;

/// How the comparison report is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable terminal report.
    #[default]
    Pretty,
    /// The report as a JSON document on stdout.
    Json,
}

/// CLI arguments that can be overridden by the TOML config file.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub output: OutputFormat,
    pub color: bool,
    pub bar_width: usize,
}

/// Fully resolved presentation settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub output: OutputFormat,
    pub color: bool,
    pub bar_width: usize,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let output = file
            .output
            .map(|s| parse_output_format(&s))
            .transpose()?
            .unwrap_or(cli.output);

        let color = file.color.unwrap_or(cli.color);

        let bar_width = file.bar_width.unwrap_or(cli.bar_width);
        if bar_width == 0 {
            bail!("bar_width must be at least 1");
        }

        Ok(Self {
            output,
            color,
            bar_width,
        })
    }
}

fn parse_output_format(s: &str) -> Result<OutputFormat> {
    OutputFormat::from_str(s, true).map_err(|_| anyhow!("Unknown output format: {}", s))
}
