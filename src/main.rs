use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vibematch::cli_style::get_styles;
use vibematch::config::{AppConfig, CliConfig, FileConfig, OutputFormat};
use vibematch::{
    Artist, CompatibilityEngine, InMemoryProfileStore, Profile, ProfileStore, Track,
};

fn parse_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s);
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

/// Compares two users' music-listening profiles and reports how
/// compatible their tastes are.
#[derive(Parser, Debug)]
#[command(styles=get_styles())]
struct CliArgs {
    /// Path to the first user's raw listening data (JSON).
    #[clap(value_parser = parse_path)]
    pub listening_data_a: PathBuf,

    /// Path to the second user's raw listening data (JSON).
    #[clap(value_parser = parse_path)]
    pub listening_data_b: PathBuf,

    /// Path to an optional TOML config file; file values override flags.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// How to emit the report.
    #[clap(long, value_enum, default_value = "pretty")]
    pub output: OutputFormat,

    /// Disable colored output.
    #[clap(long)]
    pub no_color: bool,

    /// Width of the score bars in the pretty report.
    #[clap(long, default_value_t = 20)]
    pub bar_width: usize,
}

/// Shape of the raw listening data file for one user, as the session
/// layer would fetch it from the streaming service.
#[derive(Debug, Deserialize)]
struct RawListeningData {
    display_name: String,
    #[serde(default)]
    artists: Vec<Artist>,
    #[serde(default)]
    tracks: Vec<Track>,
}

fn load_listening_data(path: &Path) -> Result<RawListeningData> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read listening data: {:?}", path))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse listening data: {:?}", path))
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = cli_args
        .config
        .as_deref()
        .map(FileConfig::load)
        .transpose()?;
    let cli_config = CliConfig {
        output: cli_args.output,
        color: !cli_args.no_color,
        bar_width: cli_args.bar_width,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    let raw_a = load_listening_data(&cli_args.listening_data_a)?;
    let raw_b = load_listening_data(&cli_args.listening_data_b)?;

    let store: Arc<dyn ProfileStore> = Arc::new(InMemoryProfileStore::new());
    let key_a = raw_a.display_name.clone();
    let key_b = raw_b.display_name.clone();

    info!("Building profile for {}...", key_a);
    let profile = Profile::build(raw_a.display_name, raw_a.artists, raw_a.tracks);
    store.put(&key_a, profile)?;

    info!("Building profile for {}...", key_b);
    let profile = Profile::build(raw_b.display_name, raw_b.artists, raw_b.tracks);
    store.put(&key_b, profile)?;

    info!("{} profiles in store", store.user_ids()?.len());

    let profile_a = store
        .get(&key_a)?
        .with_context(|| format!("No profile stored for {}", key_a))?;
    let profile_b = store
        .get(&key_b)?
        .with_context(|| format!("No profile stored for {}", key_b))?;

    let engine = CompatibilityEngine::new();
    let report = engine.compare(&profile_a, &profile_b);

    vibematch::report::print_report(&profile_a, &profile_b, &report, &config)
}
