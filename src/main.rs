#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod effects;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;
use xplore_core::{ExpiryPolicy, XploreConfig};

use crate::context::AppContext;

/// Xplore'25 - tech fest event explorer
#[derive(Parser, Debug)]
#[command(name = "xplore-desktop")]
#[command(about = "Xplore'25 - Department of CSE tech fest events")]
struct Args {
    /// Config file (defaults to <config dir>/xplore/config.json when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Event catalog JSON replacing the built-in lineup
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// How long revealed cards stay face up, in milliseconds
    #[arg(long)]
    reveal_delay_ms: Option<u64>,

    /// When the reveal countdown starts: first | latest
    #[arg(long)]
    expiry_policy: Option<ExpiryPolicy>,
}

/// Config file with command line overrides applied
fn resolve_config(args: &Args) -> Result<XploreConfig> {
    let mut config = XploreConfig::load_or_default(args.config.as_deref())
        .context("Failed to load config")?;

    if let Some(catalog) = &args.catalog {
        config.catalog = Some(catalog.clone());
    }
    if let Some(ms) = args.reveal_delay_ms {
        config.reveal_delay_ms = ms;
    }
    if let Some(policy) = args.expiry_policy {
        config.expiry_policy = policy;
    }
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = resolve_config(&args)?;
    let catalog = config.load_catalog().context("Failed to load event catalog")?;

    tracing::info!(
        events = catalog.len(),
        reveal_delay_ms = config.reveal_delay_ms,
        policy = ?config.expiry_policy,
        "Starting {}",
        catalog.name()
    );

    let title = catalog.name().to_string();
    context::install(AppContext {
        config,
        catalog: Arc::new(catalog),
    });

    // Desktop window sized like a laptop browser
    let window_width = 1280.0;
    let window_height = 860.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop().with_cfg(config).launch(app::App);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::parse_from(std::iter::once("xplore-desktop").chain(args.iter().copied()))
    }

    fn config_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn flags_override_config_file() {
        let file = config_file(r#"{ "reveal_delay_ms": 8000, "music_volume": 0.5 }"#);
        let path = file.path().to_str().unwrap();
        let args = parse(&["--config", path, "--reveal-delay-ms", "1200", "--expiry-policy", "first"]);

        let config = resolve_config(&args).unwrap();
        assert_eq!(config.reveal_delay_ms, 1200);
        assert_eq!(config.expiry_policy, ExpiryPolicy::FromFirstReveal);
        assert_eq!(config.music_volume, 0.5);
    }

    #[test]
    fn zero_delay_is_rejected() {
        let file = config_file("{}");
        let path = file.path().to_str().unwrap();
        let args = parse(&["--config", path, "--reveal-delay-ms", "0"]);
        assert!(resolve_config(&args).is_err());
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let args = parse(&["--config", "/nonexistent/xplore/config.json"]);
        assert!(resolve_config(&args).is_err());
    }
}
