//! panelray - a pointer-driven spatial UI engine
//!
//! Headless demo binary: drives the interaction pipeline with scripted
//! controller paths and logs hover, selection, and repaint activity.

mod config;
mod demo;

use anyhow::{bail, Result};
use config::DemoConfig;
use std::{env, path::PathBuf};
use tracing::info;

fn main() -> Result<()> {
    // Initialize tracing with INFO level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting panelray v{}", env!("CARGO_PKG_VERSION"));

    let cli = CliOptions::parse(env::args().skip(1))?;
    let mut cfg = match &cli.config {
        Some(path) => DemoConfig::load_from_path(path),
        None => DemoConfig::load(),
    };
    if let Some(frames) = cli.frames {
        cfg.frames = frames;
    }
    if cli.gpu {
        cfg.gpu_upload = true;
    }

    demo::run(&cfg)
}

#[derive(Default)]
struct CliOptions {
    config: Option<PathBuf>,
    frames: Option<u32>,
    gpu: bool,
}

impl CliOptions {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut options = CliOptions::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let Some(path) = args.next() else {
                        bail!("--config requires a path");
                    };
                    options.config = Some(PathBuf::from(path));
                }
                "--frames" => {
                    let Some(value) = args.next() else {
                        bail!("--frames requires a number");
                    };
                    options.frames = Some(value.parse()?);
                }
                "--gpu" => options.gpu = true,
                other => bail!("unknown argument: {other}"),
            }
        }
        Ok(options)
    }
}
