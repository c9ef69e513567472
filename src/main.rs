use std::path::{Path, PathBuf};
use anyhow::{Context, Result, bail};
use clap::Parser;
use raylib::prelude::*;
use tracing_subscriber::EnvFilter;

mod carousel;
mod config;
mod constants;
mod engine;
mod error;
mod events;
mod gallery;
mod lightbox;
mod render;
mod scroll;
mod slide;
mod state;
mod texture_loader;
mod timer;

use crate::config::{GalleryConfig, validate_interval};
use crate::constants::*;
use crate::engine::Engine;
use crate::render::engine::GalleryEngine;
use crate::texture_loader::{CardPaths, manifest_cards, scan_cards, shuffle_cards};

#[derive(Parser)]
#[command(name = "gallery", about = "Photo-card gallery with auto-advancing carousels and a lightbox")]
struct Cli {
    /// Directory holding the images (one card per sub-directory)
    directory: PathBuf,

    /// Card manifest; defaults to gallery.toml inside the directory when present
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Seconds between carousel auto-advances
    #[arg(long)]
    interval: Option<f32>,

    /// Shuffle the images of every card once at startup
    #[arg(long)]
    shuffle: bool,

    #[arg(long, default_value_t = WINDOW_WIDTH)]
    width: i32,

    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    height: i32,

    #[arg(long, default_value_t = FPS)]
    fps: u32,

    /// Enable verbose debug output
    #[arg(short, long)]
    verbose: bool,
}

// RUST_LOG is honoured when set; `--verbose` forces debug.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn init_tracing(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

// --- Cards come from the manifest when there is one, else from the directory tree ---
fn discover(cli: &Cli) -> Result<(GalleryConfig, Vec<CardPaths>)> {
    let manifest = cli
        .manifest
        .clone()
        .or_else(|| Some(cli.directory.join(MANIFEST_NAME)).filter(|p| p.is_file()));

    let (config, mut cards) = match manifest {
        Some(path) => {
            let config = GalleryConfig::from_file(&path)
                .with_context(|| format!("failed to load manifest {}", path.display()))?;
            let base = path.parent().unwrap_or(Path::new("."));
            let cards = if config.cards.is_empty() {
                scan_cards(&cli.directory)?
            } else {
                manifest_cards(&config, base)
            };
            tracing::info!("using manifest {}", path.display());
            (config, cards)
        }
        None => (GalleryConfig::default(), scan_cards(&cli.directory)?),
    };

    if cards.is_empty() {
        bail!("no images found under {}", cli.directory.display());
    }
    if cli.shuffle {
        shuffle_cards(&mut cards);
    }
    Ok((config, cards))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(interval) = cli.interval {
        validate_interval(interval).context("invalid --interval")?;
    }

    let (config, cards) = discover(&cli)?;
    let interval = config.resolve_interval(cli.interval);
    let title = config.title.clone().unwrap_or_else(|| {
        cli.directory
            .canonicalize()
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .unwrap_or_else(|| "Gallery".to_string())
    });
    tracing::info!("{} cards, advancing every {interval}s", cards.len());

    let (mut rl, thread) = raylib::init()
        .size(cli.width, cli.height)
        .title(&title)
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(cli.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    // Escape belongs to the lightbox
    rl.set_exit_key(None);

    let mut engine = GalleryEngine::new(title, interval)?;
    engine.initialize(&mut rl, &thread, cards)?;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        engine.render_frame(dt, &mut rl, &thread);
    }

    Ok(())
}
