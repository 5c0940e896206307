//! boing - terminal squash-and-stretch jumping demo
//!
//! Run with: cargo run -- [--sample jump.wav] [--config tuning.toml]
//!
//! Hold space to crouch, release to jump, q to quit.

mod app;
mod character;
mod sound;
mod ui;

use std::{
    fs::File,
    path::{Path, PathBuf},
    sync::Mutex,
};

use clap::Parser;
use color_eyre::eyre::{Result as EyreResult, WrapErr};
use tracing_subscriber::EnvFilter;

use app::App;
use boing::{audio::SampleBuffer, tuning::Tuning};

#[derive(Debug, Parser)]
#[command(version, about = "Squash-and-stretch jumping demo")]
struct Args {
    /// Jump sound: 16-bit mono 48 kHz WAV. A synthesized boing is used if omitted.
    #[arg(long)]
    sample: Option<PathBuf>,
    /// TOML file overriding the default tuning.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Master volume in [0, 1]. Overrides the tuning file.
    #[arg(long)]
    volume: Option<f32>,
    /// Where to write logs (the terminal belongs to the UI).
    #[arg(long, default_value = "boing.log")]
    log_file: PathBuf,
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    let args = Args::parse();

    init_logging(&args.log_file)?;

    let mut tuning = match &args.config {
        Some(path) => Tuning::load(path)
            .wrap_err_with(|| format!("failed to load tuning from {}", path.display()))?,
        None => Tuning::default(),
    };
    if let Some(volume) = args.volume {
        tuning.master_volume = volume;
    }

    let jump_sound = match &args.sample {
        Some(path) => SampleBuffer::load_wav(path)
            .wrap_err_with(|| format!("failed to load sample {}", path.display()))?,
        None => sound::boing(),
    };

    App::new(tuning, jump_sound).run()
}

fn init_logging(path: &Path) -> EyreResult<()> {
    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
