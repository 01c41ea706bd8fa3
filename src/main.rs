use std::io;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{error, info, warn};

use wavescope::audio;
use wavescope::term::{self, Tint};
use wavescope::visual::Visualizer;

/// Fallback WAV shipped next to the binary for demo mode.
const DEMO_FILE: &str = "demo.wav";

#[derive(Parser)]
#[command(name = "wavescope")]
#[command(about = "Decode a PCM WAV file and draw waveform and band panels in the terminal")]
struct Args {
    /// WAV file to visualize (shows the demo visualization if omitted)
    file: Option<String>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();
    let default_filter = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
    term::init();

    term::clear_screen();
    let (columns, _) = term::geometry();
    println!(
        "{}",
        term::paint("🎵 Welcome to Terminal Music Visualizer! 🎵", Tint::Primary)
    );
    println!("{}", term::rule(columns));
    println!();

    let outcome = match &args.file {
        Some(path) => {
            info!("Loading audio file: {path}");
            visualize_file(path)
        }
        None => {
            info!("No audio file specified. Using demo file...");
            visualize_demo()
        }
    };

    // Failures degrade to a usage message; the exit code stays 0.
    if let Err(err) = outcome {
        error!("Error occurred: {err:#}");
        show_usage();
    }
}

fn visualize_file(path: &str) -> Result<()> {
    if !audio::can_read_file(path) {
        bail!("cannot read audio file: {path}");
    }

    info!("Processing audio file...");
    let samples =
        audio::read_audio_file(path).with_context(|| format!("failed to decode {path}"))?;

    println!("{}", audio::audio_file_info(path));
    println!();

    let stdout = io::stdout();
    Visualizer::new()
        .visualize(&samples, &mut stdout.lock())
        .context("failed to write visualization")?;

    info!("Visualization complete!");
    Ok(())
}

fn visualize_demo() -> Result<()> {
    let visualizer = Visualizer::new();
    let stdout = io::stdout();

    if audio::can_read_file(DEMO_FILE) {
        info!("Reading demo audio file...");
        let samples =
            audio::read_audio_file(DEMO_FILE).context("failed to decode the demo file")?;
        visualizer.visualize(&samples, &mut stdout.lock())?;
    } else {
        warn!("Demo file not found. Generating sample visualization...");
        visualizer.visualize_sample(&mut stdout.lock())?;
    }
    Ok(())
}

fn show_usage() {
    println!();
    println!("{}", term::paint("Usage:", Tint::Warning));
    println!("  wavescope [audio-file]");
    println!();
    println!("  audio-file: Path to WAV audio file (optional)");
    println!("              If not provided, demo visualization will be shown");
    println!();
    println!("{}", term::paint("Examples:", Tint::Success));
    println!("  wavescope");
    println!("  wavescope /path/to/song.wav");
}
