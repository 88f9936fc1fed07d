//! Generate, list and clear saved color palettes from the command line.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use swatch::{Format, JsonFileStore, MemoryClipboard, Settings, Studio, Swatch};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(version, about = "Generate color palettes")]
struct Cli {
    /// YAML settings file. Created with defaults if it does not exist.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new palette and save it.
    Generate {
        /// Number of colors, usually 6, 8 or 9, at most 256.
        #[arg(short, long)]
        size: Option<usize>,
        /// Encoding of the new colors, `hex` or `hsl`.
        #[arg(short, long)]
        format: Option<Format>,
        /// Keep the color at this position of the last saved palette.
        #[arg(short, long = "lock")]
        locks: Vec<usize>,
    },
    /// Show every saved palette.
    List,
    /// Remove every saved palette.
    Clear,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let settings: Settings = match &cli.config {
        Some(path) => confy::load_path(path)
            .with_context(|| format!("could not load settings from {}", path.display()))?,
        None => Settings::default(),
    };

    let mut studio = Studio::new(JsonFileStore::new(&settings.store), MemoryClipboard::new());

    match cli.command {
        Commands::Generate {
            size,
            format,
            mut locks,
        } => {
            if !locks.is_empty() {
                let last = studio
                    .saved()
                    .context("could not read saved palettes")?
                    .pop()
                    .context("there is no saved palette to lock colors from")?;
                studio.palette_mut().restore(last.parse_colors());

                locks.sort_unstable();
                locks.dedup();
                for index in locks {
                    studio
                        .toggle_lock(index)
                        .with_context(|| format!("could not lock color {index}"))?;
                }
            }

            let swatches = studio
                .generate(
                    size.unwrap_or(settings.size),
                    format.unwrap_or(settings.format),
                )
                .context("could not generate palette")?;

            for swatch in &swatches {
                println!("{}", render(swatch));
            }
        }
        Commands::List => {
            let saved = studio.saved().context("could not read saved palettes")?;
            if saved.is_empty() {
                println!("No saved palettes yet");
            }
            for snapshot in saved {
                println!("{}: {}", snapshot.timestamp, snapshot.colors.join(" "));
            }
        }
        Commands::Clear => {
            studio
                .clear_saved()
                .context("could not clear saved palettes")?;
        }
    }

    if let Some(message) = studio.message() {
        eprintln!("{message}");
    }

    Ok(())
}

fn render(swatch: &Swatch) -> String {
    format!(
        "{:>2}  {}  {:<18}{}",
        swatch.index,
        swatch.hex,
        swatch.hsl,
        if swatch.locked { "  locked" } else { "" }
    )
}
