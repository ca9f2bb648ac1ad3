//! `rota` CLI -- render a concrete on-call schedule for a time window.
//!
//! Reads a rotation definition and an override list from JSON files, renders
//! the schedule for `[--from, --until)`, and writes the resulting entries as
//! pretty-printed JSON. The rendered payload is the only thing ever written
//! to stdout; diagnostics go to stderr via `tracing` (set `ROTA_LOG` to
//! raise verbosity, e.g. `ROTA_LOG=debug`).
//!
//! ## Usage
//!
//! ```sh
//! rota --schedule schedule.json --overrides overrides.json \
//!      --from 2024-01-01T00:00:00Z --until 2024-02-01T00:00:00Z
//!
//! # Write to a file instead of stdout
//! rota --schedule schedule.json --overrides overrides.json \
//!      --from 2024-01-01T00:00:00Z --until 2024-02-01T00:00:00Z -o out.json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use rota_core::{parse_utc, render_schedule, Override, Rotation, Window};
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(
    name = "rota",
    version,
    about = "Render an on-call rotation schedule with overrides"
)]
struct Cli {
    /// Path to the rotation definition JSON file
    #[arg(long)]
    schedule: String,

    /// Path to the overrides JSON file (a list, possibly empty)
    #[arg(long)]
    overrides: String,

    /// Window start, ISO-8601 UTC (e.g. 2024-01-01T00:00:00Z)
    #[arg(long)]
    from: String,

    /// Window end, ISO-8601 UTC (exclusive)
    #[arg(long)]
    until: String,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("ROTA_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let rotation: Rotation = read_json(&cli.schedule)
        .with_context(|| format!("Failed to load schedule file: {}", cli.schedule))?;
    let overrides: Vec<Override> = read_json(&cli.overrides)
        .with_context(|| format!("Failed to load overrides file: {}", cli.overrides))?;

    let from = parse_utc(&cli.from).with_context(|| format!("Failed to parse --from: {}", cli.from))?;
    let until =
        parse_utc(&cli.until).with_context(|| format!("Failed to parse --until: {}", cli.until))?;

    debug!(
        users = rotation.users.len(),
        overrides = overrides.len(),
        %from,
        %until,
        "inputs loaded"
    );

    let entries = render_schedule(&rotation, &overrides, &Window { from, until })
        .context("Failed to render schedule")?;
    info!(entries = entries.len(), "schedule rendered");

    let payload = serde_json::to_string_pretty(&entries)?;
    write_output(cli.output.as_deref(), &payload)?;
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse JSON in {}", path))
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
