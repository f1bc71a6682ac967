use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, warn};

use boxover::cli::{CliArgs, OutputFormat};
use boxover::config::load_config;
use boxover::input::{GeometryArgs, PromptSession};
use boxover::output::{write_json, write_verdict};

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! because logger may not be initialized
        // (e.g., config loading fails before logger init)
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = CliArgs::parse();

    // Load config if specified and merge with CLI args
    let merged = merge_config_with_args(&cli)?;

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    debug!("boxover v{}", env!("CARGO_PKG_VERSION"));

    // The stdin lock and prompt handle live only inside this scope and are
    // released before the verdict is written, parse failures included.
    let (first, second) = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut session = PromptSession::new(stdin.lock(), stdout.lock());
        session.collect_rects(&merged.geometry)?
    };

    if first.width <= 0 || first.height <= 0 {
        warn!(
            "degenerate extents {}x{}: rectangles cannot overlap",
            first.width, first.height
        );
    }

    let collides = first.intersects(&second);
    match first.intersection(&second) {
        Some(overlap) => debug!(
            "overlap region {}x{} at ({}, {})",
            overlap.width, overlap.height, overlap.x, overlap.y
        ),
        None => debug!("no overlap region"),
    }

    let mut out = io::stdout().lock();
    match merged.format {
        OutputFormat::Text => write_verdict(&mut out, collides)?,
        OutputFormat::Json => write_json(&mut out, &first, &second, collides)?,
    }

    Ok(())
}

/// Merged options from CLI args and optional config file.
struct MergedOptions {
    geometry: GeometryArgs,
    format: OutputFormat,
}

/// Merge config file values with CLI arguments.
/// CLI arguments always take precedence over config values.
fn merge_config_with_args(args: &CliArgs) -> Result<MergedOptions> {
    let config = if let Some(config_path) = &args.config {
        Some(
            load_config(config_path)
                .with_context(|| format!("failed to load config: {}", config_path.display()))?,
        )
    } else {
        None
    };

    // Shared extents: CLI > config > interactive prompt
    let length = args
        .length
        .or_else(|| config.as_ref().and_then(|c| c.length));
    let breadth = args
        .breadth
        .or_else(|| config.as_ref().and_then(|c| c.breadth));

    // Format: CLI > config > default
    let format = if let Some(f) = args.format {
        f
    } else if let Some(name) = config.as_ref().and_then(|c| c.format.as_deref()) {
        parse_format(name).ok_or_else(|| {
            anyhow::anyhow!(
                "unknown format '{}' in config file. Valid values: text, json",
                name
            )
        })?
    } else {
        OutputFormat::Text
    };

    Ok(MergedOptions {
        geometry: GeometryArgs {
            length,
            breadth,
            x1: args.x1,
            y1: args.y1,
            x2: args.x2,
            y2: args.y2,
        },
        format,
    })
}

fn parse_format(s: &str) -> Option<OutputFormat> {
    match s {
        "text" => Some(OutputFormat::Text),
        "json" => Some(OutputFormat::Json),
        _ => None,
    }
}
