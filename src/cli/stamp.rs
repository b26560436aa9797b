//! Stamp command implementation.
//!
//! Resizes an avatar, composites the requested overlay and writes a PNG.
//! Missing badge assets are reported as warnings, never as failures.

use std::path::PathBuf;

use clap::Args;

use crate::assets::{load_rgba, write_png, AssetStore};
use crate::config::Config;
use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::stamp::Stamper;
use crate::types::{BadgeColour, Variant};

/// Stamp an avatar with a bot or premium overlay
#[derive(Args, Debug)]
pub struct StampArgs {
    /// Input avatar image
    pub input: PathBuf,

    /// Output PNG path
    pub output: PathBuf,

    /// Overlay variant
    #[arg(long, value_enum, default_value_t = Variant::Bot)]
    pub variant: Variant,

    /// Output size in pixels (default: 1024)
    #[arg(long, value_parser = clap::value_parser!(u32).range(16..=4096))]
    pub size: Option<u32>,

    /// Bot badge colour
    #[arg(long = "badge-color", alias = "badge-colour", value_enum, default_value_t = BadgeColour::Red)]
    pub badge_colour: BadgeColour,

    /// Badge asset directory (overrides config)
    #[arg(long)]
    pub assets: Option<PathBuf>,
}

pub fn run(args: StampArgs, config: &Config, printer: &Printer) -> Result<()> {
    let size = args.size.unwrap_or_else(|| config.effective_size());
    let store = AssetStore::new(args.assets.clone().unwrap_or_else(|| config.assets.clone()));

    // Fail on an unreadable avatar before any compositing happens.
    let avatar = load_rgba(&args.input)?;

    printer.status(
        "Stamping",
        &format!("{} ({}, {}px)", display_path(&args.input), args.variant, size),
    );

    let stamper = Stamper::with_config(store, config.geometry, config.colour_table()?);
    let outcome = stamper.stamp(&avatar, size, args.variant, args.badge_colour)?;

    for warning in &outcome.warnings {
        printer.warning(&warning.to_string());
    }

    write_png(&outcome.image, &args.output)?;
    printer.status(
        "Saved",
        &format!("{} avatar to {}", args.variant, display_path(&args.output)),
    );

    Ok(())
}
