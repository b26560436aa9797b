//! Colorize command implementation.
//!
//! Recolours a single template to any table, hex or CSS colour and writes
//! the result as a PNG.

use std::path::PathBuf;

use clap::Args;

use crate::assets::{load_rgba, write_png};
use crate::colorize::colorize;
use crate::config::Config;
use crate::error::Result;
use crate::output::{display_path, Printer};

/// Recolour a badge template, keeping its alpha mask
#[derive(Args, Debug)]
pub struct ColorizeArgs {
    /// Template image (its alpha channel is the badge shape)
    pub template: PathBuf,

    /// Output PNG path
    pub output: PathBuf,

    /// Target colour: table name, hex (#RRGGBB) or CSS colour name
    #[arg(long, alias = "color")]
    pub colour: String,
}

pub fn run(args: ColorizeArgs, config: &Config, printer: &Printer) -> Result<()> {
    let colour = config.colour_table()?.resolve(&args.colour)?;
    let template = load_rgba(&args.template)?;

    write_png(&colorize(&template, colour), &args.output)?;
    printer.status(
        "Colorized",
        &format!("{} {} -> {}", display_path(&args.template), colour, display_path(&args.output)),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn test_colorize_command() {
        let dir = tempdir().unwrap();
        let template = dir.path().join("template.png");
        let output = dir.path().join("navy.png");
        write_png(
            &RgbaImage::from_fn(2, 1, |x, _| Rgba([1, 1, 1, if x == 0 { 0 } else { 64 }])),
            &template,
        )
        .unwrap();

        let args = ColorizeArgs {
            template,
            output: output.clone(),
            colour: "navy".to_string(),
        };
        run(args, &Config::default(), &Printer::new()).unwrap();

        let img = load_rgba(&output).unwrap();
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(1, 0).0, [0, 0, 128, 64]);
    }

    #[test]
    fn test_colorize_unknown_colour() {
        let dir = tempdir().unwrap();
        let args = ColorizeArgs {
            template: dir.path().join("missing.png"),
            output: dir.path().join("out.png"),
            colour: "blurple-ish".to_string(),
        };
        assert!(run(args, &Config::default(), &Printer::new()).is_err());
    }
}
