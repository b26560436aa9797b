//! Badges command implementation.
//!
//! Regenerates `bot-badge-<colour>.png` variants from the red template so
//! every variant shares the template's exact silhouette.

use std::path::PathBuf;

use clap::Args;

use crate::assets::AssetStore;
use crate::colorize::colorize_all;
use crate::config::Config;
use crate::error::{AvatarError, Result};
use crate::output::{display_path, plural, Printer};

/// Regenerate bot badge colour variants from the red template
#[derive(Args, Debug)]
pub struct BadgesArgs {
    /// Badge asset directory (overrides config)
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Colours to generate (names from the colour table, hex, or CSS names)
    #[arg(long, alias = "colors", value_delimiter = ',', default_values = ["black", "white"])]
    pub colours: Vec<String>,
}

pub fn run(args: BadgesArgs, config: &Config, printer: &Printer) -> Result<()> {
    let store = AssetStore::new(args.assets.unwrap_or_else(|| config.assets.clone()));

    let template = store.load_template()?.ok_or_else(|| AvatarError::Io {
        path: store.template_path(),
        message: "Missing template badge".to_string(),
    })?;

    printer.status(
        "Colorizing",
        &format!(
            "{} from {}",
            plural(args.colours.len(), "variant", "variants"),
            display_path(&store.template_path())
        ),
    );

    let table = config.colour_table()?;
    for (name, image) in colorize_all(&template, &table, &args.colours)? {
        let path = store.save_badge(&name, &image)?;
        printer.status("Generated", &display_path(&path));
    }

    Ok(())
}
