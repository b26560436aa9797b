pub mod badges;
pub mod colorize;
pub mod completions;
pub mod generate;
pub mod stamp;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// bot-avatar - Generate bot avatars and stamp them with status badges
#[derive(Parser, Debug)]
#[command(name = "bot-avatar")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ./avatar.yaml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a base avatar from a prompt
    Generate(generate::GenerateArgs),

    /// Stamp an avatar with a bot or premium overlay
    Stamp(stamp::StampArgs),

    /// Regenerate bot badge colour variants from the red template
    Badges(badges::BadgesArgs),

    /// Recolour any badge template
    Colorize(colorize::ColorizeArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
