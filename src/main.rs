use clap::Parser;
use miette::Result;

use bot_avatar::cli::{Cli, Commands};
use bot_avatar::config::Config;
use bot_avatar::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();
    let load_config = || Config::discover(cli.config.as_deref());

    match cli.command {
        Commands::Generate(args) => bot_avatar::cli::generate::run(args, &load_config()?, &printer)?,
        Commands::Stamp(args) => bot_avatar::cli::stamp::run(args, &load_config()?, &printer)?,
        Commands::Badges(args) => bot_avatar::cli::badges::run(args, &load_config()?, &printer)?,
        Commands::Colorize(args) => bot_avatar::cli::colorize::run(args, &load_config()?, &printer)?,
        Commands::Completions(args) => bot_avatar::cli::completions::run(args)?,
    }

    Ok(())
}
