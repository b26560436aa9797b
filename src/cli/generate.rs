//! Generate command implementation.
//!
//! Requests a base avatar from the image service and files it in the
//! identity's avatar directory.

use std::path::PathBuf;

use clap::Args;

use crate::config::Config;
use crate::credentials::find_api_key;
use crate::error::{AvatarError, Result};
use crate::gallery::AvatarDir;
use crate::generate::{ImageGenerator, ImageRequest, OpenAiGenerator, Prompts};
use crate::output::{display_path, plural, Printer};
use crate::types::Style;

/// Generate a base avatar and store it in an identity directory
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Identity directory (avatars go in <path>/avatar)
    pub identity_path: PathBuf,

    /// Custom prompt (default: the style's builtin prompt)
    #[arg(long, short)]
    pub prompt: Option<String>,

    /// Avatar style
    #[arg(long, short = 'v', alias = "variant", value_enum, default_value_t = Style::Minimal)]
    pub style: Style,

    /// Image size in pixels (default: 1024)
    #[arg(long, short, value_parser = clap::value_parser!(u32).range(16..=4096))]
    pub size: Option<u32>,

    /// Model to use (default: dall-e-3)
    #[arg(long, short)]
    pub model: Option<String>,

    /// List existing avatars instead of generating
    #[arg(long, short)]
    pub list: bool,
}

pub fn run(args: GenerateArgs, config: &Config, printer: &Printer) -> Result<()> {
    check_identity(&args.identity_path)?;
    if args.list {
        return list(&args.identity_path, printer);
    }

    let api_key = find_api_key()?;
    let generator = OpenAiGenerator::new(config.effective_endpoint(), api_key);
    run_with(args, config, printer, &generator)
}

/// Generate using any [`ImageGenerator`].
pub fn run_with(
    args: GenerateArgs,
    config: &Config,
    printer: &Printer,
    generator: &dyn ImageGenerator,
) -> Result<()> {
    check_identity(&args.identity_path)?;
    if args.list {
        return list(&args.identity_path, printer);
    }

    let prompt = match args.prompt {
        Some(prompt) => prompt,
        None => {
            let prompt = Prompts::new().get(args.style).to_string();
            printer.info("Prompt", &prompt);
            prompt
        }
    };

    let request = ImageRequest::new(
        prompt,
        args.size.unwrap_or_else(|| config.effective_size()),
        args.model.as_deref().unwrap_or_else(|| config.effective_model()),
    );

    printer.status("Generating", &format!("avatar with {}", request.model));
    let bytes = generator.generate(&request)?;

    let avatars = AvatarDir::new(&args.identity_path);
    let path = avatars.save(
        &bytes,
        &request.prompt,
        args.style,
        &request.model,
        chrono::Local::now().naive_local(),
    )?;

    printer.status("Saved", &display_path(&path));
    println!("{}", path.display());

    Ok(())
}

fn check_identity(path: &std::path::Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(AvatarError::Io {
            path: path.to_path_buf(),
            message: "Identity path does not exist".to_string(),
        })
    }
}

fn list(identity: &std::path::Path, printer: &Printer) -> Result<()> {
    let entries = AvatarDir::new(identity).list()?;
    if entries.is_empty() {
        println!("No avatars yet.");
        return Ok(());
    }

    printer.info("Found", &plural(entries.len(), "avatar", "avatars"));
    for entry in entries {
        println!("  - {} ({})", entry.file_name, entry.style);
    }
    Ok(())
}
