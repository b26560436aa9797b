//! bot-avatar - Bot avatar generation and badge stamping
//!
//! Generates base avatars through a remote image service and decorates them
//! with status overlays: a red ring plus "BOT" badge, or a premium badge.
//! Badge colour variants are derived from a single template by recolouring
//! its alpha mask.

pub mod assets;
pub mod cli;
pub mod colorize;
pub mod config;
pub mod credentials;
pub mod error;
pub mod gallery;
pub mod generate;
pub mod output;
pub mod stamp;
pub mod types;

pub use assets::AssetStore;
pub use colorize::{colorize, colorize_all, render_label, ColourTable};
pub use config::Config;
pub use error::{AvatarError, Result};
pub use gallery::AvatarDir;
pub use generate::{ImageGenerator, ImageRequest, OpenAiGenerator, Prompts};
pub use stamp::{BadgeResolver, BadgeSource, Geometry, StampOutcome, StampWarning, Stamper};
pub use types::{BadgeColour, Colour, Style, Variant};
