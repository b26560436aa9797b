use miette::Diagnostic;
use thiserror::Error;

/// Main error type for bot-avatar operations
#[derive(Error, Diagnostic, Debug)]
pub enum AvatarError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(bot_avatar::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid image {path}: {message}")]
    #[diagnostic(code(bot_avatar::image))]
    Image {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(bot_avatar::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(bot_avatar::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("No API key found")]
    #[diagnostic(
        code(bot_avatar::credentials),
        help("Set OPENAI_API_KEY or add an openai key to ~/.claude/settings.json or ~/.openclaw/openclaw.json")
    )]
    MissingCredentials,

    #[error("Remote service error: {message}")]
    #[diagnostic(code(bot_avatar::remote))]
    Remote { message: String },
}

impl From<reqwest::Error> for AvatarError {
    fn from(e: reqwest::Error) -> Self {
        AvatarError::Remote {
            message: e.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AvatarError>;
