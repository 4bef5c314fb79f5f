use miette::Diagnostic;
use thiserror::Error;

/// Main error type for hues operations
#[derive(Error, Diagnostic, Debug)]
pub enum HueError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(hues::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(hues::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid image: {message}")]
    #[diagnostic(code(hues::image))]
    InvalidImage {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid range: {message}")]
    #[diagnostic(code(hues::range))]
    InvalidRange {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Report error: {message}")]
    #[diagnostic(code(hues::report))]
    Report {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Empty input: cannot compute {operation} of an empty sequence")]
    #[diagnostic(code(hues::empty))]
    EmptyInput { operation: &'static str },
}

impl HueError {
    /// Shorthand for an `InvalidImage` error without help text.
    pub fn invalid_image(message: impl Into<String>) -> Self {
        Self::InvalidImage {
            message: message.into(),
            help: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, HueError>;
