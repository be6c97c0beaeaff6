//! Error types for loading and validating scenes

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum SceneError {
    /// The scene file could not be read
    #[error("failed to read scene: {0}")]
    Io(#[from] std::io::Error),

    /// The scene is not valid TOML or does not match the scene schema
    #[error("parse error: {message}")]
    Parse { message: String, span: Option<Span> },

    /// The scene parsed but describes something that cannot be laid out
    #[error("invalid node '{path}': {reason}")]
    Invalid { path: String, reason: String },
}

impl SceneError {
    /// Create an invalid node error
    pub fn invalid(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get the source span if available
    pub fn span(&self) -> Option<&Span> {
        match self {
            Self::Parse { span, .. } => span.as_ref(),
            _ => None,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let (message, span) = match self {
            Self::Parse {
                message,
                span: Some(span),
            } => (message, span),
            _ => return self.to_string(),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_config(Config::default().with_color(false))
            .with_message("invalid scene")
            .with_label(
                Label::new((filename, span.clone()))
                    .with_message(message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);
        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

impl From<toml::de::Error> for SceneError {
    fn from(err: toml::de::Error) -> Self {
        SceneError::Parse {
            message: err.message().trim().to_string(),
            span: err.span(),
        }
    }
}
