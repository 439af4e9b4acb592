//! Error types for challenge generation and verification.

use thiserror::Error;

/// Errors surfaced by the captcha engine
#[derive(Debug, Error)]
pub enum CaptchaError {
    /// Invalid configuration (empty alphabet, no fonts, zero size)
    #[error("configuration error: {0}")]
    Config(String),

    /// A font resource could not be read or parsed
    #[error("failed to load font {path}: {reason}")]
    FontLoad { path: String, reason: String },

    /// The selected font has no glyph for a required character
    #[error("font {font} has no glyph for {character:?}")]
    MissingGlyph { character: char, font: String },

    /// Operation invoked out of order
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// Storage collaborator failure
    #[error("store error: {0}")]
    Store(#[from] anyhow::Error),
}

impl CaptchaError {
    /// Returns true if this error may succeed on retry
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Store(_))
    }
}
