//! Error types for the draw engine.

use thiserror::Error;

/// Result type for draw operations.
pub type TarotResult<T> = Result<T, TarotError>;

/// Errors that can occur while configuring or reading a draw.
///
/// Invalid picks are not errors: the session ignores them.
#[derive(Debug, Error)]
pub enum TarotError {
    /// The session configuration is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The deck has not been shuffled yet.
    #[error("deck not shuffled yet")]
    NotStarted,

    /// A reading needs exactly three picked cards.
    #[error("need 3 picked cards, have {picked}")]
    IncompleteDraw {
        /// How many cards have been picked so far.
        picked: usize,
    },

    /// A reading could not be serialized.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
