//! Error types for the chat core.

use thiserror::Error;

/// Result type for chat operations.
pub type ChatResult<T> = Result<T, ChatError>;

/// Errors that can occur while running a chat session.
#[derive(Debug, Error)]
pub enum ChatError {
    /// A transcript was requested with room for zero rounds.
    #[error("transcript capacity must be at least 1")]
    InvalidCapacity,

    /// More exchanges were recorded than the transcript has room for.
    #[error("transcript is full ({capacity} rounds already recorded)")]
    CapacityExceeded {
        /// The capacity the transcript was created with.
        capacity: usize,
    },

    /// An exchange was recorded out of round order, or with the greeting
    /// flag on a round other than the first.
    #[error("round {round} (first: {is_first}) recorded where round {expected} was due")]
    OutOfOrder {
        /// The round number the next slot holds.
        expected: u32,
        /// The round number that was passed in.
        round: u32,
        /// The greeting flag that was passed in.
        is_first: bool,
    },

    /// The round count was not an integer.
    #[error("Invalid input. Please enter a positive integer.")]
    NotANumber(String),

    /// The round count was an integer but not a positive one.
    #[error("Please enter a positive number.")]
    NotPositive(i64),

    /// Transcript export failed.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
