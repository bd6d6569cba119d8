//! Transcript of a chat session.

use serde::Serialize;

use crate::error::{ChatError, ChatResult};

/// Greeting shown before the first round, repeated in the transcript.
pub const GREETING: &str = "Hi there! What is on your mind?";

/// One round of conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exchange {
    round: u32,
    user_text: String,
    response_text: String,
    is_first: bool,
}

impl Exchange {
    /// The 1-based round number.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// What the user typed.
    pub fn user_text(&self) -> &str {
        &self.user_text
    }

    /// What the bot answered.
    pub fn response_text(&self) -> &str {
        &self.response_text
    }

    /// Whether this was the opening round.
    pub fn is_first(&self) -> bool {
        self.is_first
    }

    /// Render this exchange as a transcript block.
    pub fn render(&self) -> String {
        if self.is_first {
            format!("{GREETING} \n{}\n{}", self.user_text, self.response_text)
        } else {
            format!("{}\n{}\n", self.user_text, self.response_text)
        }
    }
}

/// An append-only log of exchanges with a fixed number of slots.
#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    capacity: usize,
    exchanges: Vec<Exchange>,
}

impl Transcript {
    /// Start an empty transcript with room for `capacity` rounds.
    pub fn start(capacity: usize) -> ChatResult<Self> {
        if capacity == 0 {
            return Err(ChatError::InvalidCapacity);
        }
        Ok(Self {
            capacity,
            exchanges: Vec::with_capacity(capacity),
        })
    }

    /// Append one exchange.
    ///
    /// `round` must be the next slot's 1-based number and `is_first` must be
    /// set exactly for round 1. Fails without touching the transcript once
    /// every slot is used or when the round is out of order.
    pub fn record(
        &mut self,
        round: u32,
        user_text: impl Into<String>,
        response_text: impl Into<String>,
        is_first: bool,
    ) -> ChatResult<()> {
        if self.is_complete() {
            return Err(ChatError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        let expected = self.exchanges.len() as u32 + 1;
        if round != expected || is_first != (round == 1) {
            return Err(ChatError::OutOfOrder {
                expected,
                round,
                is_first,
            });
        }
        self.exchanges.push(Exchange {
            round,
            user_text: user_text.into(),
            response_text: response_text.into(),
            is_first,
        });
        log::trace!("recorded round {round} ({}/{})", self.len(), self.capacity);
        Ok(())
    }

    /// Render every recorded exchange, in recording order.
    pub fn render(&self) -> Vec<String> {
        self.exchanges.iter().map(Exchange::render).collect()
    }

    /// Export the transcript as pretty-printed JSON.
    pub fn to_json(&self) -> ChatResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// All recorded exchanges.
    pub fn exchanges(&self) -> &[Exchange] {
        &self.exchanges
    }

    /// The number of rounds this transcript was started with.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of recorded exchanges.
    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }

    /// Whether every slot has been filled.
    pub fn is_complete(&self) -> bool {
        self.exchanges.len() >= self.capacity
    }
}
