//! Configuration for a chat session.

/// Configuration for a chat session.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Number of rounds the session runs for.
    pub rounds: u32,
    /// RNG seed for reproducible canned responses. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            rounds: 1,
            seed: None,
        }
    }
}

impl ChatConfig {
    /// Set the number of rounds.
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
