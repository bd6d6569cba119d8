//! Chat session management.
//!
//! `ChatSession` pairs a [`Responder`] with a [`Transcript`] and numbers the
//! rounds as they are processed.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::ChatConfig;
use crate::error::ChatResult;
use crate::responder::{Responder, ResponseSource};
use crate::transcript::Transcript;

/// A single conversation running for a fixed number of rounds.
#[derive(Debug)]
pub struct ChatSession<S> {
    responder: Responder<S>,
    transcript: Transcript,
}

impl ChatSession<StdRng> {
    /// Create a session from a config, seeding the RNG from it.
    pub fn new(config: ChatConfig) -> ChatResult<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_source(config.rounds, rng)
    }
}

impl<S: ResponseSource> ChatSession<S> {
    /// Create a session that draws canned replies from `source`.
    pub fn with_source(rounds: u32, source: S) -> ChatResult<Self> {
        let transcript = Transcript::start(rounds as usize)?;
        log::debug!("starting session with {rounds} rounds");
        Ok(Self {
            responder: Responder::new(source),
            transcript,
        })
    }

    /// Answer one line of input and record the exchange.
    pub fn process(&mut self, input: &str) -> ChatResult<String> {
        let round = self.current_round();
        let response = self.responder.respond(input);
        self.transcript.record(round, input, response.text(), round == 1)?;
        Ok(response.into_text())
    }

    /// The 1-based number of the round about to be played.
    pub fn current_round(&self) -> u32 {
        self.transcript.len() as u32 + 1
    }

    /// Whether every round has been played.
    pub fn is_finished(&self) -> bool {
        self.transcript.is_complete()
    }

    /// The transcript so far.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// End the session and hand back its transcript.
    pub fn into_transcript(self) -> Transcript {
        self.transcript
    }
}
