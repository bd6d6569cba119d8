//! Core of the mirrorbot chat responder.
//!
//! Turns a line of user text into a mirrored response by swapping pronouns
//! and verbs, falls back to a canned reply when nothing matches, and records
//! every round in a fixed-capacity transcript.

pub mod config;
pub mod error;
pub mod responder;
pub mod rounds;
pub mod session;
pub mod transcript;

pub use config::ChatConfig;
pub use error::{ChatError, ChatResult};
pub use responder::{Responder, Response, ResponseSource, generate_response};
pub use rounds::parse_round_count;
pub use session::ChatSession;
pub use transcript::{Exchange, Transcript};
