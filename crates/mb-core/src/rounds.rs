//! Parsing the number of rounds a session should run for.

use crate::error::{ChatError, ChatResult};

/// Parse a user-typed round count from the first word of a line.
///
/// Anything after the first word is ignored, so `"2 rounds"` is 2. A first
/// word that is not an integer (or a blank line) is
/// [`ChatError::NotANumber`]; zero and negatives are [`ChatError::NotPositive`].
pub fn parse_round_count(input: &str) -> ChatResult<u32> {
    let word = input.split_ascii_whitespace().next().unwrap_or("");
    let value: i64 = word
        .parse()
        .map_err(|_| ChatError::NotANumber(word.to_string()))?;
    if value <= 0 {
        return Err(ChatError::NotPositive(value));
    }
    u32::try_from(value).map_err(|_| ChatError::NotANumber(word.to_string()))
}
