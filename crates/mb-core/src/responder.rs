//! Response generation.
//!
//! A line of input is split on ASCII whitespace and each word is looked up
//! in a fixed pronoun/verb table. If any word matches, the swapped sentence
//! is echoed back with periods turned into question marks. Otherwise one of
//! a few canned replies is picked at random.
//!
//! Words are matched whole, so punctuation glued to a word keeps it from
//! matching: `"you."` stays `"you?"` rather than becoming `"me?"`.

use rand::Rng;
use rand::rngs::StdRng;

/// Word swaps applied to user input, keyed by lowercase word.
pub const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("i", "you"),
    ("me", "you"),
    ("you", "me"),
    ("my", "your"),
    ("your", "my"),
    ("am", "are"),
    ("are", "am"),
];

/// Replies used when no word in the input could be swapped.
pub const CANNED_RESPONSES: &[&str] = &["Mmhmm.", "Interesting.", "I see."];

/// Source of choices for the canned-response fallback.
///
/// Implemented for [`StdRng`]; tests can supply a scripted source to pin
/// the pick.
pub trait ResponseSource {
    /// Pick an index in `0..count`. `count` is never zero.
    fn choose(&mut self, count: usize) -> usize;
}

impl ResponseSource for StdRng {
    fn choose(&mut self, count: usize) -> usize {
        self.random_range(0..count)
    }
}

impl<S: ResponseSource + ?Sized> ResponseSource for &mut S {
    fn choose(&mut self, count: usize) -> usize {
        (**self).choose(count)
    }
}

/// A generated reply, tagged with how it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// The input with pronouns and verbs swapped.
    Mirrored(String),
    /// A canned reply.
    Canned(&'static str),
}

impl Response {
    /// The reply text.
    pub fn text(&self) -> &str {
        match self {
            Self::Mirrored(text) => text,
            Self::Canned(text) => text,
        }
    }

    /// Consume the response and return its text.
    pub fn into_text(self) -> String {
        match self {
            Self::Mirrored(text) => text,
            Self::Canned(text) => text.to_string(),
        }
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

/// Look up the replacement for a single word, ignoring case.
pub fn substitute(word: &str) -> Option<&'static str> {
    let lower = word.to_lowercase();
    SUBSTITUTIONS
        .iter()
        .find(|&&(key, _)| key == lower)
        .map(|&(_, replacement)| replacement)
}

/// Mirror the input, or return `None` if no word could be swapped.
pub fn mirror(input: &str) -> Option<String> {
    let mut mirrored = false;
    let words: Vec<&str> = input
        .split_ascii_whitespace()
        .map(|word| match substitute(word) {
            Some(replacement) => {
                mirrored = true;
                replacement
            }
            None => word,
        })
        .collect();

    if mirrored {
        Some(words.join(" ").replace('.', "?"))
    } else {
        None
    }
}

/// Pick a canned reply using the given source.
pub fn canned_response(source: &mut impl ResponseSource) -> &'static str {
    let index = source.choose(CANNED_RESPONSES.len());
    debug_assert!(
        index < CANNED_RESPONSES.len(),
        "response source picked {index} of {}",
        CANNED_RESPONSES.len()
    );
    CANNED_RESPONSES[index % CANNED_RESPONSES.len()]
}

/// Produce a reply for one line of input.
pub fn respond(input: &str, source: &mut impl ResponseSource) -> Response {
    match mirror(input) {
        Some(text) => {
            log::debug!("mirrored {input:?} -> {text:?}");
            Response::Mirrored(text)
        }
        None => {
            let text = canned_response(source);
            log::debug!("no substitution in {input:?}, canned reply {text:?}");
            Response::Canned(text)
        }
    }
}

/// Produce the reply text for one line of input.
pub fn generate_response(input: &str, source: &mut impl ResponseSource) -> String {
    respond(input, source).into_text()
}

/// A response generator that owns its random source.
#[derive(Debug, Clone)]
pub struct Responder<S> {
    source: S,
}

impl<S: ResponseSource> Responder<S> {
    /// Create a responder around a random source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Produce a reply for one line of input.
    pub fn respond(&mut self, input: &str) -> Response {
        respond(input, &mut self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    /// Replays a fixed list of picks.
    struct Scripted(Vec<usize>);

    impl ResponseSource for Scripted {
        fn choose(&mut self, _count: usize) -> usize {
            self.0.remove(0)
        }
    }

    #[test]
    fn substitution_is_case_insensitive() {
        assert_eq!(substitute("I"), Some("you"));
        assert_eq!(substitute("i"), Some("you"));
        assert_eq!(substitute("YOUR"), Some("my"));
        assert_eq!(substitute("Am"), Some("are"));
        assert_eq!(substitute("happy"), None);
    }

    #[test]
    fn full_table() {
        let expected = [
            ("i", "you"),
            ("me", "you"),
            ("you", "me"),
            ("my", "your"),
            ("your", "my"),
            ("am", "are"),
            ("are", "am"),
        ];
        for (word, replacement) in expected {
            assert_eq!(substitute(word), Some(replacement), "word {word}");
        }
    }

    #[test]
    fn mirrors_and_questions() {
        assert_eq!(mirror("I am happy.").as_deref(), Some("you are happy?"));
    }

    #[test]
    fn unmatched_words_keep_case() {
        assert_eq!(
            mirror("My Dog ate MY Homework").as_deref(),
            Some("your Dog ate your Homework")
        );
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(mirror("  you   and\tme  ").as_deref(), Some("me and you"));
    }

    #[test]
    fn every_period_becomes_question_mark() {
        assert_eq!(mirror("I think. so...").as_deref(), Some("you think? so???"));
        assert_eq!(mirror("I..."), None);
    }

    #[test]
    fn attached_punctuation_blocks_match() {
        assert_eq!(mirror("you."), None);
        assert_eq!(mirror("I love you.").as_deref(), Some("you love you?"));
    }

    #[test]
    fn no_match_is_none() {
        assert_eq!(mirror("banana"), None);
        assert_eq!(mirror(""), None);
        assert_eq!(mirror("   "), None);
    }

    #[test]
    fn banana_gets_canned_reply() {
        let mut rng = StdRng::seed_from_u64(42);
        let reply = generate_response("banana", &mut rng);
        assert!(CANNED_RESPONSES.contains(&reply.as_str()));
    }

    #[test]
    fn empty_input_gets_canned_reply() {
        let mut rng = StdRng::seed_from_u64(7);
        let response = respond("", &mut rng);
        assert!(matches!(response, Response::Canned(_)));
        assert!(CANNED_RESPONSES.contains(&response.text()));
    }

    #[test]
    fn scripted_source_pins_canned_pick() {
        let mut source = Scripted(vec![2, 0, 1]);
        assert_eq!(generate_response("banana", &mut source), "I see.");
        assert_eq!(generate_response("banana", &mut source), "Mmhmm.");
        assert_eq!(generate_response("banana", &mut source), "Interesting.");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "response source picked 4 of 3")]
    fn out_of_range_pick_is_caught() {
        let mut source = Scripted(vec![4]);
        canned_response(&mut source);
    }

    #[test]
    fn only_ascii_whitespace_splits() {
        assert_eq!(mirror("I\u{a0}am"), None);
        assert_eq!(mirror("I\x0Cam\tyou").as_deref(), Some("you are me"));
    }

    #[test]
    fn mirrored_reply_does_not_consume_source() {
        let mut source = Scripted(vec![1]);
        assert_eq!(generate_response("I am", &mut source), "you are");
        assert_eq!(generate_response("banana", &mut source), "Interesting.");
    }

    #[test]
    fn seeded_sources_agree() {
        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            assert_eq!(
                generate_response("hello", &mut a),
                generate_response("hello", &mut b)
            );
        }
    }

    #[test]
    fn all_canned_replies_reachable() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(canned_response(&mut rng));
        }
        assert_eq!(seen.len(), CANNED_RESPONSES.len(), "missing: {seen:?}");
    }

    #[test]
    fn responder_owns_source() {
        let mut responder = Responder::new(Scripted(vec![0]));
        assert_eq!(
            responder.respond("are you ok."),
            Response::Mirrored("am me ok?".to_string())
        );
        assert_eq!(responder.respond("ok"), Response::Canned("Mmhmm."));
    }

    #[test]
    fn response_display() {
        assert_eq!(Response::Canned("I see.").to_string(), "I see.");
        assert_eq!(Response::Mirrored("you are".into()).to_string(), "you are");
    }

    fn word() -> impl Strategy<Value = String> {
        prop_oneof![
            "[a-zA-Z.,!]{1,8}",
            proptest::sample::select(vec!["I", "me", "You", "MY", "your", "am", "Are"])
                .prop_map(str::to_string),
        ]
    }

    proptest! {
        #[test]
        fn mirrored_output_is_built_from_tokens(words in proptest::collection::vec(word(), 0..8)) {
            let input = words.join(" ");
            let mut rng = StdRng::seed_from_u64(1);
            let reply = generate_response(&input, &mut rng);
            if words.iter().any(|w| substitute(w).is_some()) {
                let expected: Vec<String> = words
                    .iter()
                    .map(|w| substitute(w).map_or_else(|| w.clone(), str::to_string))
                    .collect();
                prop_assert_eq!(reply, expected.join(" ").replace('.', "?"));
            } else {
                prop_assert!(CANNED_RESPONSES.contains(&reply.as_str()));
            }
        }

        #[test]
        fn unmatched_text_is_never_echoed(input in "[b-hj-z ]{1,30}") {
            prop_assume!(input.split_ascii_whitespace().all(|w| substitute(w).is_none()));
            let mut rng = StdRng::seed_from_u64(3);
            let reply = generate_response(&input, &mut rng);
            prop_assert!(CANNED_RESPONSES.contains(&reply.as_str()));
        }
    }
}
