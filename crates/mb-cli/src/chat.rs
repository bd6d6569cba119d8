use std::io::{self, BufRead, Write};

use colored::Colorize;

use mb_core::transcript::GREETING;
use mb_core::{ChatConfig, ChatSession, ResponseSource, parse_round_count};

const RULE: &str = "----------";

/// Command-line choices for one chat.
pub struct Options {
    pub rounds: Option<u32>,
    pub seed: Option<u64>,
    pub json: bool,
}

pub fn run(options: &Options) -> Result<(), String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    converse(&mut stdin.lock(), &mut stdout.lock(), options)
}

/// Run a whole chat over the given reader and writer.
fn converse<R: BufRead, W: Write>(
    reader: &mut R,
    out: &mut W,
    options: &Options,
) -> Result<(), String> {
    writeln!(out, "{RULE}").map_err(|e| e.to_string())?;
    writeln!(out, "Welcome to chatbot!").map_err(|e| e.to_string())?;

    let rounds = match options.rounds {
        Some(rounds) => {
            writeln!(out, "How many rounds? {rounds}").map_err(|e| e.to_string())?;
            rounds
        }
        None => ask_rounds(reader, out)?,
    };
    writeln!(out, "{RULE}").map_err(|e| e.to_string())?;

    let mut config = ChatConfig::default().with_rounds(rounds);
    if let Some(seed) = options.seed {
        config = config.with_seed(seed);
    }
    let mut session =
        ChatSession::new(config).map_err(|e| format!("failed to start session: {e}"))?;

    play(&mut session, reader, out)?;

    writeln!(out, "\nThanks for chatting!").map_err(|e| e.to_string())?;
    writeln!(out, "{RULE}").map_err(|e| e.to_string())?;
    writeln!(out, "TRANSCRIPT: \n").map_err(|e| e.to_string())?;

    let transcript = session.into_transcript();
    if options.json {
        let json = transcript.to_json().map_err(|e| e.to_string())?;
        writeln!(out, "{json}").map_err(|e| e.to_string())?;
    } else {
        for block in transcript.render() {
            writeln!(out, "{block}").map_err(|e| e.to_string())?;
        }
    }
    out.flush().map_err(|e| e.to_string())
}

/// Prompt until a positive round count is entered. Blank lines are skipped
/// without a new prompt.
fn ask_rounds<R: BufRead, W: Write>(reader: &mut R, out: &mut W) -> Result<u32, String> {
    loop {
        write!(out, "How many rounds? ").map_err(|e| e.to_string())?;
        out.flush().map_err(|e| e.to_string())?;

        let line = loop {
            match read_line(reader)? {
                Some(line) if line.trim_ascii().is_empty() => continue,
                Some(line) => break line,
                None => return Err("input ended before a round count was given".into()),
            }
        };
        match parse_round_count(&line) {
            Ok(rounds) => return Ok(rounds),
            Err(e) => {
                log::debug!("rejected round count {line:?}: {e}");
                writeln!(out, "{}", e.to_string().yellow()).map_err(|e| e.to_string())?;
            }
        }
    }
}

/// Play every round of the session, echoing each reply.
fn play<S: ResponseSource, R: BufRead, W: Write>(
    session: &mut ChatSession<S>,
    reader: &mut R,
    out: &mut W,
) -> Result<(), String> {
    while !session.is_finished() {
        let round = session.current_round();
        if round == 1 {
            writeln!(out, "{GREETING}").map_err(|e| e.to_string())?;
        }
        out.flush().map_err(|e| e.to_string())?;

        let Some(line) = read_line(reader)? else {
            return Err(format!("input ended before round {round}"));
        };
        let reply = session.process(&line).map_err(|e| e.to_string())?;
        writeln!(out, "{reply}").map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Read one line without its terminator. `None` at end of input.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD.
fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>, String> {
    let mut buf = Vec::new();
    match reader.read_until(b'\n', &mut buf) {
        Ok(0) => Ok(None),
        Ok(_) => {
            if buf.ends_with(b"\n") {
                buf.pop();
                if buf.ends_with(b"\r") {
                    buf.pop();
                }
            }
            Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
        }
        Err(e) => Err(e.to_string()),
    }
}
