//! Console front end for the mirrorbot chat responder.

mod chat;

use std::process;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "mirrorbot",
    about = "mirrorbot, a chat partner that turns your words back on you",
    version
)]
struct Cli {
    /// Number of rounds to chat for (prompted for when omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    rounds: Option<u32>,

    /// RNG seed for reproducible canned replies
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the transcript as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let options = chat::Options {
        rounds: cli.rounds,
        seed: cli.seed,
        json: cli.json,
    };

    if let Err(e) = chat::run(&options) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
