//! Console badminton against Lee Chong Wei.
//!
//! Options: --name, --opponent, --seed, --json, -v

use std::io::{self, Write};

use anyhow::Context;
use badminton_rally::{GameError, LineReader, MatchConfig, PlayerInput, Session};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Play a badminton rally game in the terminal",
    long_about = None
)]
struct Args {
    /// Your display name; asked interactively when omitted
    #[arg(long)]
    name: Option<String>,

    /// Name of the scripted opponent
    #[arg(long, default_value = badminton_rally::core::DEFAULT_OPPONENT_NAME)]
    opponent: String,

    /// Seed for a reproducible match
    #[arg(long)]
    seed: Option<u64>,

    /// Print the match summary as JSON after the game
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let stdin = io::stdin();
    let mut input = LineReader::new(stdin.lock());
    let mut out = io::stdout().lock();

    writeln!(out, "\n── Welcome to Console Badminton Game ──\n")?;
    let name = match args.name {
        Some(name) => name,
        None => {
            write!(out, "Enter your name: ")?;
            out.flush()?;
            input.next_line()?.unwrap_or_default()
        }
    };

    let mut config = MatchConfig::default()
        .with_player_name(&name)
        .with_opponent_name(args.opponent);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut session = Session::new(config);
    match session.run(&mut input, &mut out) {
        Ok(summary) => {
            if args.json {
                let json = serde_json::to_string_pretty(&summary)
                    .context("failed to serialize match summary")?;
                writeln!(out, "{json}")?;
            }
        }
        Err(GameError::InputClosed) => {
            writeln!(out, "\nInput closed, leaving the court.")?;
        }
        Err(err) => return Err(err).context("match aborted"),
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
