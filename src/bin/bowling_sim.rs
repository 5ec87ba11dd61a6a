//! Headless bowling simulator.
//!
//! Plays a whole game with random pin fall (or a scripted list of pin counts)
//! and prints the final scorecard, as text or as a JSON snapshot.
//!
//! ```text
//! bowling-sim --players 3 --seed 7
//! bowling-sim --players 1 --rolls 10,7,3,9,0 --json
//! ```

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde_json::json;
use tracing::info;

use tui_bowling::term::{ScorecardView, Viewport};
use tui_bowling::types::BowlingAction;
use tui_bowling::config::MAX_PLAYERS;
use tui_bowling::{logging, Session, SessionConfig};

#[derive(Debug, Parser)]
#[command(name = "bowling-sim", about = "Play a bowling game without a terminal UI")]
struct Args {
    /// Players in the game
    #[arg(long, env = "BOWLING_PLAYERS")]
    players: Option<u8>,

    /// Seed for random pin fall
    #[arg(long, env = "BOWLING_SEED")]
    seed: Option<u32>,

    /// Comma-separated pin counts, bowled in turn order instead of random rolls
    #[arg(long, value_delimiter = ',')]
    rolls: Vec<u8>,

    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = SessionConfig::from_env();
    if let Some(players) = args.players {
        if !(1..=MAX_PLAYERS).contains(&players) {
            bail!("--players must be between 1 and {MAX_PLAYERS}");
        }
        config.players = players;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    logging::init_stderr(&config);

    let session = play(&config, &args.rolls)?;
    let game = session.game();
    info!(
        deliveries = game.rolls_recorded(),
        over = game.is_over(),
        "simulation finished"
    );

    if args.json {
        let out = json!({
            "snapshot": session.snapshot(),
            "outcome": game.outcome(),
            "standings": game.standings(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_scorecard(&session);
    }
    Ok(())
}

fn play(config: &SessionConfig, rolls: &[u8]) -> Result<Session> {
    let mut session = Session::new(config);

    if rolls.is_empty() {
        while !session.game().is_over() {
            session.apply(BowlingAction::Roll)?;
        }
        return Ok(session);
    }

    for (i, &pins) in rolls.iter().enumerate() {
        session
            .apply(BowlingAction::Pins(pins))
            .with_context(|| format!("roll #{} ({} pins)", i + 1, pins))?;
    }
    Ok(session)
}

fn print_scorecard(session: &Session) {
    let snap = session.snapshot();
    let height = ScorecardView::grid_height(snap.players.len()) + 4;
    let fb = ScorecardView::default().render(
        &snap,
        None,
        Viewport::new(ScorecardView::grid_width(), height),
    );
    // The last row is the key help, which means nothing here.
    for y in 0..height.saturating_sub(1) {
        println!("{}", fb.row_text(y).trim_end());
    }
}
