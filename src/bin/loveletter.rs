//! Love Letter Binary
//!
//! Plays rounds with the search agent at seat 0 against random players.
//!
//! Options: --rounds, --players, --determinizations, --seed, --json

use clap::Parser;
use colored::Colorize;
use loveletter::mcts::Config;
use loveletter::players::*;
use loveletter::table::*;
use loveletter::*;

#[derive(Parser, Debug)]
#[command(name = "loveletter", about = "Determinized search agent for Love Letter")]
struct Args {
    /// Rounds to play
    #[arg(short, long, default_value_t = 1000)]
    rounds: usize,
    /// Seats at the table, the agent included
    #[arg(short, long, default_value_t = N)]
    players: usize,
    /// Determinizations per decision
    #[arg(short, long, default_value_t = DETERMINIZATIONS)]
    determinizations: usize,
    /// Seed for dealing and for the agent
    #[arg(short, long, default_value_t = SEED)]
    seed: u64,
    /// Print the scoreboard as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log()?;
    let config = Config::default()
        .with_determinizations(args.determinizations)
        .with_seed(args.seed);
    let players = std::iter::once(Box::new(Monte::<Fish>::from(config)) as Box<dyn Player>)
        .chain((1..args.players).map(|i| Box::new(Fish::from(args.seed.wrapping_add(i as u64))) as Box<dyn Player>))
        .collect::<Vec<_>>();
    log::info!(
        "playing {} rounds at {} seats with {} determinizations",
        args.rounds,
        args.players,
        args.determinizations
    );
    let scoreboard = Table::new(players, args.seed)?.run(args.rounds)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&scoreboard)?);
    } else {
        for seat in 0..args.players {
            let name = if seat == 0 { "monte" } else { "fish" };
            let line = format!(
                "P{} {:<5} {:>6} wins {:>6.1}%",
                seat,
                name,
                scoreboard.wins(seat),
                100. * scoreboard.share(seat)
            );
            if seat == 0 {
                println!("{}", line.green().bold());
            } else {
                println!("{}", line);
            }
        }
    }
    Ok(())
}
