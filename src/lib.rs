//! Determinized Monte Carlo search agent for Love Letter.
//!
//! - `cards`: card ranks and the 16-card deck
//! - `gameplay`: rule engine, public views, actions, per-round context
//! - `mcts`: determinization, search tree, expansion, aggregation
//! - `players`: decision-makers: random, fallback, and search agents
//! - `table`: referee running rounds between players
pub mod cards;
pub mod gameplay;
pub mod mcts;
pub mod players;
pub mod table;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Seat index around the table.
pub type Position = usize;
/// Win rates and accumulated node scores.
pub type Utility = f32;
/// Sampling odds.
pub type Probability = f32;

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Maximum number of seats at the table.
pub const N: usize = 4;
/// Minimum number of seats at the table.
pub const MIN_SEATS: usize = 2;
/// Cards in a full deck, across all rank multiplicities.
pub const DECK_SIZE: usize = 16;
/// A turn may only begin while at least this many cards remain in the deck.
/// The last card stays face down for the Prince.
pub const MIN_DECK: usize = 2;
/// Score credited to each winner of a round.
pub const WINNER: u8 = 1;

// ============================================================================
// SEARCH PARAMETERS
// ============================================================================
/// Independent determinizations per decision.
pub const DETERMINIZATIONS: usize = 10;
/// Random proposals tried for the card chosen by search before falling back.
pub const FALLBACK_ATTEMPTS: usize = 64;
/// Odds of proposing the drawn card over the held card in the fallback loop.
pub const FALLBACK_DRAWN_ODDS: f64 = 0.5;
/// Default seed mixed into every decision's random stream.
pub const SEED: u64 = 0x10E1E77E4;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
