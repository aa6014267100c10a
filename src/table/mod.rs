mod referee;
mod scoreboard;

pub use referee::*;
pub use scoreboard::*;
