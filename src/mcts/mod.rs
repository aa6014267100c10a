//! Determinized one-ply Monte Carlo search.
//!
//! - `determinize`: sample a concrete state consistent with a view
//! - `tree` / `node`: index arena holding a root and its two children
//! - `expand`: play the drawn or held card into each child
//! - `tally`: per-branch statistics aggregated across determinizations
//! - `search`: the driver tying the cycle together
mod choice;
mod config;
mod determinize;
mod error;
mod expand;
mod node;
mod search;
mod tally;
mod tree;

pub use choice::*;
pub use config::*;
pub use determinize::*;
pub use error::*;
pub use expand::*;
pub use node::*;
pub use search::*;
pub use tally::*;
pub use tree::*;
