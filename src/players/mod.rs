mod fallback;
mod fish;
mod monte;
mod player;

pub use fallback::*;
pub use fish::*;
pub use monte::*;
pub use player::*;
