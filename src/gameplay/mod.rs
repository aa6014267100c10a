pub mod action;
pub use action::*;

pub mod error;
pub use error::*;

pub mod game;
pub use game::*;

pub mod public;
pub use public::*;

pub mod round;
pub use round::*;

pub mod seat;
pub use seat::*;

pub mod view;
pub use view::*;
