pub mod game;
pub mod shuffle;

pub use game::{GameFieldError, GameRecord, NewGame};
