pub mod game;
pub use game::*;

pub mod player;
pub use player::*;

pub mod position;
pub use position::*;

pub mod seating;
pub use seating::*;
