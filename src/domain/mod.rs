pub mod game;
pub mod outcome;
pub mod tally;
pub mod team;

pub use game::*;
pub use outcome::*;
pub use tally::*;
pub use team::*;
