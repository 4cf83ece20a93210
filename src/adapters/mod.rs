pub mod mysql;

pub use mysql::{GameQuery, MySqlGameStore};
