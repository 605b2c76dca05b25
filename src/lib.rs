//! Two-state "B/S" cellular automata on a toroidal grid.

pub mod engine;
pub mod error;
pub mod init;
pub mod patterns;
pub mod pos;

pub use engine::{Dimensions, GameOfLife, Grid, RuleTable, Strategy};
pub use error::{Error, Result};
pub use init::Fill;
pub use pos::Cell;
