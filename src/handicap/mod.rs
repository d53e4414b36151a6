pub mod calculator;
pub mod roster;
pub mod tee;

pub use calculator::*;
pub use roster::*;
pub use tee::*;
