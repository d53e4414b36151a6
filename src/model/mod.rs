pub mod group;
pub mod results;
pub mod types;

pub use group::*;
pub use results::*;
pub use types::*;
