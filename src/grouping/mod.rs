pub mod groups;
pub mod tee_times;

pub use groups::*;
pub use tee_times::*;
