pub mod standings;
pub mod tee_sheet;

pub use standings::*;
pub use tee_sheet::*;
