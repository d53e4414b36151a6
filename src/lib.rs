pub mod args;
pub mod error;
pub mod grouping;
pub mod handicap;
pub mod input;
pub mod model;
pub mod standings;
pub mod tee_sheet;
pub mod view;

pub use error::EngineError;
