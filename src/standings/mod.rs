pub mod activity;
pub mod merit;

pub use activity::*;
pub use merit::*;
