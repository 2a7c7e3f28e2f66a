// HTTP routes
pub mod download;
pub mod health;

pub use download::*;
pub use health::*;
