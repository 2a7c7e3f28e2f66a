//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use deps::{ServerDeps, TikwmResolver};
pub use test_dependencies::MockVideoResolver;
pub use traits::*;
