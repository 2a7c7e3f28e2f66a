// TTDownloader - API Core
//
// Resolves a TikTok page link into a direct, watermark-free media URL by
// delegating to the TikWM extraction service and normalizing its answer.
// Stateless: every request is handled start to finish on its own.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
