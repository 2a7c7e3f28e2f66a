//! Download domain - resolves a TikTok link into a direct media URL
//!
//! Pipeline (strictly linear, no retries):
//!   validate method → validate link → resolve via extraction service → normalize
//!
//! Any stage may fail; every failure is classified into a `DownloadError`
//! that knows its own HTTP status and response body.

pub mod actions;
pub mod error;
pub mod models;
pub mod normalize;
pub mod validation;

pub use actions::handle_download;
pub use error::DownloadError;
pub use models::{DownloadRequest, ErrorResponse, ResolvedVideo};
