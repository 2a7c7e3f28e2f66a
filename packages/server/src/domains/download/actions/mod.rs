pub mod handle_download;

pub use handle_download::handle_download;
