// Business domains
pub mod download;
