pub mod cli;
pub mod config;
pub mod download_file;
pub mod download_listing_page;
pub mod error;
pub mod logging;
pub mod models;
pub mod naming;
pub mod pacing;
pub mod pipeline;
pub mod transport;
