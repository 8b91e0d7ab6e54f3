pub mod analysis;
pub mod config;
pub mod error;
pub mod football_data;
pub mod http_cache;
pub mod http_client;
pub mod logging;
pub mod model;
pub mod provider;
pub mod resolve;
pub mod scoring;
pub mod server;
pub mod stats;
