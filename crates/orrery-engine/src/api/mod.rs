pub mod config;
pub mod error;
pub mod setup;
pub mod types;
