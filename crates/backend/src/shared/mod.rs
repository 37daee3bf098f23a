pub mod config;
pub mod instant;
