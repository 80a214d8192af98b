pub mod env_config;
pub mod error;
pub mod format;
pub mod http;
pub mod jwt;
