pub mod client_config;
pub use self::client_config::ClientConfig;
mod config_loader;
pub use self::config_loader::ConfigLoader;
