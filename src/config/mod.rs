mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{BusConfig, Config, DataConfig, LocationConfig, ViewsConfig};
