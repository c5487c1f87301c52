#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CatalogArgs, CliConfig, Command, GenerateArgs, OutputFormat, ServeArgs};

pub use toml_config::TomlConfig;
