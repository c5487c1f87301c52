pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{HttpCatalogSource, LocalStorage};
pub use config::TomlConfig;
pub use crate::core::{
    catalog::{parse_catalog, to_catalog_text, FileCatalogSource},
    engine::PlanEngine,
    planner::generate_plan,
};
pub use utils::error::{PlannerError, Result};
