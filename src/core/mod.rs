pub mod catalog;
pub mod engine;
pub mod matcher;
pub mod planner;
pub mod render;
pub mod trends;

pub use crate::domain::model::{
    BusinessModel, BusinessPlan, MarketTrendPoint, PlanReport, PlanRequest, UserInput,
};
pub use crate::domain::ports::{CatalogSource, ConfigProvider, Storage};
pub use crate::utils::error::Result;
