//! Core domain types shared across the pipeline: raw rows, normalized
//! records, product categories, per-competitor length rules, and app
//! configuration.

pub mod category;
pub mod config;
pub mod error;
pub mod record;
pub mod row;
pub mod rules;

pub use category::Category;
pub use config::{load_app_config, load_app_config_from_env, AppConfig};
pub use error::ConfigError;
pub use record::{DerivedMetrics, NormalizedRecord};
pub use row::RawRow;
pub use rules::{rules_for_competitor, CompetitorRules, LengthMethod};
