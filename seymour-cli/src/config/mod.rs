//! Configuration module for seymour
//!
//! This module handles:
//! - Project-level configuration (seymour.toml / .seymourrc.json)
//! - User-level configuration (~/.config/seymour/config.toml)
//! - Environment overrides (SEYMOUR_NODES, SEYMOUR_EDGE_PROBABILITY, SEYMOUR_SEED)

mod project_config;
mod user_config;

pub use project_config::{ProjectConfig, EXAMPLE_CONFIG, PROJECT_CONFIG_FILE};
