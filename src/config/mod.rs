//! Configuration loading and management for the tool rental engine.
//!
//! This module loads the tool catalog (tool types with their daily charges
//! and charge policies, and the tools themselves) from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use tool_rental::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Loaded {} tools", config.catalog().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ToolCatalog, ToolConfig, ToolTypeConfig, ToolsFile};
