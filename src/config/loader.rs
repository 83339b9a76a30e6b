//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the tool
//! catalog from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{RentalError, RentalResult};

use super::types::{ToolCatalog, ToolsFile};

/// Loads and provides access to the tool catalog configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── tools.yaml   # Tool types (pricing rules) and tools
/// ```
///
/// # Example
///
/// ```no_run
/// use tool_rental::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// let tool = loader.catalog().get_tool("LADW").unwrap();
/// println!("{} {}", tool.brand, tool.tool_type);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    catalog: ToolCatalog,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - [`RentalError::ConfigNotFound`] if `tools.yaml` is missing
    /// - [`RentalError::ConfigParseError`] if it contains invalid YAML
    /// - [`RentalError::UnknownToolType`] if a tool references an undefined type
    pub fn load<P: AsRef<Path>>(path: P) -> RentalResult<Self> {
        let tools_path = path.as_ref().join("tools.yaml");
        let tools_file = Self::load_yaml::<ToolsFile>(&tools_path)?;
        let catalog = ToolCatalog::from_file(tools_file)?;

        info!(
            path = %tools_path.display(),
            tools = catalog.len(),
            "Loaded tool catalog"
        );

        Ok(Self { catalog })
    }

    /// Wraps an already-built catalog.
    pub fn from_catalog(catalog: ToolCatalog) -> Self {
        Self { catalog }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> RentalResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RentalError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| RentalError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded tool catalog.
    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }
}
