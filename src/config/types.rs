//! Configuration types for the tool catalog.
//!
//! This module contains the strongly-typed structures deserialized from
//! `tools.yaml` and the resolved [`ToolCatalog`] built from them.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{RentalError, RentalResult};
use crate::models::{ChargePolicy, Tool, ToolType};

/// A tool type entry in `tools.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolTypeConfig {
    /// Display name of the tool type.
    pub name: String,
    /// Charge per billable day.
    pub daily_charge: Decimal,
    /// Whether non-holiday weekdays are billed.
    pub charge_on_weekday: bool,
    /// Whether non-holiday weekend days are billed.
    pub charge_on_weekend: bool,
    /// Whether observed holidays are billed.
    pub charge_on_holiday: bool,
}

/// A tool entry in `tools.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolConfig {
    /// Unique tool code.
    pub code: String,
    /// Key of the tool's entry under `tool_types`.
    pub tool_type: String,
    /// Manufacturer brand.
    pub brand: String,
}

/// The `tools.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolsFile {
    /// Map of tool type key to pricing rules.
    pub tool_types: HashMap<String, ToolTypeConfig>,
    /// The rentable tools.
    pub tools: Vec<ToolConfig>,
}

/// The resolved catalog of rentable tools, keyed by tool code.
///
/// # Example
///
/// ```
/// use tool_rental::config::ToolCatalog;
///
/// let catalog = ToolCatalog::standard();
/// let ladder = catalog.get_tool("LADW").unwrap();
/// assert_eq!(ladder.tool_type.name, "Ladder");
/// assert!(catalog.get_tool("ABCD").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ToolCatalog {
    tools: BTreeMap<String, Tool>,
}

impl ToolCatalog {
    /// Builds a catalog from a parsed `tools.yaml`.
    ///
    /// Fails with [`RentalError::UnknownToolType`] if a tool references a
    /// tool type that is not defined.
    pub fn from_file(file: ToolsFile) -> RentalResult<Self> {
        let mut tools = BTreeMap::new();

        for tool in file.tools {
            let type_config = file.tool_types.get(&tool.tool_type).ok_or_else(|| {
                RentalError::UnknownToolType {
                    code: tool.code.clone(),
                    tool_type: tool.tool_type.clone(),
                }
            })?;

            let tool_type = ToolType {
                code: tool.tool_type,
                name: type_config.name.clone(),
                daily_charge: type_config.daily_charge,
                policy: ChargePolicy::new(
                    type_config.charge_on_weekday,
                    type_config.charge_on_weekend,
                    type_config.charge_on_holiday,
                ),
            };

            tools.insert(
                tool.code.clone(),
                Tool {
                    code: tool.code,
                    tool_type,
                    brand: tool.brand,
                },
            );
        }

        Ok(Self { tools })
    }

    /// The store's standard catalog of four tools.
    pub fn standard() -> Self {
        let ladder = standard_type(
            "ladder",
            "Ladder",
            Decimal::new(199, 2),
            ChargePolicy::new(true, true, false),
        );
        let chainsaw = standard_type(
            "chainsaw",
            "Chainsaw",
            Decimal::new(149, 2),
            ChargePolicy::new(true, false, true),
        );
        let jackhammer = standard_type(
            "jackhammer",
            "Jackhammer",
            Decimal::new(299, 2),
            ChargePolicy::new(true, false, false),
        );

        let tools = [
            ("CHNS", &chainsaw, "Stihl"),
            ("LADW", &ladder, "Werner"),
            ("JAKD", &jackhammer, "DeWalt"),
            ("JAKR", &jackhammer, "Ridgid"),
        ]
        .into_iter()
        .map(|(code, tool_type, brand)| {
            (
                code.to_string(),
                Tool {
                    code: code.to_string(),
                    tool_type: tool_type.clone(),
                    brand: brand.to_string(),
                },
            )
        })
        .collect();

        Self { tools }
    }

    /// Returns every tool, sorted by code.
    pub fn find_all_tools(&self) -> Vec<&Tool> {
        self.tools.values().collect()
    }

    /// Looks up a tool by its code.
    pub fn get_tool(&self, code: &str) -> Option<&Tool> {
        self.tools.get(code)
    }

    /// Returns the number of tools in the catalog.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns true if the catalog has no tools.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

fn standard_type(code: &str, name: &str, daily_charge: Decimal, policy: ChargePolicy) -> ToolType {
    ToolType {
        code: code.to_string(),
        name: name.to_string(),
        daily_charge,
        policy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_standard_catalog_contents() {
        let catalog = ToolCatalog::standard();
        assert_eq!(catalog.len(), 4);

        let codes: Vec<&str> = catalog
            .find_all_tools()
            .iter()
            .map(|t| t.code.as_str())
            .collect();
        assert_eq!(codes, vec!["CHNS", "JAKD", "JAKR", "LADW"]);
    }

    #[test]
    fn test_standard_catalog_pricing() {
        let catalog = ToolCatalog::standard();

        let ladder = catalog.get_tool("LADW").unwrap();
        assert_eq!(ladder.brand, "Werner");
        assert_eq!(ladder.daily_charge(), dec("1.99"));
        assert_eq!(ladder.policy(), ChargePolicy::new(true, true, false));

        let chainsaw = catalog.get_tool("CHNS").unwrap();
        assert_eq!(chainsaw.daily_charge(), dec("1.49"));
        assert_eq!(chainsaw.policy(), ChargePolicy::new(true, false, true));

        let jackhammer = catalog.get_tool("JAKR").unwrap();
        assert_eq!(jackhammer.brand, "Ridgid");
        assert_eq!(jackhammer.daily_charge(), dec("2.99"));
        assert_eq!(jackhammer.policy(), ChargePolicy::new(true, false, false));
    }

    #[test]
    fn test_get_tool_unknown_or_empty_code() {
        let catalog = ToolCatalog::standard();
        assert!(catalog.get_tool("ABCD").is_none());
        assert!(catalog.get_tool("").is_none());
        assert!(catalog.get_tool("ladw").is_none());
    }

    #[test]
    fn test_from_file_resolves_tool_types() {
        let yaml = r#"
tool_types:
  saw:
    name: Saw
    daily_charge: "3.25"
    charge_on_weekday: true
    charge_on_weekend: true
    charge_on_holiday: true
tools:
  - code: SAWM
    tool_type: saw
    brand: Makita
"#;
        let file: ToolsFile = serde_yaml::from_str(yaml).unwrap();
        let catalog = ToolCatalog::from_file(file).unwrap();

        let saw = catalog.get_tool("SAWM").unwrap();
        assert_eq!(saw.tool_type.code, "saw");
        assert_eq!(saw.tool_type.name, "Saw");
        assert_eq!(saw.daily_charge(), dec("3.25"));
        assert_eq!(saw.policy(), ChargePolicy::every_day());
    }

    #[test]
    fn test_from_file_rejects_unknown_tool_type() {
        let yaml = r#"
tool_types: {}
tools:
  - code: SAWM
    tool_type: saw
    brand: Makita
"#;
        let file: ToolsFile = serde_yaml::from_str(yaml).unwrap();

        match ToolCatalog::from_file(file) {
            Err(RentalError::UnknownToolType { code, tool_type }) => {
                assert_eq!(code, "SAWM");
                assert_eq!(tool_type, "saw");
            }
            other => panic!("Expected UnknownToolType error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_catalog_is_empty() {
        let catalog = ToolCatalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.find_all_tools().is_empty());
    }
}
