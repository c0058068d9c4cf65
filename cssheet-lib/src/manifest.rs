//! Declarative sheet description loaded from TOML.
//!
//! ```toml
//! [[variable]]
//! name = "ColorPrimary"
//! value = "#000000"
//!
//! [[rule]]
//! selector = ".btn"
//!
//! [[rule.property]]
//! key = "padding"
//! values = ["10px", "15px"]
//! ```
//!
//! Array order is registration order. A variable named after a built-in
//! token overrides that token; any other name becomes an external variable.

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sheet::StyleSheet;
use crate::style::Token;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SheetManifest {
    #[serde(default, rename = "variable")]
    pub variables: Vec<VariableEntry>,
    #[serde(default, rename = "rule")]
    pub rules: Vec<RuleEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VariableEntry {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuleEntry {
    pub selector: String,
    #[serde(default, rename = "property")]
    pub properties: Vec<PropertyEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyEntry {
    pub key: String,
    #[serde(default)]
    pub values: Vec<String>,
}

impl SheetManifest {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading sheet manifest from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Builds a fresh sheet from the manifest.
    pub fn build(&self) -> StyleSheet {
        let mut sheet = StyleSheet::new();

        for var in &self.variables {
            match var.name.parse::<Token>() {
                Ok(token) => sheet.set_token(token, var.value.as_str()),
                Err(_) => sheet.set_variable(&var.name, var.value.as_str()),
            }
        }

        for entry in &self.rules {
            let rule = sheet.add_rule(&entry.selector);
            for prop in &entry.properties {
                rule.add_property(&prop.key, &prop.values);
            }
        }

        sheet
    }
}
