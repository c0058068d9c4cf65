//! Programmatic builder for CSS text.
//!
//! Build a [`StyleSheet`] out of named rules, append declarations to them and
//! serialize the whole thing, optionally writing it to a `.css` file.
//!
//! ```
//! use cssheet_lib::StyleSheet;
//!
//! let mut sheet = StyleSheet::new();
//! sheet
//!     .add_rule(".btn")
//!     .add_property("padding", ["10px", "15px"]);
//!
//! let css = sheet.generate();
//! assert!(css.starts_with(":root {\n"));
//! assert!(css.ends_with(".btn {\n    padding: 10px 15px;\n}\n"));
//! ```

pub mod error;
pub mod manifest;
pub mod sheet;
pub mod style;

pub use error::{Error, GenerateError, Result};
pub use manifest::SheetManifest;
pub use sheet::StyleSheet;
pub use style::{get_variable, Declaration, Rule, Token, VariableSet};
