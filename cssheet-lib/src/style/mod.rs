//! The style model: declarations grouped into rules, plus the `:root` tokens.

pub mod declaration;
pub mod rule;
pub mod variables;

pub use declaration::Declaration;
pub use rule::Rule;
pub use variables::{get_variable, Token, UnknownToken, VariableSet};
