//! Design tokens emitted as CSS custom properties in the `:root` block.
//!
//! The built-in tokens form a closed, ordered table. Callers may add any
//! number of external variables on top; those render after the table, in the
//! order they were first set.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::rule::INDENT;

/// Built-in design tokens, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    // Font sizes
    FontSizeNormal,
    FontSizeSmall,
    // Colors
    ColorPrimary,
    ColorSecondary,
    ColorTertiary,
    ColorQuaternary,
    ColorGray,
    ColorSelection,
    ColorHover,
    ColorSuccess,
    ColorError,
    // Layout sizes
    MenuSize,
    ContentHeight,
    ContentWidth,
    // Timing
    TransitionWait,
}

/// (token, name, default value)
const TOKEN_TABLE: [(Token, &str, &str); 15] = [
    (Token::FontSizeNormal, "FontSizeNormal", "1.1rem"),
    (Token::FontSizeSmall, "FontSizeSmall", ".6rem"),
    (Token::ColorPrimary, "ColorPrimary", "#ffffff"),
    (Token::ColorSecondary, "ColorSecondary", "#3f88bf"),
    (Token::ColorTertiary, "ColorTertiary", "#c2c1c1"),
    (Token::ColorQuaternary, "ColorQuaternary", "#000000"),
    (Token::ColorGray, "ColorGray", "#e9e9e9"),
    (Token::ColorSelection, "ColorSelection", "#ff9300"),
    (Token::ColorHover, "ColorHover", "#ff95008e"),
    (Token::ColorSuccess, "ColorSuccess", "#aadaff7c"),
    (Token::ColorError, "ColorError", "#f20707"),
    (Token::MenuSize, "MenuSize", "6vh"),
    (Token::ContentHeight, "ContentHeight", "94vh"),
    (Token::ContentWidth, "ContentWidth", "100vw"),
    (Token::TransitionWait, "TransitionWait", "0s"),
];

impl Token {
    pub const COUNT: usize = TOKEN_TABLE.len();

    pub const ALL: [Token; Token::COUNT] = [
        Token::FontSizeNormal,
        Token::FontSizeSmall,
        Token::ColorPrimary,
        Token::ColorSecondary,
        Token::ColorTertiary,
        Token::ColorQuaternary,
        Token::ColorGray,
        Token::ColorSelection,
        Token::ColorHover,
        Token::ColorSuccess,
        Token::ColorError,
        Token::MenuSize,
        Token::ContentHeight,
        Token::ContentWidth,
        Token::TransitionWait,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Identifier emitted after the `--` prefix, unchanged.
    pub fn name(self) -> &'static str {
        TOKEN_TABLE[self.index()].1
    }

    pub fn default_value(self) -> &'static str {
        TOKEN_TABLE[self.index()].2
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a name is not one of the built-in tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown design token '{0}'")]
pub struct UnknownToken(pub String);

impl FromStr for Token {
    type Err = UnknownToken;

    /// Exact, case-sensitive match on the token name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TOKEN_TABLE
            .iter()
            .find(|(_, name, _)| *name == s)
            .map(|(token, _, _)| *token)
            .ok_or_else(|| UnknownToken(s.to_string()))
    }
}

/// Token values for one stylesheet plus its caller-added variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableSet {
    tokens: [String; Token::COUNT],
    externals: Vec<(String, String)>,
}

impl Default for VariableSet {
    fn default() -> Self {
        VariableSet {
            tokens: Token::ALL.map(|t| t.default_value().to_string()),
            externals: Vec::new(),
        }
    }
}

impl VariableSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self, token: Token) -> &str {
        &self.tokens[token.index()]
    }

    /// Overrides a built-in token. Its position in the output is unchanged.
    pub fn set_token(&mut self, token: Token, value: impl Into<String>) {
        self.tokens[token.index()] = value.into();
    }

    /// Restores every built-in token to its default. External variables stay.
    pub fn reset(&mut self) {
        self.tokens = Token::ALL.map(|t| t.default_value().to_string());
    }

    /// Inserts or overwrites an external variable.
    ///
    /// Overwriting keeps the variable where it was first inserted.
    pub fn set_variable(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.externals.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value,
            None => self.externals.push((name.to_string(), value)),
        }
    }

    pub fn variable(&self, name: &str) -> Option<&str> {
        self.externals
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// External variables in insertion order.
    pub fn externals(&self) -> impl Iterator<Item = (&str, &str)> {
        self.externals.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Renders the `:root` block: built-in tokens first, then externals.
    pub fn render_root(&self) -> String {
        let mut out = String::with_capacity(32 * (Token::COUNT + self.externals.len()));
        out.push_str(":root {\n");

        for token in Token::ALL {
            push_custom_property(&mut out, token.name(), self.token(token));
        }
        for (name, value) in &self.externals {
            push_custom_property(&mut out, name, value);
        }

        out.push_str("}\n");
        out
    }
}

impl fmt::Display for VariableSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_root())
    }
}

fn push_custom_property(out: &mut String, name: &str, value: &str) {
    out.push_str(INDENT);
    out.push_str("--");
    out.push_str(name);
    out.push_str(": ");
    out.push_str(value);
    out.push_str(";\n");
}

/// CSS reference form of a variable: `var(<name>)`.
///
/// The name is passed through as given; include the `--` prefix yourself.
pub fn get_variable(name: &str) -> String {
    format!("var({})", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DEFAULT_ROOT: &str = ":root {
    --FontSizeNormal: 1.1rem;
    --FontSizeSmall: .6rem;
    --ColorPrimary: #ffffff;
    --ColorSecondary: #3f88bf;
    --ColorTertiary: #c2c1c1;
    --ColorQuaternary: #000000;
    --ColorGray: #e9e9e9;
    --ColorSelection: #ff9300;
    --ColorHover: #ff95008e;
    --ColorSuccess: #aadaff7c;
    --ColorError: #f20707;
    --MenuSize: 6vh;
    --ContentHeight: 94vh;
    --ContentWidth: 100vw;
    --TransitionWait: 0s;
}
";

    #[test]
    fn test_default_root() {
        assert_eq!(VariableSet::new().render_root(), DEFAULT_ROOT);
    }

    #[test]
    fn test_table_matches_enum_order() {
        for (i, token) in Token::ALL.iter().enumerate() {
            assert_eq!(TOKEN_TABLE[i].0, *token);
            assert_eq!(token.index(), i);
        }
    }

    #[test]
    fn test_externals_follow_tokens() {
        let mut vars = VariableSet::new();
        vars.set_variable("accent", "#123456");
        vars.set_variable("--gap", "4px");

        let root = vars.render_root();
        let accent = root.find("    --accent: #123456;\n").unwrap();
        let wait = root.find("--TransitionWait: 0s;").unwrap();
        assert!(accent > wait);
        assert!(root.ends_with("    --accent: #123456;\n    ----gap: 4px;\n}\n"));
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut vars = VariableSet::new();
        vars.set_variable("a", "1");
        vars.set_variable("b", "2");
        vars.set_variable("a", "3");

        let externals: Vec<_> = vars.externals().collect();
        assert_eq!(externals, [("a", "3"), ("b", "2")]);
        assert_eq!(vars.variable("a"), Some("3"));
        assert_eq!(vars.variable("missing"), None);
    }

    #[test]
    fn test_set_token_keeps_position() {
        let mut vars = VariableSet::new();
        vars.set_token(Token::ColorPrimary, "#000000");
        assert_eq!(vars.token(Token::ColorPrimary), "#000000");

        let expected = DEFAULT_ROOT.replace("--ColorPrimary: #ffffff;", "--ColorPrimary: #000000;");
        assert_eq!(vars.render_root(), expected);

        vars.reset();
        assert_eq!(vars.render_root(), DEFAULT_ROOT);
    }

    #[test]
    fn test_token_from_str() {
        assert_eq!("MenuSize".parse::<Token>(), Ok(Token::MenuSize));
        assert_eq!(
            "menusize".parse::<Token>(),
            Err(UnknownToken("menusize".to_string()))
        );
        assert_eq!(Token::ColorHover.to_string(), "ColorHover");
        assert_eq!(Token::ColorHover.default_value(), "#ff95008e");
    }

    #[test]
    fn test_get_variable_is_literal() {
        assert_eq!(get_variable("--accent"), "var(--accent)");
        assert_eq!(get_variable("accent"), "var(accent)");
        assert_eq!(get_variable(""), "var()");
    }
}
