use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::{debug, info, warn};

use crate::error::{check_css_path, Error, GenerateError};
use crate::style::{Rule, Token, VariableSet};

/// An ordered collection of rules and the design tokens rendered before them.
///
/// Each sheet owns its own [`VariableSet`]; there is no shared global sheet.
/// Not synchronized: use one sheet per thread or guard it externally.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    vars: VariableSet,
    rules: Vec<Rule>,
    index: HashMap<String, usize>,
}

impl StyleSheet {
    /// An empty sheet with default token values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the rule registered under `name`, creating it on first use.
    ///
    /// Any string is accepted, including the empty string. Examples:
    /// `.my-class`, `#my-id`, `div`, `div > p`, `div.my-class`.
    pub fn add_rule(&mut self, name: &str) -> &mut Rule {
        let pos = match self.index.get(name) {
            Some(&pos) => pos,
            None => {
                debug!("registering rule '{}'", name);
                self.rules.push(Rule::new(name));
                let pos = self.rules.len() - 1;
                self.index.insert(name.to_string(), pos);
                pos
            }
        };
        &mut self.rules[pos]
    }

    /// Shorthand for `add_rule(".<name>")`.
    pub fn add_class(&mut self, name: &str) -> &mut Rule {
        self.add_rule(&format!(".{}", name))
    }

    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.index.get(name).map(|&pos| &self.rules[pos])
    }

    /// Rules in registration order.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn variables(&self) -> &VariableSet {
        &self.vars
    }

    pub fn variables_mut(&mut self) -> &mut VariableSet {
        &mut self.vars
    }

    /// Adds or updates an external variable emitted in `:root`.
    pub fn set_variable(&mut self, name: &str, value: impl Into<String>) {
        self.vars.set_variable(name, value);
    }

    pub fn set_token(&mut self, token: Token, value: impl Into<String>) {
        self.vars.set_token(token, value);
    }

    /// Renders `:root` followed by every rule in registration order.
    pub fn generate(&self) -> String {
        let root = self.vars.render_root();
        let mut css = String::with_capacity(root.len() + 64 * self.rules.len());
        css.push_str(&root);
        for rule in &self.rules {
            css.push_str(&rule.render());
        }
        css
    }

    /// Renders the sheet and writes it to `path`, which must end in `.css`.
    ///
    /// On failure the rendered css is still available from the error.
    pub fn generate_to(&self, path: impl AsRef<Path>) -> Result<String, GenerateError> {
        let path = path.as_ref();
        let css = self.generate();

        if let Err(e) = check_css_path(path) {
            warn!("refusing to write stylesheet: {}", e);
            return Err(GenerateError::new(css, e));
        }

        match fs::write(path, &css) {
            Ok(()) => {
                info!("wrote {} bytes of css to {}", css.len(), path.display());
                Ok(css)
            }
            Err(e) => Err(GenerateError::new(css, Error::Io(e))),
        }
    }
}
