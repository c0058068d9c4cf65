use std::fmt;

use log::debug;

use super::declaration::Declaration;

/// Indentation used for every declaration line inside a block.
pub(crate) const INDENT: &str = "    ";

/// A named selector owning an ordered, duplicate-free list of declarations.
///
/// The name is emitted verbatim, so it can be any selector text:
/// `.my-class`, `#my-id`, `div`, `div > p`, `div.my-class`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    name: String,
    declarations: Vec<Declaration>,
}

impl Rule {
    pub fn new(name: impl Into<String>) -> Self {
        Rule {
            name: name.into(),
            declarations: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Appends `key: values...` unless the exact same text is already present.
    ///
    /// Keys alone are not compared: `color: red` then `color: blue` keeps both.
    ///
    /// ```
    /// use cssheet_lib::Rule;
    ///
    /// let mut rule = Rule::new(".btn");
    /// rule.add_property("margin", ["10px", "20px"])
    ///     .add_property("margin", ["10px", "20px"]);
    /// assert_eq!(rule.render(), ".btn {\n    margin: 10px 20px;\n}\n");
    /// ```
    pub fn add_property<I>(&mut self, key: &str, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let decl = Declaration::new(key, values);

        if self.declarations.iter().any(|d| d.text() == decl.text()) {
            debug!("rule '{}': skipping duplicate '{}'", self.name, decl);
            return self;
        }

        self.declarations.push(decl);
        self
    }

    /// Renders the block, one 4-space indented declaration per line.
    pub fn render(&self) -> String {
        let estimated = self.name.len()
            + 4
            + self
                .declarations
                .iter()
                .map(|d| d.text().len() + INDENT.len() + 2)
                .sum::<usize>();

        let mut out = String::with_capacity(estimated);
        out.push_str(&self.name);
        out.push_str(" {\n");
        for decl in &self.declarations {
            out.push_str(INDENT);
            out.push_str(decl.text());
            out.push_str(";\n");
        }
        out.push_str("}\n");
        out
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
