use std::fmt;

/// A single `key: v1 v2 ...` pair inside a rule.
///
/// The rendered text is computed once at construction and is what rules
/// compare when deduplicating.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Declaration {
    key: String,
    values: Vec<String>,
    text: String,
}

impl Declaration {
    pub fn new<I>(key: &str, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let values: Vec<String> = values
            .into_iter()
            .map(|v| v.as_ref().to_string())
            .collect();

        let text = format!("{}: {}", key, values.join(" "));

        Declaration {
            key: key.to_string(),
            values,
            text,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Rendered `key: values` text, without the trailing `;`.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
