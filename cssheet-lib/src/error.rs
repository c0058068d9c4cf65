//! Error types for stylesheet persistence and manifest loading.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Required suffix for every stylesheet written to disk.
pub const CSS_EXTENSION: &str = ".css";

/// Errors that can occur when writing a stylesheet or loading a manifest.
#[derive(Error, Debug)]
pub enum Error {
    #[error("file path must end with .css extension: {}", .0.display())]
    Path(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid sheet manifest: {0}")]
    Manifest(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A failed `generate_to`: the css was rendered but could not be persisted.
///
/// The rendered text is never thrown away, so callers can still use it.
#[derive(Error, Debug)]
#[error("{source}")]
pub struct GenerateError {
    css: String,
    source: Error,
}

impl GenerateError {
    pub(crate) fn new(css: String, source: Error) -> Self {
        GenerateError { css, source }
    }

    /// The css that was generated before persistence failed.
    pub fn css(&self) -> &str {
        &self.css
    }

    /// The underlying failure kind.
    pub fn kind(&self) -> &Error {
        &self.source
    }

    pub fn into_css(self) -> String {
        self.css
    }

    pub fn into_parts(self) -> (String, Error) {
        (self.css, self.source)
    }
}

/// Checks the destination suffix. Case-sensitive, no normalization.
pub(crate) fn check_css_path(path: &Path) -> Result<()> {
    // A non UTF-8 path can never carry the suffix.
    match path.to_str() {
        Some(p) if p.ends_with(CSS_EXTENSION) => Ok(()),
        _ => Err(Error::Path(path.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_error_display() {
        let err = Error::Path(PathBuf::from("out.txt"));
        let msg = err.to_string();
        assert!(msg.contains(".css extension"));
        assert!(msg.contains("out.txt"));
    }

    #[test]
    fn test_io_error_wraps_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::from(io);
        assert_eq!(err.to_string(), "I/O error: denied");
    }

    #[test]
    fn test_check_css_path() {
        assert!(check_css_path(Path::new("styles.css")).is_ok());
        assert!(check_css_path(Path::new("dir/styles.css")).is_ok());
        assert!(matches!(
            check_css_path(Path::new("styles.CSS")),
            Err(Error::Path(_))
        ));
        assert!(matches!(
            check_css_path(Path::new("styles.css.bak")),
            Err(Error::Path(_))
        ));
        assert!(matches!(check_css_path(Path::new("")), Err(Error::Path(_))));
    }

    #[test]
    fn test_generate_error_keeps_css() {
        let err = GenerateError::new(":root {\n}\n".to_string(), Error::Path("a.txt".into()));
        assert_eq!(err.css(), ":root {\n}\n");
        assert!(matches!(err.kind(), Error::Path(_)));
        assert!(err.to_string().contains("a.txt"));
        let (css, kind) = err.into_parts();
        assert_eq!(css, ":root {\n}\n");
        assert!(matches!(kind, Error::Path(_)));
    }
}
