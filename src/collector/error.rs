//! Error and diagnostic types shared by all collectors.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Error type for parsing failures in pure parsers.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parse error: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Error type for collection failures.
///
/// Every variant carries the path that caused it.
#[derive(Debug)]
pub enum CollectError {
    /// Mount point does not exist or is not a directory.
    MountPoint(PathBuf),
    /// Directory listing or file read failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// File content is structurally malformed.
    Parse { path: PathBuf, message: String },
}

impl CollectError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CollectError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, err: ParseError) -> Self {
        CollectError::Parse {
            path: path.into(),
            message: err.message,
        }
    }

    /// Path of the file or directory the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            CollectError::MountPoint(path) => path,
            CollectError::Io { path, .. } => path,
            CollectError::Parse { path, .. } => path,
        }
    }
}

impl std::fmt::Display for CollectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectError::MountPoint(path) => {
                write!(f, "mount point {} is not a directory", path.display())
            }
            CollectError::Io { path, source } => {
                write!(f, "cannot access {}: {}", path.display(), source)
            }
            CollectError::Parse { path, message } => {
                write!(f, "malformed {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for CollectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CollectError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A soft, field-level conversion failure.
///
/// The record the warning belongs to is still returned, with the field left
/// at its zero value.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
pub struct FieldWarning {
    /// File the value was read from.
    pub path: PathBuf,
    /// Attribute (file) name, e.g. `scaling_setspeed`.
    pub attribute: String,
    /// The offending raw value, trimmed.
    pub value: String,
    /// Why the value was rejected.
    pub message: String,
}

impl FieldWarning {
    pub(crate) fn new(path: &Path, value: &str, err: ParseError) -> Self {
        let attribute = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        tracing::debug!(
            path = %path.display(),
            value,
            error = %err.message,
            "ignoring unparsable attribute"
        );
        Self {
            path: path.to_path_buf(),
            attribute,
            value: value.to_string(),
            message: err.message,
        }
    }
}

/// A snapshot together with the soft failures hit while building it.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Default)]
pub struct Collected<T> {
    pub value: T,
    pub warnings: Vec<FieldWarning>,
}

impl<T> Collected<T> {
    /// Returns `true` if every field parsed cleanly.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Returns the warnings raised for one attribute name.
    pub fn warnings_for<'a>(
        &'a self,
        attribute: &'a str,
    ) -> impl Iterator<Item = &'a FieldWarning> {
        self.warnings
            .iter()
            .filter(move |w| w.attribute == attribute)
    }

    /// Drops the diagnostics and keeps the snapshot.
    pub fn into_value(self) -> T {
        self.value
    }
}
