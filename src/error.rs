//! Error types for tree construction, search and persistence.

use std::fmt;

/// Errors surfaced by tree operations.
///
/// All variants indicate caller misuse or an unreadable input file; none are
/// transient, and no partial tree or partial result is ever produced alongside
/// an error.
#[derive(Debug)]
pub enum Error {
    /// `Tree::build` was called with an empty point set.
    EmptyInput,

    /// A query or export was attempted on a tree with no nodes.
    EmptyTree,

    /// The metric name is not one of `"Euclidean"`, `"Manhattan"` or `"Max"`.
    InvalidMetric(String),

    /// An imported tree record is structurally inconsistent (out-of-range or
    /// duplicate node ids, child links past the end of the node list).
    MalformedTree(String),

    /// File access failed during export or import.
    Io(std::io::Error),

    /// JSON encoding or decoding failed.
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => {
                write!(f, "there are no points to process")
            }
            Error::EmptyTree => {
                write!(f, "there is no 3-d tree to search or export")
            }
            Error::InvalidMetric(name) => {
                write!(f, "unrecognized metric name '{}'", name)
            }
            Error::MalformedTree(msg) => {
                write!(f, "malformed tree record: {}", msg)
            }
            Error::Io(err) => {
                write!(f, "file access failed: {}", err)
            }
            Error::Json(err) => {
                write!(f, "JSON conversion failed: {}", err)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
