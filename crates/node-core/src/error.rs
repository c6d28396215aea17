//! Error types for node conversion and path parsing.

use crate::index::PathIndex;
use crate::node::Node;
use crate::path::Path;
use thiserror::Error;

/// Errors that can occur while converting or addressing a [`Node`].
///
/// There is no "not found" variant: a missing location resolves to
/// [`Node::Null`] and then either converts (optionals) or fails with
/// [`NodeError::UnableToConvert`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NodeError {
    /// A node exists but cannot be coerced into the requested type.
    #[error("unable to convert {} node at `{path}` into {expected}", .node.kind())]
    UnableToConvert {
        node: Box<Node>,
        expected: String,
        path: Path,
    },

    /// A textual path could not be parsed.
    #[error("invalid path `{input}`: {message}")]
    InvalidPath { input: String, message: String },
}

impl NodeError {
    /// Conversion failure for `node` into `T`, located at the root.
    pub fn unable_to_convert<T: ?Sized>(node: &Node) -> Self {
        Self::unable_to_convert_named(node, std::any::type_name::<T>())
    }

    pub(crate) fn unable_to_convert_named(node: &Node, expected: impl Into<String>) -> Self {
        NodeError::UnableToConvert {
            node: Box::new(node.clone()),
            expected: expected.into(),
            path: Path::root(),
        }
    }

    /// Prefix the error's location with `index`.
    ///
    /// Container conversions call this as a failure bubbles out of an element,
    /// so the final path reads outermost-first.
    pub fn within(self, index: impl Into<PathIndex>) -> Self {
        match self {
            NodeError::UnableToConvert {
                node,
                expected,
                path,
            } => NodeError::UnableToConvert {
                node,
                expected,
                path: path.prefixed(index.into()),
            },
            other => other,
        }
    }

    /// Prefix the error's location with a whole path.
    pub fn at(self, prefix: &[PathIndex]) -> Self {
        prefix
            .iter()
            .rev()
            .fold(self, |err, index| err.within(index.clone()))
    }

    /// The location of a conversion failure, if this is one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            NodeError::UnableToConvert { path, .. } => Some(path),
            NodeError::InvalidPath { .. } => None,
        }
    }
}

/// Convenience alias used throughout node-core.
pub type Result<T> = std::result::Result<T, NodeError>;
