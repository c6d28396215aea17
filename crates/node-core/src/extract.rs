//! Typed, path-addressed reads.
//!
//! Every method resolves its path with [`crate::resolver::get`] and converts
//! the result with [`FromNode`]. Two rules hold across the family:
//!
//! - In the plain forms a missing location becomes [`Node::Null`] before
//!   conversion, so "missing" and "explicit null" behave the same. Types that
//!   cannot hold null then fail with [`NodeError::UnableToConvert`].
//! - The `_opt` forms turn a missing location into `None`, but a present
//!   node that fails to convert is still an error.
//!
//! Conversion errors carry the full path from the receiver.
//!
//! ```
//! use node_core::{path, Node};
//! use std::collections::BTreeMap;
//!
//! let doc = Node::object([
//!     ("name", Node::from("grid")),
//!     ("cells", Node::array([Node::array([1, 2]), Node::array([3, 4])])),
//!     ("tags", Node::object([("a", 1), ("b", 2)])),
//! ]);
//!
//! let name: String = doc.extract(&path!["name"]).unwrap();
//! let tags: BTreeMap<String, u8> = doc.extract(&path!["tags"]).unwrap();
//! let cells: Vec<Vec<i32>> = doc.extract_matrix(&path!["cells"]).unwrap();
//! let missing: Option<i32> = doc.extract_opt(&path!["nope"]).unwrap();
//!
//! assert_eq!(name, "grid");
//! assert_eq!(tags["b"], 2);
//! assert_eq!(cells, vec![vec![1, 2], vec![3, 4]]);
//! assert_eq!(missing, None);
//! ```

use crate::convert::FromNode;
use crate::error::{NodeError, Result};
use crate::index::PathIndex;
use crate::node::Node;
use crate::resolver::get;
use std::borrow::Cow;

impl Node {
    /// Convert the node at `path` into `T`; a missing node converts as null.
    pub fn extract<T: FromNode>(&self, path: &[PathIndex]) -> Result<T> {
        let node = get(self, path).unwrap_or(Cow::Owned(Node::Null));
        T::from_node(&node).map_err(|e| e.at(path))
    }

    /// Convert the node at `path` into `T`, or `None` if there is no node.
    pub fn extract_opt<T: FromNode>(&self, path: &[PathIndex]) -> Result<Option<T>> {
        get(self, path)
            .map(|node| T::from_node(&node).map_err(|e| e.at(path)))
            .transpose()
    }

    /// Read the node at `path` as rows via [`Node::array_of_arrays`].
    ///
    /// Unlike [`Node::extract`], a missing node is an error rather than being
    /// read as a single null cell.
    pub fn extract_matrix<T: FromNode>(&self, path: &[PathIndex]) -> Result<Vec<Vec<T>>> {
        match get(self, path) {
            Some(node) => node.to_matrix().map_err(|e| e.at(path)),
            None => Err(
                NodeError::unable_to_convert::<Vec<Vec<T>>>(&Node::Null).at(path),
            ),
        }
    }

    /// [`Node::extract_matrix`], with a missing node yielding `None`.
    pub fn extract_matrix_opt<T: FromNode>(
        &self,
        path: &[PathIndex],
    ) -> Result<Option<Vec<Vec<T>>>> {
        get(self, path)
            .map(|node| node.to_matrix().map_err(|e| e.at(path)))
            .transpose()
    }

    /// Extract an `In` at `path` and feed it to `transform`.
    ///
    /// A missing node is read as null first. Errors from `transform` pass
    /// through untouched.
    pub fn extract_with<In, Out, E, F>(&self, path: &[PathIndex], transform: F) -> std::result::Result<Out, E>
    where
        In: FromNode,
        E: From<NodeError>,
        F: FnOnce(In) -> std::result::Result<Out, E>,
    {
        let input = self.extract::<In>(path)?;
        transform(input)
    }

    /// Like [`Node::extract_with`], but a missing node reaches `transform` as
    /// `None` instead of failing.
    pub fn extract_opt_with<In, Out, E, F>(
        &self,
        path: &[PathIndex],
        transform: F,
    ) -> std::result::Result<Out, E>
    where
        In: FromNode,
        E: From<NodeError>,
        F: FnOnce(Option<In>) -> std::result::Result<Out, E>,
    {
        let input = self.extract_opt::<In>(path)?;
        transform(input)
    }
}
