//! Bidirectional conversion between native types and [`Node`].
//!
//! Any type can take part by implementing [`FromNode`] and/or [`ToNode`].
//! Container impls are generic over their element type and are
//! all-or-nothing: the first element that fails to convert fails the whole
//! container, with the element's position or key prepended to the error path.

use crate::error::{NodeError, Result};
use crate::index::PathIndex;
use crate::node::{Node, Object};
use crate::number::{self, NodeNumeric};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

/// Build `Self` from a node.
pub trait FromNode: Sized {
    fn from_node(node: &Node) -> Result<Self>;
}

/// Render `self` as a node.
pub trait ToNode {
    fn to_node(&self) -> Node;
}

/// Types that convert both ways.
pub trait NodeConvertible: FromNode + ToNode {}

impl<T: FromNode + ToNode> NodeConvertible for T {}

// ---------------------------------------------------------------------------
// Node itself
// ---------------------------------------------------------------------------

impl FromNode for Node {
    fn from_node(node: &Node) -> Result<Self> {
        Ok(node.clone())
    }
}

impl ToNode for Node {
    fn to_node(&self) -> Node {
        self.clone()
    }
}

// ---------------------------------------------------------------------------
// Scalars
// ---------------------------------------------------------------------------

impl FromNode for bool {
    fn from_node(node: &Node) -> Result<Self> {
        node.as_bool()
            .ok_or_else(|| NodeError::unable_to_convert::<bool>(node))
    }
}

impl ToNode for bool {
    fn to_node(&self) -> Node {
        Node::Bool(*self)
    }
}

impl FromNode for String {
    fn from_node(node: &Node) -> Result<Self> {
        node.as_str()
            .map(str::to_owned)
            .ok_or_else(|| NodeError::unable_to_convert::<String>(node))
    }
}

impl ToNode for String {
    fn to_node(&self) -> Node {
        Node::String(self.clone())
    }
}

impl ToNode for str {
    fn to_node(&self) -> Node {
        Node::String(self.to_owned())
    }
}

impl FromNode for char {
    fn from_node(node: &Node) -> Result<Self> {
        let mut chars = node.as_str().unwrap_or_default().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(NodeError::unable_to_convert::<char>(node)),
        }
    }
}

impl ToNode for char {
    fn to_node(&self) -> Node {
        Node::String(self.to_string())
    }
}

macro_rules! impl_numeric {
    ($($t:ty),*) => {$(
        impl FromNode for $t {
            fn from_node(node: &Node) -> Result<Self> {
                number::from_node::<$t>(node)
            }
        }

        impl ToNode for $t {
            fn to_node(&self) -> Node {
                Node::Number(self.to_number())
            }
        }
    )*};
}

impl_numeric!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

// ---------------------------------------------------------------------------
// Wrappers
// ---------------------------------------------------------------------------

/// Null converts to `None`; anything else must convert to `T`.
impl<T: FromNode> FromNode for Option<T> {
    fn from_node(node: &Node) -> Result<Self> {
        match node {
            Node::Null => Ok(None),
            other => T::from_node(other).map(Some),
        }
    }
}

impl<T: ToNode> ToNode for Option<T> {
    fn to_node(&self) -> Node {
        match self {
            Some(value) => value.to_node(),
            None => Node::Null,
        }
    }
}

impl<T: FromNode> FromNode for Box<T> {
    fn from_node(node: &Node) -> Result<Self> {
        T::from_node(node).map(Box::new)
    }
}

impl<T: ToNode + ?Sized> ToNode for Box<T> {
    fn to_node(&self) -> Node {
        (**self).to_node()
    }
}

impl<T: ToNode + ?Sized> ToNode for &T {
    fn to_node(&self) -> Node {
        (**self).to_node()
    }
}

// ---------------------------------------------------------------------------
// Sequences
// ---------------------------------------------------------------------------

/// Convert every element of an array node, failing on the first bad element.
///
/// A scalar is *not* promoted to a one-element list.
fn convert_elements<T: FromNode, C: FromIterator<T>>(node: &Node, expected: &str) -> Result<C> {
    let items = node
        .as_array()
        .ok_or_else(|| NodeError::unable_to_convert_named(node, expected))?;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| T::from_node(item).map_err(|e| e.within(PathIndex::Position(i))))
        .collect()
}

impl<T: FromNode> FromNode for Vec<T> {
    fn from_node(node: &Node) -> Result<Self> {
        convert_elements(node, std::any::type_name::<Self>())
    }
}

impl<T: ToNode> ToNode for Vec<T> {
    fn to_node(&self) -> Node {
        self.as_slice().to_node()
    }
}

impl<T: ToNode> ToNode for [T] {
    fn to_node(&self) -> Node {
        Node::Array(self.iter().map(ToNode::to_node).collect())
    }
}

impl<T: FromNode + Eq + Hash, S: BuildHasher + Default> FromNode for HashSet<T, S> {
    fn from_node(node: &Node) -> Result<Self> {
        convert_elements(node, std::any::type_name::<Self>())
    }
}

impl<T: ToNode, S> ToNode for HashSet<T, S> {
    fn to_node(&self) -> Node {
        Node::Array(self.iter().map(ToNode::to_node).collect())
    }
}

impl<T: FromNode + Ord> FromNode for BTreeSet<T> {
    fn from_node(node: &Node) -> Result<Self> {
        convert_elements(node, std::any::type_name::<Self>())
    }
}

impl<T: ToNode> ToNode for BTreeSet<T> {
    fn to_node(&self) -> Node {
        Node::Array(self.iter().map(ToNode::to_node).collect())
    }
}

// ---------------------------------------------------------------------------
// Maps
// ---------------------------------------------------------------------------

fn convert_members<T: FromNode, C: FromIterator<(String, T)>>(
    node: &Node,
    expected: &str,
) -> Result<C> {
    let members = node
        .as_object()
        .ok_or_else(|| NodeError::unable_to_convert_named(node, expected))?;
    members
        .iter()
        .map(|(key, value)| {
            T::from_node(value)
                .map(|converted| (key.clone(), converted))
                .map_err(|e| e.within(key))
        })
        .collect()
}

fn members_to_node<'a, T: ToNode + 'a>(members: impl Iterator<Item = (&'a String, &'a T)>) -> Node {
    Node::Object(
        members
            .map(|(key, value)| (key.clone(), value.to_node()))
            .collect::<Object>(),
    )
}

impl<T: FromNode> FromNode for BTreeMap<String, T> {
    fn from_node(node: &Node) -> Result<Self> {
        convert_members(node, std::any::type_name::<Self>())
    }
}

impl<T: ToNode> ToNode for BTreeMap<String, T> {
    fn to_node(&self) -> Node {
        members_to_node(self.iter())
    }
}

impl<T: FromNode, S: BuildHasher + Default> FromNode for HashMap<String, T, S> {
    fn from_node(node: &Node) -> Result<Self> {
        convert_members(node, std::any::type_name::<Self>())
    }
}

impl<T: ToNode, S> ToNode for HashMap<String, T, S> {
    fn to_node(&self) -> Node {
        members_to_node(self.iter())
    }
}

// ---------------------------------------------------------------------------
// Array of arrays
// ---------------------------------------------------------------------------

impl Node {
    /// View this node as rows of nodes.
    ///
    /// A non-array node is treated as a one-element array holding itself. If
    /// every element is an array, those are the rows; otherwise the whole
    /// (single-level) array becomes the only row. One call therefore accepts
    /// both `[[1, 2], [3, 4]]` and a flat `[1, 2, 3]` (read as `[[1, 2, 3]]`).
    pub fn array_of_arrays(&self) -> Vec<Vec<Node>> {
        let items = match self {
            Node::Array(items) => items.as_slice(),
            other => std::slice::from_ref(other),
        };
        let rows: Vec<Vec<Node>> = items
            .iter()
            .filter_map(|item| item.as_array().map(<[Node]>::to_vec))
            .collect();
        if rows.len() == items.len() {
            rows
        } else {
            vec![items.to_vec()]
        }
    }

    /// [`Node::array_of_arrays`], then convert every cell to `T`.
    pub fn to_matrix<T: FromNode>(&self) -> Result<Vec<Vec<T>>> {
        self.array_of_arrays()
            .iter()
            .enumerate()
            .map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .map(|(c, cell)| {
                        T::from_node(cell).map_err(|e| {
                            e.within(PathIndex::Position(c))
                                .within(PathIndex::Position(r))
                        })
                    })
                    .collect()
            })
            .collect()
    }

    /// Convert this node into `T`.
    pub fn convert<T: FromNode>(&self) -> Result<T> {
        T::from_node(self)
    }
}
