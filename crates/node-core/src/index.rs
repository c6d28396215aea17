//! Single-level addressing into a [`Node`].
//!
//! A `PathIndex` knows how to read, write and create through exactly one level
//! of a tree. There are two kinds and only two:
//!
//! - **Position** addresses an array element. It never matches an object.
//! - **Key** addresses an object member. Applied to an array it *fans out*
//!   on reads and *broadcasts* on writes, treating the array as a column of
//!   objects.
//!
//! Kind mismatches are not errors: reads come back absent and writes leave the
//! node unchanged.

use crate::node::Node;
use std::borrow::Cow;
use std::fmt;

/// One component of a [`Path`](crate::Path).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathIndex {
    Position(usize),
    Key(String),
}

impl PathIndex {
    /// Read the child addressed by `self`, or `None` if there is none.
    ///
    /// Object members and array elements are borrowed. A key fan-out over an
    /// array builds a new array of the elements' members, skipping elements
    /// that lack the key rather than padding with null.
    pub fn access<'a>(&self, node: &'a Node) -> Option<Cow<'a, Node>> {
        match self {
            PathIndex::Position(i) => node.as_array()?.get(*i).map(Cow::Borrowed),
            PathIndex::Key(key) => access_key(key, node),
        }
    }

    /// Write `value` at `self` within `node`, returning the new node.
    ///
    /// `None` removes the addressed child. Out-of-range positions and kind
    /// mismatches return `node` unchanged; arrays never grow.
    pub fn set(&self, node: Node, value: Option<Node>) -> Node {
        match self {
            PathIndex::Position(i) => set_position(*i, node, value),
            PathIndex::Key(key) => set_key(key, node, value),
        }
    }

    /// A fresh container that `self` can address into.
    pub fn empty_container(&self) -> Node {
        match self {
            PathIndex::Position(_) => Node::Array(Vec::new()),
            PathIndex::Key(_) => Node::Object(Default::default()),
        }
    }

    /// Whether `node` is a container this index can descend through.
    pub fn is_compatible(&self, node: &Node) -> bool {
        match self {
            PathIndex::Position(_) => matches!(node, Node::Array(_)),
            PathIndex::Key(_) => matches!(node, Node::Object(_) | Node::Array(_)),
        }
    }
}

fn access_key<'a>(key: &str, node: &'a Node) -> Option<Cow<'a, Node>> {
    match node {
        Node::Object(map) => map.get(key).map(Cow::Borrowed),
        Node::Array(items) => {
            let column = items
                .iter()
                .filter_map(|item| access_key(key, item))
                .map(Cow::into_owned)
                .collect();
            Some(Cow::Owned(Node::Array(column)))
        }
        _ => None,
    }
}

fn set_position(i: usize, node: Node, value: Option<Node>) -> Node {
    match node {
        Node::Array(mut items) if i < items.len() => {
            match value {
                Some(value) => items[i] = value,
                None => {
                    items.remove(i);
                }
            }
            Node::Array(items)
        }
        other => other,
    }
}

fn set_key(key: &str, node: Node, value: Option<Node>) -> Node {
    match node {
        Node::Object(mut map) => {
            match value {
                Some(value) => {
                    map.insert(key.to_owned(), value);
                }
                None => {
                    map.remove(key);
                }
            }
            Node::Object(map)
        }
        Node::Array(items) => Node::Array(
            items
                .into_iter()
                .map(|item| set_key(key, item, value.clone()))
                .collect(),
        ),
        other => other,
    }
}

impl From<usize> for PathIndex {
    fn from(value: usize) -> Self {
        PathIndex::Position(value)
    }
}

impl From<&str> for PathIndex {
    fn from(value: &str) -> Self {
        PathIndex::Key(value.to_owned())
    }
}

impl From<String> for PathIndex {
    fn from(value: String) -> Self {
        PathIndex::Key(value)
    }
}

impl From<&String> for PathIndex {
    fn from(value: &String) -> Self {
        PathIndex::Key(value.clone())
    }
}

impl fmt::Display for PathIndex {
    /// Positions render as `[i]`. Keys render bare when unambiguous, otherwise
    /// as a quoted bracket (`["a.b"]`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathIndex::Position(i) => write!(f, "[{i}]"),
            PathIndex::Key(key) if is_bare_key(key) => f.write_str(key),
            PathIndex::Key(key) => {
                f.write_str("[\"")?;
                for c in key.chars() {
                    if c == '"' || c == '\\' {
                        f.write_str("\\")?;
                    }
                    write!(f, "{c}")?;
                }
                f.write_str("\"]")
            }
        }
    }
}

/// Keys that can be written without brackets in textual paths.
pub(crate) fn is_bare_key(key: &str) -> bool {
    !key.is_empty() && !key.contains(['.', '[', ']', '"', '\\'])
}
