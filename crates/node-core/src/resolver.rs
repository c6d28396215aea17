//! Multi-level get / set / remove over a [`Path`](crate::Path).
//!
//! Reads fold [`PathIndex::access`] left to right and never create anything.
//! Writes descend the path. Wherever a component meets a node it cannot
//! address (null, a missing child, a scalar, or the wrong container kind),
//! that node is replaced with the component's empty container
//! (auto-vivification). The one exception is a final position: it writes
//! into an existing array slot or does nothing, so a non-array node it lands
//! on is kept as is. The final component's `set` is applied and each
//! rebuilt child is spliced back into its parent up to the root. Branches off
//! the path come back value-equal to the input.
//!
//! Deletes never vivify: a delete whose path runs into a missing or
//! incompatible node leaves the tree as it was.

use crate::index::PathIndex;
use crate::node::Node;
use std::borrow::Cow;

/// Read the node at `path`, or `None` if any component is absent.
///
/// Borrows from `node` unless a key fan-out had to build a new array.
///
/// # Examples
///
/// ```
/// use node_core::{get, path, Node};
///
/// let rows = Node::array([
///     Node::object([("x", 1)]),
///     Node::object([("y", 2)]),
///     Node::object([("x", 3)]),
/// ]);
/// let xs = get(&rows, &path!["x"]).unwrap();
/// assert_eq!(*xs, Node::array([1, 3]));
/// ```
pub fn get<'a>(node: &'a Node, path: &[PathIndex]) -> Option<Cow<'a, Node>> {
    path.iter()
        .try_fold(Cow::Borrowed(node), |current, index| match current {
            Cow::Borrowed(n) => index.access(n),
            Cow::Owned(n) => index.access(&n).map(|child| Cow::Owned(child.into_owned())),
        })
}

/// Return a new tree with `value` written at `path`.
///
/// `None` deletes the addressed location. With an empty path, `Some(v)`
/// replaces the whole tree and `None` leaves it unchanged: deleting the root
/// is not a way to clear a tree.
///
/// # Examples
///
/// ```
/// use node_core::{path, set, Node};
///
/// let tree = set(&Node::Null, &path!["a", "b"], Some(Node::from(5)));
/// assert_eq!(tree, Node::object([("a", Node::object([("b", 5)]))]));
/// ```
pub fn set(node: &Node, path: &[PathIndex], value: Option<Node>) -> Node {
    set_owned(node.clone(), path, value)
}

/// Return a new tree with the location at `path` removed.
pub fn remove(node: &Node, path: &[PathIndex]) -> Node {
    set(node, path, None)
}

fn set_owned(node: Node, path: &[PathIndex], value: Option<Node>) -> Node {
    let Some((first, rest)) = path.split_first() else {
        return value.unwrap_or(node);
    };

    if !first.is_compatible(&node) {
        // A final position only writes into an existing array slot; anything
        // else is left exactly as it was.
        if value.is_none() || (rest.is_empty() && matches!(first, PathIndex::Position(_))) {
            return node;
        }
        return set_owned(first.empty_container(), path, value);
    }

    match (first, node) {
        // A key descending through an array writes the remaining path into
        // every element that is itself a container, like the final-step
        // broadcast does.
        (PathIndex::Key(_), Node::Array(items)) if !rest.is_empty() => Node::Array(
            items
                .into_iter()
                .map(|item| match item {
                    Node::Object(_) | Node::Array(_) => set_owned(item, path, value.clone()),
                    scalar => scalar,
                })
                .collect(),
        ),
        (_, node) if rest.is_empty() => first.set(node, value),
        (_, node) => {
            let child = match first.access(&node).map(Cow::into_owned) {
                Some(child) => child,
                None if value.is_none() => return node,
                None => Node::Null,
            };
            let child = set_owned(child, rest, value);
            first.set(node, Some(child))
        }
    }
}

impl Node {
    /// Method form of [`get`].
    pub fn at(&self, path: &[PathIndex]) -> Option<Cow<'_, Node>> {
        get(self, path)
    }

    /// Method form of [`set`] for a present value.
    pub fn with(&self, path: &[PathIndex], value: impl Into<Node>) -> Node {
        set(self, path, Some(value.into()))
    }

    /// Method form of [`remove`].
    pub fn without(&self, path: &[PathIndex]) -> Node {
        remove(self, path)
    }
}
