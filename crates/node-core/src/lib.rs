//! # node-core
//!
//! A JSON-like value tree ([`Node`]) with path addressing and typed conversion.
//!
//! Paths are ordered lists of [`PathIndex`] components: array positions and
//! object keys. A key applied to an array reads that key from every element
//! (fan-out) and writes it to every element (broadcast). Writes create missing
//! intermediate containers and always return a new tree.
//!
//! Native types take part through [`FromNode`] / [`ToNode`]; vectors, maps,
//! sets and options of convertible types convert generically and
//! all-or-nothing.
//!
//! ## Quick start
//!
//! ```rust
//! use node_core::{path, Node};
//!
//! let doc = Node::Null
//!     .with(&path!["users"], Node::array([
//!         Node::object([("name", "ada"), ("lang", "en")]),
//!         Node::object([("name", "bo")]),
//!     ]))
//!     .with(&path!["meta", "count"], 2);
//!
//! let names: Vec<String> = doc.extract(&path!["users", "name"]).unwrap();
//! assert_eq!(names, ["ada", "bo"]);
//!
//! // Fan-out skips elements without the key.
//! let langs: Vec<String> = doc.extract(&path!["users", "lang"]).unwrap();
//! assert_eq!(langs, ["en"]);
//!
//! let count: u32 = doc.extract(&path!["meta", "count"]).unwrap();
//! assert_eq!(count, 2);
//! ```
//!
//! ## Modules
//!
//! - [`node`] — the `Node` tree and its view accessors
//! - [`number`] — numeric payload and the shared numeric conversion
//! - [`index`] — `PathIndex`: one level of access / write / create
//! - [`path`] — `Path`, the [`path!`] macro and textual path syntax
//! - [`resolver`] — `get` / `set` / `remove` at a path
//! - [`convert`] — `FromNode` / `ToNode` and container combinators
//! - [`extract`] — typed reads at a path
//! - [`json`] — serde bridge
//! - [`error`] — error types

pub mod convert;
pub mod error;
pub mod extract;
pub mod index;
pub mod json;
pub mod node;
pub mod number;
pub mod path;
pub mod resolver;

pub use convert::{FromNode, NodeConvertible, ToNode};
pub use error::{NodeError, Result};
pub use index::PathIndex;
pub use node::{Node, Object};
pub use number::{NodeNumeric, Number};
pub use path::Path;
pub use resolver::{get, remove, set};
