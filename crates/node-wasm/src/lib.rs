//! WASM bindings for node-core.
//!
//! Exposes path-based `get`, `set` and `remove` over JSON strings as
//! `#[wasm_bindgen]` functions callable from JavaScript/TypeScript. Paths use
//! the textual syntax of [`node_core::Path`] (`items[0].name`).
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p node-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/node-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/node_wasm.wasm
//! ```

use node_core::{Node, Path};
use wasm_bindgen::prelude::*;

/// Read the value at `path` from a JSON document.
///
/// Returns the value as compact JSON, or `undefined` when nothing is there.
/// Throws a JS error if the document or path is invalid.
#[wasm_bindgen]
pub fn get(json: &str, path: &str) -> Result<Option<String>, JsValue> {
    let (doc, path) = parse(json, path)?;
    doc.at(&path)
        .map(|found| to_json(&found))
        .transpose()
}

/// Write `value` (JSON) at `path`, creating missing objects, and return the
/// new document as compact JSON.
#[wasm_bindgen]
pub fn set(json: &str, path: &str, value: &str) -> Result<String, JsValue> {
    let (doc, path) = parse(json, path)?;
    let value: Node = serde_json::from_str(value).map_err(to_js)?;
    to_json(&doc.with(&path, value))
}

/// Remove the value at `path` and return the new document as compact JSON.
#[wasm_bindgen]
pub fn remove(json: &str, path: &str) -> Result<String, JsValue> {
    let (doc, path) = parse(json, path)?;
    to_json(&doc.without(&path))
}

fn parse(json: &str, path: &str) -> Result<(Node, Path), JsValue> {
    let doc: Node = serde_json::from_str(json).map_err(to_js)?;
    let path: Path = path.parse().map_err(to_js)?;
    Ok((doc, path))
}

fn to_json(node: &Node) -> Result<String, JsValue> {
    serde_json::to_string(node).map_err(to_js)
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}
