//! `nodeq` CLI — read and write JSON documents by path.
//!
//! ## Usage
//!
//! ```sh
//! # Read a value (stdin → stdout)
//! echo '{"users":[{"name":"ada"},{"name":"bo"}]}' | nodeq get 'users[1].name'
//!
//! # Fan out over an array
//! nodeq get users.name -i team.json
//!
//! # Write a value, creating missing objects along the way
//! nodeq set settings.theme '"dark"' -i config.json -o config.json
//!
//! # Delete a value
//! nodeq delete 'users[0]' -i team.json
//!
//! # List the keys of an object
//! nodeq keys settings -i config.json
//! ```
//!
//! Set `RUST_LOG=debug` to trace what was read and resolved.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use node_core::{Node, Path};
use std::collections::BTreeMap;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "nodeq",
    version,
    about = "Read and write JSON documents by path"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value at PATH as JSON
    Get {
        /// Path such as `items[0].name` (`.` for the whole document)
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Print compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Write a JSON value at PATH and print the new document
    Set {
        /// Path to write; missing objects along it are created
        path: String,
        /// JSON value to write (e.g. `42`, `"text"`, `{"a":1}`)
        value: String,
        #[arg(short, long)]
        input: Option<String>,
        #[arg(short, long)]
        output: Option<String>,
        #[arg(long)]
        compact: bool,
    },
    /// Remove the value at PATH and print the new document
    Delete {
        path: String,
        #[arg(short, long)]
        input: Option<String>,
        #[arg(short, long)]
        output: Option<String>,
        #[arg(long)]
        compact: bool,
    },
    /// List the keys of the object at PATH, one per line
    Keys {
        path: String,
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Get {
            path,
            input,
            output,
            compact,
        } => {
            let doc = read_document(input.as_deref())?;
            let path = parse_path(&path)?;
            let found = doc
                .at(&path)
                .with_context(|| format!("No value at path: {}", path))?;
            tracing::debug!(%path, kind = found.kind(), "resolved");
            write_output(output.as_deref(), &render(&found, compact)?)?;
        }
        Commands::Set {
            path,
            value,
            input,
            output,
            compact,
        } => {
            let doc = read_document(input.as_deref())?;
            let path = parse_path(&path)?;
            let value: Node = serde_json::from_str(&value)
                .with_context(|| format!("Value is not valid JSON: {}", value))?;
            tracing::debug!(%path, kind = value.kind(), "writing");
            let updated = doc.with(&path, value);
            write_output(output.as_deref(), &render(&updated, compact)?)?;
        }
        Commands::Delete {
            path,
            input,
            output,
            compact,
        } => {
            let doc = read_document(input.as_deref())?;
            let path = parse_path(&path)?;
            if path.is_empty() {
                anyhow::bail!("Refusing to delete the whole document");
            }
            tracing::debug!(%path, "deleting");
            let updated = doc.without(&path);
            write_output(output.as_deref(), &render(&updated, compact)?)?;
        }
        Commands::Keys { path, input } => {
            let doc = read_document(input.as_deref())?;
            let path = parse_path(&path)?;
            let members: BTreeMap<String, Node> = doc
                .extract(&path)
                .with_context(|| format!("No object at path: {}", path))?;
            tracing::debug!(%path, count = members.len(), "listing keys");
            let mut out = String::new();
            for key in members.keys() {
                out.push_str(key);
                out.push('\n');
            }
            write_output(None, &out)?;
        }
    }

    Ok(())
}

fn parse_path(raw: &str) -> Result<Path> {
    raw.parse::<Path>()
        .with_context(|| format!("Invalid path: {}", raw))
}

fn read_document(path: Option<&str>) -> Result<Node> {
    let text = read_input(path)?;
    tracing::debug!(bytes = text.len(), "read input");
    serde_json::from_str(&text).context("Input is not valid JSON")
}

fn render(node: &Node, compact: bool) -> Result<String> {
    let mut text = if compact {
        serde_json::to_string(node)?
    } else {
        serde_json::to_string_pretty(node)?
    };
    text.push('\n');
    Ok(text)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
