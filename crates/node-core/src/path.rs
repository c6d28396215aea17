//! Ordered sequences of [`PathIndex`] components.
//!
//! # Textual syntax
//!
//! - `name` / `a.b.c` -- object keys separated by dots
//! - `[0]` -- array position
//! - `["a.b"]` -- quoted key, for keys containing `.`, brackets, quotes or
//!   backslashes (escape `"` and `\` with `\`)
//! - `.` or the empty string -- the root
//!
//! Digits after a dot are a *key* (`items.0` is the member named `"0"`);
//! positions are always bracketed.

use crate::error::{NodeError, Result};
use crate::index::{is_bare_key, PathIndex};
use std::fmt;
use std::iter::Peekable;
use std::ops::Deref;
use std::str::{Chars, FromStr};

/// A location in a [`Node`](crate::Node) tree. Empty means the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path(Vec<PathIndex>);

impl Path {
    pub fn new(indices: Vec<PathIndex>) -> Self {
        Path(indices)
    }

    pub fn root() -> Self {
        Path(Vec::new())
    }

    /// This path extended by one trailing component.
    pub fn child(mut self, index: impl Into<PathIndex>) -> Self {
        self.0.push(index.into());
        self
    }

    /// This path with `index` inserted in front.
    pub fn prefixed(mut self, index: PathIndex) -> Self {
        self.0.insert(0, index);
        self
    }

    pub fn indices(&self) -> &[PathIndex] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<PathIndex> {
        self.0
    }
}

impl Deref for Path {
    type Target = [PathIndex];

    fn deref(&self) -> &[PathIndex] {
        &self.0
    }
}

impl AsRef<[PathIndex]> for Path {
    fn as_ref(&self) -> &[PathIndex] {
        &self.0
    }
}

impl From<Vec<PathIndex>> for Path {
    fn from(indices: Vec<PathIndex>) -> Self {
        Path(indices)
    }
}

impl From<&[PathIndex]> for Path {
    fn from(indices: &[PathIndex]) -> Self {
        Path(indices.to_vec())
    }
}

impl FromIterator<PathIndex> for Path {
    fn from_iter<I: IntoIterator<Item = PathIndex>>(iter: I) -> Self {
        Path(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathIndex;
    type IntoIter = std::slice::Iter<'a, PathIndex>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Build a [`Path`] from mixed position/key components.
///
/// ```
/// use node_core::{path, PathIndex};
///
/// let p = path!["items", 0, "name"];
/// assert_eq!(p[1], PathIndex::Position(0));
/// assert_eq!(p.to_string(), "items[0].name");
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::Path::root()
    };
    ($($index:expr),+ $(,)?) => {
        $crate::Path::new(vec![$($crate::PathIndex::from($index)),+])
    };
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str(".");
        }
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                if let PathIndex::Key(key) = index {
                    if is_bare_key(key) {
                        f.write_str(".")?;
                    }
                }
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = NodeError;

    fn from_str(input: &str) -> Result<Self> {
        if input.is_empty() || input == "." {
            return Ok(Path::root());
        }

        let invalid = |message: &str| NodeError::InvalidPath {
            input: input.to_owned(),
            message: message.to_owned(),
        };

        let mut chars = input.chars().peekable();
        let mut indices = Vec::new();

        while let Some(&c) = chars.peek() {
            match c {
                '[' => {
                    chars.next();
                    indices.push(parse_bracket(&mut chars).map_err(invalid)?);
                }
                '.' => {
                    if indices.is_empty() {
                        return Err(invalid("path cannot start with `.`"));
                    }
                    chars.next();
                    let key = take_bare_key(&mut chars);
                    if key.is_empty() {
                        return Err(invalid("expected a key after `.`"));
                    }
                    indices.push(PathIndex::Key(key));
                }
                _ => {
                    if !indices.is_empty() {
                        return Err(invalid("expected `.` or `[` between components"));
                    }
                    let key = take_bare_key(&mut chars);
                    if key.is_empty() {
                        return Err(invalid("unexpected character"));
                    }
                    indices.push(PathIndex::Key(key));
                }
            }
        }

        Ok(Path(indices))
    }
}

fn take_bare_key(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut key = String::new();
    while let Some(&c) = chars.peek() {
        if matches!(c, '.' | '[' | ']' | '"' | '\\') {
            break;
        }
        key.push(c);
        chars.next();
    }
    key
}

/// Parse the remainder of a bracketed component; the `[` is already consumed.
fn parse_bracket(chars: &mut Peekable<Chars<'_>>) -> std::result::Result<PathIndex, &'static str> {
    if chars.peek() == Some(&'"') {
        chars.next();
        let mut key = String::new();
        loop {
            match chars.next() {
                Some('"') => break,
                Some('\\') => match chars.next() {
                    Some(escaped) => key.push(escaped),
                    None => return Err("unterminated escape in quoted key"),
                },
                Some(c) => key.push(c),
                None => return Err("unterminated quoted key"),
            }
        }
        return match chars.next() {
            Some(']') => Ok(PathIndex::Key(key)),
            _ => Err("expected `]` after quoted key"),
        };
    }

    let mut digits = String::new();
    loop {
        match chars.next() {
            Some(']') => break,
            Some(c) if c.is_ascii_digit() => digits.push(c),
            Some(_) => return Err("array positions must be non-negative integers"),
            None => return Err("unterminated `[`"),
        }
    }
    digits
        .parse::<usize>()
        .map(PathIndex::Position)
        .map_err(|_| "array positions must be non-negative integers")
}
