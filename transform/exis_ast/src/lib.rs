//! Abstract Syntax Tree (AST) for the Exis existential-access notation.
//!
//! This crate defines the expression and statement nodes of the
//! JavaScript-like target language, along with utilities for constructing,
//! traversing, and rewriting trees. Transform passes live in separate
//! crates and consume the construction and cursor APIs defined here.

pub mod ast;
pub mod build;
pub mod cursor;
pub mod visit;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "serde")]
use std::error::Error;

/// A result type for AST serialization helpers.
#[cfg(feature = "serde")]
pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;

/// Serializes an AST node to a JSON string.
///
/// # Example
///
/// ```
/// use exis_ast::build;
/// use exis_ast::to_json;
///
/// let expr = build::member(build::identifier("a"), "b");
/// let json = to_json(&expr).unwrap();
/// assert!(json.contains("Member"));
/// assert!(json.contains(r#""property": "b""#));
/// ```
#[cfg(feature = "serde")]
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Deserializes an AST node from a JSON string.
#[cfg(feature = "serde")]
pub fn from_json<T: for<'de> Deserialize<'de>>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}
