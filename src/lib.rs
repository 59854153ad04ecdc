//! # formtree
//!
//! Convert a flat, ordered sequence of form-field name/value pairs into a
//! deeply nested data structure, and flatten a nested structure back into
//! per-field assignments.
//!
//! ## The Problem
//!
//! Form submissions arrive as a flat list of `(name, value)` string pairs,
//! but the names encode structure: `user[emails][]` means "append to the
//! `emails` array inside the `user` object". This crate implements that
//! bidirectional structural mapping:
//!
//! - **Building**: bracketed path names are tokenized into key sequences,
//!   object-vs-array shape is inferred at every level, array-append entries
//!   group in input order, and raw strings are coerced into typed values.
//! - **Flattening**: a nested structure walks back out as an ordered mapping
//!   from reconstructed bracketed paths to leaf values, ready to populate UI
//!   controls.
//!
//! ## Quick Start
//!
//! ```rust
//! use formtree::{from_entries, tree};
//!
//! let value = from_entries(vec![
//!     ("user[name]", "Alice"),
//!     ("user[tags][]", "admin"),
//!     ("user[tags][]", "ops"),
//! ])
//! .unwrap();
//!
//! assert_eq!(value, tree!({"user": {"name": "Alice", "tags": ["admin", "ops"]}}));
//! ```
//!
//! ## Typed Values
//!
//! By default every value stays a string. Enable global coercion through
//! [`BuildOptions`], or force a conversion per field with a `:<type>` suffix
//! (an explicit suffix always wins):
//!
//! ```rust
//! use formtree::{from_entries_with_options, BuildOptions, tree};
//!
//! let options = BuildOptions::new().with_parse_numbers(true);
//! let value = from_entries_with_options(
//!     vec![("count", "3"), ("zip:string", "02134")],
//!     &options,
//! )
//! .unwrap();
//!
//! assert_eq!(value, tree!({"count": 3, "zip": "02134"}));
//! ```
//!
//! See [`syntax`] for the full naming convention, including array appends
//! (`tags[]`), JSON-tagged fields (`config:object`), and `:skip`.
//!
//! ## Flattening
//!
//! ```rust
//! use formtree::{to_entries, tree, FlatValue, Value};
//!
//! let value = tree!({"user": {"name": "Alice", "tags": ["admin", "ops"]}});
//! let flat = to_entries(&value);
//!
//! assert_eq!(
//!     flat.get("user[name]"),
//!     Some(&FlatValue::Single(Value::from("Alice")))
//! );
//! // both tags share one path; the collision policy collects them in order
//! assert_eq!(flat.get("user[tags][]").unwrap().as_slice().len(), 2);
//! ```
//!
//! ## Guarantees
//!
//! - Pure, synchronous, in-memory: no DOM, network, or file surface
//! - Entries process strictly in input order; append grouping depends on it
//! - Object key order is preserved end to end (`IndexMap` throughout)
//! - Fail-fast errors: one bad entry aborts the whole build, no partial
//!   results
//! - No `unsafe` code

pub mod assign;
pub mod build;
pub mod coerce;
pub mod controls;
pub mod error;
pub mod flatten;
pub mod macros;
pub mod map;
pub mod name;
pub mod options;
pub mod syntax;
pub mod value;

pub use assign::deep_set;
pub use build::FieldEntry;
pub use error::{Error, Result};
pub use flatten::{lookup_name, FlatEntries, FlatValue};
pub use map::FieldMap;
pub use name::{ParsedName, TypeTag};
pub use options::{BuildOptions, FlattenOptions, ParseFn};
pub use value::{Number, Value};

/// Builds a nested structure from field entries with default options.
///
/// With default options every value stays a string; see
/// [`from_entries_with_options`] for coercion.
///
/// # Examples
///
/// ```rust
/// use formtree::{from_entries, tree};
///
/// let value = from_entries(vec![("a[b]", "1"), ("a[c]", "2")]).unwrap();
/// assert_eq!(value, tree!({"a": {"b": "1", "c": "2"}}));
/// ```
///
/// # Errors
///
/// Fails fast on the first invalid entry; see [`Error`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_entries<I, E>(entries: I) -> Result<Value>
where
    I: IntoIterator<Item = E>,
    E: Into<FieldEntry>,
{
    build::build(entries, &BuildOptions::new())
}

/// Builds a nested structure from field entries with explicit options.
///
/// # Examples
///
/// ```rust
/// use formtree::{from_entries_with_options, BuildOptions, tree};
///
/// let options = BuildOptions::new().with_parse_all(true);
/// let value = from_entries_with_options(
///     vec![("n", "1"), ("b", "true"), ("x", "null")],
///     &options,
/// )
/// .unwrap();
/// assert_eq!(value, tree!({"n": 1, "b": true, "x": null}));
/// ```
///
/// # Errors
///
/// Fails fast on the first invalid entry; see [`Error`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_entries_with_options<I, E>(entries: I, options: &BuildOptions) -> Result<Value>
where
    I: IntoIterator<Item = E>,
    E: Into<FieldEntry>,
{
    build::build(entries, options)
}

/// Builds a nested structure using untyped `(key, value)` option pairs.
///
/// Every option key is validated against the recognized set before any entry
/// is processed; an unknown key fails with [`Error::InvalidOption`].
///
/// # Examples
///
/// ```rust
/// use formtree::{from_entries_with_config, Value};
///
/// let config = vec![("parse_numbers", Value::from(true))];
/// let value = from_entries_with_config(vec![("a", "1")], config).unwrap();
/// assert_eq!(value.as_object().unwrap().get("a").unwrap().as_i64(), Some(1));
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidOption`] for an unrecognized option key, then the
/// same errors as [`from_entries_with_options`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_entries_with_config<'a, I, E, C>(entries: I, config: C) -> Result<Value>
where
    I: IntoIterator<Item = E>,
    E: Into<FieldEntry>,
    C: IntoIterator<Item = (&'a str, Value)>,
{
    let options = BuildOptions::from_pairs(config)?;
    build::build(entries, &options)
}

/// Flattens a nested structure into per-field paths with default naming
/// (bracket notation, no explicit array indexes).
///
/// # Examples
///
/// ```rust
/// use formtree::{to_entries, tree};
///
/// let flat = to_entries(&tree!({"a": {"b": "1"}}));
/// assert!(flat.contains_key("a[b]"));
/// ```
#[must_use]
pub fn to_entries(value: &Value) -> FlatEntries {
    flatten::flatten(value, &FlattenOptions::new())
}

/// Flattens a nested structure into per-field paths with explicit naming
/// options.
///
/// # Examples
///
/// ```rust
/// use formtree::{to_entries_with_options, tree, FlattenOptions};
///
/// let options = FlattenOptions::new().with_array_indices(true);
/// let flat = to_entries_with_options(&tree!({"t": ["a", "b"]}), &options);
/// let paths: Vec<_> = flat.keys().cloned().collect();
/// assert_eq!(paths, vec!["t[0]", "t[1]"]);
/// ```
#[must_use]
pub fn to_entries_with_options(value: &Value, options: &FlattenOptions) -> FlatEntries {
    flatten::flatten(value, options)
}
