//! Recursive in-place nested assignment.
//!
//! [`deep_set`] walks (and creates) the nested path described by a key
//! sequence and assigns or appends the value. The shape of every interior node
//! is decided by looking one key ahead: an append token or an integer key
//! (with [`BuildOptions::use_int_keys_as_array_index`] enabled) demands an
//! array child, anything else an object child, and an existing child of the
//! wrong shape is overridden.
//!
//! ## Append grouping
//!
//! An empty key continues an array. Whether it reuses the last element or
//! starts a new one depends on the following key:
//!
//! ```rust
//! use formtree::{deep_set, BuildOptions, Value};
//!
//! let opts = BuildOptions::new();
//! let mut arr = Value::Array(vec![]);
//! deep_set(&mut arr, &keys(&[""]), Value::from("v"), &opts).unwrap();
//! deep_set(&mut arr, &keys(&["", "foo"]), Value::from("v"), &opts).unwrap();
//! deep_set(&mut arr, &keys(&["", "bar"]), Value::from("v"), &opts).unwrap();
//! deep_set(&mut arr, &keys(&["", "bar"]), Value::from("v"), &opts).unwrap();
//! // arr => ["v", {foo: "v", bar: "v"}, {bar: "v"}]
//! assert_eq!(arr.as_array().unwrap().len(), 3);
//!
//! fn keys(parts: &[&str]) -> Vec<String> {
//!     parts.iter().map(|s| s.to_string()).collect()
//! }
//! ```
//!
//! The reuse rule is deliberately order-sensitive: the last element is reused
//! when it is a container that does not yet hold the next key, or when more
//! than two keys remain. Downstream consumers depend on this exact grouping,
//! including its quirks at three or more levels of nested appends, so it is
//! preserved as-is rather than generalized.

use crate::{BuildOptions, Error, FieldMap, Result, Value};

/// Where the next assignment lands inside the current node.
enum Slot<'a> {
    /// Array element, by index (may be one past the end, or sparse).
    Index(usize),
    /// Object property (or numeric-string array index, resolved on use).
    Key(&'a str),
}

/// Sets `value` at the nested path `keys` inside `target`, creating or
/// reshaping interior nodes as needed.
///
/// The target is mutated in place. An empty key appends to an array; other
/// keys index objects (or arrays, for numeric-string keys on array nodes).
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `keys` is empty, when an append
/// token targets a non-array node, or when a non-numeric key targets an array
/// node.
pub fn deep_set(target: &mut Value, keys: &[String], value: Value, options: &BuildOptions) -> Result<()> {
    let (key, rest) = keys
        .split_first()
        .ok_or_else(|| Error::invalid_argument("expected a key path with at least one element"))?;

    // Only one key: not a deep set, just assign or append.
    if rest.is_empty() {
        return if key.is_empty() {
            push(target, value)
        } else {
            set(target, key, value)
        };
    }

    let next_key = &rest[0];
    let slot = resolve_slot(target, key, next_key, keys.len())?;

    // Decide the child's shape before recursing: the next key tells us whether
    // it must be an array or an object.
    let want_array =
        next_key.is_empty() || (options.use_int_keys_as_array_index && is_array_index(next_key));
    let child = child_slot(target, slot, want_array)?;
    deep_set(child, rest, value, options)
}

/// Base case: append to an array node.
fn push(target: &mut Value, value: Value) -> Result<()> {
    match target {
        Value::Array(items) => {
            items.push(value);
            Ok(())
        }
        other => Err(Error::invalid_argument(&format!(
            "cannot append with an empty key to a {} node",
            kind(other)
        ))),
    }
}

/// Base case: assign under a key, indexing arrays by numeric-string keys.
fn set(target: &mut Value, key: &str, value: Value) -> Result<()> {
    match target {
        Value::Object(map) => {
            map.insert(key.to_string(), value);
            Ok(())
        }
        Value::Array(items) => {
            let idx: usize = key.parse().map_err(|_| {
                Error::invalid_argument(&format!(
                    "cannot set non-numeric key '{}' on an array node",
                    key
                ))
            })?;
            if idx >= items.len() {
                items.resize(idx + 1, Value::Null);
            }
            items[idx] = value;
            Ok(())
        }
        other => Err(Error::invalid_argument(&format!(
            "cannot set key '{}' on a {} node",
            key,
            kind(other)
        ))),
    }
}

/// Resolves the slot the current key addresses, applying the append-grouping
/// heuristic for empty keys.
fn resolve_slot<'a>(
    target: &Value,
    key: &'a str,
    next_key: &str,
    keys_remaining: usize,
) -> Result<Slot<'a>> {
    if !key.is_empty() {
        return Ok(Slot::Key(key));
    }
    let items = target.as_array().ok_or_else(|| {
        Error::invalid_argument("cannot append with an empty key to a non-array node")
    })?;
    // Reuse the last element while it is a container that can still take
    // next_key as a fresh property, or while the path is still deep enough to
    // keep nesting. Otherwise start a new element one past the end.
    let reuse = match items.last() {
        Some(last) if is_container(last) => !has_property(last, next_key) || keys_remaining > 2,
        _ => false,
    };
    if reuse {
        Ok(Slot::Index(items.len() - 1))
    } else {
        Ok(Slot::Index(items.len()))
    }
}

/// Returns a mutable reference to the child at `slot`, created or overridden
/// to the wanted shape (array or object) when it is absent or mismatched.
fn child_slot<'a>(target: &'a mut Value, slot: Slot<'_>, want_array: bool) -> Result<&'a mut Value> {
    let child = match slot {
        Slot::Index(idx) => {
            let items = target.as_array_mut().ok_or_else(|| {
                Error::invalid_argument("cannot append with an empty key to a non-array node")
            })?;
            if idx >= items.len() {
                items.resize(idx + 1, Value::Null);
            }
            &mut items[idx]
        }
        Slot::Key(key) => match target {
            Value::Object(map) => map.entry_or_insert(key, Value::Null),
            Value::Array(items) => {
                let idx: usize = key.parse().map_err(|_| {
                    Error::invalid_argument(&format!(
                        "cannot set non-numeric key '{}' on an array node",
                        key
                    ))
                })?;
                if idx >= items.len() {
                    items.resize(idx + 1, Value::Null);
                }
                &mut items[idx]
            }
            other => {
                return Err(Error::invalid_argument(&format!(
                    "cannot set key '{}' on a {} node",
                    key,
                    kind(other)
                )))
            }
        },
    };
    let matches = if want_array {
        child.is_array()
    } else {
        child.is_object()
    };
    if !matches {
        *child = if want_array {
            Value::Array(Vec::new())
        } else {
            Value::Object(FieldMap::new())
        };
    }
    Ok(child)
}

/// `true` for nodes that can hold properties (objects and arrays alike).
fn is_container(value: &Value) -> bool {
    value.is_object() || value.is_array()
}

/// Property probe used by the grouping heuristic. On arrays, a key is present
/// only when it is a numeric index inside bounds; the append token is never
/// present.
fn has_property(value: &Value, key: &str) -> bool {
    match value {
        Value::Object(map) => map.contains_key(key),
        Value::Array(items) => key
            .parse::<usize>()
            .map(|idx| idx < items.len())
            .unwrap_or(false),
        _ => false,
    }
}

/// Valid array index: one or more ASCII digits.
fn is_array_index(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
