//! Flattening: one nested structure in, per-field path assignments out.
//!
//! The flattener is the inverse-direction counterpart of the builder: it walks
//! a nested [`Value`] depth-first and produces an ordered mapping from
//! reconstructed bracketed path strings to leaf values, ready for a widget
//! layer to apply to concrete controls. The input is never mutated.
//!
//! ## Collisions
//!
//! Without explicit array indexes, every element of an array shares one path
//! (`tags[]`), so several leaves can land on the same path. The first
//! occurrence stores a single value; the second converts the slot into a
//! two-element collection; further occurrences append. Consumers must accept
//! either shape, which is what [`FlatValue`] encodes.
//!
//! ```rust
//! use formtree::{to_entries, tree, FlatValue, Value};
//!
//! let value = tree!({"tags": ["a", "b"]});
//! let flat = to_entries(&value);
//! assert_eq!(
//!     flat.get("tags[]"),
//!     Some(&FlatValue::Many(vec![Value::from("a"), Value::from("b")]))
//! );
//! ```

use indexmap::IndexMap;

use crate::{FlattenOptions, Value};

/// The value(s) assigned to one flattened path: a single leaf, or the ordered
/// collection produced by path collisions.
#[derive(Clone, Debug, PartialEq)]
pub enum FlatValue {
    Single(Value),
    Many(Vec<Value>),
}

impl FlatValue {
    /// Returns the single value, or `None` for a collection.
    #[must_use]
    pub fn as_single(&self) -> Option<&Value> {
        match self {
            FlatValue::Single(v) => Some(v),
            FlatValue::Many(_) => None,
        }
    }

    /// Returns the values as a slice, whether single or collected.
    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        match self {
            FlatValue::Single(v) => std::slice::from_ref(v),
            FlatValue::Many(vs) => vs,
        }
    }
}

/// The ordered flattened output: path to leaf value(s), in depth-first
/// emission order.
pub type FlatEntries = IndexMap<String, FlatValue>;

/// Flattens a nested structure into an ordered path-to-value mapping.
///
/// Objects recurse into each property in insertion order, extending the path
/// as `parent[key]` (or the bare key at the root). Arrays recurse into each
/// element in order; the segment is the numeric index when
/// [`FlattenOptions::array_indices`] is enabled, otherwise empty, and is
/// bracketed per [`FlattenOptions::brackets`]. Null leaves emit nothing.
///
/// # Examples
///
/// ```rust
/// use formtree::{to_entries_with_options, tree, FlattenOptions, FlatValue, Value};
///
/// let value = tree!({"user": {"name": "Alice", "tags": ["a", "b"]}});
/// let flat = to_entries_with_options(&value, &FlattenOptions::new().with_array_indices(true));
///
/// let paths: Vec<_> = flat.keys().cloned().collect();
/// assert_eq!(paths, vec!["user[name]", "user[tags][0]", "user[tags][1]"]);
/// ```
#[must_use]
pub fn flatten(value: &Value, options: &FlattenOptions) -> FlatEntries {
    let mut entries = FlatEntries::new();
    walk(value, String::new(), options, &mut entries);
    log::trace!("flattened structure into {} paths", entries.len());
    entries
}

fn walk(value: &Value, path: String, options: &FlattenOptions, entries: &mut FlatEntries) {
    match value {
        // Null plays the role of an absent value: nothing to write.
        Value::Null => {}
        Value::Object(map) => {
            for (key, child) in map.iter() {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{}[{}]", path, key)
                };
                walk(child, child_path, options, entries);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                let segment = if options.array_indices {
                    index.to_string()
                } else {
                    String::new()
                };
                let child_path = if options.brackets() {
                    format!("{}[{}]", path, segment)
                } else {
                    format!("{}{}", path, segment)
                };
                walk(child, child_path, options, entries);
            }
        }
        leaf => emit(entries, path, leaf),
    }
}

/// Records a leaf under `path`, applying the collision policy.
fn emit(entries: &mut FlatEntries, path: String, leaf: &Value) {
    match entries.get_mut(&path) {
        None => {
            entries.insert(path, FlatValue::Single(leaf.clone()));
        }
        Some(slot @ FlatValue::Single(_)) => {
            let previous = match std::mem::replace(slot, FlatValue::Many(Vec::new())) {
                FlatValue::Single(v) => v,
                FlatValue::Many(_) => unreachable!("slot was just matched as Single"),
            };
            *slot = FlatValue::Many(vec![previous, leaf.clone()]);
        }
        Some(FlatValue::Many(items)) => items.push(leaf.clone()),
    }
}

/// Normalizes a flattened path for downstream control lookup.
///
/// With bracket notation a path is used as-is; without it, an array leaf path
/// still carries a trailing `[]` marker that the control's name will not
/// have, so it is stripped.
///
/// # Examples
///
/// ```rust
/// use formtree::{lookup_name, FlattenOptions};
///
/// let bare = FlattenOptions::new().with_bracket_notation(false);
/// assert_eq!(lookup_name("options[]", &bare), "options");
/// assert_eq!(lookup_name("options[]", &FlattenOptions::new()), "options[]");
/// ```
#[must_use]
pub fn lookup_name<'a>(path: &'a str, options: &FlattenOptions) -> &'a str {
    if !options.brackets() {
        path.strip_suffix("[]").unwrap_or(path)
    } else {
        path
    }
}
