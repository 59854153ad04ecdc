//! Structure building: field entries in, one nested structure out.
//!
//! The builder consumes an ordered list of [`FieldEntry`] values and threads
//! each one through the tokenizer ([`crate::name`]), the coercer
//! ([`crate::coerce`]), and the deep assigner ([`crate::assign`]) into a
//! shared object root. Entries are processed strictly in input order; the
//! array-append grouping rules make the result order-dependent.

use crate::coerce::coerce;
use crate::name::{split_name, TypeTag};
use crate::{deep_set, BuildOptions, FieldMap, Result, Value};

/// One control's contribution to the submitted data: a raw name and a raw
/// string value.
///
/// # Examples
///
/// ```rust
/// use formtree::FieldEntry;
///
/// let entry = FieldEntry::new("user[name]", "Alice");
/// assert_eq!(entry.name, "user[name]");
///
/// // Tuples convert for convenience
/// let entry: FieldEntry = ("user[name]", "Alice").into();
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldEntry {
    pub name: String,
    pub value: String,
}

impl FieldEntry {
    /// Creates a field entry from a name and raw value.
    #[must_use]
    pub fn new(name: &str, value: &str) -> Self {
        FieldEntry {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

impl From<(&str, &str)> for FieldEntry {
    fn from((name, value): (&str, &str)) -> Self {
        FieldEntry::new(name, value)
    }
}

impl From<(String, String)> for FieldEntry {
    fn from((name, value): (String, String)) -> Self {
        FieldEntry { name, value }
    }
}

impl From<(&str, String)> for FieldEntry {
    fn from((name, value): (&str, String)) -> Self {
        FieldEntry {
            name: name.to_string(),
            value,
        }
    }
}

/// Builds one nested structure from an ordered sequence of field entries.
///
/// For each entry: tokenize the name, drop the entry when tagged `skip`,
/// coerce the value, run the custom parse function for untagged entries when
/// one is configured, and deep-assign into the shared result. The root is
/// always an object.
///
/// # Errors
///
/// Fails fast on the first bad entry ([`crate::Error::InvalidTypeTag`],
/// [`crate::Error::MalformedJson`], [`crate::Error::InvalidArgument`]); no
/// partial result is exposed.
pub fn build<I, E>(entries: I, options: &BuildOptions) -> Result<Value>
where
    I: IntoIterator<Item = E>,
    E: Into<FieldEntry>,
{
    let mut root = Value::Object(FieldMap::new());
    for entry in entries {
        let entry = entry.into();
        let parsed = split_name(&entry.name)?;
        if parsed.tag == TypeTag::Skip {
            log::trace!("skipping field '{}'", entry.name);
            continue;
        }
        let mut value = coerce(&entry.value, parsed.tag, options, &entry.name)?;
        if parsed.tag == TypeTag::Unspecified {
            if let Some(parse_with) = &options.parse_with {
                value = parse_with(value, &entry.name);
            }
        }
        log::trace!("assigning field '{}' at {:?}", entry.name, parsed.keys);
        deep_set(&mut root, &parsed.keys, value, options)?;
    }
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::sync::Arc;

    #[test]
    fn test_build_simple() {
        let tree = build(vec![("a", "1")], &BuildOptions::new()).unwrap();
        assert_eq!(
            tree.as_object().unwrap().get("a"),
            Some(&Value::from("1"))
        );
    }

    #[test]
    fn test_skip_tag_drops_entry() {
        let tree = build(
            vec![("a:skip", "ignored"), ("a", "kept")],
            &BuildOptions::new(),
        )
        .unwrap();
        assert_eq!(tree.as_object().unwrap().get("a"), Some(&Value::from("kept")));
        assert_eq!(tree.as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_parse_with_applies_to_untagged_only() {
        let options = BuildOptions::new().with_parse_with(Arc::new(|value, _name| {
            match value {
                Value::String(s) => Value::String(format!("<{}>", s)),
                other => other,
            }
        }));

        let tree = build(vec![("a", "x"), ("b:string", "y")], &options).unwrap();
        let obj = tree.as_object().unwrap();
        assert_eq!(obj.get("a"), Some(&Value::from("<x>")));
        assert_eq!(obj.get("b"), Some(&Value::from("y")));
    }

    #[test]
    fn test_bad_entry_aborts_whole_build() {
        let err = build(
            vec![("ok", "1"), ("bad:json", "2"), ("never", "3")],
            &BuildOptions::new(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidTypeTag { .. }));
    }

    #[test]
    fn test_ordering_matters_for_append_grouping() {
        let opts = BuildOptions::new();
        let grouped = build(
            vec![("r[][a]", "1"), ("r[][b]", "2")],
            &opts,
        )
        .unwrap();
        assert_eq!(
            grouped
                .as_object()
                .unwrap()
                .get("r")
                .unwrap()
                .as_array()
                .unwrap()
                .len(),
            1
        );

        let split = build(
            vec![("r[][a]", "1"), ("r[][a]", "2")],
            &opts,
        )
        .unwrap();
        assert_eq!(
            split
                .as_object()
                .unwrap()
                .get("r")
                .unwrap()
                .as_array()
                .unwrap()
                .len(),
            2
        );
    }
}
