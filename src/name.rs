//! Field-name tokenization.
//!
//! A field name like `user[emails][]:string` decomposes into an ordered key
//! path (`["user", "emails", ""]`) and a [`TypeTag`]. The empty-string token is
//! the array-append marker. See [`crate::syntax`] for the full naming
//! convention.
//!
//! Brackets are not validated structurally: every `]` is simply stripped from
//! each fragment, so `foo[inn[bar]]` flattens to the same key path as
//! `foo[inn][bar]`.

use crate::{Error, Result};

/// The recognized explicit type suffixes, in the form accepted after a `:` in
/// a field name.
pub const VALID_TYPE_TAGS: [&str; 8] = [
    "string", "number", "boolean", "null", "array", "object", "skip", "auto",
];

/// How a raw string value should be converted into a typed value.
///
/// Carried as an explicit `:<type>` suffix on a field name, or
/// [`TypeTag::Unspecified`] when the name has none (deferring to the
/// [`BuildOptions`](crate::BuildOptions) parse flags).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TypeTag {
    /// Keep the raw string unchanged.
    String,
    /// Permissive numeric conversion.
    Number,
    /// Boolean conversion (`true` unless the value is a falsy literal).
    Boolean,
    /// Null conversion (falsy literals become null, others keep the string).
    Null,
    /// Parse the value as a JSON array.
    Array,
    /// Parse the value as a JSON object.
    Object,
    /// Drop the field entirely.
    Skip,
    /// Try number, boolean, then null, falling back to the string.
    Auto,
    /// No explicit suffix; global options decide.
    #[default]
    Unspecified,
}

impl TypeTag {
    /// Resolves a suffix string into a tag, or `None` if unrecognized.
    ///
    /// Only the spellings in [`VALID_TYPE_TAGS`] are accepted; in particular
    /// `_` is not a valid explicit suffix, it only marks the absence of one.
    #[must_use]
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "string" => Some(TypeTag::String),
            "number" => Some(TypeTag::Number),
            "boolean" => Some(TypeTag::Boolean),
            "null" => Some(TypeTag::Null),
            "array" => Some(TypeTag::Array),
            "object" => Some(TypeTag::Object),
            "skip" => Some(TypeTag::Skip),
            "auto" => Some(TypeTag::Auto),
            _ => None,
        }
    }
}

/// A tokenized field name: the key path (without the tag) plus the tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedName {
    /// Ordered key tokens; an empty token means "append to array".
    pub keys: Vec<String>,
    /// Explicit or unspecified type tag.
    pub tag: TypeTag,
}

/// Splits `name` into its name-without-type prefix and type tag.
///
/// Only the segment after the last colon is considered, and it must be
/// non-empty; `"foo:"` therefore has no suffix and an unspecified tag, while
/// `"a:b:c"` considers only `c`.
///
/// # Examples
///
/// ```rust
/// use formtree::name::{extract_type, TypeTag};
///
/// assert_eq!(extract_type("foo").unwrap(), ("foo", TypeTag::Unspecified));
/// assert_eq!(extract_type("foo:boolean").unwrap(), ("foo", TypeTag::Boolean));
/// assert_eq!(extract_type("foo[bar]:null").unwrap(), ("foo[bar]", TypeTag::Null));
/// assert!(extract_type("foo:custom").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidTypeTag`] when a suffix is present but not one of
/// the recognized tags.
pub fn extract_type(name: &str) -> Result<(&str, TypeTag)> {
    match name.rfind(':') {
        Some(idx) if idx + 1 < name.len() => {
            let suffix = &name[idx + 1..];
            match TypeTag::from_suffix(suffix) {
                Some(tag) => Ok((&name[..idx], tag)),
                None => Err(Error::invalid_type_tag(suffix, name)),
            }
        }
        _ => Ok((name, TypeTag::Unspecified)),
    }
}

/// Tokenizes a raw field name into a key path and type tag.
///
/// The name-without-type is split on `[`, every `]` is stripped from each
/// fragment, and a leading empty fragment is dropped so that `[foo][inn]`
/// equals `foo[inn]`.
///
/// # Examples
///
/// ```rust
/// use formtree::name::split_name;
///
/// assert_eq!(split_name("foo[inn][bar]").unwrap().keys, vec!["foo", "inn", "bar"]);
/// assert_eq!(split_name("foo[inn[bar]]").unwrap().keys, vec!["foo", "inn", "bar"]);
/// assert_eq!(split_name("arr[][val]").unwrap().keys, vec!["arr", "", "val"]);
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidTypeTag`] for an unrecognized type suffix.
pub fn split_name(name: &str) -> Result<ParsedName> {
    let (without_type, tag) = extract_type(name)?;
    let mut keys: Vec<String> = without_type
        .split('[')
        .map(|fragment| fragment.replace(']', ""))
        .collect();
    if keys.first().map(String::is_empty).unwrap_or(false) {
        keys.remove(0);
    }
    Ok(ParsedName { keys, tag })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(name: &str) -> Vec<String> {
        split_name(name).unwrap().keys
    }

    #[test]
    fn test_plain_name() {
        let parsed = split_name("foo").unwrap();
        assert_eq!(parsed.keys, vec!["foo"]);
        assert_eq!(parsed.tag, TypeTag::Unspecified);
    }

    #[test]
    fn test_type_suffixes() {
        assert_eq!(split_name("foo:string").unwrap().tag, TypeTag::String);
        assert_eq!(split_name("foo:boolean").unwrap().tag, TypeTag::Boolean);
        assert_eq!(split_name("arr[][val]:null").unwrap().tag, TypeTag::Null);
        assert_eq!(
            split_name("arr[][val]:null").unwrap().keys,
            vec!["arr", "", "val"]
        );
    }

    #[test]
    fn test_unrecognized_suffix_fails() {
        let err = split_name("price:currency").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("currency"));
        assert!(msg.contains("price:currency"));
        assert!(msg.contains("skip"));
    }

    #[test]
    fn test_trailing_colon_is_not_a_suffix() {
        let parsed = split_name("foo:").unwrap();
        assert_eq!(parsed.keys, vec!["foo:"]);
        assert_eq!(parsed.tag, TypeTag::Unspecified);
    }

    #[test]
    fn test_only_last_segment_considered() {
        // "a:b:c" anchors on the last colon; "c" is not a valid tag
        assert!(split_name("a:b:c").is_err());
        // but a valid final segment works regardless of earlier colons
        let parsed = split_name("a:b:skip").unwrap();
        assert_eq!(parsed.keys, vec!["a:b"]);
        assert_eq!(parsed.tag, TypeTag::Skip);
    }

    #[test]
    fn test_bracket_splitting() {
        assert_eq!(keys("foo[inn][bar]"), vec!["foo", "inn", "bar"]);
        assert_eq!(keys("foo[inn][arr][0]"), vec!["foo", "inn", "arr", "0"]);
    }

    #[test]
    fn test_nested_brackets_flatten() {
        assert_eq!(keys("foo[inn[bar]]"), vec!["foo", "inn", "bar"]);
    }

    #[test]
    fn test_leading_bracket_dropped() {
        assert_eq!(keys("[foo][inn]"), keys("foo[inn]"));
    }

    #[test]
    fn test_append_tokens() {
        assert_eq!(keys("arr[]"), vec!["arr", ""]);
        assert_eq!(keys("arr[][val]"), vec!["arr", "", "val"]);
    }

    #[test]
    fn test_empty_name() {
        // Degenerate: no keys at all; the deep assigner rejects this later
        assert!(keys("").is_empty());
    }

    #[test]
    fn test_underscore_is_not_a_valid_suffix() {
        assert!(split_name("foo:_").is_err());
    }
}
