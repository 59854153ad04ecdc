//! Configuration options for building and flattening.
//!
//! This module provides the two option types:
//!
//! - [`BuildOptions`]: controls value coercion and array-index handling while
//!   building a nested structure from field entries
//! - [`FlattenOptions`]: controls the naming convention used when flattening a
//!   structure back into per-field paths
//!
//! Options are resolved once per operation and threaded as a parameter through
//! every call; there is no process-wide mutable default.
//!
//! ## Examples
//!
//! ```rust
//! use formtree::{from_entries_with_options, BuildOptions};
//!
//! let options = BuildOptions::new().with_parse_numbers(true);
//! let tree = from_entries_with_options(vec![("a", "1")], &options).unwrap();
//! assert_eq!(tree.as_object().unwrap().get("a").unwrap().as_i64(), Some(1));
//! ```

use std::fmt;
use std::sync::Arc;

use crate::{Error, Result, Value};

/// A user-supplied custom value parser.
///
/// Invoked synchronously with the already-coerced value and the full field
/// name, for every entry whose name carries no explicit type suffix.
pub type ParseFn = Arc<dyn Fn(Value, &str) -> Value + Send + Sync>;

/// The recognized build option keys, as accepted by [`BuildOptions::from_pairs`].
pub const VALID_OPTION_KEYS: [&str; 7] = [
    "parse_numbers",
    "parse_booleans",
    "parse_nulls",
    "parse_all",
    "parse_with",
    "checkbox_unchecked_value",
    "use_int_keys_as_array_index",
];

/// Configuration for building a nested structure from field entries.
///
/// All coercion flags default to off: without an explicit type suffix on the
/// field name, every value stays a string.
///
/// # Examples
///
/// ```rust
/// use formtree::BuildOptions;
///
/// // Default: everything stays a string
/// let options = BuildOptions::new();
///
/// // Opt in to scalar coercion
/// let options = BuildOptions::new()
///     .with_parse_numbers(true)
///     .with_parse_booleans(true)
///     .with_parse_nulls(true);
///
/// // Or all at once
/// let options = BuildOptions::new().with_parse_all(true);
/// ```
#[derive(Clone, Default)]
pub struct BuildOptions {
    /// Convert values like `"1"`, `"-2.33"` to numbers.
    pub parse_numbers: bool,
    /// Convert `"true"` and `"false"` to booleans.
    pub parse_booleans: bool,
    /// Convert `"null"` to null.
    pub parse_nulls: bool,
    /// Shorthand enabling all three scalar conversions above.
    pub parse_all: bool,
    /// Custom parser applied to untagged values after coercion.
    pub parse_with: Option<ParseFn>,
    /// Value to report for unchecked checkboxes, when the input supplier
    /// chooses to include them (see [`crate::controls::unchecked_entry`]).
    pub checkbox_unchecked_value: Option<String>,
    /// Treat integer keys such as `foo[2]` as array indexes instead of object
    /// keys, producing `{foo: [null, null, v]}`.
    pub use_int_keys_as_array_index: bool,
}

impl BuildOptions {
    /// Creates default options (no coercion, object keys for integers).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds options from untyped `(key, value)` pairs.
    ///
    /// Every key is validated against [`VALID_OPTION_KEYS`] before anything
    /// else happens; an unrecognized key fails with [`Error::InvalidOption`].
    /// Flag values follow permissive truthiness (false, null, `""`, `0` and NaN
    /// are off, everything else is on). A `parse_with` function cannot be
    /// carried in data pairs and is ignored here; set it with
    /// [`BuildOptions::with_parse_with`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use formtree::{BuildOptions, Value};
    ///
    /// let options = BuildOptions::from_pairs(vec![
    ///     ("parse_numbers", Value::from(true)),
    ///     ("checkbox_unchecked_value", Value::from("off")),
    /// ])
    /// .unwrap();
    /// assert!(options.parse_numbers);
    ///
    /// assert!(BuildOptions::from_pairs(vec![("parse_dates", Value::from(true))]).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOption`] naming the first unrecognized key.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, Value)>,
    {
        let mut options = BuildOptions::new();
        for (key, value) in pairs {
            match key {
                "parse_numbers" => options.parse_numbers = is_truthy(&value),
                "parse_booleans" => options.parse_booleans = is_truthy(&value),
                "parse_nulls" => options.parse_nulls = is_truthy(&value),
                "parse_all" => options.parse_all = is_truthy(&value),
                "parse_with" => {
                    log::debug!("option 'parse_with' cannot be set from data pairs; ignored");
                }
                "checkbox_unchecked_value" => {
                    options.checkbox_unchecked_value = match value {
                        Value::Null => None,
                        Value::String(s) => Some(s),
                        other => Some(other.to_string()),
                    };
                }
                "use_int_keys_as_array_index" => {
                    options.use_int_keys_as_array_index = is_truthy(&value)
                }
                other => return Err(Error::invalid_option(other)),
            }
        }
        Ok(options)
    }

    /// Enables or disables numeric coercion of untagged values.
    #[must_use]
    pub fn with_parse_numbers(mut self, enabled: bool) -> Self {
        self.parse_numbers = enabled;
        self
    }

    /// Enables or disables boolean coercion of untagged values.
    #[must_use]
    pub fn with_parse_booleans(mut self, enabled: bool) -> Self {
        self.parse_booleans = enabled;
        self
    }

    /// Enables or disables null coercion of untagged values.
    #[must_use]
    pub fn with_parse_nulls(mut self, enabled: bool) -> Self {
        self.parse_nulls = enabled;
        self
    }

    /// Enables number, boolean, and null coercion together.
    #[must_use]
    pub fn with_parse_all(mut self, enabled: bool) -> Self {
        self.parse_all = enabled;
        self
    }

    /// Sets a custom parser applied to untagged values after coercion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use formtree::{BuildOptions, Value};
    ///
    /// let options = BuildOptions::new().with_parse_with(Arc::new(|value, _name| {
    ///     match value {
    ///         Value::String(s) => Value::String(s.to_uppercase()),
    ///         other => other,
    ///     }
    /// }));
    /// ```
    #[must_use]
    pub fn with_parse_with(mut self, f: ParseFn) -> Self {
        self.parse_with = Some(f);
        self
    }

    /// Sets the value reported for unchecked checkboxes.
    #[must_use]
    pub fn with_checkbox_unchecked_value(mut self, value: &str) -> Self {
        self.checkbox_unchecked_value = Some(value.to_string());
        self
    }

    /// Enables or disables treating integer keys as array indexes.
    #[must_use]
    pub fn with_use_int_keys_as_array_index(mut self, enabled: bool) -> Self {
        self.use_int_keys_as_array_index = enabled;
        self
    }

    /// Whether untagged numeric-looking strings should become numbers.
    #[inline]
    #[must_use]
    pub fn wants_numbers(&self) -> bool {
        self.parse_all || self.parse_numbers
    }

    /// Whether untagged `"true"`/`"false"` should become booleans.
    #[inline]
    #[must_use]
    pub fn wants_booleans(&self) -> bool {
        self.parse_all || self.parse_booleans
    }

    /// Whether untagged `"null"` should become null.
    #[inline]
    #[must_use]
    pub fn wants_nulls(&self) -> bool {
        self.parse_all || self.parse_nulls
    }
}

impl fmt::Debug for BuildOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildOptions")
            .field("parse_numbers", &self.parse_numbers)
            .field("parse_booleans", &self.parse_booleans)
            .field("parse_nulls", &self.parse_nulls)
            .field("parse_all", &self.parse_all)
            .field("parse_with", &self.parse_with.as_ref().map(|_| "<fn>"))
            .field("checkbox_unchecked_value", &self.checkbox_unchecked_value)
            .field(
                "use_int_keys_as_array_index",
                &self.use_int_keys_as_array_index,
            )
            .finish()
    }
}

/// Permissive truthiness for untyped option values: false, null, `""`, `0`
/// and NaN are off, everything else is on.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => {
            let f = n.as_f64();
            !f.is_nan() && f != 0.0
        }
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Configuration for flattening a nested structure into per-field paths.
///
/// # Examples
///
/// ```rust
/// use formtree::{to_entries_with_options, FlattenOptions, tree};
///
/// let value = tree!({"tags": ["a", "b"]});
///
/// // Default bracket notation: tags[] twice (values collected)
/// let flat = to_entries_with_options(&value, &FlattenOptions::new());
/// assert!(flat.contains_key("tags[]"));
///
/// // Indexed notation: tags[0], tags[1]
/// let options = FlattenOptions::new().with_array_indices(true);
/// let flat = to_entries_with_options(&value, &options);
/// assert!(flat.contains_key("tags[0]"));
/// ```
#[derive(Clone, Debug)]
pub struct FlattenOptions {
    /// Emit explicit numeric indexes for array elements (`foo[0]`). Implies
    /// bracket notation.
    pub array_indices: bool,
    /// Wrap array segments in brackets (`foo[]`). When disabled, array
    /// segments are appended bare and downstream lookups strip a trailing
    /// `[]` (see [`crate::flatten::lookup_name`]).
    pub bracket_notation: bool,
    /// Attribute the widget layer resolves non-form paths against.
    pub identifier: String,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        FlattenOptions {
            array_indices: false,
            bracket_notation: true,
            identifier: "id".to_string(),
        }
    }
}

impl FlattenOptions {
    /// Creates default options (bracket notation, no explicit indexes).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables explicit numeric array indexes.
    #[must_use]
    pub fn with_array_indices(mut self, enabled: bool) -> Self {
        self.array_indices = enabled;
        self
    }

    /// Enables or disables bracket notation for array segments.
    #[must_use]
    pub fn with_bracket_notation(mut self, enabled: bool) -> Self {
        self.bracket_notation = enabled;
        self
    }

    /// Sets the identifier attribute used for non-form lookups.
    #[must_use]
    pub fn with_identifier(mut self, identifier: &str) -> Self {
        self.identifier = identifier.to_string();
        self
    }

    /// Whether array segments are bracketed; explicit indexes force brackets.
    #[inline]
    #[must_use]
    pub fn brackets(&self) -> bool {
        self.bracket_notation || self.array_indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Number;

    #[test]
    fn test_from_pairs_rejects_unknown_key() {
        let err = BuildOptions::from_pairs(vec![("parse_dates", Value::from(true))])
            .expect_err("unknown key must fail");
        let msg = err.to_string();
        assert!(msg.contains("parse_dates"));
        assert!(msg.contains("parse_numbers"));
        assert!(msg.contains("use_int_keys_as_array_index"));
    }

    #[test]
    fn test_from_pairs_truthiness() {
        let options = BuildOptions::from_pairs(vec![
            ("parse_numbers", Value::from("yes")),
            ("parse_booleans", Value::from("")),
            ("parse_nulls", Value::from(0)),
            ("parse_all", Value::Number(Number::NaN)),
        ])
        .expect("all keys recognized");

        assert!(options.parse_numbers);
        assert!(!options.parse_booleans);
        assert!(!options.parse_nulls);
        assert!(!options.parse_all);
    }

    #[test]
    fn test_parse_all_implies_scalar_flags() {
        let options = BuildOptions::new().with_parse_all(true);
        assert!(options.wants_numbers());
        assert!(options.wants_booleans());
        assert!(options.wants_nulls());
        assert!(!options.parse_numbers);
    }

    #[test]
    fn test_array_indices_force_brackets() {
        let options = FlattenOptions::new()
            .with_bracket_notation(false)
            .with_array_indices(true);
        assert!(options.brackets());
    }

    #[test]
    fn test_unchecked_value_from_pairs() {
        let options = BuildOptions::from_pairs(vec![(
            "checkbox_unchecked_value",
            Value::from("off"),
        )])
        .unwrap();
        assert_eq!(options.checkbox_unchecked_value.as_deref(), Some("off"));

        let options =
            BuildOptions::from_pairs(vec![("checkbox_unchecked_value", Value::Null)]).unwrap();
        assert_eq!(options.checkbox_unchecked_value, None);
    }
}
