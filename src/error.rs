//! Error types for building and flattening nested structures.
//!
//! All errors are fail-fast: a single bad field entry or option key aborts the
//! whole operation and unwinds to the caller, with no partial result exposed.
//!
//! ## Error Categories
//!
//! - **Invalid Option**: an unrecognized configuration key was supplied
//! - **Invalid Type Tag**: a field name carries an unknown `:<type>` suffix
//! - **Malformed Json**: a value tagged `:array`/`:object` is not valid JSON
//! - **Invalid Argument**: the deep assigner was invoked with an unusable target
//!   or an empty key path
//!
//! ## Examples
//!
//! ```rust
//! use formtree::{from_entries, Error};
//!
//! let result = from_entries(vec![("a:custom", "1")]);
//! assert!(matches!(result, Err(Error::InvalidTypeTag { .. })));
//! ```

use std::fmt;
use thiserror::Error;

use crate::name::VALID_TYPE_TAGS;
use crate::options::VALID_OPTION_KEYS;

/// Represents all possible errors that can occur while building or flattening.
///
/// Each error variant names the offending input so callers can report it
/// without re-parsing anything.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// An unrecognized configuration key was supplied.
    #[error("invalid option '{option}', please use one of {}", VALID_OPTION_KEYS.join(", "))]
    InvalidOption { option: String },

    /// A field name's trailing type suffix is not a recognized tag.
    #[error("invalid type '{tag}' found in field name '{name}', please use one of {}", VALID_TYPE_TAGS.join(", "))]
    InvalidTypeTag { tag: String, name: String },

    /// A value tagged `:array` or `:object` failed to parse as JSON.
    #[error("field '{name}' is tagged as JSON but its value {raw:?} failed to parse: {detail}")]
    MalformedJson {
        name: String,
        raw: String,
        detail: String,
    },

    /// The deep assigner was invoked with an unusable target or key path.
    #[error("argument error: {0}")]
    InvalidArgument(String),

    /// Custom error with a display message.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates an invalid-option error naming the unrecognized key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use formtree::Error;
    ///
    /// let err = Error::invalid_option("parseDates");
    /// assert!(err.to_string().contains("parseDates"));
    /// ```
    pub fn invalid_option(option: &str) -> Self {
        Error::InvalidOption {
            option: option.to_string(),
        }
    }

    /// Creates an invalid-type-tag error naming the tag and the full field name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use formtree::Error;
    ///
    /// let err = Error::invalid_type_tag("custom", "price:custom");
    /// assert!(err.to_string().contains("price:custom"));
    /// ```
    pub fn invalid_type_tag(tag: &str, name: &str) -> Self {
        Error::InvalidTypeTag {
            tag: tag.to_string(),
            name: name.to_string(),
        }
    }

    /// Creates a malformed-JSON error carrying the field name and raw value.
    pub fn malformed_json(name: &str, raw: &str, detail: &str) -> Self {
        Error::MalformedJson {
            name: name.to_string(),
            raw: raw.to_string(),
            detail: detail.to_string(),
        }
    }

    /// Creates an invalid-argument error for a misused deep assignment.
    pub fn invalid_argument(msg: &str) -> Self {
        Error::InvalidArgument(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
