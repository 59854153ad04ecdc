//! Typed value coercion.
//!
//! Converts a raw string value into a typed [`Value`] according to the field's
//! [`TypeTag`] and the global [`BuildOptions`]. An explicit tag always wins
//! over the global parse flags.
//!
//! The boolean and null conversions share one falsy literal set
//! (`"false"`, `"null"`, `"undefined"`, `""`, `"0"`): a tagged boolean is
//! `true` unless the value is one of those literals, and a tagged null becomes
//! null only for those literals, keeping the original string otherwise. That
//! asymmetry is part of the contract and must not be normalized away.

use crate::name::TypeTag;
use crate::{BuildOptions, Error, Number, Result, Value};

/// The literals treated as falsy by the boolean and null conversions.
const FALSY_LITERALS: [&str; 5] = ["false", "null", "undefined", "", "0"];

/// Converts a raw string value according to `tag` and `options`.
///
/// `name` is only used to label errors for JSON-tagged fields.
///
/// # Examples
///
/// ```rust
/// use formtree::coerce::coerce;
/// use formtree::name::TypeTag;
/// use formtree::{BuildOptions, Value};
///
/// let opts = BuildOptions::new().with_parse_numbers(true);
/// assert_eq!(coerce("1", TypeTag::Unspecified, &opts, "a").unwrap(), Value::from(1));
/// assert_eq!(coerce("1", TypeTag::String, &opts, "a").unwrap(), Value::from("1"));
/// ```
///
/// # Errors
///
/// Returns [`Error::MalformedJson`] when an `array`/`object` tagged value is
/// not valid JSON.
pub fn coerce(raw: &str, tag: TypeTag, options: &BuildOptions, name: &str) -> Result<Value> {
    if tag == TypeTag::String {
        return Ok(Value::String(raw.to_string()));
    }
    if tag == TypeTag::Number || (tag == TypeTag::Unspecified && options.wants_numbers() && is_numeric(raw)) {
        return Ok(Value::Number(to_number(raw)));
    }
    if tag == TypeTag::Boolean
        || (tag == TypeTag::Unspecified
            && options.wants_booleans()
            && (raw == "true" || raw == "false"))
    {
        return Ok(Value::Bool(!FALSY_LITERALS.contains(&raw)));
    }
    if tag == TypeTag::Null || (tag == TypeTag::Unspecified && options.wants_nulls() && raw == "null") {
        return Ok(if FALSY_LITERALS.contains(&raw) {
            Value::Null
        } else {
            Value::String(raw.to_string())
        });
    }
    if tag == TypeTag::Array || tag == TypeTag::Object {
        let json: serde_json::Value = serde_json::from_str(raw)
            .map_err(|e| Error::malformed_json(name, raw, &e.to_string()))?;
        return Ok(Value::from(json));
    }
    if tag == TypeTag::Auto {
        let all = BuildOptions::new().with_parse_all(true);
        return coerce(raw, TypeTag::Unspecified, &all, name);
    }
    Ok(Value::String(raw.to_string()))
}

/// Permissive numeric test: the string is numeric if the underlying float
/// parser accepts it (after trimming surrounding whitespace) and yields a
/// finite value. Deliberately looser than a digits-only check: exponents,
/// signs, and surrounding whitespace all pass.
#[must_use]
pub fn is_numeric(raw: &str) -> bool {
    let trimmed = raw.trim();
    !trimmed.is_empty()
        && trimmed
            .parse::<f64>()
            .map(|f| f.is_finite())
            .unwrap_or(false)
}

/// Permissive numeric conversion mirroring lenient form consumers: empty or
/// whitespace-only input converts to 0, unparseable input to NaN. Whole
/// values within range stay integers.
fn to_number(raw: &str) -> Number {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Number::Integer(0);
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return Number::Integer(i);
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_nan() => Number::NaN,
        Ok(f) if f == f64::INFINITY => Number::Infinity,
        Ok(f) if f == f64::NEG_INFINITY => Number::NegativeInfinity,
        Ok(f) => {
            if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
                Number::Integer(f as i64)
            } else {
                Number::Float(f)
            }
        }
        Err(_) => Number::NaN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn untagged(raw: &str, options: &BuildOptions) -> Value {
        coerce(raw, TypeTag::Unspecified, options, "field").unwrap()
    }

    #[test]
    fn test_default_everything_stays_string() {
        let opts = BuildOptions::new();
        assert_eq!(untagged("1", &opts), Value::from("1"));
        assert_eq!(untagged("true", &opts), Value::from("true"));
        assert_eq!(untagged("null", &opts), Value::from("null"));
    }

    #[test]
    fn test_parse_numbers() {
        let opts = BuildOptions::new().with_parse_numbers(true);
        assert_eq!(untagged("1", &opts), Value::from(1));
        assert_eq!(untagged("-2.33", &opts), Value::from(-2.33));
        assert_eq!(untagged("1e3", &opts), Value::from(1000));
        assert_eq!(untagged(" 12 ", &opts), Value::from(12));
        assert_eq!(untagged("12abc", &opts), Value::from("12abc"));
        assert_eq!(untagged("", &opts), Value::from(""));
    }

    #[test]
    fn test_parse_booleans() {
        let opts = BuildOptions::new().with_parse_booleans(true);
        assert_eq!(untagged("true", &opts), Value::from(true));
        assert_eq!(untagged("false", &opts), Value::from(false));
        assert_eq!(untagged("TRUE", &opts), Value::from("TRUE"));
    }

    #[test]
    fn test_parse_nulls() {
        let opts = BuildOptions::new().with_parse_nulls(true);
        assert_eq!(untagged("null", &opts), Value::Null);
        assert_eq!(untagged("nil", &opts), Value::from("nil"));
    }

    #[test]
    fn test_explicit_string_tag_wins() {
        let opts = BuildOptions::new().with_parse_all(true);
        assert_eq!(
            coerce("1", TypeTag::String, &opts, "a").unwrap(),
            Value::from("1")
        );
    }

    #[test]
    fn test_number_tag_is_permissive() {
        let opts = BuildOptions::new();
        assert_eq!(
            coerce("42", TypeTag::Number, &opts, "a").unwrap(),
            Value::from(42)
        );
        assert_eq!(
            coerce("", TypeTag::Number, &opts, "a").unwrap(),
            Value::from(0)
        );
        assert_eq!(
            coerce("abc", TypeTag::Number, &opts, "a").unwrap(),
            Value::Number(Number::NaN)
        );
    }

    #[test]
    fn test_boolean_tag_falsy_set() {
        let opts = BuildOptions::new();
        for falsy in ["false", "null", "undefined", "", "0"] {
            assert_eq!(
                coerce(falsy, TypeTag::Boolean, &opts, "a").unwrap(),
                Value::from(false),
                "expected {:?} to be false",
                falsy
            );
        }
        assert_eq!(
            coerce("anything", TypeTag::Boolean, &opts, "a").unwrap(),
            Value::from(true)
        );
    }

    #[test]
    fn test_null_tag_asymmetry() {
        let opts = BuildOptions::new();
        // every falsy literal nulls out, not just "null"
        for falsy in ["false", "null", "undefined", "", "0"] {
            assert_eq!(
                coerce(falsy, TypeTag::Null, &opts, "a").unwrap(),
                Value::Null
            );
        }
        // anything else keeps the original string
        assert_eq!(
            coerce("keep me", TypeTag::Null, &opts, "a").unwrap(),
            Value::from("keep me")
        );
    }

    #[test]
    fn test_json_tags() {
        let opts = BuildOptions::new();
        let value = coerce(r#"{"x":1}"#, TypeTag::Object, &opts, "a").unwrap();
        assert_eq!(
            value.as_object().unwrap().get("x").unwrap().as_i64(),
            Some(1)
        );

        let value = coerce("[1,2]", TypeTag::Array, &opts, "a").unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);

        let err = coerce("not json", TypeTag::Object, &opts, "payload").unwrap_err();
        match err {
            Error::MalformedJson { name, raw, .. } => {
                assert_eq!(name, "payload");
                assert_eq!(raw, "not json");
            }
            other => panic!("expected MalformedJson, got {:?}", other),
        }
    }

    #[test]
    fn test_auto_tag() {
        let opts = BuildOptions::new(); // all flags off; auto ignores them
        assert_eq!(coerce("1", TypeTag::Auto, &opts, "a").unwrap(), Value::from(1));
        assert_eq!(
            coerce("true", TypeTag::Auto, &opts, "a").unwrap(),
            Value::from(true)
        );
        assert_eq!(coerce("null", TypeTag::Auto, &opts, "a").unwrap(), Value::Null);
        assert_eq!(
            coerce("plain", TypeTag::Auto, &opts, "a").unwrap(),
            Value::from("plain")
        );
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("0"));
        assert!(is_numeric("-1.5"));
        assert!(is_numeric("2e10"));
        assert!(is_numeric("  7  "));
        assert!(!is_numeric(""));
        assert!(!is_numeric("  "));
        assert!(!is_numeric("7up"));
        assert!(!is_numeric("NaN"));
        assert!(!is_numeric("1,000"));
    }
}
