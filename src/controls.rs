//! Pure decisions for the widget layer.
//!
//! The core never touches UI controls; it only exchanges field entries and
//! flattened paths with a surrounding widget layer. Two of that layer's
//! decisions are pure functions over in-memory data and live here so every
//! host can share them:
//!
//! - [`write_action`]: given a control kind, its current value, and the
//!   flattened value for its path, decide what to write
//! - [`unchecked_entry`]: given an unchecked checkbox, decide whether to
//!   synthesize a field entry for it and with which value
//!
//! Everything stateful (finding controls, reading attributes, performing the
//! write) stays in the host.

use crate::{BuildOptions, FieldEntry, FlatValue, Value};

/// The closed set of control kinds the population logic distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlKind {
    /// Text inputs, textareas, buttons, submits, and anything else that takes
    /// a plain value assignment.
    Text,
    /// A radio button, toggled by equality with its own value.
    Radio,
    /// A checkbox, checked when any populated value equals its own value.
    Checkbox,
    /// A single-choice select.
    Select,
    /// A multi-choice select, toggling each option by membership.
    MultiSelect,
    /// A non-form element (label, div); receives the value as text content.
    Element,
}

/// What the widget layer should do to one control.
#[derive(Clone, Debug, PartialEq)]
pub enum WriteAction {
    /// Assign the value verbatim (text inputs, single selects).
    SetValue(String),
    /// Check or uncheck the control (radios, checkboxes).
    SetChecked(bool),
    /// Select exactly the options whose values appear in the list.
    SelectValues(Vec<String>),
    /// Replace the element's text content.
    SetText(String),
}

/// Decides the write for one control given the flattened value at its path.
///
/// `control_value` is the control's own `value` attribute, used for the
/// equality toggling of radios, checkboxes, and multi-selects. Null values
/// render as empty text, matching how forms treat missing data.
///
/// # Examples
///
/// ```rust
/// use formtree::controls::{write_action, ControlKind, WriteAction};
/// use formtree::{FlatValue, Value};
///
/// let populated = FlatValue::Many(vec![Value::from("music"), Value::from("art")]);
/// assert_eq!(
///     write_action(ControlKind::Checkbox, "music", &populated),
///     WriteAction::SetChecked(true)
/// );
/// assert_eq!(
///     write_action(ControlKind::Checkbox, "sports", &populated),
///     WriteAction::SetChecked(false)
/// );
/// ```
#[must_use]
pub fn write_action(kind: ControlKind, control_value: &str, new_value: &FlatValue) -> WriteAction {
    match kind {
        ControlKind::Radio => {
            let rendered = render_single(new_value);
            WriteAction::SetChecked(!control_value.is_empty() && rendered == control_value)
        }
        ControlKind::Checkbox => WriteAction::SetChecked(
            new_value
                .as_slice()
                .iter()
                .any(|v| render(v) == control_value),
        ),
        ControlKind::MultiSelect => {
            WriteAction::SelectValues(new_value.as_slice().iter().map(render).collect())
        }
        ControlKind::Select => WriteAction::SetValue(render_single(new_value)),
        ControlKind::Text => WriteAction::SetValue(render_single(new_value)),
        ControlKind::Element => WriteAction::SetText(render_single(new_value)),
    }
}

/// Synthesizes the entry for an unchecked checkbox, if any.
///
/// A per-control unchecked value (typically carried as a data attribute)
/// takes precedence over the global
/// [`BuildOptions::checkbox_unchecked_value`] fallback; with neither set the
/// control contributes nothing.
///
/// # Examples
///
/// ```rust
/// use formtree::controls::unchecked_entry;
/// use formtree::{BuildOptions, FieldEntry};
///
/// let options = BuildOptions::new().with_checkbox_unchecked_value("no");
/// assert_eq!(
///     unchecked_entry("agree", Some("never"), &options),
///     Some(FieldEntry::new("agree", "never"))
/// );
/// assert_eq!(
///     unchecked_entry("agree", None, &options),
///     Some(FieldEntry::new("agree", "no"))
/// );
/// assert_eq!(unchecked_entry("agree", None, &BuildOptions::new()), None);
/// ```
#[must_use]
pub fn unchecked_entry(
    name: &str,
    control_unchecked_value: Option<&str>,
    options: &BuildOptions,
) -> Option<FieldEntry> {
    control_unchecked_value
        .map(|value| FieldEntry::new(name, value))
        .or_else(|| {
            options
                .checkbox_unchecked_value
                .as_deref()
                .map(|value| FieldEntry::new(name, value))
        })
}

/// Renders one value as control text; null becomes the empty string.
fn render(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Renders a flattened value as a single control text, joining collections
/// the way array values are rendered.
fn render_single(value: &FlatValue) -> String {
    match value {
        FlatValue::Single(v) => render(v),
        FlatValue::Many(vs) => vs
            .iter()
            .map(render)
            .collect::<Vec<_>>()
            .join(","),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(v: &str) -> FlatValue {
        FlatValue::Single(Value::from(v))
    }

    #[test]
    fn test_radio_checks_on_equality() {
        assert_eq!(
            write_action(ControlKind::Radio, "yes", &single("yes")),
            WriteAction::SetChecked(true)
        );
        assert_eq!(
            write_action(ControlKind::Radio, "yes", &single("no")),
            WriteAction::SetChecked(false)
        );
        // a radio with no value of its own never checks
        assert_eq!(
            write_action(ControlKind::Radio, "", &single("")),
            WriteAction::SetChecked(false)
        );
    }

    #[test]
    fn test_checkbox_membership() {
        let values = FlatValue::Many(vec![Value::from("music"), Value::from("software")]);
        assert_eq!(
            write_action(ControlKind::Checkbox, "software", &values),
            WriteAction::SetChecked(true)
        );
        assert_eq!(
            write_action(ControlKind::Checkbox, "films", &values),
            WriteAction::SetChecked(false)
        );
    }

    #[test]
    fn test_multi_select_collects_values() {
        let values = FlatValue::Many(vec![Value::from("a"), Value::from("b")]);
        assert_eq!(
            write_action(ControlKind::MultiSelect, "", &values),
            WriteAction::SelectValues(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_text_assignment_and_null() {
        assert_eq!(
            write_action(ControlKind::Text, "", &single("hello")),
            WriteAction::SetValue("hello".to_string())
        );
        assert_eq!(
            write_action(ControlKind::Text, "", &FlatValue::Single(Value::Null)),
            WriteAction::SetValue(String::new())
        );
        assert_eq!(
            write_action(ControlKind::Element, "", &single("label text")),
            WriteAction::SetText("label text".to_string())
        );
    }

    #[test]
    fn test_unchecked_entry_precedence() {
        let options = BuildOptions::new().with_checkbox_unchecked_value("0");
        assert_eq!(
            unchecked_entry("opt", Some("off"), &options),
            Some(FieldEntry::new("opt", "off"))
        );
        assert_eq!(
            unchecked_entry("opt", None, &options),
            Some(FieldEntry::new("opt", "0"))
        );
        assert_eq!(unchecked_entry("opt", None, &BuildOptions::new()), None);
    }
}
