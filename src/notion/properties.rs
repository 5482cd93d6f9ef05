//! Notion property payload decoding.
//!
//! The query endpoint returns each page property as a `type`-tagged object.
//! Only the shapes this dashboard meets are modeled as explicit variants;
//! unknown property types decode to a catch-all and extract as zero or no
//! label. A property object without a `type` tag falls back to the bare
//! `{"number": ...}` shape.

use serde::Deserialize;

/// One page property as returned by the query endpoint.
///
/// Deserialization tries the tagged shape first and falls back to the bare
/// numeric container, so decoding a property map never fails on shape alone.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Property {
    Typed(TypedProperty),
    /// Untyped `{"number": ...}` container, seen on some rollup sources.
    Bare { number: Option<f64> },
}

/// The `type`-tagged property shapes.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TypedProperty {
    Number { number: Option<f64> },
    Rollup { rollup: Rollup },
    Status { status: Option<StatusOption> },
    Select { select: Option<SelectOption> },
    Title { title: Vec<TitleFragment> },
    /// Any property type this dashboard does not consume.
    #[serde(other)]
    Unsupported,
}

/// Rollup payload: a computed aggregate over related records.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Rollup {
    Number { number: Option<f64> },
    Array { array: Vec<RollupItem> },
    #[serde(other)]
    Unsupported,
}

/// One element of a rollup array. An element may itself be a rollup, but
/// only of numeric type; deeper nesting is not representable.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RollupItem {
    Number { number: Option<f64> },
    Rollup { rollup: NestedRollup },
    Status { status: Option<StatusOption> },
    #[serde(other)]
    Unsupported,
}

/// Rollup nested inside a rollup array element. Numeric only.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NestedRollup {
    Number { number: Option<f64> },
    #[serde(other)]
    Unsupported,
}

/// A status option label. Extra fields (id, color) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusOption {
    pub name: String,
}

/// A select option label.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectOption {
    pub name: String,
}

/// One rich-text fragment of a title property.
#[derive(Debug, Clone, Deserialize)]
pub struct TitleFragment {
    #[serde(default)]
    pub plain_text: String,
}

impl Property {
    /// Resolve a numeric value out of whatever shape the property has:
    /// direct number, rollup of number, rollup of array (summed, one level
    /// of nested rollup allowed), or the bare numeric container. Absent and
    /// null values resolve to 0.0; absence and zero are indistinguishable.
    pub fn number(&self) -> f64 {
        match self {
            Property::Typed(TypedProperty::Number { number }) => number.unwrap_or(0.0),
            Property::Typed(TypedProperty::Rollup { rollup }) => rollup.number(),
            Property::Typed(_) => 0.0,
            Property::Bare { number } => number.unwrap_or(0.0),
        }
    }

    /// Status label carried by the first element of a rollup array, when
    /// that element is status-typed.
    pub fn rollup_status(&self) -> Option<&str> {
        let Property::Typed(TypedProperty::Rollup { rollup: Rollup::Array { array } }) = self
        else {
            return None;
        };
        match array.first() {
            Some(RollupItem::Status { status }) => status.as_ref().map(|s| s.name.as_str()),
            _ => None,
        }
    }

    /// Label of a direct status property.
    pub fn status_label(&self) -> Option<&str> {
        match self {
            Property::Typed(TypedProperty::Status { status }) => {
                status.as_ref().map(|s| s.name.as_str())
            }
            _ => None,
        }
    }

    /// Label of a select property.
    pub fn select_label(&self) -> Option<&str> {
        match self {
            Property::Typed(TypedProperty::Select { select }) => {
                select.as_ref().map(|s| s.name.as_str())
            }
            _ => None,
        }
    }

    /// Plain text of the first title fragment, when non-empty.
    pub fn title_text(&self) -> Option<&str> {
        match self {
            Property::Typed(TypedProperty::Title { title }) => title
                .first()
                .map(|f| f.plain_text.as_str())
                .filter(|t| !t.is_empty()),
            _ => None,
        }
    }
}

impl Rollup {
    fn number(&self) -> f64 {
        match self {
            Rollup::Number { number } => number.unwrap_or(0.0),
            Rollup::Array { array } => array.iter().map(RollupItem::number).sum(),
            Rollup::Unsupported => 0.0,
        }
    }
}

impl RollupItem {
    fn number(&self) -> f64 {
        match self {
            RollupItem::Number { number } => number.unwrap_or(0.0),
            RollupItem::Rollup { rollup } => match rollup {
                NestedRollup::Number { number } => number.unwrap_or(0.0),
                NestedRollup::Unsupported => 0.0,
            },
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn decode(value: serde_json::Value) -> Property {
        serde_json::from_value(value).expect("property decodes")
    }

    #[test]
    fn direct_number_returned_unchanged() {
        let p = decode(json!({"id": "abc", "type": "number", "number": 1234.5}));
        assert_eq!(p.number(), 1234.5);
    }

    #[test]
    fn null_number_is_zero() {
        let p = decode(json!({"type": "number", "number": null}));
        assert_eq!(p.number(), 0.0);
    }

    #[test]
    fn rollup_of_number() {
        let p = decode(json!({"type": "rollup", "rollup": {"type": "number", "number": 7.5}}));
        assert_eq!(p.number(), 7.5);
    }

    #[test]
    fn rollup_array_sums_plain_numbers() {
        let p = decode(json!({
            "type": "rollup",
            "rollup": {"type": "array", "array": [
                {"type": "number", "number": 3.0},
                {"type": "number", "number": 4.0},
                {"type": "number", "number": 5.0},
            ]}
        }));
        assert_eq!(p.number(), 12.0);
    }

    #[test]
    fn rollup_array_sums_one_level_of_nested_rollup() {
        let p = decode(json!({
            "type": "rollup",
            "rollup": {"type": "array", "array": [
                {"type": "number", "number": 3.0},
                {"type": "rollup", "rollup": {"type": "number", "number": 4.0}},
            ]}
        }));
        assert_eq!(p.number(), 7.0);
    }

    #[test]
    fn rollup_array_skips_nulls_and_foreign_items() {
        let p = decode(json!({
            "type": "rollup",
            "rollup": {"type": "array", "array": [
                {"type": "number", "number": null},
                {"type": "status", "status": {"name": "Entrada"}},
                {"type": "rollup", "rollup": {"type": "date", "date": null}},
                {"type": "number", "number": 2.5},
            ]}
        }));
        assert_eq!(p.number(), 2.5);
    }

    #[test]
    fn bare_number_fallback() {
        let p = decode(json!({"number": 9.5}));
        assert_eq!(p.number(), 9.5);
    }

    #[test]
    fn empty_container_is_zero() {
        let p = decode(json!({}));
        assert_eq!(p.number(), 0.0);
    }

    #[test]
    fn unsupported_type_is_zero() {
        let p = decode(json!({"type": "checkbox", "checkbox": true}));
        assert_eq!(p.number(), 0.0);
    }

    #[test]
    fn unsupported_rollup_type_is_zero() {
        let p = decode(json!({"type": "rollup", "rollup": {"type": "date", "date": null}}));
        assert_eq!(p.number(), 0.0);
    }

    #[test]
    fn rollup_status_reads_first_element() {
        let p = decode(json!({
            "type": "rollup",
            "rollup": {"type": "array", "array": [
                {"type": "status", "status": {"name": "Contratado", "color": "green"}},
                {"type": "status", "status": {"name": "Entrada"}},
            ]}
        }));
        assert_eq!(p.rollup_status(), Some("Contratado"));
    }

    #[test]
    fn rollup_status_empty_array_has_no_label() {
        let p = decode(json!({"type": "rollup", "rollup": {"type": "array", "array": []}}));
        assert_eq!(p.rollup_status(), None);
    }

    #[test]
    fn rollup_status_ignores_non_status_first_element() {
        let p = decode(json!({
            "type": "rollup",
            "rollup": {"type": "array", "array": [{"type": "number", "number": 1.0}]}
        }));
        assert_eq!(p.rollup_status(), None);
    }

    #[test]
    fn direct_status_label() {
        let p = decode(json!({"type": "status", "status": {"name": "Avançado", "color": "purple"}}));
        assert_eq!(p.status_label(), Some("Avançado"));
        assert_eq!(p.number(), 0.0);
    }

    #[test]
    fn null_status_has_no_label() {
        let p = decode(json!({"type": "status", "status": null}));
        assert_eq!(p.status_label(), None);
    }

    #[test]
    fn select_label() {
        let p = decode(json!({"type": "select", "select": {"name": "Belo Horizonte"}}));
        assert_eq!(p.select_label(), Some("Belo Horizonte"));
    }

    #[test]
    fn title_takes_first_fragment() {
        let p = decode(json!({
            "type": "title",
            "title": [
                {"type": "text", "plain_text": "Residencial Aurora"},
                {"type": "text", "plain_text": " (fase 2)"},
            ]
        }));
        assert_eq!(p.title_text(), Some("Residencial Aurora"));
    }

    #[test]
    fn empty_title_has_no_text() {
        let p = decode(json!({"type": "title", "title": []}));
        assert_eq!(p.title_text(), None);
    }
}
