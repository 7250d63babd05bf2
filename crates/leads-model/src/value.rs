//! Tagged cell values.

use serde::{Deserialize, Serialize};

/// A normalized cell.
///
/// Normalization never fails: a cell that cannot be coerced to the shape
/// its field expects keeps its raw text, and the validator reports the
/// mismatch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// No value (missing column, empty or whitespace-only cell).
    #[default]
    Absent,
    Text(String),
    Number(f64),
    TextList(Vec<String>),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, CellValue::Absent)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            CellValue::TextList(values) => Some(values),
            _ => None,
        }
    }

    /// Name of the value's shape, as used in type-mismatch messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Absent => "undefined",
            CellValue::Text(_) => "string",
            CellValue::Number(_) => "number",
            CellValue::TextList(_) => "array",
        }
    }

    /// Renders the value as a delimited-file cell.
    ///
    /// Lists are joined with `,` and numbers use their shortest decimal
    /// form, so the rendered cell normalizes back to the same value.
    pub fn render(&self) -> String {
        match self {
            CellValue::Absent => String::new(),
            CellValue::Text(value) => value.clone(),
            CellValue::Number(value) => value.to_string(),
            CellValue::TextList(values) => values.join(","),
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<Vec<String>> for CellValue {
    fn from(values: Vec<String>) -> Self {
        CellValue::TextList(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        assert_eq!(CellValue::Absent.render(), "");
        assert_eq!(CellValue::text("Mohali").render(), "Mohali");
        assert_eq!(CellValue::Number(500000.0).render(), "500000");
        assert_eq!(CellValue::Number(2.5).render(), "2.5");
        assert_eq!(
            CellValue::TextList(vec!["hot".into(), "nri".into()]).render(),
            "hot,nri"
        );
    }

    #[test]
    fn test_type_names() {
        assert_eq!(CellValue::Absent.type_name(), "undefined");
        assert_eq!(CellValue::text("x").type_name(), "string");
        assert_eq!(CellValue::Number(1.0).type_name(), "number");
        assert_eq!(CellValue::TextList(vec![]).type_name(), "array");
    }

    #[test]
    fn test_serde_untagged() {
        let values = vec![
            CellValue::Absent,
            CellValue::text("Two"),
            CellValue::Number(300000.0),
            CellValue::TextList(vec!["a".into()]),
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[null,"Two",300000.0,["a"]]"#);
        let back: Vec<CellValue> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, values);
    }
}
