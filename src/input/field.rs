use serde::Deserialize;
use serde::Serialize;

/// A single user-entered value: either already numeric or free text.
///
/// In JSON input a field may be a number or a string, so `12` and `"12"`
/// are both accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Field {
    Number(f64),
    Text(String),
}

impl Field {
    /// Blank text counts as a missing field.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.trim().is_empty())
    }
    /// Finite numeric value, if the field holds one.
    pub fn value(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
        };
        value.filter(|n| n.is_finite())
    }
}

impl From<f64> for Field {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Field {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_text() {
        assert_eq!(Field::from(" 12.5 ").value(), Some(12.5));
        assert_eq!(Field::from("-3").value(), Some(-3.));
        assert_eq!(Field::from(7.).value(), Some(7.));
    }

    #[test]
    fn rejects_garbage_and_non_finite() {
        assert_eq!(Field::from("abc").value(), None);
        assert_eq!(Field::from("NaN").value(), None);
        assert_eq!(Field::from("inf").value(), None);
        assert_eq!(Field::from(f64::NAN).value(), None);
    }

    #[test]
    fn blank_text() {
        assert!(Field::from("   ").is_blank());
        assert!(!Field::from("0").is_blank());
        assert!(!Field::from(0.).is_blank());
    }

    #[test]
    fn json_accepts_numbers_and_strings() {
        let fields = serde_json::from_str::<Vec<Field>>(r#"[4, "6", "x"]"#).unwrap();
        assert_eq!(fields, vec![Field::Number(4.), Field::from("6"), Field::from("x")]);
    }
}
