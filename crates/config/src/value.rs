//! Scalar configuration values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A scalar supplied for a configuration field.
///
/// Values are never interpreted beyond display: a font size given as text is
/// passed through to the page exactly as written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Value {
    /// Whether a browser script would treat this value as truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(s) => !s.is_empty(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Self::Number(n) => write_number(f, *n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Render a number the way string interpolation in a browser script does.
///
/// Zero of either sign is `0`; magnitudes from `1e21` up and below `1e-6`
/// use exponent form with an explicit sign (`1e+21`, `1.5e-7`). Everything
/// else is plain decimal, where f64 `Display` already drops a zero fraction.
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n == 0.0 {
        return f.write_str("0");
    }
    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) || n.is_nan() {
        return write!(f, "{n}");
    }
    let exp = format!("{n:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => write!(f, "{mantissa}e+{power}"),
        _ => f.write_str(&exp),
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_display_without_zero_fraction() {
        assert_eq!(Value::from(20).to_string(), "20");
        assert_eq!(Value::from(16.5).to_string(), "16.5");
        assert_eq!(Value::Number(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Value::Number(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn numbers_display_like_script_interpolation() {
        assert_eq!(Value::Number(-0.0).to_string(), "0");
        assert_eq!(Value::Number(1e21).to_string(), "1e+21");
        assert_eq!(Value::Number(-2.5e22).to_string(), "-2.5e+22");
        assert_eq!(Value::Number(1e20).to_string(), "100000000000000000000");
        assert_eq!(Value::Number(1.5e-7).to_string(), "1.5e-7");
        assert_eq!(Value::Number(0.000001).to_string(), "0.000001");
        assert_eq!(Value::Number(-3.0).to_string(), "-3");
    }

    #[test]
    fn truthiness_matches_script_rules() {
        assert!(!Value::from("").is_truthy());
        assert!(!Value::from(0).is_truthy());
        assert!(!Value::Number(f64::NAN).is_truthy());
        assert!(!Value::from(false).is_truthy());
        assert!(Value::from("0").is_truthy());
        assert!(Value::from(-1).is_truthy());
        assert!(Value::from(true).is_truthy());
    }

    #[test]
    fn untagged_decoding_picks_the_scalar_kind() {
        let v: Value = serde_json::from_str("20").unwrap();
        assert_eq!(v, Value::Number(20.0));
        let v: Value = serde_json::from_str("\"20\"").unwrap();
        assert_eq!(v, Value::Text("20".into()));
        let v: Value = serde_json::from_str("true").unwrap();
        assert_eq!(v, Value::Bool(true));
    }
}
