//! Typed cell values
//!
//! Fields are inferred into one of three types when text enters the table:
//! numeric-looking fields become numbers, `true`/`false` become booleans,
//! everything else stays text. The same inference runs on parse and on every
//! manual cell edit, so the table never mixes raw and typed representations
//! of the same column.

use std::fmt;

/// A single cell value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Value {
    /// Infer a typed value from raw field text
    ///
    /// `true`/`false` (exact, lowercase) become `Bool`, numeric-looking
    /// fields become `Number`, everything else stays `Text`. Callers handle
    /// the empty string separately (an empty field is an absent value, not
    /// an empty text value).
    pub fn infer(raw: &str) -> Self {
        match raw {
            "true" => return Value::Bool(true),
            "false" => return Value::Bool(false),
            _ => {}
        }

        if looks_numeric(raw) {
            if let Ok(n) = raw.parse::<f64>() {
                return Value::Number(n);
            }
        }

        Value::Text(raw.to_string())
    }

    /// Check if this is a numeric value (for right-alignment in the grid)
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }
}

/// Gate before `f64::parse`: requires at least one digit and only
/// number-shaped characters, so words like "inf" and "NaN" stay text.
fn looks_numeric(s: &str) -> bool {
    !s.is_empty()
        && s.bytes().any(|b| b.is_ascii_digit())
        && s.bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+' | b'e' | b'E'))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{}", s),
            // Integral numbers print without a trailing ".0" so a parsed
            // "30" round-trips as "30"
            Value::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            Value::Number(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}
