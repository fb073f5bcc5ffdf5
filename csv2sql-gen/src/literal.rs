//! Literal inference: deciding whether a CSV cell appears in SQL as an
//! unquoted number or a quoted string.
//!
//! The classification is a total function — every cell maps to exactly one
//! [`Literal`] variant, with no implicit coercions. In particular the empty
//! string is a string literal (`''`), not numeric zero.

use std::fmt;

/// Largest magnitude at which every integer is exactly representable in an
/// `f64` (2^53). Integral values beyond this cannot round-trip through the
/// parse, so they stay string literals.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// SQL rendering of a single CSV cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Whole number; rendered unquoted.
    Integer(i64),
    /// Number with a non-zero fractional part; rendered unquoted using the
    /// shortest round-trip decimal representation.
    Float(f64),
    /// Anything that is not a finite number, including the empty string;
    /// rendered single-quoted.
    Text(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Integer(value) => write!(f, "{value}"),
            Literal::Float(value) => write!(f, "{value}"),
            Literal::Text(text) => write!(f, "{}", quote_text(text)),
        }
    }
}

/// Classify a cell's text as an integer, a float, or quoted text.
///
/// Numeric classification tolerates surrounding whitespace, a leading sign,
/// and exponent notation, matching what `f64` parsing accepts. Non-finite
/// parses (`inf`, `nan`) and integral values beyond the exact-`f64` range
/// fall through to [`Literal::Text`] so no cell value is silently altered.
pub fn infer_literal(cell: &str) -> Literal {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Literal::Text(cell.to_string());
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => {
            if value.fract() == 0.0 {
                if value.abs() <= MAX_EXACT_INTEGER {
                    Literal::Integer(value as i64)
                } else {
                    Literal::Text(cell.to_string())
                }
            } else {
                Literal::Float(value)
            }
        }
        _ => Literal::Text(cell.to_string()),
    }
}

/// Backtick-quote a SQL identifier (MySQL dialect).
///
/// The name is not validated against identifier rules and embedded
/// backticks are not escaped; table and field names are emitted exactly as
/// they appear in the source.
pub fn quote_ident(name: &str) -> String {
    format!("`{name}`")
}

/// Single-quote a string literal.
///
/// Known limitation: embedded single quotes are NOT escaped, so a cell
/// containing `'` produces invalid SQL. This mirrors the permissive
/// behavior this tool is specified to preserve.
pub fn quote_text(text: &str) -> String {
    format!("'{text}'")
}
