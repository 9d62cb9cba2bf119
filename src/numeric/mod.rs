//! Lenient numeric parsing shared by the predicates and formatters.
//!
//! Form inputs arrive as text that may be partially typed or carry trailing
//! junk (`"12."`, `"40 hours"`). [`parse_float`] reads the longest numeric
//! prefix and reports `NaN` when there is none, so callers can map the
//! result onto their own fallback instead of handling an error.

use once_cell::sync::Lazy;
use regex::Regex;

static FLOAT_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("float prefix pattern is valid")
});

/// Parses the leading numeric prefix of `text`, ignoring leading whitespace.
///
/// Returns `f64::NAN` when no prefix parses.
///
/// ```
/// use budget_utils::numeric::parse_float;
///
/// assert_eq!(parse_float("  12.5abc"), 12.5);
/// assert!(parse_float("abc").is_nan());
/// ```
pub fn parse_float(text: &str) -> f64 {
    let trimmed = text.trim_start();
    FLOAT_PREFIX
        .find(trimmed)
        .and_then(|prefix| prefix.as_str().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}
