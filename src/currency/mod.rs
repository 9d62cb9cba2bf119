use serde::{Deserialize, Serialize};

use crate::numeric::parse_float;

/// Rendered when a currency amount cannot be parsed.
pub const CURRENCY_FALLBACK: &str = "$0.00";

const PERCENT_PRECISION: u8 = 1;
const INFINITY_GLYPH: &str = "∞";

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

/// Separators used when rendering numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum NegativeStyle {
    #[default]
    Sign,
    Parentheses,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyDisplay {
    #[default]
    Symbol,
    Code,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormatOptions {
    pub currency_display: CurrencyDisplay,
    pub negative_style: NegativeStyle,
}

/// An amount handed to the currency formatter, either already numeric or as
/// raw input text.
#[derive(Debug, Clone, PartialEq)]
pub enum CurrencyInput {
    Number(f64),
    Text(String),
}

impl CurrencyInput {
    /// Numeric value, `NaN` when the text has no numeric prefix.
    pub fn amount(&self) -> f64 {
        match self {
            CurrencyInput::Number(value) => *value,
            CurrencyInput::Text(text) => parse_float(text),
        }
    }
}

impl From<f64> for CurrencyInput {
    fn from(value: f64) -> Self {
        CurrencyInput::Number(value)
    }
}

impl From<f32> for CurrencyInput {
    fn from(value: f32) -> Self {
        CurrencyInput::Number(value as f64)
    }
}

impl From<i32> for CurrencyInput {
    fn from(value: i32) -> Self {
        CurrencyInput::Number(value as f64)
    }
}

impl From<i64> for CurrencyInput {
    fn from(value: i64) -> Self {
        CurrencyInput::Number(value as f64)
    }
}

impl From<u32> for CurrencyInput {
    fn from(value: u32) -> Self {
        CurrencyInput::Number(value as f64)
    }
}

impl From<&str> for CurrencyInput {
    fn from(value: &str) -> Self {
        CurrencyInput::Text(value.to_string())
    }
}

impl From<String> for CurrencyInput {
    fn from(value: String) -> Self {
        CurrencyInput::Text(value)
    }
}

impl From<&String> for CurrencyInput {
    fn from(value: &String) -> Self {
        CurrencyInput::Text(value.clone())
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "AUD" => "A$".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// US dollars with grouping and two fraction digits.
///
/// Text input is parsed leniently; anything without a numeric prefix renders
/// as [`CURRENCY_FALLBACK`].
///
/// ```
/// use budget_utils::currency::format_currency;
///
/// assert_eq!(format_currency("1234.5"), "$1,234.50");
/// assert_eq!(format_currency("n/a"), "$0.00");
/// ```
pub fn format_currency(value: impl Into<CurrencyInput>) -> String {
    let amount = value.into().amount();
    if amount.is_nan() {
        return CURRENCY_FALLBACK.to_string();
    }
    format_currency_with(
        amount,
        &CurrencyCode::default(),
        &LocaleConfig::default(),
        &FormatOptions::default(),
    )
}

/// Renders a natural-unit percentage (`42.3` is 42.3%) with one fraction digit.
pub fn format_percentage(value: f64) -> String {
    format_percentage_with(value, &LocaleConfig::default(), PERCENT_PRECISION)
}

pub fn format_percentage_with(value: f64, locale: &LocaleConfig, precision: u8) -> String {
    if value.is_nan() {
        return "NaN%".to_string();
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}{INFINITY_GLYPH}%");
    }
    format!("{}%", format_number(locale, value, precision))
}

pub fn format_currency_with(
    amount: f64,
    code: &CurrencyCode,
    locale: &LocaleConfig,
    options: &FormatOptions,
) -> String {
    if amount.is_nan() {
        return CURRENCY_FALLBACK.to_string();
    }
    let body = if amount.is_infinite() {
        INFINITY_GLYPH.to_string()
    } else {
        format_number(locale, amount.abs(), minor_units_for(code.as_str()))
    };
    let unsigned = match options.currency_display {
        CurrencyDisplay::Symbol => format!("{}{}", symbol_for(code.as_str()), body),
        CurrencyDisplay::Code => format!("{} {}", code.as_str(), body),
    };
    if amount < 0.0 {
        match options.negative_style {
            NegativeStyle::Sign => format!("-{}", unsigned),
            NegativeStyle::Parentheses => format!("({})", unsigned),
        }
    } else {
        unsigned
    }
}

/// Groups and rounds `value` to `precision` fraction digits.
///
/// Rounding is half away from zero on the shortest decimal form of the
/// value, so `1.015` renders as `1.02` even though its binary expansion is
/// slightly below the tie.
pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let (int_part, frac_part) = round_decimal(value.abs(), precision as usize);
    let grouped = group_digits(&int_part, locale.grouping_separator);
    let sign = if value < 0.0 { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}{}{}", sign, grouped, locale.decimal_separator, frac_part)
    }
}

/// Integer and fraction digits of a finite, non-negative `value` rounded
/// half away from zero.
fn round_decimal(value: f64, precision: usize) -> (String, String) {
    // `{:e}` yields the shortest digits that round-trip, e.g. `1.015e0`.
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i64 = exponent.parse().unwrap_or(0);
    let mut digits: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();

    let mut int_len = exponent + 1;
    if int_len < 0 {
        let mut padded = vec![0; (-int_len) as usize];
        padded.append(&mut digits);
        digits = padded;
        int_len = 0;
    }
    let int_len = int_len as usize;
    let keep = int_len + precision;

    if digits.len() > keep {
        let round_up = digits[keep] >= 5;
        digits.truncate(keep);
        if round_up {
            let mut idx = keep;
            loop {
                if idx == 0 {
                    digits.insert(0, 1);
                    break;
                }
                idx -= 1;
                if digits[idx] == 9 {
                    digits[idx] = 0;
                } else {
                    digits[idx] += 1;
                    break;
                }
            }
        }
    }
    digits.resize(digits.len().max(keep), 0);

    let split = digits.len() - precision;
    let render = |slice: &[u8]| slice.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    let mut int_part = render(&digits[..split]);
    if int_part.is_empty() {
        int_part.push('0');
    }
    (int_part, render(&digits[split..]))
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.chars().count();
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && (len - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_shortest_decimal_half_away_from_zero() {
        assert_eq!(round_decimal(1.015, 2), ("1".into(), "02".into()));
        assert_eq!(round_decimal(0.125, 2), ("0".into(), "13".into()));
        assert_eq!(round_decimal(999.995, 2), ("1000".into(), "00".into()));
        assert_eq!(round_decimal(0.0004, 1), ("0".into(), "0".into()));
        assert_eq!(round_decimal(0.0, 2), ("0".into(), "00".into()));
        assert_eq!(round_decimal(1e21, 0), ("1000000000000000000000".into(), String::new()));
        assert_eq!(round_decimal(7.5, 0), ("8".into(), String::new()));
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_digits("1", ','), "1");
        assert_eq!(group_digits("123", ','), "123");
        assert_eq!(group_digits("1234", ','), "1,234");
        assert_eq!(group_digits("1234567", ','), "1,234,567");
    }

    #[test]
    fn format_number_respects_locale_separators() {
        let locale = LocaleConfig {
            language_tag: "de-DE".into(),
            decimal_separator: ',',
            grouping_separator: '.',
        };
        assert_eq!(format_number(&locale, 1234567.891, 2), "1.234.567,89");
        assert_eq!(format_number(&locale, -1234.0, 0), "-1.234");
    }

    #[test]
    fn currency_defaults_to_usd() {
        assert_eq!(format_currency(0), "$0.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency("1234.5"), "$1,234.50");
        assert_eq!(format_currency("not-a-number"), "$0.00");
        assert_eq!(format_currency(""), "$0.00");
    }

    #[test]
    fn negative_currency_puts_sign_before_symbol() {
        assert_eq!(format_currency(-1234.5), "-$1,234.50");
        let options = FormatOptions {
            currency_display: CurrencyDisplay::Symbol,
            negative_style: NegativeStyle::Parentheses,
        };
        let rendered = format_currency_with(
            -42.0,
            &CurrencyCode::default(),
            &LocaleConfig::default(),
            &options,
        );
        assert_eq!(rendered, "($42.00)");
    }

    #[test]
    fn currency_precision_follows_code() {
        let options = FormatOptions {
            currency_display: CurrencyDisplay::Code,
            negative_style: NegativeStyle::Sign,
        };
        let rendered = format_currency_with(
            1500.4,
            &CurrencyCode::new("jpy"),
            &LocaleConfig::default(),
            &options,
        );
        assert_eq!(rendered, "JPY 1,500");
    }

    #[test]
    fn infinite_amounts_use_glyph() {
        assert_eq!(format_currency(f64::INFINITY), "$∞");
        assert_eq!(format_currency("-Infinity"), "-$∞");
    }

    #[test]
    fn percentages_keep_one_fraction_digit() {
        assert_eq!(format_percentage(50.0), "50.0%");
        assert_eq!(format_percentage(0.0), "0.0%");
        assert_eq!(format_percentage(42.3), "42.3%");
        assert_eq!(format_percentage(-12.5), "-12.5%");
        assert_eq!(format_percentage(1250.0), "1,250.0%");
    }

    #[test]
    fn non_finite_percentages() {
        assert_eq!(format_percentage(f64::NAN), "NaN%");
        assert_eq!(format_percentage(f64::INFINITY), "∞%");
        assert_eq!(format_percentage(f64::NEG_INFINITY), "-∞%");
    }
}
