//! Canonical identifier rendering.
//!
//! Spreadsheet readers hand back the same card number as `123`, `123.0` or
//! `"123"` depending on the column's inferred type. All three must compare
//! equal, so integral numbers are rendered as plain digit strings.

use scc_model::{CanonicalId, RawValue};

/// Significant digits kept when rendering a non-integral float.
const FLOAT_SIGNIFICANT_DIGITS: usize = 15;

/// Decimal exponents outside `MIN_FIXED_EXPONENT..FLOAT_SIGNIFICANT_DIGITS`
/// switch to exponent notation, as printf's `%g` does.
const MIN_FIXED_EXPONENT: i32 = -4;

/// Converts a raw cell to its canonical identifier.
///
/// Returns `None` only for null markers (null, NaN). Any other value,
/// whitespace-only text included, yields an identifier.
pub fn normalize(value: &RawValue) -> Option<CanonicalId> {
    let rendered = match value {
        RawValue::Null => return None,
        RawValue::Int(v) => v.to_string(),
        RawValue::Float(v) => format_float(*v)?,
        RawValue::Bool(true) => "True".to_string(),
        RawValue::Bool(false) => "False".to_string(),
        RawValue::Text(text) => return Some(CanonicalId::new(text.as_str())),
    };
    Some(CanonicalId::new(rendered))
}

/// Formats a float the way identifiers are compared.
///
/// - integral values: digits only (`123.0` -> `"123"`, `-0.0` -> `"0"`)
/// - other finite values: `%.15g` (`0.1 + 0.2` -> `"0.3"`, `1e-5` -> `"1e-05"`)
/// - infinities: `"inf"` / `"-inf"`
/// - NaN: `None`
pub fn format_float(v: f64) -> Option<String> {
    if v.is_nan() {
        return None;
    }
    if v.is_infinite() {
        let text = if v.is_sign_positive() { "inf" } else { "-inf" };
        return Some(text.to_string());
    }
    if v.fract() == 0.0 {
        return Some(format_integral(v));
    }
    Some(format_general(v, FLOAT_SIGNIFICANT_DIGITS))
}

fn format_integral(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v:.0}")
}

/// `%.<digits>g`: fixed or exponent notation depending on the decimal
/// exponent after rounding, trailing zeros removed.
fn format_general(v: f64, digits: usize) -> String {
    let precision = digits.saturating_sub(1);
    let scientific = format!("{v:.precision$e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let max_fixed = i32::try_from(digits).unwrap_or(i32::MAX);

    if exponent < MIN_FIXED_EXPONENT || exponent >= max_fixed {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!(
            "{}e{sign}{:02}",
            strip_trailing_zeros(mantissa),
            exponent.unsigned_abs()
        );
    }

    let decimals = usize::try_from(max_fixed - 1 - exponent).unwrap_or(0);
    strip_trailing_zeros(&format!("{v:.decimals$}")).to_string()
}

fn strip_trailing_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
