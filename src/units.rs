//! Numeric value + unit pairs coming from the page's number inputs.

/// Join a raw numeric string and a unit into a CSS length.
///
/// Returns an empty string (the "unset" marker) when the raw value is empty,
/// is not a finite number, or when no unit is selected. A bare number or
/// `NaN` never reaches the generated CSS.
pub fn with_unit(raw: &str, unit: &str) -> String {
    let value = raw.trim();
    let unit = unit.trim();
    if value.is_empty() || unit.is_empty() || !is_number(value) {
        return String::new();
    }
    format!("{value}{unit}")
}

/// Whether `s` reads as a finite decimal number, the way a number input
/// would accept it (`12`, `-3.5`, `.5`, `1e2`).
pub fn is_number(s: &str) -> bool {
    // f64's parser also accepts `inf` and `NaN` spellings
    if s.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return false;
    }
    s.parse::<f64>().map(f64::is_finite).unwrap_or(false)
}
