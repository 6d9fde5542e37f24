// Loose numeric coercion for record fields (numbers or decimal strings).

use serde_json::Value;

/// A record field value as seen by the numeric coercion step.
///
/// Inputs arrive as native JSON numbers, numeric strings, or anything else a pipeline
/// happens to emit. Everything collapses to `f64`; nothing here can fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberOrString<'a> {
    Number(f64),
    Text(&'a str),
    Other(&'a Value),
}

impl<'a> NumberOrString<'a> {
    /// Classify a JSON value. Numbers that do not fit an f64 exactly are widened as usual.
    pub fn from_value(value: &'a Value) -> Self {
        match value {
            Value::Number(n) => match n.as_f64() {
                Some(f) => NumberOrString::Number(f),
                None => NumberOrString::Other(value),
            },
            Value::String(s) => NumberOrString::Text(s),
            other => NumberOrString::Other(other),
        }
    }

    /// True for the two shapes alias resolution accepts (native number or string).
    pub fn is_number_or_string(&self) -> bool {
        !matches!(self, NumberOrString::Other(_))
    }

    /// Coerce to f64. Unparseable text yields NaN.
    pub fn to_f64(&self) -> f64 {
        match self {
            NumberOrString::Number(f) => *f,
            NumberOrString::Text(s) => parse_float(s),
            NumberOrString::Other(v) => parse_float(&loose_string(v)),
        }
    }
}

/// String form used when a non-number, non-string value reaches coercion.
fn loose_string(value: &Value) -> String {
    match value {
        Value::Null => "null".into(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => loose_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".into(),
    }
}

/// Parse the longest leading decimal literal of `s`.
///
/// Leading whitespace is skipped, an optional sign and `Infinity` are accepted, trailing
/// garbage is ignored ("12kg" -> 12.0). Returns NaN when no digits lead the string.
pub fn parse_float(s: &str) -> f64 {
    let s = s.trim_start_matches(is_leading_space);
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

/// Whitespace skipped before a number: Unicode spaces and line breaks plus the BOM, but not
/// NEL (U+0085).
fn is_leading_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}
