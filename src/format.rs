use crate::model::NumericInput;

const MAX_FRACTION_DIGITS: usize = 3;

/// Formats a population count with en-US thousands separators.
///
/// Numeric strings are parsed first; a string that is not a number comes back
/// unchanged rather than being guessed at.
pub fn format_population(value: &NumericInput) -> String {
    match value {
        NumericInput::Integer(n) => group_digits(&n.to_string()),
        NumericInput::Float(f) => format_float(*f),
        NumericInput::Text(s) => {
            let trimmed = s.trim();
            if let Ok(n) = trimmed.parse::<u64>() {
                return group_digits(&n.to_string());
            }
            match trimmed.parse::<f64>() {
                Ok(f) if f.is_finite() => format_float(f),
                _ => s.clone(),
            }
        }
    }
}

fn format_float(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rendered = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if value < 0.0 && rendered.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
