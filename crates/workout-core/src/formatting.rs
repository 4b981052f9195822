/// Format a number with thousands separators and a fixed number of decimals.
///
/// # Examples
///
/// ```
/// use workout_core::formatting::format_number;
///
/// assert_eq!(format_number(12_450.0, 0), "12,450");
/// assert_eq!(format_number(1_234.5, 1), "1,234.5");
/// assert_eq!(format_number(0.0, 2), "0.00");
/// assert_eq!(format_number(-9_876.5, 1), "-9,876.5");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (formatted.as_str(), None),
    };

    let mut out = String::with_capacity(formatted.len() + int_part.len() / 3 + 1);
    // Rounding may still leave a negative zero, which should print unsigned.
    if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Format a weight, dropping the decimal when it is a whole number.
///
/// ```
/// use workout_core::formatting::format_weight;
///
/// assert_eq!(format_weight(120.0), "120");
/// assert_eq!(format_weight(102.5), "102.5");
/// ```
pub fn format_weight(weight: f64) -> String {
    if weight.fract() == 0.0 {
        format_number(weight, 0)
    } else {
        format_number(weight, 1)
    }
}

/// Format a session duration given in whole minutes.
///
/// * `0` → `"-"` (duration not recorded)
/// * `< 60` → `"45m"`
/// * `≥ 60` → `"1h"` or `"1h 15m"`
pub fn format_minutes(minutes: u32) -> String {
    match minutes {
        0 => "-".to_string(),
        m if m < 60 => format!("{}m", m),
        m if m % 60 == 0 => format!("{}h", m / 60),
        m => format!("{}h {}m", m / 60, m % 60),
    }
}

/// Insert commas every three digits from the right of an integer string.
fn group_thousands(s: &str) -> String {
    let len = s.len();
    let mut result = String::with_capacity(len + len / 3);
    for (i, c) in s.chars().enumerate() {
        if i != 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}
