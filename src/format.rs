//! Display Formatting
//!
//! Thousands grouping for table cells and stat cards.

/// Group an integer with thousands separators: `150000` -> `150,000`
pub fn integer(value: i64) -> String {
    let digits = group_digits(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{}", digits)
    } else {
        digits
    }
}

/// Grouped decimal with at most two fraction digits, trailing zeros dropped
pub fn number(value: f64) -> String {
    let rounded = format!("{:.2}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if value < 0.0 && rounded != "0.00" {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// `Rs. 150,000`
pub fn currency(prefix: &str, value: f64) -> String {
    if prefix.is_empty() {
        number(value)
    } else {
        format!("{} {}", prefix, number(value))
    }
}

/// `15%`
pub fn percent(value: f64) -> String {
    format!("{}%", number(value))
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
