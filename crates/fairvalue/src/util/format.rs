/// Format a per-share dollar amount (e.g., $22.85, -$52.15)
pub fn format_currency(value: f64) -> String {
    let abs_value = value.abs();
    let cents = (abs_value * 100.0).round() as i64;
    let dollars = cents / 100;

    // Add thousands separators
    let dollars_str = dollars.to_string();
    let mut result = String::new();
    for (i, c) in dollars_str.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    let dollars_formatted: String = result.chars().rev().collect();

    if value < 0.0 && cents > 0 {
        format!("-${}.{:02}", dollars_formatted, cents % 100)
    } else {
        format!("${}.{:02}", dollars_formatted, cents % 100)
    }
}

/// Format a dollar change with an explicit sign (e.g., +$8.22, -$8.22)
pub fn format_signed_currency(value: f64) -> String {
    let formatted = format_currency(value);
    if formatted.starts_with('-') {
        formatted
    } else {
        format!("+{}", formatted)
    }
}

/// Format a percentage change with an explicit sign (e.g., +36.0%)
pub fn format_percent_change(pct: f64) -> String {
    format!("{:+.1}%", pct)
}

/// Format an amount in millions of dollars (e.g., $1.36M)
pub fn format_millions(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}M", value.abs())
    } else {
        format!("${:.2}M", value)
    }
}
