//! Number Formatting
//!
//! Display helpers shared by the share text, the markdown snapshot and the CLI.
//! Grouping is always comma-separated; locale handling is out of scope.

/// Group an integer amount with commas: 2625000 -> "2,625,000"
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Plain acreage display (shortest round-trip form): 1.0 -> "1", 0.5 -> "0.5"
pub fn format_acres(acres: f64) -> String {
    format!("{}", acres)
}

/// Acreage with grouped integer part and at most three fraction digits
///
/// 1234.5 -> "1,234.5", 0.1234 -> "0.123", 12.0 -> "12"
pub fn format_acres_grouped(acres: f64) -> String {
    let fixed = format!("{:.3}", acres.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let grouped = int_part
        .parse::<u64>()
        .map(group_thousands)
        .unwrap_or_else(|_| int_part.to_string());

    let sign = if acres < 0.0 { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(120000), "120,000");
        assert_eq!(group_thousands(2625000), "2,625,000");
    }

    #[test]
    fn test_format_acres() {
        assert_eq!(format_acres(1.0), "1");
        assert_eq!(format_acres(0.5), "0.5");
        assert_eq!(format_acres(100.0), "100");
    }

    #[test]
    fn test_format_acres_grouped() {
        assert_eq!(format_acres_grouped(1234.5), "1,234.5");
        assert_eq!(format_acres_grouped(0.1234), "0.123");
        assert_eq!(format_acres_grouped(12.0), "12");
    }
}
