//! Text input <-> form field conversions.
//!
//! Nothing here validates: unparsable numbers fall back and the server has
//! the final word.

/// Blank input clears an optional text field.
pub fn opt_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn parse_f64_or(value: &str, fallback: f64) -> f64 {
    value.trim().replace(',', ".").parse().unwrap_or(fallback)
}

/// Blank or unparsable input clears an optional number.
pub fn parse_opt_f64(value: &str) -> Option<f64> {
    value.trim().replace(',', ".").parse().ok()
}

pub fn parse_i64_or(value: &str, fallback: i64) -> i64 {
    value.trim().parse().unwrap_or(fallback)
}

pub fn parse_opt_u64(value: &str) -> Option<u64> {
    value.trim().parse().ok()
}

pub fn opt_to_input<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opt_text() {
        assert_eq!(opt_text("  "), None);
        assert_eq!(opt_text(" Blue "), Some("Blue".to_string()));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(parse_f64_or("12,5", 0.0), 12.5);
        assert_eq!(parse_f64_or("abc", 3.0), 3.0);
        assert_eq!(parse_opt_f64(""), None);
        assert_eq!(parse_opt_f64("7"), Some(7.0));
        assert_eq!(parse_i64_or("-4", 0), -4);
        assert_eq!(parse_opt_u64("100"), Some(100));
        assert_eq!(parse_opt_u64("-1"), None);
        assert_eq!(opt_to_input(Some(2.5)), "2.5");
        assert_eq!(opt_to_input::<u64>(None), "");
    }
}
