//! Terminal output utilities.

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());

    if quoted.len() >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("cidr", 10), "    \"cidr\"");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("10.0.0.2/31", 13), "\"10.0.0.2/31\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("10.0.0.0/8", 5), "\"10.0.0.0/8\"");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(256, 6), " \"256\"");
    }
}
