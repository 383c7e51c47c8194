//! Number formatting shared by the CSV writer and the text report.

/// Format a numeric value without a trailing `.0` when it is whole
///
/// `20.0` becomes `"20"`, `22.5` stays `"22.5"`.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers_drop_fraction() {
        assert_eq!(format_number(20.0), "20");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_fractional_numbers_kept() {
        assert_eq!(format_number(22.5), "22.5");
        assert_eq!(format_number(0.25), "0.25");
    }
}
