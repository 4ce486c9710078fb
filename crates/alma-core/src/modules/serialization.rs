/// Renders `value` the way C's `%.<significant>g` does: fixed notation when
/// the decimal exponent lies in `[-4, significant)`, scientific notation with
/// a signed two-digit exponent otherwise, trailing zeros removed.
pub fn format_general_f64(value: f64, significant: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = significant.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// General format left-justified in a field of `width` characters.
pub fn format_general_left(value: f64, width: usize, significant: usize) -> String {
    format!(
        "{:<width$}",
        format_general_f64(value, significant),
        width = width
    )
}

fn strip_trailing_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::{format_general_f64, format_general_left};

    #[test]
    fn general_format_switches_to_scientific_for_large_exponents() {
        assert_eq!(format_general_f64(6.371e6, 5), "6.371e+06");
        assert_eq!(format_general_f64(3.1855e6, 5), "3.1855e+06");
        assert_eq!(format_general_f64(1e11, 5), "1e+11");
        assert_eq!(format_general_f64(1e21, 5), "1e+21");
        assert_eq!(format_general_f64(123456.0, 5), "1.2346e+05");
        assert_eq!(format_general_f64(-2.5e-7, 5), "-2.5e-07");
    }

    #[test]
    fn general_format_uses_fixed_notation_in_range() {
        assert_eq!(format_general_f64(5500.0, 5), "5500");
        assert_eq!(format_general_f64(99999.0, 5), "99999");
        assert_eq!(format_general_f64(1.5, 5), "1.5");
        assert_eq!(format_general_f64(0.0001234, 5), "0.0001234");
        assert_eq!(format_general_f64(0.0, 5), "0");
    }

    #[test]
    fn general_format_rounding_can_promote_the_exponent() {
        assert_eq!(format_general_f64(99999.5, 5), "1e+05");
        assert_eq!(format_general_f64(9.99996, 5), "10");
    }

    #[test]
    fn general_format_handles_non_finite_values() {
        assert_eq!(format_general_f64(f64::NAN, 5), "nan");
        assert_eq!(format_general_f64(f64::INFINITY, 5), "inf");
        assert_eq!(format_general_f64(f64::NEG_INFINITY, 5), "-inf");
    }

    #[test]
    fn left_justified_field_keeps_overlong_values_intact() {
        assert_eq!(format_general_left(5500.0, 10, 5), "5500      ");
        assert_eq!(format_general_left(1.2345e-10, 8, 5), "1.2345e-10");
    }
}
