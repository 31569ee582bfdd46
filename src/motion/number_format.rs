//! en-US style number rendering for counters and live metrics.

/// Inserts `,` every three digits of an unsigned digit string.
pub fn group_thousands(digits: &str) -> String {
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

/// Groups the integer part of an already fixed-point rendered number,
/// keeping the sign and any fractional digits untouched.
fn group_rendered(rendered: &str) -> String {
    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };

    let mut out = String::from(sign);
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

// Past 2^53 every f64 is an even integer, so no ties remain.
const MAX_TIE_PRECISION: usize = 20;
const MAX_EXACT_HALVES: f64 = 9_007_199_254_740_992.0;

/// Fixed-point rendering where an exact binary tie rounds away from zero.
///
/// `{:.N}` already rounds correctly for everything except exact ties, which
/// it sends to even. A tie at `precision` digits is a value of the form
/// `j / 2^(precision + 1)` with `j` odd, and scaling by a power of two is
/// exact, so the check never misreads a value like `0.35` (stored just
/// below the midpoint) as a tie.
fn to_fixed(value: f64, precision: usize) -> String {
    let magnitude = value.abs();
    if precision <= MAX_TIE_PRECISION {
        let halves = magnitude * 2f64.powi(precision as i32 + 1);
        if halves.fract() == 0.0 && halves < MAX_EXACT_HALVES && halves % 2.0 == 1.0 {
            let units = (halves as u128 * 5u128.pow(precision as u32) + 1) / 2;
            let sign = if value < 0.0 { "-" } else { "" };
            if precision == 0 {
                return format!("{sign}{units}");
            }
            let scale = 10u128.pow(precision as u32);
            return format!(
                "{sign}{}.{:0width$}",
                units / scale,
                units % scale,
                width = precision
            );
        }
    }
    format!("{:.*}", precision, value)
}

/// Counter formatting: whole values get no decimals, anything else exactly
/// one decimal. Both are thousands-grouped.
pub fn format_count(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let rendered = if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        to_fixed(value, 1)
    };
    // "-0" and "-0.0" show up when a tiny negative value rounds away.
    let rendered = match rendered.as_str() {
        "-0" => "0".to_string(),
        "-0.0" => "0.0".to_string(),
        _ => rendered,
    };
    group_rendered(&rendered)
}

/// Fixed precision metric formatting, thousands-grouped.
pub fn format_metric(value: f64, precision: u8) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    group_rendered(&to_fixed(value, precision as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("12500"), "12,500");
        assert_eq!(group_thousands("2400000"), "2,400,000");
    }

    #[test]
    fn test_format_count_integer() {
        assert_eq!(format_count(2_400_000.0), "2,400,000");
        assert_eq!(format_count(0.0), "0");
    }

    #[test]
    fn test_format_count_fraction_has_one_decimal() {
        assert_eq!(format_count(12.5), "12.5");
        assert_eq!(format_count(1234.56), "1,234.6");
        assert_eq!(format_count(0.04), "0.0");
    }

    #[test]
    fn test_format_count_exact_ties_round_up() {
        assert_eq!(format_count(0.25), "0.3");
        assert_eq!(format_count(1.25), "1.3");
        assert_eq!(format_count(12.25), "12.3");
        assert_eq!(format_count(0.75), "0.8");
        assert_eq!(format_count(-0.25), "-0.3");
    }

    #[test]
    fn test_format_count_near_ties_follow_stored_value() {
        // 0.35 is stored just below the midpoint, 0.45 just above.
        assert_eq!(format_count(0.35), "0.3");
        assert_eq!(format_count(0.45), "0.5");
        assert_eq!(format_count(1999.95), "2,000.0");
    }

    #[test]
    fn test_format_count_negative() {
        assert_eq!(format_count(-1500.0), "-1,500");
        assert_eq!(format_count(-0.01), "0.0");
    }

    #[test]
    fn test_format_metric_precision() {
        assert_eq!(format_metric(96.437, 1), "96.4");
        assert_eq!(format_metric(67832.0, 0), "67,832");
        assert_eq!(format_metric(1847.4, 0), "1,847");
        assert_eq!(format_metric(2.5, 0), "3");
        assert_eq!(format_metric(96.125, 2), "96.13");
    }
}
