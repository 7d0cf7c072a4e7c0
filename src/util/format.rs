use std::time::{Duration, SystemTime};

/// Formats a rouble amount as `1 234,50`: two decimals, comma separator and
/// space-grouped thousands.
///
/// Rounding works on the exact binary value of `amount`, halves away from
/// zero. `0.015` is stored just below the half and becomes `0,01`, while
/// `0.125` is an exact half and becomes `0,13`. Negative amounts keep their
/// sign even when they round to zero (`-0.001` gives `-0,00`); negative zero
/// itself prints as `0,00`.
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let (whole, fraction) = match exact_cents(amount.abs()) {
        Some(cents) => ((cents / 100).to_string(), cents % 100),
        None => (format!("{:.0}", amount.abs()), 0),
    };
    format!("{sign}{},{fraction:02}", group_thousands(&whole))
}

/// `value * 100` rounded half up, computed from the IEEE 754 mantissa and
/// exponent so no intermediate float rounding happens. `None` when the
/// result does not fit in a `u128`.
fn exact_cents(value: f64) -> Option<u128> {
    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = u128::from(bits & ((1u64 << 52) - 1));
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u128 << 52), biased - 1075)
    };

    let scaled = mantissa * 100;
    if exponent >= 0 {
        let factor = 1u128.checked_shl(exponent.unsigned_abs())?;
        return scaled.checked_mul(factor);
    }

    let shift = exponent.unsigned_abs();
    // scaled < 2^60, so anything shifted further is below half a cent.
    if shift > 64 {
        return Some(0);
    }
    Some((scaled + (1u128 << (shift - 1))) >> shift)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    grouped
}

/// Compact age of a timestamp, e.g. `45s`, `12m`, `3h`, `2d`.
pub fn humanize_age(updated_at: SystemTime) -> String {
    let age = SystemTime::now()
        .duration_since(updated_at)
        .unwrap_or_default();
    age_label(age)
}

fn age_label(age: Duration) -> String {
    let secs = age.as_secs();
    if secs < 60 {
        format!("{secs}s")
    } else if secs < 3_600 {
        format!("{}m", secs / 60)
    } else if secs < 86_400 {
        format!("{}h", secs / 3_600)
    } else {
        format!("{}d", secs / 86_400)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_reference_values() {
        assert_eq!(format_currency(1234.5), "1 234,50");
        assert_eq!(format_currency(0.0), "0,00");
        assert_eq!(format_currency(999.999), "1 000,00");
    }

    #[test]
    fn groups_every_three_digits() {
        assert_eq!(format_currency(12.0), "12,00");
        assert_eq!(format_currency(123.0), "123,00");
        assert_eq!(format_currency(100_000.0), "100 000,00");
        assert_eq!(format_currency(1_234_567.891), "1 234 567,89");
    }

    #[test]
    fn keeps_sign_for_negative_amounts() {
        assert_eq!(format_currency(-1500.25), "-1 500,25");
        assert_eq!(format_currency(-0.001), "-0,00");
        assert_eq!(format_currency(-0.0), "0,00");
    }

    #[test]
    fn rounds_the_stored_value_not_the_scaled_product() {
        // 0.015 is 0.01499999... in binary; 0.015 * 100.0 would round up to 1.5.
        assert_eq!(format_currency(0.015), "0,01");
        assert_eq!(format_currency(1.005), "1,00");
        assert_eq!(format_currency(0.125), "0,13");
        assert_eq!(format_currency(2.675), "2,67");
        assert_eq!(format_currency(-0.125), "-0,13");
    }

    #[test]
    fn handles_tiny_and_huge_amounts() {
        assert_eq!(format_currency(f64::MIN_POSITIVE), "0,00");
        assert_eq!(format_currency(5e-324), "0,00");
        assert_eq!(format_currency(1e15), "1 000 000 000 000 000,00");
        assert_eq!(format_currency(1e40), format!("{},00", group_thousands(&format!("{:.0}", 1e40))));
    }

    #[test]
    fn age_uses_largest_whole_unit() {
        assert_eq!(age_label(Duration::from_secs(0)), "0s");
        assert_eq!(age_label(Duration::from_secs(59)), "59s");
        assert_eq!(age_label(Duration::from_secs(61)), "1m");
        assert_eq!(age_label(Duration::from_secs(7_200)), "2h");
        assert_eq!(age_label(Duration::from_secs(200_000)), "2d");
    }

    #[test]
    fn future_timestamps_read_as_now() {
        let ahead = SystemTime::now() + Duration::from_secs(3_600);
        assert_eq!(humanize_age(ahead), "0s");
    }
}
