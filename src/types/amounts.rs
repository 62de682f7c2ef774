use crate::errors;

pub(crate) const NEAR_DECIMALS: u8 = 24;

/// Converts a human-readable decimal amount (e.g. `"2.5"`) into base units.
///
/// The conversion is pure integer string manipulation: amounts like 1 NEAR
/// (10^24 yocto) do not fit into f64 without precision loss, so no float
/// math is allowed here.
pub(crate) fn to_base_units(amount: &str, decimals: u8) -> crate::Result<u128> {
    let amount = amount.trim();
    let (int_part, frac_part) = match amount.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (amount, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(errors::ErrorKind::InvalidInput("Empty amount".to_string()).into());
    }
    if !int_part.chars().all(|c| c.is_ascii_digit())
        || !frac_part.chars().all(|c| c.is_ascii_digit())
    {
        return Err(errors::ErrorKind::InvalidInput(format!(
            "`{}` is not a valid decimal amount",
            amount
        ))
        .into());
    }
    if frac_part.len() > decimals as usize {
        return Err(errors::ErrorKind::InvalidInput(format!(
            "`{}` has more fractional digits than the token supports ({})",
            amount, decimals
        ))
        .into());
    }

    let mut digits = String::with_capacity(int_part.len() + decimals as usize);
    digits.push_str(int_part);
    digits.push_str(frac_part);
    for _ in frac_part.len()..decimals as usize {
        digits.push('0');
    }
    digits.parse::<u128>().map_err(|_| {
        errors::ErrorKind::InvalidInput(format!(
            "`{}` with {} decimals does not fit into u128 base units",
            amount, decimals
        ))
        .into()
    })
}

/// Renders base units as a human-readable decimal string, trailing zeros
/// trimmed. Exact for the whole u128 range and any `decimals` value.
pub(crate) fn from_base_units(raw: u128, decimals: u8) -> String {
    let raw = raw.to_string();
    let decimals = decimals as usize;
    if decimals == 0 {
        return raw;
    }
    let (int_part, frac_part) = if raw.len() > decimals {
        let split_at = raw.len() - decimals;
        (raw[..split_at].to_string(), raw[split_at..].to_string())
    } else {
        ("0".to_string(), format!("{:0>width$}", raw, width = decimals))
    };
    let frac_part = frac_part.trim_end_matches('0');
    if frac_part.is_empty() {
        int_part
    } else {
        format!("{}.{}", int_part, frac_part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_base_units_near() {
        assert_eq!(
            to_base_units("1", NEAR_DECIMALS).unwrap(),
            1_000_000_000_000_000_000_000_000
        );
        assert_eq!(
            to_base_units("0.1", NEAR_DECIMALS).unwrap(),
            100_000_000_000_000_000_000_000
        );
        assert_eq!(
            to_base_units("12.345", NEAR_DECIMALS).unwrap(),
            12_345_000_000_000_000_000_000_000
        );
    }

    #[test]
    fn test_to_base_units_ft() {
        assert_eq!(to_base_units("2.5", 6).unwrap(), 2_500_000);
        assert_eq!(to_base_units("0.000001", 6).unwrap(), 1);
        assert_eq!(to_base_units("907", 0).unwrap(), 907);
        assert_eq!(to_base_units(" 42 ", 2).unwrap(), 4200);
    }

    #[test]
    fn test_to_base_units_rejects_garbage() {
        assert!(to_base_units("", 24).is_err());
        assert!(to_base_units(".", 24).is_err());
        assert!(to_base_units("one", 24).is_err());
        assert!(to_base_units("1.2.3", 24).is_err());
        assert!(to_base_units("-5", 24).is_err());
        assert!(to_base_units("1e10", 24).is_err());
    }

    #[test]
    fn test_to_base_units_rejects_excess_precision() {
        assert!(to_base_units("2.5", 0).is_err());
        assert!(to_base_units("0.1234567", 6).is_err());
    }

    #[test]
    fn test_to_base_units_rejects_overflow() {
        // u128::MAX has 39 digits
        assert!(to_base_units("400000000000000000000000000000000000000", 0).is_err());
        assert!(to_base_units("400000000000000", NEAR_DECIMALS).is_err());
        assert_eq!(
            to_base_units("340282366920938463463374607431768211455", 0).unwrap(),
            u128::MAX
        );
    }

    #[test]
    fn test_from_base_units() {
        insta::assert_snapshot!(
            from_base_units(1_000_000_000_000_000_000_000_000, NEAR_DECIMALS),
            @"1"
        );
        assert_eq!(
            from_base_units(1, NEAR_DECIMALS),
            "0.000000000000000000000001"
        );
        assert_eq!(from_base_units(2_500_000, 6), "2.5");
        assert_eq!(from_base_units(0, 10), "0");
        assert_eq!(from_base_units(1_000_000, 5), "10");
        assert_eq!(from_base_units(42, 30), "0.000000000000000000000000000042");
        assert_eq!(
            from_base_units(u128::MAX, 0),
            "340282366920938463463374607431768211455"
        );
    }

    #[test]
    fn test_round_trip_is_exact() {
        // Values above 2^53 are the interesting ones: they are exactly where
        // float-based conversion silently loses digits.
        let samples: [u128; 6] = [
            1,
            907,
            9_007_199_254_740_993, // 2^53 + 1
            1_000_000_000_000_000_000_000_000,
            123_456_789_012_345_678_901_234_567_890,
            u128::MAX / 7,
        ];
        for decimals in 0..=NEAR_DECIMALS {
            for raw in samples {
                let rendered = from_base_units(raw, decimals);
                assert_eq!(
                    to_base_units(&rendered, decimals).unwrap(),
                    raw,
                    "round trip failed for {} with {} decimals",
                    raw,
                    decimals
                );
            }
        }
    }
}
