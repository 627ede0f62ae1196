//! Exact fixed-point numbers for balances, fees, and position quantities.

use std::cmp::Ordering;
use std::fmt;

use crate::errors::CodecError;
use crate::layout::Layout;

pub const FRACTIONAL_LEN: usize = 16;

/// A signed scaled decimal, `m / 10^exp`, kept exact end to end.
///
/// Wire form is mantissa then exponent, both little-endian. Two values with
/// different exponents are distinct wire states even when numerically equal,
/// and only equal-exponent values order against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fractional {
    pub m: i64,
    pub exp: u64,
}

impl Fractional {
    pub const ZERO: Fractional = Fractional { m: 0, exp: 0 };

    pub const fn new(m: i64, exp: u64) -> Self {
        Self { m, exp }
    }

    /// Lossy `f64` approximation for display. All bookkeeping stays on the
    /// integer mantissa.
    pub fn to_display(self) -> f64 {
        self.m as f64 / 10f64.powi(self.exp.min(i32::MAX as u64) as i32)
    }

    pub fn checked_add(self, other: Self) -> Result<Self, CodecError> {
        let exp = self.exp.max(other.exp);
        let a = self.try_rescale(exp)?;
        let b = other.try_rescale(exp)?;
        let m = a.m.checked_add(b.m).ok_or(CodecError::Overflow)?;
        Ok(Self { m, exp })
    }

    pub fn checked_sub(self, other: Self) -> Result<Self, CodecError> {
        let exp = self.exp.max(other.exp);
        let a = self.try_rescale(exp)?;
        let b = other.try_rescale(exp)?;
        let m = a.m.checked_sub(b.m).ok_or(CodecError::Overflow)?;
        Ok(Self { m, exp })
    }

    /// Re-expresses the value at a larger exponent, multiplying the mantissa
    /// by the matching power of ten. Shrinking the exponent would drop
    /// digits, so a smaller target fails, as does any mantissa that leaves
    /// the `i64` range.
    pub fn try_rescale(self, exp: u64) -> Result<Self, CodecError> {
        if exp < self.exp {
            return Err(CodecError::Overflow);
        }
        let shift = u32::try_from(exp - self.exp).map_err(|_| CodecError::Overflow)?;
        let factor = 10i64.checked_pow(shift).ok_or(CodecError::Overflow)?;
        let m = self.m.checked_mul(factor).ok_or(CodecError::Overflow)?;
        Ok(Self { m, exp })
    }

    /// Exact decimal rendering with `exp` fractional digits, e.g. m=-1500
    /// exp=2 renders "-15.00". Trailing zeros carry the exponent, so the
    /// string form is lossless.
    pub fn to_decimal_string(self) -> String {
        let places = self.exp as usize;
        let digits = (self.m as i128).unsigned_abs().to_string();
        let sign = if self.m < 0 { "-" } else { "" };
        if places == 0 {
            return format!("{sign}{digits}");
        }
        let padded = if digits.len() <= places {
            format!("{}{}", "0".repeat(places + 1 - digits.len()), digits)
        } else {
            digits
        };
        let split = padded.len() - places;
        format!("{sign}{}.{}", &padded[..split], &padded[split..])
    }

    /// Parses the decimal-string form. The fractional digit count becomes
    /// the exponent. Rejects anything that is not a plain signed decimal or
    /// whose mantissa leaves the `i64` range.
    pub fn from_decimal_str(text: &str) -> Result<Self, CodecError> {
        let (sign, body) = match text.strip_prefix('-') {
            Some(rest) => (-1i64, rest),
            None => (1i64, text),
        };
        let (int_part, frac_part) = match body.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (body, ""),
        };
        let digits_ok = !int_part.is_empty()
            && int_part.bytes().all(|b| b.is_ascii_digit())
            && frac_part.bytes().all(|b| b.is_ascii_digit())
            && (!body.contains('.') || !frac_part.is_empty());
        if !digits_ok {
            return Err(CodecError::InvalidNumber(text.to_string()));
        }
        let mut m: i64 = 0;
        for b in int_part.bytes().chain(frac_part.bytes()) {
            let digit = (b - b'0') as i64;
            m = m
                .checked_mul(10)
                .and_then(|v| v.checked_add(sign * digit))
                .ok_or_else(|| CodecError::InvalidNumber(text.to_string()))?;
        }
        Ok(Self {
            m,
            exp: frac_part.len() as u64,
        })
    }
}

impl fmt::Display for Fractional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}

impl PartialOrd for Fractional {
    /// Ordered only against the same exponent; comparing across scales is a
    /// caller bug and yields `None`.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.exp == other.exp).then(|| self.m.cmp(&other.m))
    }
}

impl Layout for Fractional {
    const WIDTH: usize = FRACTIONAL_LEN;

    fn read(buf: &[u8], offset: &mut usize) -> Result<Self, CodecError> {
        let m = i64::read(buf, offset)?;
        let exp = u64::read(buf, offset)?;
        Ok(Self { m, exp })
    }

    fn write(&self, buf: &mut [u8], offset: &mut usize) {
        self.m.write(buf, offset);
        self.exp.write(buf, offset);
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn wire_round_trip_preserves_mantissa_and_exponent() {
        let value = Fractional::new(-1_234_567, 6);
        let mut buf = [0u8; FRACTIONAL_LEN];
        let mut offset = 0usize;
        value.write(&mut buf, &mut offset);
        assert_eq!(offset, FRACTIONAL_LEN);

        let mut offset = 0usize;
        assert_eq!(Fractional::read(&buf, &mut offset).unwrap(), value);
    }

    #[test]
    fn decimal_string_keeps_trailing_zeros() {
        assert_eq!(Fractional::new(1500, 0).to_decimal_string(), "1500");
        assert_eq!(Fractional::new(1500, 2).to_decimal_string(), "15.00");
        assert_eq!(Fractional::new(-1500, 2).to_decimal_string(), "-15.00");
        assert_eq!(Fractional::new(5, 2).to_decimal_string(), "0.05");
        assert_eq!(Fractional::new(0, 3).to_decimal_string(), "0.000");
    }

    #[test]
    fn decimal_string_handles_extreme_mantissas() {
        assert_eq!(
            Fractional::new(i64::MIN, 2).to_decimal_string(),
            "-92233720368547758.08",
        );
        assert_eq!(
            Fractional::from_decimal_str("-92233720368547758.08").unwrap(),
            Fractional::new(i64::MIN, 2),
        );
    }

    #[test]
    fn parse_recovers_exponent_from_fraction_digits() {
        assert_eq!(
            Fractional::from_decimal_str("15.00").unwrap(),
            Fractional::new(1500, 2),
        );
        assert_eq!(
            Fractional::from_decimal_str("-0.050").unwrap(),
            Fractional::new(-50, 3),
        );
        assert_eq!(
            Fractional::from_decimal_str("42").unwrap(),
            Fractional::new(42, 0),
        );
    }

    #[test]
    fn parse_rejects_non_decimal_text() {
        for text in ["", "-", "abc", "1.", ".5", "--1", "1e5", "1.2.3", "+5", "1 "] {
            let err = Fractional::from_decimal_str(text).unwrap_err();
            assert_eq!(err, CodecError::InvalidNumber(text.to_string()), "{text:?}");
        }
    }

    #[test]
    fn parse_rejects_out_of_range_mantissa() {
        let err = Fractional::from_decimal_str("9223372036854775808").unwrap_err();
        assert!(matches!(err, CodecError::InvalidNumber(_)));
    }

    #[test]
    fn add_rescales_to_the_finer_exponent() {
        let coarse = Fractional::new(15, 1); // 1.5
        let fine = Fractional::new(250, 3); // 0.250
        assert_eq!(coarse.checked_add(fine).unwrap(), Fractional::new(1750, 3));
    }

    #[test]
    fn add_overflow_is_an_error_not_a_wrap() {
        let a = Fractional::new(i64::MAX, 0);
        let b = Fractional::new(1, 0);
        assert_eq!(a.checked_add(b).unwrap_err(), CodecError::Overflow);
    }

    #[test]
    fn rescale_overflow_is_an_error() {
        let wide = Fractional::new(i64::MAX / 2, 0);
        assert_eq!(wide.try_rescale(19).unwrap_err(), CodecError::Overflow);
    }

    #[test]
    fn sub_carries_sign_through_rescale() {
        let a = Fractional::new(100, 2); // 1.00
        let b = Fractional::new(2500, 3); // 2.500
        assert_eq!(a.checked_sub(b).unwrap(), Fractional::new(-1500, 3));
    }

    #[test]
    fn ordering_requires_equal_exponents() {
        let a = Fractional::new(10, 1);
        let b = Fractional::new(20, 1);
        let c = Fractional::new(100, 2);
        assert_eq!(a.partial_cmp(&b), Some(Ordering::Less));
        assert_eq!(a.partial_cmp(&c), None);
    }

    #[test]
    fn display_approximation_is_close_but_lossy() {
        let value = Fractional::new(1_500_001, 6);
        assert!((value.to_display() - 1.500001).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn decimal_string_path_is_lossless(m in any::<i64>(), exp in 0u64..=18) {
            let value = Fractional::new(m, exp);
            let text = value.to_decimal_string();
            prop_assert_eq!(Fractional::from_decimal_str(&text).unwrap(), value);
        }

        #[test]
        fn wire_path_is_lossless(m in any::<i64>(), exp in any::<u64>()) {
            let value = Fractional::new(m, exp);
            let mut buf = [0u8; FRACTIONAL_LEN];
            let mut offset = 0usize;
            value.write(&mut buf, &mut offset);
            let mut offset = 0usize;
            prop_assert_eq!(Fractional::read(&buf, &mut offset).unwrap(), value);
        }
    }
}
