use bigdecimal::{BigDecimal, ParseBigDecimalError};
use num_traits::ToPrimitive;
use std::cmp::Ordering;
use std::fmt;

/// Minor units per major unit (cents per dollar).
const SCALE: i64 = 100;

/// Widest integer part that can still fit in `i64` cents (9.2e16 units).
const MAX_INTEGER_DIGITS: i64 = 17;

#[derive(Debug, Clone, Copy, Default)]
/// An amount of currency stored as a whole number of cents.
///
/// Balances, deposits and withdrawals all use `Money` so that the usual
/// floating-point drift never shows up in an account balance. Text input is
/// parsed through `BigDecimal` and rounded to the nearest cent.
///
/// # Examples
/// ```
/// use bank_simulator::common::money::Money;
///
/// let amount: Money = "12.5".parse().unwrap();
/// assert_eq!(amount.as_cents(), 1250);
/// assert_eq!(amount.to_string(), "12.50");
/// ```
pub struct Money(i64);

impl Money {
    pub fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Whole units, e.g. `Money::from_units(100)` is `100.00`.
    pub fn from_units(units: i64) -> Self {
        Money(units * SCALE)
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn as_cents(&self) -> i64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// `None` when the sum does not fit.
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// `None` when the difference does not fit.
    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;

        // Bound the magnitude before scaling so `1e10000000` is never expanded.
        let (_, exponent) = bd.as_bigint_and_exponent();
        let integer_digits = bd.digits() as i64 - exponent;
        if integer_digits > MAX_INTEGER_DIGITS {
            return Err(ParseBigDecimalError::Other("amount overflow".into()));
        }
        if integer_digits < -2 {
            // below a tenth of a cent
            return Ok(Money::zero());
        }

        // round to whole cents
        let cents = (bd * BigDecimal::from(SCALE)).round(0);
        let value = cents
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = SCALE as u64;
        write!(f, "{sign}{}.{:02}", abs / scale, abs % scale)
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn parses_integers_and_decimals() {
        assert_eq!(Money::from_str("100").unwrap(), Money(10000));
        assert_eq!(Money::from_str("1.5").unwrap(), Money(150));
        assert_eq!(Money::from_str("0.01").unwrap(), Money(1));
        assert_eq!(Money::from_str("  42.10 ").unwrap(), Money(4210));
        assert_eq!(Money::from_str("-20").unwrap(), Money(-2000));
    }

    #[test]
    fn rounds_to_whole_cents() {
        assert_eq!(Money::from_str("1.999").unwrap(), Money(200));
        assert_eq!(Money::from_str("0.001").unwrap(), Money(0));
    }

    #[test]
    fn rejects_non_numeric_text() {
        assert!(Money::from_str("").is_err());
        assert!(Money::from_str("   ").is_err());
        assert!(Money::from_str("ten").is_err());
        assert!(Money::from_str("12abc").is_err());
    }

    #[test]
    fn displays_two_decimals() {
        assert_eq!(Money(10000).to_string(), "100.00");
        assert_eq!(Money(150).to_string(), "1.50");
        assert_eq!(Money(5).to_string(), "0.05");
        assert_eq!(Money::zero().to_string(), "0.00");
        assert_eq!(Money(-205).to_string(), "-2.05");
        assert_eq!(Money(-5).to_string(), "-0.05");
    }

    #[test]
    fn from_units_scales_to_cents() {
        assert_eq!(Money::from_units(3), Money(300));
        assert_eq!(Money::from_units(-1).as_cents(), -100);
    }

    #[test]
    fn rejects_huge_exponents_without_expanding_them() {
        assert!(Money::from_str("1e10000000").is_err());
        assert!(Money::from_str("-1e10000000").is_err());
        assert!(Money::from_str("1e17").is_err());
        assert_eq!(Money::from_str("1e16").unwrap(), Money(1_000_000_000_000_000_000));
        assert_eq!(Money::from_str("1e-10000000").unwrap(), Money::zero());
        assert_eq!(Money::from_str("12.5e-1").unwrap(), Money(125));
    }

    #[test]
    fn rejects_amounts_past_i64_cents() {
        assert!(Money::from_str("92233720368547758.08").is_err());
        assert_eq!(
            Money::from_str("92233720368547758.07").unwrap(),
            Money(i64::MAX)
        );
    }

    #[test]
    fn checked_arithmetic_and_ordering() {
        let m = Money(1000).checked_add(Money(250)).unwrap();
        assert_eq!(m, Money(1250));
        assert_eq!(m.checked_sub(Money(1250)), Some(Money::zero()));
        assert_eq!(Money(i64::MAX).checked_add(Money(1)), None);
        assert_eq!(Money(i64::MIN).checked_sub(Money(1)), None);
        assert!(Money(100) < Money(101));
        assert!(Money(-1).is_negative());
        assert!(!Money::zero().is_negative());
    }
}
