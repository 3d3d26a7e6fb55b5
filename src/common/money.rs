use bigdecimal::BigDecimal;
use bigdecimal::*;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
const SCALE: i64 = 10_000;

#[derive(Debug, Clone, Copy, Default)]
/// A signed monetary amount stored as an `i64` in units of 1/10,000.
///
/// Movements are signed: positive is a deposit, negative a withdrawal. Fixed
/// point keeps transfer and interest arithmetic exact, which matters because
/// the interest cutoff compares computed terms against exactly 1.
///
/// # Examples
/// ```
/// use bankist_core::common::money::Money;
///
/// let amount = Money::from_major(200);
/// assert_eq!(amount.as_i64(), 2_000_000);
/// assert_eq!(amount.to_string_4dp(), "200.0000");
/// assert_eq!((-amount).to_string_4dp(), "-200.0000");
/// ```
pub struct Money(i64);

impl Money {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Builds from whole currency units, e.g. `from_major(450)` is 450.0000.
    pub fn from_major(value: i64) -> Self {
        Money(value * SCALE)
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn to_string_4dp(&self) -> String {
        let bd = BigDecimal::from(self.0) / BigDecimal::from(SCALE);
        format!("{:.4}", bd)
    }
}

/// An account's interest rate in basis points (1.2% = 120 bps).
///
/// Kept as an integer so the qualifying-interest cutoff stays exact: the term
/// for a deposit is `deposit * bps / 10_000`, computed in `Money` units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterestRate(i64);

impl InterestRate {
    pub fn from_basis_points(bps: i64) -> Self {
        InterestRate(bps)
    }

    pub fn as_basis_points(&self) -> i64 {
        self.0
    }

    /// The interest earned by a single deposit at this rate.
    pub fn term_for(&self, deposit: Money) -> Money {
        Money(deposit.0 * self.0 / 10_000)
    }
}

impl std::str::FromStr for InterestRate {
    type Err = ParseBigDecimalError;

    /// Parses a percentage like `"1.2"` into basis points.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty rate".into()));
        }

        let bd: BigDecimal = t.parse()?;
        let scaled = (bd * BigDecimal::from(100)).round(0);
        let bps: i64 = scaled
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("rate overflow".into()))?;

        Ok(InterestRate(bps))
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

        // Scale to 4 decimal places
        let scaled = (bd * BigDecimal::from(SCALE)).round(0);
        let value: i64 = scaled
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_4dp())
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
        Some(self.0.cmp(&other.0))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Money;
    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_from_major() {
        assert_eq!(Money::from_major(1), Money(10000));
        assert_eq!(Money::from_major(-400), Money(-4_000_000));
        assert_eq!(Money::from_major(0), Money::zero());
    }

    #[test]
    fn test_from_str_valid() {
        assert_eq!(Money::from_str("1").unwrap(), Money(10000));
        assert_eq!(Money::from_str("1.5").unwrap(), Money(15000));
        assert_eq!(Money::from_str("-650").unwrap(), Money(-6_500_000));
        assert_eq!(Money::from_str("0.0001").unwrap(), Money(1));
        assert_eq!(Money::from_str("  2.0000 ").unwrap(), Money(20000));
    }

    #[test]
    fn test_from_str_rounding() {
        assert_eq!(Money::from_str("1.99999").unwrap(), Money(20000));
        assert_eq!(Money::from_str("0.00001").unwrap(), Money(0));
    }

    #[test]
    fn test_from_str_invalid() {
        assert!(Money::from_str("").is_err());
        assert!(Money::from_str("   ").is_err());
        assert!(Money::from_str("abc").is_err());
    }

    #[test]
    fn test_to_string_4dp() {
        assert_eq!(Money(10000).to_string_4dp(), "1.0000");
        assert_eq!(Money(12345).to_string_4dp(), "1.2345");
        assert_eq!(Money(-5_000_000).to_string_4dp(), "-500.0000");
        assert_eq!(Money(0).to_string_4dp(), "0.0000");
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(Money(10000) + Money(5000), Money(15000));
        assert_eq!(Money(15000) - Money(5000), Money(10000));
        assert_eq!(-Money(10000), Money(-10000));

        let mut m = Money(10000);
        m += Money(5000);
        assert_eq!(m, Money(15000));
        m -= Money(15000);
        assert_eq!(m, Money::zero());
    }

    #[test]
    fn test_sum_and_is_positive() {
        let movements = [Money::from_major(200), Money::from_major(-50)];
        let total: Money = movements.iter().copied().sum();
        assert_eq!(total, Money::from_major(150));

        assert!(Money(1).is_positive());
        assert!(!Money::zero().is_positive());
        assert!(!Money(-1).is_positive());
    }

    #[test]
    fn test_ordering() {
        assert!(Money(10000) < Money(15000));
        assert!(Money(-10000) < Money::zero());
        assert!(Money(10000) >= Money(10000));
    }

    #[test]
    fn rate_parses_percent_to_basis_points() {
        assert_eq!(
            InterestRate::from_str("1.2").unwrap(),
            InterestRate::from_basis_points(120)
        );
        assert_eq!(
            InterestRate::from_str("0.7").unwrap(),
            InterestRate::from_basis_points(70)
        );
        assert_eq!(
            InterestRate::from_str("1").unwrap(),
            InterestRate::from_basis_points(100)
        );
        assert!(InterestRate::from_str("").is_err());
        assert!(InterestRate::from_str("x").is_err());
    }

    #[test]
    fn rate_term_is_exact_in_fixed_point() {
        let rate = InterestRate::from_basis_points(120); // 1.2%

        // 3000 * 1.2% = 36, 70 * 1.2% = 0.84
        assert_eq!(
            rate.term_for(Money::from_major(3000)).to_string_4dp(),
            "36.0000"
        );
        assert_eq!(
            rate.term_for(Money::from_major(70)).to_string_4dp(),
            "0.8400"
        );
        assert!(rate.term_for(Money::from_major(70)) < Money::from_major(1));
    }
}
