//! Money with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal for precise calculations without floating-point errors.
//!
//! Mixing currencies in a binary operation is a caller bug, not a domain
//! failure: every operation that takes another [`Money`] panics when the
//! currencies differ. Recoverable currency handling (an account rejecting a
//! foreign-currency transaction) belongs to the orchestration layer.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Currency codes following ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    BRL,
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::BRL => "R$",
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::BRL => "BRL",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "BRL" => Ok(Currency::BRL),
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            other => Err(format!("unknown currency code: {other}")),
        }
    }
}

/// An immutable monetary amount tagged with its currency
///
/// Amounts are stored exactly as given; the type applies no rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates Money from an integer amount in minor units (e.g., cents)
    pub fn from_minor(minor_units: i64, currency: Currency) -> Self {
        let divisor = Decimal::new(10_i64.pow(currency.decimal_places()), 0);
        Self::new(Decimal::new(minor_units, 0) / divisor, currency)
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: dec!(0),
            currency,
        }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Returns true if the amount is strictly negative
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Multiplies by a dimensionless scalar, preserving the currency
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self::new(self.amount * factor, self.currency)
    }

    /// Returns the amount with its sign flipped, preserving the currency
    pub fn negate(&self) -> Self {
        Self::new(-self.amount, self.currency)
    }

    /// Returns true if `self` is strictly greater than `other`
    ///
    /// # Panics
    ///
    /// Panics if the currencies differ.
    pub fn is_greater_than(&self, other: &Money) -> bool {
        self.assert_same_currency(other, "compare");
        self.amount > other.amount
    }

    /// Returns true if `self` is strictly less than `other`
    ///
    /// # Panics
    ///
    /// Panics if the currencies differ.
    pub fn is_less_than(&self, other: &Money) -> bool {
        self.assert_same_currency(other, "compare");
        self.amount < other.amount
    }

    /// Returns true if the amounts are equal
    ///
    /// # Panics
    ///
    /// Panics if the currencies differ.
    pub fn is_equal_to(&self, other: &Money) -> bool {
        self.assert_same_currency(other, "compare");
        self.amount == other.amount
    }

    fn assert_same_currency(&self, other: &Money, op: &str) {
        assert!(
            self.currency == other.currency,
            "cannot {op} money with different currencies ({} vs {})",
            self.currency,
            other.currency,
        );
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dp = self.currency.decimal_places();
        write!(
            f,
            "{} {:.dp$}",
            self.currency.symbol(),
            self.amount,
            dp = dp as usize
        )
    }
}

impl Add for Money {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the currencies differ.
    fn add(self, other: Self) -> Self {
        self.assert_same_currency(&other, "add");
        Self::new(self.amount + other.amount, self.currency)
    }
}

impl Sub for Money {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the currencies differ.
    fn sub(self, other: Self) -> Self {
        self.assert_same_currency(&other, "subtract");
        Self::new(self.amount - other.amount, self.currency)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, factor: Decimal) -> Self {
        self.multiply(factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::new(dec!(100.50), Currency::BRL);
        assert_eq!(m.amount(), dec!(100.50));
        assert_eq!(m.currency(), Currency::BRL);
    }

    #[test]
    fn test_money_from_minor() {
        let m = Money::from_minor(10050, Currency::USD);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(dec!(100.00), Currency::BRL);
        let b = Money::new(dec!(50.00), Currency::BRL);

        assert_eq!((a + b).amount(), dec!(150.00));
        assert_eq!((a - b).amount(), dec!(50.00));
    }

    #[test]
    #[should_panic(expected = "cannot add money with different currencies")]
    fn test_add_currency_mismatch_panics() {
        let brl = Money::new(dec!(100.00), Currency::BRL);
        let usd = Money::new(dec!(100.00), Currency::USD);

        let _ = brl + usd;
    }

    #[test]
    fn test_predicates() {
        assert!(Money::zero(Currency::EUR).is_zero());
        assert!(Money::new(dec!(0.01), Currency::EUR).is_positive());
        assert!(Money::new(dec!(-0.01), Currency::EUR).is_negative());
        assert!(!Money::zero(Currency::EUR).is_negative());
        assert!(!Money::zero(Currency::EUR).is_positive());
    }

    #[test]
    fn test_multiply_and_negate_preserve_currency() {
        let m = Money::new(dec!(50.00), Currency::GBP);

        assert_eq!(m.multiply(dec!(3)).amount(), dec!(150.00));
        assert_eq!(m.multiply(dec!(3)).currency(), Currency::GBP);
        assert_eq!(m.negate().amount(), dec!(-50.00));
        assert_eq!((-m).currency(), Currency::GBP);
    }

    #[test]
    fn test_currency_parsing() {
        assert_eq!("brl".parse::<Currency>().unwrap(), Currency::BRL);
        assert!("XYZ".parse::<Currency>().is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn money_addition_is_commutative(
            a in -1_000_000i64..1_000_000i64,
            b in -1_000_000i64..1_000_000i64
        ) {
            let ma = Money::from_minor(a, Currency::BRL);
            let mb = Money::from_minor(b, Currency::BRL);

            prop_assert_eq!(ma + mb, mb + ma);
        }

        #[test]
        fn money_addition_is_associative(
            a in -1_000_000i64..1_000_000i64,
            b in -1_000_000i64..1_000_000i64,
            c in -1_000_000i64..1_000_000i64
        ) {
            let ma = Money::from_minor(a, Currency::BRL);
            let mb = Money::from_minor(b, Currency::BRL);
            let mc = Money::from_minor(c, Currency::BRL);

            prop_assert_eq!((ma + mb) + mc, ma + (mb + mc));
        }

        #[test]
        fn subtraction_undoes_addition(
            a in -1_000_000i64..1_000_000i64,
            b in -1_000_000i64..1_000_000i64
        ) {
            let ma = Money::from_minor(a, Currency::USD);
            let mb = Money::from_minor(b, Currency::USD);

            prop_assert_eq!((ma + mb) - mb, ma);
        }
    }
}
