//! Common test fixtures

use core_kernel::{Currency, Money};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Ready-made monetary amounts
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// An arbitrary mid-sized BRL amount
    pub fn brl_salary() -> Money {
        Money::new(dec!(3500.00), Currency::BRL)
    }

    /// A small BRL expense amount
    pub fn brl_groceries() -> Money {
        Money::new(dec!(250.75), Currency::BRL)
    }

    /// BRL with an explicit amount
    pub fn brl(amount: Decimal) -> Money {
        Money::new(amount, Currency::BRL)
    }

    /// USD with an explicit amount
    pub fn usd(amount: Decimal) -> Money {
        Money::new(amount, Currency::USD)
    }
}
