//! Ledger aggregate behavior tests

use chrono::Utc;
use core_kernel::{CategoryId, Currency, Money};
use domain_ledger::{Account, Category, Transaction, TransactionKind};
use rust_decimal_macros::dec;
use test_utils::{TestAccountBuilder, TestTransactionBuilder};

fn tx(
    category_id: CategoryId,
    description: &str,
    amount: Money,
    kind: TransactionKind,
) -> Transaction {
    Transaction::create(category_id, description, amount, kind, Utc::now())
}

#[test]
fn fresh_account_starts_at_zero() {
    let account = Account::create("Checking", Currency::BRL);

    assert_eq!(account.balance(), Money::zero(Currency::BRL));
    assert!(account.transactions().is_empty());
}

#[test]
fn single_income_updates_balance() {
    let category = Category::create("Salary");
    let mut account = Account::create("Checking", Currency::BRL);

    account.add_transaction(tx(
        category.id(),
        "Paycheck",
        Money::new(dec!(100.50), Currency::BRL),
        TransactionKind::Income,
    ));

    assert_eq!(account.balance().amount(), dec!(100.50));
    assert_eq!(account.transactions().len(), 1);
}

#[test]
fn income_then_expense_preserves_insertion_order() {
    let category = Category::create("Misc");
    let mut account = Account::create("Checking", Currency::BRL);

    account.add_transaction(tx(
        category.id(),
        "Paycheck",
        Money::new(dec!(200.00), Currency::BRL),
        TransactionKind::Income,
    ));
    account.add_transaction(tx(
        category.id(),
        "Groceries",
        Money::new(dec!(50.25), Currency::BRL),
        TransactionKind::Expense,
    ));

    assert_eq!(account.balance().amount(), dec!(149.75));
    assert_eq!(account.transactions().len(), 2);
    assert_eq!(account.transactions()[0].description(), "Paycheck");
    assert_eq!(account.transactions()[1].description(), "Groceries");
}

#[test]
fn deleted_account_keeps_history() {
    let mut account = TestAccountBuilder::new()
        .with_name("Old savings")
        .with_currency(Currency::USD)
        .with_transaction(
            TestTransactionBuilder::new()
                .with_description("Deposit")
                .with_amount(Money::new(dec!(10.00), Currency::USD))
                .build(),
        )
        .build();

    account.delete();

    assert!(!account.is_active());
    assert!(account.lifecycle().last_update().is_some());
    assert_eq!(account.balance().amount(), dec!(10.00));
    assert_eq!(account.transactions().len(), 1);
}

#[test]
fn transactions_reference_their_category() {
    let category = Category::create("Rent");
    let mut account = Account::create("Checking", Currency::EUR);

    account.add_transaction(tx(
        category.id(),
        "March rent",
        Money::new(dec!(900.00), Currency::EUR),
        TransactionKind::Expense,
    ));

    assert_eq!(account.transactions()[0].category_id(), category.id());
}

mod replay {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The cached balance always equals a zero-balance replay of the
        /// transaction list.
        #[test]
        fn balance_equals_zero_replay(
            ops in proptest::collection::vec((1i64..1_000_000i64, any::<bool>()), 0..40)
        ) {
            let category = Category::create("Random");
            let mut account = Account::create("Replayed", Currency::BRL);

            for (minor, is_income) in &ops {
                let kind = if *is_income {
                    TransactionKind::Income
                } else {
                    TransactionKind::Expense
                };
                account.add_transaction(Transaction::create(
                    category.id(),
                    "op",
                    Money::from_minor(*minor, Currency::BRL),
                    kind,
                    Utc::now(),
                ));
            }

            let replayed = account
                .transactions()
                .iter()
                .fold(Money::zero(Currency::BRL), |acc, t| acc + t.signed_effect());

            prop_assert_eq!(account.balance(), replayed);
            prop_assert_eq!(account.transactions().len(), ops.len());
        }
    }
}
