//! Request handlers

pub mod accounts;
pub mod auth;
pub mod categories;
pub mod health;
pub mod transactions;
pub mod users;

use core_kernel::Currency;
use core_kernel::Error;

/// Default currency for accounts created without one
pub(crate) const DEFAULT_CURRENCY: Currency = Currency::BRL;

/// Parses an ISO 4217 code, mapping failure to the boundary's validation error
pub(crate) fn parse_currency(code: &str) -> Result<Currency, Error> {
    code.parse()
        .map_err(|_| Error::validation("The field Currency must be a valid currency."))
}
