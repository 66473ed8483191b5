// 💳 Account Entity - Stable identity, derived balance
//
// "Account name is a VALUE, Account UUID is IDENTITY (never changes)"
//
// Balance is the only field that ever changes after creation, and only as
// the signed effect of applying a transaction. Accounts are never deleted.

use serde::{Deserialize, Serialize};

use crate::id;

/// A money account (wallet, bank account, ...).
///
/// Identity: `id` (UUID) - never changes.
/// Values: `name`, `currency` - fixed at creation in the current design.
/// State: `balance` - mutated exclusively by the ledger reducer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Stable identity (UUID) - NEVER changes
    pub id: String,

    /// Display name (e.g., "Wallet"). No uniqueness constraint.
    pub name: String,

    /// Currency (ISO 4217 code: INR, USD, EUR, ...)
    pub currency: String,

    /// Signed balance. May go negative: expenses carry no overdraft guard.
    pub balance: f64,
}

impl Account {
    /// Create a new account with a fresh id and a zero balance.
    pub fn new(name: impl Into<String>, currency: impl Into<String>) -> Self {
        Account {
            id: id::generate(),
            name: name.into(),
            currency: currency.into(),
            balance: 0.0,
        }
    }

    /// Seed constructor: fixed id and opening balance (bootstrap data only).
    pub fn seeded(
        id: impl Into<String>,
        name: impl Into<String>,
        currency: impl Into<String>,
        balance: f64,
    ) -> Self {
        Account {
            id: id.into(),
            name: name.into(),
            currency: currency.into(),
            balance,
        }
    }

    /// Check if the account is overdrawn (negative balance)
    pub fn is_overdrawn(&self) -> bool {
        self.balance < 0.0
    }
}
