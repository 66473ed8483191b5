// 📒 Ledger State - The canonical snapshot
//
// One value holding everything the presentation layer may read: accounts,
// categories, subcategories, transactions, and the display currency.
// Transitions produce a wholly new LedgerState; nothing mutates in place
// from an observer's perspective.

use serde::{Deserialize, Serialize};

use crate::entities::{Account, Category, CategoryType, Subcategory, Transaction, TransactionType};

/// Complete ledger state at a point in time.
///
/// Transactions are ordered most-recent-first by insertion (LIFO prepend),
/// not by their `date` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerState {
    /// Display currency for the whole ledger (ISO 4217 code)
    pub currency: String,
    pub accounts: Vec<Account>,
    pub categories: Vec<Category>,
    pub subcategories: Vec<Subcategory>,
    pub transactions: Vec<Transaction>,
}

impl LedgerState {
    /// Built-in bootstrap state, used when no snapshot exists or the
    /// stored one is unreadable.
    pub fn seed() -> Self {
        LedgerState {
            currency: "INR".to_string(),
            accounts: vec![
                Account::seeded("wallet", "Wallet", "INR", 8500.0),
                Account::seeded("savings", "Savings", "INR", 42000.0),
            ],
            categories: vec![
                Category::seeded("salary", "Salary", CategoryType::Income, "#22c55e"),
                Category::seeded("freelance", "Freelance", CategoryType::Income, "#0ea5e9"),
                Category::seeded("food", "Food & Dining", CategoryType::Expense, "#f97316"),
                Category::seeded("bills", "Bills & Utilities", CategoryType::Expense, "#a855f7"),
            ],
            subcategories: vec![
                Subcategory::seeded("food-groceries", "food", "Groceries"),
                Subcategory::seeded("food-restaurants", "food", "Restaurants"),
                Subcategory::seeded("bills-electricity", "bills", "Electricity"),
                Subcategory::seeded("bills-emi", "bills", "EMI"),
            ],
            transactions: Vec::new(),
        }
    }

    // ========================================================================
    // LOOKUPS
    // ========================================================================

    pub fn account(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn subcategory(&self, id: &str) -> Option<&Subcategory> {
        self.subcategories.iter().find(|s| s.id == id)
    }

    /// Subcategories of a category, in insertion order.
    pub fn subcategories_of<'a>(
        &'a self,
        category_id: &'a str,
    ) -> impl Iterator<Item = &'a Subcategory> {
        self.subcategories
            .iter()
            .filter(move |s| s.category_id == category_id)
    }

    // ========================================================================
    // DERIVED FIGURES
    // Collaborators read these instead of doing their own arithmetic.
    // ========================================================================

    /// Sum of all account balances.
    pub fn total_balance(&self) -> f64 {
        self.accounts.iter().map(|a| a.balance).sum()
    }

    /// Sum of all recorded income amounts.
    pub fn income_total(&self) -> f64 {
        self.transactions
            .iter()
            .filter(|t| t.kind == TransactionType::Income)
            .map(|t| t.amount)
            .sum()
    }

    /// Sum of all recorded expense amounts.
    pub fn expense_total(&self) -> f64 {
        self.transactions
            .iter()
            .filter(|t| t.kind == TransactionType::Expense)
            .map(|t| t.amount)
            .sum()
    }
}

impl Default for LedgerState {
    fn default() -> Self {
        Self::seed()
    }
}
