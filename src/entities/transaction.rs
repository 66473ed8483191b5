// 💸 Transaction Entity - Immutable movement of money
//
// Transactions are append-only: no editing, no deletion. The record keeps
// every cross-reference as an explicit Option; a reference that does not
// resolve still produces a stored record, just no balance effect.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id;

// ============================================================================
// TRANSACTION TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money into the source account
    Income,

    /// Money out of the source account
    Expense,

    /// Money moved from the source account to the target account
    Transfer,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
            TransactionType::Transfer => "transfer",
        }
    }
}

// ============================================================================
// TRANSACTION ENTITY
// ============================================================================

/// A single recorded movement of money. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Stable identity (UUID) - NEVER changes
    pub id: String,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Positive amount; the sign of the balance effect comes from `kind`
    pub amount: f64,

    /// Source account. Should reference an existing account; the reducer
    /// tolerates a dangling id (record kept, no balance effect).
    pub account_id: String,

    /// Target account - required and meaningful only for transfers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_account_id: Option<String>,

    /// Classification - meaningful only for income/expense
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// User-facing date of the movement. Insertion order, not this field,
    /// drives the ordering of the transaction sequence.
    pub date: DateTime<Utc>,
}

/// Caller-supplied input for recording a transaction: everything except
/// the id, which the ledger store mints.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub kind: TransactionType,
    pub amount: f64,
    pub account_id: String,
    pub to_account_id: Option<String>,
    pub category_id: Option<String>,
    pub subcategory_id: Option<String>,
    pub notes: Option<String>,
    pub date: DateTime<Utc>,
}

impl TransactionDraft {
    /// Shorthand for an income/expense draft with no classification.
    pub fn simple(
        kind: TransactionType,
        amount: f64,
        account_id: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        TransactionDraft {
            kind,
            amount,
            account_id: account_id.into(),
            to_account_id: None,
            category_id: None,
            subcategory_id: None,
            notes: None,
            date,
        }
    }

    /// Shorthand for a transfer draft between two accounts.
    pub fn transfer(
        amount: f64,
        account_id: impl Into<String>,
        to_account_id: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        TransactionDraft {
            kind: TransactionType::Transfer,
            amount,
            account_id: account_id.into(),
            to_account_id: Some(to_account_id.into()),
            category_id: None,
            subcategory_id: None,
            notes: None,
            date,
        }
    }

    /// Materialize the draft into a transaction with a fresh id.
    pub fn into_transaction(self) -> Transaction {
        Transaction {
            id: id::generate(),
            kind: self.kind,
            amount: self.amount,
            account_id: self.account_id,
            to_account_id: self.to_account_id,
            category_id: self.category_id,
            subcategory_id: self.subcategory_id,
            notes: self.notes,
            date: self.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_draft_into_transaction_mints_id() {
        let draft = TransactionDraft::simple(TransactionType::Income, 500.0, "wallet", test_date());
        let tx = draft.clone().into_transaction();
        assert!(!tx.id.is_empty());
        assert_eq!(tx.kind, TransactionType::Income);
        assert_eq!(tx.amount, 500.0);
        assert_eq!(tx.account_id, "wallet");
        assert_eq!(tx.to_account_id, None);

        // Fresh id every time
        let tx2 = draft.into_transaction();
        assert_ne!(tx.id, tx2.id);
    }

    #[test]
    fn test_transfer_draft_carries_target() {
        let draft = TransactionDraft::transfer(200.0, "wallet", "savings", test_date());
        assert_eq!(draft.kind, TransactionType::Transfer);
        assert_eq!(draft.to_account_id.as_deref(), Some("savings"));
    }

    #[test]
    fn test_transaction_serde_omits_absent_options() {
        let tx = TransactionDraft::simple(TransactionType::Expense, 42.0, "wallet", test_date())
            .into_transaction();
        let json = serde_json::to_value(&tx).unwrap();

        assert_eq!(json["type"], "expense");
        assert_eq!(json["accountId"], "wallet");
        assert!(json.get("toAccountId").is_none());
        assert!(json.get("categoryId").is_none());
        assert!(json.get("notes").is_none());
    }

    #[test]
    fn test_transaction_serde_camel_case_round_trip() {
        let mut draft = TransactionDraft::transfer(200.0, "wallet", "savings", test_date());
        draft.notes = Some("monthly move".to_string());
        let tx = draft.into_transaction();

        let json = serde_json::to_string(&tx).unwrap();
        assert!(json.contains("\"toAccountId\":\"savings\""));

        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tx);
    }
}
