// Entity Models - the four record types owned by the ledger
//
// All entities carry a stable string id minted by crate::id. They are
// append-only: created through ledger intents, never deleted.

pub mod account;
pub mod category;
pub mod transaction;

pub use account::Account;
pub use category::{Category, CategoryType, Subcategory, EXPENSE_COLOR, INCOME_COLOR};
pub use transaction::{Transaction, TransactionDraft, TransactionType};
