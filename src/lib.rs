// Nexa Ledger - Core Library
// Ledger state manager for a personal finance tracker: entities, reducer,
// snapshot persistence, and id issuance. Presentation layers read the
// snapshot and issue intents; this crate is the only writer of state.

pub mod entities;
pub mod id;
pub mod persistence;
pub mod state;
pub mod store;

// Re-export commonly used types
pub use entities::{
    Account, Category, CategoryType, Subcategory,
    Transaction, TransactionDraft, TransactionType,
};
pub use persistence::{SnapshotStore, STORAGE_KEY};
pub use state::LedgerState;
pub use store::{apply, Intent, LedgerStore, ValidationError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
