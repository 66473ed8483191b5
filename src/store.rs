// 🧮 Ledger Store - Intents, reducer, canonical state owner
//
// The store is the single writer of ledger state. Collaborators issue
// intents; each intent is applied by a reducer that consumes the prior
// state and returns a wholly new one, so no observer ever sees a
// partially-applied transition. After each committed transition the new
// state is persisted through the injected snapshot store.
//
// The reducer itself never rejects an intent. Callers that want to
// pre-validate (empty names, non-positive amounts, dangling references)
// run Intent::validate first; skipping it reproduces the tolerant
// behavior where a transaction with an unknown account is recorded but
// moves no money.

use anyhow::Result;
use thiserror::Error;

use crate::entities::{Account, Category, CategoryType, Subcategory, TransactionDraft, TransactionType};
use crate::persistence::SnapshotStore;
use crate::state::LedgerState;

// ============================================================================
// INTENTS
// ============================================================================

/// A requested state transition. Closed set, dispatched exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Replace the entire state with a snapshot (startup only).
    Initialize(LedgerState),

    /// Append a new account with zero balance in the ledger currency.
    CreateAccount { name: String },

    /// Append a new category; color is derived from the type.
    CreateCategory { name: String, kind: CategoryType },

    /// Append a new subcategory under `category_id`.
    CreateSubcategory { category_id: String, name: String },

    /// Record a transaction and apply its signed balance effects.
    RecordTransaction(TransactionDraft),
}

/// Caller-side pre-flight failures. The reducer never raises these; they
/// exist so a form layer can reject bad input before issuing the intent.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("amount must be positive, got {0}")]
    NonPositiveAmount(f64),

    #[error("unknown account: {0}")]
    UnknownAccount(String),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("transfer requires a target account")]
    MissingTransferTarget,
}

impl Intent {
    /// Check this intent against the current state.
    ///
    /// Optional: `dispatch` does not call it. A clean result means the
    /// intent will fully take effect (no inert transaction, no dangling
    /// subcategory).
    pub fn validate(&self, state: &LedgerState) -> std::result::Result<(), ValidationError> {
        match self {
            Intent::Initialize(_) => Ok(()),
            Intent::CreateAccount { name } | Intent::CreateCategory { name, .. } => {
                require_name(name)
            }
            Intent::CreateSubcategory { category_id, name } => {
                require_name(name)?;
                require_category(state, category_id)
            }
            Intent::RecordTransaction(draft) => {
                if draft.amount <= 0.0 {
                    return Err(ValidationError::NonPositiveAmount(draft.amount));
                }
                require_account(state, &draft.account_id)?;
                if draft.kind == TransactionType::Transfer {
                    match &draft.to_account_id {
                        None => return Err(ValidationError::MissingTransferTarget),
                        Some(target) => require_account(state, target)?,
                    }
                }
                if let Some(category_id) = &draft.category_id {
                    require_category(state, category_id)?;
                }
                Ok(())
            }
        }
    }
}

fn require_name(name: &str) -> std::result::Result<(), ValidationError> {
    if name.trim().is_empty() {
        Err(ValidationError::EmptyName)
    } else {
        Ok(())
    }
}

fn require_account(state: &LedgerState, id: &str) -> std::result::Result<(), ValidationError> {
    if state.account(id).is_none() {
        return Err(ValidationError::UnknownAccount(id.to_string()));
    }
    Ok(())
}

fn require_category(state: &LedgerState, id: &str) -> std::result::Result<(), ValidationError> {
    if state.category(id).is_none() {
        return Err(ValidationError::UnknownCategory(id.to_string()));
    }
    Ok(())
}

// ============================================================================
// REDUCER
// ============================================================================

/// Apply one intent to a state, returning the successor state.
///
/// The prior state is untouched; every transition is all-or-nothing. Fresh
/// ids are minted here, which is the only effect beyond pure computation.
pub fn apply(state: &LedgerState, intent: Intent) -> LedgerState {
    match intent {
        Intent::Initialize(snapshot) => snapshot,

        Intent::CreateAccount { name } => {
            let mut next = state.clone();
            next.accounts.push(Account::new(name, state.currency.clone()));
            next
        }

        Intent::CreateCategory { name, kind } => {
            let mut next = state.clone();
            next.categories.push(Category::new(name, kind));
            next
        }

        Intent::CreateSubcategory { category_id, name } => {
            // Existence of category_id is a caller contract, not checked here.
            let mut next = state.clone();
            next.subcategories.push(Subcategory::new(category_id, name));
            next
        }

        Intent::RecordTransaction(draft) => record_transaction(state, draft),
    }
}

/// The core balance algorithm.
///
/// income:   source += amount          (only if the source resolves)
/// expense:  source -= amount          (only if the source resolves;
///                                      no overdraft guard)
/// transfer: source -= amount,
///           target += amount          (only if BOTH resolve)
///
/// The transaction record is prepended regardless of whether the accounts
/// resolved - a dangling reference yields an inert, but stored, record.
fn record_transaction(state: &LedgerState, draft: TransactionDraft) -> LedgerState {
    let mut accounts = state.accounts.clone();

    let source = accounts.iter().position(|a| a.id == draft.account_id);
    let target = draft
        .to_account_id
        .as_deref()
        .and_then(|id| accounts.iter().position(|a| a.id == id));

    match draft.kind {
        TransactionType::Income => {
            if let Some(s) = source {
                accounts[s].balance += draft.amount;
            }
        }
        TransactionType::Expense => {
            if let Some(s) = source {
                accounts[s].balance -= draft.amount;
            }
        }
        TransactionType::Transfer => {
            if let (Some(s), Some(t)) = (source, target) {
                accounts[s].balance -= draft.amount;
                accounts[t].balance += draft.amount;
            }
        }
    }

    // Most-recent-first: new transaction goes to the front.
    let mut transactions = Vec::with_capacity(state.transactions.len() + 1);
    transactions.push(draft.into_transaction());
    transactions.extend_from_slice(&state.transactions);

    LedgerState {
        currency: state.currency.clone(),
        accounts,
        categories: state.categories.clone(),
        subcategories: state.subcategories.clone(),
        transactions,
    }
}

// ============================================================================
// LEDGER STORE
// ============================================================================

/// Owner of the canonical [`LedgerState`].
///
/// Constructed once at application start with an injected snapshot store;
/// no ambient singleton. `open` performs the startup Initialize from
/// whatever the adapter restores (seed state on absence or corruption).
pub struct LedgerStore {
    state: LedgerState,
    snapshots: SnapshotStore,
}

impl LedgerStore {
    /// Restore the last persisted snapshot and start accepting intents.
    pub fn open(snapshots: SnapshotStore) -> Self {
        let restored = snapshots.load();
        let state = apply(&LedgerState::seed(), Intent::Initialize(restored));
        LedgerStore { state, snapshots }
    }

    /// Current snapshot, for rendering and derived figures.
    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    /// Apply an intent and persist the successor state.
    ///
    /// The in-memory transition always commits; a failed save surfaces as
    /// an error but the next successful save rewrites the full snapshot.
    pub fn dispatch(&mut self, intent: Intent) -> Result<()> {
        tracing::debug!(intent = intent_name(&intent), "applying intent");
        self.state = apply(&self.state, intent);
        self.snapshots.save(&self.state)
    }

    /// Create an account; returns its freshly minted id.
    pub fn create_account(&mut self, name: impl Into<String>) -> Result<String> {
        self.dispatch(Intent::CreateAccount { name: name.into() })?;
        Ok(self.state.accounts.last().map(|a| a.id.clone()).unwrap_or_default())
    }

    /// Create a category; returns its freshly minted id.
    pub fn create_category(
        &mut self,
        name: impl Into<String>,
        kind: CategoryType,
    ) -> Result<String> {
        self.dispatch(Intent::CreateCategory { name: name.into(), kind })?;
        Ok(self.state.categories.last().map(|c| c.id.clone()).unwrap_or_default())
    }

    /// Create a subcategory; returns its freshly minted id.
    pub fn create_subcategory(
        &mut self,
        category_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<String> {
        self.dispatch(Intent::CreateSubcategory {
            category_id: category_id.into(),
            name: name.into(),
        })?;
        Ok(self.state.subcategories.last().map(|s| s.id.clone()).unwrap_or_default())
    }

    /// Record a transaction; returns its freshly minted id.
    pub fn record_transaction(&mut self, draft: TransactionDraft) -> Result<String> {
        self.dispatch(Intent::RecordTransaction(draft))?;
        Ok(self.state.transactions.first().map(|t| t.id.clone()).unwrap_or_default())
    }
}

fn intent_name(intent: &Intent) -> &'static str {
    match intent {
        Intent::Initialize(_) => "Initialize",
        Intent::CreateAccount { .. } => "CreateAccount",
        Intent::CreateCategory { .. } => "CreateCategory",
        Intent::CreateSubcategory { .. } => "CreateSubcategory",
        Intent::RecordTransaction(_) => "RecordTransaction",
    }
}
