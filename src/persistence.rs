// 💾 Persistence Adapter - One snapshot under one fixed key
//
// The whole ledger state is serialized as a single JSON document and kept
// in a SQLite row keyed by STORAGE_KEY. Every save overwrites the prior
// value; last write wins. Corruption never propagates: an unreadable
// snapshot is logged and replaced by the built-in seed state.

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use serde::Deserialize;
use std::path::Path;

use crate::entities::{Account, Category, Subcategory, Transaction};
use crate::state::LedgerState;

/// Fixed key under which the one-and-only snapshot lives.
pub const STORAGE_KEY: &str = "nexa-ledger-state-v1";

/// Stored snapshot with every top-level field optional.
///
/// Older or partial snapshots deserialize into this and are back-filled
/// field-by-field from the seed state, so schema drift stays loadable.
#[derive(Debug, Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    currency: Option<String>,

    #[serde(default)]
    accounts: Option<Vec<Account>>,

    #[serde(default)]
    categories: Option<Vec<Category>>,

    #[serde(default)]
    subcategories: Option<Vec<Subcategory>>,

    #[serde(default)]
    transactions: Option<Vec<Transaction>>,
}

impl RawSnapshot {
    /// Field-level merge: take what the snapshot has, seed the rest.
    fn merge_with_seed(self) -> LedgerState {
        let seed = LedgerState::seed();
        LedgerState {
            currency: self.currency.unwrap_or(seed.currency),
            accounts: self.accounts.unwrap_or(seed.accounts),
            categories: self.categories.unwrap_or(seed.categories),
            subcategories: self.subcategories.unwrap_or(seed.subcategories),
            transactions: self.transactions.unwrap_or(seed.transactions),
        }
    }
}

/// Durable storage for the ledger snapshot.
///
/// Exactly one adapter instance should own the durable key. Concurrent
/// writers from independent processes are last-write-wins; earlier writes
/// are silently lost (documented limitation, not a guarantee).
pub struct SnapshotStore {
    conn: Connection,
}

impl SnapshotStore {
    /// Open (or create) the snapshot database at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path.as_ref())
            .with_context(|| format!("opening snapshot db at {}", path.as_ref().display()))?;
        Self::setup(conn)
    }

    /// In-memory store, mainly for tests.
    pub fn in_memory() -> Result<Self> {
        Self::setup(Connection::open_in_memory()?)
    }

    fn setup(conn: Connection) -> Result<Self> {
        // WAL mode for crash recovery (no effect on in-memory connections)
        let _ = conn.pragma_update(None, "journal_mode", "WAL");

        conn.execute(
            "CREATE TABLE IF NOT EXISTS snapshots (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )
        .context("creating snapshots table")?;

        Ok(SnapshotStore { conn })
    }

    /// Serialize and write the full snapshot, overwriting any prior value.
    pub fn save(&self, state: &LedgerState) -> Result<()> {
        let value = serde_json::to_string(state).context("serializing ledger snapshot")?;
        self.conn
            .execute(
                "INSERT OR REPLACE INTO snapshots (key, value, updated_at)
                 VALUES (?1, ?2, CURRENT_TIMESTAMP)",
                params![STORAGE_KEY, value],
            )
            .context("writing ledger snapshot")?;
        Ok(())
    }

    /// Read and deserialize the stored snapshot.
    ///
    /// - no entry          → seed state
    /// - unparseable entry → warning + seed state
    /// - partial entry     → present fields kept, absent ones seeded
    ///
    /// Never raises: corruption is recovered locally, not escalated.
    pub fn load(&self) -> LedgerState {
        let stored: Option<String> = match self
            .conn
            .query_row(
                "SELECT value FROM snapshots WHERE key = ?1",
                params![STORAGE_KEY],
                |row| row.get(0),
            )
            .optional()
        {
            Ok(row) => row,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read ledger snapshot, using seed state");
                return LedgerState::seed();
            }
        };

        let Some(raw) = stored else {
            return LedgerState::seed();
        };

        match serde_json::from_str::<RawSnapshot>(&raw) {
            Ok(snapshot) => snapshot.merge_with_seed(),
            Err(err) => {
                tracing::warn!(error = %err, "stored ledger snapshot is unparseable, using seed state");
                LedgerState::seed()
            }
        }
    }

    /// Raw stored value under the fixed key, if any. Test/diagnostic hook.
    #[cfg(test)]
    fn raw_value(&self) -> Option<String> {
        self.conn
            .query_row(
                "SELECT value FROM snapshots WHERE key = ?1",
                params![STORAGE_KEY],
                |row| row.get(0),
            )
            .optional()
            .unwrap()
    }

    #[cfg(test)]
    fn put_raw(&self, value: &str) {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO snapshots (key, value) VALUES (?1, ?2)",
                params![STORAGE_KEY, value],
            )
            .unwrap();
    }
}
