//! The session's record store.

use shared::ExpenseEntry;

/// Append-only, insertion-ordered record of the session's expenses.
///
/// Created empty when the server starts and discarded when it exits. There is
/// no update or delete operation, so the sequence never shrinks, and nothing
/// enforces uniqueness; identical entries may be recorded twice.
#[derive(Debug, Default)]
pub struct ExpenseLedger {
    entries: Vec<ExpenseEntry>,
}

impl ExpenseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry to the end of the sequence.
    ///
    /// Callers must only append entries that passed validation; the ledger
    /// itself does not re-check.
    pub fn append(&mut self, entry: ExpenseEntry) {
        self.entries.push(entry);
    }

    /// Snapshot of all entries in insertion order.
    pub fn all(&self) -> Vec<ExpenseEntry> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
