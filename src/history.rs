use crate::clock::{Clock, SystemClock};
use crate::transaction::Kind;
use crate::Amount;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Text form of a record's timestamp, everywhere one is rendered.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// One successful transaction, as remembered by an account.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub kind: Kind,
    pub amount: Amount,
    #[serde(with = "timestamp")]
    pub timestamp: NaiveDateTime,
}

/// Append-only log of the transactions that succeeded against one account.
///
/// Insertion order is meaningful: records are never removed or rewritten, so
/// the log reads as the exact sequence of balance mutations.
pub struct History {
    entries: Vec<Entry>,
    clock: Box<dyn Clock>,
}

impl History {
    /// An empty log timestamping its records with `clock`.
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            entries: Vec::new(),
            clock,
        }
    }

    /// All records, oldest first.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of withdrawals that ever succeeded against the owning account,
    /// counted by scanning the full log.
    pub fn withdrawal_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.kind == Kind::Withdrawal)
            .count()
    }

    // Records only ever enter the log through `Transaction::apply`, after the
    // account primitive succeeded.
    pub(crate) fn record(&mut self, kind: Kind, amount: Amount) {
        self.entries.push(Entry {
            kind,
            amount,
            timestamp: self.clock.now(),
        });
    }
}

impl Default for History {
    fn default() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }
}

mod timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::Serializer;

    pub fn serialize<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&timestamp.format(TIMESTAMP_FORMAT).to_string())
    }
}
