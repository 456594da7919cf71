//! Record identifiers.
//!
//! Each widget owns its own [`IdGen`]. Ids are handed out from a strictly
//! increasing counter rather than the wall clock, so two records created in the
//! same instant can never share an id.

use serde::{Deserialize, Serialize};
use std::fmt;

pub type TaskId = RecordId;
pub type PersonId = RecordId;
pub type ProductId = RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct IdGen {
    next: u64,
}

impl IdGen {
    /// Start allocating after the largest id already in use.
    pub fn after<I>(existing: I) -> Self
    where
        I: IntoIterator<Item = RecordId>,
    {
        let max = existing.into_iter().map(|id| id.0).max().unwrap_or(0);
        Self { next: max + 1 }
    }

    pub fn allocate(&mut self) -> RecordId {
        let id = RecordId(self.next);
        self.next += 1;
        id
    }
}

impl Default for IdGen {
    fn default() -> Self {
        Self { next: 1 }
    }
}
