use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static ENTITY_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Process-wide identity handed to every shape at construction. Ids are
/// unique and strictly increasing for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(u64);

impl EntityId {
    pub fn new() -> Self {
        return EntityId(ENTITY_COUNTER.fetch_add(1, Ordering::Relaxed));
    }

    pub fn raw(&self) -> u64 {
        return self.0;
    }

    /// How many ids have been handed out so far.
    pub fn issued() -> u64 {
        return ENTITY_COUNTER.load(Ordering::Relaxed) - 1;
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "#{}", self.0);
    }
}

//-------------------------------------------------------------
