//! Strictly increasing identifier allocation.

use crate::object::Uid;
use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out `"1"`, `"2"`, `"3"`, ... and never repeats a value, even after
/// the object holding it is deleted.
#[derive(Debug, Default)]
pub struct UidGenerator {
    last: AtomicU64,
}

impl UidGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next identifier.
    ///
    /// The increment and the read are one atomic step, so concurrent callers
    /// always receive distinct values.
    pub fn next(&self) -> Uid {
        let index = self.last.fetch_add(1, Ordering::SeqCst) + 1;
        Uid::from_index(index)
    }
}
