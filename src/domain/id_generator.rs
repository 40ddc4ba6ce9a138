use std::sync::atomic::{AtomicI64, Ordering};

/// Hands out strictly increasing ids for the lifetime of the process.
///
/// Ids start at 1. Past `i64::MAX` the counter wraps to `i64::MIN`; that range is not handled.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    //single read-modify-write, so concurrent callers never share an id
    pub fn next(&self) -> i64 {
        self.last.fetch_add(1, Ordering::SeqCst).wrapping_add(1)
    }
}
