//! Request id generation

use rand::Rng;
use std::fmt::Debug;
use std::sync::atomic::{AtomicI64, Ordering};

/// Supplies a unique id for each request
///
/// Ids must be unique; ordering is not required.
pub trait IdGenerator: Send + Sync + Debug {
    fn generate(&self) -> i64;
}

/// Random non-negative ids
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> i64 {
        rand::thread_rng().gen_range(0..i64::MAX)
    }
}

/// Counter starting at a chosen value
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicI64,
}

impl SequentialIdGenerator {
    pub fn new(start: i64) -> Self {
        Self {
            next: AtomicI64::new(start),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> i64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}
