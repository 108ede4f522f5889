//! IdGenerator implementations.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use taskboard_core::config::{IdStrategy, TaskboardConfig};
use taskboard_core::id::IdGenerator;
use uuid::Uuid;

/// Generates random UUID v4 identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Generates increasing decimal identifiers: "1", "2", "3", ...
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        self.next.fetch_add(1, Ordering::Relaxed).to_string()
    }
}

/// Builds the generator selected by `config.id_strategy`.
pub fn from_config(config: &TaskboardConfig) -> Arc<dyn IdGenerator> {
    match config.id_strategy {
        IdStrategy::Uuid => Arc::new(UuidIdGenerator),
        IdStrategy::Sequential => {
            Arc::new(SequentialIdGenerator::starting_at(config.sequential_start))
        }
    }
}
