//! Identifier generation seam.
//!
//! Use cases ask an [`IdGenerator`] for a fresh identifier every time they
//! create an entity. Implementations live in the infrastructure crate.

/// Produces identifiers for new owners and tasks.
///
/// Every call must return a value that has not been returned before by the
/// same generator.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}
