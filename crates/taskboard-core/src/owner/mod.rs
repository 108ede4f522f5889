//! Owner domain module.
//!
//! An owner is a registered actor that can hold zero or more tasks.
//!
//! # Module Structure
//!
//! - `model`: The `Owner` entity
//! - `repository`: Owner repository trait for persistence

mod model;
pub mod repository;

// Re-export public API
pub use model::Owner;
pub use repository::OwnerRepository;
