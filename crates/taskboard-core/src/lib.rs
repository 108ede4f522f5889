pub mod config;
pub mod error;
pub mod id;
pub mod owner;
pub mod task;

// Re-export common error type
pub use error::{Result, TaskboardError};
