//! Domain layer containing the entities shared across the workspace.

pub mod entities;

// Re-export commonly used domain types
pub use entities::*;
