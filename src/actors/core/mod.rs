// ============================================================================
// Core Actor Abstractions
// ============================================================================
//
// Generic, reusable actor traits and types.
//
// ============================================================================

pub mod health;

// Re-export core types
pub use health::*;
