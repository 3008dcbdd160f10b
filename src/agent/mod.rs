// ============================================================================
// Agent Tools - kitchen primitives exposed to an external LLM driver
// ============================================================================
//
// Tools take JSON arguments and return plain strings so any LLM client can
// relay them. No LLM client lives in this crate.
//
// ============================================================================

mod tools;

pub use tools::{InventoryTools, ToolError};
