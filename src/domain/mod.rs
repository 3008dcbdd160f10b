// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Pure kitchen logic with no knowledge of HTTP, actors or metrics.
// The only shared mutable state is the InventoryStore.
//
// ============================================================================

pub mod kitchen;
