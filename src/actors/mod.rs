// ============================================================================
// Actors Module
// ============================================================================
//
// Structure:
// - core/          - Abstract traits and types (HealthCheckable, ComponentHealth)
// - kitchen_actor  - KitchenActor, the single owner of the cooking engine
//
// ============================================================================

mod core;
mod kitchen_actor;

pub use kitchen_actor::{
    CookPizzas, GetInventory, GetKitchenHealth, HasIngredient, KitchenActor, ResetInventory,
};
