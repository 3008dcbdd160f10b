// ============================================================================
// Kitchen Domain - ingredients, recipes, inventory and cooking
// ============================================================================
//
// This module contains ALL kitchen-specific code:
// - Value objects (Ingredient, Recipe)
// - Recipe catalog (static recipes, case-insensitive lookup)
// - Inventory (stock levels + thread-safe store)
// - Errors (InventoryError, KitchenError)
// - Cooking engine (CookingEngine, CookingResult)
//
// ============================================================================

pub mod value_objects;
pub mod recipes;
pub mod inventory;
pub mod errors;
pub mod cooking;

// Re-export for convenience
pub use value_objects::*;
pub use inventory::*;
pub use errors::*;
pub use cooking::*;
