use super::value_objects::Ingredient;

// ============================================================================
// Kitchen Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InventoryError {
    #[error("Not enough {ingredient} in inventory: requested {requested}, available {available}")]
    InsufficientStock {
        ingredient: Ingredient,
        requested: u32,
        available: u32,
    },

    #[error("Invalid quantity for {ingredient}: {quantity}")]
    InvalidArgument { ingredient: Ingredient, quantity: u32 },

    #[error("Unknown ingredient: {0}")]
    UnknownIngredient(String),

    #[error("Inventory lock poisoned")]
    LockPoisoned,
}

impl<T> From<std::sync::PoisonError<T>> for InventoryError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        InventoryError::LockPoisoned
    }
}

#[derive(Debug, thiserror::Error)]
pub enum KitchenError {
    /// A consume failed after its feasibility check passed
    #[error("Inventory invariant violated while cooking {pizza}: {source}")]
    InventoryInvariant {
        pizza: String,
        #[source]
        source: InventoryError,
    },

    #[error(transparent)]
    Inventory(#[from] InventoryError),
}
