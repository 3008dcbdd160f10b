use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use super::errors::InventoryError;
use super::value_objects::Ingredient;

// ============================================================================
// Inventory - ingredient stock levels
// ============================================================================
//
// `Inventory` is the plain state; `InventoryStore` owns one behind a mutex
// and is the single process-wide instance shared by the cooking engine, the
// HTTP layer and the agent tools.
//
// ============================================================================

/// Stock after construction and after every reset
pub const INITIAL_STOCK: [(Ingredient, u32); 12] = [
    (Ingredient::Dough, 20),
    (Ingredient::TomatoSauce, 15),
    (Ingredient::Mozzarella, 25),
    (Ingredient::Pepperoni, 10),
    (Ingredient::Mushrooms, 12),
    (Ingredient::Olives, 8),
    (Ingredient::BellPepper, 10),
    (Ingredient::Onion, 10),
    (Ingredient::Ham, 8),
    (Ingredient::Pineapple, 6),
    (Ingredient::Bacon, 10),
    (Ingredient::Basil, 15),
];

pub type Snapshot = BTreeMap<Ingredient, u32>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    stock: Snapshot,
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            stock: INITIAL_STOCK.into_iter().collect(),
        }
    }

    /// Inventory holding exactly the given quantities; anything else reads as 0
    #[allow(dead_code)]
    pub fn from_quantities(quantities: impl IntoIterator<Item = (Ingredient, u32)>) -> Self {
        Self {
            stock: quantities.into_iter().collect(),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.stock.clone()
    }

    pub fn quantity_of(&self, ingredient: Ingredient) -> u32 {
        self.stock.get(&ingredient).copied().unwrap_or(0)
    }

    pub fn has(&self, ingredient: Ingredient, quantity: u32) -> bool {
        self.quantity_of(ingredient) >= quantity
    }

    /// Removes `quantity` of `ingredient`. Leaves the stock untouched on error.
    pub fn consume(&mut self, ingredient: Ingredient, quantity: u32) -> Result<(), InventoryError> {
        if quantity == 0 {
            return Err(InventoryError::InvalidArgument { ingredient, quantity });
        }

        let available = self.quantity_of(ingredient);
        if available < quantity {
            return Err(InventoryError::InsufficientStock {
                ingredient,
                requested: quantity,
                available,
            });
        }

        self.stock.insert(ingredient, available - quantity);
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Ingredients currently at zero (or absent), in declaration order
    pub fn depleted(&self) -> Vec<Ingredient> {
        Ingredient::ALL
            .into_iter()
            .filter(|ingredient| self.quantity_of(*ingredient) == 0)
            .collect()
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Inventory Store - thread-safe owner of the process inventory
// ============================================================================

#[derive(Debug, Default)]
pub struct InventoryStore {
    inventory: Mutex<Inventory>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::with_inventory(Inventory::new())
    }

    pub fn with_inventory(inventory: Inventory) -> Self {
        Self {
            inventory: Mutex::new(inventory),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inventory>, InventoryError> {
        Ok(self.inventory.lock()?)
    }

    /// Runs `f` with exclusive access to the inventory.
    ///
    /// No other caller can read or write stock until `f` returns, so any
    /// sequence of `has` checks followed by `consume` calls inside `f` is atomic.
    pub fn with_lock<R>(&self, f: impl FnOnce(&mut Inventory) -> R) -> Result<R, InventoryError> {
        let mut inventory = self.lock()?;
        Ok(f(&mut inventory))
    }

    pub fn snapshot(&self) -> Result<Snapshot, InventoryError> {
        Ok(self.lock()?.snapshot())
    }

    #[allow(dead_code)]
    pub fn quantity_of(&self, ingredient: Ingredient) -> Result<u32, InventoryError> {
        Ok(self.lock()?.quantity_of(ingredient))
    }

    pub fn has(&self, ingredient: Ingredient, quantity: u32) -> Result<bool, InventoryError> {
        Ok(self.lock()?.has(ingredient, quantity))
    }

    #[allow(dead_code)]
    pub fn consume(&self, ingredient: Ingredient, quantity: u32) -> Result<(), InventoryError> {
        self.lock()?.consume(ingredient, quantity)
    }

    pub fn reset(&self) -> Result<(), InventoryError> {
        self.lock()?.reset();
        tracing::info!("Inventory reset to initial stock");
        Ok(())
    }

    pub fn depleted(&self) -> Result<Vec<Ingredient>, InventoryError> {
        Ok(self.lock()?.depleted())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
