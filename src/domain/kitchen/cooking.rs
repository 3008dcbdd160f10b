use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::errors::KitchenError;
use super::inventory::{Inventory, InventoryStore, Snapshot};
use super::recipes;
use super::value_objects::Recipe;

// ============================================================================
// Cooking Result
// ============================================================================

const NOTHING_COOKED_MESSAGE: &str =
    "Could not cook any pizzas due to insufficient ingredients or unknown pizza types";

/// Outcome of one cook request. The message is derived from the variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "CookingReport")]
pub enum CookingResult {
    /// Nothing failed (this includes an empty request)
    Success { cooked: Vec<String> },
    Partial { cooked: Vec<String>, failed: Vec<String> },
    /// Nothing cooked, at least one failure
    Failure { failed: Vec<String> },
}

impl CookingResult {
    pub fn from_outcome(cooked: Vec<String>, failed: Vec<String>) -> Self {
        match (cooked.is_empty(), failed.is_empty()) {
            (_, true) => CookingResult::Success { cooked },
            (true, false) => CookingResult::Failure { failed },
            (false, false) => CookingResult::Partial { cooked, failed },
        }
    }

    pub fn cooked_pizzas(&self) -> &[String] {
        match self {
            CookingResult::Success { cooked } | CookingResult::Partial { cooked, .. } => cooked,
            CookingResult::Failure { .. } => &[],
        }
    }

    pub fn failed_pizzas(&self) -> &[String] {
        match self {
            CookingResult::Partial { failed, .. } | CookingResult::Failure { failed } => failed,
            CookingResult::Success { .. } => &[],
        }
    }

    pub fn message(&self) -> String {
        match self {
            CookingResult::Success { cooked } => {
                format!("Successfully cooked {} pizza(s)", cooked.len())
            }
            CookingResult::Partial { cooked, failed } => format!(
                "Cooked {} pizza(s), {} failed due to insufficient ingredients",
                cooked.len(),
                failed.len()
            ),
            CookingResult::Failure { .. } => NOTHING_COOKED_MESSAGE.to_string(),
        }
    }
}

/// Wire shape of a `CookingResult`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookingReport {
    pub cooked_pizzas: Vec<String>,
    pub failed_pizzas: Vec<String>,
    pub message: String,
}

impl From<CookingResult> for CookingReport {
    fn from(result: CookingResult) -> Self {
        let message = result.message();
        let (cooked_pizzas, failed_pizzas) = match result {
            CookingResult::Success { cooked } => (cooked, Vec::new()),
            CookingResult::Partial { cooked, failed } => (cooked, failed),
            CookingResult::Failure { failed } => (Vec::new(), failed),
        };

        Self {
            cooked_pizzas,
            failed_pizzas,
            message,
        }
    }
}

// ============================================================================
// Cooking Engine
// ============================================================================
//
// Processes pizza names strictly in request order:
//   lookup recipe → check every ingredient → consume every ingredient
//
// The whole request runs under the inventory lock, so concurrent requests
// are serialized and a passed feasibility check always commits.
//
// ============================================================================

#[derive(Debug, Clone)]
pub struct CookingEngine {
    inventory: Arc<InventoryStore>,
}

impl CookingEngine {
    pub fn new(inventory: Arc<InventoryStore>) -> Self {
        Self { inventory }
    }

    pub fn inventory(&self) -> &Arc<InventoryStore> {
        &self.inventory
    }

    /// Cooks the requested pizzas in order under one inventory lock
    #[allow(dead_code)]
    pub fn cook_pizzas<S: AsRef<str>>(&self, names: &[S]) -> Result<CookingResult, KitchenError> {
        self.cook_and_snapshot(names).map(|(result, _)| result)
    }

    /// Like `cook_pizzas`, also returning the stock left once the request
    /// committed, read under the same lock
    pub fn cook_and_snapshot<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<(CookingResult, Snapshot), KitchenError> {
        self.inventory.with_lock(|inventory| -> Result<_, KitchenError> {
            let result = cook_all(inventory, names)?;
            Ok((result, inventory.snapshot()))
        })?
    }
}

fn cook_all<S: AsRef<str>>(
    inventory: &mut Inventory,
    names: &[S],
) -> Result<CookingResult, KitchenError> {
    let mut cooked = Vec::new();
    let mut failed = Vec::new();

    for name in names {
        let name = name.as_ref();

        let Some(recipe) = recipes::find_by_name(name) else {
            tracing::debug!(pizza = %name, "Unknown pizza");
            failed.push(name.to_string());
            continue;
        };

        if !can_cook(inventory, recipe) {
            tracing::debug!(pizza = %name, "Insufficient ingredients");
            failed.push(name.to_string());
            continue;
        }

        commit(inventory, recipe, name)?;
        tracing::debug!(pizza = %name, "Pizza cooked");
        cooked.push(name.to_string());
    }

    Ok(CookingResult::from_outcome(cooked, failed))
}

fn can_cook(inventory: &Inventory, recipe: &Recipe) -> bool {
    recipe
        .ingredients
        .iter()
        .all(|(ingredient, required)| inventory.has(*ingredient, *required))
}

fn commit(inventory: &mut Inventory, recipe: &Recipe, name: &str) -> Result<(), KitchenError> {
    for (ingredient, required) in recipe.ingredients {
        inventory.consume(*ingredient, *required).map_err(|source| {
            tracing::error!(
                pizza = %name,
                ingredient = %ingredient,
                error = %source,
                "Consume failed after feasibility check"
            );
            KitchenError::InventoryInvariant {
                pizza: name.to_string(),
                source,
            }
        })?;
    }
    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================
