use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::InventoryError;

// ============================================================================
// Kitchen Value Objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Ingredient {
    Dough,
    TomatoSauce,
    Mozzarella,
    Pepperoni,
    Mushrooms,
    Olives,
    BellPepper,
    Onion,
    Ham,
    Pineapple,
    Bacon,
    Basil,
}

impl Ingredient {
    /// Every ingredient, in declaration order
    pub const ALL: [Ingredient; 12] = [
        Ingredient::Dough,
        Ingredient::TomatoSauce,
        Ingredient::Mozzarella,
        Ingredient::Pepperoni,
        Ingredient::Mushrooms,
        Ingredient::Olives,
        Ingredient::BellPepper,
        Ingredient::Onion,
        Ingredient::Ham,
        Ingredient::Pineapple,
        Ingredient::Bacon,
        Ingredient::Basil,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Ingredient::Dough => "DOUGH",
            Ingredient::TomatoSauce => "TOMATO_SAUCE",
            Ingredient::Mozzarella => "MOZZARELLA",
            Ingredient::Pepperoni => "PEPPERONI",
            Ingredient::Mushrooms => "MUSHROOMS",
            Ingredient::Olives => "OLIVES",
            Ingredient::BellPepper => "BELL_PEPPER",
            Ingredient::Onion => "ONION",
            Ingredient::Ham => "HAM",
            Ingredient::Pineapple => "PINEAPPLE",
            Ingredient::Bacon => "BACON",
            Ingredient::Basil => "BASIL",
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ingredient {
    type Err = InventoryError;

    /// Parses an ingredient name, ignoring case ("dough" == "DOUGH")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Ingredient::ALL
            .into_iter()
            .find(|ingredient| ingredient.name() == upper)
            .ok_or_else(|| InventoryError::UnknownIngredient(s.to_string()))
    }
}

/// A named pizza and the ingredients one pizza consumes.
///
/// Quantities are strictly positive. Recipes are only built as static data
/// in the catalog, so the slice order is the order ingredients are checked
/// and consumed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipe {
    pub name: &'static str,
    pub ingredients: &'static [(Ingredient, u32)],
}

impl Recipe {
    #[allow(dead_code)]
    pub fn required(&self, ingredient: Ingredient) -> u32 {
        self.ingredients
            .iter()
            .find(|(i, _)| *i == ingredient)
            .map(|(_, quantity)| *quantity)
            .unwrap_or(0)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
