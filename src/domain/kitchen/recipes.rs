use super::value_objects::{Ingredient, Recipe};

// ============================================================================
// Recipe Catalog - static, immutable pizza recipes
// ============================================================================

pub const MARGHERITA: Recipe = Recipe {
    name: "Margherita",
    ingredients: &[
        (Ingredient::Dough, 1),
        (Ingredient::TomatoSauce, 1),
        (Ingredient::Mozzarella, 2),
        (Ingredient::Basil, 1),
    ],
};

pub const PEPPERONI: Recipe = Recipe {
    name: "Pepperoni",
    ingredients: &[
        (Ingredient::Dough, 1),
        (Ingredient::TomatoSauce, 1),
        (Ingredient::Mozzarella, 2),
        (Ingredient::Pepperoni, 3),
    ],
};

pub const VEGGIE: Recipe = Recipe {
    name: "Veggie",
    ingredients: &[
        (Ingredient::Dough, 1),
        (Ingredient::TomatoSauce, 1),
        (Ingredient::Mozzarella, 1),
        (Ingredient::Mushrooms, 2),
        (Ingredient::BellPepper, 2),
        (Ingredient::Olives, 2),
        (Ingredient::Onion, 1),
    ],
};

pub const HAWAIIAN: Recipe = Recipe {
    name: "Hawaiian",
    ingredients: &[
        (Ingredient::Dough, 1),
        (Ingredient::TomatoSauce, 1),
        (Ingredient::Mozzarella, 2),
        (Ingredient::Ham, 2),
        (Ingredient::Pineapple, 2),
    ],
};

static CATALOG: [Recipe; 4] = [MARGHERITA, PEPPERONI, VEGGIE, HAWAIIAN];

/// All known recipes in catalog order
pub fn all() -> &'static [Recipe] {
    &CATALOG
}

/// Case-insensitive lookup by display name. No trimming: " Margherita" is unknown.
pub fn find_by_name(name: &str) -> Option<&'static Recipe> {
    CATALOG
        .iter()
        .find(|recipe| recipe.name.eq_ignore_ascii_case(name))
}
