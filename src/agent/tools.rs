use actix::{Addr, MailboxError};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::actors::{CookPizzas, GetInventory, HasIngredient, KitchenActor};
use crate::domain::kitchen::{Ingredient, KitchenError};

pub const GET_INVENTORY: &str = "getInventory";
pub const HAS_INGREDIENT: &str = "hasIngredient";
pub const COOK_PIZZAS: &str = "cookPizzas";

#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Invalid input for {tool}: {source}")]
    InvalidInput {
        tool: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Kitchen(#[from] KitchenError),

    #[error("Kitchen actor unavailable: {0}")]
    Mailbox(#[from] MailboxError),
}

/// Tool description in the shape LLM APIs expect
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HasIngredientInput {
    ingredient_name: String,
    quantity: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CookPizzasInput {
    pizza_names: Vec<String>,
}

/// The three kitchen tools. Every call goes through the KitchenActor so tool
/// cooks share the HTTP path's serialization and metrics.
#[derive(Clone)]
pub struct InventoryTools {
    kitchen: Addr<KitchenActor>,
}

impl InventoryTools {
    pub fn new(kitchen: Addr<KitchenActor>) -> Self {
        Self { kitchen }
    }

    pub fn definitions() -> Vec<ToolDefinition> {
        vec![
            ToolDefinition {
                name: GET_INVENTORY,
                description: "Get the current inventory of ingredients with their quantities",
                input_schema: json!({ "type": "object", "properties": {} }),
            },
            ToolDefinition {
                name: HAS_INGREDIENT,
                description: "Check if a specific ingredient is available in the required quantity",
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "ingredientName": { "type": "string" },
                        "quantity": { "type": "integer" }
                    },
                    "required": ["ingredientName", "quantity"]
                }),
            },
            ToolDefinition {
                name: COOK_PIZZAS,
                description: "Cook the specified pizzas. Returns a result with cooked and failed pizzas.",
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "pizzaNames": { "type": "array", "items": { "type": "string" } }
                    },
                    "required": ["pizzaNames"]
                }),
            },
        ]
    }

    /// Runs the named tool with JSON-encoded arguments
    pub async fn execute(&self, name: &str, input: &Value) -> Result<String, ToolError> {
        tracing::debug!(tool = %name, "Executing agent tool");

        match name {
            GET_INVENTORY => self.get_inventory().await,
            HAS_INGREDIENT => {
                let input: HasIngredientInput = parse_input(HAS_INGREDIENT, input)?;
                self.has_ingredient(&input.ingredient_name, input.quantity)
                    .await
                    .map(|available| available.to_string())
            }
            COOK_PIZZAS => {
                let input: CookPizzasInput = parse_input(COOK_PIZZAS, input)?;
                self.cook_pizzas(input.pizza_names).await
            }
            other => Err(ToolError::NotFound(other.to_string())),
        }
    }

    /// "DOUGH: 20, TOMATO_SAUCE: 15, ..."
    pub async fn get_inventory(&self) -> Result<String, ToolError> {
        let snapshot = self.kitchen.send(GetInventory).await??;
        let pairs: Vec<String> = snapshot
            .iter()
            .map(|(ingredient, quantity)| format!("{}: {}", ingredient, quantity))
            .collect();
        Ok(pairs.join(", "))
    }

    /// Unknown ingredient names answer `false`. Negative quantities count as 0.
    pub async fn has_ingredient(&self, name: &str, quantity: i64) -> Result<bool, ToolError> {
        let Ok(ingredient) = name.parse::<Ingredient>() else {
            return Ok(false);
        };
        let Ok(quantity) = u32::try_from(quantity.max(0)) else {
            return Ok(false);
        };

        Ok(self.kitchen.send(HasIngredient { ingredient, quantity }).await??)
    }

    /// "<message>. Cooked: [..]. Failed: [..]"
    pub async fn cook_pizzas(&self, pizzas: Vec<String>) -> Result<String, ToolError> {
        let result = self.kitchen.send(CookPizzas { pizzas }).await??;
        Ok(format!(
            "{}. Cooked: {}. Failed: {}",
            result.message(),
            format_list(result.cooked_pizzas()),
            format_list(result.failed_pizzas())
        ))
    }
}

fn parse_input<T: serde::de::DeserializeOwned>(tool: &'static str, input: &Value) -> Result<T, ToolError> {
    T::deserialize(input).map_err(|source| ToolError::InvalidInput { tool, source })
}

fn format_list(names: &[String]) -> String {
    format!("[{}]", names.join(", "))
}
