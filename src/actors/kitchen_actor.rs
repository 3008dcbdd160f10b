use actix::prelude::*;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use crate::actors::core::{ComponentHealth, HealthCheckable, HealthStatus};
use crate::domain::kitchen::{CookingEngine, CookingResult, Ingredient, KitchenError, Snapshot};
use crate::metrics::Metrics;

// ============================================================================
// Actor Messages
// ============================================================================

#[derive(Message)]
#[rtype(result = "Result<CookingResult, KitchenError>")]
pub struct CookPizzas {
    pub pizzas: Vec<String>,
}

#[derive(Message)]
#[rtype(result = "Result<Snapshot, KitchenError>")]
pub struct GetInventory;

#[derive(Message)]
#[rtype(result = "Result<bool, KitchenError>")]
pub struct HasIngredient {
    pub ingredient: Ingredient,
    pub quantity: u32,
}

/// Restores the initial stock and replies with the new snapshot
#[derive(Message)]
#[rtype(result = "Result<Snapshot, KitchenError>")]
pub struct ResetInventory;

#[derive(Message)]
#[rtype(result = "ComponentHealth")]
pub struct GetKitchenHealth;

// ============================================================================
// Kitchen Actor - owns the cooking engine
// ============================================================================
//
// Handlers are synchronous, so the mailbox processes one cook request at a
// time on top of the engine's own inventory lock.
//
// ============================================================================

pub struct KitchenActor {
    engine: CookingEngine,
    metrics: Arc<Metrics>,
}

impl KitchenActor {
    pub fn new(engine: CookingEngine, metrics: Arc<Metrics>) -> Self {
        Self { engine, metrics }
    }

    fn publish_inventory(&self) -> Result<Snapshot, KitchenError> {
        let snapshot = self.engine.inventory().snapshot()?;
        self.metrics.update_inventory(&snapshot);
        Ok(snapshot)
    }
}

impl Actor for KitchenActor {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        tracing::info!("KitchenActor started");
        if let Err(e) = self.publish_inventory() {
            tracing::warn!(error = %e, "Could not publish initial inventory");
        }
    }
}

impl HealthCheckable for KitchenActor {
    fn check_health(&self) -> ComponentHealth {
        let depleted = match self.engine.inventory().depleted() {
            Ok(depleted) => depleted,
            Err(e) => {
                return ComponentHealth::new(self.component_name(), HealthStatus::Unhealthy(e.to_string()));
            }
        };

        let in_stock = Ingredient::ALL.len() - depleted.len();
        let details = format!("{} of {} ingredients in stock", in_stock, Ingredient::ALL.len());

        let status = if depleted.is_empty() {
            HealthStatus::Healthy
        } else {
            let names: Vec<&str> = depleted.iter().map(|i| i.name()).collect();
            HealthStatus::Degraded(format!("Out of stock: {}", names.join(", ")))
        };

        ComponentHealth::new(self.component_name(), status).with_details(details)
    }

    fn component_name(&self) -> &str {
        "kitchen"
    }
}

// ============================================================================
// Message Handlers
// ============================================================================

impl Handler<CookPizzas> for KitchenActor {
    type Result = Result<CookingResult, KitchenError>;

    fn handle(&mut self, msg: CookPizzas, _: &mut Self::Context) -> Self::Result {
        let request_id = Uuid::new_v4();
        let started = Instant::now();

        tracing::info!(
            request_id = %request_id,
            pizza_count = msg.pizzas.len(),
            "Cooking pizzas"
        );

        let (result, snapshot) = self.engine.cook_and_snapshot(&msg.pizzas).inspect_err(|e| {
            tracing::error!(request_id = %request_id, error = %e, "Cook request failed");
        })?;

        // Snapshot was read under the cook's lock
        self.metrics.record_cook(&result, started.elapsed().as_secs_f64());
        self.metrics.update_inventory(&snapshot);

        tracing::info!(
            request_id = %request_id,
            cooked = result.cooked_pizzas().len(),
            failed = result.failed_pizzas().len(),
            "✅ {}",
            result.message()
        );

        Ok(result)
    }
}

impl Handler<GetInventory> for KitchenActor {
    type Result = Result<Snapshot, KitchenError>;

    fn handle(&mut self, _msg: GetInventory, _: &mut Self::Context) -> Self::Result {
        Ok(self.engine.inventory().snapshot()?)
    }
}

impl Handler<HasIngredient> for KitchenActor {
    type Result = Result<bool, KitchenError>;

    fn handle(&mut self, msg: HasIngredient, _: &mut Self::Context) -> Self::Result {
        Ok(self.engine.inventory().has(msg.ingredient, msg.quantity)?)
    }
}

impl Handler<ResetInventory> for KitchenActor {
    type Result = Result<Snapshot, KitchenError>;

    fn handle(&mut self, _msg: ResetInventory, _: &mut Self::Context) -> Self::Result {
        self.engine.inventory().reset()?;
        self.publish_inventory()
    }
}

impl Handler<GetKitchenHealth> for KitchenActor {
    type Result = MessageResult<GetKitchenHealth>;

    fn handle(&mut self, _msg: GetKitchenHealth, _: &mut Self::Context) -> Self::Result {
        MessageResult(self.check_health())
    }
}
