// Private module declaration
mod server;

use prometheus::{Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGaugeVec, Opts, Registry};

use crate::domain::kitchen::{recipes, CookingResult, Ingredient, Snapshot};

// Re-export for public API
pub use server::start_metrics_server;

// ============================================================================
// Metrics Module - Prometheus metrics for the kitchen
// ============================================================================
//
// Provides metrics for:
// - Cook requests (throughput, latency)
// - Pizzas cooked and failed, by recipe
// - Current stock per ingredient
//
// All metrics are registered with Prometheus and can be scraped via /metrics
// ============================================================================

/// Label used for pizza names that are not in the catalog
const UNKNOWN_PIZZA: &str = "unknown";

pub struct Metrics {
    registry: Registry,

    pub cook_requests_total: IntCounter,
    pub cook_request_duration: Histogram,
    pub pizzas_cooked: IntCounterVec,
    pub pizzas_failed: IntCounterVec,
    pub inventory_quantity: IntGaugeVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let cook_requests_total = IntCounter::new("cook_requests_total", "Total cook requests handled")?;
        registry.register(Box::new(cook_requests_total.clone()))?;

        let cook_request_duration = Histogram::with_opts(
            HistogramOpts::new("cook_request_duration_seconds", "Cook request processing duration")
                .buckets(vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1]),
        )?;
        registry.register(Box::new(cook_request_duration.clone()))?;

        let pizzas_cooked = IntCounterVec::new(
            Opts::new("pizzas_cooked_total", "Total pizzas cooked"),
            &["pizza"],
        )?;
        registry.register(Box::new(pizzas_cooked.clone()))?;

        let pizzas_failed = IntCounterVec::new(
            Opts::new("pizzas_failed_total", "Total pizzas that could not be cooked"),
            &["pizza"],
        )?;
        registry.register(Box::new(pizzas_failed.clone()))?;

        let inventory_quantity = IntGaugeVec::new(
            Opts::new("inventory_quantity", "Current stock per ingredient"),
            &["ingredient"],
        )?;
        registry.register(Box::new(inventory_quantity.clone()))?;

        Ok(Self {
            registry,
            cook_requests_total,
            cook_request_duration,
            pizzas_cooked,
            pizzas_failed,
            inventory_quantity,
        })
    }

    /// Get the Prometheus registry for exposing metrics via HTTP
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Helper to record a finished cook request
    pub fn record_cook(&self, result: &CookingResult, duration_secs: f64) {
        self.cook_requests_total.inc();
        self.cook_request_duration.observe(duration_secs);

        for name in result.cooked_pizzas() {
            self.pizzas_cooked.with_label_values(&[pizza_label(name)]).inc();
        }
        for name in result.failed_pizzas() {
            self.pizzas_failed.with_label_values(&[pizza_label(name)]).inc();
        }
    }

    /// Helper to publish current stock levels
    pub fn update_inventory(&self, snapshot: &Snapshot) {
        for ingredient in Ingredient::ALL {
            let quantity = snapshot.get(&ingredient).copied().unwrap_or(0);
            self.inventory_quantity
                .with_label_values(&[ingredient.name()])
                .set(i64::from(quantity));
        }
    }
}

/// Maps a requested name onto its catalog spelling to bound label cardinality
fn pizza_label(name: &str) -> &'static str {
    recipes::find_by_name(name).map_or(UNKNOWN_PIZZA, |recipe| recipe.name)
}
