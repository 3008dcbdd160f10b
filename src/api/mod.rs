// ============================================================================
// HTTP API - actix-web routes in front of the KitchenActor
// ============================================================================
//
// GET  /cook              liveness text
// POST /cook              cook a list of pizzas
// GET  /inventory         current stock
// GET  /inventory/{item}  stock of one ingredient
// POST /inventory/reset   restore the initial stock
// GET  /recipes           recipe catalog
// GET  /health            kitchen health
// GET  /agent/tools        agent tool definitions
// POST /agent/tools/{name} run an agent tool with JSON arguments
//
// ============================================================================

mod errors;
mod handlers;

use actix_web::{error, web, HttpResponse};

pub use errors::ApiError;

pub const HELLO_MESSAGE: &str = "Hello from Cooking Agent";

/// Registers every route. Expects `web::Data<Addr<KitchenActor>>` and
/// `web::Data<InventoryTools>` in app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            web::resource("/cook")
                .route(web::get().to(handlers::hello))
                .route(web::post().to(handlers::cook)),
        )
        .route("/inventory", web::get().to(handlers::inventory))
        .route("/inventory/reset", web::post().to(handlers::reset_inventory))
        .route("/inventory/{item}", web::get().to(handlers::inventory_item))
        .route("/recipes", web::get().to(handlers::list_recipes))
        .route("/health", web::get().to(handlers::health))
        .route("/agent/tools", web::get().to(handlers::list_tools))
        .route("/agent/tools/{name}", web::post().to(handlers::run_tool));
}

/// Malformed JSON bodies get a JSON 400 instead of actix's plain-text default
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        tracing::warn!(error = %message, "Rejected malformed request body");
        error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(serde_json::json!({ "error": message })),
        )
        .into()
    })
}
