use actix::Addr;
use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{ApiError, HELLO_MESSAGE};
use crate::agent::InventoryTools;
use crate::actors::{CookPizzas, GetInventory, GetKitchenHealth, KitchenActor, ResetInventory};
use crate::domain::kitchen::{recipes, Ingredient};

// ============================================================================
// Request / Response Bodies
// ============================================================================

/// A missing or null `pizzas` field is an empty request
#[derive(Debug, Deserialize)]
pub struct CookRequest {
    #[serde(default)]
    pub pizzas: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ItemResponse {
    pub item: Ingredient,
    pub quantity: u32,
}

#[derive(Debug, Serialize)]
pub struct RecipeResponse {
    pub name: &'static str,
    pub ingredients: BTreeMap<Ingredient, u32>,
}

// ============================================================================
// Handlers
// ============================================================================

pub async fn hello() -> impl Responder {
    HttpResponse::Ok().content_type("text/plain").body(HELLO_MESSAGE)
}

pub async fn cook(
    kitchen: web::Data<Addr<KitchenActor>>,
    body: web::Json<CookRequest>,
) -> Result<HttpResponse, ApiError> {
    let pizzas = body.into_inner().pizzas.unwrap_or_default();
    let result = kitchen.send(CookPizzas { pizzas }).await??;
    Ok(HttpResponse::Ok().json(result))
}

pub async fn inventory(kitchen: web::Data<Addr<KitchenActor>>) -> Result<HttpResponse, ApiError> {
    let snapshot = kitchen.send(GetInventory).await??;
    Ok(HttpResponse::Ok().json(snapshot))
}

pub async fn inventory_item(
    kitchen: web::Data<Addr<KitchenActor>>,
    item: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let item = item.into_inner();
    let ingredient: Ingredient = item.parse().map_err(|_| ApiError::UnknownIngredient(item))?;

    let snapshot = kitchen.send(GetInventory).await??;
    let quantity = snapshot.get(&ingredient).copied().unwrap_or(0);

    Ok(HttpResponse::Ok().json(ItemResponse { item: ingredient, quantity }))
}

pub async fn reset_inventory(kitchen: web::Data<Addr<KitchenActor>>) -> Result<HttpResponse, ApiError> {
    let snapshot = kitchen.send(ResetInventory).await??;
    Ok(HttpResponse::Ok().json(snapshot))
}

pub async fn list_recipes() -> impl Responder {
    let catalog: Vec<RecipeResponse> = recipes::all()
        .iter()
        .map(|recipe| RecipeResponse {
            name: recipe.name,
            ingredients: recipe.ingredients.iter().copied().collect(),
        })
        .collect();

    HttpResponse::Ok().json(catalog)
}

pub async fn health(kitchen: web::Data<Addr<KitchenActor>>) -> Result<HttpResponse, ApiError> {
    let kitchen_health = kitchen.send(GetKitchenHealth).await?;

    let body = serde_json::json!({
        "service": "cooking-agent",
        "status": kitchen_health.status,
        "components": [kitchen_health],
    });

    if kitchen_health.status.is_unhealthy() {
        Ok(HttpResponse::ServiceUnavailable().json(body))
    } else {
        Ok(HttpResponse::Ok().json(body))
    }
}

pub async fn list_tools() -> impl Responder {
    HttpResponse::Ok().json(InventoryTools::definitions())
}

/// A missing body is treated as `{}`
pub async fn run_tool(
    tools: web::Data<InventoryTools>,
    name: web::Path<String>,
    args: Option<web::Json<serde_json::Value>>,
) -> Result<HttpResponse, ApiError> {
    let args = args.map_or_else(|| serde_json::json!({}), web::Json::into_inner);
    let output = tools.execute(&name, &args).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "result": output })))
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::configure;
    use crate::domain::kitchen::{CookingEngine, CookingReport, InventoryStore};
    use crate::metrics::Metrics;
    use actix::Actor;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn kitchen(metrics: Arc<Metrics>) -> (Addr<KitchenActor>, InventoryTools) {
        let engine = CookingEngine::new(Arc::new(InventoryStore::new()));
        let kitchen = KitchenActor::new(engine, metrics).start();
        (kitchen.clone(), InventoryTools::new(kitchen))
    }

    macro_rules! app {
        () => {
            app!(Arc::new(Metrics::new().unwrap()))
        };
        ($metrics:expr) => {{
            let (kitchen, tools) = kitchen($metrics);
            test::init_service(
                App::new()
                    .app_data(web::Data::new(kitchen))
                    .app_data(web::Data::new(tools))
                    .configure(configure),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn test_hello() {
        let app = app!();
        let req = test::TestRequest::get().uri("/cook").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(body, "Hello from Cooking Agent");
    }

    #[actix_web::test]
    async fn test_cook_single_pizza() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/cook")
            .set_json(json!({ "pizzas": ["Margherita"] }))
            .to_request();
        let report: CookingReport = test::call_and_read_body_json(&app, req).await;

        assert_eq!(report.cooked_pizzas, vec!["Margherita"]);
        assert!(report.failed_pizzas.is_empty());
        assert_eq!(report.message, "Successfully cooked 1 pizza(s)");

        let req = test::TestRequest::get().uri("/inventory/dough").to_request();
        let item: ItemResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(item, ItemResponse { item: Ingredient::Dough, quantity: 19 });
    }

    #[actix_web::test]
    async fn test_cook_response_field_names() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/cook")
            .set_json(json!({ "pizzas": ["Margherita", "Nope", "Pepperoni"] }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body,
            json!({
                "cookedPizzas": ["Margherita", "Pepperoni"],
                "failedPizzas": ["Nope"],
                "message": "Cooked 2 pizza(s), 1 failed due to insufficient ingredients"
            })
        );
    }

    #[actix_web::test]
    async fn test_all_failed_is_still_ok() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/cook")
            .set_json(json!({ "pizzas": ["SuperSpecial"] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let report: CookingReport = test::read_body_json(resp).await;
        assert!(report.cooked_pizzas.is_empty());
        assert_eq!(report.failed_pizzas, vec!["SuperSpecial"]);
        assert!(report.message.starts_with("Could not cook any pizzas"));
    }

    #[actix_web::test]
    async fn test_missing_pizzas_is_empty_request() {
        let app = app!();
        let req = test::TestRequest::post().uri("/cook").set_json(json!({})).to_request();
        let report: CookingReport = test::call_and_read_body_json(&app, req).await;

        assert!(report.cooked_pizzas.is_empty());
        assert_eq!(report.message, "Successfully cooked 0 pizza(s)");
    }

    #[actix_web::test]
    async fn test_non_array_pizzas_is_rejected() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/cook")
            .set_json(json!({ "pizzas": "Margherita" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn test_inventory_and_reset() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/cook")
            .set_json(json!({ "pizzas": ["Hawaiian", "Hawaiian"] }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/inventory").to_request();
        let stock: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(stock["PINEAPPLE"], 2);
        assert_eq!(stock["HAM"], 4);
        assert_eq!(stock["BACON"], 10);

        let req = test::TestRequest::post().uri("/inventory/reset").to_request();
        let stock: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(stock["PINEAPPLE"], 6);
        assert_eq!(stock["HAM"], 8);
    }

    #[actix_web::test]
    async fn test_unknown_inventory_item() {
        let app = app!();
        let req = test::TestRequest::get().uri("/inventory/salami").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_recipes() {
        let app = app!();
        let req = test::TestRequest::get().uri("/recipes").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Margherita", "Pepperoni", "Veggie", "Hawaiian"]);
        assert_eq!(body[1]["ingredients"]["PEPPERONI"], 3);
    }

    #[actix_web::test]
    async fn test_health() {
        let app = app!();
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["service"], "cooking-agent");
        assert_eq!(body["status"]["state"], "Healthy");
        assert_eq!(body["components"][0]["name"], "kitchen");
    }

    #[actix_web::test]
    async fn test_list_tools() {
        let app = app!();
        let req = test::TestRequest::get().uri("/agent/tools").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.as_array().unwrap().len(), 3);
        assert_eq!(body[0]["name"], "getInventory");
    }

    #[actix_web::test]
    async fn test_tools_share_the_kitchen_inventory() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/agent/tools/cookPizzas")
            .set_json(json!({ "pizzaNames": ["Pepperoni"] }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            body["result"],
            "Successfully cooked 1 pizza(s). Cooked: [Pepperoni]. Failed: []"
        );

        let req = test::TestRequest::get().uri("/inventory/PEPPERONI").to_request();
        let item: ItemResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(item.quantity, 7);

        let req = test::TestRequest::post().uri("/agent/tools/getInventory").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(body["result"].as_str().unwrap().contains("PEPPERONI: 7"));
    }

    #[actix_web::test]
    async fn test_unknown_tool() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/agent/tools/orderDelivery")
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_tool_cook_updates_metrics() {
        let metrics = Arc::new(Metrics::new().unwrap());
        let app = app!(metrics.clone());

        let req = test::TestRequest::post()
            .uri("/agent/tools/cookPizzas")
            .set_json(json!({ "pizzaNames": ["Margherita"] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        assert_eq!(metrics.cook_requests_total.get(), 1);
        assert_eq!(metrics.pizzas_cooked.with_label_values(&["Margherita"]).get(), 1);
        assert_eq!(metrics.inventory_quantity.with_label_values(&["DOUGH"]).get(), 19);
    }
}
