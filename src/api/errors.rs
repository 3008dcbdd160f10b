use actix::MailboxError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use crate::agent::ToolError;
use crate::domain::kitchen::{InventoryError, KitchenError};

// ============================================================================
// API Errors - map domain failures onto HTTP status codes
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Unknown ingredient: {0}")]
    UnknownIngredient(String),

    #[error(transparent)]
    Kitchen(#[from] KitchenError),

    #[error("Kitchen actor unavailable: {0}")]
    Mailbox(#[from] MailboxError),

    #[error(transparent)]
    Tool(#[from] ToolError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::UnknownIngredient(_) => StatusCode::NOT_FOUND,
            ApiError::Mailbox(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Kitchen(KitchenError::Inventory(InventoryError::UnknownIngredient(_))) => {
                StatusCode::NOT_FOUND
            }
            ApiError::Kitchen(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Tool(ToolError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Tool(ToolError::InvalidInput { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Tool(ToolError::Kitchen(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Tool(ToolError::Mailbox(_)) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        HttpResponse::build(self.status_code()).json(serde_json::json!({ "error": self.to_string() }))
    }
}
