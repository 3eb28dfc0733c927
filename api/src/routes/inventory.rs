//! Inventory route handler

use actix_web::{http::StatusCode, web, HttpResponse};

use gs_core::repositories::{InventoryRepository, UserRepository};
use gs_shared::error_codes;

use crate::dto::inventory::InventoryResponse;
use crate::handlers::error::{error_response, handle_domain_error};
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

/// Handler for GET /api/inventory
///
/// Requires the bearer middleware, which supplies the `AuthContext`.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "userId": 1,
///     "inventory": [
///         {"item_name": "Health Potion", "item_type": "consumable", "quantity": 5, "properties": {"healing": 25}}
///     ]
/// }
/// ```
pub async fn get_inventory<U, I>(
    state: web::Data<AppState<U, I>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    I: InventoryRepository + 'static,
{
    let Some(user_id) = auth.user_id else {
        return error_response(StatusCode::BAD_REQUEST, error_codes::USER_ID_NOT_IN_TOKEN);
    };

    log::debug!(
        "Listing inventory for user {} ({})",
        user_id,
        auth.username.as_deref().unwrap_or("unknown")
    );

    match state.inventory_service.list_items(user_id).await {
        Ok(inventory) => HttpResponse::Ok().json(InventoryResponse { user_id, inventory }),
        Err(error) => handle_domain_error(&error, error_codes::INVENTORY_UNAVAILABLE),
    }
}
