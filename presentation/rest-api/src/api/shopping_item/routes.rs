use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::shopping_item::service::ShoppingCartService;

use crate::api::error::{ErrorResponse, IntoErrorResponse, ValidationErrorResponse, invalid_id};
use crate::api::shopping_item::dto::{CreateShoppingItemRequest, ShoppingItemResponse};
use crate::api::tags::ApiTags;
use crate::api::validation::ValidationState;

pub struct ShoppingCartApi {
    service: Arc<dyn ShoppingCartService>,
}

impl ShoppingCartApi {
    pub fn new(service: Arc<dyn ShoppingCartService>) -> Self {
        Self { service }
    }

    /// Adds an item whose request has already been validated.
    ///
    /// A failed `validation` short-circuits with 400 and the service is never
    /// called.
    pub async fn add_item(
        &self,
        request: CreateShoppingItemRequest,
        validation: ValidationState,
    ) -> AddShoppingItemResponse {
        if !validation.is_valid() {
            return AddShoppingItemResponse::BadRequest(Json(validation.into()));
        }

        let params = match request.into_params() {
            Ok(params) => params,
            Err(state) => return AddShoppingItemResponse::BadRequest(Json(state.into())),
        };

        match self.service.add(params).await {
            Ok(item) => {
                let location = format!("/items/{}", item.id);
                AddShoppingItemResponse::Created(Json(item.into()), location)
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddShoppingItemResponse::BadRequest(Json(json.0.into())),
                    _ => AddShoppingItemResponse::InternalError(json),
                }
            }
        }
    }
}

/// Shopping cart API
///
/// Endpoints for listing, adding and removing shopping cart items.
#[OpenApi]
impl ShoppingCartApi {
    /// List all items
    ///
    /// Returns every item in the cart. An empty cart is still a success.
    #[oai(path = "/items", method = "get", tag = "ApiTags::ShoppingCart")]
    async fn list(&self) -> ListShoppingItemsResponse {
        match self.service.get_all_items().await {
            Ok(items) => {
                let responses: Vec<ShoppingItemResponse> =
                    items.into_iter().map(|i| i.into()).collect();
                ListShoppingItemsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListShoppingItemsResponse::InternalError(json)
            }
        }
    }

    /// Get an item
    ///
    /// Returns a single cart item by its identifier.
    #[oai(path = "/items/:id", method = "get", tag = "ApiTags::ShoppingCart")]
    async fn get_by_id(&self, id: Path<String>) -> GetShoppingItemResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return GetShoppingItemResponse::BadRequest(Json(invalid_id()));
        };

        match self.service.get_by_id(uuid).await {
            Ok(item) => GetShoppingItemResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetShoppingItemResponse::NotFound(json),
                    _ => GetShoppingItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Add an item
    ///
    /// Validates the request and stores a new item. The response carries the
    /// stored item and its location.
    #[oai(path = "/items", method = "post", tag = "ApiTags::ShoppingCart")]
    async fn add(&self, body: Json<CreateShoppingItemRequest>) -> AddShoppingItemResponse {
        let validation = body.0.validate();
        self.add_item(body.0, validation).await
    }

    /// Remove an item
    ///
    /// Permanently removes an item from the cart.
    #[oai(path = "/items/:id", method = "delete", tag = "ApiTags::ShoppingCart")]
    async fn remove(&self, id: Path<String>) -> RemoveShoppingItemResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return RemoveShoppingItemResponse::BadRequest(Json(invalid_id()));
        };

        match self.service.remove(uuid).await {
            Ok(()) => RemoveShoppingItemResponse::Ok,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RemoveShoppingItemResponse::NotFound(json),
                    _ => RemoveShoppingItemResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListShoppingItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ShoppingItemResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetShoppingItemResponse {
    #[oai(status = 200)]
    Ok(Json<ShoppingItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddShoppingItemResponse {
    #[oai(status = 201)]
    Created(
        Json<ShoppingItemResponse>,
        #[oai(header = "Location")] String,
    ),
    #[oai(status = 400)]
    BadRequest(Json<ValidationErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveShoppingItemResponse {
    #[oai(status = 200)]
    Ok,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
