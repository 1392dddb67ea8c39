use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::errors::ShoppingItemError;
use super::model::ShoppingItem;

#[derive(Debug, Clone)]
pub struct AddShoppingItemParams {
    pub name: String,
    pub manufacturer: String,
    pub price: Decimal,
}

/// Owns the shopping cart's item collection and its mutations.
#[async_trait]
pub trait ShoppingCartService: Send + Sync {
    async fn get_all_items(&self) -> Result<Vec<ShoppingItem>, ShoppingItemError>;
    async fn get_by_id(&self, id: Uuid) -> Result<ShoppingItem, ShoppingItemError>;
    async fn add(&self, params: AddShoppingItemParams) -> Result<ShoppingItem, ShoppingItemError>;
    async fn remove(&self, id: Uuid) -> Result<(), ShoppingItemError>;
}
