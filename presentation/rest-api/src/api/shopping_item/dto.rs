use poem_openapi::Object;

use business::domain::shopping_item::model::ShoppingItem;

#[derive(Debug, Clone, Default, Object)]
pub struct CreateShoppingItemRequest {
    /// Item name (required, cannot be blank)
    pub name: Option<String>,
    /// Manufacturer of the item
    pub manufacturer: Option<String>,
    /// Decimal price such as "12.00" (defaults to zero, cannot be negative)
    pub price: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct ShoppingItemResponse {
    /// Shopping item unique identifier
    pub id: String,
    /// Item name
    pub name: String,
    /// Manufacturer of the item
    pub manufacturer: String,
    /// Decimal price
    pub price: String,
}

impl From<ShoppingItem> for ShoppingItemResponse {
    fn from(item: ShoppingItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name,
            manufacturer: item.manufacturer,
            price: item.price.to_string(),
        }
    }
}
