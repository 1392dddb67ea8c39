use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::shopping_item::model::ShoppingItem;

#[derive(Debug, FromRow)]
pub struct ShoppingItemEntity {
    pub id: Uuid,
    pub name: String,
    pub manufacturer: String,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

impl ShoppingItemEntity {
    pub fn into_domain(self) -> ShoppingItem {
        ShoppingItem::from_repository(
            self.id,
            self.name,
            self.manufacturer,
            self.price,
            self.created_at,
        )
    }
}
