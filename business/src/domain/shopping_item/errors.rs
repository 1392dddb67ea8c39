#[derive(Debug, thiserror::Error)]
pub enum ShoppingItemError {
    #[error("shopping_item.name_empty")]
    NameEmpty,
    #[error("shopping_item.negative_price")]
    NegativePrice,
    #[error("shopping_item.price_out_of_range")]
    PriceOutOfRange,
    #[error("shopping_item.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
