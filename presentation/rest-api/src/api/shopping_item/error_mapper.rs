use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::shopping_item::errors::ShoppingItemError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ShoppingItemError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ShoppingItemError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "shopping_item.name_empty",
            ),
            ShoppingItemError::NegativePrice => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "shopping_item.negative_price",
            ),
            ShoppingItemError::PriceOutOfRange => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "shopping_item.price_out_of_range",
            ),
            ShoppingItemError::NotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "shopping_item.not_found")
            }
            ShoppingItemError::Repository(source) => {
                tracing::error!(error = %source, "shopping cart storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalError",
                    "repository.persistence",
                )
            }
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_not_found_to_404() {
        let (status, json) = ShoppingItemError::NotFound.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.message, "shopping_item.not_found");
    }

    #[test]
    fn should_map_domain_validation_to_400() {
        let (status, json) = ShoppingItemError::NameEmpty.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.name, "ValidationError");
    }

    #[test]
    fn should_map_price_out_of_range_to_400() {
        let (status, json) = ShoppingItemError::PriceOutOfRange.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.message, "shopping_item.price_out_of_range");
    }

    #[test]
    fn should_map_repository_failure_to_500() {
        let (status, json) =
            ShoppingItemError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.name, "InternalError");
    }
}
