use std::str::FromStr;

use rust_decimal::Decimal;

use business::domain::shopping_item::errors::ShoppingItemError;
use business::domain::shopping_item::model::{PRICE_SCALE, ShoppingItem};
use business::domain::shopping_item::service::AddShoppingItemParams;

use crate::api::shopping_item::dto::CreateShoppingItemRequest;
use crate::api::validation::ValidationState;

const REQUIRED: &str = "Required";
const NOT_A_DECIMAL: &str = "Must be a decimal number";
const NEGATIVE: &str = "Must be zero or greater";
const OUT_OF_RANGE: &str = "Must have at most two decimal places and be below 10000000000";

/// Accepts plain decimals only ("12", "12.5", "-3.00"). Exponents, signs
/// other than a leading minus, and digits beyond the stored scale are rejected
/// before parsing, since parsing would round them away.
fn parse_price(raw: Option<&str>) -> Result<Decimal, &'static str> {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(Decimal::ZERO);
    };

    let unsigned = raw.strip_prefix('-').unwrap_or(raw);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let is_plain = !whole.is_empty()
        && !unsigned.ends_with('.')
        && whole.chars().all(|c| c.is_ascii_digit())
        && fraction.chars().all(|c| c.is_ascii_digit());
    if !is_plain {
        return Err(NOT_A_DECIMAL);
    }
    if fraction.trim_end_matches('0').len() > PRICE_SCALE as usize {
        return Err(OUT_OF_RANGE);
    }

    // Only digits remain, so a parse failure means the value is too large.
    let price = Decimal::from_str(raw).map_err(|_| OUT_OF_RANGE)?;
    ShoppingItem::check_price(price).map_err(|error| match error {
        ShoppingItemError::NegativePrice => NEGATIVE,
        _ => OUT_OF_RANGE,
    })
}

impl CreateShoppingItemRequest {
    /// Checks the fields an item needs before it may be added to the cart.
    pub fn validate(&self) -> ValidationState {
        let mut state = ValidationState::new();

        let has_name = self
            .name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty());
        if !has_name {
            state.add_error("name", REQUIRED);
        }
        if let Err(message) = parse_price(self.price.as_deref()) {
            state.add_error("price", message);
        }

        state
    }

    /// Converts the request into service parameters. Name rules are left to
    /// the domain; only the price needs parsing here.
    pub fn into_params(self) -> Result<AddShoppingItemParams, ValidationState> {
        let price = parse_price(self.price.as_deref()).map_err(|message| {
            let mut state = ValidationState::new();
            state.add_error("price", message);
            state
        })?;

        Ok(AddShoppingItemParams {
            name: self.name.unwrap_or_default(),
            manufacturer: self.manufacturer.unwrap_or_default(),
            price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: Option<&str>, price: Option<&str>) -> CreateShoppingItemRequest {
        CreateShoppingItemRequest {
            name: name.map(str::to_string),
            manufacturer: Some("Guinness".to_string()),
            price: price.map(str::to_string),
        }
    }

    #[test]
    fn should_accept_complete_request() {
        let state = request(Some("Guinness Original 6 Pack"), Some("12.00")).validate();

        assert!(state.is_valid());
    }

    #[test]
    fn should_require_name() {
        let state = request(None, Some("12.00")).validate();

        assert!(!state.is_valid());
        assert_eq!(state.errors()[0].field, "name");
        assert_eq!(state.errors()[0].message, "Required");
    }

    #[test]
    fn should_reject_blank_name() {
        let state = request(Some("  "), None).validate();

        assert!(!state.is_valid());
        assert_eq!(state.errors()[0].field, "name");
    }

    #[test]
    fn should_reject_negative_price() {
        let state = request(Some("Bread"), Some("-1.50")).validate();

        assert_eq!(state.errors().len(), 1);
        assert_eq!(state.errors()[0].field, "price");
        assert_eq!(state.errors()[0].message, "Must be zero or greater");
    }

    #[test]
    fn should_reject_price_that_is_not_a_number() {
        let state = request(Some("Bread"), Some("cheap")).validate();

        assert_eq!(state.errors()[0].message, "Must be a decimal number");
    }

    #[test]
    fn should_reject_exponent_notation() {
        let state = request(Some("Bread"), Some("1e3")).validate();

        assert_eq!(state.errors().len(), 1);
        assert_eq!(state.errors()[0].message, "Must be a decimal number");
    }

    #[test]
    fn should_reject_more_than_two_decimal_places() {
        let state = request(Some("Bread"), Some("1.005")).validate();

        assert_eq!(state.errors().len(), 1);
        assert_eq!(state.errors()[0].field, "price");
        assert_eq!(state.errors()[0].message, OUT_OF_RANGE);
    }

    #[test]
    fn should_reject_tiny_fraction_instead_of_rounding_to_zero() {
        let state = request(Some("Bread"), Some("0.000000000000000000000000000001")).validate();

        assert_eq!(state.errors()[0].message, OUT_OF_RANGE);
    }

    #[test]
    fn should_reject_price_of_ten_billion() {
        let state = request(Some("Bread"), Some("10000000000")).validate();

        assert_eq!(state.errors()[0].message, OUT_OF_RANGE);
    }

    #[test]
    fn should_reject_price_too_long_to_parse() {
        let state = request(Some("Bread"), Some("123456789012345678901234567890123")).validate();

        assert_eq!(state.errors()[0].message, OUT_OF_RANGE);
    }

    #[test]
    fn should_reject_dangling_decimal_point() {
        let state = request(Some("Bread"), Some("12.")).validate();

        assert_eq!(state.errors()[0].message, "Must be a decimal number");
    }

    #[test]
    fn should_accept_trailing_zeros() {
        let params = request(Some("Bread"), Some("1.5000")).into_params().unwrap();

        assert_eq!(params.price.to_string(), "1.50");
    }

    #[test]
    fn should_accept_largest_storable_price() {
        let state = request(Some("Yacht"), Some("9999999999.99")).validate();

        assert!(state.is_valid());
    }

    #[test]
    fn should_collect_every_failing_field() {
        let state = request(None, Some("-3")).validate();

        assert_eq!(state.errors().len(), 2);
    }

    #[test]
    fn should_default_price_to_zero() {
        let params = request(Some("Bread"), None).into_params().unwrap();

        assert_eq!(params.price, Decimal::ZERO);
        assert_eq!(params.manufacturer, "Guinness");
    }

    #[test]
    fn should_parse_decimal_price() {
        let params = request(Some("Guinness Original 6 Pack"), Some("12.00"))
            .into_params()
            .unwrap();

        assert_eq!(params.price, Decimal::new(1200, 2));
    }
}
