//! Error types for ordering operations

use cafekit_core::DrinkError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrderingError {
    /// No signed-in customer, or the session expired
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Cart item {id} not found")]
    ItemNotFound { id: Uuid },

    #[error("Invalid quantity {quantity} (must be 1-{max})")]
    InvalidQuantity { quantity: u32, max: u32 },

    #[error("Cannot place an order with an empty cart")]
    EmptyCart,

    /// Customization rejected before it reached the cart
    #[error(transparent)]
    Drink(#[from] DrinkError),

    /// Status polling gave up
    #[error("Timed out after {waited_ms}ms waiting for {what}")]
    Timeout { what: String, waited_ms: u64 },

    /// Error reported by the café backend
    #[error("Backend error: {0}")]
    Backend(String),
}

impl OrderingError {
    pub fn backend(msg: impl Into<String>) -> Self {
        OrderingError::Backend(msg.into())
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, OrderingError::Timeout { .. })
    }
}

pub type OrderingResult<T> = Result<T, OrderingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = OrderingError::InvalidQuantity {
            quantity: 0,
            max: 20,
        };
        assert_eq!(err.to_string(), "Invalid quantity 0 (must be 1-20)");

        let err = OrderingError::Timeout {
            what: "payment".to_string(),
            waited_ms: 500,
        };
        assert!(err.is_timeout());
        assert_eq!(err.to_string(), "Timed out after 500ms waiting for payment");
    }

    #[test]
    fn test_drink_error_is_transparent() {
        let err: OrderingError = DrinkError::InvalidSugarLevel { value: -1.0 }.into();
        assert_eq!(
            err.to_string(),
            "Sugar level -1 out of range (expected 0-100)"
        );
    }
}
