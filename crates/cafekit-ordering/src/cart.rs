//! Cart state
//!
//! The cart holds customized drinks until checkout. `CartStore` is the seam
//! the UI talks to; `MemoryCart` keeps everything in process.

use crate::error::{OrderingError, OrderingResult};
use cafekit_core::CustomizationState;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Most cups of one item a single line may hold
pub const MAX_QUANTITY: u32 = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: Uuid,
    pub product: String,
    pub unit_price_cents: u64,
    pub quantity: u32,
    pub customization: CustomizationState,
}

impl CartItem {
    pub fn new(
        product: impl Into<String>,
        unit_price_cents: u64,
        quantity: u32,
        customization: CustomizationState,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            product: product.into(),
            unit_price_cents,
            quantity,
            customization,
        }
    }

    /// Price of the line, saturating at `u64::MAX`
    pub fn line_total_cents(&self) -> u64 {
        self.unit_price_cents.saturating_mul(u64::from(self.quantity))
    }
}

/// Saturating sum of line totals
pub fn total_cents<'a>(items: impl IntoIterator<Item = &'a CartItem>) -> u64 {
    items
        .into_iter()
        .fold(0, |total, item| total.saturating_add(item.line_total_cents()))
}

fn check_quantity(quantity: u32) -> OrderingResult<()> {
    if quantity == 0 || quantity > MAX_QUANTITY {
        return Err(OrderingError::InvalidQuantity {
            quantity,
            max: MAX_QUANTITY,
        });
    }
    Ok(())
}

/// Cart operations used by the ordering screens
pub trait CartStore: Send + Sync {
    /// Add an item after validating its customization and quantity
    fn add(&self, item: CartItem) -> OrderingResult<Uuid>;
    fn update_quantity(&self, id: Uuid, quantity: u32) -> OrderingResult<()>;
    fn remove(&self, id: Uuid) -> OrderingResult<CartItem>;
    fn items(&self) -> Vec<CartItem>;
    fn clear(&self);

    fn subtotal_cents(&self) -> u64 {
        total_cents(&self.items())
    }

    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

/// In-process cart
#[derive(Debug, Default)]
pub struct MemoryCart {
    items: Mutex<Vec<CartItem>>,
}

impl MemoryCart {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStore for MemoryCart {
    fn add(&self, item: CartItem) -> OrderingResult<Uuid> {
        item.customization.validate()?;
        check_quantity(item.quantity)?;
        let id = item.id;
        debug!("Adding {} x{} to cart", item.product, item.quantity);
        self.items.lock().push(item);
        Ok(id)
    }

    fn update_quantity(&self, id: Uuid, quantity: u32) -> OrderingResult<()> {
        check_quantity(quantity)?;
        let mut items = self.items.lock();
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(OrderingError::ItemNotFound { id })?;
        item.quantity = quantity;
        Ok(())
    }

    fn remove(&self, id: Uuid) -> OrderingResult<CartItem> {
        let mut items = self.items.lock();
        let index = items
            .iter()
            .position(|item| item.id == id)
            .ok_or(OrderingError::ItemNotFound { id })?;
        Ok(items.remove(index))
    }

    fn items(&self) -> Vec<CartItem> {
        self.items.lock().clone()
    }

    fn clear(&self) {
        self.items.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cafekit_core::{DrinkError, DrinkSize};

    fn latte(quantity: u32) -> CartItem {
        CartItem::new(
            "Latte",
            450,
            quantity,
            CustomizationState::new("Espresso", DrinkSize::Medium).with_milk("Oat Milk"),
        )
    }

    #[test]
    fn test_add_update_remove() {
        let cart = MemoryCart::new();
        let id = cart.add(latte(2)).unwrap();
        cart.add(latte(1)).unwrap();
        assert_eq!(cart.subtotal_cents(), 450 * 3);

        cart.update_quantity(id, 4).unwrap();
        assert_eq!(cart.subtotal_cents(), 450 * 5);

        let removed = cart.remove(id).unwrap();
        assert_eq!(removed.quantity, 4);
        assert_eq!(cart.items().len(), 1);

        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_rejects_bad_quantity_and_customization() {
        let cart = MemoryCart::new();
        assert_eq!(
            cart.add(latte(0)),
            Err(OrderingError::InvalidQuantity {
                quantity: 0,
                max: MAX_QUANTITY
            })
        );

        let mut item = latte(1);
        item.customization.sugar_level = 140.0;
        assert_eq!(
            cart.add(item),
            Err(OrderingError::Drink(DrinkError::InvalidSugarLevel { value: 140.0 }))
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_unknown_item() {
        let cart = MemoryCart::new();
        let id = Uuid::new_v4();
        assert_eq!(
            cart.update_quantity(id, 1),
            Err(OrderingError::ItemNotFound { id })
        );
        assert!(cart.remove(id).is_err());
    }

    #[test]
    fn test_totals_saturate_instead_of_overflowing() {
        let cart = MemoryCart::new();
        let mut pricey = latte(MAX_QUANTITY);
        pricey.unit_price_cents = u64::MAX / 2;
        assert_eq!(pricey.line_total_cents(), u64::MAX);
        cart.add(pricey).unwrap();
        cart.add(latte(1)).unwrap();
        assert_eq!(cart.subtotal_cents(), u64::MAX);
    }
}
