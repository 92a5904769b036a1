//! Order placement and tracking interfaces

use crate::cart::{self, CartItem, CartStore};
use crate::error::{OrderingError, OrderingResult};
use crate::payment::PaymentMethod;
use crate::poller::TerminalStatus;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Kitchen-side order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl TerminalStatus for OrderStatus {
    fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Preparing => write!(f, "Preparing"),
            Self::Ready => write!(f, "Ready for pickup"),
            Self::Completed => write!(f, "Completed"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// Everything the backend needs to place an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Table code scanned from the table's QR sticker, if any
    pub table: Option<String>,
    pub items: Vec<CartItem>,
    pub payment_method: PaymentMethod,
    pub placed_at: DateTime<Utc>,
}

impl OrderRequest {
    /// Snapshot the cart into a request
    pub fn from_cart(
        cart: &dyn CartStore,
        payment_method: PaymentMethod,
        table: Option<String>,
    ) -> OrderingResult<Self> {
        let items = cart.items();
        if items.is_empty() {
            return Err(OrderingError::EmptyCart);
        }
        Ok(Self {
            table,
            items,
            payment_method,
            placed_at: Utc::now(),
        })
    }

    pub fn total_cents(&self) -> u64 {
        cart::total_cents(&self.items)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order_id: Uuid,
    pub total_cents: u64,
    pub status: OrderStatus,
}

/// Café order backend
#[async_trait]
pub trait OrderApi: Send + Sync {
    async fn submit_order(&self, request: &OrderRequest) -> OrderingResult<OrderReceipt>;
    async fn order_status(&self, order_id: Uuid) -> OrderingResult<OrderStatus>;
}
