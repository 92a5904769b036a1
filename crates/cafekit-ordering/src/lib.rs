//! # CafeKit Ordering
//!
//! Collaborator interfaces the drink customization screen hands off to:
//! customer session, cart, order placement, payment confirmation and
//! status polling. Backends implement the async traits; the in-memory cart
//! and the poller are usable as-is.

pub mod cart;
pub mod error;
pub mod order;
pub mod payment;
pub mod poller;
pub mod session;

pub use cart::{CartItem, CartStore, MemoryCart, MAX_QUANTITY};
pub use error::{OrderingError, OrderingResult};
pub use order::{OrderApi, OrderReceipt, OrderRequest, OrderStatus};
pub use payment::{PaymentGateway, PaymentMethod, PaymentStatus, ReceiptUpload};
pub use poller::{StatusPoller, TerminalStatus};
pub use session::{require_session, Session, SessionGate};
