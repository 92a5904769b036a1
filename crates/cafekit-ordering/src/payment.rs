//! Payment interfaces
//!
//! Payments are confirmed out of band (a cashier, a bank transfer, a wallet
//! app), so the UI uploads proof when needed and polls for the outcome.

use crate::error::OrderingResult;
use crate::poller::TerminalStatus;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Card,
    BankTransfer,
    QrWallet,
}

impl PaymentMethod {
    /// Whether the customer has to upload a receipt for this method
    pub fn requires_receipt(self) -> bool {
        matches!(self, Self::BankTransfer | Self::QrWallet)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cash => write!(f, "Cash"),
            Self::Card => write!(f, "Card"),
            Self::BankTransfer => write!(f, "Bank transfer"),
            Self::QrWallet => write!(f, "QR wallet"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Confirmed,
    Rejected,
    Expired,
}

impl TerminalStatus for PaymentStatus {
    fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Confirmed => write!(f, "Confirmed"),
            Self::Rejected => write!(f, "Rejected"),
            Self::Expired => write!(f, "Expired"),
        }
    }
}

/// Proof of payment uploaded by the customer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Café payment backend
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn payment_status(&self, order_id: Uuid) -> OrderingResult<PaymentStatus>;
    async fn upload_receipt(&self, order_id: Uuid, receipt: ReceiptUpload) -> OrderingResult<()>;
}
