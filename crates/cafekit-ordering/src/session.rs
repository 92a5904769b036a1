//! Customer session check
//!
//! Authentication itself lives in the backend; the UI only asks whether a
//! usable session exists before showing the cart or placing an order.

use crate::error::{OrderingError, OrderingResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub display_name: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Source of the current customer session
#[async_trait]
pub trait SessionGate: Send + Sync {
    /// The active session, if any
    async fn current_session(&self) -> OrderingResult<Option<Session>>;
}

/// Resolve a live session or fail with `NotAuthenticated`
pub async fn require_session(gate: &dyn SessionGate) -> OrderingResult<Session> {
    match gate.current_session().await? {
        Some(session) if !session.is_expired_at(Utc::now()) => Ok(session),
        _ => Err(OrderingError::NotAuthenticated),
    }
}
