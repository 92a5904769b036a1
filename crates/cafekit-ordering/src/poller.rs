//! Status polling
//!
//! Payment confirmation and kitchen progress are pull-only on the backend,
//! so the UI polls at a fixed interval until the status settles or the
//! overall deadline passes.

use crate::error::{OrderingError, OrderingResult};
use crate::order::{OrderApi, OrderStatus};
use crate::payment::{PaymentGateway, PaymentStatus};
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// A status that eventually stops changing
pub trait TerminalStatus {
    fn is_terminal(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPoller {
    interval: Duration,
    timeout: Duration,
}

impl Default for StatusPoller {
    fn default() -> Self {
        Self::new(Duration::from_secs(3), Duration::from_secs(300))
    }
}

impl StatusPoller {
    pub fn new(interval: Duration, timeout: Duration) -> Self {
        Self { interval, timeout }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Poll `fetch` until it yields a terminal status, calling `on_change`
    /// each time the observed status differs from the previous one
    pub async fn watch<S, F, Fut, C>(
        &self,
        what: &str,
        mut fetch: F,
        mut on_change: C,
    ) -> OrderingResult<S>
    where
        S: TerminalStatus + Copy + PartialEq + Display,
        F: FnMut() -> Fut,
        Fut: Future<Output = OrderingResult<S>>,
        C: FnMut(S),
    {
        let poll = async {
            let mut last: Option<S> = None;
            loop {
                let status = fetch().await?;
                if last != Some(status) {
                    info!("{} status: {}", what, status);
                    on_change(status);
                    last = Some(status);
                }
                if status.is_terminal() {
                    return Ok(status);
                }
                debug!("{} not settled, next poll in {:?}", what, self.interval);
                tokio::time::sleep(self.interval).await;
            }
        };

        match tokio::time::timeout(self.timeout, poll).await {
            Ok(result) => result,
            Err(_) => {
                warn!("Gave up waiting for {} after {:?}", what, self.timeout);
                Err(OrderingError::Timeout {
                    what: what.to_string(),
                    waited_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
                })
            }
        }
    }

    /// Poll `fetch` until it yields a terminal status
    pub async fn wait_until_terminal<S, F, Fut>(&self, what: &str, fetch: F) -> OrderingResult<S>
    where
        S: TerminalStatus + Copy + PartialEq + Display,
        F: FnMut() -> Fut,
        Fut: Future<Output = OrderingResult<S>>,
    {
        self.watch(what, fetch, |_| {}).await
    }

    /// Wait for the payment on an order to be confirmed, rejected or expire
    pub async fn wait_for_payment(
        &self,
        gateway: &dyn PaymentGateway,
        order_id: Uuid,
    ) -> OrderingResult<PaymentStatus> {
        let what = format!("payment for order {}", order_id);
        self.wait_until_terminal(&what, || gateway.payment_status(order_id))
            .await
    }

    /// Follow an order through the kitchen until it completes or is cancelled
    pub async fn track_order<C>(
        &self,
        api: &dyn OrderApi,
        order_id: Uuid,
        on_change: C,
    ) -> OrderingResult<OrderStatus>
    where
        C: FnMut(OrderStatus),
    {
        let what = format!("order {}", order_id);
        self.watch(&what, || api.order_status(order_id), on_change)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payment::ReceiptUpload;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::collections::VecDeque;

    /// Replays a fixed sequence of statuses, repeating the last one
    struct ScriptedGateway {
        statuses: Mutex<VecDeque<PaymentStatus>>,
        calls: Mutex<usize>,
    }

    impl ScriptedGateway {
        fn new(statuses: &[PaymentStatus]) -> Self {
            Self {
                statuses: Mutex::new(statuses.iter().copied().collect()),
                calls: Mutex::new(0),
            }
        }
    }

    #[async_trait]
    impl PaymentGateway for ScriptedGateway {
        async fn payment_status(&self, _order_id: Uuid) -> OrderingResult<PaymentStatus> {
            *self.calls.lock() += 1;
            let mut statuses = self.statuses.lock();
            if statuses.len() > 1 {
                Ok(statuses.pop_front().unwrap())
            } else {
                Ok(*statuses.front().unwrap())
            }
        }

        async fn upload_receipt(
            &self,
            _order_id: Uuid,
            _receipt: ReceiptUpload,
        ) -> OrderingResult<()> {
            Ok(())
        }
    }

    fn fast_poller(timeout_ms: u64) -> StatusPoller {
        StatusPoller::new(Duration::from_millis(1), Duration::from_millis(timeout_ms))
    }

    #[tokio::test]
    async fn test_waits_for_confirmation() {
        let gateway = ScriptedGateway::new(&[
            PaymentStatus::Pending,
            PaymentStatus::Pending,
            PaymentStatus::Confirmed,
        ]);
        let status = fast_poller(2000)
            .wait_for_payment(&gateway, Uuid::new_v4())
            .await
            .unwrap();
        assert_eq!(status, PaymentStatus::Confirmed);
        assert_eq!(*gateway.calls.lock(), 3);
    }

    #[tokio::test]
    async fn test_times_out_while_pending() {
        let gateway = ScriptedGateway::new(&[PaymentStatus::Pending]);
        let poller = StatusPoller::new(Duration::from_millis(5), Duration::from_millis(30));
        let err = poller
            .wait_for_payment(&gateway, Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(err.is_timeout());
        assert!(matches!(err, OrderingError::Timeout { waited_ms: 30, .. }));
    }

    #[tokio::test]
    async fn test_backend_error_stops_polling() {
        let poller = fast_poller(2000);
        let result: OrderingResult<PaymentStatus> = poller
            .wait_until_terminal("payment", || async {
                Err(OrderingError::backend("503 Service Unavailable"))
            })
            .await;
        assert_eq!(
            result,
            Err(OrderingError::Backend("503 Service Unavailable".into()))
        );
    }

    #[tokio::test]
    async fn test_change_callback_sees_each_transition_once() {
        let script = Mutex::new(VecDeque::from(vec![
            OrderStatus::Pending,
            OrderStatus::Pending,
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::Ready,
            OrderStatus::Completed,
        ]));
        let mut seen = Vec::new();
        let status = fast_poller(2000)
            .watch(
                "order",
                || {
                    let next = script.lock().pop_front();
                    async move { next.ok_or_else(|| OrderingError::backend("script exhausted")) }
                },
                |status| seen.push(status),
            )
            .await
            .unwrap();
        assert_eq!(status, OrderStatus::Completed);
        assert_eq!(
            seen,
            vec![
                OrderStatus::Pending,
                OrderStatus::Preparing,
                OrderStatus::Ready,
                OrderStatus::Completed,
            ]
        );
    }
}
