//! Where a submitted order leaves the session.
//!
//! The site has no backend for this form yet, so the default gateway only waits and
//! reports success. A real transport implements [`SubmissionGateway`] and is handed to
//! [`ConfiguratorSystem::with_gateway`](crate::lifecycle::ConfiguratorSystem::with_gateway).

use crate::model::{Amount, FormField, OrderKind, OrderState, SelectedOption, SessionId};
use crate::pricing::compute_total;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("{0}")]
    Rejected(String),

    #[error("service unavailable")]
    Unavailable,
}

/// Everything the visitor asked for, as it would be posted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRequest {
    pub session: SessionId,
    pub kind: OrderKind,
    pub photo_count: u32,
    pub options: Vec<SelectedOption>,
    pub files: Vec<String>,
    pub total: Amount,
    pub email: String,
    pub fields: Vec<FormField>,
}

impl OrderRequest {
    pub fn new(session: SessionId, state: &OrderState, email: String, fields: Vec<FormField>) -> Self {
        Self {
            session,
            kind: state.kind().clone(),
            photo_count: state.photo_count(),
            options: state.options().to_vec(),
            files: state.files().iter().map(|f| f.name.clone()).collect(),
            total: compute_total(state),
            email,
            fields,
        }
    }
}

#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    async fn submit(&self, request: &OrderRequest) -> Result<(), GatewayError>;
}

/// Waits for a fixed delay, then accepts.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl SubmissionGateway for SimulatedGateway {
    async fn submit(&self, request: &OrderRequest) -> Result<(), GatewayError> {
        if let Ok(payload) = serde_json::to_string(request) {
            debug!(%payload, "Simulated submission");
        }
        tokio::time::sleep(self.delay).await;
        info!(session = %request.session, total = request.total, "Order request accepted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FileDescriptor;

    fn sample_request() -> OrderRequest {
        let mut state = OrderState::default();
        state.select_pack("famille5".into(), 5, 75);
        state.replace_options(vec![SelectedOption::new("print", 4)]);
        state.replace_files(vec![FileDescriptor::new("mamie.jpg", 2048, "image/jpeg")]);
        OrderRequest::new(
            SessionId(7),
            &state,
            "a@b.co".to_string(),
            vec![FormField::text("name", "Alice")],
        )
    }

    #[test]
    fn test_request_payload() {
        let request = sample_request();
        assert_eq!(request.total, 95);
        assert_eq!(request.files, vec!["mamie.jpg"]);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["kind"]["kind"], "pack");
        assert_eq!(json["kind"]["id"], "famille5");
        assert_eq!(json["options"][0]["id"], "print");
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_gateway_waits() {
        let gateway = SimulatedGateway::new(Duration::from_millis(1500));
        let start = tokio::time::Instant::now();
        gateway.submit(&sample_request()).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }
}
