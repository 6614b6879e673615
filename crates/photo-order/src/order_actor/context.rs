//! Dependencies injected into the order actor at `run` time.

use super::actions::OrderAction;
use crate::config::WidgetConfig;
use crate::gateway::{OrderRequest, SubmissionGateway};
use crate::model::{Catalog, OrderSession, SessionId};
use crate::submission::Ticket;
use crate::validation::EmailValidator;
use session_actor::WeakResourceClient;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, Instrument};

pub struct SessionContext {
    pub catalog: Arc<Catalog>,
    pub config: Arc<WidgetConfig>,
    pub validator: EmailValidator,
    pub scheduler: SubmissionScheduler,
}

/// Runs submissions in the background and reports back to the session.
///
/// The task never touches session state. When the gateway answers it posts
/// [`OrderAction::CompleteSubmission`] through a weak client, so a pending submission
/// does not keep the actor alive. Each task gets a child of the shutdown token.
pub struct SubmissionScheduler {
    client: WeakResourceClient<OrderSession>,
    gateway: Arc<dyn SubmissionGateway>,
    shutdown: CancellationToken,
}

impl SubmissionScheduler {
    pub fn new(
        client: WeakResourceClient<OrderSession>,
        gateway: Arc<dyn SubmissionGateway>,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            client,
            gateway,
            shutdown,
        }
    }

    /// Starts one submission. Cancelling the returned token drops it silently.
    pub fn schedule(&self, session: SessionId, ticket: Ticket, request: OrderRequest) -> CancellationToken {
        let token = self.shutdown.child_token();
        let cancelled = token.clone();
        let client = self.client.clone();
        let gateway = Arc::clone(&self.gateway);

        let span = tracing::info_span!("submission", %session, ticket);
        tokio::spawn(
            async move {
                let result = tokio::select! {
                    _ = cancelled.cancelled() => {
                        debug!("Submission cancelled");
                        return;
                    }
                    result = gateway.submit(&request) => result,
                };
                let action = OrderAction::CompleteSubmission { ticket, result };
                if let Err(e) = client.perform_action(session, action).await {
                    debug!(error = %e, "Submission result not delivered");
                }
            }
            .instrument(span),
        );
        token
    }
}
