//! One page view: the order state plus what the page currently shows.

use crate::config::DEFAULT_SUBMIT_LABEL;
use crate::model::{Amount, OrderState, SessionId, SessionView};
use crate::pricing::compute_total;
use crate::submission::{SubmitPhase, Ticket};
use tokio_util::sync::CancellationToken;

/// Payload for opening a session. The page has nothing to send on load.
#[derive(Debug, Clone, Default)]
pub struct SessionOpen;

/// A live order session, managed by the order actor.
///
/// `state` is the source of truth; `view` is re-derived from it after every action.
#[derive(Debug, Clone)]
pub struct OrderSession {
    pub id: SessionId,
    pub state: OrderState,
    pub view: SessionView,
    pub phase: SubmitPhase,
    pub(crate) pending: Option<CancellationToken>,
    pub(crate) next_ticket: Ticket,
}

impl OrderSession {
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            state: OrderState::default(),
            view: SessionView::new(DEFAULT_SUBMIT_LABEL),
            phase: SubmitPhase::Idle,
            pending: None,
            next_ticket: 1,
        }
    }

    pub fn total(&self) -> Amount {
        compute_total(&self.state)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmitPhase::Submitting { .. })
    }

    /// Cancels the deferred submission task, if one is running.
    pub(crate) fn cancel_pending(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }
}
