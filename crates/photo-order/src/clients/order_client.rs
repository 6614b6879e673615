//! # Order Client
//!
//! Typed API over `ResourceClient<OrderSession>`. One method per UI operation; each
//! sends a single action and unwraps the matching result variant.
use crate::model::{
    Amount, FileDescriptor, FormSnapshot, Notice, OrderSession, PackId, SelectedOption, ServiceId,
    SessionId, SessionOpen, Summary,
};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use crate::submission::{SubmitControl, SubmitOutcome};
use crate::upload::UploadReport;
use crate::validation::EmailCheck;
use async_trait::async_trait;
use session_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<OrderSession>,
}

#[async_trait]
impl ActorClient<OrderSession> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<OrderSession> {
        &self.inner
    }

    /// Entity errors come back as themselves; anything else is a transport failure.
    fn map_error(e: FrameworkError) -> Self::Error {
        if let Some(inner) = e.entity_error::<OrderError>() {
            return inner.clone();
        }
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

fn unexpected(result: OrderActionResult) -> OrderError {
    OrderError::ActorCommunicationError(format!("Unexpected action result: {result:?}"))
}

impl OrderClient {
    pub fn new(inner: ResourceClient<OrderSession>) -> Self {
        Self { inner }
    }

    async fn act(
        &self,
        session: SessionId,
        action: OrderAction,
    ) -> Result<OrderActionResult, OrderError> {
        self.inner
            .perform_action(session, action)
            .await
            .map_err(Self::map_error)
    }

    /// Page load.
    #[instrument(skip(self))]
    pub async fn open_session(&self) -> Result<SessionId, OrderError> {
        debug!("Sending request");
        self.inner
            .create(SessionOpen)
            .await
            .map_err(Self::map_error)
    }

    /// Page unload. Cancels a submission still in flight.
    #[instrument(skip(self))]
    pub async fn close_session(&self, session: SessionId) -> Result<(), OrderError> {
        debug!("Sending request");
        self.delete(session).await
    }

    /// Current session state and view.
    #[instrument(skip(self))]
    pub async fn snapshot(&self, session: SessionId) -> Result<OrderSession, OrderError> {
        self.get(session)
            .await?
            .ok_or_else(|| OrderError::NotFound(session.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn select_service(
        &self,
        session: SessionId,
        service: ServiceId,
        unit_price: Amount,
    ) -> Result<Summary, OrderError> {
        debug!("Sending request");
        match self
            .act(session, OrderAction::SelectService { service, unit_price })
            .await?
        {
            OrderActionResult::SelectService(summary) => Ok(summary),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn select_pack(
        &self,
        session: SessionId,
        pack: PackId,
        photo_count: u32,
        pack_price: Amount,
    ) -> Result<Summary, OrderError> {
        debug!("Sending request");
        let action = OrderAction::SelectPack {
            pack,
            photo_count,
            pack_price,
        };
        match self.act(session, action).await? {
            OrderActionResult::SelectPack(summary) => Ok(summary),
            other => Err(unexpected(other)),
        }
    }

    /// Replaces the option list with `checked`.
    #[instrument(skip(self))]
    pub async fn update_options(
        &self,
        session: SessionId,
        checked: Vec<SelectedOption>,
    ) -> Result<Summary, OrderError> {
        debug!("Sending request");
        match self.act(session, OrderAction::UpdateOptions(checked)).await? {
            OrderActionResult::UpdateOptions(summary) => Ok(summary),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self, files), fields(count = files.len()))]
    pub async fn handle_files(
        &self,
        session: SessionId,
        files: Vec<FileDescriptor>,
    ) -> Result<UploadReport, OrderError> {
        debug!("Sending request");
        match self.act(session, OrderAction::HandleFiles(files)).await? {
            OrderActionResult::HandleFiles(report) => Ok(report),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self, value))]
    pub async fn email_input(&self, session: SessionId, value: String) -> Result<EmailCheck, OrderError> {
        match self.act(session, OrderAction::EmailInput(value)).await? {
            OrderActionResult::EmailInput(check) => Ok(check),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self, value))]
    pub async fn email_blur(&self, session: SessionId, value: String) -> Result<EmailCheck, OrderError> {
        match self.act(session, OrderAction::EmailBlur(value)).await? {
            OrderActionResult::EmailBlur(check) => Ok(check),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self, form))]
    pub async fn submit(&self, session: SessionId, form: FormSnapshot) -> Result<SubmitOutcome, OrderError> {
        debug!("Sending request");
        match self.act(session, OrderAction::Submit(form)).await? {
            OrderActionResult::Submit(outcome) => Ok(outcome),
            other => Err(unexpected(other)),
        }
    }

    /// Back to an empty order. Cancels a submission in flight.
    #[instrument(skip(self))]
    pub async fn reset(&self, session: SessionId) -> Result<Summary, OrderError> {
        debug!("Sending request");
        match self.act(session, OrderAction::Reset).await? {
            OrderActionResult::Reset(summary) => Ok(summary),
            other => Err(unexpected(other)),
        }
    }

    /// Notices not yet shown, plus the submit control as it stands.
    #[instrument(skip(self))]
    pub async fn take_notices(
        &self,
        session: SessionId,
    ) -> Result<(Vec<Notice>, SubmitControl), OrderError> {
        match self.act(session, OrderAction::TakeNotices).await? {
            OrderActionResult::TakeNotices { notices, submit } => Ok((notices, submit)),
            other => Err(unexpected(other)),
        }
    }
}
