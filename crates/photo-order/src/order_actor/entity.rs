//! [`ActorEntity`] implementation for [`OrderSession`].
//!
//! Each action mutates [`OrderState`](crate::model::OrderState) first, then re-derives
//! the parts of the view it touches. The summary is always rebuilt from scratch.

use super::actions::{OrderAction, OrderActionResult};
use super::context::SessionContext;
use super::error::OrderError;
use crate::gateway::{GatewayError, OrderRequest};
use crate::model::{Card, FormSnapshot, NoticeKind, OrderSession, SessionId, SessionOpen, Summary};
use crate::pricing::render_summary;
use crate::submission::{
    check_gates, Gate, SubmitControl, SubmitOutcome, SubmitPhase, Ticket, SUCCESS_MESSAGE,
};
use crate::upload::process_batch;
use crate::validation::EmailCheck;
use async_trait::async_trait;
use session_actor::ActorEntity;
use tracing::{debug, info, warn};

#[async_trait]
impl ActorEntity for OrderSession {
    type Id = SessionId;
    type Create = SessionOpen;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = SessionContext;
    type Error = OrderError;

    fn from_create_params(id: SessionId, _params: SessionOpen) -> Result<Self, OrderError> {
        Ok(Self::new(id))
    }

    async fn on_create(&mut self, ctx: &SessionContext) -> Result<(), OrderError> {
        self.view.submit = SubmitControl::idle(ctx.config.submit_label.as_str());
        debug!(session = %self.id, "Session opened");
        Ok(())
    }

    /// Drops a submission still in flight.
    async fn on_delete(&self, _ctx: &SessionContext) -> Result<(), OrderError> {
        if let Some(token) = &self.pending {
            debug!(session = %self.id, "Cancelling pending submission");
            token.cancel();
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &SessionContext,
    ) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::SelectService {
                service,
                unit_price,
            } => {
                self.state.select_service(service.clone(), unit_price);
                self.view.selected_card = Some(Card::Service(service));
                Ok(OrderActionResult::SelectService(self.refresh_summary(ctx)))
            }
            OrderAction::SelectPack {
                pack,
                photo_count,
                pack_price,
            } => {
                if photo_count == 0 {
                    return Err(OrderError::InvalidPhotoCount(pack));
                }
                self.state.select_pack(pack.clone(), photo_count, pack_price);
                self.view.selected_card = Some(Card::Pack(pack));
                Ok(OrderActionResult::SelectPack(self.refresh_summary(ctx)))
            }
            OrderAction::UpdateOptions(checked) => {
                self.state.replace_options(checked);
                Ok(OrderActionResult::UpdateOptions(self.refresh_summary(ctx)))
            }
            OrderAction::HandleFiles(files) => {
                let (accepted, report) = process_batch(files, ctx.config.max_file_size);
                info!(
                    session = %self.id,
                    accepted = report.accepted_count(),
                    rejected = report.rejected_count(),
                    "Upload batch processed"
                );
                self.state.replace_files(accepted);
                if let Some(warning) = &report.warning {
                    self.view.notify(NoticeKind::Warning, warning.as_str());
                }
                self.view.upload = Some(report.clone());
                Ok(OrderActionResult::HandleFiles(report))
            }
            OrderAction::EmailInput(value) => {
                Ok(OrderActionResult::EmailInput(self.check_email(&value, ctx)))
            }
            OrderAction::EmailBlur(value) => {
                Ok(OrderActionResult::EmailBlur(self.check_email(&value, ctx)))
            }
            OrderAction::Submit(form) => Ok(OrderActionResult::Submit(self.submit(form, ctx))),
            OrderAction::CompleteSubmission { ticket, result } => Ok(
                OrderActionResult::CompleteSubmission(self.complete(ticket, result, ctx)),
            ),
            OrderAction::Reset => {
                self.cancel_pending();
                self.phase = SubmitPhase::Idle;
                self.state.reset();
                self.view.selected_card = None;
                self.view.upload = None;
                self.view.email_error = None;
                self.view.invalid_fields.clear();
                self.view.focus = None;
                self.view.submit = SubmitControl::idle(ctx.config.submit_label.as_str());
                Ok(OrderActionResult::Reset(self.refresh_summary(ctx)))
            }
            OrderAction::TakeNotices => Ok(OrderActionResult::TakeNotices {
                notices: self.view.take_notices(),
                submit: self.view.submit.clone(),
            }),
        }
    }
}

impl OrderSession {
    fn refresh_summary(&mut self, ctx: &SessionContext) -> Summary {
        self.view.summary = render_summary(&self.state, &ctx.catalog);
        self.view.summary.clone()
    }

    fn check_email(&mut self, value: &str, ctx: &SessionContext) -> EmailCheck {
        let check = ctx.validator.check(value);
        self.view.email_error = check.error_text().map(str::to_string);
        check
    }

    fn submit(&mut self, form: FormSnapshot, ctx: &SessionContext) -> SubmitOutcome {
        if self.is_submitting() {
            debug!(session = %self.id, "Submit ignored while submitting");
            return SubmitOutcome::AlreadySubmitting;
        }

        let outcome = match check_gates(&self.state, &form, &ctx.validator) {
            Ok(()) => SubmitOutcome::Started {
                ticket: self.next_ticket,
            },
            Err(block) => SubmitOutcome::Blocked(block),
        };
        if outcome.reached(Gate::Email) {
            self.check_email(&form.email, ctx);
        }
        if outcome.reached(Gate::Required) {
            self.view.invalid_fields = match &outcome {
                SubmitOutcome::Blocked(block) => block.invalid_fields().to_vec(),
                _ => Vec::new(),
            };
        }

        match &outcome {
            SubmitOutcome::Blocked(block) => {
                info!(session = %self.id, reason = ?block, "Submit blocked");
                if let Some(focus) = block.focus() {
                    self.view.focus = Some(focus);
                }
                if let Some(message) = block.notice() {
                    self.view.notify(NoticeKind::Warning, message);
                }
            }
            SubmitOutcome::Started { ticket } => {
                let ticket = *ticket;
                self.next_ticket += 1;
                let request = OrderRequest::new(self.id, &self.state, form.email, form.fields);
                self.pending = Some(ctx.scheduler.schedule(self.id, ticket, request));
                self.phase = SubmitPhase::Submitting { ticket };
                self.view.submit = SubmitControl::submitting();
                info!(session = %self.id, ticket, total = self.total(), "Submission started");
            }
            SubmitOutcome::AlreadySubmitting => {}
        }
        outcome
    }

    fn complete(
        &mut self,
        ticket: Ticket,
        result: Result<(), GatewayError>,
        ctx: &SessionContext,
    ) -> bool {
        match self.phase {
            SubmitPhase::Submitting { ticket: current } if current == ticket => {}
            _ => {
                debug!(session = %self.id, ticket, "Stale submission result ignored");
                return false;
            }
        }

        self.pending = None;
        self.phase = SubmitPhase::Idle;
        self.view.submit = SubmitControl::idle(ctx.config.submit_label.as_str());
        match result {
            Ok(()) => {
                info!(session = %self.id, ticket, "Submission succeeded");
                self.view.notify(NoticeKind::Success, SUCCESS_MESSAGE);
            }
            Err(e) => {
                warn!(session = %self.id, ticket, error = %e, "Submission failed");
                self.view
                    .notify(NoticeKind::Error, format!("L'envoi a échoué : {e}"));
            }
        }
        true
    }
}
