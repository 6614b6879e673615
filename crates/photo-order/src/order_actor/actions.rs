//! Operations on an [`OrderSession`](crate::model::OrderSession).
//!
//! Every UI transition is one action, handled start to finish inside a single actor
//! message. [`OrderActionResult`] variants match the actions one to one.

use crate::gateway::GatewayError;
use crate::model::{
    Amount, FileDescriptor, FormSnapshot, Notice, PackId, SelectedOption, ServiceId, Summary,
};
use crate::submission::{SubmitControl, SubmitOutcome, Ticket};
use crate::upload::UploadReport;
use crate::validation::EmailCheck;

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// A service card was clicked. The price comes from the card.
    SelectService { service: ServiceId, unit_price: Amount },
    /// A pack card was clicked.
    ///
    /// # Errors
    /// Fails with `InvalidPhotoCount` when `photo_count` is zero.
    SelectPack {
        pack: PackId,
        photo_count: u32,
        pack_price: Amount,
    },
    /// The full set of checked options after a checkbox changed.
    UpdateOptions(Vec<SelectedOption>),
    /// A new batch from the picker or a drop. Replaces the previous batch.
    HandleFiles(Vec<FileDescriptor>),
    EmailInput(String),
    EmailBlur(String),
    Submit(FormSnapshot),
    /// Posted back by the deferred submission task.
    CompleteSubmission {
        ticket: Ticket,
        result: Result<(), GatewayError>,
    },
    Reset,
    /// Collects the notices raised since the last call, removing them from the session.
    TakeNotices,
}

#[derive(Debug, Clone)]
pub enum OrderActionResult {
    SelectService(Summary),
    SelectPack(Summary),
    UpdateOptions(Summary),
    HandleFiles(UploadReport),
    EmailInput(EmailCheck),
    EmailBlur(EmailCheck),
    Submit(SubmitOutcome),
    /// `false` when the ticket no longer matched a pending submission.
    CompleteSubmission(bool),
    Reset(Summary),
    TakeNotices {
        notices: Vec<Notice>,
        submit: SubmitControl,
    },
}
