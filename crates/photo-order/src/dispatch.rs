//! Adapter between page events and the order client.
//!
//! The page reports what happened ([`UiEvent`]); the dispatcher sends the matching
//! action and answers with what to change on the page ([`Dispatch`]). Nothing here
//! decides order logic. The drop-zone highlight is the only state it owns, since it
//! never affects the order.

use crate::clients::OrderClient;
use crate::model::{
    Amount, Card, FileDescriptor, Focus, FormSnapshot, Notice, PackEntry, PackId, SelectedOption,
    ServiceEntry, ServiceId, SessionId, Summary,
};
use crate::order_actor::OrderError;
use crate::submission::{Gate, SubmitBlock, SubmitControl, SubmitOutcome};
use crate::upload::UploadReport;
use crate::validation::EMAIL_ERROR;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Click on a service card's button. Price as carried by the card.
    ServiceCardClicked { service: ServiceId, price: Amount },
    PackCardClicked {
        pack: PackId,
        photos: u32,
        price: Amount,
    },
    /// An option checkbox changed; carries every box still checked.
    OptionsChanged(Vec<SelectedOption>),
    DragEnter,
    DragOver,
    DragLeave,
    Drop(Vec<FileDescriptor>),
    FilesPicked(Vec<FileDescriptor>),
    EmailInput(String),
    EmailBlur(String),
    FormSubmitted(FormSnapshot),
    ResetClicked,
}

impl UiEvent {
    pub fn service_card(entry: &ServiceEntry) -> Self {
        UiEvent::ServiceCardClicked {
            service: entry.id.clone(),
            price: entry.price,
        }
    }

    pub fn pack_card(entry: &PackEntry) -> Self {
        UiEvent::PackCardClicked {
            pack: entry.id.clone(),
            photos: entry.photos,
            price: entry.price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    MarkSelected(Card),
    ClearSelection,
    RenderSummary(Summary),
    HighlightDropZone(bool),
    RenderUpload(Option<UploadReport>),
    ShowEmailError(Option<String>),
    FlagInvalid(Vec<String>),
    Focus(Focus),
    SetSubmitControl(SubmitControl),
    Notify(Notice),
    /// Smooth scroll to the order form once `after` has elapsed.
    ScrollToForm { after: Duration },
}

/// Page changes for one event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dispatch {
    /// Whether the browser's default handling must be suppressed.
    pub prevent_default: bool,
    pub effects: Vec<UiEffect>,
}

impl Dispatch {
    fn prevented(effects: Vec<UiEffect>) -> Self {
        Self {
            prevent_default: true,
            effects,
        }
    }

    fn passive(effects: Vec<UiEffect>) -> Self {
        Self {
            prevent_default: false,
            effects,
        }
    }
}

/// Visual state of the upload target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropZone {
    highlighted: bool,
}

impl DropZone {
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Returns the effect only when the highlight actually changes.
    fn set(&mut self, on: bool) -> Option<UiEffect> {
        (self.highlighted != on).then(|| {
            self.highlighted = on;
            UiEffect::HighlightDropZone(on)
        })
    }
}

/// Event router for one page view.
pub struct UiDispatcher {
    client: OrderClient,
    session: SessionId,
    drop_zone: DropZone,
    scroll_delay: Duration,
}

impl UiDispatcher {
    pub fn new(client: OrderClient, session: SessionId, scroll_delay: Duration) -> Self {
        Self {
            client,
            session,
            drop_zone: DropZone::default(),
            scroll_delay,
        }
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn drop_zone(&self) -> DropZone {
        self.drop_zone
    }

    pub async fn dispatch(&mut self, event: UiEvent) -> Result<Dispatch, OrderError> {
        debug!(session = %self.session, ?event, "Dispatching");
        let session = self.session;
        match event {
            UiEvent::ServiceCardClicked { service, price } => {
                let summary = self
                    .client
                    .select_service(session, service.clone(), price)
                    .await?;
                Ok(Dispatch::prevented(self.selection_effects(Card::Service(service), summary)))
            }
            UiEvent::PackCardClicked {
                pack,
                photos,
                price,
            } => {
                let summary = self
                    .client
                    .select_pack(session, pack.clone(), photos, price)
                    .await?;
                Ok(Dispatch::prevented(self.selection_effects(Card::Pack(pack), summary)))
            }
            UiEvent::OptionsChanged(checked) => {
                let summary = self.client.update_options(session, checked).await?;
                Ok(Dispatch::passive(vec![UiEffect::RenderSummary(summary)]))
            }
            UiEvent::DragEnter | UiEvent::DragOver => {
                Ok(Dispatch::prevented(self.drop_zone.set(true).into_iter().collect()))
            }
            UiEvent::DragLeave => {
                Ok(Dispatch::prevented(self.drop_zone.set(false).into_iter().collect()))
            }
            UiEvent::Drop(files) => {
                let mut effects: Vec<UiEffect> = self.drop_zone.set(false).into_iter().collect();
                effects.extend(self.upload(files).await?);
                Ok(Dispatch::prevented(effects))
            }
            UiEvent::FilesPicked(files) => Ok(Dispatch::passive(self.upload(files).await?)),
            UiEvent::EmailInput(value) => {
                let check = self.client.email_input(session, value).await?;
                Ok(Dispatch::passive(vec![UiEffect::ShowEmailError(
                    check.error_text().map(str::to_string),
                )]))
            }
            UiEvent::EmailBlur(value) => {
                let check = self.client.email_blur(session, value).await?;
                Ok(Dispatch::passive(vec![UiEffect::ShowEmailError(
                    check.error_text().map(str::to_string),
                )]))
            }
            UiEvent::FormSubmitted(form) => {
                let outcome = self.client.submit(session, form).await?;
                let mut effects = Vec::new();
                if outcome.reached(Gate::Email) {
                    let invalid =
                        matches!(outcome, SubmitOutcome::Blocked(SubmitBlock::InvalidEmail));
                    effects.push(UiEffect::ShowEmailError(
                        invalid.then(|| EMAIL_ERROR.to_string()),
                    ));
                }
                if outcome.reached(Gate::Required) {
                    let flagged = match &outcome {
                        SubmitOutcome::Blocked(block) => block.invalid_fields().to_vec(),
                        _ => Vec::new(),
                    };
                    effects.push(UiEffect::FlagInvalid(flagged));
                }
                if let SubmitOutcome::Blocked(block) = &outcome {
                    effects.extend(block.focus().map(UiEffect::Focus));
                }
                effects.extend(self.sync().await?);
                Ok(Dispatch::prevented(effects))
            }
            UiEvent::ResetClicked => {
                let summary = self.client.reset(session).await?;
                let mut effects = vec![
                    UiEffect::ClearSelection,
                    UiEffect::RenderSummary(summary),
                    UiEffect::RenderUpload(None),
                ];
                effects.extend(self.sync().await?);
                Ok(Dispatch::prevented(effects))
            }
        }
    }

    /// Picks up what changed without a page event: the submit control and any notice
    /// raised since the last call (a finished submission, for instance).
    pub async fn sync(&mut self) -> Result<Vec<UiEffect>, OrderError> {
        let (notices, submit) = self.client.take_notices(self.session).await?;
        let mut effects: Vec<UiEffect> = notices.into_iter().map(UiEffect::Notify).collect();
        effects.push(UiEffect::SetSubmitControl(submit));
        Ok(effects)
    }

    fn selection_effects(&self, card: Card, summary: Summary) -> Vec<UiEffect> {
        vec![
            UiEffect::MarkSelected(card),
            UiEffect::RenderSummary(summary),
            UiEffect::ScrollToForm {
                after: self.scroll_delay,
            },
        ]
    }

    async fn upload(&mut self, files: Vec<FileDescriptor>) -> Result<Vec<UiEffect>, OrderError> {
        let report = self.client.handle_files(self.session, files).await?;
        let mut effects = vec![UiEffect::RenderUpload(Some(report))];
        effects.extend(self.sync().await?);
        Ok(effects)
    }
}
