//! What the page shows for a session. Derived from the order state, never read back.

use crate::model::{PackId, ServiceId};
use crate::submission::SubmitControl;
use crate::upload::UploadReport;
use serde::Serialize;

pub const CTA_SELECTED: &str = "✓ Sélectionné";
pub const CTA_SERVICE: &str = "Sélectionner";
pub const CTA_PACK: &str = "Choisir ce pack";

/// Undelivered notices kept per session. Older ones are dropped first.
pub const NOTICE_BACKLOG: usize = 8;

/// A pricing card on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Card {
    Service(ServiceId),
    Pack(PackId),
}

impl Card {
    /// Call-to-action label of this card given the currently selected one.
    pub fn cta_label(&self, selected: Option<&Card>) -> &'static str {
        match (self, selected) {
            (card, Some(current)) if card == current => CTA_SELECTED,
            (Card::Service(_), _) => CTA_SERVICE,
            (Card::Pack(_), _) => CTA_PACK,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum OptionLines {
    /// "no options" placeholder
    Placeholder(String),
    Items(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryContent {
    pub title: String,
    pub detail: String,
    pub options: OptionLines,
    pub total: String,
}

/// The order recap block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Summary {
    /// Nothing selected yet: placeholder shown, recap hidden.
    Empty,
    Filled(SummaryContent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NoticeKind {
    Info,
    Warning,
    Success,
    Error,
}

/// A blocking notification (an alert box on the page).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Control that receives input focus after a blocked submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Focus {
    FileInput,
    EmailField,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub selected_card: Option<Card>,
    pub summary: Summary,
    pub upload: Option<UploadReport>,
    pub email_error: Option<String>,
    pub invalid_fields: Vec<String>,
    pub focus: Option<Focus>,
    pub submit: SubmitControl,
    /// Raised but not yet delivered to the page, oldest first.
    pub notices: Vec<Notice>,
}

impl SessionView {
    pub fn new(submit_label: impl Into<String>) -> Self {
        Self {
            selected_card: None,
            summary: Summary::Empty,
            upload: None,
            email_error: None,
            invalid_fields: Vec::new(),
            focus: None,
            submit: SubmitControl::idle(submit_label),
            notices: Vec::new(),
        }
    }

    pub fn notify(&mut self, kind: NoticeKind, message: impl Into<String>) {
        if self.notices.len() == NOTICE_BACKLOG {
            self.notices.remove(0);
        }
        self.notices.push(Notice::new(kind, message));
    }

    /// Hands over the pending notices and forgets them.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn last_notice(&self) -> Option<&Notice> {
        self.notices.last()
    }
}
