//! Submit gating and the Idle/Submitting control state.

use crate::model::{Focus, FormSnapshot, OrderState};
use crate::validation::{EmailCheck, EmailValidator};
use serde::Serialize;
use thiserror::Error;

pub const SUBMITTING_LABEL: &str = "Envoi en cours...";

pub const SUCCESS_MESSAGE: &str = "Merci ! Votre demande a été envoyée avec succès.\n\nNous vous répondrons sous 48h avec un devis personnalisé.";

/// Identifies one submission attempt so a late completion for an abandoned attempt
/// can be recognised and dropped.
pub type Ticket = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting { ticket: Ticket },
}

/// The submit button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitControl {
    pub enabled: bool,
    pub label: String,
}

impl SubmitControl {
    pub fn idle(label: impl Into<String>) -> Self {
        Self {
            enabled: true,
            label: label.into(),
        }
    }

    pub fn submitting() -> Self {
        Self {
            enabled: false,
            label: SUBMITTING_LABEL.to_string(),
        }
    }
}

/// The submit checks, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Gate {
    Selection,
    Files,
    Email,
    Required,
}

/// Why a submit was refused. `Display` is the message for the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum SubmitBlock {
    #[error("Veuillez sélectionner un service ou un pack.")]
    NoSelection,

    #[error("Veuillez ajouter au moins une photo.")]
    NoFiles,

    #[error("Veuillez entrer une adresse email valide.")]
    InvalidEmail,

    #[error("Veuillez remplir tous les champs obligatoires.")]
    MissingRequired(Vec<String>),
}

impl SubmitBlock {
    /// The gate that refused the submit.
    pub fn gate(&self) -> Gate {
        match self {
            SubmitBlock::NoSelection => Gate::Selection,
            SubmitBlock::NoFiles => Gate::Files,
            SubmitBlock::InvalidEmail => Gate::Email,
            SubmitBlock::MissingRequired(_) => Gate::Required,
        }
    }

    /// Alert to raise for this block. A malformed email is only reported inline,
    /// next to the field.
    pub fn notice(&self) -> Option<String> {
        match self {
            SubmitBlock::InvalidEmail => None,
            other => Some(other.to_string()),
        }
    }

    /// Control to focus after the block, if any.
    pub fn focus(&self) -> Option<Focus> {
        match self {
            SubmitBlock::NoFiles => Some(Focus::FileInput),
            SubmitBlock::InvalidEmail => Some(Focus::EmailField),
            SubmitBlock::NoSelection | SubmitBlock::MissingRequired(_) => None,
        }
    }

    /// Fields to flag as invalid.
    pub fn invalid_fields(&self) -> &[String] {
        match self {
            SubmitBlock::MissingRequired(fields) => fields,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SubmitOutcome {
    Blocked(SubmitBlock),
    Started { ticket: Ticket },
    AlreadySubmitting,
}

impl SubmitOutcome {
    /// Whether `gate` ran during this submit. Fields owned by a gate only change
    /// when it runs.
    pub fn reached(&self, gate: Gate) -> bool {
        match self {
            SubmitOutcome::Blocked(block) => block.gate() >= gate,
            SubmitOutcome::Started { .. } => true,
            SubmitOutcome::AlreadySubmitting => false,
        }
    }
}

/// Runs the four submit gates in order and stops at the first failure.
pub fn check_gates(
    state: &OrderState,
    form: &FormSnapshot,
    validator: &EmailValidator,
) -> Result<(), SubmitBlock> {
    if !state.has_selection() {
        return Err(SubmitBlock::NoSelection);
    }
    if state.files().is_empty() {
        return Err(SubmitBlock::NoFiles);
    }
    if validator.check(&form.email) == EmailCheck::Invalid {
        return Err(SubmitBlock::InvalidEmail);
    }
    let missing = form.missing_required();
    if !missing.is_empty() {
        return Err(SubmitBlock::MissingRequired(missing));
    }
    Ok(())
}
