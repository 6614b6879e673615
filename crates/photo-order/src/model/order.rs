//! Order selection state of one page view.

use crate::model::{Amount, OptionId, PackId, ServiceId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for order sessions (one per page view).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u32);

impl From<u32> for SessionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session_{}", self.0)
    }
}

/// What the visitor picked. The identifier lives inside the variant, so a solo order
/// can never carry a pack id and the reverse.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum OrderKind {
    #[default]
    None,
    Solo(ServiceId),
    Pack(PackId),
}

/// A checked add-on with its per-photo surcharge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedOption {
    pub id: OptionId,
    pub per_photo_price: Amount,
}

impl SelectedOption {
    pub fn new(id: impl Into<OptionId>, per_photo_price: Amount) -> Self {
        Self {
            id: id.into(),
            per_photo_price,
        }
    }
}

/// Metadata of a local file. Contents are never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub name: String,
    pub byte_size: u64,
    pub mime_type: String,
}

impl FileDescriptor {
    pub fn new(name: impl Into<String>, byte_size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            byte_size,
            mime_type: mime_type.into(),
        }
    }
}

/// Current selection, options and accepted files.
///
/// With `kind == OrderKind::None` the base price is 0 and the photo count 1. Fields are
/// private; every change goes through the methods below so that invariant holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderState {
    kind: OrderKind,
    photo_count: u32,
    base_price: Amount,
    options: Vec<SelectedOption>,
    files: Vec<FileDescriptor>,
}

impl Default for OrderState {
    fn default() -> Self {
        Self {
            kind: OrderKind::None,
            photo_count: 1,
            base_price: 0,
            options: Vec::new(),
            files: Vec::new(),
        }
    }
}

impl OrderState {
    pub fn kind(&self) -> &OrderKind {
        &self.kind
    }

    pub fn has_selection(&self) -> bool {
        self.kind != OrderKind::None
    }

    pub fn selected_service(&self) -> Option<&ServiceId> {
        match &self.kind {
            OrderKind::Solo(id) => Some(id),
            _ => None,
        }
    }

    pub fn selected_pack(&self) -> Option<&PackId> {
        match &self.kind {
            OrderKind::Pack(id) => Some(id),
            _ => None,
        }
    }

    pub fn photo_count(&self) -> u32 {
        self.photo_count
    }

    pub fn base_price(&self) -> Amount {
        self.base_price
    }

    pub fn options(&self) -> &[SelectedOption] {
        &self.options
    }

    pub fn files(&self) -> &[FileDescriptor] {
        &self.files
    }

    /// Replaces any prior selection with a single-photo service.
    pub fn select_service(&mut self, service: ServiceId, unit_price: Amount) {
        self.kind = OrderKind::Solo(service);
        self.photo_count = 1;
        self.base_price = unit_price;
    }

    /// Replaces any prior selection with a pack. `photo_count` must be non-zero.
    pub fn select_pack(&mut self, pack: PackId, photo_count: u32, pack_price: Amount) {
        debug_assert!(photo_count > 0);
        self.kind = OrderKind::Pack(pack);
        self.photo_count = photo_count;
        self.base_price = pack_price;
    }

    /// Rebuilds the option list from the full checked set.
    ///
    /// A repeated id keeps its first position and takes the last surcharge.
    pub fn replace_options(&mut self, checked: Vec<SelectedOption>) {
        let mut options: Vec<SelectedOption> = Vec::with_capacity(checked.len());
        for option in checked {
            match options.iter_mut().find(|o| o.id == option.id) {
                Some(existing) => existing.per_photo_price = option.per_photo_price,
                None => options.push(option),
            }
        }
        self.options = options;
    }

    pub fn replace_files(&mut self, files: Vec<FileDescriptor>) {
        self.files = files;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
