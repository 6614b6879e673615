//! Service, pack and option catalog.
//!
//! The catalog is configuration: the order logic only needs id → display name and
//! id → price lookups. [`Catalog::default`] carries the site's published offer;
//! [`Catalog::from_json`] loads a replacement.

use crate::model::SelectedOption;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Display;
use thiserror::Error;

/// Whole currency units (euros, tax included).
pub type Amount = u32;

macro_rules! catalog_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }
    };
}

catalog_id!(
    /// Identifier of a single-photo service, e.g. `restauration`.
    ServiceId
);
catalog_id!(
    /// Identifier of a multi-photo pack, e.g. `heritage10`.
    PackId
);
catalog_id!(
    /// Identifier of a per-photo add-on, e.g. `rush`.
    OptionId
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub id: ServiceId,
    pub name: String,
    pub price: Amount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackEntry {
    pub id: PackId,
    pub name: String,
    pub photos: u32,
    pub price: Amount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionEntry {
    pub id: OptionId,
    pub name: String,
    pub per_photo_price: Amount,
}

impl OptionEntry {
    /// The value its checkbox carries once ticked.
    pub fn checked(&self) -> SelectedOption {
        SelectedOption::new(self.id.clone(), self.per_photo_price)
    }
}

/// Errors raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate catalog id: {0}")]
    Duplicate(String),

    #[error("Pack {0} must contain at least one photo")]
    EmptyPack(PackId),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub services: Vec<ServiceEntry>,
    pub packs: Vec<PackEntry>,
    pub options: Vec<OptionEntry>,
}

impl Catalog {
    /// Parses and checks a catalog document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.check()?;
        Ok(catalog)
    }

    fn check(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        let ids = self
            .services
            .iter()
            .map(|s| s.id.as_str())
            .chain(self.packs.iter().map(|p| p.id.as_str()))
            .chain(self.options.iter().map(|o| o.id.as_str()));
        for id in ids {
            if !seen.insert(id) {
                return Err(CatalogError::Duplicate(id.to_string()));
            }
        }
        if let Some(pack) = self.packs.iter().find(|p| p.photos == 0) {
            return Err(CatalogError::EmptyPack(pack.id.clone()));
        }
        Ok(())
    }

    pub fn service(&self, id: &ServiceId) -> Option<&ServiceEntry> {
        self.services.iter().find(|s| &s.id == id)
    }

    pub fn pack(&self, id: &PackId) -> Option<&PackEntry> {
        self.packs.iter().find(|p| &p.id == id)
    }

    pub fn option(&self, id: &OptionId) -> Option<&OptionEntry> {
        self.options.iter().find(|o| &o.id == id)
    }

    pub fn service_name(&self, id: &ServiceId) -> Option<&str> {
        self.service(id).map(|s| s.name.as_str())
    }

    pub fn pack_name(&self, id: &PackId) -> Option<&str> {
        self.pack(id).map(|p| p.name.as_str())
    }

    pub fn option_name(&self, id: &OptionId) -> Option<&str> {
        self.option(id).map(|o| o.name.as_str())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let service = |id: &str, name: &str, price| ServiceEntry {
            id: id.into(),
            name: name.to_string(),
            price,
        };
        let pack = |id: &str, name: &str, photos, price| PackEntry {
            id: id.into(),
            name: name.to_string(),
            photos,
            price,
        };
        let option = |id: &str, name: &str, per_photo_price| OptionEntry {
            id: id.into(),
            name: name.to_string(),
            per_photo_price,
        };

        Self {
            services: vec![
                service("restauration", "Solo Restauration", 19),
                service("colorisation", "Solo Colorisation", 19),
                service("upscaling", "Solo Upscaling", 9),
                service(
                    "combo",
                    "Combo Full (restauration + colorisation + upscaling)",
                    39,
                ),
            ],
            packs: vec![
                pack("famille3", "Pack Famille 3 (3 photos)", 3, 49),
                pack("famille5", "Pack Famille 5 (5 photos)", 5, 75),
                pack("heritage10", "Pack Héritage 10 (10 photos)", 10, 139),
                pack("heritage20", "Pack Héritage 20 (20 photos)", 20, 249),
            ],
            options: vec![
                option("rush", "Livraison Rush (+5€ TTC/photo)", 5),
                option("express", "Livraison Express (+10€ TTC/photo)", 10),
                option("print", "Tirage papier (+4€ TTC/photo)", 4),
                option("cadre", "Avec cadre (+15€ TTC/photo)", 15),
            ],
        }
    }
}
