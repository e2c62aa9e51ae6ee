//! Static event catalog.
//!
//! The catalog is the read-only list of fest events the interaction engine
//! walks over. It is built once at startup, either from the built-in
//! Xplore'25 lineup or from a JSON file, and validated on construction:
//!
//! - ids are 1-based and unique
//! - every detail record belongs to an existing item
//! - registration links are absolute http(s) urls
//!
//! ## Example
//!
//! ```
//! use xplore_core::Catalog;
//!
//! let catalog = Catalog::xplore25();
//! assert_eq!(catalog.len(), 8);
//! assert_eq!(catalog.get(3).unwrap().title, "Capture the Craft Table");
//! ```

mod xplore25;

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Stable, 1-based event identifier
pub type ItemId = u32;

/// One card in the events grid
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ItemId,
    pub title: String,
    pub image_ref: String,
    pub description: String,
    pub category: String,
}

/// How a rule section is presented
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleTone {
    /// How the event runs
    #[default]
    Format,
    /// How winners are picked
    Criteria,
    /// Fest-wide rules
    General,
    /// Announcements
    Notice,
}

/// A titled list of rule bullet points
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSection {
    pub heading: String,
    #[serde(default)]
    pub tone: RuleTone,
    pub points: Vec<String>,
}

/// Modal-only extension of a [`ContentItem`], keyed by the same id
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailItem {
    pub id: ItemId,
    pub poster_ref: String,
    pub registration_url: String,
    #[serde(default)]
    pub rules: Vec<RuleSection>,
}

/// Student coordinator contact
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinator {
    pub name: String,
    pub phone: String,
}

/// On-disk shape of a catalog
#[derive(Clone, Debug, Serialize, Deserialize)]
struct CatalogFile {
    name: String,
    items: Vec<ContentItem>,
    #[serde(default)]
    details: Vec<DetailItem>,
    #[serde(default)]
    general_rules: Vec<RuleSection>,
    #[serde(default)]
    coordinators: Vec<Coordinator>,
}

/// Validated, ordered event catalog
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CatalogFile", into = "CatalogFile")]
pub struct Catalog {
    name: String,
    items: Vec<ContentItem>,
    details: BTreeMap<ItemId, DetailItem>,
    general_rules: Vec<RuleSection>,
    coordinators: Vec<Coordinator>,
}

impl TryFrom<CatalogFile> for Catalog {
    type Error = CatalogError;

    fn try_from(file: CatalogFile) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(file.items.len());
        for item in &file.items {
            if item.id == 0 {
                return Err(CatalogError::ZeroId(item.id));
            }
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
        }

        let mut details = BTreeMap::new();
        for detail in file.details {
            if !seen.contains(&detail.id) {
                return Err(CatalogError::OrphanDetail(detail.id));
            }
            if !is_http_url(&detail.registration_url) {
                return Err(CatalogError::InvalidUrl {
                    id: detail.id,
                    url: detail.registration_url,
                });
            }
            let id = detail.id;
            if details.insert(id, detail).is_some() {
                return Err(CatalogError::DuplicateId(id));
            }
        }

        Ok(Self {
            name: file.name,
            items: file.items,
            details,
            general_rules: file.general_rules,
            coordinators: file.coordinators,
        })
    }
}

impl From<Catalog> for CatalogFile {
    fn from(catalog: Catalog) -> Self {
        Self {
            name: catalog.name,
            items: catalog.items,
            details: catalog.details.into_values().collect(),
            general_rules: catalog.general_rules,
            coordinators: catalog.coordinators,
        }
    }
}

fn is_http_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    matches!(rest, Some(host) if !host.is_empty())
}

/// Two-digit card badge, e.g. `#05`
pub fn badge(id: ItemId) -> String {
    format!("#{:02}", id)
}

impl Catalog {
    /// Build a catalog from parts, applying the same validation as loading.
    pub fn new(
        name: impl Into<String>,
        items: Vec<ContentItem>,
        details: Vec<DetailItem>,
    ) -> Result<Self, CatalogError> {
        CatalogFile {
            name: name.into(),
            items,
            details,
            general_rules: Vec::new(),
            coordinators: Vec::new(),
        }
        .try_into()
    }

    /// Parse and validate a JSON catalog
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        file.try_into()
    }

    /// Read and validate a JSON catalog file
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), events = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    /// Pretty JSON that [`Catalog::from_json_str`] accepts
    pub fn to_json_pretty(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Fest name shown in titles
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in display order
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Position of an item in display order
    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn detail(&self, id: ItemId) -> Option<&DetailItem> {
        self.details.get(&id)
    }

    /// Poster shown in the detail view, falling back to the card-back image
    pub fn poster_ref(&self, id: ItemId) -> String {
        self.detail(id)
            .map(|d| d.poster_ref.clone())
            .unwrap_or_else(|| self.hidden_ref(id))
    }

    /// Image on the face-down side of a card
    pub fn hidden_ref(&self, id: ItemId) -> String {
        format!("/assets/{}.jpg", id)
    }

    pub fn registration_url(&self, id: ItemId) -> Option<&str> {
        self.detail(id).map(|d| d.registration_url.as_str())
    }

    /// Event-specific rule sections (empty when there is no detail record)
    pub fn rules(&self, id: ItemId) -> &[RuleSection] {
        self.detail(id).map(|d| d.rules.as_slice()).unwrap_or(&[])
    }

    /// Rules shared by every event
    pub fn general_rules(&self) -> &[RuleSection] {
        &self.general_rules
    }

    pub fn coordinators(&self) -> &[Coordinator] {
        &self.coordinators
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::xplore25()
    }
}
