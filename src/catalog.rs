// SPDX-License-Identifier: MPL-2.0
//! Restaurant content catalog: dishes, stats, story and contact details.
//!
//! Content ships as an embedded TOML document so packaging never has to
//! locate data files on disk. A parse failure degrades to a minimal
//! built-in catalog and surfaces a warning notification key.

use rust_embed::RustEmbed;
use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct Asset;

const CONTENT_FILE: &str = "content.toml";

/// A single menu entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Dish {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: String,
    /// Key into the illustration set (`ui::art`).
    pub art: String,
    pub rating: u8,
    #[serde(default)]
    pub main_dish: bool,
}

/// An animated statistic shown on the about screen.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stat {
    pub value: u64,
    #[serde(default)]
    pub suffix: String,
    pub label: String,
}

/// Address, phone and opening hours for the contact screen.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactInfo {
    pub address: Vec<String>,
    pub phone: String,
    pub hours: Vec<String>,
}

/// The full restaurant content set.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Catalog {
    pub name: String,
    pub tagline: String,
    pub founded: String,
    #[serde(default)]
    pub story: Vec<String>,
    #[serde(default)]
    pub dishes: Vec<Dish>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    pub contact: ContactInfo,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            name: "Beteseb".to_string(),
            tagline: "Authentic Ethiopian Cuisine".to_string(),
            founded: "Since 2009".to_string(),
            story: Vec::new(),
            dishes: Vec::new(),
            stats: Vec::new(),
            contact: ContactInfo {
                address: Vec::new(),
                phone: String::new(),
                hours: Vec::new(),
            },
        }
    }
}

impl Catalog {
    /// Dishes featured in the hero carousel.
    pub fn main_dishes(&self) -> Vec<Dish> {
        self.dishes
            .iter()
            .filter(|dish| dish.main_dish)
            .cloned()
            .collect()
    }
}

/// Loads the embedded catalog.
///
/// Returns the catalog and an optional warning notification key when the
/// embedded document is missing or malformed. The carousels handle an
/// empty dish list, so the fallback keeps the application usable.
pub fn load() -> (Catalog, Option<String>) {
    match load_embedded() {
        Ok(catalog) => (catalog, None),
        Err(_) => (
            Catalog::default(),
            Some("notification-catalog-load-error".to_string()),
        ),
    }
}

fn load_embedded() -> Result<Catalog> {
    let file = Asset::get(CONTENT_FILE)
        .ok_or_else(|| Error::Catalog(format!("embedded {CONTENT_FILE} not found")))?;
    let text = std::str::from_utf8(file.data.as_ref())
        .map_err(|parse_error| Error::Catalog(parse_error.to_string()))?;
    toml::from_str(text).map_err(|parse_error| Error::Catalog(parse_error.to_string()))
}
