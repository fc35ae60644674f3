// SPDX-License-Identifier: MPL-2.0
//! Dish and brand illustrations embedded at compile time.
//!
//! Illustrations are SVG sources under `assets/art/`, embedded via
//! `include_bytes!` with handles cached in `OnceLock` so repeated view
//! passes reuse one handle per image.
//!
//! The catalog references illustrations by key; [`for_key`] resolves a
//! key to its handle.

use iced::widget::svg::Handle;
use std::sync::OnceLock;

/// Defines an illustration function with a cached handle.
macro_rules! define_art {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Handle {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/art/", $filename));
            HANDLE.get_or_init(|| Handle::from_memory(DATA)).clone()
        }
    };
}

define_art!(
    doro_wat,
    "doro-wat.svg",
    "Doro wat: chicken stew in a clay pot with a hard-boiled egg."
);
define_art!(kitfo, "kitfo.svg", "Kitfo: seasoned minced beef on a plate.");
define_art!(tibs, "tibs.svg", "Tibs: sauteed meat cuts on a dark pan.");
define_art!(
    vegetarian_combo,
    "vegetarian-combo.svg",
    "Vegetarian combination platter on injera."
);
define_art!(injera, "injera.svg", "Rolled injera bread in a woven basket.");
define_art!(coffee, "coffee.svg", "Jebena coffee pot with a cup.");

/// Brand emblem used in the navbar.
pub fn brand() -> Handle {
    static HANDLE: OnceLock<Handle> = OnceLock::new();
    static DATA: &[u8] = include_bytes!("../../assets/branding/beteseb.svg");
    HANDLE.get_or_init(|| Handle::from_memory(DATA)).clone()
}

/// Resolves a catalog art key to its illustration handle.
pub fn for_key(key: &str) -> Option<Handle> {
    match key {
        "doro-wat" => Some(doro_wat()),
        "kitfo" => Some(kitfo()),
        "tibs" => Some(tibs()),
        "vegetarian-combo" => Some(vegetarian_combo()),
        "injera" => Some(injera()),
        "coffee" => Some(coffee()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_key_resolves() {
        let (catalog, _) = crate::catalog::load();
        for dish in catalog.dishes {
            assert!(
                for_key(&dish.art).is_some(),
                "no illustration for key {}",
                dish.art
            );
        }
    }

    #[test]
    fn unknown_key_resolves_to_none() {
        assert!(for_key("hamburger").is_none());
    }
}
