// SPDX-License-Identifier: MPL-2.0
//! `beteseb` is a desktop showcase for the Beteseb Ethiopian restaurant,
//! built with the Iced GUI framework.
//!
//! It presents the dish catalog through rotating showcases and demonstrates
//! internationalization with Fluent, user preference management, and modular
//! UI design.

#![doc(html_root_url = "https://docs.rs/beteseb/0.3.0")]

pub mod app;
pub mod catalog;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod rotation;
pub mod ui;

pub use app::config;
