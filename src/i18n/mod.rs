// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! UI chrome (screen names, buttons, the window title) is localized with
//! the Fluent localization system; catalog content is data and stays as
//! authored.
//!
//! # Features
//!
//! - Locale negotiation across CLI flag, config file and OS settings
//! - Embedded `.ftl` translation resources (`en-US` and `am`)
//! - Runtime language switching from the navbar
//! - Inline `MISSING:` markers for untranslated keys

pub mod fluent;
