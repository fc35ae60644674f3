// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`hero`] - Featured dish carousel with automatic rotation
//! - [`circular_menu`] - Full menu on a rotating ring of badges
//! - [`menu_screen`] - Dish list with expandable detail cards
//! - [`about`] - House story and animated statistics
//! - [`contact`] - Address, phone, and opening hours
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Navigation bar with screen links and toggles
//! - [`stats`] - Counter animation for the statistics row
//! - [`art`] - Embedded dish illustrations
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod about;
pub mod art;
pub mod circular_menu;
pub mod contact;
pub mod design_tokens;
pub mod hero;
pub mod menu_screen;
pub mod navbar;
pub mod stats;
pub mod styles;
pub mod theming;
