// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::circular_menu;
use crate::ui::hero;
use crate::ui::menu_screen;
use crate::ui::navbar;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Hero(hero::Message),
    CircularMenu(circular_menu::Message),
    MenuScreen(menu_screen::Message),
    /// Periodic tick driving rotations and counters.
    Tick(Instant),
    /// Result from writing the configuration file.
    ConfigSaved(Result<(), String>),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `am`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `BETESEB_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
