// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers that translate
//! component events into application state changes and follow-up tasks.

use super::{config, Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::about;
use crate::ui::circular_menu::{self, Event as CircularMenuEvent};
use crate::ui::hero::{self, Event as HeroEvent};
use crate::ui::menu_screen::{self, Event as MenuScreenEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub config: &'a mut config::Config,
    pub screen: &'a mut Screen,
    pub theme_mode: &'a mut ThemeMode,
    pub hero: &'a mut hero::State,
    pub circular_menu: &'a mut circular_menu::State,
    pub menu_screen: &'a mut menu_screen::State,
    pub about: &'a mut about::State,
    /// Last observed clock reading, fed to views that animate.
    pub now: &'a mut Instant,
}

/// Handles navbar messages.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message) {
        NavbarEvent::ShowScreen(screen) => {
            *ctx.screen = screen;
            if screen == Screen::About {
                let now = Instant::now();
                *ctx.now = now;
                ctx.about.ensure_started(now);
            }
            Task::none()
        }
        NavbarEvent::CycleLanguage => {
            ctx.i18n.cycle_locale();
            ctx.config.general.language = Some(ctx.i18n.current_locale().to_string());
            save_config(ctx.config.clone())
        }
        NavbarEvent::CycleTheme => {
            *ctx.theme_mode = ctx.theme_mode.cycled();
            ctx.config.general.theme_mode = *ctx.theme_mode;
            save_config(ctx.config.clone())
        }
    }
}

/// Handles hero carousel messages.
pub fn handle_hero_message(ctx: &mut UpdateContext<'_>, message: hero::Message) -> Task<Message> {
    let now = Instant::now();
    *ctx.now = now;
    match hero::update(ctx.hero, message, now) {
        HeroEvent::None => Task::none(),
        HeroEvent::SelectionRejected(error) => {
            eprintln!("{}", ctx.i18n.tr(error.i18n_key()));
            Task::none()
        }
        HeroEvent::OrderRequested => {
            *ctx.screen = Screen::Contact;
            Task::none()
        }
    }
}

/// Handles circular menu messages.
pub fn handle_circular_menu_message(
    ctx: &mut UpdateContext<'_>,
    message: circular_menu::Message,
) -> Task<Message> {
    let now = Instant::now();
    *ctx.now = now;
    match circular_menu::update(ctx.circular_menu, message, now) {
        CircularMenuEvent::None => Task::none(),
        CircularMenuEvent::SelectionRejected(error) => {
            eprintln!("{}", ctx.i18n.tr(error.i18n_key()));
            Task::none()
        }
        CircularMenuEvent::OrderRequested => {
            *ctx.screen = Screen::Contact;
            Task::none()
        }
    }
}

/// Handles menu screen messages.
pub fn handle_menu_screen_message(
    ctx: &mut UpdateContext<'_>,
    message: menu_screen::Message,
) -> Task<Message> {
    match menu_screen::update(ctx.menu_screen, message) {
        MenuScreenEvent::None => Task::none(),
    }
}

/// Handles the periodic tick by feeding every pending deadline.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    *ctx.now = now;
    ctx.hero.tick(now);
    ctx.circular_menu.tick(now);
    Task::none()
}

/// Handles the result of writing the configuration file.
pub fn handle_config_saved(
    ctx: &mut UpdateContext<'_>,
    result: &Result<(), String>,
) -> Task<Message> {
    if let Err(error) = result {
        eprintln!(
            "{}: {}",
            ctx.i18n.tr("notification-config-save-error"),
            error
        );
    }
    Task::none()
}

/// Writes `config` to disk off the UI thread.
fn save_config(config: config::Config) -> Task<Message> {
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || config::save(&config).map_err(|e| e.to_string()))
                .await
                .map_err(|e| e.to_string())?
        },
        Message::ConfigSaved,
    )
}
