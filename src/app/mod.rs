// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the domains (catalog, localization,
//! rotating showcases) and translates messages into side effects like config
//! persistence or screen changes. This file intentionally keeps policy
//! decisions (minimum window size, persistence format, localization
//! switching) close to the main update loop so it is easy to audit
//! user-facing behavior.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::catalog::{self, Catalog};
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use crate::ui::{about, circular_menu, hero, menu_screen};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    config: config::Config,
    catalog: Catalog,
    screen: Screen,
    theme_mode: ThemeMode,
    /// Featured-dish showcase at the top of the home screen.
    hero: hero::State,
    /// Rotating dish ring below the hero.
    circular_menu: circular_menu::State,
    /// Expandable dish cards on the menu screen.
    menu_screen: menu_screen::State,
    /// Animated statistics counters on the about screen.
    about: about::State,
    /// Last observed clock reading, fed to views that animate.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("dish_count", &self.catalog.dishes.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 650;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::assemble(
            I18n::default(),
            config::Config::default(),
            Catalog::default(),
        )
    }
}

impl App {
    /// Builds the screen state tree from a loaded catalog and config.
    fn assemble(i18n: I18n, config: config::Config, catalog: Catalog) -> Self {
        let now = Instant::now();
        let rotation = config.showcase.rotation_config();
        let hero = hero::State::new(catalog.main_dishes(), rotation, now);
        let circular_menu = circular_menu::State::new(catalog.dishes.clone(), rotation, now);
        let about = about::State::new(catalog.stats.clone(), config.showcase.counter_duration());
        let theme_mode = config.general.theme_mode;

        Self {
            i18n,
            config,
            catalog,
            screen: Screen::default(),
            theme_mode,
            hero,
            circular_menu,
            menu_screen: menu_screen::State::new(),
            about,
            now,
        }
    }

    /// Initializes application state from the persisted config and the
    /// embedded catalog, reporting load problems on stderr.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);
        let (catalog, catalog_warning) = catalog::load();

        let app = Self::assemble(i18n, config, catalog);

        if let Some(key) = config_warning {
            eprintln!("{}", app.i18n.tr(&key));
        }
        if let Some(key) = catalog_warning {
            eprintln!("{}", app.i18n.tr(&key));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.has_pending_work())
    }

    /// True while any rotation deadline or counter animation is outstanding.
    fn has_pending_work(&self) -> bool {
        self.hero.has_pending_work()
            || self.circular_menu.has_pending_work()
            || self.about.has_pending_work(self.now)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            config: &mut self.config,
            screen: &mut self.screen,
            theme_mode: &mut self.theme_mode,
            hero: &mut self.hero,
            circular_menu: &mut self.circular_menu,
            menu_screen: &mut self.menu_screen,
            about: &mut self.about,
            now: &mut self.now,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Hero(hero_message) => update::handle_hero_message(&mut ctx, hero_message),
            Message::CircularMenu(menu_message) => {
                update::handle_circular_menu_message(&mut ctx, menu_message)
            }
            Message::MenuScreen(card_message) => {
                update::handle_menu_screen_message(&mut ctx, card_message)
            }
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::ConfigSaved(result) => update::handle_config_saved(&mut ctx, &result),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            catalog: &self.catalog,
            screen: self.screen,
            theme_mode: self.theme_mode,
            hero: &self.hero,
            circular_menu: &self.circular_menu,
            menu_screen: &self.menu_screen,
            about: &self.about,
            now: self.now,
        })
    }
}
