// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{Message, Screen};
use crate::catalog::Catalog;
use crate::i18n::fluent::I18n;
use crate::ui::about::{self, ViewContext as AboutViewContext};
use crate::ui::circular_menu::{self, ViewContext as CircularMenuViewContext};
use crate::ui::contact::{self, ViewContext as ContactViewContext};
use crate::ui::design_tokens::spacing;
use crate::ui::hero::{self, ViewContext as HeroViewContext};
use crate::ui::menu_screen::{self, ViewContext as MenuScreenViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::theming::ThemeMode;
use iced::{
    widget::{scrollable, Column, Container},
    Element, Length,
};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub screen: Screen,
    pub theme_mode: ThemeMode,
    pub hero: &'a hero::State,
    pub circular_menu: &'a circular_menu::State,
    pub menu_screen: &'a menu_screen::State,
    pub about: &'a about::State,
    pub now: Instant,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        active: ctx.screen,
        theme_mode: ctx.theme_mode,
        brand_name: &ctx.catalog.name,
        tagline: &ctx.catalog.tagline,
    })
    .map(Message::Navbar);

    let body: Element<'_, Message> = match ctx.screen {
        Screen::Home => view_home(&ctx),
        Screen::About => view_about(&ctx),
        Screen::Menu => view_menu(&ctx),
        Screen::Contact => view_contact(&ctx),
    };

    Column::new()
        .push(navbar_view)
        .push(Container::new(body).width(Length::Fill).height(Length::Fill))
        .into()
}

/// Home stacks the hero carousel above the circular menu.
fn view_home<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let hero_view = hero::view(HeroViewContext {
        i18n: ctx.i18n,
        state: ctx.hero,
    })
    .map(Message::Hero);

    let menu_view = circular_menu::view(CircularMenuViewContext {
        i18n: ctx.i18n,
        state: ctx.circular_menu,
    })
    .map(Message::CircularMenu);

    let content = Column::new()
        .spacing(spacing::XXL)
        .padding(spacing::LG)
        .push(hero_view)
        .push(menu_view);

    scrollable(content).into()
}

fn view_about<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    about::view(AboutViewContext {
        i18n: ctx.i18n,
        state: ctx.about,
        story: &ctx.catalog.story,
        founded: &ctx.catalog.founded,
        now: ctx.now,
    })
}

fn view_menu<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    menu_screen::view(MenuScreenViewContext {
        i18n: ctx.i18n,
        state: ctx.menu_screen,
        dishes: &ctx.catalog.dishes,
    })
    .map(Message::MenuScreen)
}

fn view_contact<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    contact::view(ContactViewContext {
        i18n: ctx.i18n,
        contact: &ctx.catalog.contact,
    })
}
