// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! Brand emblem and title on the left, one link per screen in the
//! middle, language and theme toggles on the right.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::art;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::svg::Svg;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Screen,
    pub theme_mode: ThemeMode,
    pub brand_name: &'a str,
    pub tagline: &'a str,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ShowScreen(Screen),
    CycleLanguage,
    CycleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ShowScreen(Screen),
    CycleLanguage,
    CycleTheme,
}

/// Process a navbar message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::ShowScreen(screen) => Event::ShowScreen(screen),
        Message::CycleLanguage => Event::CycleLanguage,
        Message::CycleTheme => Event::CycleTheme,
    }
}

/// Render the navigation bar.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let brand = build_brand(&ctx);
    let links = build_links(&ctx);
    let toggles = build_toggles(&ctx);

    let row = Row::new()
        .spacing(spacing::LG)
        .padding([spacing::SM, spacing::MD])
        .align_y(Vertical::Center)
        .push(brand)
        .push(Container::new(links).center_x(Length::Fill))
        .push(toggles);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

/// Build the brand emblem with name and tagline.
fn build_brand<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let emblem = Svg::new(art::brand())
        .width(sizing::ICON_LG)
        .height(sizing::ICON_LG);

    let name = Text::new(ctx.brand_name).size(typography::TITLE_MD);
    let tagline = Text::new(ctx.tagline).size(typography::CAPTION);

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(emblem)
        .push(Column::new().push(name).push(tagline))
        .into()
}

/// Build one link button per screen; the active screen is highlighted.
fn build_links<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::SM);

    for screen in Screen::ALL {
        let label = ctx.i18n.tr(screen.title_key());
        let link = button(Text::new(label).size(typography::BODY))
            .padding([spacing::XS, spacing::SM])
            .on_press(Message::ShowScreen(screen));
        let link = if screen == ctx.active {
            link.style(styles::button::selected)
        } else {
            link.style(styles::button::unselected)
        };
        row = row.push(link);
    }

    row.into()
}

/// Build the language and theme toggle buttons.
fn build_toggles<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let language = button(Text::new(ctx.i18n.tr("navbar-language")).size(typography::BODY))
        .padding([spacing::XS, spacing::SM])
        .on_press(Message::CycleLanguage)
        .style(styles::button::unselected);

    let theme_key = match ctx.theme_mode {
        ThemeMode::Light => "theme-light",
        ThemeMode::Dark => "theme-dark",
        ThemeMode::System => "theme-system",
    };
    let theme = button(Text::new(ctx.i18n.tr(theme_key)).size(typography::BODY))
        .padding([spacing::XS, spacing::SM])
        .on_press(Message::CycleTheme)
        .style(styles::button::unselected);

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(language)
        .push(theme)
        .into()
}
