// SPDX-License-Identifier: MPL-2.0
//! Hero carousel module showcasing the signature dishes.
//!
//! One dish is featured at a time with its art, rating, and price. The
//! rotation controller advances the feature automatically; pressing a
//! thumbnail or a selection dot picks a dish directly and pauses the
//! cycle for a cooldown. Hovering the showcase holds the current dish.

use crate::catalog::Dish;
use crate::error::RotationError;
use crate::i18n::fluent::I18n;
use crate::rotation::{Rotation, RotationConfig};
use crate::ui::art;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, mouse_area, Column, Container, Row, Svg, Text},
    Element, Length,
};
use std::time::Instant;

/// State for the hero carousel.
#[derive(Debug, Clone)]
pub struct State {
    /// Rotation over the featured dishes.
    rotation: Rotation<Dish>,
}

impl State {
    /// Create a hero carousel over `dishes`.
    pub fn new(dishes: Vec<Dish>, config: RotationConfig, now: Instant) -> Self {
        Self {
            rotation: Rotation::new(dishes, config, now),
        }
    }

    /// Process deadlines that have passed as of `now`.
    pub fn tick(&mut self, now: Instant) {
        self.rotation.tick(now);
    }

    /// Whether a deadline is outstanding and ticks are still needed.
    pub fn has_pending_work(&self) -> bool {
        self.rotation.has_pending_deadline()
    }

    /// Index of the featured dish, or `None` when the list is empty.
    pub fn active_index(&self) -> Option<usize> {
        self.rotation.active_index()
    }
}

/// Contextual data needed to render the hero carousel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Messages emitted by the hero carousel.
#[derive(Debug, Clone)]
pub enum Message {
    ThumbnailPressed(usize),
    DotPressed(usize),
    OrderPressed,
    HoverEntered,
    HoverExited,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// A selection was rejected; the index did not name a dish.
    SelectionRejected(RotationError),
    /// The order button was pressed.
    OrderRequested,
}

/// Process a hero message and return the corresponding event.
#[must_use]
pub fn update(state: &mut State, message: Message, now: Instant) -> Event {
    match message {
        Message::ThumbnailPressed(index) | Message::DotPressed(index) => {
            match state.rotation.select(index, now) {
                Ok(()) => Event::None,
                Err(error) => Event::SelectionRejected(error),
            }
        }
        Message::OrderPressed => Event::OrderRequested,
        Message::HoverEntered => {
            state.rotation.set_hovered(true, now);
            Event::None
        }
        Message::HoverExited => {
            state.rotation.set_hovered(false, now);
            Event::None
        }
    }
}

/// Render the hero carousel.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let Some(dish) = ctx.state.rotation.active() else {
        return build_empty_state(&ctx);
    };

    let feature = Row::new()
        .spacing(spacing::XL)
        .align_y(Vertical::Center)
        .push(build_feature_info(&ctx, dish))
        .push(build_feature_art(dish));

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(feature)
        .push(build_thumbnails(&ctx))
        .push(build_dots(&ctx));

    let panel = Container::new(content)
        .max_width(sizing::CONTENT_WIDTH + sizing::HERO_ART)
        .padding(spacing::XL)
        .style(styles::container::panel);

    mouse_area(Container::new(panel).center_x(Length::Fill))
        .on_enter(Message::HoverEntered)
        .on_exit(Message::HoverExited)
        .into()
}

/// Placeholder shown when the catalog holds no featured dish.
fn build_empty_state<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let notice = Text::new(ctx.i18n.tr("hero-empty")).size(typography::TITLE_MD);
    Container::new(notice)
        .padding(spacing::XXL)
        .center_x(Length::Fill)
        .into()
}

/// Build the name, rating, description, and order row for `dish`.
fn build_feature_info<'a>(ctx: &ViewContext<'a>, dish: &'a Dish) -> Element<'a, Message> {
    let name = Text::new(dish.name.as_str()).size(typography::DISPLAY);
    let description = Text::new(dish.description.as_str()).size(typography::BODY_LG);
    let price = Text::new(dish.price.as_str())
        .size(typography::TITLE_MD)
        .color(palette::PRIMARY_600);

    let order_button = button(Text::new(ctx.i18n.tr("hero-order-now")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .on_press(Message::OrderPressed)
        .style(styles::button::primary);

    let order_row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(price)
        .push(order_button);

    Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .push(name)
        .push(build_stars(dish.rating))
        .push(description)
        .push(order_row)
        .into()
}

/// Build the large dish illustration.
fn build_feature_art(dish: &Dish) -> Element<'static, Message> {
    let handle = art::for_key(&dish.art).unwrap_or_else(art::brand);
    Svg::new(handle)
        .width(sizing::HERO_ART)
        .height(sizing::HERO_ART)
        .into()
}

/// Build one star per rating point, padded to five with hollow stars.
fn build_stars(rating: u8) -> Element<'static, Message> {
    let mut row = Row::new().spacing(spacing::XXS);
    for position in 0..5 {
        let symbol = if position < rating { "★" } else { "☆" };
        row = row.push(
            Text::new(symbol)
                .size(typography::BODY_LG)
                .color(palette::STAR),
        );
    }
    row.into()
}

/// Build one art thumbnail per dish; the featured dish is highlighted.
fn build_thumbnails<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let active = ctx.state.rotation.active_index();
    let mut row = Row::new().spacing(spacing::SM);

    for (index, dish) in ctx.state.rotation.items().iter().enumerate() {
        let handle = art::for_key(&dish.art).unwrap_or_else(art::brand);
        let thumbnail = button(
            Svg::new(handle)
                .width(sizing::HERO_THUMB)
                .height(sizing::HERO_THUMB),
        )
        .padding(spacing::XXS)
        .on_press(Message::ThumbnailPressed(index));
        let thumbnail = if active == Some(index) {
            thumbnail.style(styles::button::selected)
        } else {
            thumbnail.style(styles::button::unselected)
        };
        row = row.push(thumbnail);
    }

    row.into()
}

/// Build one selection dot per dish.
fn build_dots<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let active = ctx.state.rotation.active_index();
    let mut row = Row::new().spacing(spacing::XS);

    for index in 0..ctx.state.rotation.len() {
        let dot = button(Text::new(""))
            .width(sizing::SELECTION_DOT)
            .height(sizing::SELECTION_DOT)
            .padding(0)
            .on_press(Message::DotPressed(index))
            .style(styles::button::dot(active == Some(index)));
        row = row.push(dot);
    }

    row.into()
}
