// SPDX-License-Identifier: MPL-2.0
//! Circular menu module presenting the full menu as a rotating ring.
//!
//! Every dish sits on a ring of numbered badges with a spoke pointing at
//! the active one. A card in the middle of the ring describes the active
//! dish. The rotation controller advances the ring automatically; the
//! selection dots pick a dish directly and the pill button below pauses
//! or resumes the cycle.

use crate::catalog::Dish;
use crate::error::RotationError;
use crate::i18n::fluent::I18n;
use crate::rotation::{Rotation, RotationConfig};
use crate::ui::design_tokens::{border, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::canvas::{self, Canvas, Path, Stroke};
use iced::{
    alignment::{Horizontal, Vertical},
    mouse,
    widget::{button, Column, Container, Row, Stack, Text},
    Element, Length, Point, Rectangle, Theme,
};
use std::time::Instant;

/// State for the circular menu.
#[derive(Debug, Clone)]
pub struct State {
    /// Rotation over every dish in catalog order.
    rotation: Rotation<Dish>,
}

impl State {
    /// Create a circular menu over `dishes`.
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

    /// Index of the active dish, or `None` when the list is empty.
    pub fn active_index(&self) -> Option<usize> {
        self.rotation.active_index()
    }

    /// Whether automatic advancement is currently enabled.
    pub fn auto_advance(&self) -> bool {
        self.rotation.auto_advance()
    }
}

/// Contextual data needed to render the circular menu.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Messages emitted by the circular menu.
#[derive(Debug, Clone)]
pub enum Message {
    DotPressed(usize),
    ToggleAutoAdvance,
    OrderPressed,
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

/// Process a circular menu message and return the corresponding event.
#[must_use]
pub fn update(state: &mut State, message: Message, now: Instant) -> Event {
    match message {
        Message::DotPressed(index) => match state.rotation.select(index, now) {
            Ok(()) => Event::None,
            Err(error) => Event::SelectionRejected(error),
        },
        Message::ToggleAutoAdvance => {
            state.rotation.toggle_auto_advance(now);
            Event::None
        }
        Message::OrderPressed => Event::OrderRequested,
    }
}

/// Angle of the badge for `index` on a ring of `count` items, in degrees.
///
/// Item zero sits at the top of the ring and the rest follow clockwise at
/// even spacing. `count` must be non-zero.
#[allow(clippy::cast_precision_loss)] // catalog counts stay far below f32 precision limits
pub fn badge_angle_degrees(index: usize, count: usize) -> f32 {
    (index as f32 * 360.0 / count as f32) - 90.0
}

/// Point on a ring of `radius` around `center` at `angle_degrees`.
pub fn badge_position(center: Point, radius: f32, angle_degrees: f32) -> Point {
    let radians = angle_degrees.to_radians();
    Point::new(
        center.x + radius * radians.cos(),
        center.y + radius * radians.sin(),
    )
}

/// Canvas program drawing the ring, the spoke, and the dish badges.
struct Ring<'a> {
    dishes: &'a [Dish],
    active: Option<usize>,
}

impl<'a, Message> canvas::Program<Message> for Ring<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let label_color = theme.extended_palette().background.base.text;

        let center = frame.center();
        let radius =
            (frame.width().min(frame.height()) / 2.0 - sizing::MENU_BADGE).min(sizing::MENU_RING_RADIUS);

        let ring = Path::circle(center, radius);
        frame.stroke(
            &ring,
            Stroke::default()
                .with_width(border::WIDTH_MD)
                .with_color(palette::PRIMARY_200),
        );

        let count = self.dishes.len();

        if let Some(active) = self.active {
            let target = badge_position(center, radius, badge_angle_degrees(active, count));
            let spoke = Path::line(center, target);
            frame.stroke(
                &spoke,
                Stroke::default()
                    .with_width(3.0)
                    .with_color(palette::PRIMARY_500)
                    .with_line_cap(canvas::LineCap::Round),
            );
        }

        for (index, dish) in self.dishes.iter().enumerate() {
            let position = badge_position(center, radius, badge_angle_degrees(index, count));
            let is_active = self.active == Some(index);
            let badge_radius = if is_active {
                sizing::MENU_BADGE * 0.75
            } else {
                sizing::MENU_BADGE * 0.5
            };

            let badge = Path::circle(position, badge_radius);
            frame.fill(
                &badge,
                if is_active {
                    palette::PRIMARY_500
                } else {
                    palette::CREAM_500
                },
            );
            frame.stroke(
                &badge,
                Stroke::default()
                    .with_width(border::WIDTH_SM)
                    .with_color(palette::PRIMARY_600),
            );

            // Canvas text anchors at the top left, so offsets approximate centering.
            let number = (index + 1).to_string();
            let number_size = typography::BODY;
            frame.fill_text(canvas::Text {
                content: number,
                position: Point::new(position.x - number_size * 0.28, position.y - number_size * 0.55),
                color: if is_active {
                    palette::WHITE
                } else {
                    palette::GRAY_900
                },
                size: number_size.into(),
                ..canvas::Text::default()
            });

            let label_size = typography::CAPTION;
            #[allow(clippy::cast_precision_loss)] // dish names are short
            let half_width = dish.name.chars().count() as f32 * label_size * 0.27;
            frame.fill_text(canvas::Text {
                content: dish.name.clone(),
                position: Point::new(position.x - half_width, position.y + badge_radius + 4.0),
                color: label_color,
                size: label_size.into(),
                ..canvas::Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}

/// Render the circular menu.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let ring = Canvas::new(Ring {
        dishes: ctx.state.rotation.items(),
        active: ctx.state.rotation.active_index(),
    })
    .width(Length::Fixed(sizing::MENU_CANVAS))
    .height(Length::Fixed(sizing::MENU_CANVAS));

    let mut stack = Stack::new()
        .width(Length::Fixed(sizing::MENU_CANVAS))
        .height(Length::Fixed(sizing::MENU_CANVAS))
        .push(ring);

    if let Some(dish) = ctx.state.rotation.active() {
        stack = stack.push(
            Container::new(build_center_card(&ctx, dish))
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        );
    }

    let mut content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(stack);

    if !ctx.state.rotation.is_empty() {
        content = content.push(build_dots(&ctx)).push(build_toggle(&ctx));
    }

    Container::new(content).center_x(Length::Fill).into()
}

/// Build the card describing the active dish.
fn build_center_card<'a>(ctx: &ViewContext<'a>, dish: &'a Dish) -> Element<'a, Message> {
    let name = Text::new(dish.name.as_str()).size(typography::TITLE_MD);
    let description = Text::new(dish.description.as_str()).size(typography::BODY_SM);
    let price = Text::new(dish.price.as_str())
        .size(typography::TITLE_SM)
        .color(palette::PRIMARY_600);

    let order_button = button(Text::new(ctx.i18n.tr("hero-order-now")).size(typography::BODY_SM))
        .padding([spacing::XXS, spacing::SM])
        .on_press(Message::OrderPressed)
        .style(styles::button::primary);

    let order_row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(price)
        .push(order_button);

    let card = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(name)
        .push(build_stars(dish.rating))
        .push(description)
        .push(order_row);

    Container::new(card)
        .width(Length::Fixed(sizing::CARD_WIDTH * 0.8))
        .padding(spacing::MD)
        .style(styles::container::card_highlight)
        .into()
}

/// Build one star per rating point, padded to five with hollow stars.
fn build_stars(rating: u8) -> Element<'static, Message> {
    let mut row = Row::new().spacing(spacing::XXS);
    for position in 0..5 {
        let symbol = if position < rating { "★" } else { "☆" };
        row = row.push(
            Text::new(symbol)
                .size(typography::BODY)
                .color(palette::STAR),
        );
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

/// Build the pill button that pauses or resumes the rotation.
fn build_toggle<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let key = if ctx.state.rotation.auto_advance() {
        "menu-pause-rotation"
    } else {
        "menu-resume-rotation"
    };

    button(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
        .padding([spacing::XS, spacing::LG])
        .on_press(Message::ToggleAutoAdvance)
        .style(styles::button::pill())
        .into()
}
