// SPDX-License-Identifier: MPL-2.0
//! Menu screen module listing every dish as an expandable card.
//!
//! Cards show the dish art, name, rating, and price. Expanding a card
//! reveals the full description. Expansion is tracked per dish id so
//! the positions survive catalog reordering.

use crate::catalog::Dish;
use crate::i18n::fluent::I18n;
use crate::ui::art;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, scrollable, Column, Container, Row, Svg, Text},
    Element, Length,
};
use std::collections::HashSet;

/// State for the menu screen (tracks which cards are expanded).
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Ids of the expanded dish cards.
    expanded: HashSet<u32>,
}

impl State {
    /// Create a new menu state with every card collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the card for `dish_id` is expanded.
    pub fn is_expanded(&self, dish_id: u32) -> bool {
        self.expanded.contains(&dish_id)
    }

    /// Toggle the card for `dish_id`.
    pub fn toggle(&mut self, dish_id: u32) {
        if self.expanded.contains(&dish_id) {
            self.expanded.remove(&dish_id);
        } else {
            self.expanded.insert(dish_id);
        }
    }
}

/// Contextual data needed to render the menu screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub dishes: &'a [Dish],
}

/// Messages emitted by the menu screen.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleCard(u32),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
}

/// Process a menu screen message and return the corresponding event.
#[must_use]
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::ToggleCard(dish_id) => {
            state.toggle(dish_id);
            Event::None
        }
    }
}

/// Render the menu screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("menu-title")).size(typography::TITLE_LG);
    let intro = Text::new(ctx.i18n.tr("menu-intro")).size(typography::BODY_LG);

    let mut column = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(title)
        .push(intro);

    for pair in ctx.dishes.chunks(2) {
        let mut row = Row::new().spacing(spacing::LG);
        for dish in pair {
            row = row.push(build_card(&ctx, dish));
        }
        column = column.push(row);
    }

    let content = Container::new(
        Container::new(column)
            .max_width(sizing::CONTENT_WIDTH)
            .padding(spacing::XL),
    )
    .center_x(Length::Fill);

    scrollable(content).into()
}

/// Build one dish card; expanded cards show the description.
fn build_card<'a>(ctx: &ViewContext<'a>, dish: &'a Dish) -> Element<'a, Message> {
    let expanded = ctx.state.is_expanded(dish.id);

    let illustration = Svg::new(art::for_key(&dish.art).unwrap_or_else(art::brand))
        .width(sizing::ICON_XL)
        .height(sizing::ICON_XL);

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(illustration)
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(dish.name.as_str()).size(typography::TITLE_SM))
                .push(build_stars(dish.rating)),
        );

    let toggle_key = if expanded {
        "menu-card-close"
    } else {
        "menu-card-details"
    };
    let footer = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Text::new(dish.price.as_str())
                .size(typography::BODY_LG)
                .color(palette::PRIMARY_600)
                .width(Length::Fill),
        )
        .push(
            button(Text::new(ctx.i18n.tr(toggle_key)).size(typography::BODY_SM))
                .padding([spacing::XXS, spacing::SM])
                .on_press(Message::ToggleCard(dish.id))
                .style(styles::button::unselected),
        );

    let mut body = Column::new().spacing(spacing::SM).push(header);
    if expanded {
        body = body.push(Text::new(dish.description.as_str()).size(typography::BODY));
    }
    body = body.push(footer);

    let style = if expanded {
        styles::container::card_highlight
    } else {
        styles::container::card
    };

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(style)
        .into()
}

/// Build one star per rating point, padded to five with hollow stars.
fn build_stars(rating: u8) -> Element<'static, Message> {
    let mut row = Row::new().spacing(spacing::XXS);
    for position in 0..5 {
        let symbol = if position < rating { "★" } else { "☆" };
        row = row.push(
            Text::new(symbol)
                .size(typography::BODY_SM)
                .color(palette::STAR),
        );
    }
    row.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(id: u32, name: &str) -> Dish {
        Dish {
            id,
            name: name.to_owned(),
            description: format!("{name} description"),
            price: "$12".to_owned(),
            art: "doro-wat".to_owned(),
            rating: 5,
            main_dish: false,
        }
    }

    #[test]
    fn toggle_expands_then_collapses() {
        let mut state = State::new();
        assert!(!state.is_expanded(3));

        let _ = update(&mut state, Message::ToggleCard(3));
        assert!(state.is_expanded(3));

        let _ = update(&mut state, Message::ToggleCard(3));
        assert!(!state.is_expanded(3));
    }

    #[test]
    fn cards_expand_independently() {
        let mut state = State::new();
        let _ = update(&mut state, Message::ToggleCard(1));
        let _ = update(&mut state, Message::ToggleCard(2));
        let _ = update(&mut state, Message::ToggleCard(1));
        assert!(!state.is_expanded(1));
        assert!(state.is_expanded(2));
    }

    #[test]
    fn menu_view_renders() {
        let i18n = I18n::default();
        let mut state = State::new();
        state.toggle(2);
        let dishes = vec![dish(1, "Doro Wat"), dish(2, "Kitfo"), dish(3, "Tibs")];
        let ctx = ViewContext {
            i18n: &i18n,
            state: &state,
            dishes: &dishes,
        };
        let _element = view(ctx);
    }
}
