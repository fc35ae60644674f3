// SPDX-License-Identifier: MPL-2.0
//! Contact screen module showing how to reach the house.
//!
//! Address, phone, and opening hours come from the catalog. The screen
//! emits no messages; it is the one purely informational surface.

use crate::catalog::ContactInfo;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{container, scrollable, Column, Container, Row, Text},
    Background, Border, Element, Length, Theme,
};

/// Contextual data needed to render the contact screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub contact: &'a ContactInfo,
}

/// Render the contact screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let title = Text::new(ctx.i18n.tr("contact-title")).size(typography::TITLE_LG);
    let intro = Text::new(ctx.i18n.tr("contact-intro")).size(typography::BODY_LG);

    let cards = Row::new()
        .spacing(spacing::LG)
        .push(build_card(
            ctx.i18n.tr("contact-location"),
            &ctx.contact.address,
        ))
        .push(build_card(
            ctx.i18n.tr("contact-phone"),
            std::slice::from_ref(&ctx.contact.phone),
        ))
        .push(build_card(ctx.i18n.tr("contact-hours"), &ctx.contact.hours));

    let pills = Row::new()
        .spacing(spacing::MD)
        .push(build_pill(ctx.i18n.tr("contact-reserve")))
        .push(build_pill(ctx.i18n.tr("contact-takeout")));

    let column = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(title)
        .push(intro)
        .push(cards)
        .push(pills);

    let content = Container::new(
        Container::new(column)
            .max_width(sizing::CONTENT_WIDTH)
            .padding(spacing::XL),
    )
    .center_x(Length::Fill);

    scrollable(content).into()
}

/// Build one information card with a title and its lines.
fn build_card<'a, M: 'a>(title: String, lines: &'a [String]) -> Element<'a, M> {
    let mut column = Column::new().spacing(spacing::XS).push(
        Text::new(title)
            .size(typography::TITLE_SM)
            .color(palette::PRIMARY_600),
    );

    for line in lines {
        column = column.push(Text::new(line.as_str()).size(typography::BODY));
    }

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

/// Build a pill-shaped label for a house service.
fn build_pill<'a, M: 'a>(label: String) -> Element<'a, M> {
    Container::new(Text::new(label).size(typography::BODY))
        .padding([spacing::XS, spacing::LG])
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: Some(palette::WHITE),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_view_renders() {
        let i18n = I18n::default();
        let contact = ContactInfo {
            address: vec!["123 Spice Street".to_owned(), "Little Ethiopia".to_owned()],
            phone: "(555) 123-4567".to_owned(),
            hours: vec!["Mon-Sun 11:00-22:00".to_owned()],
        };
        let ctx = ViewContext {
            i18n: &i18n,
            contact: &contact,
        };
        let _element: Element<'_, ()> = view(ctx);
    }
}
