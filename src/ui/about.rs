// SPDX-License-Identifier: MPL-2.0
//! About screen module telling the house story.
//!
//! Story paragraphs come from the catalog. Under them a row of counters
//! climbs from zero to the house statistics; the climb starts the first
//! time the screen is shown and runs on the shared tick.

use crate::catalog::Stat;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::stats::Counter;
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{scrollable, Column, Container, Row, Text},
    Element, Length,
};
use std::time::{Duration, Instant};

/// One statistic together with the counter animating its value.
#[derive(Debug, Clone)]
struct StatCounter {
    stat: Stat,
    counter: Counter,
}

/// State for the about screen.
#[derive(Debug, Clone)]
pub struct State {
    rows: Vec<StatCounter>,
}

impl State {
    /// Create the about screen state over the house statistics.
    pub fn new(stats: Vec<Stat>, duration: Duration) -> Self {
        let rows = stats
            .into_iter()
            .map(|stat| {
                let counter = Counter::new(stat.value, duration);
                StatCounter { stat, counter }
            })
            .collect();
        Self { rows }
    }

    /// Start the counters if they have not started yet.
    ///
    /// Called when the screen is first shown. Subsequent calls keep the
    /// original starting point so revisiting the screen does not replay
    /// the climb.
    pub fn ensure_started(&mut self, now: Instant) {
        for row in &mut self.rows {
            row.counter.start(now);
        }
    }

    /// Whether any counter is still climbing as of `now`.
    pub fn has_pending_work(&self, now: Instant) -> bool {
        self.rows.iter().any(|row| row.counter.is_running(now))
    }
}

/// Contextual data needed to render the about screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub story: &'a [String],
    pub founded: &'a str,
    pub now: Instant,
}

/// Render the about screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let title = Text::new(ctx.i18n.tr("about-title")).size(typography::TITLE_LG);
    let founded = Container::new(
        Text::new(ctx.founded)
            .size(typography::BODY)
            .color(palette::PRIMARY_600),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::container::card_highlight);

    let mut column = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(title)
        .push(founded);

    for paragraph in ctx.story {
        column = column.push(Text::new(paragraph.as_str()).size(typography::BODY_LG));
    }

    if !ctx.state.rows.is_empty() {
        column = column.push(build_stat_row(&ctx));
    }

    let content = Container::new(
        Container::new(column)
            .max_width(sizing::CONTENT_WIDTH)
            .padding(spacing::XL),
    )
    .center_x(Length::Fill);

    scrollable(content).into()
}

/// Build the row of climbing counters.
fn build_stat_row<'a, M: 'a>(ctx: &ViewContext<'a>) -> Element<'a, M> {
    let mut row = Row::new().spacing(spacing::LG);

    for entry in &ctx.state.rows {
        let value = format!("{}{}", entry.counter.value(ctx.now), entry.stat.suffix);
        let cell = Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Center)
            .push(
                Text::new(value)
                    .size(typography::TITLE_LG)
                    .color(palette::PRIMARY_600),
            )
            .push(Text::new(entry.stat.label.as_str()).size(typography::BODY_SM));

        row = row.push(
            Container::new(cell)
                .padding(spacing::MD)
                .style(styles::container::card),
        );
    }

    row.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn stat(value: u64, suffix: &str, label: &str) -> Stat {
        Stat {
            value,
            suffix: suffix.to_owned(),
            label: label.to_owned(),
        }
    }

    fn house_stats() -> Vec<Stat> {
        vec![
            stat(15, "+", "Years of Tradition"),
            stat(1000, "+", "Happy Customers"),
            stat(25, "", "Awards Won"),
        ]
    }

    #[test]
    fn counters_idle_until_first_shown() {
        let now = Instant::now();
        let state = State::new(house_stats(), ms(2000));
        assert!(!state.has_pending_work(now));
    }

    #[test]
    fn counters_climb_after_start_and_settle() {
        let now = Instant::now();
        let mut state = State::new(house_stats(), ms(2000));
        state.ensure_started(now);
        assert!(state.has_pending_work(now + ms(1000)));
        assert!(!state.has_pending_work(now + ms(2000)));
    }

    #[test]
    fn revisiting_keeps_the_original_start() {
        let now = Instant::now();
        let mut state = State::new(house_stats(), ms(2000));
        state.ensure_started(now);
        state.ensure_started(now + ms(1500));
        assert!(!state.has_pending_work(now + ms(2000)));
    }

    #[test]
    fn about_view_renders() {
        let i18n = I18n::default();
        let now = Instant::now();
        let mut state = State::new(house_stats(), ms(2000));
        state.ensure_started(now);
        let story = vec![
            "First paragraph.".to_owned(),
            "Second paragraph.".to_owned(),
        ];
        let ctx = ViewContext {
            i18n: &i18n,
            state: &state,
            story: &story,
            founded: "Since 2009",
            now: now + ms(1000),
        };
        let _element: Element<'_, ()> = view(ctx);
    }
}
