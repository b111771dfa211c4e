// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is header, scrollable content and footer, with toasts stacked on
//! top. On wide windows the year form lives in the header; on narrow ones it
//! moves below the speech card.

use super::Message;
use crate::application::session::Session;
use crate::config::{CONTENT_MAX_WIDTH, WIDE_LAYOUT_MIN_WIDTH};
use crate::i18n::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::notifications::{self, Toast};
use crate::ui::speech_card::{self, CardContent};
use crate::ui::{footer, header, quick_years, share_buttons, styles, year_form};
use iced::widget::{scrollable, Column, Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a Session,
    pub year_form: &'a year_form::State,
    pub notifications: &'a notifications::Manager,
    pub window_width: f32,
    pub pulse: f32,
    pub calendar_year: i32,
}

/// Whether the window is wide enough to host the year form in the header.
#[must_use]
pub fn is_wide_layout(window_width: f32) -> bool {
    window_width >= WIDE_LAYOUT_MIN_WIDTH
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let wide = is_wide_layout(ctx.window_width);
    let form = || year_form::view(ctx.year_form, ctx.i18n).map(Message::YearForm);

    let header = header::view(header::ViewContext {
        i18n: ctx.i18n,
        trailing: wide.then(form),
    });

    let chips = quick_years::buttons(
        ctx.session.available_years(),
        ctx.session.year(),
        ctx.i18n,
    );
    let card = speech_card::view::<Message>(speech_card::ViewContext {
        content: CardContent::from_state(ctx.session.speech_state(), ctx.session.year(), ctx.i18n),
        pulse: ctx.pulse,
    });

    let mut content = Column::new()
        .spacing(spacing::LG)
        .max_width(CONTENT_MAX_WIDTH)
        .push(quick_years::view(chips).map(Message::QuickYears))
        .push(card);
    if !wide {
        content = content.push(form());
    }
    content = content.push(share_buttons::view(ctx.i18n).map(Message::Share));

    let body = scrollable(
        Container::new(content)
            .center_x(Length::Fill)
            .padding([spacing::XL, spacing::LG]),
    )
    .height(Length::Fill);

    let footer = footer::view(footer::ViewContext {
        i18n: ctx.i18n,
        current_year: ctx.calendar_year,
    })
    .map(Message::Footer);

    let page = Container::new(Column::new().push(header).push(body).push(footer))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(toasts)
        .into()
}
