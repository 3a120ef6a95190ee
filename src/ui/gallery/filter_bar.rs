// SPDX-License-Identifier: MPL-2.0
//! All / Past / Upcoming selector shown above the events grid.

use crate::catalog::EventFilter;
use crate::gallery::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Row};
use iced::{alignment, Element, Length};

pub fn view(i18n: &I18n, active: EventFilter) -> Element<'_, Message> {
    let buttons: Vec<Element<'_, Message>> = EventFilter::ALL
        .into_iter()
        .map(|filter| {
            let style = if filter == active {
                styles::button::filter_selected
            } else {
                styles::button::ghost
            };
            button(text(i18n.tr(filter.label_key())).size(typography::BODY))
                .padding([spacing::XS, spacing::LG])
                .style(style)
                .on_press(Message::SelectFilter(filter))
                .into()
        })
        .collect();

    let bar = container(
        Row::with_children(buttons)
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center),
    )
    .padding(spacing::XXS)
    .style(styles::container::card(false));

    container(bar)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}
