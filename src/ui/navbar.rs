// SPDX-License-Identifier: MPL-2.0
//! Page header: title, subtitle, section tabs, and the theme and language
//! toggles.

use crate::gallery::Tab;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::widget::{button, column, container, row, text, Row, Space};
use iced::{alignment, Element, Length, Theme};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active_tab: Tab,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    SelectTab(Tab),
    CycleTheme,
    CycleLanguage,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    SelectTab(Tab),
    ThemeModeChanged(ThemeMode),
    /// Switch to the next available interface language.
    CycleLanguage,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, theme_mode: &mut ThemeMode) -> Event {
    match message {
        Message::SelectTab(tab) => Event::SelectTab(tab),
        Message::CycleTheme => {
            *theme_mode = theme_mode.next();
            Event::ThemeModeChanged(*theme_mode)
        }
        Message::CycleLanguage => Event::CycleLanguage,
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let theme_label = text(i18n.tr(ctx.theme_mode.label_key())).size(typography::CAPTION);
    let theme_toggle = button(theme_label)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::ghost)
        .on_press(Message::CycleTheme);

    let language_label = text(i18n.tr("language-name")).size(typography::CAPTION);
    let language_toggle = button(language_label)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::ghost)
        .on_press(Message::CycleLanguage);

    let top = row![Space::new().width(Length::Fill), language_toggle, theme_toggle]
        .spacing(spacing::XS);

    let title = text(i18n.tr("header-title")).size(typography::DISPLAY);
    let subtitle = text(i18n.tr("header-subtitle"))
        .size(typography::BODY_LG)
        .style(|theme: &Theme| text::Style {
            color: Some(ColorScheme::for_theme(theme).text_muted),
        });

    let tabs: Vec<Element<'_, Message>> = Tab::ALL
        .into_iter()
        .map(|tab| {
            let style = if tab == ctx.active_tab {
                styles::button::tab_selected
            } else {
                styles::button::ghost
            };
            button(text(i18n.tr(tab.label_key())).size(typography::BODY_LG))
                .padding([spacing::SM, spacing::XL])
                .style(style)
                .on_press(Message::SelectTab(tab))
                .into()
        })
        .collect();

    let tab_bar = container(Row::with_children(tabs).spacing(spacing::XS))
        .padding(spacing::XXS)
        .style(styles::container::card(false));

    let content = column![top, title, subtitle, tab_bar]
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .max_width(sizing::CONTENT_MAX_WIDTH);

    container(content)
        .width(Length::Fill)
        .padding([spacing::LG, spacing::XL])
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::header)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_tab_is_forwarded() {
        let mut mode = ThemeMode::Dark;
        assert_eq!(
            update(Message::SelectTab(Tab::Videos), &mut mode),
            Event::SelectTab(Tab::Videos)
        );
        assert_eq!(mode, ThemeMode::Dark);
    }

    #[test]
    fn cycle_theme_advances_mode() {
        let mut mode = ThemeMode::System;
        assert_eq!(
            update(Message::CycleTheme, &mut mode),
            Event::ThemeModeChanged(ThemeMode::Light)
        );
        assert_eq!(mode, ThemeMode::Light);
    }

    #[test]
    fn cycle_language_is_forwarded() {
        let mut mode = ThemeMode::Light;
        assert_eq!(update(Message::CycleLanguage, &mut mode), Event::CycleLanguage);
        assert_eq!(mode, ThemeMode::Light);
    }

    #[test]
    fn view_builds() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            active_tab: Tab::Magazine,
            theme_mode: ThemeMode::System,
        });
    }
}
