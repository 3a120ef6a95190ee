// SPDX-License-Identifier: MPL-2.0
//! Responsive card grid.

use crate::gallery::Message;
use crate::ui::design_tokens::{sizing, spacing};
use iced::widget::{container, responsive, Column, Row, Space};
use iced::{Element, Length, Size};

/// Number of columns that fit in `width`, between 1 and
/// [`sizing::GRID_MAX_COLUMNS`].
#[must_use]
pub fn columns_for_width(width: f32) -> usize {
    let per_card = sizing::CARD_MIN_WIDTH + spacing::LG;
    let fitting = ((width + spacing::LG) / per_card).floor();
    if fitting.is_finite() && fitting >= 1.0 {
        (fitting as usize).min(sizing::GRID_MAX_COLUMNS)
    } else {
        1
    }
}

/// Lays the cards built by `cards` out in rows, re-flowing when the window
/// is resized.
pub fn view<'a, F>(cards: F) -> Element<'a, Message>
where
    F: Fn() -> Vec<Element<'a, Message>> + 'a,
{
    container(responsive(move |size: Size| {
        rows(cards(), columns_for_width(size.width))
    }))
    .width(Length::Fill)
    .max_width(sizing::CONTENT_MAX_WIDTH)
    .into()
}

fn rows<'a>(cards: Vec<Element<'a, Message>>, columns: usize) -> Element<'a, Message> {
    let mut grid = Column::new().spacing(spacing::LG).width(Length::Fill);
    let mut row = Row::new().spacing(spacing::LG).width(Length::Fill);
    let mut in_row = 0;

    for card in cards {
        row = row.push(container(card).width(Length::FillPortion(1)));
        in_row += 1;
        if in_row == columns {
            grid = grid.push(row);
            row = Row::new().spacing(spacing::LG).width(Length::Fill);
            in_row = 0;
        }
    }

    if in_row > 0 {
        for _ in in_row..columns {
            row = row.push(Space::new().width(Length::FillPortion(1)));
        }
        grid = grid.push(row);
    }

    grid.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_windows_get_one_column() {
        assert_eq!(columns_for_width(0.0), 1);
        assert_eq!(columns_for_width(sizing::CARD_MIN_WIDTH), 1);
    }

    #[test]
    fn columns_grow_with_width() {
        let two = sizing::CARD_MIN_WIDTH * 2.0 + spacing::LG;
        assert_eq!(columns_for_width(two), 2);
    }

    #[test]
    fn columns_are_capped() {
        assert_eq!(columns_for_width(10_000.0), sizing::GRID_MAX_COLUMNS);
    }

    #[test]
    fn nan_width_falls_back_to_one_column() {
        assert_eq!(columns_for_width(f32::NAN), 1);
    }
}
