// src/ui/mod.rs

use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length};

use crate::messages::Message;

pub mod animation;
pub mod form;
pub mod notice;
pub mod styles;

use styles::{LinkStyle, NavBarStyle, BLUE_DARK, SUBTEXT};

// --- SHARED PIECES ---

pub fn section_label(label: &str) -> Element<'_, Message> {
    text(label)
        .size(14)
        .style(iced::theme::Text::Color(SUBTEXT))
        .into()
}

/// Lays `items` out in rows of `per_row`, padding the last row so every
/// cell keeps the same width.
pub fn grid<'a>(items: Vec<Element<'a, Message>>, per_row: usize) -> Element<'a, Message> {
    let per_row = per_row.max(1);
    let mut rows: Vec<Element<'a, Message>> = Vec::new();
    let mut current: Vec<Element<'a, Message>> = Vec::with_capacity(per_row);

    for item in items {
        current.push(item);
        if current.len() == per_row {
            rows.push(row(std::mem::take(&mut current)).spacing(16).into());
        }
    }

    if !current.is_empty() {
        while current.len() < per_row {
            current.push(horizontal_space().into());
        }
        rows.push(row(current).spacing(16).into());
    }

    column(rows).spacing(16).width(Length::Fill).into()
}

// --- PAGE CHROME ---

pub fn navbar(brand: &str) -> Element<'_, Message> {
    container(
        row![
            text("♥").size(28).style(iced::theme::Text::Color(BLUE_DARK)),
            text(brand).size(30).style(iced::theme::Text::Color(BLUE_DARK)),
            horizontal_space(),
            // Placeholder link, goes nowhere
            button(text("✉  Contact").size(15))
                .padding([6, 10])
                .style(iced::theme::Button::Custom(Box::new(LinkStyle)))
                .on_press(Message::ContactPressed),
        ]
        .spacing(8)
        .align_items(Alignment::Center),
    )
    .padding([20, 32])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(NavBarStyle)))
    .into()
}
