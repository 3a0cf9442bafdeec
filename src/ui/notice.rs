// src/ui/notice.rs

use iced::alignment::Horizontal;
use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};

use crate::messages::Message;
use crate::ui::animation::Frame;
use crate::ui::styles::{with_alpha, BackdropStyle, CheckBadgeStyle, NoticeCardStyle, SUBTEXT, TEXT};

// Text cannot be laid out at size zero
const MIN_SCALE: f32 = 0.05;

/// Success overlay. Pressing the card dismisses it early.
pub fn success_notice<'a>(appear: Frame, check: Frame) -> Element<'a, Message> {
    let card_scale = appear.scale.max(MIN_SCALE);
    let badge_scale = check.scale.max(MIN_SCALE);
    let badge_size = 64.0 * badge_scale;

    let badge = container(
        text("✓")
            .size(32.0 * badge_scale)
            .horizontal_alignment(Horizontal::Center),
    )
    .width(Length::Fixed(badge_size))
    .height(Length::Fixed(badge_size))
    .center_x()
    .center_y()
    .style(iced::theme::Container::Custom(Box::new(CheckBadgeStyle {
        opacity: appear.opacity,
    })));

    let card = button(
        column![
            badge,
            text("Booking Successful!")
                .size(22.0 * card_scale)
                .style(iced::theme::Text::Color(with_alpha(TEXT, appear.opacity))),
            text("We'll contact you if any modifications")
                .size(15.0 * card_scale)
                .style(iced::theme::Text::Color(with_alpha(SUBTEXT, appear.opacity))),
        ]
        .spacing(12)
        .align_items(Alignment::Center),
    )
    .padding(32.0 * card_scale)
    .style(iced::theme::Button::Custom(Box::new(NoticeCardStyle {
        opacity: appear.opacity,
    })))
    .on_press(Message::DismissSuccess);

    container(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .style(iced::theme::Container::Custom(Box::new(BackdropStyle)))
        .into()
}
