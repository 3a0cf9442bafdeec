// src/ui/form.rs
//
// Sections of the booking form. Each takes the catalog or date pool plus the
// current form state and emits selection/input messages.

use iced::alignment::Horizontal;
use iced::widget::{button, column, text, text_input};
use iced::{Element, Length};

use crate::booking::BookingForm;
use crate::calendar::DateWindow;
use crate::messages::Message;
use crate::models::{Catalog, Doctor, TimeSlot};
use crate::ui::styles::{
    ChipTone, DateChipStyle, DoctorCardStyle, InputStyle, PrimaryButtonStyle, TimeChipStyle,
    BLUE_DARK, MUTED, SUBTEXT, TEXT,
};
use crate::ui::{grid, section_label};

pub fn heading<'a>() -> Element<'a, Message> {
    column![
        text("Book Your Appointment")
            .size(36)
            .style(iced::theme::Text::Color(BLUE_DARK)),
        text("Schedule a consultation with our expert medical professionals")
            .size(16)
            .style(iced::theme::Text::Color(SUBTEXT)),
    ]
    .spacing(8)
    .into()
}

fn doctor_card(doctor: &Doctor, selected: bool) -> Element<'_, Message> {
    button(
        column![
            text(&doctor.name).size(17).style(iced::theme::Text::Color(TEXT)),
            text(&doctor.specialty)
                .size(14)
                .style(iced::theme::Text::Color(SUBTEXT)),
            text(doctor.availability_line())
                .size(12)
                .style(iced::theme::Text::Color(MUTED)),
        ]
        .spacing(4),
    )
    .width(Length::Fill)
    .padding(16)
    .style(iced::theme::Button::Custom(Box::new(DoctorCardStyle { selected })))
    .on_press(Message::DoctorSelected(doctor.id))
    .into()
}

pub fn doctor_picker<'a>(catalog: &'a Catalog, form: &BookingForm) -> Element<'a, Message> {
    let cards = catalog
        .doctors
        .iter()
        .map(|doctor| doctor_card(doctor, form.is_doctor_selected(doctor.id)))
        .collect();

    column![section_label("Select Your Doctor"), grid(cards, 2)]
        .spacing(10)
        .width(Length::FillPortion(2))
        .into()
}

pub fn date_picker<'a>(window: &'a DateWindow, form: &BookingForm) -> Element<'a, Message> {
    let chips = window
        .options()
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let tone = ChipTone::for_date(index, form.is_date_selected(option.date));
            button(
                text(&option.display_label)
                    .size(14)
                    .width(Length::Fill)
                    .horizontal_alignment(Horizontal::Center),
            )
            .width(Length::Fill)
            .padding(16)
            .style(iced::theme::Button::Custom(Box::new(DateChipStyle { tone })))
            .on_press(Message::DateSelected(option.date))
            .into()
        })
        .collect();

    grid(chips, 5)
}

fn time_chip(slot: &TimeSlot, selected: bool) -> Element<'_, Message> {
    button(
        text(slot.label())
            .size(14)
            .width(Length::Fill)
            .horizontal_alignment(Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(12)
    .style(iced::theme::Button::Custom(Box::new(TimeChipStyle { selected })))
    .on_press(Message::TimeSelected(slot.clone()))
    .into()
}

pub fn time_picker<'a>(catalog: &'a Catalog, form: &BookingForm) -> Element<'a, Message> {
    let chips = catalog
        .time_slots
        .iter()
        .map(|slot| time_chip(slot, form.is_time_selected(slot)))
        .collect();

    grid(chips, 6)
}

pub fn labeled_input<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_input: fn(String) -> Message,
) -> Element<'a, Message> {
    column![
        section_label(label),
        text_input(placeholder, value)
            .on_input(on_input)
            .padding(12)
            .size(16)
            .style(iced::theme::TextInput::Custom(Box::new(InputStyle))),
    ]
    .spacing(6)
    .width(Length::Fill)
    .into()
}

pub fn personal_details(form: &BookingForm) -> Element<'_, Message> {
    let contact = form.contact();
    column![
        labeled_input("Full Name", "John Doe", &contact.full_name, Message::FullNameChanged),
        labeled_input("Phone/WhatsApp", "9999999999", &contact.phone, Message::PhoneChanged),
    ]
    .spacing(16)
    .width(Length::FillPortion(1))
    .into()
}

pub fn additional_details(form: &BookingForm) -> Element<'_, Message> {
    let contact = form.contact();
    iced::widget::row![
        labeled_input("Location", "Enter your location", &contact.location, Message::LocationChanged),
        labeled_input(
            "Referred By",
            "Enter referral name (optional)",
            &contact.referred_by,
            Message::ReferredByChanged
        ),
    ]
    .spacing(24)
    .into()
}

/// Disabled (no `on_press`) whenever the form is not idle.
pub fn submit_button<'a>(form: &BookingForm) -> Element<'a, Message> {
    let label = if form.is_submitting() {
        "Booking..."
    } else {
        "Book Appointment  →"
    };

    let submit = button(
        text(label)
            .size(18)
            .width(Length::Fill)
            .horizontal_alignment(Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(16)
    .style(iced::theme::Button::Custom(Box::new(PrimaryButtonStyle)));

    if form.can_submit() {
        submit.on_press(Message::SubmitPressed).into()
    } else {
        submit.into()
    }
}
