// Carebook application
// Wires the booking form, the timer scope and the submitter into iced

use std::sync::Arc;

use iced::widget::{column, container, row, scrollable, text};
use iced::{event, window, Application, Command, Element, Length, Subscription, Theme};
use log::{debug, info};

use crate::booking::{
    run_unless_cancelled, sleep_unless_cancelled, BookingForm, BookingSubmitter, NoticeTicket,
    SubmissionPhase, TimerKind, TimerScope,
};
use crate::calendar::DateWindow;
use crate::config::AppConfig;
use crate::messages::Message;
use crate::ui::styles::{BackgroundStyle, PanelStyle, PURPLE, TEXT};
use crate::ui::{self, form as sections, notice};
use crate::ui_state::UiState;
use crate::utils::logging;

/// Everything the application needs at mount.
pub struct AppFlags {
    pub config: AppConfig,
    pub submitter: Arc<dyn BookingSubmitter>,
}

pub struct CarebookApp {
    config: AppConfig,
    submitter: Arc<dyn BookingSubmitter>,

    // Computed once per mount
    dates: DateWindow,

    form: BookingForm,
    timers: TimerScope,
    ui_state: UiState,
}

impl CarebookApp {
    pub fn mount(flags: AppFlags, dates: DateWindow) -> Self {
        info!(
            "Mounting booking form: {} doctors, {} time slots, dates {} .. {}",
            flags.config.catalog.doctors.len(),
            flags.config.catalog.time_slots.len(),
            dates.options().first().map(|o| o.iso_date.as_str()).unwrap_or("-"),
            dates.options().last().map(|o| o.iso_date.as_str()).unwrap_or("-"),
        );

        Self {
            config: flags.config,
            submitter: flags.submitter,
            dates,
            form: BookingForm::new(),
            timers: TimerScope::new(),
            ui_state: UiState::new(),
        }
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn dates(&self) -> &DateWindow {
        &self.dates
    }

    pub fn timers(&self) -> &TimerScope {
        &self.timers
    }

    fn submit(&mut self) -> Command<Message> {
        let Some(request) = self.form.begin_submit() else {
            return Command::none();
        };
        self.ui_state.status_message = None;
        logging::log_submission(&request);

        let token = self.timers.arm(TimerKind::Submission);
        let submission = self.submitter.submit(request);

        Command::perform(
            async move { run_unless_cancelled(token, submission).await },
            |outcome| match outcome {
                Some(result) => Message::BookingSubmitted(result.map_err(|e| e.to_safe_string())),
                None => Message::TimerCancelled(TimerKind::Submission),
            },
        )
    }

    fn schedule_dismiss(&mut self, ticket: NoticeTicket) -> Command<Message> {
        let token = self.timers.arm(TimerKind::SuccessDismiss);
        let delay = self.config.timings.success_dismiss();

        Command::perform(
            async move { sleep_unless_cancelled(token, delay).await },
            move |fired| {
                if fired {
                    Message::SuccessTimerElapsed(ticket)
                } else {
                    Message::TimerCancelled(TimerKind::SuccessDismiss)
                }
            },
        )
    }

    fn view_form(&self) -> Element<'_, Message> {
        let catalog = &self.config.catalog;

        let status: Element<'_, Message> = match &self.ui_state.status_message {
            Some(message) => text(message)
                .size(14)
                .style(iced::theme::Text::Color(PURPLE))
                .into(),
            None => column![].into(),
        };

        let panel = container(
            column![
                sections::heading(),
                row![
                    sections::doctor_picker(catalog, &self.form),
                    sections::personal_details(&self.form),
                ]
                .spacing(32),
                text("Select Appointment Time")
                    .size(20)
                    .style(iced::theme::Text::Color(TEXT)),
                sections::date_picker(&self.dates, &self.form),
                sections::time_picker(catalog, &self.form),
                sections::additional_details(&self.form),
                sections::submit_button(&self.form),
                status,
            ]
            .spacing(28),
        )
        .padding(32)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(PanelStyle)));

        scrollable(container(panel).padding(48).width(Length::Fill))
            .height(Length::Fill)
            .into()
    }
}

impl Application for CarebookApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = AppFlags;

    fn new(flags: Self::Flags) -> (Self, Command<Message>) {
        (Self::mount(flags, DateWindow::from_local_now()), Command::none())
    }

    fn title(&self) -> String {
        format!("{} - Book Your Appointment", self.config.brand_name)
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::DoctorSelected(id) => {
                self.form.select_doctor(id);
                Command::none()
            }
            Message::DateSelected(date) => {
                self.form.select_date(date);
                Command::none()
            }
            Message::TimeSelected(slot) => {
                self.form.select_time(slot);
                Command::none()
            }
            Message::FullNameChanged(value) => {
                self.form.set_full_name(value);
                Command::none()
            }
            Message::PhoneChanged(value) => {
                self.form.set_phone(value);
                Command::none()
            }
            Message::LocationChanged(value) => {
                self.form.set_location(value);
                Command::none()
            }
            Message::ReferredByChanged(value) => {
                self.form.set_referred_by(value);
                Command::none()
            }
            Message::SubmitPressed => self.submit(),
            Message::BookingSubmitted(outcome) => {
                self.timers.complete(TimerKind::Submission);
                let failure = outcome.as_ref().err().cloned();
                match self.form.finish_submit(outcome) {
                    Some(ticket) => {
                        self.ui_state.notice_clock.restart();
                        self.schedule_dismiss(ticket)
                    }
                    None => {
                        self.ui_state.status_message = failure;
                        Command::none()
                    }
                }
            }
            Message::SuccessTimerElapsed(ticket) => {
                self.timers.complete(TimerKind::SuccessDismiss);
                self.form.expire_notice(ticket);
                Command::none()
            }
            Message::DismissSuccess => {
                if self.form.dismiss_notice() {
                    self.timers.cancel(TimerKind::SuccessDismiss);
                }
                Command::none()
            }
            Message::AnimationFrame(now) => {
                self.ui_state.notice_clock.tick(now);
                Command::none()
            }
            Message::TimerCancelled(kind) => {
                logging::log_timer_cancelled(kind);
                Command::none()
            }
            Message::ContactPressed => {
                debug!("Contact link pressed (placeholder)");
                Command::none()
            }
            Message::CloseRequested => {
                info!("Window closing while {}", self.form.phase());
                self.timers.teardown();
                window::close(window::Id::MAIN)
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let close_requests = event::listen_with(|event, _status| match event {
            iced::Event::Window(_, window::Event::CloseRequested) => Some(Message::CloseRequested),
            _ => None,
        });

        if self.form.phase() == SubmissionPhase::SuccessVisible && self.ui_state.notice_animating() {
            Subscription::batch(vec![
                close_requests,
                window::frames().map(Message::AnimationFrame),
            ])
        } else {
            close_requests
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let content = if self.form.is_success_visible() {
            notice::success_notice(self.ui_state.appear_frame(), self.ui_state.check_frame())
        } else {
            self.view_form()
        };

        container(column![ui::navbar(&self.config.brand_name), content])
            .width(Length::Fill)
            .height(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(BackgroundStyle)))
            .into()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}
