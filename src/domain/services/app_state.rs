#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use anyhow::Result;
use chrono::Local;
use tokio::sync::mpsc;

use super::appointment_details;
use super::appointments_view;
use super::professional_items;
use super::professional_options;
use super::service_items;
use super::service_options;
use super::AppointmentRow;
use super::AppointmentsState;
use super::AppointmentsView;
use super::NoticeBoard;
use super::ReferenceCache;
use super::ScheduleForm;
use super::SelectOption;
use crate::domain::models::Action;
use crate::domain::models::Command;
use crate::domain::models::Event;
use crate::domain::models::Flow;
use crate::domain::models::Notice;
use crate::domain::models::NoticeTarget;
use crate::domain::models::Session;

pub const BOOKING_SUCCESS: &str = "Appointment booked successfully!";
pub const CANCEL_SUCCESS: &str = "Appointment cancelled successfully!";
pub const CANCEL_CONFIRMATION: &str = "Are you sure you want to cancel this appointment?";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum BookingField {
    #[default]
    Professional,
    Service,
    Date,
    Time,
}

impl BookingField {
    pub fn next(&self) -> BookingField {
        match self {
            BookingField::Professional => return BookingField::Service,
            BookingField::Service => return BookingField::Date,
            BookingField::Date => return BookingField::Time,
            BookingField::Time => return BookingField::Professional,
        }
    }

    pub fn previous(&self) -> BookingField {
        match self {
            BookingField::Professional => return BookingField::Time,
            BookingField::Service => return BookingField::Professional,
            BookingField::Date => return BookingField::Service,
            BookingField::Time => return BookingField::Date,
        }
    }

    pub fn is_text(&self) -> bool {
        return matches!(self, BookingField::Date | BookingField::Time);
    }
}

/// Selection state of the booking popup. Indexes point into the option lists,
/// where 0 is always the placeholder. Date and time text lives in the widgets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub professional: usize,
    pub service: usize,
    pub focus: BookingField,
}

/// Which layer of the dashboard currently receives keyboard input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Alert,
    ConfirmCancel,
    Booking(BookingField),
    Browse,
}

fn cycle(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        return (index + 1) % len;
    }

    return (index + len - 1) % len;
}

pub struct AppState {
    pub session: Session,
    pub cache: ReferenceCache,
    pub appointments: AppointmentsState,
    pub notices: NoticeBoard,
    pub booking: Option<BookingForm>,
    pub pending_cancel: Option<i64>,
    pub alert: Option<String>,
    pub selected: usize,
    pub currency: String,
    action_tx: mpsc::UnboundedSender<Action>,
    event_tx: mpsc::UnboundedSender<Event>,
}

impl AppState {
    pub fn new(
        session: Session,
        currency: &str,
        action_tx: mpsc::UnboundedSender<Action>,
        event_tx: mpsc::UnboundedSender<Event>,
    ) -> AppState {
        return AppState {
            session,
            cache: ReferenceCache::default(),
            appointments: AppointmentsState::default(),
            notices: NoticeBoard::default(),
            booking: None,
            pending_cancel: None,
            alert: None,
            selected: 0,
            currency: currency.to_string(),
            action_tx,
            event_tx,
        };
    }

    /// Fetches everything the dashboard shows. Requests run concurrently and
    /// land in whatever order the backend answers.
    pub fn load(&mut self) -> Result<()> {
        self.action_tx.send(Action::LoadProfessionals())?;
        self.action_tx.send(Action::LoadServices())?;
        self.load_appointments()?;

        return Ok(());
    }

    pub fn load_appointments(&mut self) -> Result<()> {
        if let Some(user_id) = self.session.authenticated_user() {
            self.action_tx.send(Action::LoadAppointments(user_id))?;
        }

        return Ok(());
    }

    pub fn mode(&self) -> Mode {
        if self.alert.is_some() {
            return Mode::Alert;
        }
        if self.pending_cancel.is_some() {
            return Mode::ConfirmCancel;
        }
        if let Some(booking) = &self.booking {
            return Mode::Booking(booking.focus);
        }

        return Mode::Browse;
    }

    pub fn appointments_view(&self) -> AppointmentsView {
        return appointments_view(&self.appointments, &self.cache);
    }

    pub fn professional_items(&self) -> Vec<String> {
        return professional_items(&self.cache);
    }

    pub fn service_items(&self) -> Vec<String> {
        return service_items(&self.cache, &self.currency);
    }

    pub fn professional_options(&self) -> Vec<SelectOption> {
        return professional_options(&self.cache);
    }

    pub fn service_options(&self) -> Vec<SelectOption> {
        return service_options(&self.cache, &self.currency);
    }

    pub fn selected_row(&self) -> Option<AppointmentRow> {
        return self.appointments_view().rows().get(self.selected).cloned();
    }

    pub fn handle_event(&mut self, event: Event) -> Result<Flow> {
        match event {
            Event::ProfessionalsLoaded(professionals) => {
                self.cache.replace_professionals(professionals);
                if let Some(booking) = self.booking.as_mut() {
                    booking.professional = 0;
                }
            }
            Event::ServicesLoaded(services) => {
                self.cache.replace_services(services);
                if let Some(booking) = self.booking.as_mut() {
                    booking.service = 0;
                }
            }
            Event::AppointmentsLoaded(appointments) => {
                self.appointments = AppointmentsState::Loaded(appointments);
                self.clamp_selection();
            }
            Event::AppointmentsFailed() => {
                self.appointments = AppointmentsState::Failed;
                self.selected = 0;
            }
            Event::AppointmentCreated(appointment) => {
                tracing::info!(id = appointment.id, "Appointment booked");
                self.booking = None;
                self.show_notice(Notice::success(NoticeTarget::Schedule, BOOKING_SUCCESS));
                self.load_appointments()?;
            }
            Event::AppointmentCancelled(appointment) => {
                tracing::info!(id = appointment.id, "Appointment cancelled");
                self.alert = Some(CANCEL_SUCCESS.to_string());
                self.load_appointments()?;
            }
            Event::AppointmentDetails(appointment) => {
                self.alert = Some(appointment_details(
                    &appointment,
                    &self.cache,
                    &self.currency,
                    &Local,
                ));
            }
            Event::Alert(text) => {
                self.alert = Some(text);
            }
            Event::Notice(notice) => {
                self.show_notice(notice);
            }
            Event::NoticeExpired(target) => {
                self.notices.expire(target);
            }
            Event::KeyboardInput(_) | Event::UIResize() | Event::UITick() => {}
        }

        return Ok(Flow::Continue);
    }

    pub fn dispatch(&mut self, command: Command) -> Result<Flow> {
        tracing::debug!(?command, "Dispatching command");

        match command {
            Command::Quit() => return Ok(Flow::Quit),
            Command::Logout() => return Ok(Flow::Logout),
            Command::Refresh() => {
                self.load()?;
            }
            Command::SelectNext() => {
                let len = self.appointments_view().rows().len();
                if self.selected + 1 < len {
                    self.selected += 1;
                }
            }
            Command::SelectPrevious() => {
                self.selected = self.selected.saturating_sub(1);
            }
            Command::OpenBooking() => {
                self.booking = Some(BookingForm::default());
            }
            Command::CloseBooking() => {
                self.booking = None;
            }
            Command::FocusNextField() => {
                if let Some(booking) = self.booking.as_mut() {
                    booking.focus = booking.focus.next();
                }
            }
            Command::FocusPreviousField() => {
                if let Some(booking) = self.booking.as_mut() {
                    booking.focus = booking.focus.previous();
                }
            }
            Command::CycleNext() => self.cycle_selection(true),
            Command::CyclePrevious() => self.cycle_selection(false),
            Command::SubmitBooking { date, time } => {
                return self.submit_booking(&date, &time);
            }
            Command::RequestCancel() => {
                if let Some(row) = self.selected_row() {
                    if row.cancellable {
                        self.pending_cancel = Some(row.id);
                    }
                }
            }
            Command::ConfirmCancel(confirmed) => {
                let appointment_id = self.pending_cancel.take();
                if let (true, Some(appointment_id), Some(user_id)) =
                    (confirmed, appointment_id, self.session.authenticated_user())
                {
                    self.action_tx
                        .send(Action::CancelAppointment(appointment_id, user_id))?;
                }
            }
            Command::ShowDetails() => {
                if let Some(row) = self.selected_row() {
                    self.action_tx.send(Action::ShowAppointment(row.id))?;
                }
            }
            Command::DismissAlert() => {
                self.alert = None;
            }
        }

        return Ok(Flow::Continue);
    }

    fn submit_booking(&mut self, date: &str, time: &str) -> Result<Flow> {
        let user_id = match self.session.authenticated_user() {
            Some(user_id) => user_id,
            None => return Ok(Flow::Logout),
        };
        let booking = self.booking.unwrap_or_default();

        let form = ScheduleForm {
            professional_id: self
                .professional_options()
                .get(booking.professional)
                .and_then(|option| return option.value),
            service_id: self
                .service_options()
                .get(booking.service)
                .and_then(|option| return option.value),
            date: date.to_string(),
            time: time.to_string(),
        };

        match form.validate(user_id) {
            Ok(appointment) => {
                self.action_tx.send(Action::CreateAppointment(appointment))?;
            }
            Err(err) => {
                self.show_notice(Notice::error(NoticeTarget::Schedule, &err.to_string()));
            }
        }

        return Ok(Flow::Continue);
    }

    fn cycle_selection(&mut self, forward: bool) {
        let professionals = self.cache.professionals().len() + 1;
        let services = self.cache.services().len() + 1;

        if let Some(booking) = self.booking.as_mut() {
            match booking.focus {
                BookingField::Professional => {
                    booking.professional = cycle(booking.professional, professionals, forward);
                }
                BookingField::Service => {
                    booking.service = cycle(booking.service, services, forward);
                }
                BookingField::Date | BookingField::Time => {}
            }
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.appointments_view().rows().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    fn show_notice(&mut self, notice: Notice) {
        self.notices.show(notice, &self.event_tx);
    }
}
