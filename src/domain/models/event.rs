use tui_textarea::Input;

use super::Appointment;
use super::Notice;
use super::NoticeTarget;
use super::Professional;
use super::Service;

pub enum Event {
    AppointmentCancelled(Appointment),
    AppointmentCreated(Appointment),
    AppointmentDetails(Appointment),
    AppointmentsFailed(),
    AppointmentsLoaded(Vec<Appointment>),
    Alert(String),
    KeyboardInput(Input),
    Notice(Notice),
    NoticeExpired(NoticeTarget),
    ProfessionalsLoaded(Vec<Professional>),
    ServicesLoaded(Vec<Service>),
    UIResize(),
    UITick(),
}
