use super::NewAppointment;

/// Work handed from the UI loop to the gateway worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    LoadProfessionals(),
    LoadServices(),
    LoadAppointments(i64),
    ShowAppointment(i64),
    CreateAppointment(NewAppointment),
    /// Appointment id, then the id of the user cancelling it.
    CancelAppointment(i64, i64),
}
