#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::GatewayBox;
use crate::domain::models::NewAppointment;
use crate::domain::models::Notice;
use crate::domain::models::NoticeTarget;

pub const BOOKING_FAILED: &str = "Failed to book appointment.";
pub const CANCEL_FAILED: &str = "Failed to cancel appointment.";
pub const CANCEL_CONNECTION_ERROR: &str = "Connection error while cancelling appointment.";
pub const DETAILS_FAILED: &str = "Failed to load appointment.";

async fn load_professionals(gateway: &GatewayBox, tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
    match gateway.list_professionals().await {
        Ok(professionals) => {
            tx.send(Event::ProfessionalsLoaded(professionals))?;
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to load professionals");
        }
    }

    return Ok(());
}

async fn load_services(gateway: &GatewayBox, tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
    match gateway.list_services().await {
        Ok(services) => {
            tx.send(Event::ServicesLoaded(services))?;
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to load services");
        }
    }

    return Ok(());
}

async fn load_appointments(
    gateway: &GatewayBox,
    tx: &mpsc::UnboundedSender<Event>,
    user_id: i64,
) -> Result<()> {
    match gateway.list_appointments(user_id).await {
        Ok(appointments) => {
            tx.send(Event::AppointmentsLoaded(appointments))?;
        }
        Err(err) => {
            tracing::error!(error = %err, user_id, "Failed to load appointments");
            tx.send(Event::AppointmentsFailed())?;
        }
    }

    return Ok(());
}

async fn show_appointment(
    gateway: &GatewayBox,
    tx: &mpsc::UnboundedSender<Event>,
    appointment_id: i64,
) -> Result<()> {
    match gateway.get_appointment(appointment_id).await {
        Ok(appointment) => {
            tx.send(Event::AppointmentDetails(appointment))?;
        }
        Err(err) => {
            tracing::error!(error = %err, appointment_id, "Failed to load appointment");
            tx.send(Event::Alert(err.message_or(DETAILS_FAILED)))?;
        }
    }

    return Ok(());
}

async fn create_appointment(
    gateway: &GatewayBox,
    tx: &mpsc::UnboundedSender<Event>,
    appointment: NewAppointment,
) -> Result<()> {
    match gateway.create_appointment(&appointment).await {
        Ok(created) => {
            tx.send(Event::AppointmentCreated(created))?;
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to book appointment");
            tx.send(Event::Notice(Notice::error(
                NoticeTarget::Schedule,
                &err.message_or(BOOKING_FAILED),
            )))?;
        }
    }

    return Ok(());
}

async fn cancel_appointment(
    gateway: &GatewayBox,
    tx: &mpsc::UnboundedSender<Event>,
    appointment_id: i64,
    user_id: i64,
) -> Result<()> {
    match gateway.cancel_appointment(appointment_id, user_id).await {
        Ok(cancelled) => {
            tx.send(Event::AppointmentCancelled(cancelled))?;
        }
        Err(err) => {
            tracing::error!(error = %err, appointment_id, "Failed to cancel appointment");
            let mut text = err.message_or(CANCEL_FAILED);
            if err.is_transport() {
                text = CANCEL_CONNECTION_ERROR.to_string();
            }
            tx.send(Event::Alert(text))?;
        }
    }

    return Ok(());
}

pub struct ActionsService {}

impl ActionsService {
    /// Runs one action to completion and reports the outcome as events.
    pub async fn handle(
        gateway: &GatewayBox,
        action: Action,
        tx: &mpsc::UnboundedSender<Event>,
    ) -> Result<()> {
        tracing::debug!(?action, "Handling action");

        match action {
            Action::LoadProfessionals() => {
                load_professionals(gateway, tx).await?;
            }
            Action::LoadServices() => {
                load_services(gateway, tx).await?;
            }
            Action::LoadAppointments(user_id) => {
                load_appointments(gateway, tx, user_id).await?;
            }
            Action::ShowAppointment(appointment_id) => {
                show_appointment(gateway, tx, appointment_id).await?;
            }
            Action::CreateAppointment(appointment) => {
                create_appointment(gateway, tx, appointment).await?;
            }
            Action::CancelAppointment(appointment_id, user_id) => {
                cancel_appointment(gateway, tx, appointment_id, user_id).await?;
            }
        }

        return Ok(());
    }

    /// Every action gets its own task. Nothing is debounced, serialized or
    /// aborted once sent.
    pub async fn start(
        gateway: GatewayBox,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let gateway = Arc::new(gateway);

        while let Some(action) = rx.recv().await {
            let worker_gateway = gateway.clone();
            let worker_tx = tx.clone();

            tokio::spawn(async move {
                if let Err(err) = ActionsService::handle(&worker_gateway, action, &worker_tx).await
                {
                    tracing::debug!(error = ?err, "Dropped action result, UI is gone");
                }
            });
        }

        return Ok(());
    }
}
