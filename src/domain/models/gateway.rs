#[cfg(test)]
#[path = "gateway_test.rs"]
mod tests;

use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Appointment;
use super::NewAppointment;
use super::Professional;
use super::Service;

pub const CONNECTION_ERROR: &str = "Connection error.";

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The request never completed, or a success body could not be decoded.
    #[error("connection error: {0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("backend responded with status {status}")]
    Application { status: u16, detail: Option<String> },
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> GatewayError {
        return GatewayError::Transport(err.to_string());
    }
}

impl GatewayError {
    pub fn is_transport(&self) -> bool {
        return matches!(self, GatewayError::Transport(_));
    }

    /// Text shown to the user. Backend details win over the per-action
    /// fallback, transport failures never leak their cause.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            GatewayError::Transport(_) => return CONNECTION_ERROR.to_string(),
            GatewayError::Application {
                detail: Some(detail),
                ..
            } if !detail.trim().is_empty() => return detail.to_string(),
            GatewayError::Application { .. } => return fallback.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginGrant {
    pub user_id: i64,
    pub token: String,
}

#[async_trait]
pub trait Gateway {
    /// Creates a new user account.
    async fn register(&self, registration: &Registration) -> Result<(), GatewayError>;

    /// Exchanges credentials for a user id and token.
    async fn login(&self, credentials: &Credentials) -> Result<LoginGrant, GatewayError>;

    async fn list_professionals(&self) -> Result<Vec<Professional>, GatewayError>;

    async fn list_services(&self) -> Result<Vec<Service>, GatewayError>;

    /// Lists a user's appointments, sorted ascending by start time.
    async fn list_appointments(&self, user_id: i64) -> Result<Vec<Appointment>, GatewayError>;

    async fn get_appointment(&self, appointment_id: i64) -> Result<Appointment, GatewayError>;

    async fn create_appointment(
        &self,
        appointment: &NewAppointment,
    ) -> Result<Appointment, GatewayError>;

    /// Cancels an appointment on behalf of its owner.
    async fn cancel_appointment(
        &self,
        appointment_id: i64,
        user_id: i64,
    ) -> Result<Appointment, GatewayError>;
}

pub type GatewayBox = Box<dyn Gateway + Send + Sync>;
