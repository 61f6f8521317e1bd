#[cfg(test)]
#[path = "rest_test.rs"]
mod tests;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::sort_by_start;
use crate::domain::models::Appointment;
use crate::domain::models::Credentials;
use crate::domain::models::Gateway;
use crate::domain::models::GatewayError;
use crate::domain::models::LoginGrant;
use crate::domain::models::NewAppointment;
use crate::domain::models::Professional;
use crate::domain::models::Registration;
use crate::domain::models::Service;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct LoginResponse {
    message: Option<String>,
    user_id: Option<i64>,
    token: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CancelRequest {
    user_id: i64,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ErrorResponse {
    detail: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Plain string details are used as is, validation error lists are
    /// flattened to their messages.
    fn text(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(text)) => return Some(text.to_string()),
            Some(serde_json::Value::Array(items)) => {
                let messages = items
                    .iter()
                    .filter_map(|item| return item.get("msg").and_then(|msg| return msg.as_str()))
                    .collect::<Vec<&str>>();
                if messages.is_empty() {
                    return None;
                }
                return Some(messages.join("; "));
            }
            _ => return None,
        }
    }
}

/// Talks to the scheduling REST API.
pub struct RestGateway {
    url: String,
    client: reqwest::Client,
}

impl Default for RestGateway {
    fn default() -> RestGateway {
        return RestGateway::new(&Config::get(ConfigKey::ApiURL));
    }
}

impl RestGateway {
    pub fn new(url: &str) -> RestGateway {
        return RestGateway {
            url: url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        };
    }

    fn endpoint(&self, path: &str) -> String {
        return format!("{url}{path}", url = self.url);
    }

    /// Splits responses by status class. Error bodies are read for a `detail`
    /// but an unreadable body is not a transport failure.
    async fn check(res: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
        let status = res.status();
        if status.is_success() {
            return Ok(res);
        }

        let detail = res
            .json::<ErrorResponse>()
            .await
            .ok()
            .and_then(|body| return body.text());

        tracing::warn!(status = status.as_u16(), ?detail, "Request rejected");
        return Err(GatewayError::Application {
            status: status.as_u16(),
            detail,
        });
    }

    async fn decode<T: DeserializeOwned>(res: reqwest::Response) -> Result<T, GatewayError> {
        let res = RestGateway::check(res).await?;
        return Ok(res.json::<T>().await?);
    }
}

#[async_trait]
impl Gateway for RestGateway {
    #[allow(clippy::implicit_return)]
    async fn register(&self, registration: &Registration) -> Result<(), GatewayError> {
        tracing::debug!(email = registration.email, "Registering");
        let res = self
            .client
            .post(self.endpoint("/users/register"))
            .json(registration)
            .send()
            .await?;

        RestGateway::check(res).await?;
        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn login(&self, credentials: &Credentials) -> Result<LoginGrant, GatewayError> {
        tracing::debug!(email = credentials.email, "Logging in");
        let res = self
            .client
            .post(self.endpoint("/users/login"))
            .json(credentials)
            .send()
            .await?;

        let body = RestGateway::decode::<LoginResponse>(res).await?;
        match (body.user_id, body.token) {
            (Some(user_id), Some(token)) if !token.is_empty() => {
                return Ok(LoginGrant { user_id, token });
            }
            _ => {
                return Err(GatewayError::Transport(
                    "login response is missing the user id or token".to_string(),
                ));
            }
        }
    }

    #[allow(clippy::implicit_return)]
    async fn list_professionals(&self) -> Result<Vec<Professional>, GatewayError> {
        let res = self
            .client
            .get(self.endpoint("/professionals"))
            .send()
            .await?;

        return RestGateway::decode::<Vec<Professional>>(res).await;
    }

    #[allow(clippy::implicit_return)]
    async fn list_services(&self) -> Result<Vec<Service>, GatewayError> {
        let res = self.client.get(self.endpoint("/services")).send().await?;

        return RestGateway::decode::<Vec<Service>>(res).await;
    }

    #[allow(clippy::implicit_return)]
    async fn list_appointments(&self, user_id: i64) -> Result<Vec<Appointment>, GatewayError> {
        let res = self
            .client
            .get(self.endpoint(&format!("/users/{user_id}/appointments")))
            .send()
            .await?;

        let mut appointments = RestGateway::decode::<Vec<Appointment>>(res).await?;
        sort_by_start(&mut appointments);

        return Ok(appointments);
    }

    #[allow(clippy::implicit_return)]
    async fn get_appointment(&self, appointment_id: i64) -> Result<Appointment, GatewayError> {
        let res = self
            .client
            .get(self.endpoint(&format!("/appointments/{appointment_id}")))
            .send()
            .await?;

        return RestGateway::decode::<Appointment>(res).await;
    }

    #[allow(clippy::implicit_return)]
    async fn create_appointment(
        &self,
        appointment: &NewAppointment,
    ) -> Result<Appointment, GatewayError> {
        tracing::debug!(body = ?appointment, "Creating appointment");
        let res = self
            .client
            .post(self.endpoint("/appointments"))
            .json(appointment)
            .send()
            .await?;

        return RestGateway::decode::<Appointment>(res).await;
    }

    #[allow(clippy::implicit_return)]
    async fn cancel_appointment(
        &self,
        appointment_id: i64,
        user_id: i64,
    ) -> Result<Appointment, GatewayError> {
        let res = self
            .client
            .put(self.endpoint(&format!("/appointments/{appointment_id}/cancel")))
            .json(&CancelRequest { user_id })
            .send()
            .await?;

        return RestGateway::decode::<Appointment>(res).await;
    }
}
