#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

use std::time::Duration;

use super::SessionStore;
use crate::domain::models::Credentials;
use crate::domain::models::GatewayBox;
use crate::domain::models::Notice;
use crate::domain::models::NoticeTarget;
use crate::domain::models::Page;
use crate::domain::models::Registration;

/// Delay between a successful login and opening the dashboard.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1000);

pub const MISSING_FIELDS: &str = "Please fill in all fields.";
pub const REGISTER_SUCCESS: &str = "Registration successful! Log in now.";
pub const REGISTER_FAILED: &str = "Failed to register.";
pub const LOGIN_SUCCESS: &str = "Login successful! Redirecting...";
pub const LOGIN_FAILED: &str = "Invalid credentials.";
pub const SESSION_SAVE_FAILED: &str = "Could not save your session.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub page: Page,
    pub after: Duration,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthOutcome {
    pub notice: Notice,
    pub redirect: Option<Redirect>,
}

impl AuthOutcome {
    fn notice(notice: Notice) -> AuthOutcome {
        return AuthOutcome {
            notice,
            redirect: None,
        };
    }
}

fn any_blank(values: &[&str]) -> bool {
    return values.iter().any(|value| return value.trim().is_empty());
}

/// Controller for the login page.
pub struct AuthService {}

impl AuthService {
    pub async fn register(gateway: &GatewayBox, registration: &Registration) -> AuthOutcome {
        if any_blank(&[
            &registration.name,
            &registration.email,
            &registration.password,
        ]) {
            return AuthOutcome::notice(Notice::error(NoticeTarget::Register, MISSING_FIELDS));
        }

        match gateway.register(registration).await {
            Ok(()) => {
                return AuthOutcome::notice(Notice::success(
                    NoticeTarget::Register,
                    REGISTER_SUCCESS,
                ));
            }
            Err(err) => {
                tracing::error!(error = %err, "Registration failed");
                return AuthOutcome::notice(Notice::error(
                    NoticeTarget::Register,
                    &err.message_or(REGISTER_FAILED),
                ));
            }
        }
    }

    /// Persists the session on success and schedules the dashboard redirect.
    /// A session that cannot be written is reported like a failed login.
    pub async fn login(
        gateway: &GatewayBox,
        store: &mut SessionStore,
        credentials: &Credentials,
    ) -> AuthOutcome {
        if any_blank(&[&credentials.email, &credentials.password]) {
            return AuthOutcome::notice(Notice::error(NoticeTarget::Login, MISSING_FIELDS));
        }

        let grant = match gateway.login(credentials).await {
            Ok(grant) => grant,
            Err(err) => {
                tracing::error!(error = %err, "Login failed");
                return AuthOutcome::notice(Notice::error(
                    NoticeTarget::Login,
                    &err.message_or(LOGIN_FAILED),
                ));
            }
        };

        if let Err(err) = store.save(grant.user_id, &grant.token).await {
            tracing::error!(
                error = ?err,
                path = %store.file_path().display(),
                "Failed to save session"
            );
            return AuthOutcome::notice(Notice::error(NoticeTarget::Login, SESSION_SAVE_FAILED));
        }

        return AuthOutcome {
            notice: Notice::success(NoticeTarget::Login, LOGIN_SUCCESS),
            redirect: Some(Redirect {
                page: Page::Dashboard,
                after: REDIRECT_DELAY,
            }),
        };
    }
}
