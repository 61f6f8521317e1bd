#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

/// Authenticated identity held by the client. Either both values are present,
/// or the session is anonymous.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub user_id: Option<i64>,
    pub token: Option<String>,
}

impl Session {
    pub fn new(user_id: i64, token: &str) -> Session {
        return Session {
            user_id: Some(user_id),
            token: Some(token.to_string()),
        };
    }

    pub fn anonymous() -> Session {
        return Session::default();
    }

    pub fn is_authenticated(&self) -> bool {
        return self.user_id.is_some() && self.token.is_some();
    }

    /// User id of an authenticated session.
    pub fn authenticated_user(&self) -> Option<i64> {
        if !self.is_authenticated() {
            return None;
        }

        return self.user_id;
    }
}

/// On-disk shape of a session. Values are stored as plain strings under fixed
/// keys, so the file stays a flat key/value document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl From<&Session> for StoredSession {
    fn from(session: &Session) -> StoredSession {
        return StoredSession {
            user_id: session.user_id.map(|id| return id.to_string()),
            token: session.token.clone(),
        };
    }
}

impl StoredSession {
    pub fn into_session(self) -> Session {
        let user_id = self
            .user_id
            .and_then(|raw| return raw.trim().parse::<i64>().ok());
        let token = self.token.filter(|token| return !token.is_empty());

        if user_id.is_none() || token.is_none() {
            return Session::anonymous();
        }

        return Session { user_id, token };
    }
}
