#[cfg(test)]
#[path = "session_store_test.rs"]
mod tests;

use std::io::ErrorKind;
use std::path;

use anyhow::Result;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Session;
use crate::domain::models::StoredSession;

/// File backed session persistence. The in-memory copy only changes once the
/// file system agrees with it.
pub struct SessionStore {
    file_path: path::PathBuf,
    session: Session,
}

impl Default for SessionStore {
    fn default() -> SessionStore {
        return SessionStore::new(path::PathBuf::from(Config::get(ConfigKey::SessionFile)));
    }
}

impl SessionStore {
    pub fn new(file_path: path::PathBuf) -> SessionStore {
        return SessionStore {
            file_path,
            session: Session::anonymous(),
        };
    }

    pub fn file_path(&self) -> &path::Path {
        return &self.file_path;
    }

    pub fn session(&self) -> &Session {
        return &self.session;
    }

    fn tmp_path(&self) -> path::PathBuf {
        let mut file_name = self
            .file_path
            .file_name()
            .map(|name| return name.to_os_string())
            .unwrap_or_default();
        file_name.push(".tmp");

        return self.file_path.with_file_name(file_name);
    }

    /// Reads the persisted identity. Anything missing or unreadable restores an
    /// anonymous session.
    pub async fn restore(&mut self) -> Session {
        self.session = Session::anonymous();

        let payload = match fs::read_to_string(&self.file_path).await {
            Ok(payload) => payload,
            Err(err) => {
                if err.kind() != ErrorKind::NotFound {
                    tracing::warn!(error = ?err, path = ?self.file_path, "Unable to read session file");
                }
                return self.session.clone();
            }
        };

        match serde_yaml::from_str::<StoredSession>(&payload) {
            Ok(stored) => {
                self.session = stored.into_session();
            }
            Err(err) => {
                tracing::warn!(error = ?err, path = ?self.file_path, "Ignoring malformed session file");
            }
        }

        tracing::debug!(
            authenticated = self.session.is_authenticated(),
            "Restored session"
        );

        return self.session.clone();
    }

    pub async fn save(&mut self, user_id: i64, token: &str) -> Result<()> {
        let session = Session::new(user_id, token);
        let payload = serde_yaml::to_string(&StoredSession::from(&session))?;

        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).await?;
            }
        }

        let tmp_path = self.tmp_path();
        let mut file = fs::File::create(&tmp_path).await?;
        file.write_all(payload.as_bytes()).await?;
        file.sync_all().await?;
        drop(file);
        fs::rename(&tmp_path, &self.file_path).await?;

        self.session = session;
        tracing::debug!(user_id, "Saved session");

        return Ok(());
    }

    pub async fn clear(&mut self) -> Result<()> {
        for file_path in [self.file_path.clone(), self.tmp_path()] {
            if let Err(err) = fs::remove_file(&file_path).await {
                if err.kind() != ErrorKind::NotFound {
                    return Err(err.into());
                }
            }
        }

        self.session = Session::anonymous();
        tracing::debug!("Cleared session");

        return Ok(());
    }
}
