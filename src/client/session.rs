//! Persisted login session
//!
//! Role, username and the auth cookie are kept together in one JSON file.

use crate::core::models::Role;
use crate::utils::error::Result;
use crate::utils::logging::Sanitization;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Who is logged in, and the cookie proving it
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub auth_token: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.role.is_some() || self.auth_token.is_some()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("username", &self.username)
            .field("role", &self.role)
            .field(
                "auth_token",
                &self.auth_token.as_deref().map(Sanitization::mask_value),
            )
            .finish()
    }
}

/// In-memory session mirrored to an optional file
#[derive(Debug, Default)]
pub struct SessionStore {
    path: Option<PathBuf>,
    state: RwLock<Session>,
}

impl SessionStore {
    /// Store with no backing file
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Open the store at `path`; a missing or unreadable file means logged out
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let session = match tokio::fs::read_to_string(&path).await {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
                warn!("Ignoring unreadable session file {}: {}", path.display(), e);
                Session::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Session::default(),
            Err(e) => return Err(e.into()),
        };
        debug!("Session loaded from {}: {:?}", path.display(), session);
        Ok(Self {
            path: Some(path),
            state: RwLock::new(session),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn current(&self) -> Session {
        self.state.read().clone()
    }

    pub fn username(&self) -> Option<String> {
        self.state.read().username.clone()
    }

    pub fn role(&self) -> Option<Role> {
        self.state.read().role.clone()
    }

    pub fn auth_token(&self) -> Option<String> {
        self.state.read().auth_token.clone()
    }

    /// Replace the session and persist it
    pub async fn save(&self, session: Session) -> Result<()> {
        if let Some(path) = &self.path {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(path, serde_json::to_vec_pretty(&session)?).await?;
        }
        *self.state.write() = session;
        Ok(())
    }

    /// Forget the session; clearing an already empty store is a no-op
    pub async fn clear(&self) -> Result<()> {
        *self.state.write() = Session::default();
        if let Some(path) = &self.path {
            match tokio::fs::remove_file(path).await {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}
