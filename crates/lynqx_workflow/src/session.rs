//! Per-session isolation of review workflows.

use crate::{Action, ReviewWorkflow};
use lynqx_core::Notice;
use lynqx_error::{ValidationError, ValidationErrorKind};
use lynqx_interface::LynqxDriver;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, instrument};
use uuid::Uuid;

/// Opaque session identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared handle to one session's workflow.
pub type SessionHandle = Arc<Mutex<ReviewWorkflow>>;

/// Registry of independent review sessions.
///
/// Each workflow sits behind its own mutex, so actions on one session run
/// one at a time while other sessions proceed in parallel.
pub struct SessionRegistry {
    driver: Arc<dyn LynqxDriver>,
    sessions: RwLock<HashMap<SessionId, SessionHandle>>,
}

impl SessionRegistry {
    /// Empty registry whose sessions share `driver`.
    pub fn new(driver: Arc<dyn LynqxDriver>) -> Self {
        Self {
            driver,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Open a new session on step 1.
    #[instrument(skip(self))]
    pub async fn create(&self) -> SessionId {
        let id = SessionId::new();
        let workflow = ReviewWorkflow::new(Arc::clone(&self.driver));
        self.sessions
            .write()
            .await
            .insert(id, Arc::new(Mutex::new(workflow)));
        debug!(session = %id, "Session created");
        id
    }

    /// Look up a session.
    pub async fn get(&self, id: SessionId) -> Option<SessionHandle> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// Run one action against a session.
    ///
    /// # Errors
    ///
    /// `SessionNotFound` for an unknown id.
    #[instrument(skip(self, action), fields(session = %id, action = action.label()))]
    pub async fn dispatch(&self, id: SessionId, action: Action) -> Result<Vec<Notice>, ValidationError> {
        let handle = self.get(id).await.ok_or_else(|| {
            ValidationError::new(ValidationErrorKind::SessionNotFound(id.to_string()))
        })?;
        let mut workflow = handle.lock().await;
        Ok(workflow.handle(action).await)
    }

    /// Close a session. Returns whether it existed.
    pub async fn destroy(&self, id: SessionId) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        debug!(session = %id, removed, "Session destroyed");
        removed
    }

    /// Number of open sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Whether no session is open.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
