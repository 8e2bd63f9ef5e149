//! Session event port

use async_trait::async_trait;

use crate::session::SessionState;

/// Emits session state snapshots to the rendering collaborator.
#[async_trait]
pub trait SessionEventPort: Send + Sync {
    async fn session_changed(&self, state: SessionState);
}
