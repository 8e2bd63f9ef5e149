//! User notification port
//!
//! Fire-and-forget surface for blocking user-facing alerts. The rendering
//! collaborator decides how an alert is presented.

use async_trait::async_trait;

#[async_trait]
pub trait NotifierPort: Send + Sync {
    async fn alert(&self, title: &str, body: &str);
}
