//! Console notifier
//!
//! Stands in for the platform alert dialog: alerts go to stderr so they
//! stay visible while stdout renders the screens.

use async_trait::async_trait;

use lb_core::ports::NotifierPort;

#[derive(Debug, Default)]
pub struct ConsoleNotifier;

#[async_trait]
impl NotifierPort for ConsoleNotifier {
    async fn alert(&self, title: &str, body: &str) {
        eprintln!("[{title}] {body}");
    }
}
