use std::sync::Arc;

use tokio::sync::watch;

/// Cancellation signal shared by every task of one aggregation. Clones observe the
/// same flag; once cancelled it stays cancelled.
#[derive(Debug, Clone)]
pub struct CancelContext {
    sender: Arc<watch::Sender<bool>>,
    receiver: watch::Receiver<bool>,
}

impl CancelContext {
    pub fn new() -> Self {
        let (sender, receiver) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
            receiver,
        }
    }

    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.receiver.borrow()
    }

    /// Resolves once [`CancelContext::cancel`] has been called on any clone.
    pub async fn cancelled(&self) {
        let mut receiver = self.receiver.clone();
        // The sender lives as long as `self`, so this only returns on cancellation.
        let _ = receiver.wait_for(|cancelled| *cancelled).await;
    }
}

impl Default for CancelContext {
    fn default() -> Self {
        Self::new()
    }
}
