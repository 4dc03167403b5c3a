//! Notifier implementations.
//!
//! [`ChannelNotifier`] forwards notices to whoever renders them (terminal,
//! test harness) over a tokio channel. [`TracingNotifier`] only logs them.

use stickerdesk_core::notification::{Notice, NoticeLevel, Notifier};
use tokio::sync::mpsc;

/// Sends every notice to an unbounded channel.
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<Notice>,
}

impl ChannelNotifier {
    pub fn new(sender: mpsc::UnboundedSender<Notice>) -> Self {
        Self { sender }
    }

    /// Creates a notifier together with the receiving end.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notice>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(sender), receiver)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notice: Notice) {
        // Non-blocking send - if the receiver is dropped, the notice is lost
        if self.sender.send(notice).is_err() {
            tracing::debug!("Notice receiver dropped");
        }
    }
}

/// Writes notices to the log instead of showing them.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success | NoticeLevel::Info => {
                tracing::info!(level = %notice.level, "{}", notice.message)
            }
            NoticeLevel::Warning => tracing::warn!("{}", notice.message),
            NoticeLevel::Error => tracing::error!("{}", notice.message),
        }
    }
}
