//! Terminal rendering of notices.

use colored::Colorize;
use stickerdesk_core::notification::{Notice, NoticeLevel, Notifier};

/// Prints notices the way the dashboard showed toasts: one colored line each.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => println!("{} {}", "✓".green(), notice.message.green()),
            NoticeLevel::Info => println!("{} {}", "ℹ".blue(), notice.message),
            NoticeLevel::Warning => println!("{} {}", "!".yellow(), notice.message.yellow()),
            NoticeLevel::Error => eprintln!("{} {}", "✗".red(), notice.message.red()),
        }
    }
}
