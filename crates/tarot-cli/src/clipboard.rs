//! Clipboard access for copying the prompt.

use std::time::{Duration, Instant};

use arboard::Clipboard;
#[cfg(target_os = "linux")]
use arboard::SetExtLinux;

/// Status shown after a successful copy.
pub const COPY_OK: &str = "已复制到剪贴板。";

/// Status shown when the clipboard is unavailable.
pub const COPY_FAILED: &str = "复制失败：请手动全选并复制。";

/// How long a one-shot command keeps serving the clipboard before exiting.
pub const ONE_SHOT_HOLD: Duration = Duration::from_secs(10);

/// Something text can be copied into.
pub trait TextSink {
    /// Replace the sink's contents with `text`.
    fn set_text(&mut self, text: &str) -> Result<(), String>;
}

/// Handler for the system clipboard, opened on first use.
///
/// On Linux the copying process owns the clipboard contents, and they vanish
/// when the handler is dropped unless a clipboard manager has taken them.
/// The default handler does not wait and suits a long-running session;
/// commands that exit right after copying use [`ClipboardHandler::holding`].
#[derive(Default)]
pub struct ClipboardHandler {
    clipboard: Option<Clipboard>,
    hold: Option<Duration>,
}

impl ClipboardHandler {
    /// Handler whose copies block until another program takes the
    /// contents over, or until `hold` has passed.
    pub fn holding(hold: Duration) -> Self {
        Self {
            clipboard: None,
            hold: Some(hold),
        }
    }

    fn deadline(&self, now: Instant) -> Option<Instant> {
        self.hold.map(|hold| now + hold)
    }
}

impl TextSink for ClipboardHandler {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        let clipboard = match self.clipboard.take() {
            Some(c) => c,
            None => Clipboard::new().map_err(|e| format!("clipboard unavailable: {e}"))?,
        };
        let deadline = self.deadline(Instant::now());
        write_text(self.clipboard.insert(clipboard), text, deadline)
            .map_err(|e| format!("failed to set clipboard text: {e}"))
    }
}

#[cfg(target_os = "linux")]
fn write_text(
    clipboard: &mut Clipboard,
    text: &str,
    deadline: Option<Instant>,
) -> Result<(), arboard::Error> {
    match deadline {
        Some(deadline) => clipboard.set().wait_until(deadline).text(text),
        None => clipboard.set_text(text),
    }
}

#[cfg(not(target_os = "linux"))]
fn write_text(
    clipboard: &mut Clipboard,
    text: &str,
    _deadline: Option<Instant>,
) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}

/// Copy `text` and return the status line for the user.
///
/// Failures are logged and reported, never propagated.
pub fn copy_with_status(sink: &mut dyn TextSink, text: &str) -> &'static str {
    match sink.set_text(text) {
        Ok(()) => COPY_OK,
        Err(e) => {
            tracing::warn!(error = %e, "clipboard copy failed");
            COPY_FAILED
        }
    }
}
