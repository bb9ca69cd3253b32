pub mod deck;
pub mod draw;
pub mod play;

use tarot_core::{DrawSession, SessionConfig};

/// Build an idle session from resolved settings.
fn open_session(config: SessionConfig) -> Result<DrawSession, String> {
    DrawSession::new(config).map_err(|e| format!("failed to start session: {e}"))
}
