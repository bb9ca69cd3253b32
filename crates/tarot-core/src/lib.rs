//! Three-card tarot draw engine.
//!
//! Provides the 78-card Rider–Waite catalog, an injectable uniform random
//! source with a Fisher–Yates shuffle, the draw session state machine that
//! freezes a shuffled and oriented slate per session, and the prompt text
//! rendered from three picked cards. Keep this crate free of I/O.

pub mod config;
pub mod deck;
pub mod error;
pub mod prompt;
pub mod random;
pub mod reading;
pub mod session;
pub mod slate;

pub use config::SessionConfig;
pub use deck::{Card, CardKey, DECK_SIZE, Rank, Suit, catalog};
pub use error::{TarotError, TarotResult};
pub use prompt::build_prompt;
pub use random::{RandomSource, ScriptedSource, shuffle};
pub use reading::{Reading, ReadingCard};
pub use session::{DrawSession, IgnoreReason, PICK_LIMIT, Phase, PickOutcome, PositionState};
pub use slate::{Orientation, Slate, Slot};
