//! The three-card draw session.
//!
//! `DrawSession` is a two-state machine. It is `Idle` until `start()` deals a
//! fresh slate, then `Active` while the user picks up to three positions.
//! Picks only accumulate; `start()` or `reset()` are the only ways to clear
//! them.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, trace};

use crate::config::SessionConfig;
use crate::error::{TarotError, TarotResult};
use crate::random::RandomSource;
use crate::reading::Reading;
use crate::slate::{Slate, Slot};

/// Number of cards in a reading.
pub const PICK_LIMIT: usize = 3;

/// Session lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No slate; picks are empty.
    Idle,
    /// A slate has been dealt.
    Active,
}

/// Why a pick was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The deck has not been shuffled.
    NotStarted,
    /// The position is not on the slate.
    OutOfRange,
    /// The position was picked already.
    AlreadyPicked,
    /// Three cards are already picked.
    HandFull,
}

/// What happened to a pick request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// The position was appended; `order` is its 1-based pick order.
    Picked {
        /// 1-based pick order.
        order: usize,
    },
    /// Nothing changed.
    Ignored(IgnoreReason),
}

/// How a grid position should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionState {
    /// Selectable.
    Available,
    /// Already picked, with its 1-based pick order.
    Picked(usize),
    /// Not picked and no longer selectable.
    Disabled,
}

/// A single user's draw: the current slate and the picks made from it.
pub struct DrawSession<R = StdRng> {
    config: SessionConfig,
    slate: Option<Slate>,
    picks: Vec<usize>,
    source: R,
}

impl DrawSession<StdRng> {
    /// Create an idle session seeded from `config.seed`, or from the OS.
    pub fn new(config: SessionConfig) -> TarotResult<Self> {
        let source = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_source(source, config)
    }
}

impl<R: RandomSource> DrawSession<R> {
    /// Create an idle session drawing randomness from `source`.
    pub fn with_source(source: R, config: SessionConfig) -> TarotResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            slate: None,
            picks: Vec::with_capacity(PICK_LIMIT),
            source,
        })
    }

    /// Shuffle a new slate and clear picks. Valid from any state.
    pub fn start(&mut self) -> &Slate {
        self.picks.clear();
        let slate = Slate::deal(&mut self.source, self.config.max_rotation);
        debug!(positions = slate.len(), "dealt new slate");
        self.slate.insert(slate)
    }

    /// Discard the slate and clear picks. Valid from any state.
    pub fn reset(&mut self) {
        if self.slate.is_some() {
            debug!(picked = self.picks.len(), "session reset");
        }
        self.slate = None;
        self.picks.clear();
    }

    /// Pick the card at `position` (0-based).
    ///
    /// Invalid picks leave the session unchanged and report why.
    pub fn pick(&mut self, position: usize) -> PickOutcome {
        let outcome = self.check_pick(position);
        match outcome {
            None => {
                self.picks.push(position);
                let order = self.picks.len();
                debug!(position, order, "picked");
                PickOutcome::Picked { order }
            }
            Some(reason) => {
                trace!(position, ?reason, "pick ignored");
                PickOutcome::Ignored(reason)
            }
        }
    }

    fn check_pick(&self, position: usize) -> Option<IgnoreReason> {
        let Some(slate) = &self.slate else {
            return Some(IgnoreReason::NotStarted);
        };
        if position >= slate.len() {
            Some(IgnoreReason::OutOfRange)
        } else if self.picks.contains(&position) {
            Some(IgnoreReason::AlreadyPicked)
        } else if self.picks.len() >= PICK_LIMIT {
            Some(IgnoreReason::HandFull)
        } else {
            None
        }
    }

    /// Current lifecycle state.
    pub fn phase(&self) -> Phase {
        if self.slate.is_some() {
            Phase::Active
        } else {
            Phase::Idle
        }
    }

    /// The session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The current slate, if dealt.
    pub fn slate(&self) -> Option<&Slate> {
        self.slate.as_ref()
    }

    /// Picked positions in pick order.
    pub fn picks(&self) -> &[usize] {
        &self.picks
    }

    /// Picked slots in pick order.
    pub fn picked_slots(&self) -> Vec<&Slot> {
        let Some(slate) = &self.slate else {
            return Vec::new();
        };
        self.picks.iter().filter_map(|&p| slate.get(p)).collect()
    }

    /// Whether three cards have been picked.
    pub fn is_complete(&self) -> bool {
        self.slate.is_some() && self.picks.len() == PICK_LIMIT
    }

    /// Display state of `position`, or `None` when there is no such position.
    pub fn position_state(&self, position: usize) -> Option<PositionState> {
        let slate = self.slate.as_ref()?;
        if position >= slate.len() {
            return None;
        }
        let state = match self.picks.iter().position(|&p| p == position) {
            Some(idx) => PositionState::Picked(idx + 1),
            None if self.picks.len() >= PICK_LIMIT => PositionState::Disabled,
            None => PositionState::Available,
        };
        Some(state)
    }

    /// Positions that can still be picked.
    pub fn available_positions(&self) -> Vec<usize> {
        match &self.slate {
            Some(slate) if self.picks.len() < PICK_LIMIT => (0..slate.len())
                .filter(|p| !self.picks.contains(p))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// The completed reading. Requires exactly three picks.
    pub fn reading(&self) -> TarotResult<Reading> {
        let slate = self.slate.as_ref().ok_or(TarotError::NotStarted)?;
        let &[a, b, c] = self.picks.as_slice() else {
            return Err(TarotError::IncompleteDraw {
                picked: self.picks.len(),
            });
        };
        let slot = |p: usize| slate.get(p).ok_or(TarotError::NotStarted);
        Ok(Reading::new([(a, slot(a)?), (b, slot(b)?), (c, slot(c)?)]))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::deck::{DECK_SIZE, catalog};
    use crate::random::ScriptedSource;

    fn session() -> DrawSession {
        DrawSession::new(SessionConfig::default().with_seed(42)).unwrap()
    }

    #[test]
    fn starts_idle() {
        let s = session();
        assert_eq!(s.phase(), Phase::Idle);
        assert!(s.slate().is_none());
        assert!(s.picks().is_empty());
        assert!(s.available_positions().is_empty());
    }

    #[test]
    fn start_deals_full_slate() {
        let mut s = session();
        s.start();
        assert_eq!(s.phase(), Phase::Active);
        let slate = s.slate().unwrap();
        assert_eq!(slate.len(), DECK_SIZE);
        assert!(s.picks().is_empty());

        let ids: HashSet<&str> = slate.slots().iter().map(|x| x.card.id.as_str()).collect();
        let expected: HashSet<&str> = catalog().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, expected);
        assert_eq!(s.available_positions().len(), DECK_SIZE);
    }

    #[test]
    fn picks_keep_call_order() {
        let mut s = session();
        s.start();
        assert_eq!(s.pick(70), PickOutcome::Picked { order: 1 });
        assert_eq!(s.pick(3), PickOutcome::Picked { order: 2 });
        assert_eq!(s.pick(41), PickOutcome::Picked { order: 3 });
        assert_eq!(s.picks(), &[70, 3, 41]);
        assert!(s.is_complete());
    }

    #[test]
    fn pick_before_start_is_ignored() {
        let mut s = session();
        assert_eq!(
            s.pick(0),
            PickOutcome::Ignored(IgnoreReason::NotStarted)
        );
        assert!(s.picks().is_empty());
        assert_eq!(s.phase(), Phase::Idle);
    }

    #[test]
    fn duplicate_pick_is_ignored() {
        let mut s = session();
        s.start();
        s.pick(5);
        assert_eq!(
            s.pick(5),
            PickOutcome::Ignored(IgnoreReason::AlreadyPicked)
        );
        assert_eq!(s.picks(), &[5]);
    }

    #[test]
    fn fourth_pick_is_ignored() {
        let mut s = session();
        s.start();
        for p in [1, 2, 3] {
            s.pick(p);
        }
        assert_eq!(s.pick(4), PickOutcome::Ignored(IgnoreReason::HandFull));
        assert_eq!(s.picks(), &[1, 2, 3]);
    }

    #[test]
    fn out_of_range_pick_is_ignored() {
        let mut s = session();
        s.start();
        assert_eq!(
            s.pick(DECK_SIZE),
            PickOutcome::Ignored(IgnoreReason::OutOfRange)
        );
        assert!(s.picks().is_empty());
    }

    #[test]
    fn slate_not_rerolled_by_picks() {
        let mut s = session();
        let before = s.start().clone();
        s.pick(10);
        s.pick(20);
        assert_eq!(s.slate(), Some(&before));
    }

    #[test]
    fn start_replaces_slate_and_clears_picks() {
        let mut s = session();
        let first = s.start().clone();
        s.pick(0);
        s.pick(1);
        let second = s.start().clone();
        assert!(s.picks().is_empty());
        assert_ne!(first, second);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut s = session();
        s.start();
        s.pick(9);
        s.reset();
        assert_eq!(s.phase(), Phase::Idle);
        assert!(s.slate().is_none());
        assert!(s.picks().is_empty());
        s.reset();
        assert_eq!(s.phase(), Phase::Idle);
        assert!(s.picks().is_empty());
    }

    #[test]
    fn position_states() {
        let mut s = session();
        assert_eq!(s.position_state(0), None);
        s.start();
        assert_eq!(s.position_state(0), Some(PositionState::Available));
        s.pick(7);
        s.pick(0);
        assert_eq!(s.position_state(0), Some(PositionState::Picked(2)));
        assert_eq!(s.position_state(7), Some(PositionState::Picked(1)));
        s.pick(30);
        assert_eq!(s.position_state(1), Some(PositionState::Disabled));
        assert_eq!(s.position_state(DECK_SIZE), None);
        assert!(s.available_positions().is_empty());
    }

    #[test]
    fn reading_requires_three_picks() {
        let mut s = session();
        assert!(matches!(s.reading(), Err(TarotError::NotStarted)));
        s.start();
        s.pick(0);
        s.pick(1);
        assert!(matches!(
            s.reading(),
            Err(TarotError::IncompleteDraw { picked: 2 })
        ));
        s.pick(2);
        let reading = s.reading().unwrap();
        let slate = s.slate().unwrap();
        assert_eq!(reading.cards[0].id, slate.slots()[0].card.id);
        assert_eq!(reading.cards[2].position, 2);
    }

    #[test]
    fn picked_slots_follow_pick_order() {
        let mut s = session();
        s.start();
        s.pick(50);
        s.pick(10);
        let slate = s.slate().unwrap().clone();
        let picked = s.picked_slots();
        assert_eq!(picked, vec![&slate.slots()[50], &slate.slots()[10]]);
    }

    #[test]
    fn scripted_source_gives_known_slate() {
        // All zeros: rotate-left shuffle, every card reversed, full negative tilt.
        let mut s =
            DrawSession::with_source(ScriptedSource::constant(0.0), SessionConfig::default())
                .unwrap();
        s.start();
        let slate = s.slate().unwrap();
        assert_eq!(slate.slots()[0].card.id, "MAJOR_1");
        assert_eq!(slate.slots()[77].card.id, "MAJOR_0");
        assert!(slate.slots().iter().all(|x| x.is_reversed));
        assert!(slate.slots().iter().all(|x| x.rotation_degrees == -3.0));
    }

    #[test]
    fn same_seed_same_slate() {
        let mut a = session();
        let mut b = session();
        assert_eq!(a.start(), b.start());
    }

    #[test]
    fn invalid_config_rejected() {
        let cfg = SessionConfig::default().with_max_rotation(-5.0);
        assert!(matches!(
            DrawSession::new(cfg),
            Err(TarotError::InvalidConfig(_))
        ));
    }
}
