//! Slots and the frozen per-session slate.
//!
//! A slate fixes the mapping from grid position to card and orientation at
//! shuffle time. Nothing is re-rolled afterwards; readers borrow it.

use serde::{Deserialize, Serialize};

use crate::deck::{Card, catalog};
use crate::random::{RandomSource, shuffle};

/// Whether a card is drawn upright or reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// 正位.
    Upright,
    /// 逆位.
    Reversed,
}

impl Orientation {
    /// Chinese label used in prompts and results.
    pub fn label(self) -> &'static str {
        match self {
            Self::Upright => "正位",
            Self::Reversed => "逆位",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One card at one grid position, with its session orientation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    /// The card at this position.
    pub card: Card,
    /// Whether the card is reversed.
    pub is_reversed: bool,
    /// Display-only tilt in degrees.
    pub rotation_degrees: f64,
}

impl Slot {
    /// The slot's orientation.
    pub fn orientation(&self) -> Orientation {
        if self.is_reversed {
            Orientation::Reversed
        } else {
            Orientation::Upright
        }
    }
}

/// The full shuffled and oriented deck for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct Slate {
    slots: Box<[Slot]>,
}

impl Slate {
    /// Shuffle the catalog and assign each card an orientation and tilt.
    ///
    /// Orientation is a fair coin; the tilt is uniform within
    /// `[-max_rotation, +max_rotation]`.
    pub fn deal<S: RandomSource + ?Sized>(source: &mut S, max_rotation: f64) -> Self {
        let slots = shuffle(catalog(), source)
            .into_iter()
            .map(|card| Slot {
                card,
                is_reversed: source.coin(),
                rotation_degrees: source.next_f64() * 2.0 * max_rotation - max_rotation,
            })
            .collect();
        Self { slots }
    }

    /// All slots in grid order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// The slot at `position`, if in range.
    pub fn get(&self, position: usize) -> Option<&Slot> {
        self.slots.get(position)
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the slate has no positions.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
