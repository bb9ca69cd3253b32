//! A completed three-card reading and its export formats.

use serde::{Deserialize, Serialize};

use crate::error::TarotResult;
use crate::prompt::build_prompt;
use crate::slate::{Orientation, Slot};

/// One card of a completed reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingCard {
    /// 1-based pick order.
    pub order: usize,
    /// 0-based grid position the card was picked from.
    pub position: usize,
    /// Stable card id.
    pub id: String,
    /// Chinese card name.
    pub name_local: String,
    /// English card name.
    pub name_canonical: String,
    /// Upright or reversed.
    pub orientation: Orientation,
}

/// The result of picking three cards: per-card details and the prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Picked cards in pick order.
    pub cards: [ReadingCard; 3],
    /// The formatted prompt text.
    pub prompt: String,
}

impl Reading {
    /// Build a reading from `(position, slot)` pairs in pick order.
    pub fn new(picked: [(usize, &Slot); 3]) -> Self {
        let prompt = build_prompt(picked.map(|(_, slot)| slot));
        let mut order = 0;
        let cards = picked.map(|(position, slot)| {
            order += 1;
            ReadingCard {
                order,
                position,
                id: slot.card.id.clone(),
                name_local: slot.card.name_local.clone(),
                name_canonical: slot.card.name_canonical.clone(),
                orientation: slot.orientation(),
            }
        });
        Self { cards, prompt }
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> TarotResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl std::fmt::Display for Reading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "第 {} 张  {}（{}）  {}",
                card.order, card.name_local, card.name_canonical, card.orientation
            )?;
        }
        Ok(())
    }
}
