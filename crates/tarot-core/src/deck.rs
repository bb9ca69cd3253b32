//! The Rider–Waite deck catalog.
//!
//! Builds the 78 canonical card identities exactly once: the 22 major arcana
//! numbered 0-21, followed by the minor arcana grouped by suit (Wands, Cups,
//! Swords, Pentacles) and ranked Ace through King within each suit.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 78;

/// Number of major arcana cards.
pub const MAJOR_COUNT: usize = 22;

const MAJORS: [(&str, &str); MAJOR_COUNT] = [
    ("愚者", "The Fool"),
    ("魔术师", "The Magician"),
    ("女祭司", "The High Priestess"),
    ("女皇", "The Empress"),
    ("皇帝", "The Emperor"),
    ("教皇", "The Hierophant"),
    ("恋人", "The Lovers"),
    ("战车", "The Chariot"),
    ("力量", "Strength"),
    ("隐者", "The Hermit"),
    ("命运之轮", "Wheel of Fortune"),
    ("正义", "Justice"),
    ("倒吊人", "The Hanged Man"),
    ("死神", "Death"),
    ("节制", "Temperance"),
    ("恶魔", "The Devil"),
    ("高塔", "The Tower"),
    ("星星", "The Star"),
    ("月亮", "The Moon"),
    ("太阳", "The Sun"),
    ("审判", "Judgement"),
    ("世界", "The World"),
];

/// A minor arcana suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Wands (权杖).
    Wands,
    /// Cups (圣杯).
    Cups,
    /// Swords (宝剑).
    Swords,
    /// Pentacles (钱币).
    Pentacles,
}

impl Suit {
    /// All suits in catalog order.
    pub fn all() -> &'static [Self] {
        &[Self::Wands, Self::Cups, Self::Swords, Self::Pentacles]
    }

    /// Upper-case key used in card ids.
    pub fn key(self) -> &'static str {
        match self {
            Self::Wands => "WANDS",
            Self::Cups => "CUPS",
            Self::Swords => "SWORDS",
            Self::Pentacles => "PENTACLES",
        }
    }

    /// Chinese suit name.
    pub fn name_local(self) -> &'static str {
        match self {
            Self::Wands => "权杖",
            Self::Cups => "圣杯",
            Self::Swords => "宝剑",
            Self::Pentacles => "钱币",
        }
    }

    /// English suit name.
    pub fn name_canonical(self) -> &'static str {
        match self {
            Self::Wands => "Wands",
            Self::Cups => "Cups",
            Self::Swords => "Swords",
            Self::Pentacles => "Pentacles",
        }
    }

    /// Parse a suit from its English name, id key, or Chinese name.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::all().iter().copied().find(|suit| {
            s.eq_ignore_ascii_case(suit.key()) || s == suit.name_local()
        })
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name_canonical())
    }
}

/// A minor arcana rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (王牌).
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Page (侍从).
    Page,
    /// Knight (骑士).
    Knight,
    /// Queen (王后).
    Queen,
    /// King (国王).
    King,
}

impl Rank {
    /// All ranks in catalog order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Ace,
            Self::Two,
            Self::Three,
            Self::Four,
            Self::Five,
            Self::Six,
            Self::Seven,
            Self::Eight,
            Self::Nine,
            Self::Ten,
            Self::Page,
            Self::Knight,
            Self::Queen,
            Self::King,
        ]
    }

    /// Upper-case key used in card ids.
    pub fn key(self) -> &'static str {
        match self {
            Self::Ace => "ACE",
            Self::Two => "TWO",
            Self::Three => "THREE",
            Self::Four => "FOUR",
            Self::Five => "FIVE",
            Self::Six => "SIX",
            Self::Seven => "SEVEN",
            Self::Eight => "EIGHT",
            Self::Nine => "NINE",
            Self::Ten => "TEN",
            Self::Page => "PAGE",
            Self::Knight => "KNIGHT",
            Self::Queen => "QUEEN",
            Self::King => "KING",
        }
    }

    /// Chinese rank name.
    pub fn name_local(self) -> &'static str {
        match self {
            Self::Ace => "王牌",
            Self::Two => "二",
            Self::Three => "三",
            Self::Four => "四",
            Self::Five => "五",
            Self::Six => "六",
            Self::Seven => "七",
            Self::Eight => "八",
            Self::Nine => "九",
            Self::Ten => "十",
            Self::Page => "侍从",
            Self::Knight => "骑士",
            Self::Queen => "王后",
            Self::King => "国王",
        }
    }

    /// English rank name.
    pub fn name_canonical(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Page => "Page",
            Self::Knight => "Knight",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }
}

/// What a card is, independent of its display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKey {
    /// A major arcana card, numbered 0-21.
    Major(u8),
    /// A minor arcana card.
    Minor {
        /// The card's suit.
        suit: Suit,
        /// The card's rank within the suit.
        rank: Rank,
    },
}

impl CardKey {
    /// Stable id derived from the key, e.g. `MAJOR_13` or `WANDS_TWO`.
    pub fn id(self) -> String {
        match self {
            Self::Major(n) => format!("MAJOR_{n}"),
            Self::Minor { suit, rank } => format!("{}_{}", suit.key(), rank.key()),
        }
    }
}

/// A canonical tarot card identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Major number or suit and rank.
    pub key: CardKey,
    /// Stable unique id.
    pub id: String,
    /// Chinese display name.
    pub name_local: String,
    /// English display name.
    pub name_canonical: String,
}

impl Card {
    fn major(number: u8, name_local: &str, name_canonical: &str) -> Self {
        let key = CardKey::Major(number);
        Self {
            key,
            id: key.id(),
            name_local: name_local.to_string(),
            name_canonical: name_canonical.to_string(),
        }
    }

    fn minor(suit: Suit, rank: Rank) -> Self {
        let key = CardKey::Minor { suit, rank };
        Self {
            key,
            id: key.id(),
            name_local: format!("{}{}", suit.name_local(), rank.name_local()),
            name_canonical: format!("{} of {}", rank.name_canonical(), suit.name_canonical()),
        }
    }

    /// Whether this card belongs to the major arcana.
    pub fn is_major(&self) -> bool {
        matches!(self.key, CardKey::Major(_))
    }

    /// The card's suit, or `None` for major arcana.
    pub fn suit(&self) -> Option<Suit> {
        match self.key {
            CardKey::Major(_) => None,
            CardKey::Minor { suit, .. } => Some(suit),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}（{}）", self.name_local, self.name_canonical)
    }
}

static CATALOG: LazyLock<Vec<Card>> = LazyLock::new(build_catalog);

fn build_catalog() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for (number, (local, canonical)) in (0u8..).zip(MAJORS) {
        cards.push(Card::major(number, local, canonical));
    }
    for &suit in Suit::all() {
        for &rank in Rank::all() {
            cards.push(Card::minor(suit, rank));
        }
    }
    cards
}

/// The full 78-card deck in canonical order.
///
/// Built on first use and shared for the life of the process.
pub fn catalog() -> &'static [Card] {
    &CATALOG
}

/// Look up a card by id (case-insensitive).
pub fn find(id: &str) -> Option<&'static Card> {
    catalog().iter().find(|c| c.id.eq_ignore_ascii_case(id.trim()))
}
