//! Card types and the special abilities tied to ranks.

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Maps a raw draw onto a suit (`draw mod 4`).
    #[must_use]
    pub const fn from_draw(draw: u32) -> Self {
        Self::ALL[(draw % 4) as usize]
    }

    /// Position of the suit in deck order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Card rank, ordered with the Ace lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Ace.
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
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks from Ace to King.
    pub const ALL: [Self; 13] = [
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
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Zero-based ordinal (Ace = 0, King = 12). This is the base card value.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }
}

/// Ability carried by a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Special {
    /// Plain card.
    #[default]
    None,
    /// Doubles the card's value for the trick it is played in (Aces).
    DoublePoints,
    /// Exchanges the player's hand with the next seat's hand (Kings).
    SwapHands,
    /// Reveals a suit from the stream without changing state (Queens).
    SeeFuture,
}

impl Special {
    /// Returns the ability a card of this rank carries.
    #[must_use]
    pub const fn for_rank(rank: Rank) -> Self {
        match rank {
            Rank::Ace => Self::DoublePoints,
            Rank::King => Self::SwapHands,
            Rank::Queen => Self::SeeFuture,
            _ => Self::None,
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
    /// Ability derived from the rank.
    pub special: Special,
}

impl Card {
    /// Creates a new card; the special ability follows from the rank.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            special: Special::for_rank(rank),
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
