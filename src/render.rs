//! Human-readable rendering of cards and events.
//!
//! Suits print as `♥♦♣♠`, ranks as `A 2 .. 10 J Q K`, and special cards carry
//! a `(2x)`, `(SW)` or `(SF)` tag.

use core::fmt;

use crate::card::{Card, Rank, Special, Suit};
use crate::events::{BetAction, GameEvent, SpecialEffect, Standings};

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hearts => "♥",
            Self::Diamonds => "♦",
            Self::Clubs => "♣",
            Self::Spades => "♠",
        })
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ace => f.write_str("A"),
            Self::Jack => f.write_str("J"),
            Self::Queen => f.write_str("Q"),
            Self::King => f.write_str("K"),
            other => write!(f, "{}", other.ordinal() + 1),
        }
    }
}

impl fmt::Display for Special {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "",
            Self::DoublePoints => "2x",
            Self::SwapHands => "SW",
            Self::SeeFuture => "SF",
        })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)?;
        if self.special != Special::None {
            write!(f, "({})", self.special)?;
        }
        Ok(())
    }
}

impl fmt::Display for Standings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (seat, chips) in self.chips.iter().enumerate() {
            writeln!(f, "Player {seat} chips: {chips}")?;
        }
        write!(f, "\nPlayer {} wins the tournament!", self.winner)
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HandDealt { seat, cards, chips } => {
                write!(f, "Player {seat} hand: ")?;
                for card in cards {
                    write!(f, "{card} ")?;
                }
                write!(f, "| Chips: {chips}")
            }
            Self::DealerChosen { seat } => write!(f, "\nPlayer {seat} is dealer first"),
            Self::BettingOpened { .. } => write!(f, "\n--- Betting Round ---"),
            Self::Bet { seat, action } => match action {
                BetAction::Fold { .. } => write!(f, "Player {seat} folds!"),
                BetAction::Call { amount } => write!(f, "Player {seat} calls {amount}"),
                BetAction::Raise { to } => write!(f, "Player {seat} raises to {to}"),
            },
            Self::TrumpDrawn { round, suit, pot } => write!(
                f,
                "\n--- Round {} ---\nTrump suit: {suit} | Pot: {pot}",
                round + 1
            ),
            Self::SpecialActivated { seat, effect } => match effect {
                SpecialEffect::DoublePoints => {
                    write!(f, "Player {seat} activates DOUBLE POINTS!")
                }
                SpecialEffect::SwapHands { .. } => write!(f, "Player {seat} activates SWAP HANDS!"),
                SpecialEffect::SeeFuture { suit } => {
                    write!(f, "Player {seat} peeks at next trump suit: {suit}")
                }
            },
            Self::CardPlayed { seat, card, .. } => write!(f, "Player {seat} plays: {card}"),
            Self::RoundWon { seat, payout, .. } => {
                write!(f, "Player {seat} wins the round and {payout} chips!")
            }
            Self::TournamentOver { standings } => write!(f, "\n=== GAME OVER ===\n{standings}"),
        }
    }
}
