#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
    /// the two-character code that keys card image assets, e.g. "As"
    pub fn code(&self) -> String {
        format!("{}{}", self.rank, self.suit)
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// str isomorphism
///
/// cards come in as user-facing strings like "As" or "Td".
/// "10h" is accepted and normalized to "Th".
impl TryFrom<&str> for Card {
    type Error = ParseCardError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let err = || ParseCardError(s.to_string());
        let chars = s.trim().chars().collect::<Vec<char>>();
        let (rank, suit) = match chars.as_slice() {
            ['1', '0', suit] => ('T', *suit),
            [rank, suit] => (*rank, *suit),
            _ => return Err(err()),
        };
        let rank = Rank::try_from(rank).map_err(|_| err())?;
        let suit = Suit::try_from(suit).map_err(|_| err())?;
        Ok(Self { rank, suit })
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(Debug, Error)]
#[error("invalid card code: {0:?}")]
pub struct ParseCardError(String);

use super::rank::Rank;
use super::suit::Suit;
use thiserror::Error;
