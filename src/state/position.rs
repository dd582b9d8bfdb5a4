use serde::{Deserialize, Serialize};

/// poker-theoretic acting-order label, independent of where a player
/// gets drawn. seat assignment happens in [`crate::state::SeatMap`].
///
/// "UTG+2" and "MP" are the same chair under two naming schools; both
/// spellings parse to [`Position::Mp`] and it prints as "MP".
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Position {
    Utg,
    Utg1,
    Mp,
    Lj,
    Hj,
    Co,
    Btn,
    Sb,
    Bb,
}

impl TryFrom<&str> for Position {
    type Error = ParsePositionError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_ascii_uppercase().as_str() {
            "UTG" => Ok(Position::Utg),
            "UTG+1" => Ok(Position::Utg1),
            "UTG+2" => Ok(Position::Mp),
            "MP" => Ok(Position::Mp),
            "LJ" => Ok(Position::Lj),
            "HJ" => Ok(Position::Hj),
            "CO" => Ok(Position::Co),
            "BTN" => Ok(Position::Btn),
            "SB" => Ok(Position::Sb),
            "BB" => Ok(Position::Bb),
            _ => Err(ParsePositionError(s.to_string())),
        }
    }
}
impl TryFrom<String> for Position {
    type Error = ParsePositionError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Position::try_from(s.as_str())
    }
}
impl From<Position> for String {
    fn from(p: Position) -> String {
        p.to_string()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Position::Utg => "UTG",
                Position::Utg1 => "UTG+1",
                Position::Mp => "MP",
                Position::Lj => "LJ",
                Position::Hj => "HJ",
                Position::Co => "CO",
                Position::Btn => "BTN",
                Position::Sb => "SB",
                Position::Bb => "BB",
            }
        )
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown position code: {0:?}")]
pub struct ParsePositionError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_str() {
        for p in [
            Position::Utg,
            Position::Utg1,
            Position::Lj,
            Position::Hj,
            Position::Co,
            Position::Btn,
            Position::Sb,
            Position::Bb,
        ] {
            assert!(p == Position::try_from(p.to_string()).unwrap());
        }
    }

    #[test]
    fn mp_aliases_utg2() {
        assert!(Position::try_from("UTG+2").unwrap() == Position::Mp);
        assert!(Position::try_from("MP").unwrap() == Position::Mp);
    }

    #[test]
    fn garbage_rejected() {
        assert!(Position::try_from("UTG+3").is_err());
    }
}
