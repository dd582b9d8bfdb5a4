use super::position::Position;
use crate::Chips;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Player {
    pub position: Position,
    #[serde(default, alias = "current_stack")]
    pub stack: Chips,
    #[serde(default)]
    pub chips_on_table: Chips,
    #[serde(default)]
    pub is_hero: bool,
    #[serde(default)]
    pub is_folded: bool,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_dealer: bool,
}

impl Player {
    /// precedence is folded > hero > active > waiting, first match wins.
    /// "active" can come from the player's own flag or from the table's
    /// active_position pointing at them.
    pub fn status(&self, active_position: Option<Position>) -> Status {
        if self.is_folded {
            Status::Folded
        } else if self.is_hero {
            Status::Hero
        } else if self.is_active || active_position == Some(self.position) {
            Status::Active
        } else {
            Status::Waiting
        }
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Status {
    Folded,
    Hero,
    Active,
    Waiting,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Status::Folded => write!(f, "F"),
            Status::Hero => write!(f, "H"),
            Status::Active => write!(f, "A"),
            Status::Waiting => write!(f, "W"),
        }
    }
}
