use super::player::Player;
use super::position::Position;
use super::seating::SeatMap;
use crate::Chips;
use serde::Deserialize;

/// normalized description of one spot, as handed over by the solver
/// output pipeline. player order is canonical action order; where a
/// player gets drawn is decided by [`SeatMap`], not by this list.
#[derive(Debug, Clone, Deserialize)]
pub struct GameState {
    pub players: Vec<Player>,
    #[serde(default)]
    pub pot: Chips,
    #[serde(default)]
    pub board: Option<String>,
    #[serde(default)]
    pub active_position: Option<Position>,
}

/// upstream files wrap the state in a "game" envelope
#[derive(Debug, Deserialize)]
struct Envelope {
    game: GameState,
}

impl GameState {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Envelope>(text).map(|e| e.game)
    }

    pub fn hero(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.is_hero)
    }

    /// players still contesting the hand
    pub fn live_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| !p.is_folded)
    }

    pub fn seat_map(&self) -> SeatMap {
        SeatMap::new(self.players.len(), self.hero().map(|p| p.position))
    }

    /// one-line caption drawn above the table, e.g. "100bb, 9 players"
    pub fn scenario(&self) -> String {
        if self.players.is_empty() {
            return String::new();
        }
        let stacks = self.players.iter().map(|p| p.stack).sum::<Chips>();
        let avg = stacks / self.players.len() as Chips;
        format!("{}bb, {} players", avg.round() as i64, self.players.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPOT: &str = r#"{
        "game": {
            "players": [
                { "position": "CO", "stack": 99.5, "chips_on_table": 2.5, "is_hero": true },
                { "position": "BTN", "current_stack": 100, "is_dealer": true },
                { "position": "SB", "stack": 99.5, "chips_on_table": 0.5, "is_folded": true },
                { "position": "BB", "stack": 99, "chips_on_table": 1, "is_active": true }
            ],
            "pot": 4.0,
            "active_position": "BB"
        }
    }"#;

    #[test]
    fn envelope_unwraps() {
        let game = GameState::from_json(SPOT).unwrap();
        assert!(game.players.len() == 4);
        assert!(game.pot == 4.0);
        assert!(game.active_position == Some(Position::Bb));
    }

    #[test]
    fn stack_alias_accepted() {
        let game = GameState::from_json(SPOT).unwrap();
        assert!(game.players[1].stack == 100.);
    }

    #[test]
    fn hero_and_live_subset() {
        let game = GameState::from_json(SPOT).unwrap();
        assert!(game.hero().unwrap().position == Position::Co);
        assert!(game.live_players().count() == 3);
    }

    #[test]
    fn scenario_caption() {
        let game = GameState::from_json(SPOT).unwrap();
        assert!(game.scenario() == "100bb, 4 players");
    }
}
