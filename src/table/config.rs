use super::palette::Palette;
use crate::clamp_players;
use crate::{BASE_HEIGHT, BASE_WIDTH};

/// per-seat fractional offsets from table center, in units of
/// (table width, table height). index 0 is always bottom-center where
/// the hero renders. these are hand-tuned visual constants, not a
/// closed-form function of the player count.
const SEATS_2: [(f32, f32); 2] = [(0.00, 0.70), (0.00, -0.55)];
const SEATS_3: [(f32, f32); 3] = [(0.00, 0.70), (-0.40, -0.35), (0.40, -0.35)];
const SEATS_4: [(f32, f32); 4] = [(0.00, 0.70), (-0.50, 0.00), (0.00, -0.55), (0.50, 0.00)];
const SEATS_5: [(f32, f32); 5] = [
    (0.00, 0.70),
    (-0.45, 0.25),
    (-0.30, -0.50),
    (0.30, -0.50),
    (0.45, 0.25),
];
const SEATS_6: [(f32, f32); 6] = [
    (0.00, 0.70),
    (-0.45, 0.35),
    (-0.40, -0.45),
    (0.00, -0.55),
    (0.40, -0.45),
    (0.45, 0.35),
];
const SEATS_7: [(f32, f32); 7] = [
    (0.00, 0.70),
    (-0.30, 0.65),
    (-0.50, -0.10),
    (-0.25, -0.55),
    (0.25, -0.55),
    (0.50, -0.10),
    (0.30, 0.65),
];
const SEATS_8: [(f32, f32); 8] = [
    (0.00, 0.70),
    (-0.30, 0.65),
    (-0.50, -0.05),
    (-0.25, -0.55),
    (0.00, -0.55),
    (0.25, -0.55),
    (0.50, -0.05),
    (0.30, 0.65),
];
const SEATS_9: [(f32, f32); 9] = [
    (0.00, 0.70),
    (-0.25, 0.70),
    (-0.50, 0.00),
    (-0.25, -0.55),
    (0.00, -0.55),
    (0.25, -0.55),
    (0.50, -0.30),
    (0.50, 0.30),
    (0.25, 0.70),
];

/// geometry for one table size at one supersampling scale. everything
/// downstream measures in canvas pixels (already multiplied by scale).
#[derive(Debug, Clone)]
pub struct TableConfig {
    pub players: usize,
    pub scale: u32,
    pub width: u32,
    pub height: u32,
    pub table_width: f32,
    pub table_height: f32,
    pub seat_radius: f32,
    pub palette: Palette,
}

impl TableConfig {
    pub fn new(players: usize, scale: u32) -> Self {
        let scale = scale.max(1);
        let width = BASE_WIDTH * scale;
        let height = BASE_HEIGHT * scale;
        Self {
            players: clamp_players(players),
            scale,
            width,
            height,
            table_width: width as f32 * 0.85,
            table_height: height as f32 * 0.5,
            seat_radius: 70. * scale as f32,
            palette: Palette::default(),
        }
    }

    pub fn scale_f(&self) -> f32 {
        self.scale as f32
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width as f32 / 2., self.height as f32 / 2.)
    }

    fn fractions(&self) -> &'static [(f32, f32)] {
        match self.players {
            2 => &SEATS_2,
            3 => &SEATS_3,
            4 => &SEATS_4,
            5 => &SEATS_5,
            6 => &SEATS_6,
            7 => &SEATS_7,
            8 => &SEATS_8,
            9 => &SEATS_9,
            _ => unreachable!("player count is clamped"),
        }
    }

    /// exactly one coordinate per seat, index 0 at bottom-center
    pub fn seat_positions(&self) -> Vec<(f32, f32)> {
        let (cx, cy) = self.center();
        self.fractions()
            .iter()
            .map(|(fx, fy)| (cx + fx * self.table_width, cy + fy * self.table_height))
            .collect()
    }

    /// out-of-range indices fall back to the hero seat rather than
    /// crash; player rendering must always produce something
    pub fn seat_position(&self, seat: usize) -> (f32, f32) {
        let seats = self.seat_positions();
        match seats.get(seat) {
            Some(xy) => *xy,
            None => {
                log::warn!("{:<32}{:<32}", "seat index out of range", seat);
                seats[0]
            }
        }
    }

    /// how far along the seat-to-center vector a bet stack sits.
    /// tuned per (table size, seat) to dodge seat panels and the pot
    /// label; anything untuned uses the 0.6 default.
    pub fn chip_distance(&self, seat: usize) -> f32 {
        match (self.players, seat) {
            (8, 1) => 0.3,
            (8, 2) => 0.2,
            (8, 3) => 0.3,
            (8, 4) => 0.3,
            (8, 5) => 0.5,
            (8, 6) => 0.3,
            (8, 7) => 0.5,
            (9, 1) => 0.35,
            (9, 2) => 0.25,
            (9, 3) => 0.30,
            (9, 4) => 0.35,
            (9, 5) => 0.30,
            (9, 6) => 0.25,
            (9, 7) => 0.35,
            (9, 8) => 0.50,
            _ => 0.6,
        }
    }

    /// dealer button offset from the seat center, in seat radii.
    /// tuned per (table size, seat) so the button stays out of the
    /// chip-stack zone.
    pub fn dealer_offset(&self, seat: usize) -> (f32, f32) {
        match (self.players, seat) {
            (8, 0) => (1.4, -1.8),
            (8, 1) => (1.1, -1.4),
            (8, 2) => (0.8, 0.7),
            (8, 3) => (0.8, 0.7),
            (8, 4) => (0.8, 0.9),
            (8, 5) => (0.8, 0.7),
            (8, 6) => (-0.8, 0.7),
            (8, 7) => (-1.3, -1.4),
            (9, 0) => (1.4, -1.8),
            (9, 1) => (1.1, -1.4),
            (9, 2) => (0.8, 0.7),
            (9, 3) => (0.8, 0.7),
            (9, 4) => (0.8, 0.9),
            (9, 5) => (0.8, 0.7),
            (9, 6) => (-0.8, 0.7),
            (9, 7) => (-0.8, -1.2),
            (9, 8) => (-1.3, -1.4),
            _ => (0.7, -0.7),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_seat_per_player() {
        for n in crate::MIN_PLAYERS..=crate::MAX_PLAYERS {
            let config = TableConfig::new(n, 1);
            assert!(config.seat_positions().len() == n);
        }
    }

    #[test]
    fn hero_seat_is_bottom_center() {
        for n in crate::MIN_PLAYERS..=crate::MAX_PLAYERS {
            let config = TableConfig::new(n, 1);
            let (x, y) = config.seat_positions()[0];
            let (cx, cy) = config.center();
            assert!(x == cx);
            assert!(y > cy);
        }
    }

    #[test]
    fn invalid_count_clamps_to_eight() {
        assert!(TableConfig::new(1, 1).seat_positions().len() == 8);
        assert!(TableConfig::new(12, 1).seat_positions().len() == 8);
    }

    #[test]
    fn canvas_scales() {
        let config = TableConfig::new(9, 2);
        assert!(config.width == crate::BASE_WIDTH * 2);
        assert!(config.height == crate::BASE_HEIGHT * 2);
    }

    #[test]
    fn out_of_range_seat_falls_back() {
        let config = TableConfig::new(6, 1);
        assert!(config.seat_position(17) == config.seat_position(0));
    }
}
