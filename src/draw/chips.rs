use super::canvas;
use super::error::RenderError;
use crate::Chips;
use crate::state::GameState;
use crate::state::SeatMap;
use crate::table::FontBook;
use crate::table::TableConfig;
use crate::table::palette;
use image::Rgba;
use image::RgbaImage;
use imageproc::drawing::draw_filled_ellipse_mut;
use imageproc::drawing::draw_hollow_ellipse_mut;
use imageproc::drawing::draw_line_segment_mut;

/// chip denominations, in big blinds. amounts decompose greedily into
/// these, so a stack reads at a glance: tall means big bet.
///
/// arithmetic runs in integer tenths of a blind; the smallest chip is
/// a tenth, and float accumulation would drop or invent chips around
/// the .5 and .1 boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denomination {
    Hundred,
    Fifty,
    Ten,
    Five,
    One,
    Half,
    Tenth,
}

impl Denomination {
    pub const DESCENDING: [Self; 7] = [
        Self::Hundred,
        Self::Fifty,
        Self::Ten,
        Self::Five,
        Self::One,
        Self::Half,
        Self::Tenth,
    ];

    pub fn tenths(self) -> u64 {
        match self {
            Self::Hundred => 1000,
            Self::Fifty => 500,
            Self::Ten => 100,
            Self::Five => 50,
            Self::One => 10,
            Self::Half => 5,
            Self::Tenth => 1,
        }
    }

    pub fn value(self) -> Chips {
        self.tenths() as Chips / 10.
    }

    fn color(self) -> palette::Color {
        match self {
            Self::Hundred => Rgba([40, 40, 40, 255]),
            Self::Fifty => Rgba([130, 60, 160, 255]),
            Self::Ten => Rgba([40, 90, 200, 255]),
            Self::Five => Rgba([200, 60, 60, 255]),
            Self::One => Rgba([240, 240, 240, 255]),
            Self::Half => Rgba([230, 150, 60, 255]),
            Self::Tenth => Rgba([150, 150, 150, 255]),
        }
    }
}

/// greedy largest-first decomposition, exact to a tenth of a blind
pub fn decompose(amount: Chips) -> Vec<Denomination> {
    let mut tenths = (amount.max(0.) * 10.).round() as u64;
    let mut chips = Vec::new();
    for denomination in Denomination::DESCENDING {
        while tenths >= denomination.tenths() {
            tenths -= denomination.tenths();
            chips.push(denomination);
        }
    }
    chips
}

/// one decimal under ten blinds, whole blinds above
pub fn format_bb(amount: Chips) -> String {
    if amount < 10. {
        format!("{:.1}", amount)
    } else {
        format!("{:.0}", amount)
    }
}

/// the unit-suffixed label drawn beside a bet stack
fn bet_label(amount: Chips) -> String {
    format!("{} BB", format_bb(amount))
}

/// draws bet stacks on the felt, pulled from each seat toward the
/// table center by the per-seat tuned distance
pub struct ChipRenderer<'a> {
    config: &'a TableConfig,
    fonts: &'a FontBook,
}

impl<'a> ChipRenderer<'a> {
    pub fn new(config: &'a TableConfig, fonts: &'a FontBook) -> Self {
        Self { config, fonts }
    }

    /// unlike seat rendering, which degrades, chip placement errors
    /// out on a position without a seat: a stack drawn at a guessed
    /// spot silently corrupts the image it was meant to label
    pub fn draw_bets(
        &self,
        canvas: &mut RgbaImage,
        game: &GameState,
        seats: &SeatMap,
    ) -> Result<(), RenderError> {
        let (cx, cy) = self.config.center();
        for player in game.players.iter().filter(|p| p.chips_on_table > 0.) {
            let seat = match player.is_hero {
                true => 0,
                false => seats.seat_of(player.position).ok_or(RenderError::ChipGeometry {
                    position: player.position,
                    players: self.config.players,
                })?,
            };
            let (x, y) = self.config.seat_position(seat);
            let t = self.config.chip_distance(seat);
            let (bx, by) = (x + (cx - x) * t, y + (cy - y) * t);
            self.draw_stack(canvas, bx, by, player.chips_on_table);
        }
        Ok(())
    }

    /// flattened ellipses stacked bottom-up, largest chip at the
    /// bottom, with an amount label floating beside the stack
    fn draw_stack(&self, canvas: &mut RgbaImage, x: f32, y: f32, amount: Chips) {
        let chips = decompose(amount);
        if chips.is_empty() {
            return;
        }
        let s = self.config.scale_f();
        let r = 15. * s;
        let ry = r * 0.6;
        let spacing = 8. * s;
        let thickness = 4. * s;
        canvas::soft_shadow(canvas, x + 2. * s, y + thickness + 2. * s, r, ry, s);
        for (i, chip) in chips.iter().enumerate() {
            let cy = y - spacing * i as f32;
            let color = chip.color();
            draw_filled_ellipse_mut(
                canvas,
                (x as i32, (cy + thickness) as i32),
                r as i32,
                ry as i32,
                palette::darker(color, 50),
            );
            draw_filled_ellipse_mut(canvas, (x as i32, cy as i32), r as i32, ry as i32, color);
            draw_hollow_ellipse_mut(
                canvas,
                (x as i32, cy as i32),
                r as i32,
                ry as i32,
                Rgba([0, 0, 0, 255]),
            );
            self.draw_notches(canvas, x, cy, r, ry);
        }
        let label = bet_label(amount);
        let (_, th) = self.fonts.label.measure(&label);
        canvas::text_plate(
            canvas,
            &self.fonts.label,
            &label,
            x + 35. * s,
            y - th as f32 / 2.,
            self.config.palette.text,
            self.config.palette.text_plate,
            4. * s,
            1.5 * s,
        );
    }

    /// six radial rim marks, the usual edge-stripe look
    fn draw_notches(&self, canvas: &mut RgbaImage, x: f32, y: f32, r: f32, ry: f32) {
        for k in 0..6 {
            let angle = k as f32 * std::f32::consts::PI / 3.;
            let (sin, cos) = angle.sin_cos();
            draw_line_segment_mut(
                canvas,
                (x + cos * r * 0.55, y + sin * ry * 0.55),
                (x + cos * r * 0.95, y + sin * ry * 0.95),
                Rgba([255, 255, 255, 220]),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Player;
    use crate::state::Position;
    use crate::table::FontFace;

    fn fonts() -> FontBook {
        FontBook {
            title: FontFace::Bitmap { px: 32. },
            label: FontFace::Bitmap { px: 16. },
            card: FontFace::Bitmap { px: 24. },
        }
    }

    fn bettor(position: Position, hero: bool, bet: Chips) -> Player {
        Player {
            position,
            stack: 100.,
            chips_on_table: bet,
            is_hero: hero,
            is_folded: false,
            is_active: false,
            is_dealer: false,
        }
    }

    #[test]
    fn greedy_is_exact_to_a_tenth() {
        use Denomination::*;
        assert!(decompose(2.6) == vec![One, One, Half, Tenth]);
        assert!(decompose(17.5) == vec![Ten, Five, One, One, Half]);
        assert!(decompose(100.) == vec![Hundred]);
        assert!(decompose(0.) == vec![]);
        assert!(decompose(-3.) == vec![]);
    }

    #[test]
    fn decomposition_preserves_amount() {
        for amount in [0.1, 0.5, 1.5, 7.3, 66.6, 234.9] {
            let total: Chips = decompose(amount).iter().map(|c| c.value()).sum();
            assert!((total - amount).abs() < 0.01);
        }
    }

    #[test]
    fn amounts_format_by_magnitude() {
        assert!(format_bb(2.5) == "2.5");
        assert!(format_bb(9.99) == "10.0");
        assert!(format_bb(15.) == "15");
        assert!(format_bb(150.4) == "150");
    }

    #[test]
    fn stack_labels_carry_units() {
        assert!(bet_label(2.5) == "2.5 BB");
        assert!(bet_label(15.) == "15 BB");
    }

    #[test]
    fn off_table_bettor_is_an_error() {
        let config = TableConfig::new(4, 1);
        let fonts = fonts();
        let renderer = ChipRenderer::new(&config, &fonts);
        let seats = SeatMap::new(4, Some(Position::Co));
        let game = GameState {
            // UTG does not exist at a 4-handed table
            players: vec![bettor(Position::Utg, false, 3.)],
            pot: 0.,
            board: None,
            active_position: None,
        };
        let mut canvas = canvas::sprite(config.width, config.height);
        let result = renderer.draw_bets(&mut canvas, &game, &seats);
        assert!(matches!(
            result,
            Err(RenderError::ChipGeometry { position: Position::Utg, players: 4 })
        ));
    }

    #[test]
    fn bb_bet_survives_off_table_hero() {
        // the fallback seat map must leave BB seated, so its bet
        // placement cannot hit the geometry error
        let config = TableConfig::new(4, 1);
        let fonts = fonts();
        let renderer = ChipRenderer::new(&config, &fonts);
        let seats = SeatMap::new(4, Some(Position::Utg));
        let game = GameState {
            players: vec![
                bettor(Position::Utg, true, 2.),
                bettor(Position::Bb, false, 1.),
            ],
            pot: 0.,
            board: None,
            active_position: None,
        };
        let mut canvas = canvas::sprite(config.width, config.height);
        assert!(renderer.draw_bets(&mut canvas, &game, &seats).is_ok());
    }

    #[test]
    fn hero_bet_lands_between_seat_and_center() {
        let config = TableConfig::new(6, 1);
        let fonts = fonts();
        let renderer = ChipRenderer::new(&config, &fonts);
        let seats = SeatMap::new(6, Some(Position::Btn));
        let game = GameState {
            players: vec![bettor(Position::Btn, true, 2.5)],
            pot: 0.,
            board: None,
            active_position: None,
        };
        let mut canvas = canvas::sprite(config.width, config.height);
        renderer.draw_bets(&mut canvas, &game, &seats).unwrap();
        let (cx, cy) = config.center();
        let (x, y) = config.seat_position(0);
        let t = config.chip_distance(0);
        let (bx, by) = (x + (cx - x) * t, y + (cy - y) * t);
        assert!(canvas.get_pixel(bx as u32, by as u32).0[3] > 0);
    }

    #[test]
    fn folded_zero_bets_draw_nothing() {
        let config = TableConfig::new(6, 1);
        let fonts = fonts();
        let renderer = ChipRenderer::new(&config, &fonts);
        let seats = SeatMap::new(6, Some(Position::Btn));
        let game = GameState {
            players: vec![bettor(Position::Btn, true, 0.)],
            pot: 0.,
            board: None,
            active_position: None,
        };
        let mut canvas = canvas::sprite(config.width, config.height);
        renderer.draw_bets(&mut canvas, &game, &seats).unwrap();
        assert!(canvas.pixels().all(|p| p.0[3] == 0));
    }
}
