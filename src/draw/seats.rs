use super::assets::AssetLibrary;
use super::canvas;
use crate::state::GameState;
use crate::state::Player;
use crate::state::SeatMap;
use crate::table::FontBook;
use crate::table::TableConfig;
use crate::table::palette;
use image::Rgba;
use image::RgbaImage;
use image::imageops;
use imageproc::drawing::draw_filled_circle_mut;
use imageproc::drawing::draw_hollow_circle_mut;

/// draws everything that belongs to a seat: the status-colored disc
/// behind the cards, the info panel in front of them, and the dealer
/// button. the disc/panel split exists so the card layer can slide
/// between them in the compositor's z-order.
pub struct PlayerRenderer<'a> {
    config: &'a TableConfig,
    fonts: &'a FontBook,
}

impl<'a> PlayerRenderer<'a> {
    pub fn new(config: &'a TableConfig, fonts: &'a FontBook) -> Self {
        Self { config, fonts }
    }

    /// seat rendering must always produce something: the hero pins to
    /// seat 0 and an off-table position code gets the last seat
    pub fn seat_of(&self, player: &Player, seats: &SeatMap) -> usize {
        if player.is_hero {
            0
        } else {
            match seats.seat_of(player.position) {
                Some(seat) => seat,
                None => {
                    log::warn!("{:<32}{:<32}", "position off-table", player.position);
                    self.config.players - 1
                }
            }
        }
    }

    fn panel_size(&self) -> (f32, f32) {
        let r = self.config.seat_radius;
        (r * 1.8, r * 1.2)
    }

    /// background discs, one per seat, colored by player status
    pub fn draw_discs(
        &self,
        canvas: &mut RgbaImage,
        game: &GameState,
        seats: &SeatMap,
        assets: &mut AssetLibrary,
    ) {
        let s = self.config.scale_f();
        let r = self.config.seat_radius;
        let (_, panel_h) = self.panel_size();
        for player in game.players.iter() {
            let seat = self.seat_of(player, seats);
            let (x, y) = self.config.seat_position(seat);
            let cy = y - panel_h * 0.4;
            let color = self.config.palette.seat_color(player.status(game.active_position));
            canvas::soft_disc(
                canvas,
                x,
                cy,
                r,
                color,
                Rgba([0, 0, 0, 255]),
                2. * s,
                0.5 * s,
            );
            self.draw_avatar(canvas, assets, x, cy, r);
        }
    }

    /// panel shapes only, for the cached static layer
    pub fn draw_skeletons(&self, canvas: &mut RgbaImage, game: &GameState, seats: &SeatMap) {
        for player in game.players.iter() {
            let seat = self.seat_of(player, seats);
            let (x, y) = self.config.seat_position(seat);
            let color = self.config.palette.seat_color(player.status(game.active_position));
            self.draw_panel(canvas, x, y, color, None);
        }
    }

    /// full panels with position and stack text, plus the dealer
    /// button. drawn after the card layer on purpose so panels overlap
    /// the bottom of the cards.
    pub fn draw_panels(&self, canvas: &mut RgbaImage, game: &GameState, seats: &SeatMap) {
        for player in game.players.iter() {
            let seat = self.seat_of(player, seats);
            let (x, y) = self.config.seat_position(seat);
            let color = self.config.palette.seat_color(player.status(game.active_position));
            self.draw_panel(canvas, x, y, color, Some(player));
            if player.is_dealer {
                self.draw_dealer_button(canvas, x, y, seat);
            }
        }
    }

    fn draw_panel(
        &self,
        canvas: &mut RgbaImage,
        x: f32,
        y: f32,
        seat_color: palette::Color,
        player: Option<&Player>,
    ) {
        let s = self.config.scale_f();
        let (w, h) = self.panel_size();
        canvas::soft_rounded_rect(
            canvas,
            x - w / 2.,
            y - h / 2.,
            w,
            h,
            h * 0.3,
            palette::scaled(seat_color, 0.9),
            Rgba([0, 0, 0, 255]),
            2. * s,
            0.3 * s,
        );
        let Some(player) = player else { return };
        let text_color = self.config.palette.text;
        let position = player.position.to_string();
        let (pw, ph) = self.fonts.label.measure(&position);
        self.fonts.label.draw(
            canvas,
            text_color,
            (x - pw as f32 / 2.) as i32,
            (y - h * 0.25 - ph as f32 / 2.) as i32,
            &position,
        );
        let stack = format!("{:.1} BB", player.stack);
        let (sw, sh) = self.fonts.label.measure(&stack);
        self.fonts.label.draw(
            canvas,
            text_color,
            (x - sw as f32 / 2.) as i32,
            (y + h * 0.25 - sh as f32 / 2.) as i32,
            &stack,
        );
    }

    /// avatar clipped to a circle inside the disc, skipped when the
    /// asset is absent
    fn draw_avatar(
        &self,
        canvas: &mut RgbaImage,
        assets: &mut AssetLibrary,
        cx: f32,
        cy: f32,
        radius: f32,
    ) {
        let Some(avatar) = assets.avatar() else { return };
        let ar = radius * 0.85;
        let size = (ar * 2.) as u32;
        let mut clipped = imageops::resize(avatar, size, size, imageops::FilterType::Triangle);
        for (px, py, p) in clipped.enumerate_pixels_mut() {
            let dx = px as f32 - ar;
            let dy = py as f32 - ar;
            if dx * dx + dy * dy > ar * ar {
                p.0[3] = 0;
            }
        }
        canvas::blend_center(canvas, &clipped, cx, cy);
    }

    /// small "D" puck with a drop shadow and an extruded edge, offset
    /// from the seat by the tuned per-seat table
    fn draw_dealer_button(&self, canvas: &mut RgbaImage, x: f32, y: f32, seat: usize) {
        let s = self.config.scale_f();
        let r = 12. * s;
        let color = self.config.palette.dealer_button;
        let (dx, dy) = self.config.dealer_offset(seat);
        let bx = x + self.config.seat_radius * dx;
        let by = y + self.config.seat_radius * dy;
        let thickness = 3. * s;
        canvas::soft_shadow(canvas, bx + thickness, by + thickness, r, r, s);
        draw_filled_circle_mut(
            canvas,
            (bx as i32, (by + thickness) as i32),
            r as i32,
            palette::darker(color, 40),
        );
        draw_filled_circle_mut(canvas, (bx as i32, by as i32), r as i32, color);
        for i in 0..s.max(1.) as i32 {
            draw_hollow_circle_mut(
                canvas,
                (bx as i32, by as i32),
                r as i32 - i,
                Rgba([0, 0, 0, 255]),
            );
        }
        let (dw, dh) = self.fonts.label.measure("D");
        self.fonts.label.draw(
            canvas,
            Rgba([0, 0, 0, 255]),
            (bx - dw as f32 / 2.) as i32,
            (by - dh as f32 / 2.) as i32,
            "D",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Position;
    use crate::table::FontFace;

    fn fonts() -> FontBook {
        FontBook {
            title: FontFace::Bitmap { px: 32. },
            label: FontFace::Bitmap { px: 16. },
            card: FontFace::Bitmap { px: 24. },
        }
    }

    fn player(position: Position, hero: bool) -> Player {
        Player {
            position,
            stack: 100.,
            chips_on_table: 0.,
            is_hero: hero,
            is_folded: false,
            is_active: false,
            is_dealer: false,
        }
    }

    #[test]
    fn hero_takes_seat_zero() {
        let config = TableConfig::new(6, 1);
        let fonts = fonts();
        let renderer = PlayerRenderer::new(&config, &fonts);
        let seats = SeatMap::new(6, Some(Position::Co));
        assert!(renderer.seat_of(&player(Position::Co, true), &seats) == 0);
    }

    #[test]
    fn off_table_position_gets_fallback_seat() {
        let config = TableConfig::new(4, 1);
        let fonts = fonts();
        let renderer = PlayerRenderer::new(&config, &fonts);
        let seats = SeatMap::new(4, Some(Position::Co));
        // UTG is not in the 4-handed canonical table
        assert!(renderer.seat_of(&player(Position::Utg, false), &seats) == 3);
    }

    #[test]
    fn discs_touch_every_seat() {
        let config = TableConfig::new(3, 1);
        let fonts = fonts();
        let renderer = PlayerRenderer::new(&config, &fonts);
        let seats = SeatMap::new(3, Some(Position::Btn));
        let game = GameState {
            players: vec![
                player(Position::Btn, true),
                player(Position::Sb, false),
                player(Position::Bb, false),
            ],
            pot: 0.,
            board: None,
            active_position: None,
        };
        let mut assets = AssetLibrary::new(None);
        let mut canvas = canvas::sprite(config.width, config.height);
        renderer.draw_discs(&mut canvas, &game, &seats, &mut assets);
        let (_, panel_h) = (config.seat_radius * 1.8, config.seat_radius * 1.2);
        for seat in 0..3 {
            let (x, y) = config.seat_position(seat);
            let p = canvas.get_pixel(x as u32, (y - panel_h * 0.4) as u32);
            assert!(p.0[3] > 0);
        }
    }
}
