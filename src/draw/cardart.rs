use super::assets::AssetLibrary;
use super::canvas;
use crate::cards::Card;
use crate::state::GameState;
use crate::state::SeatMap;
use crate::table::FontBook;
use crate::table::TableConfig;
use image::Rgba;
use image::RgbaImage;
use image::imageops;
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::drawing::draw_line_segment_mut;
use imageproc::rect::Rect;

/// draws hole cards: the hero's face up, everyone else's face down.
/// every card goes through the same path: build a flat sprite, center
/// it in a square buffer sized to its bounding diagonal, rotate, then
/// composite, so fanned corners never clip.
pub struct CardRenderer<'a> {
    config: &'a TableConfig,
    fonts: &'a FontBook,
}

impl<'a> CardRenderer<'a> {
    pub fn new(config: &'a TableConfig, fonts: &'a FontBook) -> Self {
        Self { config, fonts }
    }

    /// hero cards fan out at the bottom-center seat, overlapped by
    /// about half a card and counter-rotated a few degrees
    pub fn draw_hero_cards(
        &self,
        canvas: &mut RgbaImage,
        assets: &mut AssetLibrary,
        hole: (Card, Card),
    ) {
        let s = self.config.scale_f();
        let (w, h) = (80. * s, 120. * s);
        let overlap = 45. * s;
        let r = self.config.seat_radius;
        let (cx, cy) = self.config.center();
        let hx = cx + r / 1.5;
        let hy = cy + self.config.table_height * 0.7 - r / 4.;
        let top = hy - r * 1.2 * 0.6;
        let left = hx - w / 2. - overlap / 2. - 13.;
        let face = self.face_sprite(assets, hole.0, w as u32, h as u32);
        canvas::blend_rotated(canvas, &face, left + w / 2., top + h / 2., 5.);
        let left = hx - w / 2. + overlap / 2. - 13.;
        let face = self.face_sprite(assets, hole.1, w as u32, h as u32);
        canvas::blend_rotated(canvas, &face, left + w / 2., top + h / 2., -5.);
    }

    /// face-down fans for everyone still in the hand, tilted along
    /// the seat-to-center direction so cards face the middle
    pub fn draw_opponent_cards(
        &self,
        canvas: &mut RgbaImage,
        assets: &mut AssetLibrary,
        game: &GameState,
        seats: &SeatMap,
    ) {
        let s = self.config.scale_f();
        let (w, h) = (70. * s, 105. * s);
        let overlap = 30. * s;
        let reach = self.config.seat_radius * 1.2 * 0.6;
        let (cx, cy) = self.config.center();
        for player in game.players.iter() {
            if player.is_hero || player.is_folded {
                continue;
            }
            let Some(seat) = seats.seat_of(player.position) else {
                log::debug!("{:<32}{:<32}", "no card seat for", player.position);
                continue;
            };
            let (x, y) = self.config.seat_position(seat);
            let (dx, dy) = (cx - x, cy - y);
            let length = (dx * dx + dy * dy).sqrt();
            let (ux, uy) = if length > 0. { (dx / length, dy / length) } else { (0., -1.) };
            let tilt = ux.atan2(-uy).to_degrees();
            let (ax, ay) = (x + ux * reach, y + uy * reach);
            let (px, py) = (-uy, ux);
            let back = self.back_sprite(assets, w as u32, h as u32);
            canvas::blend_rotated(
                canvas,
                &back,
                ax - px * overlap / 2.,
                ay - py * overlap / 2.,
                tilt + 5.,
            );
            canvas::blend_rotated(
                canvas,
                &back,
                ax + px * overlap / 2.,
                ay + py * overlap / 2.,
                tilt - 5.,
            );
        }
    }

    fn face_sprite(&self, assets: &mut AssetLibrary, card: Card, w: u32, h: u32) -> RgbaImage {
        match assets.card(card) {
            Some(img) => imageops::resize(img, w, h, imageops::FilterType::Lanczos3),
            None => self.fallback_face(card, w, h),
        }
    }

    fn back_sprite(&self, assets: &mut AssetLibrary, w: u32, h: u32) -> RgbaImage {
        match assets.back() {
            Some(img) => imageops::resize(img, w, h, imageops::FilterType::Lanczos3),
            None => self.fallback_back(w, h),
        }
    }

    /// programmatic card face: border, corner rank+suit, centered
    /// suit glyph. keeps a missing asset from ever blocking a batch.
    fn fallback_face(&self, card: Card, w: u32, h: u32) -> RgbaImage {
        let colors = &self.config.palette;
        let mut sprite = RgbaImage::from_pixel(w, h, colors.card_face);
        border(&mut sprite, w, h);
        let ink = colors.suit_color(card.suit().is_red());
        let text = format!("{}{}", card.rank(), card.suit().glyph());
        let (tw, th) = self.fonts.card.measure(&text);
        self.fonts.card.draw(&mut sprite, ink, 5, 5, &text);
        self.fonts.card.draw(
            &mut sprite,
            ink,
            w as i32 - tw as i32 - 5,
            h as i32 - th as i32 - 5,
            &text,
        );
        let big = self.fonts.card.with_px(w.min(h) as f32 * 0.4);
        let glyph = card.suit().glyph().to_string();
        let (gw, gh) = big.measure(&glyph);
        big.draw(
            &mut sprite,
            ink,
            (w as i32 - gw as i32) / 2,
            (h as i32 - gh as i32) / 2,
            &glyph,
        );
        sprite
    }

    /// programmatic card back: blue field with a line lattice
    fn fallback_back(&self, w: u32, h: u32) -> RgbaImage {
        let colors = &self.config.palette;
        let mut sprite = RgbaImage::from_pixel(w, h, colors.card_back);
        let step = 10 * self.config.scale;
        for x in (0..w).step_by(step as usize) {
            draw_line_segment_mut(
                &mut sprite,
                (x as f32, 0.),
                (x as f32, h as f32),
                colors.card_back_line,
            );
        }
        for y in (0..h).step_by(step as usize) {
            draw_line_segment_mut(
                &mut sprite,
                (0., y as f32),
                (w as f32, y as f32),
                colors.card_back_line,
            );
        }
        border(&mut sprite, w, h);
        sprite
    }
}

fn border(sprite: &mut RgbaImage, w: u32, h: u32) {
    for i in 0..2 {
        draw_hollow_rect_mut(
            sprite,
            Rect::at(i, i).of_size(w - 2 * i as u32, h - 2 * i as u32),
            Rgba([0, 0, 0, 255]),
        );
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

    #[test]
    fn fallback_face_is_full_size() {
        let config = TableConfig::new(6, 1);
        let fonts = fonts();
        let renderer = CardRenderer::new(&config, &fonts);
        let card = Card::try_from("Qh").unwrap();
        let face = renderer.fallback_face(card, 80, 120);
        assert!(face.width() == 80);
        assert!(face.height() == 120);
        // red ink somewhere on the face
        assert!(face.pixels().any(|p| *p == config.palette.suit_red));
    }

    #[test]
    fn missing_asset_still_draws() {
        let config = TableConfig::new(6, 1);
        let fonts = fonts();
        let renderer = CardRenderer::new(&config, &fonts);
        let mut assets = AssetLibrary::new(None);
        let mut canvas = canvas::sprite(config.width, config.height);
        let hole = (Card::try_from("As").unwrap(), Card::try_from("Kd").unwrap());
        renderer.draw_hero_cards(&mut canvas, &mut assets, hole);
        assert!(canvas.pixels().any(|p| p.0[3] > 0));
    }

    #[test]
    fn folded_players_show_no_backs() {
        let config = TableConfig::new(2, 1);
        let fonts = fonts();
        let renderer = CardRenderer::new(&config, &fonts);
        let mut assets = AssetLibrary::new(None);
        let game = GameState {
            players: vec![
                Player {
                    position: Position::Sb,
                    stack: 100.,
                    chips_on_table: 0.,
                    is_hero: true,
                    is_folded: false,
                    is_active: false,
                    is_dealer: false,
                },
                Player {
                    position: Position::Bb,
                    stack: 100.,
                    chips_on_table: 0.,
                    is_hero: false,
                    is_folded: true,
                    is_active: false,
                    is_dealer: false,
                },
            ],
            pot: 0.,
            board: None,
            active_position: None,
        };
        let seats = game.seat_map();
        let mut canvas = canvas::sprite(config.width, config.height);
        renderer.draw_opponent_cards(&mut canvas, &mut assets, &game, &seats);
        assert!(canvas.pixels().all(|p| p.0[3] == 0));
    }
}
