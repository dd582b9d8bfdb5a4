use crate::state::Status;
use image::Rgba;

pub type Color = Rgba<u8>;

/// flat color scheme for the whole table. alpha is carried everywhere
/// so layers can be composited in one pass.
#[derive(Debug, Clone)]
pub struct Palette {
    pub background: Color,
    pub table: Color,
    pub text: Color,
    pub text_plate: Color,
    pub seat: Color,
    pub seat_active: Color,
    pub seat_hero: Color,
    pub seat_folded: Color,
    pub dealer_button: Color,
    pub card_face: Color,
    pub card_back: Color,
    pub card_back_line: Color,
    pub suit_red: Color,
    pub suit_black: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgba([30, 30, 30, 255]),
            table: Rgba([53, 101, 77, 255]),
            text: Rgba([255, 255, 255, 255]),
            text_plate: Rgba([0, 0, 0, 150]),
            seat: Rgba([100, 100, 100, 255]),
            seat_active: Rgba([80, 80, 160, 255]),
            seat_hero: Rgba([80, 160, 80, 255]),
            seat_folded: Rgba([50, 50, 50, 255]),
            dealer_button: Rgba([220, 220, 220, 255]),
            card_face: Rgba([255, 255, 255, 255]),
            card_back: Rgba([30, 50, 150, 255]),
            card_back_line: Rgba([40, 60, 160, 255]),
            suit_red: Rgba([220, 40, 40, 255]),
            suit_black: Rgba([0, 0, 0, 255]),
        }
    }
}

impl Palette {
    pub fn seat_color(&self, status: Status) -> Color {
        match status {
            Status::Folded => self.seat_folded,
            Status::Hero => self.seat_hero,
            Status::Active => self.seat_active,
            Status::Waiting => self.seat,
        }
    }
    pub fn suit_color(&self, red: bool) -> Color {
        if red { self.suit_red } else { self.suit_black }
    }
}

/// darken a color without touching its alpha
pub fn darker(c: Color, by: u8) -> Color {
    Rgba([
        c.0[0].saturating_sub(by),
        c.0[1].saturating_sub(by),
        c.0[2].saturating_sub(by),
        c.0[3],
    ])
}

/// scale the rgb channels, used for the panel being a shade darker
/// than its seat disc
pub fn scaled(c: Color, by: f32) -> Color {
    Rgba([
        (c.0[0] as f32 * by) as u8,
        (c.0[1] as f32 * by) as u8,
        (c.0[2] as f32 * by) as u8,
        c.0[3],
    ])
}
