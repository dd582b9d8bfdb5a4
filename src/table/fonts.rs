use super::palette::Color;
use ab_glyph::{FontArc, PxScale};
use image::RgbaImage;
use std::path::Path;
use std::path::PathBuf;

/// well-known faces to try after the asset directory
const SYSTEM_FONTS: [&str; 5] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// one drawable text face. the Bitmap variant is the end of the
/// fallback chain: a built-in 5x7 pixel face that needs no files, so
/// text rendering can never abort a batch.
#[derive(Clone)]
pub enum FontFace {
    Vector { font: FontArc, px: f32 },
    Bitmap { px: f32 },
}

impl FontFace {
    pub fn px(&self) -> f32 {
        match self {
            FontFace::Vector { px, .. } => *px,
            FontFace::Bitmap { px } => *px,
        }
    }

    /// same face at a different size, for the big center suit glyph
    pub fn with_px(&self, px: f32) -> Self {
        match self {
            FontFace::Vector { font, .. } => FontFace::Vector { font: font.clone(), px },
            FontFace::Bitmap { .. } => FontFace::Bitmap { px },
        }
    }

    pub fn draw(&self, canvas: &mut RgbaImage, color: Color, x: i32, y: i32, text: &str) {
        match self {
            FontFace::Vector { font, px } => {
                imageproc::drawing::draw_text_mut(
                    canvas,
                    color,
                    x,
                    y,
                    PxScale::from(*px),
                    font,
                    text,
                );
            }
            FontFace::Bitmap { px } => bitmap::draw(canvas, color, x, y, *px, text),
        }
    }

    pub fn measure(&self, text: &str) -> (u32, u32) {
        match self {
            FontFace::Vector { font, px } => {
                imageproc::drawing::text_size(PxScale::from(*px), font, text)
            }
            FontFace::Bitmap { px } => bitmap::measure(*px, text),
        }
    }

    pub fn height(&self) -> u32 {
        self.measure("Ag").1
    }
}

/// the three sizes the renderers draw with, loaded once per renderer.
/// fallback order: preferred family in the asset directory, then
/// system faces, then the built-in bitmap face. never errors.
#[derive(Clone)]
pub struct FontBook {
    pub title: FontFace,
    pub label: FontFace,
    pub card: FontFace,
}

impl FontBook {
    pub fn load(assets: Option<&Path>, scale: u32) -> Self {
        let s = scale.max(1) as f32;
        let font = Self::vector(assets);
        if font.is_none() {
            log::warn!("no usable font file found, using built-in bitmap face");
        }
        let face = |px: f32| match &font {
            Some(font) => FontFace::Vector { font: font.clone(), px },
            None => FontFace::Bitmap { px },
        };
        Self {
            title: face(32. * s),
            label: face(16. * s),
            card: face(24. * s),
        }
    }

    fn vector(assets: Option<&Path>) -> Option<FontArc> {
        let mut candidates: Vec<PathBuf> = Vec::new();
        if let Some(dir) = assets {
            candidates.push(dir.join("fonts").join("arial.ttf"));
            candidates.push(dir.join("arial.ttf"));
        }
        candidates.extend(SYSTEM_FONTS.iter().map(PathBuf::from));
        candidates.iter().find_map(|path| {
            let bytes = std::fs::read(path).ok()?;
            FontArc::try_from_vec(bytes).ok()
        })
    }
}

/// built-in 5x7 face. glyphs are column-encoded, bit 0 at the top,
/// upscaled to square blocks so it tracks the requested pixel size.
mod bitmap {
    use super::Color;
    use image::RgbaImage;
    use imageproc::drawing::draw_filled_rect_mut;
    use imageproc::rect::Rect;

    pub fn measure(px: f32, text: &str) -> (u32, u32) {
        let k = block(px);
        (text.chars().count() as u32 * 6 * k, 8 * k)
    }

    pub fn draw(canvas: &mut RgbaImage, color: Color, x: i32, y: i32, px: f32, text: &str) {
        let k = block(px) as i32;
        let mut cursor = x;
        for c in text.chars() {
            for (col, bits) in columns(c).iter().enumerate() {
                for row in 0..7 {
                    if bits >> row & 1 == 1 {
                        let bx = cursor + col as i32 * k;
                        let by = y + row * k;
                        draw_filled_rect_mut(
                            canvas,
                            Rect::at(bx, by).of_size(k as u32, k as u32),
                            color,
                        );
                    }
                }
            }
            cursor += 6 * k;
        }
    }

    fn block(px: f32) -> u32 {
        (px / 8.).round().max(1.) as u32
    }

    fn columns(c: char) -> [u8; 5] {
        match c.to_ascii_uppercase() {
            '0' => [0x3E, 0x51, 0x49, 0x45, 0x3E],
            '1' => [0x00, 0x42, 0x7F, 0x40, 0x00],
            '2' => [0x42, 0x61, 0x51, 0x49, 0x46],
            '3' => [0x21, 0x41, 0x45, 0x4B, 0x31],
            '4' => [0x18, 0x14, 0x12, 0x7F, 0x10],
            '5' => [0x27, 0x45, 0x45, 0x45, 0x39],
            '6' => [0x3C, 0x4A, 0x49, 0x49, 0x30],
            '7' => [0x01, 0x71, 0x09, 0x05, 0x03],
            '8' => [0x36, 0x49, 0x49, 0x49, 0x36],
            '9' => [0x06, 0x49, 0x49, 0x29, 0x1E],
            'A' => [0x7E, 0x11, 0x11, 0x11, 0x7E],
            'B' => [0x7F, 0x49, 0x49, 0x49, 0x36],
            'C' => [0x3E, 0x41, 0x41, 0x41, 0x22],
            'D' => [0x7F, 0x41, 0x41, 0x22, 0x1C],
            'E' => [0x7F, 0x49, 0x49, 0x49, 0x41],
            'F' => [0x7F, 0x09, 0x09, 0x09, 0x01],
            'G' => [0x3E, 0x41, 0x49, 0x49, 0x7A],
            'H' => [0x7F, 0x08, 0x08, 0x08, 0x7F],
            'I' => [0x00, 0x41, 0x7F, 0x41, 0x00],
            'J' => [0x20, 0x40, 0x41, 0x3F, 0x01],
            'K' => [0x7F, 0x08, 0x14, 0x22, 0x41],
            'L' => [0x7F, 0x40, 0x40, 0x40, 0x40],
            'M' => [0x7F, 0x02, 0x0C, 0x02, 0x7F],
            'N' => [0x7F, 0x04, 0x08, 0x10, 0x7F],
            'O' => [0x3E, 0x41, 0x41, 0x41, 0x3E],
            'P' => [0x7F, 0x09, 0x09, 0x09, 0x06],
            'Q' => [0x3E, 0x41, 0x51, 0x21, 0x5E],
            'R' => [0x7F, 0x09, 0x19, 0x29, 0x46],
            'S' => [0x46, 0x49, 0x49, 0x49, 0x31],
            'T' => [0x01, 0x01, 0x7F, 0x01, 0x01],
            'U' => [0x3F, 0x40, 0x40, 0x40, 0x3F],
            'V' => [0x1F, 0x20, 0x40, 0x20, 0x1F],
            'W' => [0x3F, 0x40, 0x38, 0x40, 0x3F],
            'X' => [0x63, 0x14, 0x08, 0x14, 0x63],
            'Y' => [0x07, 0x08, 0x70, 0x08, 0x07],
            'Z' => [0x61, 0x51, 0x49, 0x45, 0x43],
            '+' => [0x08, 0x08, 0x3E, 0x08, 0x08],
            '-' => [0x08, 0x08, 0x08, 0x08, 0x08],
            '.' => [0x00, 0x60, 0x60, 0x00, 0x00],
            ',' => [0x00, 0x50, 0x30, 0x00, 0x00],
            ':' => [0x00, 0x36, 0x36, 0x00, 0x00],
            '♥' => [0x06, 0x0F, 0x7E, 0x0F, 0x06],
            '♦' => [0x08, 0x1C, 0x3E, 0x1C, 0x08],
            '♠' => [0x1C, 0x5E, 0x7F, 0x5E, 0x1C],
            '♣' => [0x1A, 0x5E, 0x73, 0x5E, 0x1A],
            ' ' => [0x00, 0x00, 0x00, 0x00, 0x00],
            _ => [0x7F, 0x41, 0x41, 0x41, 0x7F],
        }
    }
}
