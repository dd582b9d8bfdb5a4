use crate::table::Color;
use crate::table::FontFace;
use image::Rgba;
use image::RgbaImage;
use image::imageops;
use imageproc::drawing::draw_filled_circle_mut;
use imageproc::drawing::draw_filled_ellipse_mut;
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::filter::gaussian_blur_f32;
use imageproc::geometric_transformations::{Interpolation, rotate_about_center};
use imageproc::rect::Rect;

pub const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// transparent working buffer
pub fn sprite(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_pixel(w.max(1), h.max(1), CLEAR)
}

/// alpha-composite a layer onto the base at (x, y)
pub fn blend(base: &mut RgbaImage, layer: &RgbaImage, x: i64, y: i64) {
    imageops::overlay(base, layer, x, y);
}

/// alpha-composite a layer centered on (cx, cy)
pub fn blend_center(base: &mut RgbaImage, layer: &RgbaImage, cx: f32, cy: f32) {
    let x = (cx - layer.width() as f32 / 2.) as i64;
    let y = (cy - layer.height() as f32 / 2.) as i64;
    imageops::overlay(base, layer, x, y);
}

fn soften(buf: RgbaImage, sigma: f32) -> RgbaImage {
    if sigma > 0. {
        gaussian_blur_f32(&buf, sigma)
    } else {
        buf
    }
}

/// disc with a border ring, drawn on a local buffer and blurred as a
/// whole so the edge comes out soft. replaces the per-pixel masked
/// blends the layer pipeline used to do.
pub fn soft_disc(
    canvas: &mut RgbaImage,
    cx: f32,
    cy: f32,
    radius: f32,
    fill: Color,
    border: Color,
    border_w: f32,
    sigma: f32,
) {
    let margin = (border_w + sigma * 3.).ceil();
    let size = ((radius + margin) * 2.) as u32;
    let center = (size as i32 / 2, size as i32 / 2);
    let mut disc = sprite(size, size);
    draw_filled_circle_mut(&mut disc, center, radius as i32, border);
    draw_filled_circle_mut(&mut disc, center, (radius - border_w).max(1.) as i32, fill);
    let disc = soften(disc, sigma);
    blend_center(canvas, &disc, cx, cy);
}

/// hard-edged rounded rectangle, composed from two bands and four
/// corner discs. pixels are replaced, not blended, so overlap between
/// the pieces is safe even for translucent colors.
pub fn fill_rounded_rect(
    buf: &mut RgbaImage,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    radius: f32,
    color: Color,
) {
    let r = radius.min(w / 2.).min(h / 2.).max(1.);
    let (x, y, w, h) = (x, y, w.max(2. * r + 1.), h.max(2. * r + 1.));
    draw_filled_rect_mut(
        buf,
        Rect::at((x + r) as i32, y as i32).of_size((w - 2. * r) as u32, h as u32),
        color,
    );
    draw_filled_rect_mut(
        buf,
        Rect::at(x as i32, (y + r) as i32).of_size(w as u32, (h - 2. * r) as u32),
        color,
    );
    for (cx, cy) in [
        (x + r, y + r),
        (x + w - r, y + r),
        (x + r, y + h - r),
        (x + w - r, y + h - r),
    ] {
        draw_filled_circle_mut(buf, (cx as i32, cy as i32), r as i32, color);
    }
}

/// bordered rounded rectangle with softened edges, same local-buffer
/// technique as [`soft_disc`]
pub fn soft_rounded_rect(
    canvas: &mut RgbaImage,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    radius: f32,
    fill: Color,
    border: Color,
    border_w: f32,
    sigma: f32,
) {
    let margin = (border_w + sigma * 3.).ceil();
    let mut rect = sprite((w + margin * 2.) as u32, (h + margin * 2.) as u32);
    fill_rounded_rect(&mut rect, margin, margin, w, h, radius, border);
    fill_rounded_rect(
        &mut rect,
        margin + border_w,
        margin + border_w,
        w - border_w * 2.,
        h - border_w * 2.,
        (radius - border_w).max(1.),
        fill,
    );
    let rect = soften(rect, sigma);
    blend(canvas, &rect, (x - margin) as i64, (y - margin) as i64);
}

/// soft elliptical shadow under chips and buttons
pub fn soft_shadow(canvas: &mut RgbaImage, cx: f32, cy: f32, rx: f32, ry: f32, sigma: f32) {
    let margin = (sigma * 3.).ceil();
    let size_x = ((rx + margin) * 2.) as u32;
    let size_y = ((ry + margin) * 2.) as u32;
    let mut shadow = sprite(size_x, size_y);
    draw_filled_ellipse_mut(
        &mut shadow,
        (size_x as i32 / 2, size_y as i32 / 2),
        rx as i32,
        ry as i32,
        Rgba([0, 0, 0, 80]),
    );
    let shadow = soften(shadow, sigma);
    blend_center(canvas, &shadow, cx, cy);
}

/// composite a sprite at (cx, cy) rotated by `degrees`
/// counterclockwise. the sprite is first centered in a square buffer
/// sized to its bounding diagonal so rotation cannot clip corners.
pub fn blend_rotated(canvas: &mut RgbaImage, card: &RgbaImage, cx: f32, cy: f32, degrees: f32) {
    if degrees == 0. {
        blend_center(canvas, card, cx, cy);
        return;
    }
    let (w, h) = (card.width() as f32, card.height() as f32);
    let diagonal = (w * w + h * h).sqrt().ceil() as u32;
    let mut square = sprite(diagonal, diagonal);
    blend(
        &mut square,
        card,
        ((diagonal - card.width()) / 2) as i64,
        ((diagonal - card.height()) / 2) as i64,
    );
    let rotated = rotate_about_center(
        &square,
        -degrees.to_radians(),
        Interpolation::Bicubic,
        CLEAR,
    );
    blend_center(canvas, &rotated, cx, cy);
}

/// text over a blur-softened rounded plate, for legibility against
/// the table felt. (x, y) is the text's top-left corner.
pub fn text_plate(
    canvas: &mut RgbaImage,
    face: &FontFace,
    text: &str,
    x: f32,
    y: f32,
    fg: Color,
    bg: Color,
    pad: f32,
    sigma: f32,
) {
    let (tw, th) = face.measure(text);
    let (tw, th) = (tw as f32, th as f32);
    let margin = (sigma * 3.).ceil();
    let (pw, ph) = (tw + pad * 2. + 20., th + pad * 2.);
    let mut plate = sprite((pw + margin * 2.) as u32, (ph + margin * 2.) as u32);
    fill_rounded_rect(&mut plate, margin, margin, pw, ph, ph / 2., bg);
    let plate = soften(plate, sigma);
    blend(
        canvas,
        &plate,
        (x - pad - 10. - margin) as i64,
        (y - pad - margin) as i64,
    );
    face.draw(canvas, fg, x as i32, y as i32, text);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opaque(p: &Rgba<u8>) -> bool {
        p.0[3] > 0
    }

    #[test]
    fn disc_lands_where_asked() {
        let mut canvas = sprite(100, 100);
        soft_disc(
            &mut canvas,
            50.,
            50.,
            20.,
            Rgba([200, 0, 0, 255]),
            Rgba([0, 0, 0, 255]),
            2.,
            0.5,
        );
        assert!(opaque(canvas.get_pixel(50, 50)));
        assert!(!opaque(canvas.get_pixel(5, 5)));
    }

    #[test]
    fn rounded_rect_skips_corners() {
        let mut buf = sprite(100, 100);
        fill_rounded_rect(&mut buf, 10., 10., 80., 60., 20., Rgba([255, 255, 255, 255]));
        assert!(opaque(buf.get_pixel(50, 40)));
        assert!(!opaque(buf.get_pixel(11, 11)));
    }

    #[test]
    fn rotation_does_not_clip() {
        // a long thin sprite rotated 45 degrees keeps its far corners
        let mut canvas = sprite(400, 400);
        let card = RgbaImage::from_pixel(40, 120, Rgba([255, 255, 255, 255]));
        blend_rotated(&mut canvas, &card, 200., 200., 45.);
        let lit = canvas.pixels().filter(|p| opaque(*p)).count();
        let area = 40 * 120;
        assert!(lit > area * 9 / 10);
    }

    #[test]
    fn unrotated_blend_is_centered() {
        let mut canvas = sprite(100, 100);
        let card = RgbaImage::from_pixel(10, 10, Rgba([255, 255, 255, 255]));
        blend_rotated(&mut canvas, &card, 50., 50., 0.);
        assert!(opaque(canvas.get_pixel(50, 50)));
        assert!(!opaque(canvas.get_pixel(70, 70)));
    }
}
