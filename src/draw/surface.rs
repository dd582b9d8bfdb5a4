use super::assets::AssetLibrary;
use super::canvas;
use super::chips::format_bb;
use crate::state::GameState;
use crate::table::FontBook;
use crate::table::TableConfig;
use crate::table::palette;
use image::Rgba;
use image::RgbaImage;
use image::imageops;
use imageproc::drawing::draw_filled_ellipse_mut;
use imageproc::drawing::draw_hollow_ellipse_mut;

/// draws the felt and the text overlays. the felt is two stacked
/// ellipses, the lower one darker, which reads as a cheap extruded
/// edge without any real perspective.
pub struct TableSurfaceRenderer<'a> {
    config: &'a TableConfig,
    fonts: &'a FontBook,
}

impl<'a> TableSurfaceRenderer<'a> {
    pub fn new(config: &'a TableConfig, fonts: &'a FontBook) -> Self {
        Self { config, fonts }
    }

    /// static: felt, depth band, outline, logo watermark
    pub fn draw_table(&self, canvas: &mut RgbaImage, assets: &mut AssetLibrary) {
        let (cx, cy) = self.config.center();
        let rx = self.config.table_width / 2.;
        let ry = self.config.table_height / 2.;
        let depth = (self.config.table_height / 12.).max(6.);
        let felt = self.config.palette.table;
        draw_filled_ellipse_mut(
            canvas,
            (cx as i32, (cy + depth) as i32),
            rx as i32,
            ry as i32,
            palette::darker(felt, 40),
        );
        draw_filled_ellipse_mut(canvas, (cx as i32, cy as i32), rx as i32, ry as i32, felt);
        for i in 0..(3 * self.config.scale) as i32 {
            draw_hollow_ellipse_mut(
                canvas,
                (cx as i32, cy as i32),
                rx as i32 - i,
                ry as i32 - i,
                Rgba([0, 0, 0, 255]),
            );
        }
        self.draw_logo(canvas, assets);
    }

    /// faint watermark in the middle of the felt, skipped when the
    /// asset is absent
    fn draw_logo(&self, canvas: &mut RgbaImage, assets: &mut AssetLibrary) {
        let Some(logo) = assets.logo() else { return };
        let (cx, cy) = self.config.center();
        let width = (self.config.table_width * 0.25) as u32;
        let height = (width as f32 * logo.height() as f32 / logo.width() as f32) as u32;
        let mut faint = imageops::resize(logo, width, height, imageops::FilterType::Triangle);
        for p in faint.pixels_mut() {
            p.0[3] = (p.0[3] as u32 * 60 / 255) as u8;
        }
        canvas::blend_center(canvas, &faint, cx, cy - self.config.table_height * 0.05);
    }

    /// dynamic: scenario caption along the top edge, pot at the table
    /// center, each on its own softened plate
    pub fn draw_overlays(&self, canvas: &mut RgbaImage, game: &GameState) {
        let s = self.config.scale_f();
        let colors = &self.config.palette;
        let (cx, cy) = self.config.center();
        let scenario = game.scenario();
        if !scenario.is_empty() {
            let (tw, _) = self.fonts.title.measure(&scenario);
            canvas::text_plate(
                canvas,
                &self.fonts.title,
                &scenario,
                cx - tw as f32 / 2.,
                self.config.height as f32 * 0.05,
                colors.text,
                colors.text_plate,
                6. * s,
                2. * s,
            );
        }
        let pot = format!("Pot: {} BB", format_bb(game.pot));
        let (tw, _) = self.fonts.title.measure(&pot);
        canvas::text_plate(
            canvas,
            &self.fonts.title,
            &pot,
            cx - tw as f32 / 2.,
            cy - 20. * s,
            colors.text,
            colors.text_plate,
            6. * s,
            2. * s,
        );
    }
}
