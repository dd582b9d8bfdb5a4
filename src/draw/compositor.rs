use super::assets::AssetLibrary;
use super::cardart::CardRenderer;
use super::chips::ChipRenderer;
use super::error::RenderError;
use super::seats::PlayerRenderer;
use super::surface::TableSurfaceRenderer;
use crate::cards::Card;
use crate::clamp_players;
use crate::state::GameState;
use crate::state::Position;
use crate::state::Status;
use crate::table::FontBook;
use crate::table::TableConfig;
use image::RgbaImage;
use image::imageops;
use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;
use std::path::PathBuf;

/// everything that never changes across spots at the same table
/// shape: background, felt, seat discs, panel skeletons. cached per
/// key because batch jobs render thousands of spots over a handful of
/// table shapes. the discs and skeletons are status-colored, so the
/// key carries each player's status: a fold or an action change must
/// invalidate, not repaint stale colors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateKey {
    pub players: usize,
    pub hero: Option<Position>,
    pub seats: Vec<(Position, Status)>,
}

/// the top-level renderer. owns the font book, the asset cache, and
/// the static-layer templates; one instance serves a whole batch.
///
/// every frame is drawn at `scale`x supersampling and downsampled
/// once at the end, so the ellipse and text edges come out smooth
/// without per-primitive antialiasing.
pub struct TableRenderer {
    scale: u32,
    fonts: FontBook,
    assets: AssetLibrary,
    templates: HashMap<TemplateKey, RgbaImage>,
}

impl TableRenderer {
    pub fn new(scale: u32, assets_root: Option<PathBuf>) -> Self {
        let scale = scale.max(1);
        Self {
            scale,
            fonts: FontBook::load(assets_root.as_deref(), scale),
            assets: AssetLibrary::new(assets_root),
            templates: HashMap::new(),
        }
    }

    fn config(&self, game: &GameState) -> TableConfig {
        TableConfig::new(game.players.len(), self.scale)
    }

    fn key(&self, game: &GameState) -> TemplateKey {
        TemplateKey {
            players: clamp_players(game.players.len()),
            hero: game.hero().map(|p| p.position),
            seats: game
                .players
                .iter()
                .map(|p| (p.position, p.status(game.active_position)))
                .collect(),
        }
    }

    /// cached static layer for this table shape, built on first use
    pub fn static_layer(&mut self, game: &GameState) -> &RgbaImage {
        let key = self.key(game);
        if !self.templates.contains_key(&key) {
            let layer = self.build_static_layer(game);
            log::info!("{:<32}{:<32}", "caching table template", game.scenario());
            self.templates.insert(key.clone(), layer);
        }
        &self.templates[&key]
    }

    fn build_static_layer(&mut self, game: &GameState) -> RgbaImage {
        let config = self.config(game);
        let seats = game.seat_map();
        let mut canvas =
            RgbaImage::from_pixel(config.width, config.height, config.palette.background);
        TableSurfaceRenderer::new(&config, &self.fonts).draw_table(&mut canvas, &mut self.assets);
        let players = PlayerRenderer::new(&config, &self.fonts);
        players.draw_discs(&mut canvas, game, &seats, &mut self.assets);
        players.draw_skeletons(&mut canvas, game, &seats);
        canvas
    }

    /// composite one spot. layer order is fixed: template (felt,
    /// discs, skeletons), then cards, then panels over the card
    /// bottoms, then chips, then text overlays.
    pub fn render(
        &mut self,
        game: &GameState,
        hole: Option<(Card, Card)>,
    ) -> Result<RgbaImage, RenderError> {
        let config = self.config(game);
        let seats = game.seat_map();
        let mut canvas = self.static_layer(game).clone();
        let cards = CardRenderer::new(&config, &self.fonts);
        cards.draw_opponent_cards(&mut canvas, &mut self.assets, game, &seats);
        if let Some(hole) = hole {
            cards.draw_hero_cards(&mut canvas, &mut self.assets, hole);
        }
        PlayerRenderer::new(&config, &self.fonts).draw_panels(&mut canvas, game, &seats);
        ChipRenderer::new(&config, &self.fonts).draw_bets(&mut canvas, game, &seats)?;
        TableSurfaceRenderer::new(&config, &self.fonts).draw_overlays(&mut canvas, game);
        Ok(self.downsample(canvas))
    }

    pub fn render_to_path(
        &mut self,
        game: &GameState,
        hole: Option<(Card, Card)>,
        path: &Path,
    ) -> Result<(), RenderError> {
        let image = self.render(game, hole)?;
        image.save(path)?;
        Ok(())
    }

    pub fn render_png(
        &mut self,
        game: &GameState,
        hole: Option<(Card, Card)>,
    ) -> Result<Vec<u8>, RenderError> {
        let image = self.render(game, hole)?;
        let mut bytes = Cursor::new(Vec::new());
        image.write_to(&mut bytes, image::ImageFormat::Png)?;
        Ok(bytes.into_inner())
    }

    fn downsample(&self, canvas: RgbaImage) -> RgbaImage {
        if self.scale > 1 {
            imageops::resize(
                &canvas,
                crate::BASE_WIDTH,
                crate::BASE_HEIGHT,
                imageops::FilterType::Lanczos3,
            )
        } else {
            canvas
        }
    }
}
