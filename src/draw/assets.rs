use crate::cards::Card;
use image::RgbaImage;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;

/// read-only image assets, loaded lazily and memoized per renderer
/// instance (never process-wide). every accessor can come back empty:
/// callers degrade to programmatic fallback drawings, so an empty or
/// absent asset directory still renders a full table.
///
/// expected layout under the root:
///   cards-images/<code>.png   one face per two-character card code
///   cards-images/back.png     shared card back
///   avatar.png, logo.png      optional decorations
pub struct AssetLibrary {
    root: Option<PathBuf>,
    cards: HashMap<String, Option<RgbaImage>>,
    back: Option<Option<RgbaImage>>,
    avatar: Option<Option<RgbaImage>>,
    logo: Option<Option<RgbaImage>>,
}

impl AssetLibrary {
    pub fn new(root: Option<PathBuf>) -> Self {
        Self {
            root,
            cards: HashMap::new(),
            back: None,
            avatar: None,
            logo: None,
        }
    }

    pub fn card(&mut self, card: Card) -> Option<&RgbaImage> {
        let root = self.root.as_deref();
        self.cards
            .entry(card.code())
            .or_insert_with(|| {
                root.and_then(|r| load(&r.join("cards-images").join(format!("{}.png", card.code()))))
            })
            .as_ref()
    }

    pub fn back(&mut self) -> Option<&RgbaImage> {
        let root = self.root.as_deref();
        self.back
            .get_or_insert_with(|| root.and_then(|r| load(&r.join("cards-images").join("back.png"))))
            .as_ref()
    }

    pub fn avatar(&mut self) -> Option<&RgbaImage> {
        let root = self.root.as_deref();
        self.avatar
            .get_or_insert_with(|| root.and_then(|r| load(&r.join("avatar.png"))))
            .as_ref()
    }

    pub fn logo(&mut self) -> Option<&RgbaImage> {
        let root = self.root.as_deref();
        self.logo
            .get_or_insert_with(|| root.and_then(|r| load(&r.join("logo.png"))))
            .as_ref()
    }
}

fn load(path: &Path) -> Option<RgbaImage> {
    if !path.exists() {
        log::debug!("{:<32}{:<32}", "asset not found", path.display());
        return None;
    }
    match image::open(path) {
        Ok(img) => Some(img.to_rgba8()),
        Err(e) => {
            log::warn!("{:<32}{:<32}", "unreadable asset", format!("{}: {}", path.display(), e));
            None
        }
    }
}
