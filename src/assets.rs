use std::collections::HashMap;
use std::path::Path;

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::error::{Result, SimError};
use crate::render::SpriteId;

impl SpriteId {
    /// On-screen size the sprite is scaled to at load time.
    pub fn size(self) -> (u32, u32) {
        match self {
            SpriteId::Electron => (10, 10),
            SpriteId::SliderCursor => (8, 64),
        }
    }
}

/// Sprites decoded once at startup and never modified afterwards.
#[derive(Default)]
pub struct Assets {
    sprites: HashMap<SpriteId, RgbaImage>,
}

impl Assets {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads every known sprite found in `dir`. Missing files are skipped so
    /// the painter can fall back to primitives; unreadable ones are errors.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut sprites = HashMap::new();
        for id in SpriteId::ALL {
            let path = dir.join(id.file_name());
            if !path.exists() {
                log::warn!("sprite {} not found, drawing a placeholder", path.display());
                continue;
            }
            let image = image::open(&path).map_err(|source| SimError::Asset {
                path: path.display().to_string(),
                source,
            })?;
            let (w, h) = id.size();
            sprites.insert(id, imageops::resize(&image.to_rgba8(), w, h, FilterType::Triangle));
        }
        log::info!("loaded {} sprites from {}", sprites.len(), dir.display());
        Ok(Self { sprites })
    }

    pub fn get(&self, id: SpriteId) -> Option<&RgbaImage> {
        self.sprites.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SpriteId, &RgbaImage)> {
        self.sprites.iter().map(|(id, image)| (*id, image))
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}
