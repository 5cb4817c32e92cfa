//! Image assets loaded once at startup

use std::path::Path;

use sdl2::render::TextureCreator;
use sdl2::video::WindowContext;

use crate::texture::GameTexture;

pub const SEAFLOOR_FILE: &str = "seafloor.bmp";
pub const SHIP_FILE: &str = "battleShip.bmp";
pub const BOMB_FILE: &str = "bomb.bmp";
pub const SUBMARINE_FILE: &str = "submarine.bmp";
pub const BARREL_FILE: &str = "barrel.bmp";
pub const WIN_FILE: &str = "win.bmp";
pub const LOSE_FILE: &str = "lose.bmp";
pub const MENU_FILE: &str = "menu.bmp";

/// Every texture the game draws
pub struct Assets<'a> {
    pub seafloor: GameTexture<'a>,
    pub ship: GameTexture<'a>,
    pub bomb: GameTexture<'a>,
    pub submarine: GameTexture<'a>,
    pub barrel: GameTexture<'a>,
    pub win: GameTexture<'a>,
    pub lose: GameTexture<'a>,
    pub menu: GameTexture<'a>,
}

impl<'a> Assets<'a> {
    /// Load all images from `dir`. Missing files leave blank textures.
    pub fn load(creator: &'a TextureCreator<WindowContext>, dir: &Path) -> Self {
        let load = |name: &str| GameTexture::load_or_blank(creator, dir.join(name));

        let assets = Self {
            seafloor: load(SEAFLOOR_FILE),
            ship: load(SHIP_FILE),
            bomb: load(BOMB_FILE),
            submarine: load(SUBMARINE_FILE),
            barrel: load(BARREL_FILE),
            win: load(WIN_FILE),
            lose: load(LOSE_FILE),
            menu: load(MENU_FILE),
        };

        let missing = assets.missing_count();
        if missing > 0 {
            log::error!("Failed to load media: {} of 8 images missing", missing);
        } else {
            log::info!("Loaded media from {}", dir.display());
        }
        assets
    }

    fn missing_count(&self) -> usize {
        [
            &self.seafloor,
            &self.ship,
            &self.bomb,
            &self.submarine,
            &self.barrel,
            &self.win,
            &self.lose,
            &self.menu,
        ]
        .iter()
        .filter(|t| !t.is_loaded())
        .count()
    }
}
