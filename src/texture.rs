//! Texture handles for sprites and full-screen images
//!
//! A `GameTexture` may be blank: when an image fails to load the handle
//! stays empty, reports a 0x0 size and draws nothing.

use std::path::Path;

use sdl2::image::LoadSurface;
use sdl2::pixels::Color;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::surface::Surface;
use sdl2::video::{Window, WindowContext};

/// Pixels of this colour are treated as transparent
pub const COLOR_KEY: Color = Color::RGB(0, 0xFF, 0xFF);

/// A loaded image plus its cached dimensions
pub struct GameTexture<'a> {
    texture: Option<Texture<'a>>,
    width: u32,
    height: u32,
}

impl<'a> GameTexture<'a> {
    /// An empty handle that draws nothing
    pub fn blank() -> Self {
        Self {
            texture: None,
            width: 0,
            height: 0,
        }
    }

    /// Load an image file, colour-keying cyan to transparent
    pub fn from_file(
        creator: &'a TextureCreator<WindowContext>,
        path: impl AsRef<Path>,
    ) -> Result<Self, String> {
        let path = path.as_ref();
        let mut surface = Surface::from_file(path)
            .map_err(|e| format!("Unable to load image {}: {}", path.display(), e))?;
        surface.set_color_key(true, COLOR_KEY)?;

        let texture = creator
            .create_texture_from_surface(&surface)
            .map_err(|e| format!("Unable to create texture from {}: {}", path.display(), e))?;

        Ok(Self {
            texture: Some(texture),
            width: surface.width(),
            height: surface.height(),
        })
    }

    /// Like `from_file`, but a failure is logged and yields a blank handle
    pub fn load_or_blank(
        creator: &'a TextureCreator<WindowContext>,
        path: impl AsRef<Path>,
    ) -> Self {
        match Self::from_file(creator, path) {
            Ok(texture) => texture,
            Err(e) => {
                log::error!("{}", e);
                Self::blank()
            },
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.texture.is_some()
    }

    /// Draw the texture with its top-left corner at (x, y)
    pub fn render(&self, canvas: &mut Canvas<Window>, x: i32, y: i32) {
        let Some(texture) = &self.texture else {
            return;
        };
        let dst = sdl2::rect::Rect::new(x, y, self.width, self.height);
        if let Err(e) = canvas.copy(texture, None, dst) {
            log::trace!("texture copy failed: {}", e);
        }
    }
}

impl Default for GameTexture<'_> {
    fn default() -> Self {
        Self::blank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_texture_has_no_size() {
        let tex = GameTexture::blank();
        assert!(!tex.is_loaded());
        assert_eq!((tex.width(), tex.height()), (0, 0));
    }
}
