use sdl2::event::Event;
use sdl2::image::{InitFlag, Sdl2ImageContext};
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;

use crate::geometry::Rect;

pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;

pub struct Display {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    // Keeps SDL_image loaded for as long as textures can be decoded
    _image_context: Sdl2ImageContext,
}

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    /// Number row 1-4, used for difficulty selection
    Digit(u8),
    Escape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

impl Display {
    /// Create display with custom resolution and VSync settings
    pub fn with_options(
        title: &str,
        width: u32,
        height: u32,
        vsync: bool,
    ) -> Result<(Self, TextureCreator<WindowContext>), String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        if !sdl2::hint::set("SDL_RENDER_SCALE_QUALITY", "1") {
            log::warn!("Linear texture filtering not enabled");
        }

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let mut canvas_builder = window.into_canvas().accelerated();
        if vsync {
            canvas_builder = canvas_builder.present_vsync();
        }
        let canvas = canvas_builder.build().map_err(|e| e.to_string())?;

        let image_context = sdl2::image::init(InitFlag::PNG)?;

        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context.event_pump()?;

        log::info!("Display {}x{} ready (vsync: {})", width, height, vsync);

        Ok((
            Self {
                canvas,
                event_pump,
                _image_context: image_context,
            },
            texture_creator,
        ))
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas<Window> {
        &mut self.canvas
    }

    pub fn clear(&mut self, color: Color) {
        self.canvas.set_draw_color(color);
        self.canvas.clear();
    }

    /// Draw a 1px rectangle outline
    pub fn outline(&mut self, rect: Rect, color: Color) {
        self.canvas.set_draw_color(color);
        if let Err(e) = self.canvas.draw_rect(rect.into()) {
            log::trace!("draw_rect failed: {}", e);
        }
    }

    pub fn present(&mut self) {
        self.canvas.present();
    }

    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => events.push(InputEvent::Quit),
                Event::KeyDown {
                    keycode: Some(k),
                    repeat: false,
                    ..
                } => {
                    if let Some(key) = map_key(k) {
                        events.push(InputEvent::KeyDown(key));
                    }
                },
                Event::KeyUp {
                    keycode: Some(k),
                    repeat: false,
                    ..
                } => {
                    if let Some(key) = map_key(k) {
                        events.push(InputEvent::KeyUp(key));
                    }
                },
                _ => {},
            }
        }

        events
    }
}

fn map_key(key: Keycode) -> Option<Key> {
    match key {
        Keycode::Left => Some(Key::Left),
        Keycode::Right => Some(Key::Right),
        Keycode::Up => Some(Key::Up),
        Keycode::Down => Some(Key::Down),
        Keycode::Num1 | Keycode::Kp1 => Some(Key::Digit(1)),
        Keycode::Num2 | Keycode::Kp2 => Some(Key::Digit(2)),
        Keycode::Num3 | Keycode::Kp3 => Some(Key::Digit(3)),
        Keycode::Num4 | Keycode::Kp4 => Some(Key::Digit(4)),
        Keycode::Escape => Some(Key::Escape),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_key_arrows_and_digits() {
        assert_eq!(map_key(Keycode::Left), Some(Key::Left));
        assert_eq!(map_key(Keycode::Down), Some(Key::Down));
        assert_eq!(map_key(Keycode::Num2), Some(Key::Digit(2)));
        assert_eq!(map_key(Keycode::Kp4), Some(Key::Digit(4)));
    }

    #[test]
    fn test_map_key_ignores_unused_keys() {
        assert_eq!(map_key(Keycode::Num5), None);
        assert_eq!(map_key(Keycode::Space), None);
    }
}
