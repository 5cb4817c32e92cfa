//! The player's battleship

use sdl2::render::Canvas;
use sdl2::video::Window;

use super::SCREEN_WIDTH;
use crate::difficulty::Difficulty;
use crate::display::{InputEvent, Key};
use crate::geometry::{Point, Rect};
use crate::texture::GameTexture;

pub struct Ship {
    pos: Point,
    vel: Point,
    collider: Rect,
}

impl Ship {
    pub const WIDTH: i32 = 40;
    pub const HEIGHT: i32 = 20;

    /// Velocity change per arrow key
    pub const VEL: i32 = 1;

    /// Hull sits 5px below the waterline
    pub const START: Point = Point::new(300, 85);

    pub fn new() -> Self {
        Self::at(Self::START)
    }

    pub fn at(pos: Point) -> Self {
        Self {
            pos,
            vel: Point::default(),
            collider: Rect::new(pos.x, pos.y, Self::WIDTH, Self::HEIGHT),
        }
    }

    pub fn position(&self) -> Point {
        self.pos
    }

    pub fn velocity(&self) -> Point {
        self.vel
    }

    pub fn collider(&self) -> &Rect {
        &self.collider
    }

    /// Arrow keys add to the velocity on press and take it back on release
    pub fn handle_input(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown(key) => match key {
                Key::Up => self.vel.y -= Self::VEL,
                Key::Down => self.vel.y += Self::VEL,
                Key::Left => self.vel.x -= Self::VEL,
                Key::Right => self.vel.x += Self::VEL,
                _ => {},
            },
            InputEvent::KeyUp(key) => match key {
                Key::Up => self.vel.y += Self::VEL,
                Key::Down => self.vel.y -= Self::VEL,
                Key::Left => self.vel.x += Self::VEL,
                Key::Right => self.vel.x -= Self::VEL,
                _ => {},
            },
            InputEvent::Quit => {},
        }
    }

    /// Horizontal move, undone if it would leave the screen.
    ///
    /// Vertical velocity is tracked but the ship stays on the surface.
    pub fn advance(&mut self, difficulty: &Difficulty) {
        let dx = self.vel.x * difficulty.ship_speed;
        self.pos.x += dx;
        if self.pos.x < 0 || self.pos.x + Self::WIDTH > SCREEN_WIDTH {
            self.pos.x -= dx;
        }
        self.collider.move_to(self.pos);
    }

    pub fn draw(&self, canvas: &mut Canvas<Window>, texture: &GameTexture) {
        texture.render(canvas, self.pos.x, self.pos.y);
    }
}

impl Default for Ship {
    fn default() -> Self {
        Self::new()
    }
}
