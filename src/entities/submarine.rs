//! The enemy submarine patrolling below the surface

use rand::Rng;
use sdl2::render::Canvas;
use sdl2::video::Window;

use super::{Bomb, SCREEN_HEIGHT, SCREEN_WIDTH, WATER_SURFACE_Y};
use crate::difficulty::Difficulty;
use crate::game::GameStatus;
use crate::geometry::{Point, Rect};
use crate::texture::GameTexture;

/// Largest vertical hop taken when the submarine turns around
pub const JITTER: i32 = 25;

/// Keep this many pixels between the hull and the waterline or seabed
const DEPTH_MARGIN: i32 = 20;

pub struct Submarine {
    pos: Point,
    vel: Point,
    facing_right: bool,
    collider: Rect,
}

impl Submarine {
    pub const WIDTH: i32 = 27;
    pub const HEIGHT: i32 = 20;

    pub const VEL: i32 = 2;

    pub const START: Point = Point::new(100, 300);

    pub const MIN_Y: i32 = WATER_SURFACE_Y + DEPTH_MARGIN;
    pub const MAX_Y: i32 = SCREEN_HEIGHT - Self::HEIGHT - DEPTH_MARGIN;

    pub fn new() -> Self {
        Self::at(Self::START, true)
    }

    pub fn at(pos: Point, facing_right: bool) -> Self {
        Self {
            pos,
            vel: Point::new(Self::VEL, 0),
            facing_right,
            collider: Rect::new(pos.x, pos.y, Self::WIDTH, Self::HEIGHT),
        }
    }

    pub fn position(&self) -> Point {
        self.pos
    }

    pub fn facing_right(&self) -> bool {
        self.facing_right
    }

    pub fn collider(&self) -> &Rect {
        &self.collider
    }

    /// Patrol one step, turning at the screen edges, then check for the bomb.
    ///
    /// A turn and a bomb hit can both happen in the same frame.
    pub fn advance<R: Rng>(
        &mut self,
        bomb: &Bomb,
        difficulty: &Difficulty,
        rng: &mut R,
        status: &mut GameStatus,
    ) {
        let dx = self.vel.x * difficulty.submarine_speed;
        if self.facing_right {
            self.pos.x += dx;
        } else {
            self.pos.x -= dx;
        }

        if self.pos.x < 0 || self.pos.x + Self::WIDTH > SCREEN_WIDTH {
            self.facing_right = !self.facing_right;
            let jitter = rng.random_range(-JITTER..=JITTER);
            let y = self.pos.y + jitter;
            if (Self::MIN_Y..=Self::MAX_Y).contains(&y) {
                self.pos.y = y;
            }
        }

        self.collider.move_to(self.pos);

        if self.collider.collides(bomb.collider()) {
            log::info!("Submarine hit at ({}, {})", self.pos.x, self.pos.y);
            *status = GameStatus::Win;
        }
    }

    pub fn draw(&self, canvas: &mut Canvas<Window>, texture: &GameTexture) {
        texture.render(canvas, self.pos.x, self.pos.y);
    }
}

impl Default for Submarine {
    fn default() -> Self {
        Self::new()
    }
}
