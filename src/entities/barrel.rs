//! Depth-charge barrels fired upward by the submarine
//!
//! Barrels live in a fixed pool. An idle barrel waits below the screen at
//! its own slot; firing teleports it to the submarine, and reaching the
//! surface (or the ship) sends it back to its slot.

use sdl2::render::Canvas;
use sdl2::video::Window;

use super::{Ship, Submarine, SCREEN_HEIGHT, WATER_SURFACE};
use crate::difficulty::Difficulty;
use crate::game::GameStatus;
use crate::geometry::{Point, Rect};
use crate::texture::GameTexture;

pub const BARREL_COUNT: usize = 9;

/// Acceleration counts at which the speed bonus grows by one
const BONUS_STEPS: [u32; 4] = [10, 20, 30, 40];

/// A barrel only moves on frames where `acceleration % 3 == 1`
const MOVE_EVERY: u32 = 3;

pub struct Barrel {
    slot: usize,
    pos: Point,
    vel: Point,
    available: bool,
    activated: bool,
    acceleration: u32,
    speed_bonus: i32,
    collider: Rect,
}

impl Barrel {
    pub const WIDTH: i32 = 10;
    pub const HEIGHT: i32 = 15;

    /// Rise speed before difficulty and bonus, negative is up
    pub const VEL: i32 = -1;

    pub fn new(slot: usize) -> Self {
        let pos = Self::parked_at(slot);
        Self {
            slot,
            pos,
            vel: Point::default(),
            available: true,
            activated: false,
            acceleration: 0,
            speed_bonus: 0,
            collider: Rect::new(pos.x, pos.y, Self::WIDTH, Self::HEIGHT),
        }
    }

    /// Off-screen resting place for an idle barrel
    pub fn parked_at(slot: usize) -> Point {
        Point::new(10 + 20 * slot as i32, SCREEN_HEIGHT + 20)
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn position(&self) -> Point {
        self.pos
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn acceleration(&self) -> u32 {
        self.acceleration
    }

    pub fn speed_bonus(&self) -> i32 {
        self.speed_bonus
    }

    pub fn collider(&self) -> &Rect {
        &self.collider
    }

    /// Mark the barrel as fired. It jumps to the submarine on its next advance.
    pub fn activate(&mut self) {
        self.available = false;
        self.activated = true;
    }

    /// Send the barrel back to its slot, idle and at rest
    pub fn reset(&mut self) {
        self.pos = Self::parked_at(self.slot);
        self.vel = Point::default();
        self.available = true;
        self.activated = false;
        self.acceleration = 0;
        self.speed_bonus = 0;
        self.collider.move_to(self.pos);
    }

    pub fn advance(
        &mut self,
        submarine: &Submarine,
        ship: &Ship,
        difficulty: &Difficulty,
        status: &mut GameStatus,
    ) {
        if self.available {
            return;
        }

        if self.activated {
            self.pos = submarine.position();
            self.vel = Point::new(0, Self::VEL);
            self.activated = false;
        }

        self.acceleration = self.acceleration.saturating_add(1);
        if BONUS_STEPS.contains(&self.acceleration) {
            self.speed_bonus += 1;
        }

        if self.acceleration % MOVE_EVERY == 1 {
            let bonus = self.vel.y.signum() * self.speed_bonus;
            self.pos.y += self.vel.y * difficulty.barrel_speed + bonus;
        }
        self.collider.move_to(self.pos);

        if self.collider.collides(ship.collider()) {
            log::info!("Barrel {} hit the ship at ({}, {})", self.slot, self.pos.x, self.pos.y);
            *status = GameStatus::Lose;
        } else if self.collider.collides(&WATER_SURFACE) {
            log::trace!("Barrel {} surfaced", self.slot);
            self.reset();
        }
    }

    pub fn draw(&self, canvas: &mut Canvas<Window>, texture: &GameTexture) {
        if self.available {
            return;
        }
        texture.render(canvas, self.pos.x, self.pos.y);
    }
}

/// The fixed set of barrels, scanned in slot order
pub struct BarrelPool {
    barrels: [Barrel; BARREL_COUNT],
}

impl BarrelPool {
    pub fn new() -> Self {
        Self {
            barrels: std::array::from_fn(Barrel::new),
        }
    }

    /// Fire the first idle barrel. Returns its slot, or `None` if every
    /// barrel is already in the water.
    pub fn activate_next(&mut self) -> Option<usize> {
        let mut shot = None;
        for barrel in &mut self.barrels {
            if shot.is_none() && barrel.is_available() {
                barrel.activate();
                shot = Some(barrel.slot());
            }
        }
        shot
    }

    pub fn advance(
        &mut self,
        submarine: &Submarine,
        ship: &Ship,
        difficulty: &Difficulty,
        status: &mut GameStatus,
    ) {
        for barrel in &mut self.barrels {
            barrel.advance(submarine, ship, difficulty, status);
        }
    }

    pub fn available_count(&self) -> usize {
        self.barrels.iter().filter(|b| b.is_available()).count()
    }

    pub fn draw(&self, canvas: &mut Canvas<Window>, texture: &GameTexture) {
        for barrel in &self.barrels {
            barrel.draw(canvas, texture);
        }
    }
}

impl Default for BarrelPool {
    fn default() -> Self {
        Self::new()
    }
}
