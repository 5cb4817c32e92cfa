//! The bomb dropped by the ship

use sdl2::render::Canvas;
use sdl2::video::Window;

use super::{Ship, SCREEN_HEIGHT, WATER_SURFACE_Y};
use crate::difficulty::Difficulty;
use crate::display::{InputEvent, Key};
use crate::geometry::{Point, Rect};
use crate::texture::GameTexture;

pub struct Bomb {
    pos: Point,
    vel: Point,
    activated: bool,
    collider: Rect,
}

impl Bomb {
    pub const WIDTH: i32 = 10;
    pub const HEIGHT: i32 = 10;

    /// Fall speed before the difficulty multiplier
    pub const VEL: i32 = 2;

    pub const PARKED: Point = Point::new(1, 1);

    pub fn new() -> Self {
        Self {
            pos: Self::PARKED,
            vel: Point::default(),
            activated: false,
            collider: Rect::new(Self::PARKED.x, Self::PARKED.y, Self::WIDTH, Self::HEIGHT),
        }
    }

    pub fn position(&self) -> Point {
        self.pos
    }

    pub fn collider(&self) -> &Rect {
        &self.collider
    }

    /// Parked bombs are neither falling nor waiting to be dropped
    pub fn is_parked(&self) -> bool {
        !self.activated && self.vel == Point::default()
    }

    /// Down drops the bomb, but only from a ship on the surface and only
    /// while no other bomb is in the water
    pub fn handle_input(&mut self, event: &InputEvent, ship: &Ship) {
        if *event != InputEvent::KeyDown(Key::Down) {
            return;
        }
        if self.is_parked() && ship.position().y <= WATER_SURFACE_Y {
            self.activated = true;
            self.vel = Point::new(0, Self::VEL);
        }
    }

    pub fn advance(&mut self, ship: &Ship, difficulty: &Difficulty) {
        if self.activated {
            self.pos = ship.position();
            self.activated = false;
        }

        self.pos.y += self.vel.y * difficulty.bomb_speed;

        if self.pos.y + Self::HEIGHT > SCREEN_HEIGHT {
            self.vel = Point::default();
            self.pos = Self::PARKED;
        }
        self.collider.move_to(self.pos);
    }

    pub fn draw(&self, canvas: &mut Canvas<Window>, texture: &GameTexture) {
        if self.is_parked() {
            return;
        }
        texture.render(canvas, self.pos.x, self.pos.y);
    }

    #[cfg(test)]
    pub(crate) fn place(&mut self, pos: Point) {
        self.pos = pos;
        self.collider.move_to(pos);
    }
}

impl Default for Bomb {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn difficulty() -> Difficulty {
        Difficulty::preset(2).unwrap()
    }

    #[test]
    fn test_starts_parked() {
        let bomb = Bomb::new();
        assert!(bomb.is_parked());
        assert_eq!(bomb.position(), Bomb::PARKED);
    }

    #[test]
    fn test_drop_snaps_to_ship_then_falls() {
        let ship = Ship::new();
        let mut bomb = Bomb::new();
        bomb.handle_input(&InputEvent::KeyDown(Key::Down), &ship);
        assert!(!bomb.is_parked());

        bomb.advance(&ship, &difficulty());
        let start = ship.position();
        assert_eq!(bomb.position(), Point::new(start.x, start.y + 4));

        bomb.advance(&ship, &difficulty());
        assert_eq!(bomb.position(), Point::new(start.x, start.y + 8));
        assert_eq!(bomb.collider().y, start.y + 8);
    }

    #[test]
    fn test_snap_happens_once() {
        let mut ship = Ship::new();
        let mut bomb = Bomb::new();
        bomb.handle_input(&InputEvent::KeyDown(Key::Down), &ship);
        bomb.advance(&ship, &difficulty());
        let x = bomb.position().x;

        ship.handle_input(&InputEvent::KeyDown(Key::Right));
        ship.advance(&difficulty());
        bomb.advance(&ship, &difficulty());
        assert_eq!(bomb.position().x, x);
    }

    #[test]
    fn test_second_drop_ignored_while_falling() {
        let ship = Ship::new();
        let mut bomb = Bomb::new();
        bomb.handle_input(&InputEvent::KeyDown(Key::Down), &ship);
        bomb.advance(&ship, &difficulty());
        bomb.advance(&ship, &difficulty());
        let y = bomb.position().y;

        bomb.handle_input(&InputEvent::KeyDown(Key::Down), &ship);
        bomb.advance(&ship, &difficulty());
        assert_eq!(bomb.position().y, y + 4);
    }

    #[test]
    fn test_other_keys_do_not_drop() {
        let ship = Ship::new();
        let mut bomb = Bomb::new();
        bomb.handle_input(&InputEvent::KeyDown(Key::Up), &ship);
        bomb.handle_input(&InputEvent::KeyUp(Key::Down), &ship);
        assert!(bomb.is_parked());
    }

    #[test]
    fn test_no_drop_from_below_the_surface() {
        let ship = Ship::at(Point::new(300, WATER_SURFACE_Y + 1));
        let mut bomb = Bomb::new();
        bomb.handle_input(&InputEvent::KeyDown(Key::Down), &ship);
        assert!(bomb.is_parked());
    }

    #[test]
    fn test_resets_at_bottom() {
        let ship = Ship::new();
        let mut bomb = Bomb::new();
        bomb.handle_input(&InputEvent::KeyDown(Key::Down), &ship);

        for _ in 0..200 {
            bomb.advance(&ship, &difficulty());
            if bomb.is_parked() {
                break;
            }
            assert!(bomb.position().y + Bomb::HEIGHT <= SCREEN_HEIGHT);
        }
        assert!(bomb.is_parked());
        assert_eq!(bomb.position(), Bomb::PARKED);
    }
}
