//! Game entities
//!
//! Each entity owns its position, velocity and collision box. The box is
//! moved together with the position so a collision test always sees the
//! current frame's placement.

mod barrel;
mod bomb;
mod ship;
mod submarine;

pub use barrel::{BarrelPool, BARREL_COUNT};
pub use bomb::Bomb;
pub use ship::Ship;
pub use submarine::Submarine;

use crate::display::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::geometry::Rect;

pub const SCREEN_WIDTH: i32 = DEFAULT_WIDTH as i32;
pub const SCREEN_HEIGHT: i32 = DEFAULT_HEIGHT as i32;

pub const WATER_SURFACE_Y: i32 = 100;

/// The strip barrels are recycled at, also drawn as the waterline
pub const WATER_SURFACE: Rect = Rect::new(0, WATER_SURFACE_Y, SCREEN_WIDTH, 1);
