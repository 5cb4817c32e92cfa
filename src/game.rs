//! Round state and the phase state machine
//!
//! `GameState` owns everything that changes during a round. The main loop
//! feeds it input events, calls `update` once per frame and then `draw`.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use sdl2::pixels::Color;

use crate::assets::Assets;
use crate::difficulty::Difficulty;
use crate::display::{Display, InputEvent, Key};
use crate::entities::{BarrelPool, Bomb, Ship, Submarine, WATER_SURFACE};
use crate::spawn::SpawnScheduler;

const BACKGROUND: Color = Color::RGB(0xFF, 0xFF, 0xFF);
const WATERLINE: Color = Color::RGB(0x00, 0x00, 0x00);

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for a difficulty choice
    Menu,
    Playing,
    /// A barrel reached the ship
    Lose,
    /// The bomb sank the submarine
    Win,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Lose | GameStatus::Win)
    }
}

pub struct GameState {
    status: GameStatus,
    difficulty: Difficulty,
    ship: Ship,
    bomb: Bomb,
    submarine: Submarine,
    barrels: BarrelPool,
    scheduler: SpawnScheduler,
    rng: Pcg32,
    quit: bool,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        Self {
            status: GameStatus::Menu,
            difficulty: Difficulty::default(),
            ship: Ship::new(),
            bomb: Bomb::new(),
            submarine: Submarine::new(),
            barrels: BarrelPool::new(),
            scheduler: SpawnScheduler::new(),
            rng: Pcg32::seed_from_u64(seed),
            quit: false,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn difficulty(&self) -> &Difficulty {
        &self.difficulty
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn bomb(&self) -> &Bomb {
        &self.bomb
    }

    pub fn submarine(&self) -> &Submarine {
        &self.submarine
    }

    pub fn barrels(&self) -> &BarrelPool {
        &self.barrels
    }

    /// Route one input event according to the current phase.
    ///
    /// Quit is honoured in every phase.
    pub fn handle_event(&mut self, event: &InputEvent, now_ms: u64) {
        if matches!(event, InputEvent::Quit | InputEvent::KeyDown(Key::Escape)) {
            self.quit = true;
            return;
        }

        match self.status {
            GameStatus::Menu => {
                // Arrows held through the menu must balance their release
                self.ship.handle_input(event);
                self.handle_menu_input(event, now_ms);
            },
            GameStatus::Playing => {
                self.ship.handle_input(event);
                self.bomb.handle_input(event, &self.ship);
            },
            GameStatus::Lose | GameStatus::Win => {},
        }
    }

    fn handle_menu_input(&mut self, event: &InputEvent, now_ms: u64) {
        if let InputEvent::KeyDown(Key::Digit(level)) = event {
            self.select_difficulty(*level, now_ms);
        }
    }

    /// Lock in a preset and start playing. Only valid from the menu.
    pub fn select_difficulty(&mut self, level: u8, now_ms: u64) -> bool {
        if self.status != GameStatus::Menu {
            return false;
        }
        let Some(difficulty) = Difficulty::preset(level) else {
            return false;
        };

        self.difficulty = difficulty;
        self.scheduler.arm(now_ms, &self.difficulty, &mut self.rng);
        log::info!("Difficulty {} selected ({})", level, self.difficulty);
        self.set_status(GameStatus::Playing);
        true
    }

    /// Advance one frame. Does nothing outside the Playing phase.
    pub fn update(&mut self, now_ms: u64) {
        if self.status != GameStatus::Playing {
            return;
        }

        let mut status = self.status;

        self.ship.advance(&self.difficulty);
        self.bomb.advance(&self.ship, &self.difficulty);
        self.submarine
            .advance(&self.bomb, &self.difficulty, &mut self.rng, &mut status);

        if status == GameStatus::Playing {
            self.scheduler
                .tick(now_ms, &self.difficulty, &mut self.rng, &mut self.barrels);
            self.barrels
                .advance(&self.submarine, &self.ship, &self.difficulty, &mut status);
        }

        self.set_status(status);
    }

    fn set_status(&mut self, status: GameStatus) {
        if status != self.status {
            log::info!("Phase {:?} -> {:?}", self.status, status);
            self.status = status;
        }
    }

    /// Render the current phase to the back buffer
    pub fn draw(&self, display: &mut Display, assets: &Assets) {
        display.clear(BACKGROUND);

        match self.status {
            GameStatus::Menu => assets.menu.render(display.canvas_mut(), 0, 0),
            GameStatus::Playing => {
                assets.seafloor.render(display.canvas_mut(), 0, 0);
                display.outline(WATER_SURFACE, WATERLINE);

                let canvas = display.canvas_mut();
                self.ship.draw(canvas, &assets.ship);
                self.submarine.draw(canvas, &assets.submarine);
                self.bomb.draw(canvas, &assets.bomb);
                self.barrels.draw(canvas, &assets.barrel);
            },
            GameStatus::Win => assets.win.render(display.canvas_mut(), 0, 0),
            GameStatus::Lose => assets.lose.render(display.canvas_mut(), 0, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::BARREL_COUNT;
    use crate::geometry::Point;

    fn playing(level: u8) -> GameState {
        let mut state = GameState::new(42);
        state.handle_event(&InputEvent::KeyDown(Key::Digit(level)), 0);
        assert_eq!(state.status(), GameStatus::Playing);
        state
    }

    #[test]
    fn test_starts_in_menu() {
        let state = GameState::new(1);
        assert_eq!(state.status(), GameStatus::Menu);
        assert!(!state.quit_requested());
    }

    #[test]
    fn test_key_two_selects_preset() {
        let mut state = GameState::new(1);
        state.handle_event(&InputEvent::KeyDown(Key::Digit(2)), 0);
        assert_eq!(state.status(), GameStatus::Playing);
        assert_eq!(
            *state.difficulty(),
            Difficulty {
                barrel_frequency: 2,
                barrel_speed: 1,
                ship_speed: 2,
                bomb_speed: 2,
                submarine_speed: 2,
            }
        );
    }

    #[test]
    fn test_menu_ignores_other_keys() {
        let mut state = GameState::new(1);
        state.handle_event(&InputEvent::KeyDown(Key::Left), 0);
        state.handle_event(&InputEvent::KeyUp(Key::Digit(1)), 0);
        assert_eq!(state.status(), GameStatus::Menu);

        state.update(10_000);
        assert_eq!(state.ship().position(), Ship::START);
        assert_eq!(state.barrels().available_count(), BARREL_COUNT);
    }

    #[test]
    fn test_arrow_held_through_menu_balances_on_release() {
        let mut state = GameState::new(1);
        state.handle_event(&InputEvent::KeyDown(Key::Right), 0);
        state.handle_event(&InputEvent::KeyDown(Key::Digit(2)), 0);
        assert_eq!(state.status(), GameStatus::Playing);

        // Still held: the ship moves right
        state.update(1);
        assert_eq!(state.ship().position().x, Ship::START.x + 2);

        state.handle_event(&InputEvent::KeyUp(Key::Right), 1);
        assert_eq!(state.ship().velocity(), Point::new(0, 0));
        for frame in 2..50 {
            state.update(frame);
        }
        assert_eq!(state.ship().position().x, Ship::START.x + 2);
    }

    #[test]
    fn test_difficulty_locked_after_menu() {
        let mut state = playing(1);
        state.handle_event(&InputEvent::KeyDown(Key::Digit(4)), 0);
        assert_eq!(*state.difficulty(), Difficulty::preset(1).unwrap());
        assert!(!state.select_difficulty(3, 0));
    }

    #[test]
    fn test_quit_in_every_phase() {
        let mut state = GameState::new(1);
        state.handle_event(&InputEvent::Quit, 0);
        assert!(state.quit_requested());

        let mut state = playing(2);
        state.handle_event(&InputEvent::KeyDown(Key::Escape), 0);
        assert!(state.quit_requested());

        let mut state = playing(2);
        state.status = GameStatus::Lose;
        state.handle_event(&InputEvent::Quit, 0);
        assert!(state.quit_requested());
    }

    #[test]
    fn test_playing_routes_input_to_ship() {
        let mut state = playing(2);
        state.handle_event(&InputEvent::KeyDown(Key::Right), 0);
        state.update(1);
        assert_eq!(state.ship().position().x, Ship::START.x + 2);
    }

    #[test]
    fn test_down_drops_bomb() {
        let mut state = playing(2);
        assert!(state.bomb().is_parked());
        state.handle_event(&InputEvent::KeyDown(Key::Down), 0);
        state.update(1);
        assert!(!state.bomb().is_parked());
        assert_eq!(state.bomb().position().x, Ship::START.x);
    }

    #[test]
    fn test_spawn_fires_one_barrel_when_due() {
        let mut state = playing(2);
        state.update(0);
        assert_eq!(state.barrels().available_count(), BARREL_COUNT);

        let due = state.scheduler.last_spawn_ms() + state.scheduler.interval_ms();
        state.update(due);
        assert_eq!(state.barrels().available_count(), BARREL_COUNT - 1);

        state.update(due + 1);
        assert_eq!(state.barrels().available_count(), BARREL_COUNT - 1);
    }

    #[test]
    fn test_bomb_on_submarine_wins() {
        let mut state = playing(2);
        let speed = Submarine::VEL * state.difficulty().submarine_speed;
        state.submarine = Submarine::at(Point::new(200, 300), true);
        state.bomb.place(Point::new(200 + speed, 300));

        state.update(0);
        assert_eq!(state.status(), GameStatus::Win);
        assert!(state.status().is_terminal());
    }

    #[test]
    fn test_barrel_on_ship_loses() {
        let mut state = playing(2);
        state.submarine = Submarine::at(Point::new(Ship::START.x + 5, 300), true);
        assert_eq!(state.barrels.activate_next(), Some(0));

        let mut frames = 0;
        while state.status() == GameStatus::Playing && frames < 2_000 {
            state.update(0);
            frames += 1;
        }
        assert_eq!(state.status(), GameStatus::Lose);
    }

    #[test]
    fn test_terminal_phase_freezes_entities() {
        let mut state = playing(2);
        state.handle_event(&InputEvent::KeyDown(Key::Right), 0);
        state.status = GameStatus::Win;

        let ship = state.ship().position();
        let sub = state.submarine().position();
        state.update(100_000);
        assert_eq!(state.ship().position(), ship);
        assert_eq!(state.submarine().position(), sub);
        assert_eq!(state.status(), GameStatus::Win);
    }

    #[test]
    fn test_same_seed_same_round() {
        let run = || {
            let mut state = playing(4);
            for frame in 0..3_000u64 {
                state.update(frame * 16);
                if state.status() != GameStatus::Playing {
                    break;
                }
            }
            (
                state.status(),
                state.submarine().position(),
                state.barrels().available_count(),
            )
        };
        assert_eq!(run(), run());
    }
}
