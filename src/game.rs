//! Frame-driven game driver
//!
//! Owns the session and its tick clock. The platform layer calls `update`
//! once per animation frame and `handle_key` from keyboard callbacks.

use crate::consts::MAX_TICKS_PER_FRAME;
use crate::input;
use crate::renderer::Renderer;
use crate::settings::Settings;
use crate::sim::{GameEvent, Session, TickClock, tick};

pub struct Game {
    pub session: Session,
    clock: TickClock,
    /// Score waiting to be shown on the readout
    pending_score: Option<u64>,
}

impl Game {
    pub fn new(seed: u64, settings: Settings) -> Self {
        Self {
            session: Session::new(seed, settings),
            clock: TickClock::new(),
            pending_score: Some(0),
        }
    }

    /// Start over with a fresh session
    pub fn restart(&mut self, seed: u64) {
        let settings = self.session.settings.clone();
        *self = Self::new(seed, settings);
    }

    /// Current tick interval (ms)
    pub fn interval_ms(&self) -> u32 {
        self.session.snake.speed
    }

    /// Feed a key code; takes effect on the next tick
    pub fn handle_key(&mut self, code: &str) -> bool {
        let heading = self.session.snake.heading();
        let changed = input::apply_key(&mut self.session.state, heading, code);
        if changed {
            log::debug!("Direction -> {:?}", self.session.state.direction);
        }
        changed
    }

    /// Advance by a frame delta, running every tick that came due
    pub fn update<R: Renderer + ?Sized>(&mut self, dt_ms: f64, renderer: &mut R) -> Vec<GameEvent> {
        self.clock.advance(dt_ms);

        let mut events = Vec::new();
        let mut ticks = 0;
        while ticks < MAX_TICKS_PER_FRAME && self.clock.consume(self.interval_ms()) {
            let tick_events = tick(&mut self.session, &mut *renderer);
            ticks += 1;
            self.observe(&tick_events);
            events.extend(tick_events);
        }
        events
    }

    /// Draw the current state without advancing
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.clear();
        renderer.draw_snake(&self.session.snake);
        for food in &self.session.food {
            renderer.draw_food(food.score, food.position);
        }
    }

    /// Score to show, if it changed since the last call
    pub fn take_score_change(&mut self) -> Option<u64> {
        self.pending_score.take()
    }

    fn observe(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::Collision { final_score } => {
                    log::info!("Collision! Final score: {}", final_score);
                    self.clock.restart();
                    self.pending_score = Some(0);
                }
                GameEvent::SpeedChanged { interval_ms } => {
                    log::info!("Speed up: tick every {} ms", interval_ms);
                    self.clock.restart();
                }
                GameEvent::FoodEaten { kind, score } => {
                    log::debug!("Ate {:?} food (+{})", kind, score);
                    // Re-armed on every meal, even once the speed budget is spent
                    self.clock.restart();
                    self.pending_score = Some(self.session.state.score);
                }
                GameEvent::FoodExpired { kind } => {
                    log::debug!("{:?} food expired", kind);
                }
                GameEvent::FoodSpawned { .. } => {}
            }
        }
    }
}
