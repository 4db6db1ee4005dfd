//! One step of the game loop
//!
//! Move, collide, eat, accelerate, draw, then run the food pass.

use super::grid::Position;
use super::state::{GameEvent, Session};
use crate::renderer::Renderer;

/// Advance the session by one tick, drawing the result.
pub fn tick<R: Renderer + ?Sized>(session: &mut Session, renderer: &mut R) -> Vec<GameEvent> {
    let mut events = Vec::new();
    session.time_ticks += 1;

    renderer.clear();

    let vacated = session.snake.advance(session.state.direction);

    if session.snake.bites_itself() {
        let final_score = session.state.score;
        session.reset();
        events.push(GameEvent::Collision { final_score });
        return events;
    }

    eat_food(session, vacated, &mut events);

    renderer.draw_snake(&session.snake);
    for food in &session.food {
        renderer.draw_food(food.score, food.position);
    }

    expire_food(session, &mut events);
    events.extend(produce_food(session));

    events
}

fn eat_food(session: &mut Session, vacated: Position, events: &mut Vec<GameEvent>) {
    let head = session.snake.head();
    let Some(index) = session.food.iter().position(|f| f.position == head) else {
        return;
    };

    let food = session.food.remove(index);
    session.state.score += food.score;
    session.snake.grow(vacated);
    events.push(GameEvent::FoodEaten {
        kind: food.kind,
        score: food.score,
    });

    if session.snake.accelerate() {
        events.push(GameEvent::SpeedChanged {
            interval_ms: session.snake.speed,
        });
    }
}

/// Age every item by one tick and drop the ones their policy rejects
fn expire_food(session: &mut Session, events: &mut Vec<GameEvent>) {
    let expires = session.settings.premium_expires;
    let (policies, food, _, _) = session.food_parts();
    food.retain_mut(|item| {
        item.age += 1;
        let valid = !expires
            || policies
                .iter()
                .filter(|p| p.kind() == item.kind)
                .all(|p| p.is_valid(item));
        if !valid {
            events.push(GameEvent::FoodExpired { kind: item.kind });
        }
        valid
    });
}

/// Ask each policy, in order, whether to add one item
pub fn produce_food(session: &mut Session) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let (policies, food, state, rng) = session.food_parts();
    for policy in policies {
        if policy.can_produce(food.as_slice(), state) {
            let item = policy.produce(&mut *rng);
            log::debug!("Creating food {:?} at {:?}", item.kind, item.position);
            events.push(GameEvent::FoodSpawned {
                kind: item.kind,
                position: item.position,
            });
            food.push(item);
        }
    }
    events
}
