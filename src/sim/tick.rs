//! Fixed timestep simulation tick
//!
//! One call per timer firing. The step is always one unit; there is no
//! accumulator and no substepping.

use super::collision::boundary_contact;
use super::state::{GameEvent, GamePhase, GameState};
use crate::sensor::TiltSample;

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Accelerometer reading peeked at the start of the tick
    pub sample: TiltSample,
}

/// Advance the game by one timer step.
///
/// Order within a running tick: dismiss title (first tick only), score the
/// shake, apply tilt force, check the boundary, integrate. Ticks outside
/// `Running` do nothing.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase != GamePhase::Running {
        return events;
    }

    state.ticks += 1;

    if state.title_visible {
        state.title_visible = false;
        events.push(GameEvent::TitleDismissed);
    }

    if state.shake.observe(input.sample) {
        state.score += 1;
        log::debug!("Shake detected, score {}", state.score);
    }
    if state.score != state.shown_score {
        state.shown_score = state.score;
        events.push(GameEvent::ScoreChanged { score: state.score });
    }

    let accel_ratio = state.settings.accel_ratio;
    let frame = state.frame;
    let Some(disc) = state.disc.as_mut() else {
        log::warn!("Running without a disc");
        return events;
    };

    disc.apply_tilt(input.sample, accel_ratio);
    let contact = boundary_contact(disc, &frame);
    disc.integrate();

    log::trace!(
        "tick {}: pos=({:.2}, {:.2}) vel=({:.3}, {:.3})",
        state.ticks,
        disc.pos.x,
        disc.pos.y,
        disc.vel.x,
        disc.vel.y
    );

    if let Some(edge) = contact {
        events.push(state.end(edge));
    }

    events
}
