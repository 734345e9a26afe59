//! The disc body
//!
//! A single rigid circle driven by tilt. Integration is explicit Euler with
//! a unit timestep: one timer tick is one step.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sensor::TiltSample;

/// Mass of a disc of the given radius and area density
#[inline]
pub fn disc_mass(radius: f32, density: f32) -> f32 {
    std::f32::consts::PI * radius * radius * density
}

/// The player's disc
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disc {
    pub pos: Vec2,
    pub vel: Vec2,
    pub mass: f32,
    pub radius: f32,
}

impl Disc {
    /// Create a resting disc at `pos`
    pub fn new(pos: Vec2, radius: f32, density: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            mass: disc_mass(radius, density),
            radius,
        }
    }

    /// Accumulate a force into velocity (a = F / m, dt = 1)
    pub fn apply_force(&mut self, force: Vec2) {
        self.vel += force / self.mass;
    }

    /// Convert a tilt sample into a force and apply it.
    ///
    /// Screen Y grows downward while the sensor Y grows toward the top of
    /// the device, hence the sign flip.
    pub fn apply_tilt(&mut self, sample: TiltSample, accel_ratio: f32) {
        let force = Vec2::new(sample.x as f32 * accel_ratio, -(sample.y as f32) * accel_ratio);
        self.apply_force(force);
    }

    /// Advance position by one step
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// Integer pixel centre for drawing (truncates like the device's GPoint)
    pub fn pixel_center(&self) -> (i32, i32) {
        (self.pos.x as i32, self.pos.y as i32)
    }
}
