//! Accelerometer samples and sources
//!
//! Readings are in milli-g on each axis, the unit wrist devices report
//! natively. The game only ever peeks the latest reading once per tick.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Instantaneous accelerometer reading (milli-g)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TiltSample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl TiltSample {
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    /// Build from a reading in m/s² (browser motion events)
    pub fn from_ms2(x: f64, y: f64, z: f64) -> Self {
        const MILLI_G_PER_MS2: f64 = 1000.0 / 9.806_65;
        let conv = |v: f64| {
            if v.is_finite() {
                (v * MILLI_G_PER_MS2).round().clamp(i16::MIN as f64, i16::MAX as f64) as i16
            } else {
                0
            }
        };
        Self::new(conv(x), conv(y), conv(z))
    }
}

/// Something that can be peeked for the latest tilt reading
pub trait AccelSource {
    /// Start delivering readings
    fn subscribe(&mut self);
    /// Stop delivering readings; subsequent peeks return a zero sample
    fn unsubscribe(&mut self);
    fn is_subscribed(&self) -> bool;
    /// Latest reading. Unsubscribed sources read as zero.
    fn peek(&mut self) -> TiltSample;
}

/// Replays a fixed sequence of readings, then holds the last one
#[derive(Debug, Clone, Default)]
pub struct ScriptedAccel {
    samples: Vec<TiltSample>,
    cursor: usize,
    subscribed: bool,
}

impl ScriptedAccel {
    pub fn new(samples: Vec<TiltSample>) -> Self {
        Self {
            samples,
            cursor: 0,
            subscribed: false,
        }
    }

    /// Number of readings handed out so far
    pub fn reads(&self) -> usize {
        self.cursor
    }
}

impl AccelSource for ScriptedAccel {
    fn subscribe(&mut self) {
        self.subscribed = true;
    }

    fn unsubscribe(&mut self) {
        self.subscribed = false;
    }

    fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    fn peek(&mut self) -> TiltSample {
        if !self.subscribed {
            return TiltSample::default();
        }
        let sample = self
            .samples
            .get(self.cursor)
            .or_else(|| self.samples.last())
            .copied()
            .unwrap_or_default();
        self.cursor += 1;
        sample
    }
}

/// Seeded random-walk wrist: slow drift plus tremor, with an occasional flick.
///
/// Deterministic for a given seed so headless runs are reproducible.
#[derive(Debug, Clone)]
pub struct SimulatedWrist {
    rng: Pcg32,
    tilt_x: f32,
    tilt_y: f32,
    subscribed: bool,
}

impl SimulatedWrist {
    /// Largest drift reading (milli-g)
    const MAX_TILT: f32 = 600.0;
    /// Per-read drift step (milli-g)
    const DRIFT: f32 = 40.0;
    /// Per-read tremor amplitude (milli-g)
    const TREMOR: f32 = 15.0;
    /// Chance a read is a sharp flick
    const FLICK_CHANCE: f64 = 0.05;

    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            tilt_x: 0.0,
            tilt_y: 0.0,
            subscribed: false,
        }
    }
}

impl AccelSource for SimulatedWrist {
    fn subscribe(&mut self) {
        self.subscribed = true;
    }

    fn unsubscribe(&mut self) {
        self.subscribed = false;
    }

    fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    fn peek(&mut self) -> TiltSample {
        if !self.subscribed {
            return TiltSample::default();
        }

        self.tilt_x = (self.tilt_x + self.rng.random_range(-Self::DRIFT..=Self::DRIFT))
            .clamp(-Self::MAX_TILT, Self::MAX_TILT);
        self.tilt_y = (self.tilt_y + self.rng.random_range(-Self::DRIFT..=Self::DRIFT))
            .clamp(-Self::MAX_TILT, Self::MAX_TILT);

        let tremor = self.rng.random_range(-Self::TREMOR..=Self::TREMOR);
        let (flick_x, flick_z) = if self.rng.random_bool(Self::FLICK_CHANCE) {
            let sign = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
            (sign * 300.0, -sign * 300.0)
        } else {
            (0.0, 0.0)
        };

        TiltSample::new(
            (self.tilt_x + tremor + flick_x) as i16,
            (self.tilt_y - tremor) as i16,
            (-1000.0 + flick_z) as i16,
        )
    }
}
