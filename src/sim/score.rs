//! Shake scoring
//!
//! A point is awarded when both the X and Z readings jump by at least the
//! threshold between consecutive samples. It does not measure balance at
//! all; it rewards vigorous wrist flicks.

use serde::{Deserialize, Serialize};

use crate::sensor::TiltSample;

/// Tracks the previous sample and the running score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShakeDetector {
    threshold: i32,
    last_x: i32,
    last_z: i32,
}

impl ShakeDetector {
    pub fn new(threshold: i32) -> Self {
        Self {
            threshold,
            last_x: 0,
            last_z: 0,
        }
    }

    /// Feed a sample; returns true if it counts as a shake.
    ///
    /// The stored sample is replaced every call, shake or not.
    pub fn observe(&mut self, sample: TiltSample) -> bool {
        let cur_x = i32::from(sample.x);
        let cur_z = i32::from(sample.z);
        let shake = (self.last_x - cur_x).abs() >= self.threshold
            && (self.last_z - cur_z).abs() >= self.threshold;

        self.last_x = cur_x;
        self.last_z = cur_z;
        shake
    }
}
