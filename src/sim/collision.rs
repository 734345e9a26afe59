//! Boundary contact for the disc
//!
//! The screen edges are the only obstacles. Contact counts only while the
//! disc is moving outward on the offending axis, so a disc already past an
//! edge but heading back in is not caught again.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::disc::Disc;

/// Rectangular play area anchored at the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub width: f32,
    pub height: f32,
}

impl Frame {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Which edge the disc touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

/// Test a single axis: `lo`/`hi` are the disc's extent, `vel` its velocity
#[inline]
fn axis_contact(lo: f32, hi: f32, vel: f32, extent: f32) -> Option<bool> {
    if lo < 0.0 && vel < 0.0 {
        Some(false)
    } else if hi > extent && vel > 0.0 {
        Some(true)
    } else {
        None
    }
}

/// Check whether the disc touches an edge while moving outward.
///
/// The horizontal axis is checked first; if both axes are in contact the
/// horizontal edge is reported.
pub fn boundary_contact(disc: &Disc, frame: &Frame) -> Option<Edge> {
    let Disc { pos, vel, radius, .. } = *disc;

    if let Some(far) = axis_contact(pos.x - radius, pos.x + radius, vel.x, frame.width) {
        return Some(if far { Edge::Right } else { Edge::Left });
    }
    axis_contact(pos.y - radius, pos.y + radius, vel.y, frame.height)
        .map(|far| if far { Edge::Bottom } else { Edge::Top })
}
