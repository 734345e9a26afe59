//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per timer tick
//! - Inputs arrive only through `TickInput`
//! - No rendering or platform dependencies

pub mod collision;
pub mod disc;
pub mod score;
pub mod state;
pub mod tick;

pub use collision::{Edge, Frame, boundary_contact};
pub use disc::{Disc, disc_mass};
pub use score::ShakeDetector;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
