//! Game state and core simulation types

use serde::{Deserialize, Serialize};

use super::collision::{Edge, Frame};
use super::disc::Disc;
use super::score::ShakeDetector;
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for a button press
    #[default]
    NotStarted,
    /// Disc is live
    Running,
    /// Disc touched an edge
    Over,
}

/// Things that happened during a tick, for the host to react to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new disc was placed and the game is running
    Started { radius: f32 },
    /// First running tick; the title screen should be torn down
    TitleDismissed,
    /// Score changed since the last tick
    ScoreChanged { score: u32 },
    /// Disc touched an edge
    GameOver { edge: Edge, score: u32 },
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    /// Present only while running
    pub disc: Option<Disc>,
    pub score: u32,
    /// Score as last reported to the HUD
    pub shown_score: u32,
    pub shake: ShakeDetector,
    pub frame: Frame,
    /// Title screen still up
    pub title_visible: bool,
    /// Number of running ticks in the current game
    pub ticks: u64,
    pub settings: Settings,
}

impl GameState {
    pub fn new(settings: Settings) -> Self {
        Self {
            phase: GamePhase::NotStarted,
            disc: None,
            score: 0,
            shown_score: 0,
            shake: ShakeDetector::new(settings.shake_threshold),
            frame: Frame::new(settings.frame_width as f32, settings.frame_height as f32),
            title_visible: true,
            ticks: 0,
            settings,
        }
    }

    /// Place the disc at the centre and enter `Running`.
    ///
    /// Only leaves the title screen; a game that is running or over
    /// ignores it.
    pub fn start(&mut self) -> Option<GameEvent> {
        if self.phase != GamePhase::NotStarted {
            return None;
        }

        let radius = self.settings.initial_radius;
        self.disc = Some(Disc::new(self.frame.center(), radius, self.settings.disc_density));
        self.phase = GamePhase::Running;

        log::info!("Game started (disc radius {radius})");
        Some(GameEvent::Started { radius })
    }

    /// End the current game
    pub fn end(&mut self, edge: Edge) -> GameEvent {
        self.phase = GamePhase::Over;
        self.disc = None;
        log::info!("Game over at {:?} edge, score {}", edge, self.score);
        GameEvent::GameOver {
            edge,
            score: self.score,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}
