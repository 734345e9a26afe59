//! HUD text layers
//!
//! The host owns the actual text widgets; this module decides what they say.

use crate::sim::{GamePhase, GameState};

pub const TITLE_TEXT: &str = "TIGHT ROPE\nPress Up/Select/Down";
pub const GAME_OVER_TEXT: &str = "GAME OVER!";

/// Score line shown across the top of the screen
pub fn score_text(score: u32) -> String {
    format!("Score: {score}")
}

/// Text for each HUD slot in the current phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudText {
    /// Top bar; absent on the title screen
    pub score: Option<String>,
    /// Centre banner
    pub banner: Option<&'static str>,
}

impl HudText {
    pub fn for_state(state: &GameState) -> Self {
        match state.phase {
            GamePhase::NotStarted => Self {
                score: None,
                banner: Some(TITLE_TEXT),
            },
            GamePhase::Running => Self {
                score: Some(score_text(state.shown_score)),
                // Title lingers until the first running tick
                banner: state.title_visible.then_some(TITLE_TEXT),
            },
            GamePhase::Over => Self {
                score: Some(score_text(state.shown_score)),
                banner: Some(GAME_OVER_TEXT),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_score_text() {
        assert_eq!(score_text(0), "Score: 0");
        assert_eq!(score_text(42), "Score: 42");
    }

    #[test]
    fn test_title_names_the_start_buttons() {
        use crate::app::Button;

        assert!(TITLE_TEXT.starts_with("TIGHT ROPE"));
        assert!(!TITLE_TEXT.contains("any button"));
        for button in [Button::Up, Button::Select, Button::Down] {
            assert!(button.starts_game());
            assert!(TITLE_TEXT.contains(&format!("{button:?}")));
        }
        assert!(!Button::Back.starts_game());
        assert!(!TITLE_TEXT.contains("Back"));
    }

    #[test]
    fn test_hud_per_phase() {
        let mut state = GameState::new(Settings::default());
        assert_eq!(HudText::for_state(&state).banner, Some(TITLE_TEXT));
        assert_eq!(HudText::for_state(&state).score, None);

        state.start();
        let hud = HudText::for_state(&state);
        assert_eq!(hud.score.as_deref(), Some("Score: 0"));
        assert_eq!(hud.banner, Some(TITLE_TEXT));

        state.title_visible = false;
        assert_eq!(HudText::for_state(&state).banner, None);

        state.score = 3;
        state.shown_score = 3;
        state.end(crate::sim::Edge::Bottom);
        let hud = HudText::for_state(&state);
        assert_eq!(hud.score.as_deref(), Some("Score: 3"));
        assert_eq!(hud.banner, Some(GAME_OVER_TEXT));
    }
}
