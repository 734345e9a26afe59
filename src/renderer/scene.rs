//! Draw callback for the disc layer

use super::canvas::{DrawContext, colors};
use crate::sim::{GamePhase, GameState};

/// Redraw the disc layer: clear, then the disc while running.
///
/// Title and game-over screens are text layers owned by the host; this
/// layer is blank in those phases.
pub fn draw_game<C: DrawContext>(state: &GameState, ctx: &mut C) {
    ctx.set_fill_color(colors::BACKGROUND);
    ctx.fill_rect(0, 0, state.settings.frame_width, state.settings.frame_height);

    if state.phase != GamePhase::Running {
        return;
    }
    if let Some(disc) = &state.disc {
        let (x, y) = disc.pixel_center();
        ctx.set_fill_color(colors::DISC);
        ctx.fill_circle(x, y, disc.radius as u32);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Framebuffer;
    use crate::settings::Settings;

    #[test]
    fn test_running_draws_disc_at_centre() {
        let mut state = GameState::new(Settings::default());
        state.start();

        let mut fb = Framebuffer::new(144, 168);
        draw_game(&state, &mut fb);
        assert_eq!(fb.pixel(72, 84), Some(colors::DISC));
        assert_eq!(fb.pixel(72, 84 + 15), Some(colors::DISC));
        assert_eq!(fb.pixel(72, 84 + 16), Some(colors::BACKGROUND));
        assert_eq!(fb.pixel(0, 0), Some(colors::BACKGROUND));
    }

    #[test]
    fn test_title_and_game_over_are_blank() {
        let mut state = GameState::new(Settings::default());
        let mut fb = Framebuffer::new(144, 168);
        fb.fill_rect(0, 0, 144, 168);
        draw_game(&state, &mut fb);
        assert!(fb.as_bytes().chunks(4).all(|p| p == [0, 0, 0, 255]));

        state.start();
        state.end(crate::sim::Edge::Top);
        draw_game(&state, &mut fb);
        assert_eq!(fb.pixel(72, 84), Some(colors::BACKGROUND));
    }
}
