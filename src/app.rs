//! Host-agnostic app controller
//!
//! Owns the game state and the accelerometer. The host (browser page,
//! headless runner, watch shell) forwards button presses and timer firings
//! here and implements `Host` to show the results.

use crate::feedback::Haptic;
use crate::hud::HudText;
use crate::renderer::{DrawContext, draw_game};
use crate::sensor::AccelSource;
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// Physical buttons on the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Back,
    Up,
    Select,
    Down,
}

impl Button {
    /// Buttons that start the game from the title screen
    pub fn starts_game(self) -> bool {
        matches!(self, Button::Up | Button::Select | Button::Down)
    }
}

/// Platform surface the app drives
pub trait Host {
    fn set_backlight(&mut self, on: bool);
    fn vibrate(&mut self, pattern: &[u32]);
    fn update_hud(&mut self, hud: &HudText);
    /// Schedule a call to `App::draw`
    fn request_redraw(&mut self);
}

/// The game app
pub struct App<A: AccelSource> {
    state: GameState,
    accel: A,
}

impl<A: AccelSource> App<A> {
    /// Bring the app up on the title screen with the sensor subscribed
    pub fn launch(settings: Settings, mut accel: A, host: &mut impl Host) -> Self {
        if settings.backlight {
            host.set_backlight(true);
        }
        accel.subscribe();

        let state = GameState::new(settings);
        host.update_hud(&HudText::for_state(&state));
        log::info!("Tight Rope ready");
        Self { state, accel }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn accel(&self) -> &A {
        &self.accel
    }

    /// Timer interval the host should arm (ms)
    pub fn step_ms(&self) -> u32 {
        self.state.settings.step_ms
    }

    pub fn on_button(&mut self, button: Button, host: &mut impl Host) {
        if !button.starts_game() {
            return;
        }
        let Some(event) = self.state.start() else {
            return;
        };
        log::debug!("{button:?} pressed: {event:?}");

        host.update_hud(&HudText::for_state(&self.state));
        host.request_redraw();
    }

    /// Periodic timer callback. The host re-arms the timer after every call,
    /// whatever the phase.
    pub fn on_timer(&mut self, host: &mut impl Host) -> Vec<GameEvent> {
        if self.state.phase != GamePhase::Running {
            return Vec::new();
        }

        let input = TickInput {
            sample: self.accel.peek(),
        };
        let events = tick(&mut self.state, &input);

        let mut hud_dirty = false;
        for event in &events {
            match event {
                GameEvent::TitleDismissed | GameEvent::ScoreChanged { .. } => hud_dirty = true,
                GameEvent::GameOver { .. } => {
                    self.accel.unsubscribe();
                    hud_dirty = true;
                }
                GameEvent::Started { .. } => {}
            }
            if let Some(haptic) = Haptic::for_event(event) {
                if self.state.settings.vibrate {
                    host.vibrate(haptic.pattern());
                }
            }
        }

        if hud_dirty {
            host.update_hud(&HudText::for_state(&self.state));
        }
        host.request_redraw();
        events
    }

    /// Draw callback for the disc layer
    pub fn draw<C: DrawContext>(&self, ctx: &mut C) {
        draw_game(&self.state, ctx);
    }

    /// App is closing
    pub fn shutdown(&mut self, host: &mut impl Host) {
        self.accel.unsubscribe();
        if self.state.settings.backlight {
            host.set_backlight(false);
        }
        log::info!("Tight Rope closed (phase {:?}, score {})", self.state.phase, self.state.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hud::{GAME_OVER_TEXT, TITLE_TEXT};
    use crate::renderer::{Framebuffer, colors};
    use crate::sensor::{ScriptedAccel, TiltSample};

    #[derive(Default)]
    struct RecordingHost {
        backlight: bool,
        vibrations: Vec<Vec<u32>>,
        huds: Vec<HudText>,
        redraws: usize,
    }

    impl Host for RecordingHost {
        fn set_backlight(&mut self, on: bool) {
            self.backlight = on;
        }

        fn vibrate(&mut self, pattern: &[u32]) {
            self.vibrations.push(pattern.to_vec());
        }

        fn update_hud(&mut self, hud: &HudText) {
            self.huds.push(hud.clone());
        }

        fn request_redraw(&mut self) {
            self.redraws += 1;
        }
    }

    fn launch(samples: Vec<TiltSample>, settings: Settings) -> (App<ScriptedAccel>, RecordingHost) {
        let mut host = RecordingHost::default();
        let app = App::launch(settings, ScriptedAccel::new(samples), &mut host);
        (app, host)
    }

    #[test]
    fn test_launch_shows_title() {
        let (app, host) = launch(vec![], Settings::default());
        assert!(host.backlight);
        assert!(app.accel().is_subscribed());
        assert_eq!(host.huds.last().and_then(|h| h.banner), Some(TITLE_TEXT));
        assert_eq!(app.step_ms(), 50);
    }

    #[test]
    fn test_timer_idles_until_button() {
        let (mut app, mut host) = launch(vec![TiltSample::new(500, 0, 500)], Settings::default());
        assert!(app.on_timer(&mut host).is_empty());
        assert_eq!(app.accel().reads(), 0);
        assert_eq!(host.redraws, 0);

        app.on_button(Button::Back, &mut host);
        assert_eq!(app.state().phase, GamePhase::NotStarted);

        app.on_button(Button::Down, &mut host);
        assert_eq!(app.state().phase, GamePhase::Running);
    }

    #[test]
    fn test_first_tick_clears_title_and_scores() {
        let (mut app, mut host) = launch(vec![TiltSample::new(120, 0, -120)], Settings::default());
        app.on_button(Button::Select, &mut host);
        let events = app.on_timer(&mut host);

        assert_eq!(
            events,
            vec![GameEvent::TitleDismissed, GameEvent::ScoreChanged { score: 1 }]
        );
        let hud = host.huds.last().unwrap();
        assert_eq!(hud.banner, None);
        assert_eq!(hud.score.as_deref(), Some("Score: 1"));
    }

    #[test]
    fn test_game_over_unsubscribes_and_buzzes() {
        let (mut app, mut host) = launch(vec![TiltSample::new(-1000, 0, 0)], Settings::default());
        app.on_button(Button::Up, &mut host);

        let mut ticks = 0;
        while app.state().phase == GamePhase::Running {
            app.on_timer(&mut host);
            ticks += 1;
            assert!(ticks < 1000, "disc never reached the edge");
        }

        assert_eq!(app.state().phase, GamePhase::Over);
        assert!(!app.accel().is_subscribed());
        assert_eq!(host.vibrations, vec![Haptic::DoublePulse.pattern().to_vec()]);
        assert_eq!(host.huds.last().and_then(|h| h.banner), Some(GAME_OVER_TEXT));

        // Further timer firings do nothing
        let reads = app.accel().reads();
        assert!(app.on_timer(&mut host).is_empty());
        assert_eq!(app.accel().reads(), reads);

        let mut fb = Framebuffer::new(144, 168);
        app.draw(&mut fb);
        assert_eq!(fb.pixel(72, 84), Some(colors::BACKGROUND));
    }

    #[test]
    fn test_vibration_can_be_disabled() {
        let settings = Settings {
            vibrate: false,
            ..Default::default()
        };
        let (mut app, mut host) = launch(vec![TiltSample::new(0, 4000, 0)], settings);
        app.on_button(Button::Select, &mut host);
        for _ in 0..1000 {
            if app.state().phase == GamePhase::Over {
                break;
            }
            app.on_timer(&mut host);
        }
        assert_eq!(app.state().phase, GamePhase::Over);
        assert!(host.vibrations.is_empty());
    }

    #[test]
    fn test_buttons_after_game_over_do_nothing() {
        let (mut app, mut host) = launch(vec![TiltSample::new(4000, 0, 0)], Settings::default());
        app.on_button(Button::Select, &mut host);
        while app.state().phase == GamePhase::Running {
            app.on_timer(&mut host);
        }
        let huds = host.huds.len();
        let redraws = host.redraws;

        for button in [Button::Up, Button::Select, Button::Down, Button::Back] {
            app.on_button(button, &mut host);
        }
        assert_eq!(app.state().phase, GamePhase::Over);
        assert!(app.state().disc.is_none());
        assert!(!app.accel().is_subscribed());
        assert_eq!(host.huds.len(), huds);
        assert_eq!(host.redraws, redraws);
    }

    #[test]
    fn test_draw_shows_disc_while_running() {
        let (mut app, mut host) = launch(vec![TiltSample::default()], Settings::default());
        app.on_button(Button::Select, &mut host);
        app.on_timer(&mut host);

        let mut fb = Framebuffer::new(144, 168);
        app.draw(&mut fb);
        assert_eq!(fb.pixel(72, 84), Some(colors::DISC));
    }

    #[test]
    fn test_shutdown_releases_sensor() {
        let (mut app, mut host) = launch(vec![], Settings::default());
        app.shutdown(&mut host);
        assert!(!app.accel().is_subscribed());
        assert!(!host.backlight);
    }
}
