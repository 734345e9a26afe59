//! Tight Rope entry point
//!
//! Handles platform-specific initialization and runs the timer loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use wasm_bindgen::{Clamped, JsCast};
    use web_sys::{
        CanvasRenderingContext2d, DeviceMotionEvent, Document, HtmlCanvasElement, ImageData,
        KeyboardEvent, PointerEvent,
    };

    use tight_rope::feedback::vibrate_web;
    use tight_rope::hud::HudText;
    use tight_rope::renderer::Framebuffer;
    use tight_rope::{AccelSource, App, Button, Host, Settings, TiltSample};

    /// Latest `devicemotion` reading, shared with the event listener
    struct BrowserAccel {
        latest: Rc<Cell<TiltSample>>,
        subscribed: bool,
    }

    impl AccelSource for BrowserAccel {
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
            if self.subscribed {
                self.latest.get()
            } else {
                TiltSample::default()
            }
        }
    }

    /// DOM-backed host: canvas for the disc layer, text nodes for the HUD
    struct PageHost {
        document: Document,
        redraw: bool,
    }

    impl Host for PageHost {
        fn set_backlight(&mut self, on: bool) {
            // No wake-lock support on the page; log only
            log::debug!("Backlight {}", if on { "on" } else { "off" });
        }

        fn vibrate(&mut self, pattern: &[u32]) {
            vibrate_web(pattern);
        }

        fn update_hud(&mut self, hud: &HudText) {
            if let Some(el) = self.document.get_element_by_id("hud-score") {
                el.set_text_content(hud.score.as_deref());
            }
            if let Some(el) = self.document.get_element_by_id("hud-banner") {
                el.set_text_content(hud.banner);
            }
        }

        fn request_redraw(&mut self) {
            self.redraw = true;
        }
    }

    /// Game instance holding all state
    struct Game {
        app: App<BrowserAccel>,
        host: PageHost,
        framebuffer: Framebuffer,
        ctx: CanvasRenderingContext2d,
    }

    impl Game {
        fn press(&mut self, button: Button) {
            self.app.on_button(button, &mut self.host);
            self.render();
        }

        fn on_timer(&mut self) {
            self.app.on_timer(&mut self.host);
            self.render();
        }

        fn render(&mut self) {
            if !self.host.redraw {
                return;
            }
            self.host.redraw = false;
            self.app.draw(&mut self.framebuffer);

            let image = ImageData::new_with_u8_clamped_array_and_sh(
                Clamped(self.framebuffer.as_bytes()),
                self.framebuffer.width(),
                self.framebuffer.height(),
            );
            match image {
                Ok(image) => {
                    if let Err(e) = self.ctx.put_image_data(&image, 0.0, 0.0) {
                        log::warn!("Render error: {:?}", e);
                    }
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("Tight Rope starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let settings = Settings::load();
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("missing #canvas")?
            .dyn_into()?;
        canvas.set_width(settings.frame_width);
        canvas.set_height(settings.frame_height);
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("2d context unavailable")?
            .dyn_into()?;

        let latest = Rc::new(Cell::new(TiltSample::default()));
        let accel = BrowserAccel {
            latest: latest.clone(),
            subscribed: false,
        };

        let mut host = PageHost {
            document: document.clone(),
            redraw: true,
        };
        let framebuffer = Framebuffer::new(settings.frame_width, settings.frame_height);
        let app = App::launch(settings, accel, &mut host);
        let step_ms = app.step_ms() as i32;

        let game = Rc::new(RefCell::new(Game {
            app,
            host,
            framebuffer,
            ctx,
        }));
        game.borrow_mut().render();

        setup_motion(&window, latest)?;
        setup_input_handlers(&window, &canvas, game.clone())?;
        start_timer(game, step_ms)?;

        log::info!("Tight Rope running!");
        Ok(())
    }

    fn setup_motion(window: &web_sys::Window, latest: Rc<Cell<TiltSample>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(DeviceMotionEvent)>::new(move |event: DeviceMotionEvent| {
            if let Some(a) = event.acceleration_including_gravity() {
                latest.set(TiltSample::from_ms2(
                    a.x().unwrap_or(0.0),
                    a.y().unwrap_or(0.0),
                    a.z().unwrap_or(0.0),
                ));
            }
        });
        window.add_event_listener_with_callback("devicemotion", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_input_handlers(
        window: &web_sys::Window,
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        // Keyboard: arrows and enter/space stand in for the side buttons
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                let button = match event.key().as_str() {
                    "ArrowUp" => Button::Up,
                    "ArrowDown" => Button::Down,
                    "Enter" | " " => Button::Select,
                    "Escape" | "Backspace" => Button::Back,
                    _ => return,
                };
                event.prevent_default();
                game.borrow_mut().press(button);
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Tap on the screen is Select
        {
            let closure = Closure::<dyn FnMut(PointerEvent)>::new(move |_event: PointerEvent| {
                game.borrow_mut().press(Button::Select);
            });
            canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    /// Fire `on_timer` every `step_ms`, in every phase
    fn start_timer(game: Rc<RefCell<Game>>, step_ms: i32) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let closure = Closure::<dyn FnMut()>::new(move || {
            game.borrow_mut().on_timer();
        });
        window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            step_ms,
        )?;
        closure.forget();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
mod native_game {
    use std::time::Duration;

    use tight_rope::hud::HudText;
    use tight_rope::renderer::Framebuffer;
    use tight_rope::sensor::SimulatedWrist;
    use tight_rope::sim::GamePhase;
    use tight_rope::{App, Button, Host, Settings};

    /// Give up on runs the simulated wrist somehow keeps alive (10 min at 20 Hz)
    const MAX_TICKS: u64 = 12_000;

    /// Terminal host: HUD lines and haptics go to the log
    #[derive(Default)]
    struct TerminalHost {
        redraws: u64,
    }

    impl Host for TerminalHost {
        fn set_backlight(&mut self, on: bool) {
            log::info!("Backlight {}", if on { "on" } else { "off" });
        }

        fn vibrate(&mut self, pattern: &[u32]) {
            log::info!("Vibrate {:?}", pattern);
        }

        fn update_hud(&mut self, hud: &HudText) {
            if let Some(score) = &hud.score {
                log::info!("{score}");
            }
            if let Some(banner) = hud.banner {
                log::info!("{}", banner.replace('\n', " / "));
            }
        }

        fn request_redraw(&mut self) {
            self.redraws += 1;
        }
    }

    struct Options {
        seed: u64,
        realtime: bool,
    }

    fn parse_args() -> Options {
        let mut options = Options {
            seed: 0x7167_7459,
            realtime: false,
        };
        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => match args.next().map(|s| s.parse::<u64>()) {
                    Some(Ok(seed)) => options.seed = seed,
                    _ => log::warn!("--seed needs an integer, keeping {}", options.seed),
                },
                "--realtime" => options.realtime = true,
                other => log::warn!("Unknown argument {other}"),
            }
        }
        options
    }

    pub fn run() {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        log::info!("Tight Rope (native) starting...");

        let options = parse_args();
        let settings = Settings::load();
        let mut framebuffer = Framebuffer::new(settings.frame_width, settings.frame_height);

        let mut host = TerminalHost::default();
        let mut app = App::launch(settings, SimulatedWrist::new(options.seed), &mut host);
        let step = Duration::from_millis(u64::from(app.step_ms()));
        log::info!("Simulated wrist seed: {}", options.seed);

        app.on_button(Button::Select, &mut host);

        while app.state().phase == GamePhase::Running && app.state().ticks < MAX_TICKS {
            // Keep the last running frame for the dump below
            app.draw(&mut framebuffer);
            app.on_timer(&mut host);
            if options.realtime {
                std::thread::sleep(step);
            }
        }

        if app.state().phase == GamePhase::Running {
            log::warn!("Stopping after {MAX_TICKS} ticks");
        }
        println!("{}", framebuffer.to_ascii());
        println!(
            "Final score: {} after {} ticks ({} redraws)",
            app.state().score,
            app.state().ticks,
            host.redraws
        );

        app.shutdown(&mut host);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Entry point is wasm_main via wasm_bindgen(start)
}
