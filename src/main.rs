//! Canvas Snake entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, KeyboardEvent};

    use canvas_snake::consts::*;
    use canvas_snake::renderer::{RenderState, SceneBuilder};
    use canvas_snake::{Game, Settings, score_text};

    const CANVAS_FALLBACK_TEXT: &str =
        "here is a canvas element with the game snake if you can't see it your browser is OLD!";

    /// Game instance holding all state
    struct WebGame {
        game: Game,
        scene: SceneBuilder,
        render_state: RenderState,
        score_el: Element,
        last_time: f64,
    }

    impl WebGame {
        /// Run due ticks, then redraw if anything moved
        fn update(&mut self, dt: f64) {
            let before = self.game.session.time_ticks;
            self.game.update(dt, &mut self.scene);
            if self.game.session.time_ticks != before {
                self.render();
            }
            self.update_hud();
        }

        fn render(&mut self) {
            match self.render_state.render(self.scene.vertices()) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    let (w, h) = self.render_state.size();
                    self.render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        /// Update the score readout
        fn update_hud(&mut self) {
            if let Some(score) = self.game.take_score_change() {
                self.score_el.set_text_content(Some(&score_text(score)));
            }
        }
    }

    fn js_err(e: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&e.to_string())
    }

    /// Use `#canvas` if the page has one, otherwise create it under `#root`
    fn canvas_element(document: &Document) -> Result<HtmlCanvasElement, JsValue> {
        if let Some(el) = document.get_element_by_id("canvas") {
            return el.dyn_into::<HtmlCanvasElement>().map_err(|_| js_err("#canvas is not a canvas"));
        }

        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        canvas.set_id("canvas");
        canvas.set_inner_html(CANVAS_FALLBACK_TEXT);

        let parent: web_sys::Node = match document.get_element_by_id("root") {
            Some(root) => root.into(),
            None => document.body().ok_or_else(|| js_err("no body"))?.into(),
        };
        parent.append_child(&canvas)?;
        Ok(canvas)
    }

    /// The `h1` that shows the score, created if missing
    fn score_element(document: &Document) -> Result<Element, JsValue> {
        if let Some(el) = document.query_selector("h1")? {
            return Ok(el);
        }
        let h1 = document.create_element("h1")?;
        let body = document.body().ok_or_else(|| js_err("no body"))?;
        body.prepend_with_node_1(&h1)?;
        Ok(h1)
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).map_err(js_err)?;

        log::info!("Canvas Snake starting...");

        let window = web_sys::window().ok_or_else(|| js_err("no window"))?;
        let document = window.document().ok_or_else(|| js_err("no document"))?;

        let canvas = canvas_element(&document)?;
        let score_el = score_element(&document)?;

        // Board size in CSS pixels, backing store scaled for the display
        let dpr = window.device_pixel_ratio();
        let width = (BOARD_WIDTH_PX as f64 * dpr) as u32;
        let height = (BOARD_HEIGHT_PX as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);
        let style = format!("width:{}px;height:{}px", BOARD_WIDTH_PX, BOARD_HEIGHT_PX);
        canvas.set_attribute("style", &style)?;

        let seed = js_sys::Date::now() as u64;
        let settings = Settings::load();
        // Write back so the stored JSON can be tweaked from the dev tools
        settings.save();
        log::info!(
            "Tick interval {} ms, speeding up to {} ms",
            settings.initial_interval_ms,
            settings.min_interval_ms()
        );
        let game = Game::new(seed, settings);
        log::info!("Game initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(js_err)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(js_err)?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height)
            .await
            .map_err(js_err)?;

        let mut web_game = WebGame {
            game,
            scene: SceneBuilder::new(),
            render_state,
            score_el,
            last_time: 0.0,
        };

        // First frame before any tick
        web_game.game.draw(&mut web_game.scene);
        web_game.render();
        web_game.update_hud();

        let web_game = Rc::new(RefCell::new(web_game));

        setup_keyboard(&window, web_game.clone())?;

        request_animation_frame(web_game);

        log::info!("Canvas Snake running!");
        Ok(())
    }

    fn setup_keyboard(window: &web_sys::Window, web_game: Rc<RefCell<WebGame>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let code = event.code();
            if canvas_snake::input::direction_for_key(&code).is_some() {
                // Keep arrow keys from scrolling the page
                event.prevent_default();
                web_game.borrow_mut().game.handle_key(&code);
            }
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(web_game: Rc<RefCell<WebGame>>) {
        let Some(window) = web_sys::window() else {
            log::error!("no window for animation frame");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(web_game, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(web_game: Rc<RefCell<WebGame>>, time: f64) {
        {
            let mut g = web_game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                time - g.last_time
            } else {
                0.0
            };
            g.last_time = time;

            g.update(dt);
        }

        request_animation_frame(web_game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().await
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Canvas Snake (native) starting...");
    log::info!("Drawing needs a browser - run with `trunk serve` for the web version");

    run_headless(2024, 3, 400);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play scripted games without a display and report each outcome
#[cfg(not(target_arch = "wasm32"))]
fn run_headless(seed: u64, rounds: u64, ticks: u64) {
    use canvas_snake::renderer::SceneBuilder;
    use canvas_snake::sim::GameEvent;
    use canvas_snake::{Game, Settings};

    const TURNS: [&str; 4] = ["ArrowUp", "ArrowLeft", "ArrowDown", "ArrowRight"];

    let mut game = Game::new(seed, Settings::load());
    let mut scene = SceneBuilder::new();

    for round in 0..rounds {
        if round > 0 {
            game.restart(seed + round);
        }
        let mut best = 0;
        let mut resets = 0;

        while game.session.time_ticks < ticks {
            let t = game.session.time_ticks;
            if t % 6 == 5 {
                game.handle_key(TURNS[(t / 6 % 4) as usize]);
            }
            // One full interval per step so exactly one tick runs
            let dt = f64::from(game.interval_ms());
            for event in game.update(dt, &mut scene) {
                if let GameEvent::Collision { final_score } = event {
                    best = best.max(final_score);
                    resets += 1;
                }
            }
            best = best.max(game.session.state.score);
        }

        println!(
            "Headless run {} (seed {}): {} ticks, best score {}, {} resets, final interval {} ms",
            round + 1,
            game.session.seed,
            ticks,
            best,
            resets,
            game.interval_ms()
        );
    }
}
