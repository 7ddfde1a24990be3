//! Balloon Pop entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlInputElement, HtmlSelectElement, MouseEvent};

    use balloon_pop::audio::{AudioManager, SoundEffect};
    use balloon_pop::consts::SPAWN_INTERVAL_MS;
    use balloon_pop::platform::web::{Interval, request_animation_frame, viewport_size};
    use balloon_pop::renderer::CanvasSurface;
    use balloon_pop::settings::MIXED_KEY;
    use balloon_pop::{FrameOutcome, Session, Settings, canvas_size_for_viewport};

    const BACKGROUND_SRC: &str = "./background.jpg";

    /// Everything the browser callbacks share
    struct App {
        settings: Settings,
        surface: CanvasSurface,
        audio: AudioManager,
        session: Option<Session>,
        /// Bumped on every start so stale frame callbacks stop
        generation: u64,
    }

    impl App {
        fn play_pending_sounds(&mut self) {
            let Some(session) = self.session.as_mut() else {
                return;
            };
            for event in session.drain_events() {
                if let Some(effect) = SoundEffect::for_event(&event) {
                    self.audio.play(effect);
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Balloon Pop starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document, cannot start");
            return;
        };

        let canvas: HtmlCanvasElement = match document
            .create_element("canvas")
            .ok()
            .and_then(|el| el.dyn_into().ok())
        {
            Some(canvas) => canvas,
            None => {
                log::error!("Failed to create canvas");
                return;
            }
        };
        if let Some(body) = document.body() {
            let _ = body.append_child(&canvas);
        }

        let Some(surface) = CanvasSurface::new(canvas, BACKGROUND_SRC) else {
            log::error!("2D canvas context unavailable");
            return;
        };
        surface.set_visible(false);

        let settings = Settings::load();
        let audio = AudioManager::new();
        let app = Rc::new(RefCell::new(App {
            settings,
            surface,
            audio,
            session: None,
            generation: 0,
        }));

        setup_canvas_input(&app);
        setup_menu(&document, &app);
        sync_settings_form(&document, &app.borrow().settings);
        update_menu_language(&document, &app.borrow().settings);
        set_display(&document, "menu", true);
        set_display(&document, "settingsMenu", false);

        log::info!("Balloon Pop ready");
    }

    fn start_game(app: &Rc<RefCell<App>>) {
        let generation = {
            let mut a = app.borrow_mut();
            let size = canvas_size_for_viewport(viewport_size());
            a.surface.resize(size);
            a.surface.set_visible(true);
            a.audio.resume();

            let seed = js_sys::Date::now() as u64;
            let palette = a.settings.palette.clone();
            let strings = a.settings.strings();
            // Replacing the old session releases its spawn timer
            a.session = Some(Session::start(seed, size, palette, strings));
            a.generation += 1;
            a.generation
        };

        let weak = Rc::downgrade(app);
        let interval = Interval::new(SPAWN_INTERVAL_MS, move || {
            if let Some(app) = weak.upgrade() {
                if let Some(session) = app.borrow_mut().session.as_mut() {
                    session.on_spawn_tick();
                }
            }
        });
        match interval {
            Some(interval) => {
                if let Some(session) = app.borrow_mut().session.as_mut() {
                    session.arm_spawn_timer(Box::new(interval));
                }
            }
            None => log::error!("Failed to arm spawn timer, no balloons will appear"),
        }

        schedule_frame(app.clone(), generation);
    }

    fn schedule_frame(app: Rc<RefCell<App>>, generation: u64) {
        request_animation_frame(move |_time: f64| game_loop(app, generation));
    }

    fn game_loop(app: Rc<RefCell<App>>, generation: u64) {
        let outcome = {
            let mut a = app.borrow_mut();
            if a.generation != generation {
                return;
            }
            let App {
                session, surface, ..
            } = &mut *a;
            let Some(session) = session.as_mut() else {
                return;
            };
            let outcome = session.on_frame(surface);
            a.play_pending_sounds();
            outcome
        };

        match outcome {
            FrameOutcome::Continue => schedule_frame(app, generation),
            FrameOutcome::Stop => {
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    set_display(&document, "menu", true);
                }
                if let Some(session) = app.borrow().session.as_ref() {
                    log::info!("Game over, final score {}", session.score());
                }
            }
        }
    }

    fn setup_canvas_input(app: &Rc<RefCell<App>>) {
        let canvas = app.borrow().surface.canvas().clone();
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let mut a = app.borrow_mut();
            let origin = a.surface.origin();
            let screen = Vec2::new(event.client_x() as f32, event.client_y() as f32);
            if let Some(session) = a.session.as_mut() {
                session.on_pointer_down(screen, origin);
            }
        });
        let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_menu(document: &Document, app: &Rc<RefCell<App>>) {
        {
            let app = app.clone();
            on_click(document, "startGameButton", move || {
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    set_display(&document, "menu", false);
                }
                start_game(&app);
            });
        }

        on_click(document, "settingsButton", || {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                set_display(&document, "menu", false);
                set_display(&document, "settingsMenu", true);
            }
        });

        {
            let app = app.clone();
            on_click(document, "exitButton", move || {
                let goodbye = app.borrow().settings.strings().goodbye;
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(goodbye);
                    // Browsers only honour this for script-opened windows
                    let _ = window.close();
                }
            });
        }

        {
            let app = app.clone();
            on_click(document, "applySettingsButton", move || {
                let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                    return;
                };
                apply_settings(&document, &app);
            });
        }

        {
            let app = app.clone();
            on_click(document, "backToMenuButton", move || {
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    // Drop unapplied edits
                    sync_settings_form(&document, &app.borrow().settings);
                    set_display(&document, "settingsMenu", false);
                    set_display(&document, "menu", true);
                }
            });
        }
    }

    /// Read the settings form; stays on the form if no color is checked
    fn apply_settings(document: &Document, app: &Rc<RefCell<App>>) {
        let mut a = app.borrow_mut();

        if let Some(select) = document
            .get_element_by_id("languageSelect")
            .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
        {
            if let Err(e) = a.settings.apply_language(&select.value()) {
                log::warn!("{}", e);
            }
        }
        update_menu_language(document, &a.settings);

        let checked = checked_color_keys(document);
        let result = a
            .settings
            .apply_color_selection(checked.iter().map(String::as_str));
        if let Err(e) = result {
            log::warn!("Settings rejected: {}", e);
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(a.settings.strings().error_no_colors);
            }
            return;
        }

        a.settings.save();
        set_display(document, "settingsMenu", false);
        set_display(document, "menu", true);
    }

    /// Show the loaded settings in the form, so Apply without edits keeps them
    fn sync_settings_form(document: &Document, settings: &Settings) {
        if let Some(select) = document
            .get_element_by_id("languageSelect")
            .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
        {
            select.set_value(settings.language.code());
        }

        let Ok(options) = document.query_selector_all(".colorOption") else {
            return;
        };
        for i in 0..options.length() {
            if let Some(input) = options
                .get(i)
                .and_then(|node| node.dyn_into::<HtmlInputElement>().ok())
            {
                input.set_checked(settings.is_color_selected(&input.value()));
            }
        }
    }

    fn checked_color_keys(document: &Document) -> Vec<String> {
        let mut keys = Vec::new();
        let Ok(options) = document.query_selector_all(".colorOption") else {
            return keys;
        };
        for i in 0..options.length() {
            if let Some(input) = options
                .get(i)
                .and_then(|node| node.dyn_into::<HtmlInputElement>().ok())
            {
                if input.checked() {
                    keys.push(input.value());
                }
            }
        }
        keys
    }

    fn update_menu_language(document: &Document, settings: &Settings) {
        let strings = settings.strings();
        for (id, text) in [
            ("startGameButton", strings.start_game),
            ("settingsButton", strings.settings),
            ("exitButton", strings.exit),
            ("applySettingsButton", strings.apply_settings),
            ("backToMenuButton", strings.back),
        ] {
            if let Some(el) = document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }
        if let Ok(Some(label)) = document.query_selector("label[for=\"languageSelect\"]") {
            label.set_text_content(Some(strings.select_language));
        }
        if let Ok(Some(heading)) = document.query_selector("#settingsMenu h3") {
            heading.set_text_content(Some(strings.select_colors));
        }

        // Each checkbox is followed by its label
        let Ok(options) = document.query_selector_all(".colorOption") else {
            return;
        };
        for i in 0..options.length() {
            let Some(input) = options
                .get(i)
                .and_then(|node| node.dyn_into::<HtmlInputElement>().ok())
            else {
                continue;
            };
            let key = input.value();
            let name = if key.eq_ignore_ascii_case(MIXED_KEY) {
                strings.mixed
            } else {
                match key.parse() {
                    Ok(color) => strings.color_name(color),
                    Err(_) => continue,
                }
            };
            if let Some(label) = input.next_element_sibling() {
                label.set_text_content(Some(name));
            }
        }
    }

    fn on_click(document: &Document, id: &str, handler: impl FnMut() + 'static) {
        let Some(el) = document.get_element_by_id(id) else {
            log::warn!("Missing menu element #{}", id);
            return;
        };
        let mut handler = handler;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| handler());
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn set_display(document: &Document, id: &str, visible: bool) {
        if let Some(el) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        {
            let _ = el
                .style()
                .set_property("display", if visible { "block" } else { "none" });
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Balloon Pop (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    let score = autoplay(0xB411_00F5);
    println!("Autoplay session finished with score {score}");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless session with a bot that tires over time, so the game always ends
#[cfg(not(target_arch = "wasm32"))]
fn autoplay(seed: u64) -> u64 {
    use balloon_pop::platform::ManualTimer;
    use balloon_pop::renderer::RecordingSurface;
    use balloon_pop::sim::Palette;
    use balloon_pop::{FrameOutcome, Language, Session, canvas_size_for_viewport};
    use glam::Vec2;

    /// Frames per spawn at 60 Hz
    const FRAMES_PER_SPAWN: u64 = 60;
    const MAX_FRAMES: u64 = 200_000;

    let canvas = canvas_size_for_viewport(None);
    let mut surface = RecordingSurface::new(canvas);
    let mut session = Session::start(seed, canvas, Palette::mixed(), Language::En.strings());
    session.arm_spawn_timer(Box::new(ManualTimer::new()));

    let mut frame: u64 = 0;
    let mut next_click: u64 = 0;
    while frame < MAX_FRAMES {
        if frame % FRAMES_PER_SPAWN == 0 {
            session.on_spawn_tick();
        }

        if frame >= next_click {
            // Aim where the highest balloon will be after the next rise
            let target = session
                .state()
                .balloons
                .iter()
                .min_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
                .map(|b| b.pos - Vec2::new(0.0, b.speed));
            if let Some(target) = target {
                session.on_pointer_down(target, Vec2::ZERO);
            }
            next_click = frame + 10 + frame / 100;
        }

        surface.clear();
        let outcome = session.on_frame(&mut surface);
        for event in session.drain_events() {
            log::debug!("frame {}: {:?}", frame, event);
        }
        if outcome == FrameOutcome::Stop {
            break;
        }
        frame += 1;
    }

    log::info!("Autoplay stopped after {} frames", frame);
    session.score()
}
