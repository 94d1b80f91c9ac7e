//! Browser bridge for the universe simulation.
//!
//! JS owns the frame loop and the drawing; it calls `universe_tick` with the
//! elapsed milliseconds, then reads the packed body instances (4 floats each:
//! x, y, radius, kind) straight out of wasm memory or via `get_instances`.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

pub mod runner;

pub use runner::UniverseRunner;

use universe_engine::UniverseConfig;

thread_local! {
    static RUNNER: RefCell<Option<UniverseRunner>> = RefCell::new(None);
}

/// Run `f` against the runner. Before `universe_init` this returns `fallback`.
fn with_runner<R>(fallback: R, f: impl FnOnce(&mut UniverseRunner) -> R) -> R {
    RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
        Some(runner) => f(runner),
        None => {
            log::warn!("universe not initialized; call universe_init() first");
            fallback
        }
    })
}

fn install(runner: UniverseRunner) {
    log::info!(
        "universe: initialized {}x{}",
        runner.world_width(),
        runner.world_height()
    );
    RUNNER.with(|cell| *cell.borrow_mut() = Some(runner));
}

fn setup_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Start a universe with default settings for the given viewport.
#[wasm_bindgen]
pub fn universe_init(width: f64, height: f64) -> Result<(), JsValue> {
    setup_logging();
    let config = UniverseConfig {
        width,
        height,
        ..Default::default()
    };
    let runner = UniverseRunner::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
    install(runner);
    Ok(())
}

/// Start a universe from a JSON config document.
#[wasm_bindgen]
pub fn universe_init_with_config(json: &str) -> Result<(), JsValue> {
    setup_logging();
    let runner = UniverseRunner::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    install(runner);
    Ok(())
}

/// Feed elapsed wall-clock milliseconds. Returns the number of ticks run.
#[wasm_bindgen]
pub fn universe_tick(elapsed_ms: f64) -> u32 {
    with_runner(0, |r| r.tick(elapsed_ms))
}

/// Add a planet with its satellites. Returns the new planet's id, or
/// `undefined` for a non-finite point.
#[wasm_bindgen]
pub fn universe_create_planet_at(x: f64, y: f64) -> Option<u32> {
    with_runner(None, |r| r.create_planet_at(x, y).map(|id| id.0))
}

#[wasm_bindgen]
pub fn universe_resize(width: f64, height: f64) -> bool {
    with_runner(false, |r| r.resize(width, height))
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(std::ptr::null(), |r| r.instances_ptr())
}

/// Copy of the instance data, for hosts without direct memory access.
#[wasm_bindgen]
pub fn get_instances() -> js_sys::Float32Array {
    with_runner(js_sys::Float32Array::new_with_length(0), |r| {
        js_sys::Float32Array::from(r.render_buffer().as_floats())
    })
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(0, |r| r.instance_count())
}

/// Length of the float view behind `get_instances_ptr`.
#[wasm_bindgen]
pub fn get_instance_float_count() -> u32 {
    with_runner(0, |r| r.float_count())
}

#[wasm_bindgen]
pub fn get_planet_count() -> u32 {
    with_runner(0, |r| r.planet_count())
}

#[wasm_bindgen]
pub fn get_satellite_count() -> u32 {
    with_runner(0, |r| r.satellite_count())
}

#[wasm_bindgen]
pub fn get_nebula_count() -> u32 {
    with_runner(0, |r| r.nebula_count())
}

#[wasm_bindgen]
pub fn get_world_width() -> f64 {
    with_runner(0.0, |r| r.world_width())
}

#[wasm_bindgen]
pub fn get_world_height() -> f64 {
    with_runner(0.0, |r| r.world_height())
}

#[wasm_bindgen]
pub fn get_tick_count() -> f64 {
    with_runner(0.0, |r| r.tick_count() as f64)
}

#[wasm_bindgen]
pub fn get_tick_interval_ms() -> f64 {
    with_runner(0.0, |r| r.tick_interval_ms())
}
