#![cfg(target_arch = "wasm32")]
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use swell_core::{DisplaySink, Simulation, SurfaceConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod canvas;
mod constants;
mod controls;
mod display;
mod dom;
mod events;
mod frame;
mod panel;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("swell-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom::dom_ready(&document).await?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let painter = canvas::CanvasPainter::from_canvas(&canvas)?;

    let sim = Rc::new(RefCell::new(Simulation::new(
        SurfaceConfig::default(),
        StdRng::from_entropy(),
    )));
    events::fit_canvas(&canvas, &sim);
    events::wire_resize(&canvas, &sim);
    controls::wire_controls(&document, &sim);
    panel::wire_panel(&document);

    // Gauges show the starting energy before the first frame lands
    let mut display = display::DomDisplay::new(document.clone());
    display.apply(&sim.borrow().display_state());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        sim: sim.clone(),
        painter,
        display,
    }));
    let animation = frame::AnimationLoop::new(frame_ctx);
    animation.start();
    events::wire_teardown(animation);

    Ok(())
}
