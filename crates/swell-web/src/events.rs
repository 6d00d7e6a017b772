use crate::constants::ORIENTATION_RESIZE_DELAY_MS;
use crate::dom::add_listener;
use crate::frame::AnimationLoop;
use std::cell::RefCell;
use std::rc::Rc;
use swell_core::{Simulation, SurfaceConfig};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Size the canvas backing store to its container and hand the new geometry
/// to the simulation.
pub fn fit_canvas(canvas: &web::HtmlCanvasElement, sim: &Rc<RefCell<Simulation>>) {
    let Some(window) = web::window() else {
        return;
    };
    let container_width = canvas
        .parent_element()
        .and_then(|p| p.dyn_into::<web::HtmlElement>().ok())
        .map(|p| p.offset_width() as f32)
        .unwrap_or_else(|| canvas.width() as f32);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    let surface = SurfaceConfig::fit(container_width, viewport_height);
    canvas.set_width(surface.width as u32);
    canvas.set_height(surface.height as u32);
    sim.borrow_mut().resize(surface);
}

pub fn wire_resize(canvas: &web::HtmlCanvasElement, sim: &Rc<RefCell<Simulation>>) {
    let Some(window) = web::window() else {
        return;
    };
    {
        let canvas = canvas.clone();
        let sim = sim.clone();
        add_listener(&window, "resize", move |_| fit_canvas(&canvas, &sim));
    }

    let canvas = canvas.clone();
    let sim = sim.clone();
    add_listener(&window, "orientationchange", move |_| {
        let Some(w) = web::window() else {
            return;
        };
        let canvas = canvas.clone();
        let sim = sim.clone();
        let delayed = Closure::once_into_js(move || fit_canvas(&canvas, &sim));
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            delayed.unchecked_ref(),
            ORIENTATION_RESIZE_DELAY_MS,
        );
    });
}

/// Stop scheduling frames when the page is being unloaded.
pub fn wire_teardown(animation: AnimationLoop) {
    if let Some(window) = web::window() {
        add_listener(&window, "beforeunload", move |_| animation.stop());
    }
}
