use crate::dom::{add_listener, set_text_by_id};
use std::cell::RefCell;
use std::rc::Rc;
use swell_core::{Control, Simulation};
use wasm_bindgen::JsCast;
use web_sys as web;

fn slider(document: &web::Document, control: Control) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(control.slider_id())
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}

fn apply_raw(document: &web::Document, sim: &Rc<RefCell<Simulation>>, control: Control, raw: &str) {
    match control.parse(raw) {
        Ok(v) => {
            let text = sim.borrow_mut().set_control(control, v);
            set_text_by_id(document, control.label_id(), &text);
        }
        Err(e) => log::debug!("[controls] ignored: {:#}", e),
    }
}

/// Adopt each slider's current position, then follow its `input` events.
/// Absent sliders keep the default parameter.
pub fn wire_controls(document: &web::Document, sim: &Rc<RefCell<Simulation>>) {
    for control in Control::ALL {
        let Some(input) = slider(document, control) else {
            log::warn!("[controls] missing #{}", control.slider_id());
            continue;
        };
        apply_raw(document, sim, control, &input.value());

        let doc = document.clone();
        let sim = sim.clone();
        let input_for_cb = input.clone();
        add_listener(&input, "input", move |_ev| {
            apply_raw(&doc, &sim, control, &input_for_cb.value());
        });
    }
}
