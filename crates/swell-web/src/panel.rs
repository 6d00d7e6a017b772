use crate::constants::*;
use crate::dom::{add_listener, html_element_by_id, set_style};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use swell_core::PanelState;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Client-space pointer position of a mouse or touch event.
fn event_client_pos(ev: &web::Event) -> Option<Vec2> {
    if let Some(te) = ev.dyn_ref::<web::TouchEvent>() {
        let t = te.touches().get(0)?;
        return Some(Vec2::new(t.client_x() as f32, t.client_y() as f32));
    }
    ev.dyn_ref::<web::MouseEvent>()
        .map(|me| Vec2::new(me.client_x() as f32, me.client_y() as f32))
}

#[derive(Clone)]
struct PanelWiring {
    document: web::Document,
    panel: web::HtmlElement,
    toggle: web::HtmlElement,
    state: Rc<RefCell<PanelState>>,
}

/// Make the mini dashboard draggable inside the stage and collapsible.
/// Does nothing if any of its elements are missing.
pub fn wire_panel(document: &web::Document) {
    let (Some(panel), Some(header), Some(toggle)) = (
        html_element_by_id(document, PANEL_ID),
        html_element_by_id(document, PANEL_HEADER_ID),
        html_element_by_id(document, PANEL_TOGGLE_ID),
    ) else {
        log::debug!("[panel] not present");
        return;
    };
    let collapsed = panel.get_attribute(COLLAPSED_ATTR).as_deref() == Some("true");
    let w = PanelWiring {
        document: document.clone(),
        panel,
        toggle,
        state: Rc::new(RefCell::new(PanelState::new(collapsed))),
    };

    for ev in ["mousedown", "touchstart"] {
        let w = w.clone();
        add_listener(&header, ev, move |e| start_drag(&w, &e));
    }
    let Some(window) = web::window() else {
        return;
    };
    for ev in ["mousemove", "touchmove"] {
        let w = w.clone();
        add_listener(&window, ev, move |e| drag(&w, &e));
    }
    for ev in ["mouseup", "touchend"] {
        let w = w.clone();
        add_listener(&window, ev, move |_| end_drag(&w));
    }
    let toggle = w.toggle.clone();
    add_listener(&toggle, "click", move |_| toggle_collapsed(&w));
}

fn start_drag(w: &PanelWiring, ev: &web::Event) {
    let toggle_js: &JsValue = w.toggle.as_ref();
    if ev.target().map(JsValue::from).as_ref() == Some(toggle_js) {
        return;
    }
    let Some(pointer) = event_client_pos(ev) else {
        return;
    };
    ev.prevent_default();
    let rect = w.panel.get_bounding_client_rect();
    w.state
        .borrow_mut()
        .begin_drag(pointer, Vec2::new(rect.left() as f32, rect.top() as f32));
    _ = w.panel.class_list().add_1(DRAGGING_CLASS);
    set_style(&w.panel, "bottom", "auto");
    set_style(&w.panel, "right", "auto");
}

fn drag(w: &PanelWiring, ev: &web::Event) {
    if !w.state.borrow().drag.active {
        return;
    }
    ev.prevent_default();
    let (Some(pointer), Ok(Some(stage))) =
        (event_client_pos(ev), w.document.query_selector(STAGE_SELECTOR))
    else {
        return;
    };
    let stage_rect = stage.get_bounding_client_rect();
    let moved = w.state.borrow_mut().drag_to(
        pointer,
        Vec2::new(stage_rect.left() as f32, stage_rect.top() as f32),
        Vec2::new(stage_rect.width() as f32, stage_rect.height() as f32),
        Vec2::new(w.panel.offset_width() as f32, w.panel.offset_height() as f32),
    );
    if let Some(pos) = moved {
        set_style(&w.panel, "left", &format!("{}px", pos.x));
        set_style(&w.panel, "top", &format!("{}px", pos.y));
        _ = w.panel.class_list().add_1(CUSTOM_POSITION_CLASS);
    }
}

fn end_drag(w: &PanelWiring) {
    if w.state.borrow_mut().end_drag() {
        _ = w.panel.class_list().remove_1(DRAGGING_CLASS);
    }
}

fn toggle_collapsed(w: &PanelWiring) {
    let mut state = w.state.borrow_mut();
    let collapsed = state.toggle_collapsed();
    _ = w.panel.set_attribute(COLLAPSED_ATTR, &collapsed.to_string());
    w.toggle.set_text_content(Some(state.toggle_glyph()));
}
