use crate::canvas::CanvasPainter;
use crate::display::DomDisplay;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use swell_core::{CancelToken, DisplaySink, Simulation};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub sim: Rc<RefCell<Simulation>>,
    pub painter: CanvasPainter,
    pub display: DomDisplay,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let state = self.sim.borrow_mut().frame(&mut self.painter);
        self.display.apply(&state);
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame driver with explicit start/stop. Cheap to clone;
/// clones control the same loop.
#[derive(Clone)]
pub struct AnimationLoop {
    frame_ctx: Rc<RefCell<FrameContext>>,
    tick: Tick,
    handle: Rc<Cell<Option<i32>>>,
    token: Rc<RefCell<CancelToken>>,
}

impl AnimationLoop {
    pub fn new(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let token = CancelToken::new();
        token.cancel();
        Self {
            frame_ctx,
            tick: Rc::new(RefCell::new(None)),
            handle: Rc::new(Cell::new(None)),
            token: Rc::new(RefCell::new(token)),
        }
    }

    pub fn is_running(&self) -> bool {
        !self.token.borrow().is_cancelled()
    }

    /// Begin requesting frames. No-op while already running.
    pub fn start(&self) {
        if self.is_running() {
            return;
        }
        let token = CancelToken::new();
        *self.token.borrow_mut() = token.clone();

        let frame_ctx = self.frame_ctx.clone();
        let tick = self.tick.clone();
        let handle = self.handle.clone();
        *self.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            handle.set(None);
            if token.is_cancelled() {
                return;
            }
            frame_ctx.borrow_mut().frame();
            request_next(&tick, &handle);
        }) as Box<dyn FnMut()>));

        request_next(&self.tick, &self.handle);
        log::info!("[loop] started");
    }

    /// Cancel the pending frame; a frame already running completes.
    pub fn stop(&self) {
        self.token.borrow().cancel();
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        log::info!("[loop] stopped");
    }
}

fn request_next(tick: &Tick, handle: &Rc<Cell<Option<i32>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => handle.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame: {:?}", e),
        }
    }
}
