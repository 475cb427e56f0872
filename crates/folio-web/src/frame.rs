use std::cell::{Cell, RefCell};
use std::rc::Rc;

use folio_core::card::FlipCard;
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::layout;

/// Monotonic clock shared by the event wiring and the frame loop. The card
/// machine only ever sees seconds measured from this epoch.
pub struct Clock {
    epoch: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }

    #[inline]
    pub fn now_sec(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }
}

/// Per-open render context: reads the card pose once per frame and writes
/// the wrapper's transform/transition styles. Face geometry is static; only
/// the wrapper rotates.
pub struct CardFrame {
    pub card: Rc<RefCell<FlipCard>>,
    pub wrapper: web::HtmlElement,
    pub clock: Rc<Clock>,
    /// Cleared when the detail view closes; the loop stops rescheduling and
    /// a late frame has nothing left to mutate.
    pub alive: Rc<Cell<bool>>,
}

impl CardFrame {
    pub fn frame(&mut self) {
        let now = self.clock.now_sec();
        let card = self.card.borrow();
        let snap = card.snapshot(now);
        let transition = layout::wrapper_transition(snap.animating, card.config().flip_duration);
        let transform = layout::card_transform(snap.rotate_x(), snap.rotate_y());

        // Writing an unchanged value does not restart a CSS transition, so
        // updating every frame is safe.
        let style = self.wrapper.style();
        let _ = style.set_property("transition", &transition);
        let _ = style.set_property("transform", &transform);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<CardFrame>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_ctx_tick.borrow().alive.get() {
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
