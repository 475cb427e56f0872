use std::cell::RefCell;
use std::rc::Rc;

use folio_core::card::{ContainerRect, FlipCard};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::frame::Clock;

/// Everything the card's event handlers close over.
#[derive(Clone)]
pub struct CardWiring {
    /// Perspective container; tilt tracking follows the pointer within it.
    pub scene: web::HtmlElement,
    /// 3D wrapper; activation and swipe gestures land on it.
    pub wrapper: web::HtmlElement,
    pub card: Rc<RefCell<FlipCard>>,
    pub clock: Rc<Clock>,
}

pub fn wire_card_handlers(w: CardWiring) {
    wire_mousemove(&w);
    wire_mouseleave(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_click(&w);
}

#[inline]
fn pointer_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
fn scene_rect(el: &web::HtmlElement) -> ContainerRect {
    let rect = el.get_bounding_client_rect();
    ContainerRect {
        left: rect.left() as f32,
        top: rect.top() as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
    }
}

#[inline]
fn face_name(flipped: bool) -> &'static str {
    if flipped {
        "back"
    } else {
        "front"
    }
}

fn wire_mousemove(w: &CardWiring) {
    let w = w.clone();
    let scene_target = w.scene.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pos = pointer_pos(&ev);
        let rect = scene_rect(&w.scene);
        w.card
            .borrow_mut()
            .pointer_moved(pos.x, pos.y, rect, w.clock.now_sec());
    }) as Box<dyn FnMut(_)>);
    let _ =
        scene_target.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_mouseleave(w: &CardWiring) {
    let w = w.clone();
    let scene_target = w.scene.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        w.card.borrow_mut().pointer_left();
    }) as Box<dyn FnMut(_)>);
    let _ = scene_target
        .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &CardWiring) {
    let w = w.clone();
    let wrapper_target = w.wrapper.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.card.borrow_mut().pointer_down(ev.client_x() as f32);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    let _ = wrapper_target
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &CardWiring) {
    let w = w.clone();
    let wrapper_target = w.wrapper.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let now = w.clock.now_sec();
        let mut card = w.card.borrow_mut();
        let before = card.snapshot(now).flipped;
        card.pointer_up(ev.client_x() as f32, now);
        let after = card.snapshot(now).flipped;
        if before != after {
            log::info!("[card] swipe flip -> {}", face_name(after));
        }
    }) as Box<dyn FnMut(_)>);
    let _ = wrapper_target
        .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_click(w: &CardWiring) {
    let w = w.clone();
    let wrapper_target = w.wrapper.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        // The card owns this click; it must not fall through to the
        // backdrop and close the view.
        ev.stop_propagation();
        let now = w.clock.now_sec();
        let mut card = w.card.borrow_mut();
        let before = card.snapshot(now).flipped;
        card.clicked(now);
        let after = card.snapshot(now).flipped;
        if before != after {
            log::info!("[card] flip -> {}", face_name(after));
        }
    }) as Box<dyn FnMut(_)>);
    let _ =
        wrapper_target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
