//! Detail view for a single book: a dimmed backdrop over the page and a
//! six-face 3D card the visitor can tilt and flip. The interaction state is
//! a fresh [`FlipCard`] per open, so nothing from a previous open (including
//! a still-pending animation deadline) can leak into a new one.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use folio_core::card::{CardConfig, DeviceClass, FlipCard};
use folio_core::catalog::Book;
use folio_core::constants::{card_size, CARD_DEPTH, CARD_PERSPECTIVE};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::device;
use crate::dom;
use crate::events::{self, CardWiring};
use crate::frame::{self, CardFrame, Clock};
use crate::layout::{self, Face, FACES};

pub fn open(
    window: &web::Window,
    document: &web::Document,
    book: &'static Book,
) -> anyhow::Result<()> {
    let device = device::classify(window);
    let config = CardConfig::for_device(device);
    let card = Rc::new(RefCell::new(FlipCard::new(config)));
    let clock = Rc::new(Clock::new());
    let alive = Rc::new(Cell::new(true));

    let backdrop = dom::make(document, "div", "modal-backdrop")?;
    let content = dom::make(document, "div", "modal-content")?;

    // Perspective container: tilt tracking follows the pointer within it
    let scene = dom::make(document, "div", "card-scene")?;
    dom::set_style(&scene, &format!("perspective: {}px;", CARD_PERSPECTIVE));

    let size = card_size(device);
    let wrapper = dom::make(document, "div", "card-wrapper")?;
    dom::set_style(
        &wrapper,
        &format!(
            "width: {}px; height: {}px; position: relative; \
             transform-style: preserve-3d; will-change: transform; cursor: pointer;",
            size.x, size.y
        ),
    );

    for face in FACES {
        // No page-block spine on phones; the card is too narrow to show it
        if face == Face::SpineRight && device == DeviceClass::Mobile {
            continue;
        }
        let face_el = build_face(document, book, face, size)
            .ok_or_else(|| anyhow::anyhow!("failed to build card face"))?;
        dom::append(&wrapper, &face_el);
    }
    dom::append(&scene, &wrapper);
    dom::append(&content, &scene);

    let hint_text = match device {
        DeviceClass::Mobile => "Tap or swipe to flip",
        DeviceClass::Desktop => "Click to flip",
    };
    let hint = dom::text_el(document, "p", "modal-hint", hint_text)
        .ok_or_else(|| anyhow::anyhow!("failed to create hint"))?;
    dom::append(&content, &hint);

    let close_btn = dom::text_el(document, "button", "modal-close", "Close")
        .ok_or_else(|| anyhow::anyhow!("failed to create close button"))?;
    dom::append(&content, &close_btn);
    dom::append(&backdrop, &content);

    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?;
    let _ = body.append_child(&backdrop);

    // Two close paths: the backdrop and the Close button. Clicks on the card
    // itself stop propagation in the wiring, and the content panel swallows
    // the rest so stray clicks around the card do not dismiss the view.
    {
        let alive_close = alive.clone();
        let backdrop_close = backdrop.clone();
        dom::on_click(&backdrop, move |_ev| {
            close(&alive_close, &backdrop_close);
        });
    }
    {
        let alive_close = alive.clone();
        let backdrop_close = backdrop.clone();
        dom::on_click(&close_btn, move |ev| {
            ev.stop_propagation();
            close(&alive_close, &backdrop_close);
        });
    }
    dom::on_click(&content, |ev| ev.stop_propagation());

    events::wire_card_handlers(CardWiring {
        scene: scene.clone(),
        wrapper: wrapper.clone(),
        card: card.clone(),
        clock: clock.clone(),
    });

    frame::start_loop(Rc::new(RefCell::new(CardFrame {
        card,
        wrapper,
        clock,
        alive,
    })));

    log::info!("[modal] opened {}", book.title);
    Ok(())
}

fn close(alive: &Rc<Cell<bool>>, backdrop: &web::HtmlElement) {
    alive.set(false);
    backdrop.remove();
    log::info!("[modal] closed");
}

fn build_face(
    document: &web::Document,
    book: &'static Book,
    face: Face,
    card: Vec2,
) -> Option<web::HtmlElement> {
    let class = match face {
        Face::Front => "card-face card-front",
        Face::Back => "card-face card-back",
        Face::SpineLeft => "card-face card-spine-left",
        Face::SpineRight => "card-face card-spine-right",
        Face::EdgeTop => "card-face card-edge",
        Face::EdgeBottom => "card-face card-edge",
    };
    let el = dom::el(document, "div", class)?;

    // Geometry is computed here; surface styling lives in the stylesheet.
    let size = layout::face_size(face, card, CARD_DEPTH);
    let transform = layout::face_transform(face, card, CARD_DEPTH);
    let mut css = format!(
        "position: absolute; left: 50%; top: 50%; width: {}px; height: {}px; \
         backface-visibility: hidden; transform: {};",
        size.x, size.y, transform
    );
    if !matches!(face, Face::Front | Face::Back) {
        // Spines and edges never take part in hit testing
        css.push_str(" pointer-events: none;");
    }
    dom::set_style(&el, &css);

    match face {
        Face::Front => {
            let img = document
                .create_element("img")
                .ok()?
                .dyn_into::<web::HtmlImageElement>()
                .ok()?;
            img.set_class_name("card-cover");
            img.set_src(book.cover_image);
            img.set_alt(book.title);
            img.set_draggable(false);
            let _ = el.append_child(&img);

            let sheen = dom::el(document, "div", "card-sheen")?;
            dom::append(&el, &sheen);
        }
        Face::Back => {
            let header = dom::text_el(document, "h3", "card-notes-header", "Reading Notes")?;
            dom::append(&el, &header);

            let body = dom::el(document, "div", "card-notes-body")?;
            let notes = dom::text_el(
                document,
                "p",
                "card-notes",
                book.notes.unwrap_or("No notes yet."),
            )?;
            dom::append(&body, &notes);
            dom::append(&el, &body);

            let footer = dom::text_el(document, "p", "card-notes-footer", "Flip back to cover")?;
            dom::append(&el, &footer);
        }
        _ => {}
    }
    Some(el)
}
