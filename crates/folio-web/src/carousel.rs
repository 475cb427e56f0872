//! Horizontally scrollable cover strip over a shelf band. Clicking a cover
//! opens the detail view. Vertical wheel motion is translated into
//! horizontal travel so the strip browses naturally under a mouse wheel;
//! drag physics beyond native overflow scrolling are out of scope.

use folio_core::catalog::{Book, BOOKS};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::layout;
use crate::modal;

pub fn mount(
    window: &web::Window,
    document: &web::Document,
    host: &web::HtmlElement,
) -> anyhow::Result<()> {
    let outer = dom::make(document, "div", "carousel")?;
    let strip = dom::make(document, "div", "carousel-strip")?;

    for book in BOOKS {
        let slide = build_slide(document, book)
            .ok_or_else(|| anyhow::anyhow!("failed to build carousel slide"))?;
        dom::append(&strip, &slide);
    }
    apply_slide_basis(window, &strip);

    let shelf = dom::make(document, "div", "carousel-shelf")?;
    dom::append(&outer, &strip);
    dom::append(&outer, &shelf);
    dom::append(host, &outer);

    wire_wheel_scroll(&strip);
    wire_resize_rebasis(window, &strip);
    Ok(())
}

fn build_slide(document: &web::Document, book: &'static Book) -> Option<web::HtmlElement> {
    let slide = dom::el(document, "div", "carousel-slide")?;

    let img = document
        .create_element("img")
        .ok()?
        .dyn_into::<web::HtmlImageElement>()
        .ok()?;
    img.set_class_name("carousel-cover");
    img.set_src(book.cover_image);
    img.set_alt(book.title);
    img.set_draggable(false);
    let _ = slide.append_child(&img);

    dom::on_click(&slide, move |_ev| {
        let Some(window) = web::window() else {
            return;
        };
        let Some(document) = dom::window_document() else {
            return;
        };
        if let Err(e) = modal::open(&window, &document, book) {
            log::error!("[modal] open error: {:?}", e);
        }
    });
    Some(slide)
}

/// Size the slides so the breakpoint-appropriate number of covers fills the
/// strip. Re-applied whenever the window resizes.
fn apply_slide_basis(window: &web::Window, strip: &web::HtmlElement) {
    let viewport_w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1280.0);
    let (per_view, spacing) = layout::slides_per_view(viewport_w);
    let _ = strip
        .style()
        .set_property("gap", &format!("{}px", spacing));

    let basis = layout::slide_basis_css(per_view, spacing);
    let children = strip.children();
    for i in 0..children.length() {
        if let Some(child) = children.item(i) {
            if let Some(slide) = child.dyn_ref::<web::HtmlElement>() {
                let _ = slide.style().set_property("flex", &format!("0 0 {}", basis));
            }
        }
    }
}

fn wire_wheel_scroll(strip: &web::HtmlElement) {
    let strip_scroll = strip.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        // Most wheels only produce deltaY; fold both axes into travel
        let dx = ev.delta_x() + ev.delta_y();
        strip_scroll.scroll_by_with_x_and_y(dx, 0.0);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    let _ = strip.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_resize_rebasis(window: &web::Window, strip: &web::HtmlElement) {
    let strip_resize = strip.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        if let Some(w) = web::window() {
            apply_slide_basis(&w, &strip_resize);
        }
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
