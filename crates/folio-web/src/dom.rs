use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Create an element with a class, already downcast to `HtmlElement`.
#[inline]
pub fn el(document: &web::Document, tag: &str, class: &str) -> Option<web::HtmlElement> {
    let e = document.create_element(tag).ok()?;
    if !class.is_empty() {
        e.set_class_name(class);
    }
    e.dyn_into::<web::HtmlElement>().ok()
}

/// `el`, with creation failure promoted to an error for `?` call sites.
#[inline]
pub fn make(document: &web::Document, tag: &str, class: &str) -> anyhow::Result<web::HtmlElement> {
    el(document, tag, class).ok_or_else(|| anyhow::anyhow!("failed to create <{}>", tag))
}

/// Create an element holding a single text node.
#[inline]
pub fn text_el(
    document: &web::Document,
    tag: &str,
    class: &str,
    text: &str,
) -> Option<web::HtmlElement> {
    let e = el(document, tag, class)?;
    e.set_text_content(Some(text));
    Some(e)
}

/// `text_el`, with creation failure promoted to an error.
#[inline]
pub fn text_make(
    document: &web::Document,
    tag: &str,
    class: &str,
    text: &str,
) -> anyhow::Result<web::HtmlElement> {
    text_el(document, tag, class, text).ok_or_else(|| anyhow::anyhow!("failed to create <{}>", tag))
}

#[inline]
pub fn set_style(el: &web::HtmlElement, css: &str) {
    let _ = el.set_attribute("style", css);
}

#[inline]
pub fn append(parent: &web::HtmlElement, child: &web::HtmlElement) {
    let _ = parent.append_child(child);
}

/// Attach a click handler to an event target; the closure is leaked, which
/// is the lifetime the page needs anyway.
pub fn on_click(target: &web::EventTarget, mut handler: impl FnMut(web::MouseEvent) + 'static) {
    let closure = wasm_bindgen::closure::Closure::wrap(
        Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>,
    );
    let _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
