pub mod books;
pub mod home;
pub mod teaching;

use folio_core::catalog::SITE;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

/// Sticky header with the site name and primary nav; the item matching the
/// current path is highlighted.
pub fn render_header(
    document: &web::Document,
    mount: &web::HtmlElement,
    active_path: &str,
) -> anyhow::Result<()> {
    let header = dom::make(document, "header", "site-header")?;
    let nav = dom::make(document, "nav", "wrapper site-nav")?;

    let brand = anchor(document, SITE.name, "/", "site-brand")?;
    dom::append(&nav, &brand);

    let items = dom::make(document, "ul", "site-nav-items")?;
    for item in SITE.nav {
        let li = dom::make(document, "li", "")?;
        let class = if item.href == active_path {
            "site-nav-link active"
        } else {
            "site-nav-link"
        };
        let link = anchor(document, item.label, item.href, class)?;
        dom::append(&li, &link);
        dom::append(&items, &li);
    }
    dom::append(&nav, &items);
    dom::append(&header, &nav);
    dom::append(mount, &header);
    Ok(())
}

pub(crate) fn anchor(
    document: &web::Document,
    text: &str,
    href: &str,
    class: &str,
) -> anyhow::Result<web::HtmlElement> {
    let a: web::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .dyn_into::<web::HtmlAnchorElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    a.set_href(href);
    if !class.is_empty() {
        a.set_class_name(class);
    }
    a.set_text_content(Some(text));
    Ok(a.into())
}

/// Anchor that opens in a new tab, for off-site links.
pub(crate) fn external_anchor(
    document: &web::Document,
    text: &str,
    href: &str,
    class: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el = anchor(document, text, href, class)?;
    let _ = el.set_attribute("target", "_blank");
    let _ = el.set_attribute("rel", "noopener noreferrer");
    Ok(el)
}
