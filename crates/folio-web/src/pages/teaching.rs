use folio_core::catalog::TEACHING_RESOURCES;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::pages;

pub fn render(document: &web::Document, main: &web::HtmlElement) -> anyhow::Result<()> {
    let intro = dom::make(document, "div", "page-intro")?;
    let title = dom::text_make(document, "h1", "", "Teaching")?;
    dom::append(&intro, &title);
    let lede = dom::text_make(
        document,
        "p",
        "lede",
        "Educational resources, lectures, and tutorials.",
    )?;
    dom::append(&intro, &lede);
    dom::append(main, &intro);

    let list = dom::make(document, "div", "resource-list")?;
    for resource in TEACHING_RESOURCES {
        let article = dom::make(document, "article", "resource")?;

        let heading = dom::text_make(document, "h2", "", resource.title)?;
        dom::append(&article, &heading);
        let description = dom::text_make(document, "p", "muted", resource.description)?;
        dom::append(&article, &description);

        dom::append(&article, &video_embed(document, resource.video_url, resource.title)?);

        if !resource.links.is_empty() {
            let row = dom::make(document, "div", "resource-links")?;
            for link in resource.links {
                let a = pages::external_anchor(document, link.label, link.url, "resource-link")?;
                dom::append(&row, &a);
            }
            dom::append(&article, &row);
        }

        dom::append(&list, &article);
    }
    dom::append(main, &list);
    Ok(())
}

/// Responsive 16:9 iframe for a YouTube/Vimeo embed URL.
fn video_embed(
    document: &web::Document,
    url: &str,
    title: &str,
) -> anyhow::Result<web::HtmlElement> {
    let wrap = dom::make(document, "div", "video-embed")?;
    let iframe: web::HtmlIFrameElement = document
        .create_element("iframe")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .dyn_into::<web::HtmlIFrameElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    iframe.set_src(url);
    iframe.set_title(title);
    let _ = iframe.set_attribute(
        "allow",
        "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture",
    );
    let _ = iframe.set_attribute("allowfullscreen", "");
    let _ = iframe.set_attribute("loading", "lazy");
    let _ = wrap.append_child(&iframe);
    Ok(wrap)
}
