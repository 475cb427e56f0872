use folio_core::catalog::{Book, BOOKS};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

use crate::carousel;
use crate::dom;
use crate::pages;

pub async fn render(
    window: &web::Window,
    document: &web::Document,
    main: &web::HtmlElement,
) -> anyhow::Result<()> {
    let intro = dom::make(document, "div", "page-intro")?;
    let title = dom::text_make(document, "h1", "", "Books")?;
    dom::append(&intro, &title);
    let lede = dom::text_make(
        document,
        "p",
        "lede",
        "A collection of books I've read, written, or recommend.",
    )?;
    dom::append(&intro, &lede);
    dom::append(main, &intro);

    // Full-bleed carousel section
    let band = dom::make(document, "section", "full-bleed band")?;
    let band_inner = dom::make(document, "div", "wrapper")?;
    let featured = dom::text_make(document, "h2", "", "Featured Books")?;
    dom::append(&band_inner, &featured);
    carousel::mount(window, document, &band_inner)?;
    dom::append(&band, &band_inner);
    dom::append(main, &band);

    // Grid view as alternative
    let section = dom::make(document, "section", "")?;
    let heading = dom::text_make(document, "h2", "", "All Books")?;
    dom::append(&section, &heading);
    let grid = dom::make(document, "div", "book-grid")?;
    for book in BOOKS {
        dom::append(&grid, &book_card(document, book)?);
    }
    dom::append(&section, &grid);
    dom::append(main, &section);

    // Warm the image cache so a first open of the detail view does not show
    // a blank cover mid-flip
    preload_covers().await;
    Ok(())
}

fn book_card(document: &web::Document, book: &'static Book) -> anyhow::Result<web::HtmlElement> {
    let article = dom::make(document, "article", "book-card")?;

    let cover = dom::make(document, "div", "book-card-cover")?;
    let img = document
        .create_element("img")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .dyn_into::<web::HtmlImageElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    img.set_src(book.cover_image);
    img.set_alt(&format!("Cover of {}", book.title));
    let _ = cover.append_child(&img);

    let meta = dom::make(document, "div", "book-card-meta")?;
    let title = dom::text_make(document, "h3", "", book.title)?;
    dom::append(&meta, &title);
    let author = dom::text_make(document, "p", "muted", book.author)?;
    dom::append(&meta, &author);
    if let Some(description) = book.description {
        let blurb = dom::text_make(document, "p", "muted book-card-blurb", description)?;
        dom::append(&meta, &blurb);
    }

    // The whole card links out when the book has one
    if let Some(link) = book.link {
        let a = pages::external_anchor(document, "", link, "book-card-link")?;
        dom::append(&a, &cover);
        dom::append(&a, &meta);
        dom::append(&article, &a);
    } else {
        dom::append(&article, &cover);
        dom::append(&article, &meta);
    }
    Ok(article)
}

/// Decode every cover off-screen; failures (a missing image) are not fatal
/// to the page.
async fn preload_covers() {
    let pending = js_sys::Array::new();
    for book in BOOKS {
        if let Ok(img) = web::HtmlImageElement::new() {
            img.set_src(book.cover_image);
            pending.push(&img.decode());
        }
    }
    let _ = JsFuture::from(js_sys::Promise::all(&pending)).await;
}
