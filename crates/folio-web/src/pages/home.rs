use folio_core::catalog::SITE;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

pub fn render(document: &web::Document, main: &web::HtmlElement) -> anyhow::Result<()> {
    // Hero: avatar, name, short bio
    let hero = dom::make(document, "section", "hero")?;

    let avatar = dom::make(document, "div", "hero-avatar")?;
    let img = document
        .create_element("img")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .dyn_into::<web::HtmlImageElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    img.set_src(SITE.author.image);
    img.set_alt(SITE.author.name);
    let _ = avatar.append_child(&img);
    dom::append(&hero, &avatar);

    let name = dom::text_make(document, "h1", "hero-name", SITE.author.name)?;
    dom::append(&hero, &name);
    let bio = dom::text_make(document, "p", "hero-bio", SITE.author.bio)?;
    dom::append(&hero, &bio);
    dom::append(main, &hero);

    // Full-bleed welcome band
    let band = dom::make(document, "section", "full-bleed band")?;
    let band_inner = dom::make(document, "div", "wrapper band-inner")?;
    let welcome = dom::text_make(document, "h2", "", "Welcome")?;
    dom::append(&band_inner, &welcome);
    let blurb = dom::text_make(
        document,
        "p",
        "muted",
        "This is an example of a full-bleed section that spans the entire \
         width of the page. You can customize this section with your own \
         content.",
    )?;
    dom::append(&band_inner, &blurb);
    dom::append(&band, &band_inner);
    dom::append(main, &band);

    // About
    let about = dom::make(document, "section", "about")?;
    let heading = dom::text_make(document, "h2", "", "About")?;
    dom::append(&about, &heading);
    let text = dom::text_make(
        document,
        "p",
        "muted",
        "Add additional content about yourself here. You can include your \
         background, experience, interests, or any other information you'd \
         like to share with visitors.",
    )?;
    dom::append(&about, &text);
    dom::append(main, &about);

    Ok(())
}
