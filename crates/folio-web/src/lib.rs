#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod carousel;
mod device;
mod dom;
mod events;
mod frame;
mod layout;
mod modal;
mod pages;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let mount_el = document
        .get_element_by_id("app")
        .ok_or_else(|| anyhow::anyhow!("missing #app"))?;
    let mount: web::HtmlElement = mount_el
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let path = window
        .location()
        .pathname()
        .unwrap_or_else(|_| "/".to_string());

    pages::render_header(&document, &mount, &path)?;
    let main = dom::el(&document, "main", "wrapper")
        .ok_or_else(|| anyhow::anyhow!("failed to create main"))?;
    mount
        .append_child(&main)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    match path.as_str() {
        "/teaching" => pages::teaching::render(&document, &main)?,
        "/books" => pages::books::render(&window, &document, &main).await?,
        // Unknown paths fall back to the home page
        _ => pages::home::render(&document, &main)?,
    }
    log::info!("[route] rendered {}", path);

    Ok(())
}
