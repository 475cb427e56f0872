use folio_core::card::DeviceClass;
use folio_core::constants::MOBILE_BREAKPOINT_PX;
use web_sys as web;

/// Classify the viewport with the same media query the stylesheet uses.
/// Evaluated by the host when a detail view opens and injected into the card
/// config; the interaction component never polls media state itself.
pub fn classify(window: &web::Window) -> DeviceClass {
    let query = format!("(max-width: {}px)", MOBILE_BREAKPOINT_PX);
    let mobile = window
        .match_media(&query)
        .ok()
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false);
    if mobile {
        DeviceClass::Mobile
    } else {
        DeviceClass::Desktop
    }
}
