//! Color selector row: swatch DOM construction and click resolution.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Event, HtmlElement};

/// Class carried by the currently selected swatch.
const SELECTED_CLASS: &str = "selected";

/// Build the `<div class="color-selector">` row with one
/// `<div class="marker">` per palette entry, each carrying its token in
/// `data-color` and as its background color.
pub fn build(document: &Document, palette: &[String]) -> Result<HtmlElement, JsValue> {
    let root = document
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str("selector root is not an html element"))?;
    root.set_class_name("color-selector");

    for color in palette {
        let marker = document
            .create_element("div")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| JsValue::from_str("marker is not an html element"))?;
        marker.set_class_name("marker");
        marker.set_attribute("data-color", color)?;
        marker.style().set_property("background-color", color)?;
        root.append_child(&marker)?;
    }

    Ok(root)
}

/// Resolve a click inside the selector to a swatch token via `data-color`.
///
/// Clicks on the container itself (or anything else without the attribute)
/// resolve to `None` and are ignored by the caller.
pub fn color_from_event(event: &Event) -> Option<String> {
    let element = event.target()?.dyn_into::<Element>().ok()?;
    element.get_attribute("data-color")
}

/// Move the `selected` marker class to the swatch for `token`.
pub fn mark_selected(root: &Element, token: &str) {
    let markers = root.children();
    for index in 0..markers.length() {
        let Some(marker) = markers.item(index) else {
            continue;
        };
        let is_match = marker.get_attribute("data-color").as_deref() == Some(token);
        if is_match {
            let _ = marker.class_list().add_1(SELECTED_CLASS);
        } else {
            let _ = marker.class_list().remove_1(SELECTED_CLASS);
        }
    }
}
