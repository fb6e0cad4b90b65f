//! DOM helpers: element construction and event coordinate mapping.

use kurbo::Point;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, MouseEvent};

/// Create the drawing canvas. Its CSS size is left to the page stylesheet;
/// the backing store is reconciled by the first resize.
pub fn create_canvas(document: &Document) -> Result<HtmlCanvasElement, JsValue> {
    document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str("created element is not a canvas"))
}

/// The document body, or an error when the widget is mounted before one
/// exists.
pub fn body(document: &Document) -> Result<HtmlElement, JsValue> {
    document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))
}

/// Map a mouse event to CSS-pixel canvas coordinates.
///
/// Page coordinates minus the canvas's page offset; scroll is already folded
/// into `pageX`/`pageY`.
pub fn event_to_point(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Point {
    Point::new(
        event.page_x() as f64 - canvas.offset_left() as f64,
        event.page_y() as f64 - canvas.offset_top() as f64,
    )
}
