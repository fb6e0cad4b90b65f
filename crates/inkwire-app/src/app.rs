//! Widget assembly: canvas, selector, and window event wiring.

use std::cell::RefCell;
use std::rc::Rc;

use inkwire_core::{BoardConfig, BusError, ListenerId, Palette, PointerInput, Whiteboard};
use inkwire_render::Canvas2dSurface;
use kurbo::Point;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent};

use crate::{dom, selector};

/// The widget shared by the event closures. `RefCell` enforces at runtime
/// what the UI event loop already guarantees: handlers run to completion
/// before the next event is dispatched.
type SharedBoard = Rc<RefCell<Whiteboard<Canvas2dSurface>>>;

/// Handle returned by [`mount`]; the surface a JS transport drives.
#[wasm_bindgen]
pub struct WhiteboardHandle {
    board: SharedBoard,
}

#[wasm_bindgen]
impl WhiteboardHandle {
    /// Render a segment and, unless `should_broadcast` is false, announce
    /// it on the `draw` topic. A transport delivering a peer segment passes
    /// `false` so the stroke is not echoed back out.
    #[wasm_bindgen(js_name = draw)]
    pub fn draw(
        &self,
        start_x: f64,
        start_y: f64,
        end_x: f64,
        end_y: f64,
        color: Option<String>,
        should_broadcast: Option<bool>,
    ) -> Result<(), JsValue> {
        self.board
            .borrow_mut()
            .draw(
                Point::new(start_x, start_y),
                Point::new(end_x, end_y),
                color.as_deref(),
                should_broadcast.unwrap_or(true),
            )
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Subscribe a JS listener to the `draw` topic. The listener receives
    /// `(start, end, color)` with `[x, y]` coordinate arrays. Returns the
    /// id to pass to `offDraw`.
    #[wasm_bindgen(js_name = onDraw)]
    pub fn on_draw(&self, listener: js_sys::Function) -> u64 {
        let id = self.board.borrow_mut().on_draw(move |segment| {
            let start = serde_wasm_bindgen::to_value(&[segment.start.x, segment.start.y])
                .map_err(|err| BusError::Listener(err.to_string()))?;
            let end = serde_wasm_bindgen::to_value(&[segment.end.x, segment.end.y])
                .map_err(|err| BusError::Listener(err.to_string()))?;
            let color = JsValue::from_str(&segment.color);
            listener
                .call3(&JsValue::NULL, &start, &end, &color)
                .map(|_| ())
                .map_err(|err| BusError::Listener(format!("{err:?}")))
        });
        id.into_raw()
    }

    /// Remove a `draw` listener. Returns false for an unknown id.
    #[wasm_bindgen(js_name = offDraw)]
    pub fn off_draw(&self, id: u64) -> bool {
        self.board.borrow_mut().off_draw(ListenerId::from_raw(id))
    }
}

/// Append the widget to the document body and wire its event handlers.
///
/// Appends one `<canvas>` and one `<div class="color-selector">`, performs
/// the initial resize, preselects the first swatch, and registers the
/// window resize/mousedown/mousemove handlers plus the selector click
/// handler.
pub fn mount(config: BoardConfig) -> Result<WhiteboardHandle, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = dom::body(&document)?;

    let canvas = dom::create_canvas(&document)?;
    body.append_child(&canvas)?;
    let selector_el = selector::build(&document, &config.palette)?;
    body.append_child(&selector_el)?;

    let surface = Canvas2dSurface::with_line_width(canvas.clone(), config.line_width)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    let palette = Palette::with_entries(config.palette);
    let board: SharedBoard = Rc::new(RefCell::new(Whiteboard::with_palette(surface, palette)));

    board.borrow_mut().resize();
    // First swatch selected programmatically so drawing works before any
    // user interaction.
    selector::mark_selected(&selector_el, board.borrow().palette().selected());

    {
        let resize_board = board.clone();
        let onresize = Closure::<dyn FnMut()>::new(move || {
            resize_board.borrow_mut().resize();
        });
        window.add_event_listener_with_callback("resize", onresize.as_ref().unchecked_ref())?;
        onresize.forget();
    }

    {
        let down_board = board.clone();
        let down_canvas = canvas.clone();
        let ondown = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let position = dom::event_to_point(&down_canvas, &event);
            let _ = down_board
                .borrow_mut()
                .pointer_input(PointerInput::Down { position });
        });
        window.add_event_listener_with_callback("mousedown", ondown.as_ref().unchecked_ref())?;
        ondown.forget();
    }

    {
        let move_board = board.clone();
        let move_canvas = canvas.clone();
        let onmove = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let position = dom::event_to_point(&move_canvas, &event);
            let input = PointerInput::Move {
                position,
                buttons: event.buttons(),
            };
            // There is no JS caller to propagate a listener failure to from
            // here; surface it in the console instead.
            if let Err(err) = move_board.borrow_mut().pointer_input(input) {
                log::error!("{err}");
            }
        });
        window.add_event_listener_with_callback("mousemove", onmove.as_ref().unchecked_ref())?;
        onmove.forget();
    }

    {
        let click_board = board.clone();
        let selector_cb = selector_el.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(token) = selector::color_from_event(&event) else {
                return;
            };
            if click_board
                .borrow_mut()
                .palette_mut()
                .select_token(&token)
                .is_some()
            {
                selector::mark_selected(&selector_cb, &token);
            }
        });
        selector_el.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    Ok(WhiteboardHandle { board })
}
