/// Mouse and timer wiring between the page and the renderer
use nalgebra::Point2;
use pointcube_core::{CubeRenderer, PointerButton};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::canvas::ContextCanvas;

/// Map `MouseEvent.button` to a pointer button
pub fn pointer_button(button: i16) -> Option<PointerButton> {
    match button {
        0 => Some(PointerButton::Primary),
        1 => Some(PointerButton::Middle),
        2 => Some(PointerButton::Secondary),
        _ => None,
    }
}

fn event_pos(ev: &web::MouseEvent) -> Point2<f32> {
    Point2::new(ev.offset_x() as f32, ev.offset_y() as f32)
}

/// Repaint if the renderer asked for it
pub fn paint(
    renderer: &RefCell<CubeRenderer>,
    canvas: &web::HtmlCanvasElement,
    context: &web::CanvasRenderingContext2d,
) {
    let mut renderer = renderer.borrow_mut();
    if renderer.take_dirty() {
        let stats = renderer.render(&mut ContextCanvas::new(canvas, context));
        if stats.skipped > 0 {
            log::debug!("[render] skipped {} points", stats.skipped);
        }
    }
}

pub fn wire_mouse_handlers(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    renderer: &Rc<RefCell<CubeRenderer>>,
) -> Result<(), JsValue> {
    let r = renderer.clone();
    let down = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if let Some(button) = pointer_button(ev.button()) {
            r.borrow_mut().pointer_down(button, event_pos(&ev));
        }
    }) as Box<dyn FnMut(_)>);
    canvas.add_event_listener_with_callback("mousedown", down.as_ref().unchecked_ref())?;
    down.forget();

    let r = renderer.clone();
    let moved = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        r.borrow_mut().pointer_move(event_pos(&ev));
    }) as Box<dyn FnMut(_)>);
    canvas.add_event_listener_with_callback("mousemove", moved.as_ref().unchecked_ref())?;
    moved.forget();

    // Release anywhere on the page ends the drag
    let r = renderer.clone();
    let up = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if let Some(button) = pointer_button(ev.button()) {
            r.borrow_mut().pointer_up(button);
        }
    }) as Box<dyn FnMut(_)>);
    window.add_event_listener_with_callback("mouseup", up.as_ref().unchecked_ref())?;
    up.forget();

    Ok(())
}

/// Tick and repaint on a fixed interval. Returns the interval handle.
pub fn start_timer(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    context: &web::CanvasRenderingContext2d,
    renderer: &Rc<RefCell<CubeRenderer>>,
) -> Result<i32, JsValue> {
    let period = renderer.borrow().config().tick_interval.as_millis() as i32;
    let r = renderer.clone();
    let canvas = canvas.clone();
    let context = context.clone();

    let tick = Closure::wrap(Box::new(move || {
        r.borrow_mut().tick();
        paint(&r, &canvas, &context);
    }) as Box<dyn FnMut()>);
    let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        period,
    )?;
    tick.forget();

    Ok(handle)
}
