use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, MouseEvent};

use super::sketch::Sketch;

pub type SharedSketch = Rc<RefCell<Sketch>>;

/// Wire window events to the sketch and start the animation loop.
pub fn start(sketch: &SharedSketch) -> Result<(), JsValue> {
    let window = window().ok_or("no window")?;

    // Resize surface, camera and resolution uniform to the container
    let resize_closure = {
        let sketch = sketch.clone();
        Closure::wrap(Box::new(move || {
            if let Err(e) = sketch.borrow_mut().resize() {
                log::error!("resize failed: {e}");
            }
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    let mouse_closure = {
        let sketch = sketch.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            sketch
                .borrow_mut()
                .on_mouse_move(e.client_x() as f64, e.client_y() as f64);
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    window.add_event_listener_with_callback("mousemove", mouse_closure.as_ref().unchecked_ref())?;
    mouse_closure.forget();

    run_loop(sketch)
}

/// Draw a frame now and continue with a requestAnimationFrame chain,
/// unless a chain is already scheduled.
///
/// The chain ends on the first frame after the sketch is paused.
pub fn run_loop(sketch: &SharedSketch) -> Result<(), JsValue> {
    if sketch.borrow().loop_active() {
        return Ok(());
    }
    if !sketch.borrow_mut().frame() {
        return Ok(());
    }

    // The frame closure reschedules itself through `f`. Taking it out of the
    // cell when the loop ends frees it.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let frame_sketch = sketch.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_sketch.borrow_mut().frame() {
            frame_sketch.borrow_mut().set_loop_active(false);
            log::debug!("frame loop stopped");
            let _ = f.borrow_mut().take();
            return;
        }

        // schedule next
        let scheduled = f
            .borrow()
            .as_ref()
            .ok_or_else(|| JsValue::from_str("frame closure dropped"))
            .and_then(request_animation_frame);
        if let Err(e) = scheduled {
            frame_sketch.borrow_mut().set_loop_active(false);
            log::error!("failed to schedule frame: {e:?}");
        }
    }) as Box<dyn FnMut()>));

    let first = g.borrow();
    if let Some(closure) = first.as_ref() {
        request_animation_frame(closure)?;
        sketch.borrow_mut().set_loop_active(true);
    }
    Ok(())
}

fn request_animation_frame(f: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window()
        .ok_or("no window")?
        .request_animation_frame(f.as_ref().unchecked_ref())
}
