//! Binds a scene to a canvas surface and drives it from `requestAnimationFrame`

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::scene::Animation;
use super::canvas::CanvasSurface;

/// A scene paired with the canvas it paints
pub struct Stage<A> {
    pub scene: A,
    pub surface: CanvasSurface,
}

impl<A: Animation> Stage<A> {
    pub fn new(scene: A, surface: CanvasSurface) -> Self {
        Self { scene, surface }
    }

    pub fn render(&mut self, timestamp_ms: f64) {
        self.scene.render_frame(timestamp_ms, &mut self.surface);
    }
}

fn request_animation_frame(callback: &Closure<dyn FnMut(f64)>) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or("No global window")?
        .request_animation_frame(callback.as_ref().unchecked_ref::<js_sys::Function>())
}

/// Render one frame per display refresh, forever.
///
/// Each callback paints the whole frame synchronously and then registers
/// itself for the next refresh. A frame is skipped rather than panicking
/// if the stage is already borrowed (a re-entrant call from JS).
pub fn run<A: Animation + 'static>(stage: Rc<RefCell<Stage<A>>>) -> Result<(), JsValue> {
    let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();

    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        if let Ok(mut stage) = stage.try_borrow_mut() {
            stage.render(timestamp);
        }
        if let Some(callback) = next.borrow().as_ref() {
            if request_animation_frame(callback).is_err() {
                web_sys::console::error_1(&"Failed to schedule the next frame".into());
            }
        }
    }) as Box<dyn FnMut(f64)>));

    let first = slot.borrow();
    let callback = first.as_ref().ok_or("Frame callback missing")?;
    request_animation_frame(callback)?;
    Ok(())
}
