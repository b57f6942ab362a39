//! A self-re-arming `requestAnimationFrame` loop with cancellation.
//!
//! DESIGN
//! ======
//! The browser hands out one callback per frame, so a continuous loop must
//! re-request itself from inside the callback. The closure is kept alive in
//! an `Rc` holder shared with the callback; cancelling takes the pending
//! frame id, cancels it, and drops the closure so nothing re-arms.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

type FrameClosure = Closure<dyn FnMut()>;

/// Handle to a running animation-frame loop. Dropping it stops the loop.
pub struct RafLoop {
    pending: Rc<Cell<Option<i32>>>,
    holder: Rc<RefCell<Option<FrameClosure>>>,
}

impl RafLoop {
    /// Start calling `tick` once per animation frame until cancelled.
    ///
    /// # Errors
    ///
    /// Returns `Err` when there is no global window or the browser rejects
    /// the first frame request.
    pub fn start<F>(mut tick: F) -> Result<Self, JsValue>
    where
        F: FnMut() + 'static,
    {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;

        let pending = Rc::new(Cell::new(None::<i32>));
        let holder: Rc<RefCell<Option<FrameClosure>>> = Rc::new(RefCell::new(None));

        let pending_cb = Rc::clone(&pending);
        let holder_cb = Rc::clone(&holder);
        let window_cb = window.clone();
        *holder.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            tick();
            // Re-arm unless a cancel raced in while this frame ran.
            if pending_cb.get().is_none() {
                return;
            }
            let next = holder_cb
                .borrow()
                .as_ref()
                .and_then(|cb| window_cb.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
            pending_cb.set(next);
        }) as Box<dyn FnMut()>));

        let first = {
            let holder_ref = holder.borrow();
            let cb = holder_ref
                .as_ref()
                .ok_or_else(|| JsValue::from_str("frame closure missing"))?;
            window.request_animation_frame(cb.as_ref().unchecked_ref())?
        };
        pending.set(Some(first));

        Ok(Self { pending, holder })
    }

    /// Stop the loop. The last rendered frame stays on screen.
    pub fn cancel(&self) {
        if let Some(handle) = self.pending.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(handle);
            }
        }
        self.holder.borrow_mut().take();
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
