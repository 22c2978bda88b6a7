use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::error::SiteError;

pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

/// Window scroll subscription, removed again on drop.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    pub fn attach(mut on_scroll: impl FnMut(f64) + 'static) -> Result<Self, SiteError> {
        let window = window()?;
        let reader = window.clone();
        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Ok(scroll_y) = reader.scroll_y() {
                on_scroll(scroll_y);
            }
        });
        window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())?;

        Ok(Self { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}
