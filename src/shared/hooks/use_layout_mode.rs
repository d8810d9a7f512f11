use dioxus::prelude::*;

use crate::shared::state::LayoutMode;
use crate::shared::utils::dom::viewport_width;

/// Current sidebar layout, recomputed when the window is resized.
/// Server rendering has no viewport and uses the rail.
pub fn use_layout_mode() -> Signal<LayoutMode> {
    let mut mode = use_signal(LayoutMode::default);

    use_effect(move || {
        if let Some(width) = viewport_width() {
            mode.set(LayoutMode::from_viewport_width(width));
        }
    });

    #[cfg(target_arch = "wasm32")]
    use_hook(move || std::rc::Rc::new(resize::ResizeListener::attach(mode)));

    mode
}

#[cfg(target_arch = "wasm32")]
mod resize {
    use dioxus::prelude::*;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::shared::state::LayoutMode;
    use crate::shared::utils::dom::viewport_width;

    /// Window `resize` listener, removed when the owning component unmounts
    pub struct ResizeListener {
        callback: Option<Closure<dyn FnMut()>>,
    }

    impl ResizeListener {
        pub fn attach(mut mode: Signal<LayoutMode>) -> Self {
            let callback = Closure::wrap(Box::new(move || {
                let Some(width) = viewport_width() else {
                    return;
                };
                let next = LayoutMode::from_viewport_width(width);
                let changed = mode.try_peek().map(|current| *current != next).unwrap_or(false);
                if changed {
                    if let Ok(mut current) = mode.try_write() {
                        *current = next;
                    }
                }
            }) as Box<dyn FnMut()>);

            let attached = web_sys::window()
                .map(|window| {
                    window
                        .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
                        .is_ok()
                })
                .unwrap_or(false);

            if !attached {
                web_sys::console::warn_1(&"[WASM] Could not attach resize listener".into());
            }

            Self {
                callback: attached.then_some(callback),
            }
        }
    }

    impl Drop for ResizeListener {
        fn drop(&mut self) {
            if let (Some(window), Some(callback)) = (web_sys::window(), self.callback.as_ref()) {
                let _ = window
                    .remove_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
            }
        }
    }
}
