use log::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::prelude::*;

use crate::error::SiteError;

/// Window `scroll` listener that is removed again when dropped.
pub struct ScrollSubscription {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollSubscription {
    pub fn attach(on_scroll: Callback<f64>) -> Result<Self, SiteError> {
        let window = web_sys::window().ok_or(SiteError::NoWindow)?;

        // Report where the page already is (reload mid-page)
        on_scroll.emit(current_offset(&window));

        let window_clone = window.clone();
        let callback = Closure::wrap(Box::new(move || {
            on_scroll.emit(current_offset(&window_clone));
        }) as Box<dyn FnMut()>);

        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .map_err(SiteError::listener)?;

        Ok(ScrollSubscription { window, callback })
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
            .map_err(SiteError::listener)
        {
            error!("Failed to detach scroll listener: {}", e);
        }
    }
}

fn current_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Emits the window's vertical scroll offset on mount and on every scroll
/// event until the calling component unmounts.
#[hook]
pub fn use_window_scroll(on_scroll: Callback<f64>) {
    use_effect_with_deps(
        move |on_scroll: &Callback<f64>| {
            let subscription = match ScrollSubscription::attach(on_scroll.clone()) {
                Ok(subscription) => Some(subscription),
                Err(e) => {
                    error!("Scroll tracking disabled: {}", e);
                    None
                }
            };
            move || drop(subscription)
        },
        on_scroll,
    );
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;
    use web_sys::Event;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fire_scroll(window: &Window) {
        let event = Event::new("scroll").unwrap();
        window.dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn listener_is_removed_when_subscription_drops() {
        let window = web_sys::window().unwrap();
        let calls = Rc::new(Cell::new(0u32));
        let on_scroll = {
            let calls = calls.clone();
            Callback::from(move |_: f64| calls.set(calls.get() + 1))
        };

        let subscription = ScrollSubscription::attach(on_scroll).unwrap();
        let after_mount = calls.get();
        assert_eq!(after_mount, 1);

        fire_scroll(&window);
        assert_eq!(calls.get(), after_mount + 1);

        drop(subscription);
        fire_scroll(&window);
        assert_eq!(calls.get(), after_mount + 1);
    }
}
