//! Element measurement and window resize events.

use std::future::Future;

use dioxus::prelude::*;
use futures::StreamExt;

/// Rendered `(width, height)` of the element with `id`, if it is on the page.
#[cfg(target_arch = "wasm32")]
pub fn element_size(id: &str) -> Option<(f64, f64)> {
    let element = web_sys::window()?.document()?.get_element_by_id(id)?;
    let rect = element.get_bounding_client_rect();
    Some((rect.width(), rect.height()))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn element_size(_id: &str) -> Option<(f64, f64)> {
    None
}

/// Run `on_resize` for window resize events while the calling component is mounted.
///
/// The browser callback only queues a message; `on_resize` runs on the Dioxus
/// runtime, one call at a time. Resizes that arrive while a call is running
/// are coalesced into a single follow-up call.
pub fn use_window_resize<F, Fut>(on_resize: F)
where
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    use_hook(move || {
        let (tx, mut rx) = futures::channel::mpsc::unbounded::<()>();
        let mut on_resize = on_resize;
        spawn(async move {
            while rx.next().await.is_some() {
                while let Ok(Some(())) = rx.try_next() {}
                on_resize().await;
            }
        });
        std::rc::Rc::new(listener::WindowListener::install("resize", move || {
            let _ = tx.unbounded_send(());
        }))
    });
}

#[cfg(target_arch = "wasm32")]
mod listener {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    /// Window event listener, removed again on drop.
    pub struct WindowListener {
        event: &'static str,
        closure: Closure<dyn FnMut()>,
    }

    impl WindowListener {
        pub fn install(event: &'static str, handler: impl FnMut() + 'static) -> Option<Self> {
            let window = web_sys::window()?;
            let closure = Closure::<dyn FnMut()>::new(handler);
            if let Err(e) =
                window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            {
                tracing::error!("Failed to listen for {}: {:?}", event, e);
                return None;
            }
            Some(Self { event, closure })
        }
    }

    impl Drop for WindowListener {
        fn drop(&mut self) {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    self.event,
                    self.closure.as_ref().unchecked_ref(),
                );
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod listener {
    /// No window outside the browser; nothing is ever delivered.
    pub struct WindowListener;

    impl WindowListener {
        pub fn install(_event: &'static str, _handler: impl FnMut() + 'static) -> Option<Self> {
            None
        }
    }
}
