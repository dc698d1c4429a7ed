// ============================================================================
// USE INFINITE SCROLL - IntersectionObserver on the last rendered card
// ============================================================================
// One observer at a time. It is disconnected and rebuilt whenever `deps`
// change so the callback never acts on an outdated feed.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Keeps the JS callback alive for as long as the observer exists
struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[hook]
pub fn use_infinite_scroll<D>(target: NodeRef, enabled: bool, deps: D, on_visible: Callback<()>)
where
    D: PartialEq + 'static,
{
    use_effect_with((enabled, deps), move |(enabled, _)| {
        let guard = if *enabled {
            observe(&target, on_visible)
        } else {
            None
        };
        move || drop(guard)
    });
}

fn observe(target: &NodeRef, on_visible: Callback<()>) -> Option<ObserverGuard> {
    let element = target.cast::<Element>()?;

    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
        let visible = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .any(|entry| entry.is_intersecting());
        if visible {
            on_visible.emit(());
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let observer = match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => observer,
        Err(e) => {
            log::error!("❌ IntersectionObserver unavailable: {:?}", e);
            return None;
        }
    };
    observer.observe(&element);

    Some(ObserverGuard {
        observer,
        _callback: callback,
    })
}
