//! Scroll-triggered reveal: fires once when an element first enters the
//! viewport.

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::NodeRef;

/// Share of the element that must be on screen before it counts as seen.
pub const THRESHOLD: f64 = 0.1;
/// Trims the bottom of the viewport so the reveal starts a little after the
/// element's edge scrolls in.
pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// A live observer. Dropping it disconnects the observer and frees its
/// callback.
pub struct InViewObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for InViewObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Calls `on_visible` the first time `node` intersects the viewport, then
/// stops observing. Returns `None` when the node is not mounted or the
/// browser has no `IntersectionObserver`; callers should reveal right away.
pub fn on_first_view<F>(node: &NodeRef, mut on_visible: F) -> Option<InViewObserver>
where
    F: FnMut() + 'static,
{
    let element = node.cast::<Element>()?;

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let seen = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if seen {
                on_visible();
                observer.disconnect();
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(THRESHOLD));
    options.set_root_margin(ROOT_MARGIN);

    let observer = match IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(e) => {
            warn!("IntersectionObserver unavailable: {:?}", e);
            return None;
        }
    };
    observer.observe(&element);

    Some(InViewObserver {
        observer,
        _callback: callback,
    })
}
