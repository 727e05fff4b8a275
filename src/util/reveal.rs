//! Scroll-reveal animation for the home page feature cards.
//!
//! An `IntersectionObserver` tags cards with `fade-in` as they enter the
//! viewport. The observer is never disconnected; it lives for the page.

/// Observe every `.feature-card` currently in the document.
pub fn observe_feature_cards() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::{JsCast, JsValue};
        use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(cards) = document.query_selector_all(".feature-card") else {
            return;
        };
        if cards.length() == 0 {
            return;
        }

        let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        let _ = entry.target().class_list().add_1("fade-in");
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(0.1));
        init.set_root_margin("0px 0px -50px 0px");

        let Ok(observer) =
            IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &init)
        else {
            return;
        };
        for i in 0..cards.length() {
            if let Some(card) = cards.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
                observer.observe(&card);
            }
        }
        on_intersect.forget();
    }
}
