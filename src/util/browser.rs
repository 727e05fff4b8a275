//! Small window/document helpers.
//!
//! Everything here degrades to a no-op or a neutral value off-browser so
//! components compile and test on the native target.

/// Reset the viewport to the document origin (after a panel activation).
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

/// The location fragment (`"#dashboard"`), if any.
#[must_use]
pub fn location_hash() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let hash = web_sys::window()?.location().hash().ok()?;
        if hash.is_empty() { None } else { Some(hash) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Uniform sample from `[0, 1)`.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn random() -> f64 {
    js_sys::Math::random()
}

/// Current calendar year.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// Current date in the user's locale, e.g. `8/8/2026`.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn today() -> String {
    js_sys::Date::new_0()
        .to_locale_date_string("en-US", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}
