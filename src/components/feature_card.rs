//! Feature highlight card on the home panel.

use leptos::prelude::*;

use crate::app::navigate;
use crate::state::view::{Panel, ViewRouter};

/// Clickable card that jumps to the panel it advertises. Cards start
/// plain and gain a `fade-in` class from the scroll-reveal observer.
#[component]
pub fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
    target: Panel,
) -> impl IntoView {
    let router = expect_context::<RwSignal<ViewRouter>>();

    view! {
        <button class="feature-card" on:click=move |_| navigate(router, target)>
            <span class="feature-card__icon">{icon}</span>
            <h3>{title}</h3>
            <p>{desc}</p>
        </button>
    }
}
