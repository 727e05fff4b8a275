//! Top navigation bar: brand, panel links, mobile collapse, dark mode.

use leptos::prelude::*;

use crate::app::navigate;
use crate::state::view::{Panel, ViewRouter};
use crate::util::theme;

#[component]
pub fn Navbar() -> impl IntoView {
    let router = expect_context::<RwSignal<ViewRouter>>();
    let menu_open = RwSignal::new(false);
    let dark = RwSignal::new(false);

    // Apply the persisted preference once on mount.
    Effect::new(move || {
        dark.set(theme::init());
    });

    let on_toggle_dark = move |_| {
        dark.set(theme::toggle(dark.get_untracked()));
    };

    let active = move || router.get().active();

    view! {
        <nav class="navbar">
            <button class="navbar__brand" on:click=move |_| navigate(router, Panel::Home)>
                "MyCity"
            </button>
            <button
                class="navbar__toggler"
                aria-label="Toggle navigation"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "\u{2630}"
            </button>
            <div class="navbar__links" class:navbar__links--open=move || menu_open.get()>
                {Panel::ALL
                    .into_iter()
                    .map(|panel| {
                        view! {
                            <button
                                class="nav-link"
                                class:active=move || active() == panel
                                on:click=move |_| {
                                    menu_open.set(false);
                                    navigate(router, panel);
                                }
                            >
                                {panel.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
                <button class="navbar__dark-toggle" title="Toggle dark mode" on:click=on_toggle_dark>
                    {move || if dark.get() { "\u{2600}\u{FE0F}" } else { "\u{1F319}" }}
                </button>
            </div>
        </nav>
    }
}
