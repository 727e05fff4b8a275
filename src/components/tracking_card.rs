//! Ticket tracking lookup with an inline simulated result.
//!
//! The reported status is random and unrelated to any issued ticket id;
//! the demo keeps no history to look up against.

use leptos::prelude::*;

use crate::state::notify::NotificationState;
use crate::state::tickets::TrackingReport;

#[component]
pub fn TrackingCard() -> impl IntoView {
    let notices = expect_context::<RwSignal<NotificationState>>();
    let query = RwSignal::new(String::new());
    let report: RwSignal<Option<TrackingReport>> = RwSignal::new(None);

    let on_track = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            use crate::state::tickets;
            use crate::util::browser;

            match tickets::track(&query.get_untracked(), browser::random(), browser::today()) {
                Ok(found) => report.set(Some(found)),
                // Validation failure leaves any previous result in place.
                Err(err) => notices.update(|n| n.error(err.to_string())),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&notices, &report, &query);
        }
    });

    view! {
        <div class="tracking-card">
            <h3>"Track Your Issue"</h3>
            <div class="tracking-card__controls">
                <input
                    type="text"
                    placeholder="Enter ticket ID (e.g. MCT-2026-042)"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            on_track.run(());
                        }
                    }
                />
                <button class="btn" on:click=move |_| on_track.run(())>
                    "Track"
                </button>
            </div>
            {move || {
                report.get().map(|found| {
                    view! {
                        <div class="tracking-card__result">
                            <p>
                                <strong>"Ticket ID: "</strong>
                                {found.ticket_id}
                            </p>
                            <p>
                                <strong>"Status: "</strong>
                                <span class="badge">{found.status.label()}</span>
                            </p>
                            <p>
                                <strong>"Last Updated: "</strong>
                                {found.checked_on}
                            </p>
                        </div>
                    }
                })
            }}
        </div>
    }
}
