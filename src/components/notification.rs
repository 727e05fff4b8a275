//! Modal notification dialog for confirmations and validation errors.

use leptos::prelude::*;

use crate::state::notify::{NoticeKind, NotificationState};

/// Renders the current notice, if any, as a modal over the page.
/// Clicking the backdrop or the button dismisses it.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let notices = expect_context::<RwSignal<NotificationState>>();

    let dismiss = move |_| notices.update(|n| n.dismiss());

    view! {
        {move || {
            notices.get().current().cloned().map(|notice| {
                let is_error = notice.kind == NoticeKind::Error;
                view! {
                    <div class="dialog-backdrop" on:click=dismiss>
                        <div
                            class="dialog notice"
                            class:notice--error=move || is_error
                            on:click=move |ev| ev.stop_propagation()
                        >
                            <h2>{notice.kind.title()}</h2>
                            <p class="notice__text">{notice.text}</p>
                            <div class="dialog__actions">
                                <button class="btn btn--primary" on:click=dismiss>
                                    "OK"
                                </button>
                            </div>
                        </div>
                    </div>
                }
            })
        }}
    }
}
