//! Community poll card: single choice, client-only, nothing tallied.

use leptos::prelude::*;

use crate::state::notify::NotificationState;
use crate::state::poll::{POLL_OPTIONS, POLL_QUESTION, PollState};

#[component]
pub fn PollCard() -> impl IntoView {
    let notices = expect_context::<RwSignal<NotificationState>>();
    let poll = expect_context::<RwSignal<PollState>>();

    let on_vote = move |_| {
        let outcome = poll.try_update(|p| p.submit());
        match outcome {
            Some(Ok(choice)) => notices.update(|n| {
                n.success(format!("Thank you for voting! Your choice: {choice}"));
            }),
            Some(Err(err)) => notices.update(|n| n.error(err.to_string())),
            None => {}
        }
    };

    view! {
        <div class="poll-card">
            <h3>"Community Poll"</h3>
            <p>{POLL_QUESTION}</p>
            <div class="poll-card__options">
                {POLL_OPTIONS
                    .into_iter()
                    .enumerate()
                    .map(|(i, label)| {
                        view! {
                            <button
                                class="poll-option"
                                class:selected=move || poll.get().is_selected(i)
                                on:click=move |_| poll.update(|p| p.select(i))
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <button class="btn btn--primary" on:click=on_vote>
                "Vote"
            </button>
        </div>
    }
}
