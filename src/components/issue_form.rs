//! Issue report form. Submission synthesizes a placeholder ticket id;
//! nothing is sent anywhere.

use leptos::prelude::*;

use crate::state::notify::NotificationState;

const CATEGORIES: [&str; 6] =
    ["Roads", "Water Supply", "Sanitation", "Streetlights", "Parks", "Other"];

#[component]
pub fn IssueForm() -> impl IntoView {
    let notices = expect_context::<RwSignal<NotificationState>>();
    let category = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            use crate::state::tickets;
            use crate::util::browser;

            let id = tickets::ticket_id(browser::current_year(), browser::random());
            notices.update(|n| {
                n.success(format!("Issue reported successfully! Your ticket ID is: {id}"));
            });
            category.set(String::new());
            location.set(String::new());
            description.set(String::new());
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &notices;
        }
    };

    view! {
        <form class="issue-form" on:submit=on_submit>
            <h3>"Report an Issue"</h3>
            <label class="field">
                "Category"
                <select
                    required=true
                    prop:value=move || category.get()
                    on:change=move |ev| category.set(event_target_value(&ev))
                >
                    <option value="">"Select a category"</option>
                    {CATEGORIES
                        .into_iter()
                        .map(|c| view! { <option value=c>{c}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <label class="field">
                "Location"
                <input
                    type="text"
                    required=true
                    placeholder="Street or landmark"
                    prop:value=move || location.get()
                    on:input=move |ev| location.set(event_target_value(&ev))
                />
            </label>
            <label class="field">
                "Description"
                <textarea
                    required=true
                    rows="4"
                    placeholder="Describe the problem"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </label>
            <button type="submit" class="btn btn--primary">
                "Submit Issue"
            </button>
        </form>
    }
}
