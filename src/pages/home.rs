//! Home panel: hero and feature highlights.

use leptos::prelude::*;

use crate::app::navigate;
use crate::components::feature_card::FeatureCard;
use crate::state::view::{Panel, ViewRouter};
use crate::util::reveal;

#[component]
pub fn HomePage() -> impl IntoView {
    let router = expect_context::<RwSignal<ViewRouter>>();

    // Cards are in the document once this mounts; hook up scroll reveal.
    Effect::new(move || reveal::observe_feature_cards());

    view! {
        <div class="home-page">
            <header class="hero">
                <h1>"Welcome to MyCity"</h1>
                <p>"Your one-stop portal for municipal services, civic reporting, and city data."</p>
                <div class="hero__actions">
                    <button class="btn btn--primary" on:click=move |_| navigate(router, Panel::Portal)>
                        "Report an Issue"
                    </button>
                    <button class="btn" on:click=move |_| navigate(router, Panel::Dashboard)>
                        "View Dashboard"
                    </button>
                </div>
            </header>

            <div class="home-page__features">
                <FeatureCard
                    icon="\u{1F4DD}"
                    title="Report Issues"
                    desc="Flag potholes, broken streetlights, and sanitation problems."
                    target=Panel::Portal
                />
                <FeatureCard
                    icon="\u{1F50D}"
                    title="Track Progress"
                    desc="Follow up on a reported issue with its ticket ID."
                    target=Panel::Portal
                />
                <FeatureCard
                    icon="\u{1F4CA}"
                    title="City Dashboard"
                    desc="Issue statistics and budget utilization at a glance."
                    target=Panel::Dashboard
                />
                <FeatureCard
                    icon="\u{1F5F3}\u{FE0F}"
                    title="Community Polls"
                    desc="Have a say in what the city takes on next."
                    target=Panel::Dashboard
                />
            </div>
        </div>
    }
}
