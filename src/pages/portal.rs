//! Public portal panel: issue reporting, city services map, tracking.

use leptos::prelude::*;

use crate::components::issue_form::IssueForm;
use crate::components::map_host::PortalMap;
use crate::components::tracking_card::TrackingCard;

#[component]
pub fn PortalPage() -> impl IntoView {
    view! {
        <div class="portal-page">
            <h2>"Public Portal"</h2>
            <div class="portal-page__grid">
                <IssueForm/>
                <div class="portal-page__map">
                    <h3>"City Services Map"</h3>
                    <PortalMap/>
                </div>
            </div>
            <TrackingCard/>
        </div>
    }
}
