//! Dashboard panel: issue statistics, budget charts, community poll.

use leptos::prelude::*;

use crate::components::chart_host::DashboardCharts;
use crate::components::poll_card::PollCard;

/// Headline numbers, consistent with the issue-resolution chart data.
const STATS: [(&str, &str); 4] = [
    ("1,247", "Total Issues"),
    ("1,089", "Resolved"),
    ("98", "In Progress"),
    ("60", "Submitted"),
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <h2>"City Dashboard"</h2>
            <div class="dashboard-page__stats">
                {STATS
                    .into_iter()
                    .map(|(value, label)| {
                        view! {
                            <div class="stat-card">
                                <span class="stat-card__value">{value}</span>
                                <span class="stat-card__label">{label}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <DashboardCharts/>
            <PollCard/>
        </div>
    }
}
