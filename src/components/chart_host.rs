//! Chart.js mount host for the dashboard panel.

use leptos::prelude::*;

use crate::state::view::{Panel, ViewRouter};
#[cfg(feature = "hydrate")]
use crate::state::widgets::WidgetId;
use crate::vendor::chartjs::{
    AxisOptions, ChartConfig, ChartData, ChartOptions, Dataset, LegendOptions, Paint,
    PluginOptions, ScaleOptions,
};

/// Doughnut chart of issue counts by status.
#[must_use]
pub fn issue_chart_config() -> ChartConfig {
    ChartConfig {
        kind: "doughnut",
        data: ChartData {
            labels: vec!["Resolved", "In Progress", "Submitted"],
            datasets: vec![Dataset {
                label: None,
                data: vec![1089.0, 98.0, 60.0],
                background_color: Paint::PerPoint(vec!["#27ae60", "#f39c12", "#e74c3c"]),
                border_color: Paint::Single("#fff"),
                border_width: 2.0,
            }],
        },
        options: ChartOptions {
            responsive: true,
            plugins: Some(PluginOptions { legend: LegendOptions { position: "bottom" } }),
            scales: None,
        },
    }
}

/// Grouped bar chart of allocated vs utilized budget per department.
#[must_use]
pub fn budget_chart_config() -> ChartConfig {
    ChartConfig {
        kind: "bar",
        data: ChartData {
            labels: vec!["Infrastructure", "Sanitation", "Transport", "Parks", "Admin"],
            datasets: vec![
                Dataset {
                    label: Some("Budget Allocated (\u{20B9} Crores)"),
                    data: vec![50.0, 30.0, 25.0, 15.0, 20.0],
                    background_color: Paint::Single("#4a90e2"),
                    border_color: Paint::Single("#2c5aa0"),
                    border_width: 1.0,
                },
                Dataset {
                    label: Some("Budget Utilized (\u{20B9} Crores)"),
                    data: vec![45.0, 28.0, 22.0, 12.0, 18.0],
                    background_color: Paint::Single("#27ae60"),
                    border_color: Paint::Single("#1e8449"),
                    border_width: 1.0,
                },
            ],
        },
        options: ChartOptions {
            responsive: true,
            plugins: None,
            scales: Some(ScaleOptions { y: AxisOptions { begin_at_zero: true } }),
        },
    }
}

/// Chart pair on the dashboard panel. Both charts share one mount flag;
/// a missing canvas skips that chart only.
#[component]
pub fn DashboardCharts() -> impl IntoView {
    let router = expect_context::<RwSignal<ViewRouter>>();

    Effect::new(move || {
        if router.with(|r| r.active()) != Panel::Dashboard {
            return;
        }
        #[cfg(feature = "hydrate")]
        mount_charts(router);
    });

    view! {
        <div class="chart-grid">
            <div class="chart-card">
                <h3>"Issue Resolution"</h3>
                <canvas id="issueChart"></canvas>
            </div>
            <div class="chart-card">
                <h3>"Budget Overview"</h3>
                <canvas id="budgetChart"></canvas>
            </div>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn mount_charts(router: RwSignal<ViewRouter>) {
    use crate::vendor::chartjs;

    if router.with_untracked(|r| r.widgets.is_mounted(WidgetId::Charts)) {
        return;
    }
    if !chartjs::available() {
        log::debug!("Chart.js not loaded; dashboard charts skipped");
        return;
    }
    let _ = chartjs::create_chart("issueChart", &issue_chart_config());
    let _ = chartjs::create_chart("budgetChart", &budget_chart_config());
    router.update_untracked(|r| {
        r.widgets.claim(WidgetId::Charts);
    });
}
