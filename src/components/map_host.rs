//! Leaflet mount hosts for the portal and contact panels.
//!
//! Each host renders its mount element and constructs the map the first
//! time its panel becomes active. Mount flags live on the `ViewRouter`,
//! so repeat activations (and stale deferred continuations) are no-ops.

use leptos::prelude::*;

use crate::state::view::{Panel, ViewRouter};
#[cfg(feature = "hydrate")]
use crate::state::widgets::WidgetId;
use crate::vendor::leaflet::MapMarker;

/// Map center shared by both maps: Panjim, Goa.
pub const CITY_CENTER: (f64, f64) = (15.4909, 73.8278);

pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str = "\u{a9} OpenStreetMap contributors";

/// Fixed demo markers for the public portal map.
pub const PORTAL_MARKERS: [MapMarker; 4] = [
    MapMarker {
        lat: 15.4909,
        lng: 73.8278,
        title: "City Hall",
        desc: "Administrative Center",
        icon: "\u{1F3DB}\u{FE0F}",
    },
    MapMarker {
        lat: 15.49,
        lng: 73.835,
        title: "Cleanup Drive",
        desc: "Community cleanup event",
        icon: "\u{1F9F9}",
    },
    MapMarker {
        lat: 15.495,
        lng: 73.82,
        title: "Road Repair",
        desc: "Ongoing road maintenance",
        icon: "\u{1F6A7}",
    },
    MapMarker {
        lat: 15.48,
        lng: 73.84,
        title: "Water Treatment",
        desc: "Water quality monitoring",
        icon: "\u{1F4A7}",
    },
];

/// Leaflet needs the container laid out before it measures tile sizes;
/// panel visibility toggling does not reflow synchronously.
#[cfg(feature = "hydrate")]
const CONTACT_MAP_DELAY_MS: u32 = 100;

/// City services map on the public portal panel.
#[component]
pub fn PortalMap() -> impl IntoView {
    let router = expect_context::<RwSignal<ViewRouter>>();

    Effect::new(move || {
        if router.with(|r| r.active()) != Panel::Portal {
            return;
        }
        #[cfg(feature = "hydrate")]
        mount_portal_map(router);
    });

    view! { <div id="map" class="map-host"></div> }
}

/// Office map on the contact panel. Construction is deferred briefly
/// after the panel becomes visible.
#[component]
pub fn ContactMap() -> impl IntoView {
    let router = expect_context::<RwSignal<ViewRouter>>();

    Effect::new(move || {
        if router.with(|r| r.active()) != Panel::Contact {
            return;
        }
        #[cfg(feature = "hydrate")]
        schedule_contact_map(router);
    });

    view! { <div id="contactMap" class="map-host map-host--compact"></div> }
}

#[cfg(feature = "hydrate")]
fn mount_portal_map(router: RwSignal<ViewRouter>) {
    use crate::vendor::leaflet;

    if router.with_untracked(|r| r.widgets.is_mounted(WidgetId::PortalMap)) {
        return;
    }
    if !leaflet::available() {
        log::debug!("Leaflet not loaded; portal map skipped");
        return;
    }
    let Some(map) = leaflet::create_map("map", CITY_CENTER, 12.0) else {
        return;
    };
    leaflet::add_tile_layer(&map, OSM_TILE_URL, OSM_ATTRIBUTION);
    for marker in &PORTAL_MARKERS {
        leaflet::add_marker(&map, (marker.lat, marker.lng), &marker.popup_html());
    }
    router.update_untracked(|r| {
        r.widgets.claim(WidgetId::PortalMap);
    });
}

#[cfg(feature = "hydrate")]
fn schedule_contact_map(router: RwSignal<ViewRouter>) {
    use crate::vendor::leaflet;

    if router.with_untracked(|r| r.widgets.is_mounted(WidgetId::ContactMap)) {
        return;
    }
    if !leaflet::available() {
        log::debug!("Leaflet not loaded; contact map skipped");
        return;
    }
    // Switching away and back before the timer fires schedules a second
    // continuation; the flag is re-checked at execution time so only the
    // first one constructs.
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(CONTACT_MAP_DELAY_MS).await;
        if router.with_untracked(|r| r.widgets.is_mounted(WidgetId::ContactMap)) {
            return;
        }
        let Some(map) = leaflet::create_map("contactMap", CITY_CENTER, 15.0) else {
            return;
        };
        leaflet::add_tile_layer(&map, OSM_TILE_URL, OSM_ATTRIBUTION);
        leaflet::add_marker(&map, CITY_CENTER, "<b>MyCity Office</b><br>City Hall, Panjim");
        router.update_untracked(|r| {
            r.widgets.claim(WidgetId::ContactMap);
        });
    });
}
