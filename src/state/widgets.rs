#[cfg(test)]
#[path = "widgets_test.rs"]
mod widgets_test;

/// External widgets that mount exactly once per page lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetId {
    /// Leaflet map on the public portal panel.
    PortalMap,
    /// Leaflet map on the contact panel (deferred mount).
    ContactMap,
    /// Chart.js pair on the dashboard panel.
    Charts,
}

impl WidgetId {
    pub const ALL: [WidgetId; 3] = [WidgetId::PortalMap, WidgetId::ContactMap, WidgetId::Charts];

    fn index(self) -> usize {
        match self {
            WidgetId::PortalMap => 0,
            WidgetId::ContactMap => 1,
            WidgetId::Charts => 2,
        }
    }
}

/// Per-widget "already mounted" flags.
///
/// The underlying map/chart libraries duplicate elements or throw when
/// constructed twice against the same container. Flags go false -> true
/// once and never reset.
#[derive(Clone, Debug, Default)]
pub struct WidgetInitState {
    mounted: [bool; WidgetId::ALL.len()],
}

impl WidgetInitState {
    #[must_use]
    pub fn is_mounted(&self, widget: WidgetId) -> bool {
        self.mounted[widget.index()]
    }

    /// Mark `widget` mounted. Returns `true` only for the call that
    /// performed the transition, so a deferred continuation can re-check
    /// at execution time and lose gracefully.
    pub fn claim(&mut self, widget: WidgetId) -> bool {
        let slot = &mut self.mounted[widget.index()];
        let fresh = !*slot;
        *slot = true;
        fresh
    }
}
