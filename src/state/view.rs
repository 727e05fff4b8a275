#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::state::widgets::{WidgetId, WidgetInitState};

/// Top-level view panels. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Panel {
    #[default]
    Home,
    Portal,
    Dashboard,
    Contact,
}

impl Panel {
    pub const ALL: [Panel; 4] = [Panel::Home, Panel::Portal, Panel::Dashboard, Panel::Contact];

    /// Stable id used for container elements and hash deep-links.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Panel::Home => "home",
            Panel::Portal => "portal",
            Panel::Dashboard => "dashboard",
            Panel::Contact => "contact",
        }
    }

    /// Label shown in the navbar.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Panel::Home => "Home",
            Panel::Portal => "Public Portal",
            Panel::Dashboard => "Dashboard",
            Panel::Contact => "Contact",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Panel> {
        Panel::ALL.into_iter().find(|p| p.id() == id)
    }

    /// Parse a `window.location.hash` fragment (`"#dashboard"`), falling
    /// back to the default panel for empty or unknown fragments.
    #[must_use]
    pub fn from_hash(hash: &str) -> Panel {
        Panel::from_id(hash.trim_start_matches('#')).unwrap_or_default()
    }

    /// The widget this panel lazily mounts on first activation, if any.
    #[must_use]
    pub fn widget(self) -> Option<WidgetId> {
        match self {
            Panel::Home => None,
            Panel::Portal => Some(WidgetId::PortalMap),
            Panel::Dashboard => Some(WidgetId::Charts),
            Panel::Contact => Some(WidgetId::ContactMap),
        }
    }
}

/// Owns the active panel and the per-widget mount flags.
///
/// Panel visibility and nav highlighting are derived from `active` by the
/// render layer, so there is no imperative class juggling to get out of
/// sync. Transitions are unguarded: `activate` moves to the requested
/// panel from any state, including itself.
#[derive(Clone, Debug, Default)]
pub struct ViewRouter {
    active: Panel,
    pub widgets: WidgetInitState,
}

impl ViewRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn active(&self) -> Panel {
        self.active
    }

    pub fn activate(&mut self, panel: Panel) {
        self.active = panel;
    }
}
