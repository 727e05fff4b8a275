use super::*;

// =============================================================
// WidgetInitState
// =============================================================

#[test]
fn nothing_mounted_initially() {
    let state = WidgetInitState::default();
    for widget in WidgetId::ALL {
        assert!(!state.is_mounted(widget));
    }
}

#[test]
fn claim_succeeds_once() {
    let mut state = WidgetInitState::default();
    assert!(state.claim(WidgetId::PortalMap));
    assert!(!state.claim(WidgetId::PortalMap));
    assert!(state.is_mounted(WidgetId::PortalMap));
}

#[test]
fn claims_are_independent_per_widget() {
    let mut state = WidgetInitState::default();
    assert!(state.claim(WidgetId::Charts));
    assert!(!state.is_mounted(WidgetId::PortalMap));
    assert!(!state.is_mounted(WidgetId::ContactMap));
    assert!(state.claim(WidgetId::ContactMap));
    assert!(state.claim(WidgetId::PortalMap));
    for widget in WidgetId::ALL {
        assert!(state.is_mounted(widget));
    }
}

#[test]
fn flags_never_reset() {
    let mut state = WidgetInitState::default();
    state.claim(WidgetId::ContactMap);
    // A second claim reports stale but leaves the flag set.
    assert!(!state.claim(WidgetId::ContactMap));
    assert!(state.is_mounted(WidgetId::ContactMap));
}

#[test]
fn widget_ids_are_distinct() {
    for (i, a) in WidgetId::ALL.iter().enumerate() {
        for (j, b) in WidgetId::ALL.iter().enumerate() {
            if i == j {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
            }
        }
    }
}
