//! Root application component: shared state contexts and panel switching.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::notification::NotificationHost;
use crate::pages::contact::ContactPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::home::HomePage;
use crate::pages::portal::PortalPage;
use crate::state::notify::NotificationState;
use crate::state::poll::PollState;
use crate::state::view::{Panel, ViewRouter};
use crate::util::browser;

/// Switch the active panel and reset the viewport, like a fresh page load.
pub(crate) fn navigate(router: RwSignal<ViewRouter>, panel: Panel) {
    router.update(|r| r.activate(panel));
    browser::scroll_to_top();
}

/// Root component.
///
/// All four panels stay mounted; visibility is reconciled from the single
/// active-panel value, so exactly one `section.page` carries `active` at
/// any time.
#[component]
pub fn App() -> impl IntoView {
    let router = RwSignal::new(ViewRouter::new());
    let notices = RwSignal::new(NotificationState::default());
    let poll = RwSignal::new(PollState::default());

    provide_context(router);
    provide_context(notices);
    provide_context(poll);

    // Deep-link: a panel fragment at load (e.g. `#dashboard`) replaces
    // the default home panel.
    Effect::new(move || {
        if let Some(hash) = browser::location_hash() {
            let panel = Panel::from_hash(&hash);
            if panel != Panel::Home {
                router.update(|r| r.activate(panel));
            }
        }
    });

    let active = move || router.get().active();

    view! {
        <Navbar/>
        <main class="page-container">
            <section id=Panel::Home.id() class="page" class:active=move || active() == Panel::Home>
                <HomePage/>
            </section>
            <section
                id=Panel::Portal.id()
                class="page"
                class:active=move || active() == Panel::Portal
            >
                <PortalPage/>
            </section>
            <section
                id=Panel::Dashboard.id()
                class="page"
                class:active=move || active() == Panel::Dashboard
            >
                <DashboardPage/>
            </section>
            <section
                id=Panel::Contact.id()
                class="page"
                class:active=move || active() == Panel::Contact
            >
                <ContactPage/>
            </section>
        </main>
        <NotificationHost/>
    }
}
