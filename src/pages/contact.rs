//! Contact panel: office details and location map.

use leptos::prelude::*;

use crate::components::map_host::ContactMap;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="contact-page">
            <h2>"Contact Us"</h2>
            <div class="contact-page__grid">
                <div class="contact-page__info">
                    <h3>"MyCity Office"</h3>
                    <p>"City Hall, Panjim"</p>
                    <p>"Goa 403001"</p>
                    <p>
                        <strong>"Phone: "</strong>
                        "+91 832 242 0000"
                    </p>
                    <p>
                        <strong>"Email: "</strong>
                        "support@mycity.example"
                    </p>
                    <p>
                        <strong>"Hours: "</strong>
                        "Mon\u{2013}Fri, 9:30\u{2013}17:30"
                    </p>
                </div>
                <div class="contact-page__map">
                    <ContactMap/>
                </div>
            </div>
        </div>
    }
}
