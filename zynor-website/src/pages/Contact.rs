/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use crate::components::ContactUs::*;
use crate::components::Hero::*;
use crate::components::Page::*;
use leptos::*;
use leptos_meta::*;
use zynor_contact::ContactClientConfig;

#[component]
pub fn Contact() -> impl IntoView {
    // provided by the server from CONTACT_* variables
    let webhook = use_context::<ContactClientConfig>();
    let base_url = webhook.as_ref().map(|webhook| webhook.base_url.clone());
    let endpoint_path = webhook.as_ref().map(|webhook| webhook.endpoint_path.clone());
    let timeout_secs = webhook.map(|webhook| webhook.timeout.as_secs());

    view! {
        <Title text="Contact"/>
        <Page>
            <Hero
                title="Let's build"
                highlight="together"
                subtitle="Tell us about your project and we'll get back to you within one business day."
                image="/images/contact.jpg"
            />
            <ContactUs base_url endpoint_path timeout_secs/>
        </Page>
    }
}
