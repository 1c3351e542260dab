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

use crate::components::sections::CallToAction::*;
use crate::components::sections::ServiceShowcase::*;
use crate::components::sections::Vision::*;
use crate::components::Hero::*;
use crate::components::Page::*;
use leptos::*;
use leptos_meta::*;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <Title text="Home"/>
        <Page>
            <Hero
                title="Engineering software that"
                highlight="moves business forward"
                subtitle="Zynor designs, builds and runs web platforms, mobile apps and AI products for teams that need to ship."
                cta=("/contact", "Start a project")
            />
            <Vision/>
            <ServiceShowcase/>
            <CallToAction/>
        </Page>
    }
}
