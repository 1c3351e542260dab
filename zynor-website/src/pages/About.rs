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
use crate::components::Hero::*;
use crate::components::Page::*;
use leptos::*;
use leptos_meta::*;

const PRINCIPLES: &[(&str, &str)] = &[
    (
        "Outcomes over output",
        "Every engagement starts from the business result it has to deliver, then works back to the software.",
    ),
    (
        "Small senior teams",
        "You work directly with the engineers and designers building your product, from the first call to launch.",
    ),
    (
        "Built to be handed over",
        "Documented code, automated pipelines and clean infrastructure your own team can run after we leave.",
    ),
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <Title text="About"/>
        <Page>
            <Hero
                title="About"
                highlight="Zynor"
                subtitle="A Florida-based studio of engineers and designers building software for growing companies."
                image="/images/about.jpg"
            />
            <section class="bg-light py-20 text-dark md:py-28">
                <div class="mx-auto max-w-6xl px-6">
                    <h2 class="max-w-3xl text-3xl font-semibold leading-tight md:text-5xl">
                        "We turn ambitious ideas into dependable products."
                    </h2>
                    <p class="mt-6 max-w-3xl text-lg leading-relaxed text-dark/70">
                        "From sprint zero to long-term maintenance, we pair product thinking with hands-on engineering. "
                        "Our clients range from early-stage founders to established operators modernizing their platforms."
                    </p>
                    <div class="mt-14 grid gap-8 md:grid-cols-3">
                        {PRINCIPLES
                            .iter()
                            .map(|(heading, body)| view! {
                                <div class="rounded-2xl border border-gray-200 p-8">
                                    <h3 class="text-xl font-semibold">{*heading}</h3>
                                    <p class="mt-3 leading-relaxed text-dark/70">{*body}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>
            <CallToAction/>
        </Page>
    }
}
