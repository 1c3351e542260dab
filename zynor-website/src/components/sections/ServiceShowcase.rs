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

use crate::content::{Offering, SERVICES, SOLUTIONS};
use leptos::*;

/// Grid of every service and solution, each linking to its page.
#[component]
pub fn ServiceShowcase() -> impl IntoView {
    view! {
        <section id="services" class="bg-light py-24 text-dark">
            <div class="mx-auto max-w-7xl px-6">
                <p class="text-sm font-semibold uppercase tracking-widest text-accent">"What we do"</p>
                <h2 class="mt-3 text-3xl font-semibold tracking-tight md:text-5xl">"Services & Solutions"</h2>
                <ShowcaseGrid offerings=SERVICES/>
                <ShowcaseGrid offerings=SOLUTIONS/>
            </div>
        </section>
    }
}

#[component]
fn ShowcaseGrid(offerings: &'static [Offering]) -> impl IntoView {
    view! {
        <div class="mt-12 grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-4">
            {offerings
                .iter()
                .map(|offering| view! {
                    <a
                        href=offering.href()
                        class="group rounded-2xl border border-neutral-200 p-6 transition hover:border-accent/60 hover:shadow-lg"
                    >
                        <h3 class="text-lg font-semibold group-hover:text-accent">{offering.title}</h3>
                        <p class="mt-2 text-sm leading-6 text-neutral-600">{offering.summary}</p>
                    </a>
                })
                .collect_view()}
        </div>
    }
}
