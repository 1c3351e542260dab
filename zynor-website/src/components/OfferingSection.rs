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

use crate::components::CTAButton::*;
use crate::content::Offering;
use leptos::*;

/// Landing page body of a single service or solution.
#[component]
pub fn OfferingSection(offering: &'static Offering) -> impl IntoView {
    view! {
        <section>
            <div class="w-full bg-white text-neutral-900">
                <div class="mx-auto max-w-6xl px-6 pt-36 pb-24 text-center md:pb-32">
                    <p class="text-sm font-semibold uppercase tracking-widest text-accent">{offering.eyebrow}</p>
                    <h1 class="mt-4 text-4xl font-bold leading-[1.15] tracking-tight md:text-6xl">{offering.heading}</h1>
                    <p class="mx-auto mt-6 max-w-3xl text-lg leading-relaxed text-neutral-600">{offering.subheading}</p>
                    <CTAButton href="/contact" size=ButtonSize::Large class="mt-10">
                        "Get started"
                    </CTAButton>
                </div>
            </div>

            <div class="w-full bg-neutral-50 text-neutral-900">
                <div class="mx-auto grid max-w-6xl grid-cols-1 gap-14 px-6 py-24 md:grid-cols-2 md:gap-20">
                    <div class="space-y-12">
                        {offering
                            .blurbs
                            .iter()
                            .map(|blurb| view! {
                                <div>
                                    <h3 class="text-xl font-semibold tracking-tight md:text-2xl">{blurb.title}</h3>
                                    <p class="mt-3 text-base leading-7 text-neutral-700">{blurb.body}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                    <div class="relative overflow-hidden rounded-3xl border border-black/5 shadow-lg">
                        <img
                            src=offering.image
                            alt=offering.image_alt
                            class="aspect-[4/3] w-full object-cover"
                            loading="lazy"
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}
