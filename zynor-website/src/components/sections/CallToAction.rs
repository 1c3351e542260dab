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
use leptos::*;

#[component]
pub fn CallToAction(
    #[prop(default = "Have an ambitious build?")] heading: &'static str,
    #[prop(default = "Let's architect it with clarity, velocity, and reliability.")]
    body: &'static str,
) -> impl IntoView {
    view! {
        <section aria-labelledby="cta-title" class="mx-auto max-w-6xl px-6 py-20">
            <div class="rounded-3xl border border-neutral-200 p-10 text-center md:p-16">
                <h2 id="cta-title" class="text-3xl font-light tracking-tight md:text-5xl">{heading}</h2>
                <p class="mt-4 text-lg text-neutral-600 md:text-xl">{body}</p>
                <CTAButton href="/contact" size=ButtonSize::Large class="mt-8">
                    "Book a call"
                </CTAButton>
            </div>
        </section>
    }
}
