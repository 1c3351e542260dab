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

use leptos::*;

#[component]
pub fn Vision() -> impl IntoView {
    view! {
        <section
            aria-labelledby="vision-title"
            class="relative overflow-hidden py-24 text-light md:py-32"
            style="background: linear-gradient(180deg, rgb(108,24,152) 0%, rgb(10,12,18) 100%);"
        >
            <div class="relative mx-auto max-w-5xl px-6 text-center">
                <p class="text-sm font-semibold uppercase tracking-[.3em] text-light/70">"Vision"</p>
                <h2 id="vision-title" class="mt-6 text-3xl font-light leading-snug md:text-5xl">
                    "Building " <Glow>"category-defining"</Glow>
                    " software for modern businesses through " <Glow>"creative acquisition"</Glow>
                    " systems and " <Glow>"bulletproof operations"</Glow> "."
                </h2>
            </div>
        </section>
    }
}

#[component]
fn Glow(children: Children) -> impl IntoView {
    view! { <span class="font-semibold italic text-white">{children()}</span> }
}
