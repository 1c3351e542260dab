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

/// Full-bleed hero banner with a background image and optional call to action.
#[component]
pub fn Hero(
    #[prop(into)] title: String,
    #[prop(optional, into)] highlight: Option<String>,
    #[prop(into)] subtitle: String,
    #[prop(default = "/images/hero.jpg")] image: &'static str,
    #[prop(optional)] cta: Option<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <section class="relative isolate overflow-hidden bg-light text-dark">
            <div class="relative h-[70vh] md:h-[80vh]">
                <img src=image alt="" class="absolute inset-0 h-full w-full object-cover"/>
                <div
                    aria-hidden="true"
                    class="pointer-events-none absolute inset-0 bg-gradient-to-b from-black/60 via-black/40 to-transparent"
                ></div>
                <div class="relative z-10 mx-auto flex h-full max-w-5xl flex-col items-center justify-center px-4 text-center">
                    <h1 class="text-4xl font-extrabold leading-tight tracking-tight text-light drop-shadow md:text-6xl">
                        {title}
                        {highlight.map(|highlight| view! { " " <span class="text-accent">{highlight}</span> })}
                    </h1>
                    <p class="mt-4 max-w-2xl text-base leading-relaxed text-light/90 md:text-lg">{subtitle}</p>
                    {cta.map(|(href, text)| view! {
                        <div class="mt-8">
                            <CTAButton href=href variant=ButtonVariant::Glass>
                                {text}
                                <span aria-hidden="true" class="ml-2">"›"</span>
                            </CTAButton>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}
