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

use crate::content::CaseStudy;
use leptos::*;

#[component]
pub fn CaseStudyCard(study: &'static CaseStudy, index: usize) -> impl IntoView {
    // alternate the cover side down the page
    let header_order = if index % 2 == 0 { "" } else { "md:order-2" };

    view! {
        <article id=study.id class="relative py-20 md:py-28">
            <div class="mx-auto max-w-6xl px-6">
                <div class="grid items-end gap-8 md:grid-cols-12 md:gap-12">
                    <div class=format!("md:col-span-7 {header_order}")>
                        <div class="mb-3 inline-flex flex-wrap items-center gap-2 text-xs text-gray-500">
                            <span class="rounded-full border border-gray-200 px-2 py-1">{study.category.to_string()}</span>
                            {study
                                .tags
                                .iter()
                                .take(3)
                                .map(|tag| view! { <span class="rounded-full border border-gray-200 px-2 py-1">{*tag}</span> })
                                .collect_view()}
                        </div>
                        <h2 class="text-4xl font-light tracking-tight md:text-6xl">
                            {study.title}
                            {study.subtitle.map(|subtitle| view! { " — " <span class="font-semibold">{subtitle}</span> })}
                        </h2>
                    </div>
                    <p class="text-lg text-gray-600 md:col-span-5 md:justify-self-end">{study.summary}</p>
                </div>

                <div class="mt-10 aspect-[16/9] w-full overflow-hidden rounded-3xl border border-gray-200 md:mt-14">
                    <img src=study.cover alt=study.title class="h-full w-full object-cover" loading="lazy"/>
                </div>

                <dl class="mt-12 grid gap-8 md:mt-16 md:grid-cols-3 md:gap-12">
                    <Detail label="Problem" body=study.problem/>
                    <Detail label="Solution" body=study.solution/>
                    <Detail label="Impact" body=study.impact/>
                </dl>

                <div class="mt-10 flex flex-wrap items-center gap-x-8 gap-y-3 text-sm text-gray-500">
                    {study.role.map(|role| view! { <span>"Role: " {role}</span> })}
                    {study.timeline.map(|timeline| view! { <span>"Timeline: " {timeline}</span> })}
                    <span>"Stack: " {study.tech.join(", ")}</span>
                </div>
            </div>
        </article>
    }
}

#[component]
fn Detail(label: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <div>
            <dt class="text-xs font-semibold uppercase tracking-widest text-gray-500">{label}</dt>
            <dd class="mt-2 text-base leading-7 text-gray-800">{body}</dd>
        </div>
    }
}
