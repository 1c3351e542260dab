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
use crate::components::CaseStudyCard::*;
use crate::components::Hero::*;
use crate::components::Page::*;
use crate::content::{case_studies, Category};
use leptos::*;
use leptos_meta::*;

#[component]
pub fn Work() -> impl IntoView {
    view! {
        <Title text="Work"/>
        <Page>
            <Hero
                title="Selected"
                highlight="work"
                subtitle="Portals, websites and mobile apps we've designed and shipped for our clients."
                image="/images/work.jpg"
            />
            <WorkGallery/>
            <CallToAction
                heading="Have a project like these?"
                body="Tell us what you're building and we'll show you how we'd approach it."
            />
        </Page>
    }
}

/// Case study list with a category filter; `None` shows everything.
#[island]
fn WorkGallery() -> impl IntoView {
    let selected = create_rw_signal(None::<Category>);

    let filter_button = move |category: Option<Category>, label: String| {
        let class = move || {
            if selected() == category {
                "rounded-full bg-dark px-4 py-2 text-sm font-medium text-light"
            } else {
                "rounded-full border border-gray-300 px-4 py-2 text-sm font-medium text-dark/70 hover:border-dark"
            }
        };
        view! {
            <button
                type="button"
                class=class
                aria-pressed=move || (selected() == category).to_string()
                on:click=move |_| selected.set(category)
            >
                {label}
            </button>
        }
    };

    view! {
        <section class="bg-light text-dark">
            <div class="mx-auto flex max-w-6xl flex-wrap gap-3 px-6 pt-16">
                {filter_button(None, "All".to_string())}
                {Category::ALL
                    .into_iter()
                    .map(|category| filter_button(Some(category), category.to_string()))
                    .collect_view()}
            </div>
            <div class="divide-y divide-gray-200">
                {move || {
                    case_studies(selected())
                        .enumerate()
                        .map(|(index, study)| view! { <CaseStudyCard study index/> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
