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

//! `/services/:slug` and `/solutions/:slug`.

use crate::components::sections::CallToAction::*;
use crate::components::OfferingSection::*;
use crate::components::Page::*;
use crate::content::{find_offering, OfferingKind};
use crate::pages::NotFound::*;
use leptos::*;
use leptos_meta::*;
use leptos_router::use_params_map;

#[component]
pub fn ServicePage() -> impl IntoView {
    view! { <OfferingPage kind=OfferingKind::Service/> }
}

#[component]
pub fn SolutionPage() -> impl IntoView {
    view! { <OfferingPage kind=OfferingKind::Solution/> }
}

/// Looks the `:slug` param up in the catalogue of `kind`; unknown slugs 404.
#[component]
fn OfferingPage(kind: OfferingKind) -> impl IntoView {
    let params = use_params_map();
    let offering = move || {
        params.with(|params| {
            params
                .get("slug")
                .and_then(|slug| find_offering(kind, slug))
        })
    };

    move || match offering() {
        Some(offering) => view! {
            <Title text=offering.title/>
            <Page>
                <OfferingSection offering/>
                <CallToAction/>
            </Page>
        }
        .into_view(),
        None => {
            log::debug!("No {} matches the requested slug", kind.path_segment());
            view! { <NotFound/> }.into_view()
        }
    }
}
