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

use crate::components::Page::*;
use crate::errors::SiteError;
use cfg_if::cfg_if;
use leptos::*;
use leptos_meta::Title;
#[cfg(feature = "ssr")]
use leptos_axum::ResponseOptions;

/// Renders the [`SiteError`]s collected while rendering a route.
///
/// Errors raised outside the reactive tree (e.g. the static file fallback)
/// come in through `outside_errors`; errors caught by an `<ErrorBoundary>`
/// come in through `errors`.
#[component]
pub fn ErrorTemplate(
    #[prop(optional)] outside_errors: Option<Errors>,
    #[prop(optional)] errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = match (outside_errors, errors) {
        (Some(outside), _) => outside,
        (None, Some(errors)) => errors.get_untracked(),
        (None, None) => Errors::default(),
    };

    let mut errors: Vec<SiteError> = errors
        .into_iter()
        .filter_map(|(_key, error)| error.downcast_ref::<SiteError>().cloned())
        .collect();
    if errors.is_empty() {
        errors.push(SiteError::InternalServerError);
    }

    cfg_if! {
        if #[cfg(feature = "ssr")] {
            if let Some(response) = use_context::<ResponseOptions>() {
                response.set_status(errors[0].status_code());
            }
        }
    }

    let error = errors[0].clone();
    view! {
        <Title text=error.to_string()/>
        <Page>
            <section class="mx-auto max-w-3xl px-6 pt-40 pb-32 text-center">
                <p class="text-sm font-semibold uppercase tracking-widest text-accent">
                    {error.status_code().as_u16()}
                </p>
                <h1 class="mt-4 text-4xl font-bold tracking-tight md:text-6xl">{error.to_string()}</h1>
                <a
                    href="/"
                    class="mt-10 inline-flex items-center rounded-full bg-accent px-7 py-3.5 font-medium text-white"
                >
                    "Back to home"
                </a>
            </section>
        </Page>
    }
}
