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

use crate::error_template::ErrorTemplate;
use crate::errors::SiteError;
use leptos::*;

/// Catch-all route for paths no other route matches.
#[component]
pub fn NotFound() -> impl IntoView {
    let mut errors = Errors::default();
    errors.insert_with_default_key(SiteError::NotFound);
    view! { <ErrorTemplate outside_errors=errors/> }
}
