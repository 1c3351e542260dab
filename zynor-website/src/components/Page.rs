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

use crate::components::Cursor::*;
use crate::components::Footer::*;
use crate::components::Navbar::*;
use leptos::*;

/// Shared chrome around every page: navbar, footer and cursor dot.
#[component]
pub fn Page(children: Children) -> impl IntoView {
    view! {
        <CursorProvider>
            <div class="overflow-x-hidden bg-light text-dark">
                <Navbar/>
                <main class="flex-1">{children()}</main>
                <Footer/>
            </div>
            <CursorDot/>
        </CursorProvider>
    }
}
