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

//! Hover state for the custom cursor.
//!
//! Links report when the pointer is over them so the cursor dot can grow.
//! The flag lives in a context provided by [`CursorProvider`] and is only
//! visible to islands rendered inside it.

use leptos::*;

/// Whether the pointer currently hovers an interactive link.
#[derive(Debug, Clone, Copy)]
pub struct CursorState {
    hovered: RwSignal<bool>,
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            hovered: create_rw_signal(false),
        }
    }

    pub fn set_hovered(&self) {
        self.hovered.set(true);
    }

    pub fn unset_hovered(&self) {
        self.hovered.set(false);
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered.get()
    }
}

impl Default for CursorState {
    fn default() -> Self {
        Self::new()
    }
}

#[island]
pub fn CursorProvider(children: Children) -> impl IntoView {
    provide_context(CursorState::new());
    children()
}

/// Dot that follows the pointer and grows over links.
#[island]
pub fn CursorDot() -> impl IntoView {
    let cursor = use_context::<CursorState>();
    let position = create_rw_signal((0, 0));

    let listener = window_event_listener(ev::mousemove, move |ev| {
        position.set((ev.client_x(), ev.client_y()));
    });
    on_cleanup(move || listener.remove());

    let hovered = move || cursor.is_some_and(|cursor| cursor.is_hovered());

    view! {
        <div
            aria-hidden="true"
            class=move || format!(
                "pointer-events-none fixed z-[90] hidden rounded-full bg-accent/40 transition-[width,height] duration-150 md:block {}",
                if hovered() { "h-10 w-10" } else { "h-3 w-3" }
            )
            style=move || {
                let (x, y) = position();
                format!("left: {x}px; top: {y}px; transform: translate(-50%, -50%);")
            }
        ></div>
    }
}

/// Link that toggles [`CursorState`] on hover. Only interactive inside an island.
#[component]
pub fn HoverLink(
    #[prop(into)] href: String,
    children: Children,
    #[prop(optional, into)] class: String,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let cursor = use_context::<CursorState>();

    view! {
        <a
            href=href
            class=class
            on:mouseenter=move |_| {
                if let Some(cursor) = cursor {
                    cursor.set_hovered();
                }
            }
            on:mouseleave=move |_| {
                if let Some(cursor) = cursor {
                    cursor.unset_hovered();
                }
            }
            on:click=move |_| {
                if let Some(cursor) = cursor {
                    cursor.unset_hovered();
                }
                if let Some(on_click) = &on_click {
                    on_click.call(());
                }
            }
        >
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_flag_toggles() {
        let runtime = create_runtime();

        let cursor = CursorState::new();
        assert!(!cursor.is_hovered());
        cursor.set_hovered();
        assert!(cursor.is_hovered());
        cursor.unset_hovered();
        assert!(!cursor.is_hovered());

        runtime.dispose();
    }

    #[test]
    fn copies_share_the_same_flag() {
        let runtime = create_runtime();

        let cursor = CursorState::new();
        let copy = cursor;
        copy.set_hovered();
        assert!(cursor.is_hovered());

        runtime.dispose();
    }
}
