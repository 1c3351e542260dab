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

use crate::components::Cursor::HoverLink;
use crate::content::{Offering, OfferingKind};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Menu {
    Services,
    Solutions,
}

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <header
            class="fixed inset-x-0 top-0 z-[70] bg-white/95 shadow-sm backdrop-blur supports-[backdrop-filter]:bg-white/80"
            role="banner"
        >
            <NavMenus/>
        </header>
    }
}

#[island]
fn NavMenus() -> impl IntoView {
    let open = create_rw_signal(None::<Menu>);
    let mobile_open = create_rw_signal(false);

    // Escape closes dropdowns and the mobile menu
    let listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            open.set(None);
            mobile_open.set(false);
        }
    });
    on_cleanup(move || listener.remove());

    view! {
        <nav
            class="mx-auto grid max-w-7xl grid-cols-[auto_1fr_auto] items-center gap-2 px-4 py-3 md:px-6 lg:px-8"
            aria-label="Primary"
        >
            <a href="/" class="flex items-center gap-2 font-semibold tracking-wide text-gray-900">
                <span class="text-xl text-accent md:text-2xl" style="letter-spacing: 0.06em;">
                    "ZYNOR"
                </span>
            </a>

            <div class="hidden items-center justify-center gap-1 lg:flex">
                <Dropdown
                    label="Services"
                    menu=Menu::Services
                    open=open
                    entries=OfferingKind::Service.catalogue()
                />
                <Dropdown
                    label="Solutions"
                    menu=Menu::Solutions
                    open=open
                    entries=OfferingKind::Solution.catalogue()
                />
                <HoverLink href="/work" class="rounded-full px-3 py-2 text-sm font-medium text-gray-700 hover:text-accent">
                    "Our Work"
                </HoverLink>
                <HoverLink href="/about" class="rounded-full px-3 py-2 text-sm font-medium text-gray-700 hover:text-accent">
                    "About"
                </HoverLink>
            </div>

            <div class="flex items-center justify-end gap-3">
                <HoverLink
                    href="/contact"
                    class="hidden rounded-full bg-accent px-5 py-2 text-sm font-semibold text-white shadow-sm hover:opacity-90 lg:inline-flex"
                >
                    "Contact Us"
                </HoverLink>
                <button
                    class="p-2 text-gray-700 hover:text-gray-900 lg:hidden"
                    on:click=move |_| mobile_open.update(|open| *open = !*open)
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || mobile_open().to_string()
                >
                    <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path
                            class=move || if mobile_open() { "hidden" } else { "" }
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d="M4 6h16M4 12h16M4 18h16"
                        />
                        <path
                            class=move || if mobile_open() { "" } else { "hidden" }
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d="M6 18L18 6M6 6l12 12"
                        />
                    </svg>
                </button>
            </div>
        </nav>

        <MobileMenu open=mobile_open/>
    }
}

#[component]
fn Dropdown(
    label: &'static str,
    menu: Menu,
    open: RwSignal<Option<Menu>>,
    entries: &'static [Offering],
) -> impl IntoView {
    let active = move || open() == Some(menu);

    view! {
        <div
            class="relative"
            on:mouseenter=move |_| open.set(Some(menu))
            on:mouseleave=move |_| open.set(None)
        >
            <button
                class="rounded-full px-3 py-2 text-sm font-medium text-gray-700 hover:text-accent"
                aria-haspopup="true"
                aria-expanded=move || active().to_string()
                on:click=move |_| open.update(|open| {
                    *open = if *open == Some(menu) { None } else { Some(menu) };
                })
            >
                {label}
            </button>
            <div
                class=move || format!(
                    "absolute left-1/2 top-full z-[80] w-[min(100vw-2rem,560px)] -translate-x-1/2 rounded-2xl border border-gray-100 bg-white p-4 shadow-xl {}",
                    if active() { "block" } else { "hidden" }
                )
                role="menu"
            >
                <ul class="grid grid-cols-2 gap-2">
                    {entries
                        .iter()
                        .map(|entry| {
                            view! {
                                <li>
                                    <HoverLink
                                        href=entry.href()
                                        class="block rounded-lg p-3 transition hover:bg-gray-50"
                                        on_click=Callback::new(move |_| open.set(None))
                                    >
                                        <div class="text-sm font-medium text-gray-900">{entry.title}</div>
                                        <p class="mt-1 text-[13px] leading-5 text-gray-600">{entry.summary}</p>
                                    </HoverLink>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

#[component]
fn MobileMenu(open: RwSignal<bool>) -> impl IntoView {
    let close = Callback::new(move |_| open.set(false));
    let sections = [
        ("Services", OfferingKind::Service.catalogue()),
        ("Solutions", OfferingKind::Solution.catalogue()),
    ];

    view! {
        <div class=move || format!(
            "fixed inset-x-0 top-[56px] bottom-0 overflow-y-auto bg-white px-6 py-6 lg:hidden {}",
            if open() { "block" } else { "hidden" }
        )>
            {sections
                .into_iter()
                .map(|(heading, entries)| {
                    view! {
                        <div class="mb-6">
                            <div class="mb-2 text-[10px] font-semibold uppercase tracking-[.12em] text-gray-500">
                                {heading}
                            </div>
                            <ul class="space-y-1">
                                {entries
                                    .iter()
                                    .map(|entry| {
                                        view! {
                                            <li>
                                                <HoverLink
                                                    href=entry.href()
                                                    class="block py-2 text-base font-medium text-gray-800"
                                                    on_click=close.clone()
                                                >
                                                    {entry.title}
                                                </HoverLink>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })
                .collect_view()}
            <div class="space-y-1 border-t border-gray-100 pt-4">
                <HoverLink href="/work" class="block py-2 text-base font-medium text-gray-800" on_click=close.clone()>
                    "Our Work"
                </HoverLink>
                <HoverLink href="/about" class="block py-2 text-base font-medium text-gray-800" on_click=close.clone()>
                    "About"
                </HoverLink>
                <HoverLink href="/contact" class="block py-2 text-base font-semibold text-accent" on_click=close.clone()>
                    "Contact Us"
                </HoverLink>
            </div>
        </div>
    }
}
