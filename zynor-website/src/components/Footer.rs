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

use crate::content::{SERVICES, SOLUTIONS};
use leptos::*;

pub const CONTACT_PHONE_DISPLAY: &str = "(813) 921-1717";
pub const CONTACT_PHONE_HREF: &str = "tel:8139211717";
pub const CONTACT_EMAIL: &str = "info@zynor.ai";
pub const CONTACT_LOCATION: &str = "Florida";

const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("Facebook", "https://facebook.com"),
    ("Instagram", "https://instagram.com"),
    ("YouTube", "https://youtube.com"),
    ("TikTok", "https://tiktok.com"),
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="relative overflow-hidden bg-dark px-6 py-16 text-light">
            <div class="absolute top-0 left-0 right-0 h-[1px] bg-gradient-to-r from-transparent via-accent/30 to-transparent"></div>

            <div class="relative z-10 mx-auto grid max-w-7xl grid-cols-1 gap-12 md:grid-cols-4">
                <div>
                    <a href="/" class="text-2xl font-semibold text-accent" style="letter-spacing: 0.06em;">
                        "ZYNOR"
                    </a>
                    <p class="mt-4 text-sm text-light/70">
                        "Software engineering, design and consulting for teams that need to ship."
                    </p>
                </div>

                <FooterColumn heading="Services" links=SERVICES.iter().map(|o| (o.title, o.href())).collect()/>
                <FooterColumn heading="Solutions" links=SOLUTIONS.iter().map(|o| (o.title, o.href())).collect()/>

                <div>
                    <h4 class="text-sm font-semibold uppercase tracking-widest text-light/60">"Contact"</h4>
                    <ul class="mt-4 space-y-2 text-sm text-light/80">
                        <li><a href=CONTACT_PHONE_HREF class="hover:text-accent">{CONTACT_PHONE_DISPLAY}</a></li>
                        <li><a href=format!("mailto:{CONTACT_EMAIL}") class="hover:text-accent">{CONTACT_EMAIL}</a></li>
                        <li>{CONTACT_LOCATION}</li>
                    </ul>
                    <div class="mt-6 flex flex-wrap gap-4 text-sm">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|(name, href)| view! {
                                <a
                                    href=*href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-light/70 transition hover:text-accent"
                                >
                                    {*name}
                                </a>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="relative mx-auto mt-12 flex max-w-7xl flex-col items-center justify-between gap-4 border-t border-light/10 pt-8 text-sm text-light/50 md:flex-row">
                <p>"Copyright 2025 Zynor. All rights reserved."</p>
                <div class="flex gap-6">
                    <a href="/about" class="hover:text-light">"About"</a>
                    <a href="/work" class="hover:text-light">"Our Work"</a>
                    <a href="/contact" class="hover:text-light">"Contact"</a>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn FooterColumn(heading: &'static str, links: Vec<(&'static str, String)>) -> impl IntoView {
    view! {
        <div>
            <h4 class="text-sm font-semibold uppercase tracking-widest text-light/60">{heading}</h4>
            <ul class="mt-4 space-y-2 text-sm text-light/80">
                {links
                    .into_iter()
                    .map(|(title, href)| view! {
                        <li><a href=href class="transition hover:text-accent">{title}</a></li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
