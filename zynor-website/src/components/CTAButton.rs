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

use leptos::*;

/// Pill button variants
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    /// Filled accent background
    Primary,
    /// Outlined on light backgrounds
    Outline,
    /// Translucent, for dark hero images
    Glass,
}

#[derive(Clone, Copy, PartialEq)]
pub enum ButtonSize {
    Medium,
    Large,
}

/// Pill-shaped call to action.
///
/// Renders an `<a>` when `href` is set and a `<button>` otherwise, so the
/// same styling serves navigation and form submission.
#[component]
pub fn CTAButton(
    children: Children,
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Medium)] size: ButtonSize,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] href: Option<String>,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(into, default = MaybeSignal::Static(false))] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let base_classes = "inline-flex items-center justify-center rounded-full font-semibold transition focus:outline-none focus-visible:ring-2 focus-visible:ring-accent/60 disabled:cursor-not-allowed disabled:opacity-60";

    let variant_classes = match variant {
        ButtonVariant::Primary => "bg-accent text-white shadow-md hover:opacity-90",
        ButtonVariant::Outline => "border border-neutral-300 bg-light text-dark shadow-sm hover:bg-accent hover:text-white",
        ButtonVariant::Glass => "border border-accent/60 bg-light/90 text-dark backdrop-blur hover:bg-accent hover:text-light",
    };

    let size_classes = match size {
        ButtonSize::Medium => "px-5 py-2.5 text-sm",
        ButtonSize::Large => "px-7 py-3.5 text-base",
    };

    let combined_class = format!("{base_classes} {variant_classes} {size_classes} {class}");

    match href {
        Some(href) => view! {
            <a href=href class=combined_class>
                {children()}
            </a>
        }
        .into_view(),
        None => view! {
            <button type=button_type class=combined_class disabled=move || disabled.get()>
                {children()}
            </button>
        }
        .into_view(),
    }
}
