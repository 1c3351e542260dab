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

//! Contact form island.
//!
//! The whole [`ContactForm`] lives in one signal. Keystrokes go through
//! [`ContactForm::update`], and a submit calls [`ContactForm::begin_submit`]
//! and sends the returned payload on the browser executor, then resolves it
//! with [`ContactForm::complete_submit`].

use crate::components::CTAButton::*;
use crate::components::Footer::{
    CONTACT_EMAIL, CONTACT_LOCATION, CONTACT_PHONE_DISPLAY, CONTACT_PHONE_HREF,
};
use leptos::*;
use std::time::Duration;
use zynor_contact::config::DEFAULT_BASE_URL;
use zynor_contact::{ContactClientConfig, ContactForm, Field, WebhookClient};

/// Webhook settings for one submission.
///
/// The server passes what it read from its environment; without a base URL
/// the form posts to the origin that served the page.
fn webhook_config(
    base_url: Option<&str>,
    endpoint_path: Option<&str>,
    timeout_secs: Option<u64>,
    page_origin: impl FnOnce() -> String,
) -> ContactClientConfig {
    let mut config = match base_url {
        Some(base_url) => ContactClientConfig::new(base_url),
        None => ContactClientConfig::new(&page_origin()),
    };
    if let Some(path) = endpoint_path {
        config = config.with_endpoint_path(path);
    }
    if let Some(secs) = timeout_secs.filter(|secs| *secs > 0) {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    config
}

fn page_origin() -> String {
    window()
        .location()
        .origin()
        .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}

#[island]
pub fn ContactUs(
    base_url: Option<String>,
    endpoint_path: Option<String>,
    timeout_secs: Option<u64>,
) -> impl IntoView {
    let contact = create_rw_signal(ContactForm::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = contact.try_update(ContactForm::begin_submit).flatten() else {
            return;
        };
        let client = WebhookClient::new(webhook_config(
            base_url.as_deref(),
            endpoint_path.as_deref(),
            timeout_secs,
            page_origin,
        ));
        spawn_local(async move {
            let outcome = client.send(&request).await;
            contact.update(|contact| contact.complete_submit(outcome));
        });
    };

    let submitting = Signal::derive(move || contact.with(ContactForm::is_submitting));
    let success = move || {
        contact.with(|contact| contact.status().success_message().map(str::to_string))
    };
    let error = move || contact.with(|contact| contact.status().error_message().map(str::to_string));

    view! {
        <section id="contact" class="relative bg-light text-dark">
            <div class="mx-auto max-w-7xl px-4 py-16 sm:px-6 md:py-24 lg:px-8">
                <div class="grid grid-cols-1 gap-12 md:mt-6 lg:grid-cols-12">
                    <div class="lg:col-span-7">
                        <h3 class="text-3xl font-semibold text-dark">"Contact Us"</h3>

                        <form class="mt-6 space-y-7" on:submit=on_submit novalidate=true>
                            <FormField contact field=Field::Name label="Full Name" input_type="text" placeholder="John Carter"/>
                            <FormField contact field=Field::Email label="E-mail" input_type="email" placeholder="hi@zynor.ai"/>
                            <FormField contact field=Field::Phone label="Phone" input_type="tel" placeholder="123-456-7890"/>
                            <FormField contact field=Field::Message label="Message" input_type="textarea" placeholder="How can we help?"/>

                            {move || success().map(|message| view! {
                                <div role="status" class="rounded-md border border-green-200 bg-green-50 px-4 py-3 text-sm text-green-800">
                                    {message}
                                </div>
                            })}
                            {move || error().map(|message| view! {
                                <div role="alert" class="rounded-md border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-800">
                                    {message}
                                </div>
                            })}

                            <div class="pt-2">
                                <CTAButton
                                    button_type="submit"
                                    variant=ButtonVariant::Outline
                                    size=ButtonSize::Large
                                    disabled=submitting
                                >
                                    {move || if submitting() { "Sending..." } else { "Contact Us" }}
                                </CTAButton>
                            </div>
                        </form>
                    </div>

                    <div class="lg:col-span-5">
                        <dl class="space-y-6 text-[15px]">
                            <div>
                                <dt class="font-semibold text-dark">"Phone"</dt>
                                <dd class="text-dark/80"><a href=CONTACT_PHONE_HREF>{CONTACT_PHONE_DISPLAY}</a></dd>
                            </div>
                            <div>
                                <dt class="font-semibold text-dark">"E-mail"</dt>
                                <dd class="break-all text-dark/80">
                                    <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                                </dd>
                            </div>
                            <div>
                                <dt class="font-semibold text-dark">"Location"</dt>
                                <dd class="text-dark/70">{CONTACT_LOCATION}</dd>
                            </div>
                        </dl>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// One labelled input bound to `field` of the form signal.
#[component]
fn FormField(
    contact: RwSignal<ContactForm>,
    field: Field,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let value = move || contact.with(|contact| contact.form().get(field).to_string());
    let on_input = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        contact.update(|contact| contact.update(field, &value));
    };
    let hint = move || {
        contact.with(|contact| {
            if field == Field::Phone && contact.form().phone_invalid() {
                Some("Enter a 10-digit number")
            } else if contact.invalid().is_some_and(|err| err.field() == field) {
                Some("Required")
            } else {
                None
            }
        })
    };
    let input_class = move || {
        format!(
            "mt-2 block w-full border-0 border-b bg-transparent placeholder:text-neutral-400 focus:ring-0 {}",
            if hint().is_some() {
                "border-red-400 focus:border-red-600"
            } else {
                "border-neutral-300 focus:border-accent"
            }
        )
    };
    let required = field != Field::Phone;

    let control = if input_type == "textarea" {
        view! {
            <textarea
                name=field.as_str()
                rows=4
                required=required
                placeholder=placeholder
                class=move || format!("{} resize-none", input_class())
                prop:value=value
                on:input=on_input
                aria-invalid=move || hint().is_some().to_string()
            ></textarea>
        }
        .into_view()
    } else {
        view! {
            <input
                type=input_type
                name=field.as_str()
                required=required
                placeholder=placeholder
                class=input_class
                prop:value=value
                on:input=on_input
                aria-invalid=move || hint().is_some().to_string()
            />
        }
        .into_view()
    };

    view! {
        <label class="block">
            <div class="flex items-center justify-between">
                <span class="text-sm text-dark/80">{label}</span>
                {move || hint().map(|hint| view! { <span class="text-xs text-red-600">{hint}</span> })}
            </div>
            {control}
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> String {
        "https://zynor.ai".to_string()
    }

    #[test]
    fn page_origin_is_used_without_server_settings() {
        let config = webhook_config(None, None, None, origin);
        assert_eq!(config.endpoint_url(), "https://zynor.ai/api/webhook");
        assert_eq!(config.timeout, zynor_contact::config::DEFAULT_TIMEOUT);
    }

    #[test]
    fn server_settings_override_the_page_origin() {
        let config = webhook_config(
            Some("https://hooks.example.com/"),
            Some("/contact"),
            Some(15),
            || unreachable!("origin is not consulted"),
        );
        assert_eq!(config.endpoint_url(), "https://hooks.example.com/contact");
        assert_eq!(config.timeout, Duration::from_secs(15));
    }

    #[test]
    fn zero_timeout_keeps_the_default() {
        let config = webhook_config(None, None, Some(0), origin);
        assert_eq!(config.timeout, zynor_contact::config::DEFAULT_TIMEOUT);
    }
}
