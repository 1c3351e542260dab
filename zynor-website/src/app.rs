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

use crate::pages::About::*;
use crate::pages::Contact::*;
use crate::pages::Home::*;
use crate::pages::NotFound::*;
use crate::pages::Offering::*;
use crate::pages::Work::*;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    let formatter = |text| format!("{text} - Zynor");
    provide_meta_context();

    let json_ld = r#"
    {
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": "Zynor",
        "url": "https://zynor.ai/",
        "email": "info@zynor.ai",
        "telephone": "+1-813-921-1717",
        "address": {
            "@type": "PostalAddress",
            "addressRegion": "FL",
            "addressCountry": "US"
        }
    }
    "#;

    view! {
        <Html lang="en"/>
        <Stylesheet id="leptos" href="/pkg/zynor_website.css"/>
        <Title formatter/>
        <Meta
            name="description"
            content="Zynor is a software consultancy building web platforms, mobile apps, AI products and cloud infrastructure for growing businesses."
        />
        <Meta
            name="keywords"
            content="software consultancy, web development, mobile apps, ai ml, devops, ui ux design, florida software agency"
        />

        // Open Graph / Facebook
        <Meta property="og:type" content="website"/>
        <Meta property="og:site_name" content="Zynor"/>
        <Meta property="og:url" content="https://zynor.ai/"/>
        <Meta property="og:title" content="Zynor - Software engineering that moves business forward"/>
        <Meta property="og:image" content="https://zynor.ai/images/og-image.png"/>

        <Router>
            <Routes>
                <Route path="" view=Home/>
                <Route path="/about" view=About/>
                <Route path="/work" view=Work/>
                <Route path="/contact" view=Contact/>
                <Route path="/services/:slug" view=ServicePage/>
                <Route path="/solutions/:slug" view=SolutionPage/>
                <Route path="/*any" view=NotFound/>
            </Routes>
        </Router>
        <script type="application/ld+json">
            {json_ld}
        </script>
    }
}
