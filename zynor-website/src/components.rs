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

pub mod CTAButton;
pub mod CaseStudyCard;
pub mod ContactUs;
pub mod Cursor;
pub mod Footer;
pub mod Hero;
pub mod Navbar;
pub mod OfferingSection;
pub mod Page;

// Section components
pub mod sections {
    pub mod CallToAction;
    pub mod ServiceShowcase;
    pub mod Vision;
}

pub use CTAButton::*;
pub use CaseStudyCard::*;
pub use ContactUs::*;
pub use Cursor::*;
pub use Footer::*;
pub use Hero::*;
pub use Navbar::*;
pub use OfferingSection::*;
pub use Page::*;
