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

//! Static site content: service and solution offerings, and case studies.
//!
//! Pages look entries up by slug, so adding an offering here is enough to
//! get a navbar entry and a page for it.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferingKind {
    Service,
    Solution,
}

impl OfferingKind {
    /// First path segment of the offering's pages.
    pub fn path_segment(self) -> &'static str {
        match self {
            OfferingKind::Service => "services",
            OfferingKind::Solution => "solutions",
        }
    }

    pub fn catalogue(self) -> &'static [Offering] {
        match self {
            OfferingKind::Service => SERVICES,
            OfferingKind::Solution => SOLUTIONS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blurb {
    pub title: &'static str,
    pub body: &'static str,
}

/// A service or solution with its own landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offering {
    pub kind: OfferingKind,
    pub slug: &'static str,
    /// Short name used in navigation.
    pub title: &'static str,
    /// One-liner shown under the title in dropdowns.
    pub summary: &'static str,
    pub eyebrow: &'static str,
    pub heading: &'static str,
    pub subheading: &'static str,
    pub blurbs: &'static [Blurb],
    pub image: &'static str,
    pub image_alt: &'static str,
}

impl Offering {
    pub fn href(&self) -> String {
        format!("/{}/{}", self.kind.path_segment(), self.slug)
    }
}

pub const SERVICES: &[Offering] = &[
    Offering {
        kind: OfferingKind::Service,
        slug: "software-engineering",
        title: "Software Engineering",
        summary: "Robust and scalable custom software development.",
        eyebrow: "Software Services",
        heading: "Software Engineering Services",
        subheading: "Custom software engineering that delivers robust, scalable, high-performance systems built with modern tooling and proven methodologies.",
        blurbs: &[
            Blurb {
                title: "Robust, Scalable Software Solutions",
                body: "We design systems that keep working as your traffic, data and team grow.",
            },
            Blurb {
                title: "Innovation with Agile Software Delivery",
                body: "Short iterations and continuous feedback keep the product aligned with your business.",
            },
        ],
        image: "/images/software-engineering.jpg",
        image_alt: "Engineers reviewing an architecture diagram",
    },
    Offering {
        kind: OfferingKind::Service,
        slug: "database-development",
        title: "Database Development",
        summary: "Data storage and I/O that forms the backbone your technology.",
        eyebrow: "Software Services",
        heading: "Database Development Services",
        subheading: "Flexible, high-performing database solutions that deliver the information you need when you need it.",
        blurbs: &[
            Blurb {
                title: "Sculpting Your Information Foundation",
                body: "Schemas, indexes and migrations designed around how your data is actually used.",
            },
            Blurb {
                title: "Secure, Safe, and Compliant",
                body: "Access control, backups and auditing built in from the first table.",
            },
        ],
        image: "/images/database-development.jpg",
        image_alt: "Database schema on a monitor",
    },
    Offering {
        kind: OfferingKind::Service,
        slug: "ui-ux",
        title: "UI & UX Design",
        summary: "User experience design and product strategy.",
        eyebrow: "Software Services",
        heading: "UI/UX Design Services",
        subheading: "Design that turns your ideas into intuitive, user-friendly interfaces.",
        blurbs: &[
            Blurb {
                title: "Intuitive, Engaging User Experiences",
                body: "User research and usability testing shape every screen we ship.",
            },
            Blurb {
                title: "Consistent, Cohesive Design",
                body: "A shared design system keeps web, mobile and product surfaces coherent.",
            },
        ],
        image: "/images/ui-ux-design.jpg",
        image_alt: "UI/UX wireframes and design system components",
    },
    Offering {
        kind: OfferingKind::Service,
        slug: "devops-cicd",
        title: "DevOps & CI/CD",
        summary: "Streamlined ops for faster, more reliable delivery.",
        eyebrow: "Software Services",
        heading: "DevOps & CI/CD Services",
        subheading: "Continuous integration and delivery pipelines that automate and harden your release process.",
        blurbs: &[
            Blurb {
                title: "Minimize Overhead, Maximize Development",
                body: "Automated builds, tests and deployments free your team to focus on features.",
            },
            Blurb {
                title: "Chaos into Consistency",
                body: "Reproducible environments remove the surprises between staging and production.",
            },
        ],
        image: "/images/devops.jpg",
        image_alt: "Deployment pipeline dashboard",
    },
];

pub const SOLUTIONS: &[Offering] = &[
    Offering {
        kind: OfferingKind::Solution,
        slug: "web-development",
        title: "Web Development",
        summary: "High-performance web solutions for modern businesses.",
        eyebrow: "Software Services",
        heading: "Top-Tier Web Development & Software",
        subheading: "High-performance web solutions focused on your business needs.",
        blurbs: &[Blurb {
            title: "Crafting Powerful, Responsive Web Experiences",
            body: "Fast, accessible sites and applications that work on every device.",
        }],
        image: "/images/web-development.jpg",
        image_alt: "Responsive web application on several devices",
    },
    Offering {
        kind: OfferingKind::Solution,
        slug: "mobile-apps",
        title: "Mobile App Development",
        summary: "Custom mobile applications for iOS and Android platforms.",
        eyebrow: "Software Services",
        heading: "Innovative Mobile App Development & Software",
        subheading: "Custom mobile applications for iOS and Android.",
        blurbs: &[Blurb {
            title: "Native, Hybrid, or Cross-Platform",
            body: "We pick the stack that fits your audience, budget and roadmap.",
        }],
        image: "/images/mobile-apps.jpg",
        image_alt: "Mobile app screens",
    },
    Offering {
        kind: OfferingKind::Solution,
        slug: "expert-consulting",
        title: "Expert Consulting",
        summary: "Expert witness and IP litigation consulting for software expertise.",
        eyebrow: "Expert witness",
        heading: "Expert Consulting for Software Litigation",
        subheading: "Expert witness testimony, IP analysis and consulting grounded in deep industry experience.",
        blurbs: &[Blurb {
            title: "Bridging the Gap Between Technology and Law",
            body: "Clear explanations of complex software for courts, counsel and clients.",
        }],
        image: "/images/expert-consulting.jpg",
        image_alt: "Consultant presenting source code analysis",
    },
    Offering {
        kind: OfferingKind::Solution,
        slug: "ai-ml",
        title: "AI & Machine Learning",
        summary: "Intelligent solutions driving innovation and automation.",
        eyebrow: "Software Services",
        heading: "AI Software Development",
        subheading: "Artificial intelligence and machine learning that automate processes and surface insight.",
        blurbs: &[Blurb {
            title: "Customized AI Solutions for Real-world Challenges",
            body: "Models and pipelines tailored to your data rather than generic demos.",
        }],
        image: "/images/ai-ml.jpg",
        image_alt: "Neural network visualisation",
    },
    Offering {
        kind: OfferingKind::Solution,
        slug: "sprint-zero",
        title: "Sprint Zero",
        summary: "Intensive pre-development research and planning phase.",
        eyebrow: "Software Services",
        heading: "Sprint Zero & Application Roadmapping",
        subheading: "A few weeks of research and planning that set a solid foundation for the project.",
        blurbs: &[
            Blurb {
                title: "Stakeholder discovery",
                body: "Interviews and workshops that pin down goals, users and constraints.",
            },
            Blurb {
                title: "Clear project roadmap",
                body: "An architecture, backlog and estimate you can build on with confidence.",
            },
        ],
        image: "/images/sprint-zero.jpg",
        image_alt: "Roadmap on a whiteboard",
    },
    Offering {
        kind: OfferingKind::Solution,
        slug: "modernization",
        title: "Software Modernization",
        summary: "Breathe new life into outdated and legacy software.",
        eyebrow: "Software Services",
        heading: "Legacy Software Modernization & Migration",
        subheading: "Reimagine and retrofit legacy applications for today's platforms.",
        blurbs: &[Blurb {
            title: "Bridging the Generation Gap",
            body: "Incremental migrations that keep the business running while the stack evolves.",
        }],
        image: "/images/modernization.jpg",
        image_alt: "Legacy terminal next to a modern dashboard",
    },
    Offering {
        kind: OfferingKind::Solution,
        slug: "maintenance",
        title: "Software Maintenance",
        summary: "Keep your software secure, up to date, and bug-free.",
        eyebrow: "Software Services",
        heading: "Software Maintenance & Support",
        subheading: "Patching, dependency upgrades and monitoring that keep your software running.",
        blurbs: &[Blurb {
            title: "Heroes Behind the Scenes",
            body: "Proactive updates and fast fixes before issues reach your users.",
        }],
        image: "/images/maintenance.jpg",
        image_alt: "Monitoring dashboard with healthy services",
    },
    Offering {
        kind: OfferingKind::Solution,
        slug: "project-takeover",
        title: "Project Takeover",
        summary: "Revitalize projects with expert guidance and execution.",
        eyebrow: "Software Services",
        heading: "Project Takeover & Rescue",
        subheading: "Strategic guidance and hands-on development to finish stalled projects.",
        blurbs: &[Blurb {
            title: "Seamless Transition, Rapid Results",
            body: "A structured handover followed by visible progress within weeks.",
        }],
        image: "/images/project-takeover.jpg",
        image_alt: "Team planning a project recovery",
    },
];

/// Look up an offering by its URL slug.
pub fn find_offering(kind: OfferingKind, slug: &str) -> Option<&'static Offering> {
    kind.catalogue().iter().find(|offering| offering.slug == slug)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Portal,
    Website,
    MobileApp,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Portal, Category::Website, Category::MobileApp];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Portal => "Portal",
            Category::Website => "Website",
            Category::MobileApp => "Mobile App",
        })
    }
}

/// A project shown on the work page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseStudy {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub category: Category,
    pub summary: &'static str,
    pub problem: &'static str,
    pub solution: &'static str,
    pub impact: &'static str,
    pub tech: &'static [&'static str],
    pub tags: &'static [&'static str],
    pub cover: &'static str,
    pub timeline: Option<&'static str>,
    pub role: Option<&'static str>,
}

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        id: "crm-portal",
        title: "Customer CRM Portal",
        subtitle: Some("Accounts, Packages & Additional Modules"),
        category: Category::Portal,
        summary: "A role-based CRM that centralizes leads, clients, packages, tasks, and reporting with granular permissions.",
        problem: "Client teams were scattered across spreadsheets and chat threads with no single source of truth for progress or SLAs.",
        solution: "A modular CRM portal with organization hierarchies, package items, progress tracking, task notes and audit trails.",
        impact: "Cut weekly status time by 68% and reduced approval turnaround from days to hours.",
        tech: &["Next.js", "TypeScript", "PostgreSQL", "Prisma"],
        tags: &["Multi-tenant", "RBAC", "Audit Trail"],
        cover: "/work/crm/cover.jpg",
        timeline: Some("2024 → 2025"),
        role: Some("Product, Full-stack, DevOps"),
    },
    CaseStudy {
        id: "contract-agency-ops",
        title: "Contract Agency Operations Portal",
        subtitle: Some("Workforce, Contracts & Timesheets"),
        category: Category::Portal,
        summary: "End-to-end portal for contract staffing: onboarding, assignment management, timesheets, and invoicing.",
        problem: "Manual timesheet collection and scattered contracts caused billing delays and compliance risk.",
        solution: "Role-based portal with digital contracts, geo-tagged timesheets, approval flows, and invoice generation.",
        impact: "Payment cycle reduced from 21 to 7 days with no compliance misses in the first quarter.",
        tech: &["Next.js", "NestJS", "PostgreSQL", "Redis"],
        tags: &["Approvals", "E-sign", "Invoices"],
        cover: "/work/agency/cover.jpg",
        timeline: Some("2025"),
        role: Some("Architecture, Backend, Frontend"),
    },
    CaseStudy {
        id: "student-visa-portal",
        title: "Student Visa Consultancy Portal",
        subtitle: Some("Applications, Visa Status & Documents"),
        category: Category::Portal,
        summary: "Portal for students and staff to manage study applications, visa workflows, checklists, and documents.",
        problem: "Applicants lacked visibility; staff handled updates manually across emails and spreadsheets.",
        solution: "Unified pipeline with profile completion tracking, program requests, approvals, and visa stages.",
        impact: "40% fewer support tickets and 2.1× processing throughput.",
        tech: &["Next.js", "TypeScript", "Prisma", "PostgreSQL"],
        tags: &["Workflows", "Docs", "Status"],
        cover: "/work/visa/cover.jpg",
        timeline: Some("2024 → 2025"),
        role: Some("Full-stack"),
    },
    CaseStudy {
        id: "hosting-agency-suite",
        title: "Hosting Agency Management Suite",
        subtitle: Some("Billing, DNS, Uptime & Client Portals"),
        category: Category::Portal,
        summary: "A unified suite to manage hosting clients: subscriptions, renewals, DNS records, uptime monitors, and alerts.",
        problem: "Renewals were missed, DNS changes lacked auditability and uptime incidents were not centralized.",
        solution: "Multi-provider DNS integrations, status webhooks, automated renewal reminders, and client self-service.",
        impact: "Renewal lapses cut to near zero and incident MTTR reduced by 54%.",
        tech: &["Next.js", "tRPC", "Stripe", "MySQL"],
        tags: &["Stripe", "DNS", "Monitoring"],
        cover: "/work/hosting/cover.jpg",
        timeline: Some("2023 → 2025"),
        role: Some("Engineering, Integrations"),
    },
    CaseStudy {
        id: "marketing-site",
        title: "High-End Marketing Website",
        subtitle: Some("Conversion-first, blazing performance"),
        category: Category::Website,
        summary: "Premium website with cinematic hero, sticky sections, and CMS for case studies and blogs.",
        problem: "Static site with poor conversions and inconsistent visuals.",
        solution: "Rebuilt with a design system, SEO hygiene, and structured content.",
        impact: "+62% lead submissions in 60 days and Lighthouse 95+.",
        tech: &["Next.js", "Tailwind", "MDX CMS"],
        tags: &["SEO", "Design System", "MDX"],
        cover: "/work/site/cover.jpg",
        timeline: None,
        role: Some("Design & Frontend"),
    },
    CaseStudy {
        id: "field-service-mobile",
        title: "Field Service Mobile App",
        subtitle: Some("Jobs, checklists & offline mode"),
        category: Category::MobileApp,
        summary: "Technician-facing mobile app to receive jobs, capture media, and sync when back online.",
        problem: "Technicians had unreliable connectivity and inconsistent job evidence.",
        solution: "Offline-first app with local queue, photo and video capture, and supervisor approvals.",
        impact: "Job completion accuracy up 31% with fewer re-dispatches.",
        tech: &["React Native", "Expo", "SQLite"],
        tags: &["Offline", "Media", "Approvals"],
        cover: "/work/mobile/cover.jpg",
        timeline: None,
        role: Some("Mobile Lead"),
    },
];

/// Case studies in `category`, or all of them for `None`, in catalogue order.
pub fn case_studies(category: Option<Category>) -> impl Iterator<Item = &'static CaseStudy> {
    CASE_STUDIES
        .iter()
        .filter(move |study| category.map_or(true, |category| study.category == category))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offerings_resolve_by_slug() {
        let ui = find_offering(OfferingKind::Service, "ui-ux").unwrap();
        assert_eq!(ui.title, "UI & UX Design");
        assert_eq!(ui.href(), "/services/ui-ux");

        let takeover = find_offering(OfferingKind::Solution, "project-takeover").unwrap();
        assert_eq!(takeover.href(), "/solutions/project-takeover");
    }

    #[test]
    fn slugs_do_not_cross_catalogues() {
        assert!(find_offering(OfferingKind::Solution, "ui-ux").is_none());
        assert!(find_offering(OfferingKind::Service, "nope").is_none());
    }

    #[test]
    fn catalogue_entries_match_their_kind_and_are_unique() {
        for kind in [OfferingKind::Service, OfferingKind::Solution] {
            let catalogue = kind.catalogue();
            for (i, offering) in catalogue.iter().enumerate() {
                assert_eq!(offering.kind, kind);
                assert!(!offering.blurbs.is_empty(), "{} has no blurbs", offering.slug);
                assert!(
                    catalogue[i + 1..].iter().all(|o| o.slug != offering.slug),
                    "duplicate slug {}",
                    offering.slug
                );
            }
        }
    }

    #[test]
    fn case_studies_filter_by_category() {
        assert_eq!(case_studies(None).count(), CASE_STUDIES.len());
        assert_eq!(case_studies(Some(Category::Portal)).count(), 4);
        let websites: Vec<_> = case_studies(Some(Category::Website)).map(|s| s.id).collect();
        assert_eq!(websites, vec!["marketing-site"]);
        assert_eq!(Category::MobileApp.to_string(), "Mobile App");
    }
}
