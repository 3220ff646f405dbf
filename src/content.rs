//! Copy for the home and contact pages, the nav bar and the footer.

use crate::config;
use crate::router::{NavTarget, Page, Section};

#[derive(Debug, PartialEq)]
pub struct NavItem {
    pub target: NavTarget,
    pub label: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { target: NavTarget::Page(Page::Home), label: "Home" },
    NavItem { target: NavTarget::Section(Section::Services), label: "Services" },
    NavItem { target: NavTarget::Section(Section::Portfolio), label: "Portfolio" },
    NavItem { target: NavTarget::Section(Section::Testimonials), label: "Testimonials" },
    NavItem { target: NavTarget::Page(Page::Contact), label: "Contact" },
];

#[derive(Debug, PartialEq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub impact: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "📊",
        title: "GA4 & GTM Architecture",
        description: "I design and implement comprehensive Google Analytics 4 and Google Tag Manager setups that form the backbone of your data ecosystem. This includes custom event taxonomy, enhanced e-commerce tracking, audience segmentation, and cross-domain measurement. I configure advanced features like custom dimensions, calculated metrics, and automated reporting to ensure you capture every meaningful interaction.",
        impact: "Why it matters: Without proper GA4 foundation, you're flying blind. Clean data architecture means accurate attribution, reliable reporting, and confident decision-making that can improve ROAS by 25-40%.",
    },
    Service {
        icon: "⚡",
        title: "Server-Side Tracking Implementation",
        description: "I deploy and configure Google Tag Manager Server-Side containers, implement Meta Conversions API (CAPI), Google Enhanced Conversions, and TikTok Events API. This includes setting up secure data pipelines, implementing first-party data enrichment, and ensuring iOS 14.5+ resilient tracking that bypasses browser limitations and ad blockers.",
        impact: "Why it matters: Server-side tracking recovers 15-30% of lost conversion data from iOS updates and privacy changes. It's the difference between guessing and knowing your true ROAS, especially critical for scaling ad spend confidently.",
    },
    Service {
        icon: "🎯",
        title: "Conversion Tracking & Attribution",
        description: "I implement sophisticated multi-touch attribution models that track the complete customer journey across all touchpoints. This includes setting up enhanced e-commerce tracking, offline conversion imports, call tracking integration, and custom attribution windows. I configure cross-platform audience syncing and implement UTM parameter strategies for crystal-clear channel performance.",
        impact: "Why it matters: Accurate attribution prevents budget waste on underperforming channels and identifies hidden revenue drivers. Clients typically discover 20-40% more value from previously 'unprofitable' campaigns.",
    },
    Service {
        icon: "📈",
        title: "E-commerce & Lead-Gen Analytics",
        description: "I specialize in advanced Shopify tracking implementations including customer lifetime value calculation, product performance analysis, and cart abandonment recovery tracking. For B2B companies, I set up lead scoring, multi-stage funnel tracking, CRM integration, and marketing qualified lead (MQL) identification systems that connect marketing efforts to actual revenue.",
        impact: "Why it matters: Detailed e-commerce and lead analytics reveal optimization opportunities worth thousands monthly. Understanding true customer value and lead quality transforms marketing from cost center to profit driver.",
    },
    Service {
        icon: "🛡️",
        title: "Privacy Compliance & Consent Management",
        description: "I implement comprehensive GDPR and CCPA compliant tracking solutions using Google Consent Mode v2, OneTrust, or Cookiebot integration. This includes setting up consent-driven measurement, implementing data retention policies, and ensuring all tracking respects user privacy choices while maintaining data quality through modeled conversions and consent-driven attribution.",
        impact: "Why it matters: Privacy compliance isn't optional, it's business protection. Proper implementation prevents costly fines while maintaining 80-90% of your analytics data quality, ensuring legal safety without sacrificing performance insights.",
    },
];

#[derive(Debug, PartialEq)]
pub struct Stat {
    pub icon: &'static str,
    pub figure: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { icon: "👥", figure: "150+", label: "Clients Served" },
    Stat { icon: "⭐", figure: "4.8/5", label: "Client Rating" },
    Stat { icon: "🎯", figure: "98%", label: "Data Accuracy" },
    Stat { icon: "📊", figure: "50M+", label: "Events Tracked" },
];

#[derive(Debug, PartialEq)]
pub struct CaseStudy {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub results: &'static str,
}

pub const PORTFOLIO: &[CaseStudy] = &[
    CaseStudy {
        title: "7-Figure Shopify Store Optimization",
        description: "Enhanced conversion tracking and attribution for a fashion e-commerce brand, resulting in 28% improvement in ROAS.",
        tags: &["Shopify", "GA4", "Meta CAPI", "Google Ads"],
        results: "+28% ROAS, +35% Data Accuracy",
    },
    CaseStudy {
        title: "Marketing Agency Analytics Overhaul",
        description: "Complete GA4 and GTM restructure for a 50-client digital agency, enabling white-label reporting and client retention.",
        tags: &["GTM", "Looker Studio", "Multi-Client", "Automation"],
        results: "+40% Client Retention, 80% Time Savings",
    },
    CaseStudy {
        title: "B2B Lead Attribution System",
        description: "Custom multi-touch attribution model for SaaS company tracking leads across 12+ touchpoints and channels.",
        tags: &["Attribution", "CRM Integration", "B2B", "HubSpot"],
        results: "+$200K Revenue Attribution",
    },
];

#[derive(Debug, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    /// Stars out of five.
    pub rating: u8,
}

pub const MAX_RATING: u8 = 5;

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        role: "Marketing Director, TechCorp Agency",
        quote: "PrimeAnalytics transformed our client reporting. Their GA4 implementation helped us increase client retention by 40% with crystal-clear ROI visibility.",
        rating: 5,
    },
    Testimonial {
        name: "Mike Chen",
        role: "E-commerce Manager, RetailPlus",
        quote: "The server-side tracking setup they built for our Shopify store improved our conversion data accuracy by 35%. Game-changing for our ad optimization.",
        rating: 5,
    },
    Testimonial {
        name: "Emily Rodriguez",
        role: "CMO, LeadGen Pro",
        quote: "Their multi-touch attribution model revealed hidden conversion paths worth $200K+ in previously unattributed revenue. Exceptional technical expertise.",
        rating: 5,
    },
];

pub const HERO_HIGHLIGHTS: &[&str] = &["No setup fees", "14-day guarantee", "GDPR compliant"];
pub const CTA_HIGHLIGHTS: &[&str] = &[
    "No strings attached",
    "48-hour turnaround",
    "Actionable recommendations",
];

#[derive(Debug, PartialEq)]
pub struct ContactMethod {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static str,
    pub action: &'static str,
    pub link: &'static str,
}

pub const CONTACT_METHODS: &[ContactMethod] = &[
    ContactMethod {
        icon: "✉️",
        title: "Email Us",
        description: "Get in touch via email",
        details: config::CONTACT_EMAIL,
        action: "Send Email",
        link: config::CONTACT_MAILTO,
    },
    ContactMethod {
        icon: "📞",
        title: "Call Us",
        description: "Speak directly with our team",
        details: config::PHONE_DISPLAY,
        action: "Call Now",
        link: config::PHONE_LINK,
    },
    ContactMethod {
        icon: "📅",
        title: "Book a Call",
        description: "Schedule a discovery call",
        details: "Available Mon-Fri, 9 AM - 6 PM EST",
        action: "Book on Calendly",
        link: config::SCHEDULER_URL,
    },
];

/// (headline, detail) pairs shown under "What to Expect".
pub const CONTACT_EXPECTATIONS: &[(&str, &str)] = &[
    ("Quick Response", "We'll respond within 24 hours"),
    ("Free Consultation", "Initial call is always free"),
    ("Custom Solution", "Tailored to your specific needs"),
];

#[derive(Debug, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "How quickly can you audit my current setup?",
        answer: "Most analytics audits are completed within 48-72 hours. You'll receive a detailed report with actionable recommendations.",
    },
    Faq {
        question: "Do you work with agencies or direct clients?",
        answer: "Both! We specialize in serving marketing agencies as an outsourced analytics partner, and also work directly with e-commerce brands and B2B companies.",
    },
    Faq {
        question: "What platforms do you integrate with?",
        answer: "We work with all major platforms including Google Analytics 4, Google Ads, Meta (Facebook), TikTok, Shopify, HubSpot, Salesforce, and many more.",
    },
    Faq {
        question: "Are your implementations GDPR compliant?",
        answer: "Absolutely. All our implementations include proper consent management and comply with GDPR, CCPA, and other privacy regulations.",
    },
];

pub const FOOTER_BLURB: &str = "Specialized digital analytics consultancy driving measurable growth through data-driven insights and strategic optimization.";

/// Footer service labels; all of them lead to the services section.
pub const FOOTER_SERVICES: &[&str] = &[
    "GA4 & GTM Architecture",
    "Conversion Tracking",
    "E-commerce Analytics",
    "Privacy Compliance",
    "Custom Reporting",
];

pub const QUICK_LINKS: &[NavItem] = &[
    NavItem { target: NavTarget::Page(Page::Home), label: "Home" },
    NavItem { target: NavTarget::Section(Section::Portfolio), label: "Portfolio" },
    NavItem { target: NavTarget::Page(Page::Contact), label: "Contact Us" },
];

pub const LEGAL_LINKS: &[NavItem] = &[
    NavItem { target: NavTarget::Page(Page::Terms), label: "Terms & Conditions" },
    NavItem { target: NavTarget::Page(Page::Privacy), label: "Privacy Policy" },
    NavItem { target: NavTarget::Page(Page::Refund), label: "Refund Policy" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nav_lists_the_five_entries_in_order() {
        let ids: Vec<_> = NAV_ITEMS.iter().map(|item| item.target.identifier()).collect();
        assert_eq!(ids, ["home", "services", "portfolio", "testimonials", "contact"]);
    }

    #[test]
    fn every_section_is_reachable_from_the_nav() {
        for section in Section::ALL {
            assert!(
                NAV_ITEMS.iter().any(|item| item.target == NavTarget::Section(section)),
                "{:?} missing from nav",
                section
            );
        }
    }

    #[test]
    fn legal_links_cover_the_legal_pages() {
        let targets: Vec<_> = LEGAL_LINKS.iter().map(|link| link.target).collect();
        assert_eq!(
            targets,
            [
                NavTarget::Page(Page::Terms),
                NavTarget::Page(Page::Privacy),
                NavTarget::Page(Page::Refund),
            ]
        );
    }

    #[test]
    fn ratings_fit_the_star_scale() {
        for testimonial in TESTIMONIALS {
            assert!((1..=MAX_RATING).contains(&testimonial.rating), "{}", testimonial.name);
        }
    }

    #[test]
    fn cards_have_copy() {
        assert_eq!(SERVICES.len(), 5);
        assert_eq!(STATS.len(), 4);
        assert_eq!(PORTFOLIO.len(), 3);
        assert_eq!(FAQS.len(), 4);
        assert!(SERVICES.iter().all(|s| !s.description.is_empty() && !s.impact.is_empty()));
        assert!(PORTFOLIO.iter().all(|c| !c.tags.is_empty()));
    }

    #[test]
    fn scheduler_contact_method_uses_the_embed_url() {
        let booking = CONTACT_METHODS
            .iter()
            .find(|method| method.title == "Book a Call")
            .expect("booking method");
        assert_eq!(booking.link, config::SCHEDULER_URL);
    }
}
