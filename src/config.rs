use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const BRAND_NAME: &str = "PrimeAnalytics Solutions";
pub const COPYRIGHT_YEAR: u16 = 2025;

pub const CONTACT_EMAIL: &str = "hello@primeanalytics.com";
pub const CONTACT_MAILTO: &str = "mailto:hello@primeanalytics.com";
pub const LEGAL_EMAIL: &str = "legal@primeanalytics.com";
pub const PRIVACY_EMAIL: &str = "privacy@primeanalytics.com";
pub const BILLING_EMAIL: &str = "billing@primeanalytics.com";
pub const PHONE_DISPLAY: &str = "+1 (555) 123-4567";
pub const PHONE_LINK: &str = "tel:+15551234567";
pub const LOCATION: &str = "Remote & Global";
pub const BUSINESS_HOURS: &str = "Mon-Fri, 9 AM - 6 PM EST";

// Third-party embeds. The form id is a placeholder until the real form is published.
pub const FORM_EMBED_URL: &str = "https://form.jotform.com/placeholder-form-id";
pub const SCHEDULER_URL: &str = "https://calendly.com/primeanalytics";
pub const FORM_FRAME_HEIGHT_PX: u32 = 600;
pub const SCHEDULER_FRAME_HEIGHT_PX: u32 = 700;

/// Vertical scroll offset after which the nav bar gets its shadow.
pub const NAV_SHADOW_THRESHOLD_PX: f64 = 8.0;
