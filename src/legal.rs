//! Terms, privacy and refund documents.

use crate::config;

#[derive(Debug, PartialEq)]
pub struct LegalDocument {
    pub title: &'static str,
    pub last_updated: &'static str,
    pub sections: &'static [LegalSection],
}

#[derive(Debug, PartialEq)]
pub struct LegalSection {
    pub heading: &'static str,
    pub blocks: &'static [Block],
}

#[derive(Debug, PartialEq)]
pub enum Block {
    Paragraph(&'static str),
    Subheading(&'static str),
    Bullets(&'static [&'static str]),
    /// Bullets with a bold lead-in, e.g. "Credit Card: 5-10 business days".
    LabeledBullets(&'static [(&'static str, &'static str)]),
    /// Address-style lines separated by line breaks.
    Lines(&'static [Line]),
}

#[derive(Debug, PartialEq)]
pub enum Line {
    Plain(&'static str),
    Strong(&'static str),
    Labeled(&'static str, &'static str),
}

const LAST_UPDATED: &str = "July 19, 2025";

pub const TERMS: LegalDocument = LegalDocument {
    title: "Terms & Conditions",
    last_updated: LAST_UPDATED,
    sections: &[
        LegalSection {
            heading: "Acceptance of Terms",
            blocks: &[Block::Paragraph(
                "By accessing and using PrimeAnalytics Solutions' services, you agree to be bound by these Terms and Conditions. If you do not agree to these terms, please do not use our services.",
            )],
        },
        LegalSection {
            heading: "Services Description",
            blocks: &[
                Block::Paragraph("PrimeAnalytics Solutions provides digital analytics consulting services including but not limited to:"),
                Block::Bullets(&[
                    "Google Analytics 4 (GA4) implementation and configuration",
                    "Google Tag Manager (GTM) setup and optimization",
                    "Conversion tracking and attribution modeling",
                    "E-commerce and lead generation analytics",
                    "Privacy compliance and consent management",
                    "Custom reporting and dashboard creation",
                ]),
            ],
        },
        LegalSection {
            heading: "Client Responsibilities",
            blocks: &[
                Block::Paragraph("Clients agree to:"),
                Block::Bullets(&[
                    "Provide accurate and complete information necessary for service delivery",
                    "Grant necessary access to analytics platforms, websites, and related systems",
                    "Comply with all applicable laws and platform terms of service",
                    "Maintain data privacy and security standards",
                    "Provide timely feedback and approvals as required",
                ]),
            ],
        },
        LegalSection {
            heading: "Payment Terms",
            blocks: &[
                Block::Paragraph("Payment terms will be specified in individual service agreements. Unless otherwise agreed:"),
                Block::Bullets(&[
                    "Invoices are due within 30 days of receipt",
                    "Late payments may incur a 1.5% monthly service charge",
                    "Disputed charges must be reported within 15 days of invoice date",
                    "Services may be suspended for non-payment",
                ]),
            ],
        },
        LegalSection {
            heading: "Intellectual Property",
            blocks: &[Block::Paragraph(
                "PrimeAnalytics Solutions retains ownership of proprietary methodologies, templates, and tools. Clients receive a non-exclusive license to use deliverables for their business purposes. Client data and configurations remain the property of the client.",
            )],
        },
        LegalSection {
            heading: "Confidentiality",
            blocks: &[Block::Paragraph(
                "Both parties agree to maintain the confidentiality of proprietary information shared during the engagement. This includes business strategies, data, technical implementations, and any other non-public information.",
            )],
        },
        LegalSection {
            heading: "Limitation of Liability",
            blocks: &[Block::Paragraph(
                "PrimeAnalytics Solutions' liability is limited to the amount paid for services. We are not liable for indirect, incidental, or consequential damages. Recommendations are provided in good faith based on industry best practices.",
            )],
        },
        LegalSection {
            heading: "Data Privacy",
            blocks: &[Block::Paragraph(
                "We are committed to protecting client data and comply with applicable privacy laws. Our data handling practices are detailed in our Privacy Policy. We implement appropriate security measures and do not use client data for any purpose other than service delivery.",
            )],
        },
        LegalSection {
            heading: "Service Modifications",
            blocks: &[Block::Paragraph(
                "We reserve the right to modify our services, terms, or pricing with 30 days' notice. Existing agreements will remain in effect until completion unless mutually agreed to modify.",
            )],
        },
        LegalSection {
            heading: "Termination",
            blocks: &[Block::Paragraph(
                "Either party may terminate services with 30 days' written notice. Immediate termination may occur for breach of terms. Upon termination, final deliverables will be provided and outstanding payments are due within 15 days.",
            )],
        },
        LegalSection {
            heading: "Governing Law",
            blocks: &[Block::Paragraph(
                "These terms are governed by the laws of the jurisdiction where PrimeAnalytics Solutions is incorporated. Any disputes will be resolved through binding arbitration.",
            )],
        },
        LegalSection {
            heading: "Contact Information",
            blocks: &[Block::Lines(&[
                Line::Plain("For questions about these Terms & Conditions, please contact us at:"),
                Line::Labeled("Email", config::LEGAL_EMAIL),
                Line::Labeled("Phone", config::PHONE_DISPLAY),
            ])],
        },
    ],
};

pub const PRIVACY: LegalDocument = LegalDocument {
    title: "Privacy Policy",
    last_updated: LAST_UPDATED,
    sections: &[
        LegalSection {
            heading: "Introduction",
            blocks: &[Block::Paragraph(
                "PrimeAnalytics Solutions (\"we,\" \"our,\" or \"us\") is committed to protecting your privacy. This Privacy Policy explains how we collect, use, disclose, and safeguard your information when you visit our website or use our services.",
            )],
        },
        LegalSection {
            heading: "Information We Collect",
            blocks: &[
                Block::Subheading("Personal Information"),
                Block::Paragraph("We may collect personal information that you voluntarily provide, including:"),
                Block::Bullets(&[
                    "Name, email address, and phone number",
                    "Company name and job title",
                    "Website URLs and analytics access credentials",
                    "Business requirements and project details",
                    "Communication preferences",
                ]),
                Block::Subheading("Automatically Collected Information"),
                Block::Paragraph("When you visit our website, we may automatically collect:"),
                Block::Bullets(&[
                    "IP address and location data",
                    "Browser type and version",
                    "Device information and operating system",
                    "Pages viewed and time spent on site",
                    "Referring URLs and search terms",
                ]),
                Block::Subheading("Cookies and Tracking Technologies"),
                Block::Paragraph(
                    "We use cookies and similar technologies to enhance your experience, analyze site usage, and assist in our marketing efforts. You can control cookie preferences through your browser settings.",
                ),
            ],
        },
        LegalSection {
            heading: "How We Use Your Information",
            blocks: &[
                Block::Paragraph("We use collected information for:"),
                Block::Bullets(&[
                    "Providing and improving our analytics consulting services",
                    "Communicating about projects, updates, and support",
                    "Processing payments and managing accounts",
                    "Analyzing website usage and optimizing user experience",
                    "Marketing communications (with your consent)",
                    "Complying with legal obligations",
                    "Protecting against fraud and security threats",
                ]),
            ],
        },
        LegalSection {
            heading: "Information Sharing and Disclosure",
            blocks: &[
                Block::Paragraph("We do not sell, trade, or rent your personal information. We may share information in these situations:"),
                Block::Subheading("Service Providers"),
                Block::Paragraph(
                    "We work with trusted third-party providers for services like hosting, email delivery, payment processing, and analytics. These providers are bound by confidentiality agreements.",
                ),
                Block::Subheading("Legal Requirements"),
                Block::Paragraph(
                    "We may disclose information when required by law, court order, or government regulation, or to protect our rights, property, or safety.",
                ),
                Block::Subheading("Business Transfers"),
                Block::Paragraph(
                    "In the event of a merger, acquisition, or sale of assets, your information may be transferred as part of the business transaction.",
                ),
            ],
        },
        LegalSection {
            heading: "Data Security",
            blocks: &[
                Block::Paragraph("We implement appropriate technical and organizational security measures to protect your information:"),
                Block::Bullets(&[
                    "Encryption of data in transit and at rest",
                    "Access controls and authentication requirements",
                    "Regular security assessments and updates",
                    "Employee training on data protection",
                    "Incident response procedures",
                ]),
            ],
        },
        LegalSection {
            heading: "Data Retention",
            blocks: &[Block::Paragraph(
                "We retain personal information only as long as necessary for the purposes outlined in this policy or as required by law. Client project data is typically retained for 3 years after project completion, unless otherwise specified in our service agreement.",
            )],
        },
        LegalSection {
            heading: "Your Privacy Rights",
            blocks: &[
                Block::Paragraph("Depending on your location, you may have the right to:"),
                Block::Bullets(&[
                    "Access your personal information",
                    "Correct inaccurate or incomplete data",
                    "Delete your personal information",
                    "Restrict or object to processing",
                    "Data portability",
                    "Withdraw consent",
                ]),
                Block::Paragraph(
                    "To exercise these rights, please contact us at privacy@primeanalytics.com. We will respond to your request within 30 days.",
                ),
            ],
        },
        LegalSection {
            heading: "International Data Transfers",
            blocks: &[Block::Paragraph(
                "Your information may be transferred to and processed in countries other than your own. We ensure appropriate safeguards are in place for such transfers, including standard contractual clauses and adequacy decisions.",
            )],
        },
        LegalSection {
            heading: "Children's Privacy",
            blocks: &[Block::Paragraph(
                "Our services are not intended for individuals under 18 years of age. We do not knowingly collect personal information from children. If we become aware of such collection, we will take steps to remove the information.",
            )],
        },
        LegalSection {
            heading: "Third-Party Links",
            blocks: &[Block::Paragraph(
                "Our website may contain links to third-party sites. We are not responsible for the privacy practices of these external sites. We encourage you to review their privacy policies.",
            )],
        },
        LegalSection {
            heading: "Updates to This Policy",
            blocks: &[Block::Paragraph(
                "We may update this Privacy Policy periodically. We will notify you of significant changes through email or website notice. Continued use of our services after changes indicates your acceptance of the updated policy.",
            )],
        },
        LegalSection {
            heading: "Contact Us",
            blocks: &[
                Block::Paragraph("If you have questions about this Privacy Policy or our data practices, please contact us:"),
                Block::Lines(&[
                    Line::Strong(config::BRAND_NAME),
                    Line::Labeled("Email", config::PRIVACY_EMAIL),
                    Line::Labeled("Phone", config::PHONE_DISPLAY),
                    Line::Labeled("Subject", "Privacy Policy Inquiry"),
                ]),
            ],
        },
        LegalSection {
            heading: "GDPR Compliance",
            blocks: &[Block::Paragraph(
                "For European Union residents, we comply with the General Data Protection Regulation (GDPR). Your personal data is processed lawfully based on legitimate business interests, contract performance, or your consent. You have additional rights under GDPR, including the right to lodge a complaint with a supervisory authority.",
            )],
        },
    ],
};

pub const REFUND: LegalDocument = LegalDocument {
    title: "Refund Policy",
    last_updated: LAST_UPDATED,
    sections: &[
        LegalSection {
            heading: "Overview",
            blocks: &[Block::Paragraph(
                "At PrimeAnalytics Solutions, we are committed to delivering high-quality analytics consulting services. This refund policy outlines the circumstances under which refunds may be provided and the process for requesting them.",
            )],
        },
        LegalSection {
            heading: "Satisfaction Guarantee",
            blocks: &[
                Block::Paragraph(
                    "We offer a 14-day satisfaction guarantee for all new clients. If you are not satisfied with our initial deliverables within 14 days of project commencement, you may request a full refund of payments made, provided:",
                ),
                Block::Bullets(&[
                    "The request is made within 14 days of project start date",
                    "Specific concerns are documented and communicated to our team",
                    "You have participated in good faith in the project kickoff process",
                    "No major deliverables have been completed and implemented",
                ]),
            ],
        },
        LegalSection {
            heading: "Refund Eligibility",
            blocks: &[
                Block::Subheading("Eligible for Full Refund:"),
                Block::Bullets(&[
                    "Service not delivered due to our inability to fulfill requirements",
                    "Cancellation within 14-day guarantee period (new clients only)",
                    "Technical impossibility discovered after project assessment",
                    "Duplicate payments or billing errors",
                ]),
                Block::Subheading("Eligible for Partial Refund:"),
                Block::Bullets(&[
                    "Project termination after partial completion (unused portion)",
                    "Scope reduction mutually agreed upon mid-project",
                    "Service modifications resulting in reduced deliverables",
                ]),
                Block::Subheading("Not Eligible for Refund:"),
                Block::Bullets(&[
                    "Completed projects with delivered and implemented solutions",
                    "Change of mind after project completion",
                    "Client-caused delays or lack of cooperation",
                    "Third-party platform changes beyond our control",
                    "Training sessions or consultations already conducted",
                    "Custom reporting or dashboard solutions already delivered",
                ]),
            ],
        },
        LegalSection {
            heading: "Refund Process",
            blocks: &[
                Block::Subheading("Step 1: Submit Request"),
                Block::Paragraph("Send a written refund request to billing@primeanalytics.com with:"),
                Block::Bullets(&[
                    "Client name and project details",
                    "Invoice number and payment date",
                    "Reason for refund request",
                    "Supporting documentation if applicable",
                ]),
                Block::Subheading("Step 2: Review Process"),
                Block::Paragraph("Our team will review your request within 5 business days and may:"),
                Block::Bullets(&[
                    "Request additional information or documentation",
                    "Schedule a call to discuss concerns and potential solutions",
                    "Evaluate project status and deliverables completed",
                ]),
                Block::Subheading("Step 3: Decision"),
                Block::Paragraph("You will receive a written decision within 10 business days, including:"),
                Block::Bullets(&[
                    "Approval or denial of refund request",
                    "Refund amount if approved",
                    "Timeline for processing",
                    "Alternative solutions if refund is not applicable",
                ]),
            ],
        },
        LegalSection {
            heading: "Refund Processing",
            blocks: &[
                Block::Paragraph("Approved refunds will be processed using the original payment method:"),
                Block::LabeledBullets(&[
                    ("Credit Card", "5-10 business days"),
                    ("Bank Transfer", "7-14 business days"),
                    ("PayPal", "3-5 business days"),
                    ("Other Methods", "As specified in original agreement"),
                ]),
                Block::Paragraph(
                    "Processing times may vary depending on your financial institution. You will receive confirmation once the refund has been initiated.",
                ),
            ],
        },
        LegalSection {
            heading: "Disputes and Chargebacks",
            blocks: &[
                Block::Paragraph(
                    "Before initiating a chargeback with your credit card company or payment provider, please contact us directly to resolve any concerns. Chargebacks can:",
                ),
                Block::Bullets(&[
                    "Delay resolution of your issue",
                    "Result in additional fees",
                    "Affect future service availability",
                ]),
                Block::Paragraph(
                    "We are committed to working with you to find a satisfactory solution and will respond to all legitimate concerns promptly.",
                ),
            ],
        },
        LegalSection {
            heading: "Service Credits",
            blocks: &[
                Block::Paragraph("In some cases, we may offer service credits instead of monetary refunds:"),
                Block::Bullets(&[
                    "Additional consulting hours for future projects",
                    "Extended support or maintenance periods",
                    "Complimentary training sessions or audits",
                    "Priority scheduling for future services",
                ]),
                Block::Paragraph(
                    "Service credits must be used within 12 months of issuance and cannot be transferred or exchanged for cash.",
                ),
            ],
        },
        LegalSection {
            heading: "Force Majeure",
            blocks: &[
                Block::Paragraph("Refunds may be provided if service delivery is prevented by circumstances beyond our control:"),
                Block::Bullets(&[
                    "Natural disasters or emergencies",
                    "Government regulations or restrictions",
                    "Third-party platform outages or changes",
                    "Internet or infrastructure failures",
                ]),
                Block::Paragraph(
                    "In such cases, we will work with you to either reschedule services or provide appropriate refunds for undelivered portions.",
                ),
            ],
        },
        LegalSection {
            heading: "Recurring Services",
            blocks: &[
                Block::Paragraph("For ongoing monthly or quarterly services:"),
                Block::Bullets(&[
                    "Cancellation must be requested at least 30 days before next billing cycle",
                    "No refunds for the current billing period once services have begun",
                    "Partial refunds may apply for unused portions of cancelled services",
                    "All delivered work and access credentials remain valid until period end",
                ]),
            ],
        },
        LegalSection {
            heading: "Modification of Policy",
            blocks: &[
                Block::Paragraph("This refund policy may be updated periodically. Changes will be communicated via:"),
                Block::Bullets(&[
                    "Email notification to existing clients",
                    "Website announcement",
                    "Updated terms in new service agreements",
                ]),
                Block::Paragraph(
                    "Existing projects will be governed by the refund policy in effect at the time of agreement signing.",
                ),
            ],
        },
        LegalSection {
            heading: "Contact Information",
            blocks: &[
                Block::Paragraph("For refund requests or questions about this policy:"),
                Block::Lines(&[
                    Line::Labeled("Email", config::BILLING_EMAIL),
                    Line::Labeled("Phone", config::PHONE_DISPLAY),
                    Line::Labeled("Subject Line", "Refund Request - [Your Invoice Number]"),
                ]),
                Block::Paragraph(
                    "Our billing team is available Monday through Friday, 9 AM to 6 PM EST, and will respond to all inquiries within 24 hours.",
                ),
            ],
        },
        LegalSection {
            heading: "Additional Support",
            blocks: &[
                Block::Paragraph(
                    "If you're experiencing issues with our services, we encourage you to reach out before requesting a refund. Our support options include:",
                ),
                Block::Bullets(&[
                    "Free consultation to address concerns",
                    "Project scope adjustments",
                    "Additional training or documentation",
                    "Extended support periods",
                    "Alternative implementation approaches",
                ]),
                Block::Paragraph(
                    "Our goal is your success, and we're committed to finding solutions that work for your business.",
                ),
            ],
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn documents_have_expected_titles_and_lengths() {
        assert_eq!((TERMS.title, TERMS.sections.len()), ("Terms & Conditions", 12));
        assert_eq!((PRIVACY.title, PRIVACY.sections.len()), ("Privacy Policy", 13));
        assert_eq!((REFUND.title, REFUND.sections.len()), ("Refund Policy", 12));
    }

    #[test]
    fn no_section_is_empty() {
        for document in [&TERMS, &PRIVACY, &REFUND] {
            for section in document.sections {
                assert!(!section.blocks.is_empty(), "{} / {}", document.title, section.heading);
            }
        }
    }

    #[test]
    fn contact_sections_point_at_the_right_mailbox() {
        let emails = |document: &LegalDocument| -> Vec<&'static str> {
            document
                .sections
                .iter()
                .flat_map(|section| section.blocks.iter())
                .filter_map(|block| match block {
                    Block::Lines(lines) => Some(lines.iter()),
                    _ => None,
                })
                .flatten()
                .filter_map(|line| match line {
                    Line::Labeled("Email", address) => Some(*address),
                    _ => None,
                })
                .collect()
        };
        assert_eq!(emails(&TERMS), [config::LEGAL_EMAIL]);
        assert_eq!(emails(&PRIVACY), [config::PRIVACY_EMAIL]);
        assert_eq!(emails(&REFUND), [config::BILLING_EMAIL]);
    }
}
