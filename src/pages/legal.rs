use yew::prelude::*;

use crate::legal::{Block, LegalDocument, Line, PRIVACY, REFUND, TERMS};

fn render_line(line: &Line) -> Html {
    match line {
        Line::Plain(text) => html! { <>{ *text }<br /></> },
        Line::Strong(text) => html! { <><strong>{ *text }</strong><br /></> },
        Line::Labeled(label, text) => html! {
            <><strong>{ format!("{}:", label) }</strong>{" "}{ *text }<br /></>
        },
    }
}

fn render_block(block: &Block) -> Html {
    match block {
        Block::Paragraph(text) => html! { <p>{ *text }</p> },
        Block::Subheading(text) => html! { <h3>{ *text }</h3> },
        Block::Bullets(items) => html! {
            <ul>{ for items.iter().map(|item| html! { <li>{ *item }</li> }) }</ul>
        },
        Block::LabeledBullets(items) => html! {
            <ul>
                { for items.iter().map(|(label, text)| html! {
                    <li><strong>{ format!("{}:", label) }</strong>{" "}{ *text }</li>
                }) }
            </ul>
        },
        Block::Lines(lines) => html! {
            <p class="address">{ for lines.iter().map(render_line) }</p>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct LegalPageProps {
    pub document: &'static LegalDocument,
}

/// Renders a legal document with numbered sections.
#[function_component(LegalPage)]
pub fn legal_page(props: &LegalPageProps) -> Html {
    let document = props.document;

    html! {
        <div class="legal-content">
            <div class="legal-header">
                <h1>{ document.title }</h1>
                <p class="muted">{ format!("Last updated: {}", document.last_updated) }</p>
            </div>
            { for document.sections.iter().enumerate().map(|(index, section)| html! {
                <section>
                    <h2>{ format!("{}. {}", index + 1, section.heading) }</h2>
                    { for section.blocks.iter().map(render_block) }
                </section>
            }) }
            <style>
                {r#"
                .legal-content {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 3rem 1.5rem 5rem;
                    color: #374151;
                }

                .legal-header {
                    text-align: center;
                    margin-bottom: 2rem;
                }

                .legal-content h1 {
                    font-size: 2.25rem;
                    color: #111827;
                }

                .legal-content section {
                    margin-bottom: 2rem;
                }

                .legal-content h2 {
                    color: #0F3A49;
                    font-size: 1.5rem;
                    margin-bottom: 1rem;
                }

                .legal-content h3 {
                    color: #0F3A49;
                    font-size: 1.1rem;
                    margin: 1rem 0 0.5rem 0;
                }

                .legal-content p,
                .legal-content li {
                    line-height: 1.6;
                    margin-bottom: 0.75rem;
                }

                .legal-content ul {
                    padding-left: 1.5rem;
                }
                "#}
            </style>
        </div>
    }
}

#[function_component]
pub fn TermsPage() -> Html {
    html! { <LegalPage document={&TERMS} /> }
}

#[function_component]
pub fn PrivacyPage() -> Html {
    html! { <LegalPage document={&PRIVACY} /> }
}

#[function_component]
pub fn RefundPage() -> Html {
    html! { <LegalPage document={&REFUND} /> }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn terms_page_shows_its_heading_and_sections() {
        let html = ServerRenderer::<TermsPage>::new().hydratable(false).render().await;
        assert!(html.contains("Conditions</h1>"));
        assert!(html.contains("Last updated: July 19, 2025"));
        assert!(html.contains("1. Acceptance of Terms"));
        assert!(html.contains("12. Contact Information"));
        assert!(html.contains("legal@primeanalytics.com"));
    }

    #[tokio::test]
    async fn privacy_page_numbers_all_thirteen_sections() {
        let html = ServerRenderer::<PrivacyPage>::new().hydratable(false).render().await;
        assert!(html.contains("<h1>Privacy Policy</h1>"));
        assert!(html.contains("13. GDPR Compliance"));
        assert!(html.contains("<h3>Business Transfers</h3>"));
    }

    #[tokio::test]
    async fn refund_page_renders_labeled_bullets() {
        let html = ServerRenderer::<RefundPage>::new().hydratable(false).render().await;
        assert!(html.contains("<h1>Refund Policy</h1>"));
        assert!(html.contains("<strong>PayPal:</strong>"));
        assert!(html.contains("5. Refund Processing"));
    }
}
