use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::embed::EmbedFrame;
use crate::config;
use crate::content::{ContactMethod, Faq, CONTACT_EXPECTATIONS, CONTACT_METHODS, FAQS};
use crate::dom;

fn render_method(method: &'static ContactMethod) -> Html {
    let open = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        dom::open_in_new_tab(method.link);
    });
    html! {
        <div class="contact-method">
            <div class="method-icon">{ method.icon }</div>
            <div class="method-title">{ method.title }</div>
            <div class="method-details">{ method.details }</div>
            <button class="outline-button small" title={method.description} onclick={open}>
                { method.action }
            </button>
        </div>
    }
}

fn render_faq(faq: &Faq) -> Html {
    html! {
        <div class="card faq-card">
            <h3>{ faq.question }</h3>
            <p>{ faq.answer }</p>
        </div>
    }
}

#[function_component]
pub fn Contact() -> Html {
    let get_audit = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        dom::smooth_scroll_to_top();
    });

    let book_call = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        dom::scroll_to_bottom();
    });

    html! {
        <div class="contact-page">
            <div class="container">
                <div class="section-header">
                    <h1>{"Get In Touch"}</h1>
                    <p>{"Ready to transform your analytics? Let's discuss how we can help you achieve better tracking, clearer attribution, and measurable growth."}</p>
                </div>

                <div class="contact-grid">
                    <div class="card contact-form">
                        <h2>{"💬 Send Us a Message"}</h2>
                        <p class="muted">{"Fill out the form below and we'll get back to you within 24 hours."}</p>
                        <EmbedFrame
                            id="JotFormIFrame-primeanalytics-contact"
                            src={config::FORM_EMBED_URL}
                            title="Contact PrimeAnalytics"
                            height_px={config::FORM_FRAME_HEIGHT_PX}
                        />

                        <div class="alternative-contact">
                            <h3>{"Alternative Contact Methods"}</h3>
                            <p class="muted">{"If the form above doesn't load, you can reach us through these methods:"}</p>
                            <div class="methods-grid">
                                { for CONTACT_METHODS.iter().map(render_method) }
                            </div>
                        </div>
                    </div>

                    <aside class="contact-sidebar">
                        <div class="card">
                            <h3>{"Quick Actions"}</h3>
                            <button class="primary-button wide" onclick={get_audit}>{"⚡ Get Free Audit"}</button>
                            <button class="outline-button wide" onclick={book_call}>{"📅 Book Discovery Call"}</button>
                            <p class="muted centered">{"🕒 Response within 24 hours"}</p>
                        </div>

                        <div class="card">
                            <h3>{"Contact Information"}</h3>
                            <ul class="contact-info">
                                <li>{"✉️ "}{ config::CONTACT_EMAIL }</li>
                                <li>{"📞 "}{ config::PHONE_DISPLAY }</li>
                                <li>{"📍 "}{ config::LOCATION }</li>
                                <li>{"🕒 "}{ config::BUSINESS_HOURS }</li>
                            </ul>
                        </div>

                        <div class="card">
                            <h3>{"What to Expect"}</h3>
                            <ul class="expectations">
                                { for CONTACT_EXPECTATIONS.iter().map(|(headline, detail)| html! {
                                    <li>
                                        <div class="expectation-title">{"✓ "}{ *headline }</div>
                                        <div class="muted">{ *detail }</div>
                                    </li>
                                }) }
                            </ul>
                        </div>
                    </aside>
                </div>

                <div class="faq-section">
                    <div class="section-header">
                        <h2>{"Frequently Asked Questions"}</h2>
                        <p>{"Quick answers to common questions"}</p>
                    </div>
                    <div class="card-grid two">
                        { for FAQS.iter().map(render_faq) }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .contact-page {
                    padding: 3rem 0 5rem;
                }

                .contact-page h1 {
                    font-size: 3rem;
                    color: #0F3A49;
                }

                .contact-grid {
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 3rem;
                }

                .contact-form h2 {
                    color: #0F3A49;
                    font-size: 1.4rem;
                }

                .alternative-contact {
                    background: #E0F8F7;
                    border: 1px solid rgba(78, 205, 196, 0.2);
                    border-radius: 8px;
                    padding: 1.5rem;
                    margin-top: 1rem;
                    text-align: center;
                }

                .methods-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1rem;
                }

                .contact-method {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    align-items: center;
                }

                .method-title {
                    color: #0F3A49;
                    font-weight: 500;
                    font-size: 0.875rem;
                }

                .method-details {
                    color: #4b5563;
                    font-size: 0.75rem;
                }

                .contact-sidebar {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }

                .contact-sidebar .wide {
                    width: 100%;
                    margin-bottom: 1rem;
                }

                .contact-info,
                .expectations {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    font-size: 0.875rem;
                }

                .contact-info li,
                .expectations li {
                    margin-bottom: 0.75rem;
                }

                .expectation-title {
                    color: #0F3A49;
                    font-weight: 500;
                }

                .faq-section {
                    margin-top: 5rem;
                }

                .faq-card h3 {
                    color: #0F3A49;
                    font-size: 1rem;
                }

                .faq-card p {
                    color: #4b5563;
                    font-size: 0.875rem;
                    line-height: 1.6;
                }

                @media (max-width: 1024px) {
                    .contact-grid {
                        grid-template-columns: 1fr;
                    }
                }

                @media (max-width: 640px) {
                    .methods-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render() -> String {
        ServerRenderer::<Contact>::new().hydratable(false).render().await
    }

    #[tokio::test]
    async fn embeds_the_form_at_full_width() {
        let html = render().await;
        assert!(html.contains(config::FORM_EMBED_URL));
        assert!(html.contains("width=\"100%\""));
        assert!(html.contains("height: 600px"));
        assert!(html.contains("JotFormIFrame-primeanalytics-contact"));
    }

    #[tokio::test]
    async fn offers_the_alternative_methods_and_faqs() {
        let html = render().await;
        for method in CONTACT_METHODS {
            assert!(html.contains(method.action), "missing {}", method.action);
        }
        for faq in FAQS {
            assert!(html.contains(faq.question), "missing {}", faq.question);
        }
    }
}
