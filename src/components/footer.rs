use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::content::{NavItem, FOOTER_BLURB, FOOTER_SERVICES, LEGAL_LINKS, QUICK_LINKS};
use crate::dom;
use crate::router::{use_navigate, NavTarget, Section};

#[function_component(Footer)]
pub fn footer() -> Html {
    let navigate = use_navigate();

    let link_button = |target: NavTarget, label: &'static str| {
        let navigate = navigate.clone();
        html! {
            <button class="footer-link" onclick={Callback::from(move |_: MouseEvent| navigate.emit(target))}>
                { label }
            </button>
        }
    };

    let services = FOOTER_SERVICES
        .iter()
        .map(|label| html! { <li>{ link_button(NavTarget::Section(Section::Services), *label) }</li> })
        .collect::<Html>();

    let quick_links = QUICK_LINKS
        .iter()
        .map(|item: &NavItem| html! { <li>{ link_button(item.target, item.label) }</li> })
        .collect::<Html>();

    let legal_links = LEGAL_LINKS
        .iter()
        .map(|item| link_button(item.target, item.label))
        .collect::<Html>();

    let book_audit = Callback::from(|_: MouseEvent| dom::open_in_new_tab(config::SCHEDULER_URL));

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-col">
                    <div class="footer-logo">{"Prime"}<span>{"Analytics"}</span></div>
                    <p class="footer-blurb">{ FOOTER_BLURB }</p>
                </div>

                <div class="footer-col">
                    <h3>{"Our Services"}</h3>
                    <ul>{ services }</ul>
                </div>

                <div class="footer-col">
                    <h3>{"Quick Links"}</h3>
                    <ul>
                        { quick_links }
                        <li>
                            <button class="footer-link" onclick={book_audit}>{"Book Free Audit"}</button>
                        </li>
                    </ul>
                </div>

                <div class="footer-col">
                    <h3>{"Contact Info"}</h3>
                    <ul class="footer-contact">
                        <li>{"✉️ "}{ config::CONTACT_EMAIL }</li>
                        <li>{"📞 "}{ config::PHONE_DISPLAY }</li>
                        <li>{"📍 "}{ config::LOCATION }</li>
                    </ul>
                </div>
            </div>

            <div class="footer-bottom">
                <div class="copyright">
                    { format!("© {} {}. All rights reserved.", config::COPYRIGHT_YEAR, config::BRAND_NAME) }
                </div>
                <div class="legal-links">{ legal_links }</div>
            </div>

            <style>
                {r#"
                .site-footer {
                    background: #0F3A49;
                    color: #ffffff;
                    padding: 3rem 1.5rem 2rem;
                }

                .footer-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }

                .footer-col h3 {
                    font-size: 1.1rem;
                    margin-bottom: 1rem;
                }

                .footer-col ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }

                .footer-col li {
                    margin-bottom: 0.5rem;
                }

                .footer-logo {
                    font-size: 1.3rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .footer-logo span {
                    color: #4ECDC4;
                }

                .footer-blurb,
                .footer-contact li {
                    color: #d1d5db;
                    font-size: 0.875rem;
                    line-height: 1.6;
                }

                .footer-link {
                    background: none;
                    border: none;
                    padding: 0;
                    cursor: pointer;
                    color: #d1d5db;
                    font-size: 0.875rem;
                    transition: color 0.2s ease;
                }

                .footer-link:hover {
                    color: #4ECDC4;
                }

                .footer-bottom {
                    max-width: 80rem;
                    margin: 2rem auto 0;
                    padding-top: 2rem;
                    border-top: 1px solid #2A6F97;
                    display: flex;
                    justify-content: space-between;
                    flex-wrap: wrap;
                    gap: 1rem;
                    color: #9ca3af;
                    font-size: 0.875rem;
                }

                .legal-links {
                    display: flex;
                    gap: 1.5rem;
                }

                @media (max-width: 1024px) {
                    .footer-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (max-width: 640px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::router::SiteProvider;
    use yew::ServerRenderer;

    #[function_component]
    fn FooterHarness() -> Html {
        html! {
            <SiteProvider>
                <Footer />
            </SiteProvider>
        }
    }

    async fn render() -> String {
        ServerRenderer::<FooterHarness>::new()
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn lists_every_legal_page() {
        let html = render().await;
        for label in ["Conditions", "Privacy Policy", "Refund Policy"] {
            assert!(html.contains(label), "missing {}", label);
        }
    }

    #[tokio::test]
    async fn lists_services_and_contact_details() {
        let html = render().await;
        assert!(html.contains("Custom Reporting"));
        assert!(html.contains(config::CONTACT_EMAIL));
        assert!(html.contains("Book Free Audit"));
        assert!(html.contains("All rights reserved."));
    }
}
