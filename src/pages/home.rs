use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::embed::EmbedFrame;
use crate::config;
use crate::content::{
    CaseStudy, Service, Stat, Testimonial, CTA_HIGHLIGHTS, HERO_HIGHLIGHTS, MAX_RATING, PORTFOLIO,
    SERVICES, STATS, TESTIMONIALS,
};
use crate::dom;
use crate::router::{use_navigate, use_reveal_pending_section, NavTarget, Page, Section};

fn render_highlights(items: &[&str]) -> Html {
    html! {
        <div class="highlights">
            { for items.iter().map(|item| html! { <span class="highlight">{"✓ "}{ *item }</span> }) }
        </div>
    }
}

fn render_stat(stat: &Stat) -> Html {
    html! {
        <div class="stat">
            <div class="stat-icon">{ stat.icon }</div>
            <div class="stat-figure">{ stat.figure }</div>
            <div class="stat-label">{ stat.label }</div>
        </div>
    }
}

fn render_service(service: &Service) -> Html {
    html! {
        <div class="card service-card">
            <div class="card-title-row">
                <span class="card-icon">{ service.icon }</span>
                <h3>{ service.title }</h3>
            </div>
            <h4>{"What I Do:"}</h4>
            <p>{ service.description }</p>
            <div class="impact">
                <h4>{"Business Impact:"}</h4>
                <p>{ service.impact }</p>
            </div>
        </div>
    }
}

fn render_case_study(case: &CaseStudy) -> Html {
    html! {
        <div class="card case-card">
            <h3>{ case.title }</h3>
            <p>{ case.description }</p>
            <div class="tags">
                { for case.tags.iter().map(|tag| html! { <span class="tag">{ *tag }</span> }) }
            </div>
            <div class="results">{"🏆 "}{ case.results }</div>
        </div>
    }
}

fn render_testimonial(testimonial: &Testimonial) -> Html {
    let stars = "★".repeat(usize::from(testimonial.rating.min(MAX_RATING)));
    html! {
        <div class="card testimonial-card">
            <div class="stars">{ stars }</div>
            <p class="quote">{ format!("\"{}\"", testimonial.quote) }</p>
            <div class="author">
                <div class="author-name">{ testimonial.name }</div>
                <div class="author-role">{ testimonial.role }</div>
            </div>
        </div>
    }
}

#[function_component]
pub fn Home() -> Html {
    let navigate = use_navigate();
    use_reveal_pending_section();

    let to_contact = {
        let navigate = navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate.emit(NavTarget::Page(Page::Contact));
        })
    };

    let book_call = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        dom::scroll_to_bottom();
    });

    html! {
        <div class="home-page">
            <section class="hero">
                <div class="container hero-grid">
                    <div class="hero-copy">
                        <span class="badge">{"✨ Trusted by 150+ Marketing Agencies"}</span>
                        <h1>
                            {"Transform Your Analytics Into a "}
                            <span class="accent">{"Strategic Asset"}</span>
                        </h1>
                        <p class="hero-subtitle">
                            {"We're the analytics experts behind successful marketing agencies and 7-8 figure e-commerce brands. Get precise tracking, clear attribution, and actionable insights that drive real growth."}
                        </p>
                        <div class="button-row">
                            <button class="primary-button" onclick={to_contact.clone()}>
                                {"Get Free Audit →"}
                            </button>
                            <button class="outline-button" onclick={book_call}>
                                {"Book Discovery Call"}
                            </button>
                        </div>
                        { render_highlights(HERO_HIGHLIGHTS) }
                    </div>
                    <div class="hero-visual">
                        <img
                            src="https://images.unsplash.com/photo-1551288049-bebda4e38f71?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80"
                            alt="Analytics Dashboard"
                        />
                        <div class="live-badge">
                            <span class="pulse"></span>
                            {"Live Analytics Tracking"}
                        </div>
                    </div>
                </div>
            </section>

            <section class="stats">
                <div class="container stats-grid">
                    { for STATS.iter().map(render_stat) }
                </div>
            </section>

            <section id={Section::Services.anchor()} class="services">
                <div class="container">
                    <div class="section-header">
                        <h2>{"Strategic Analytics Services"}</h2>
                        <p>{"We bridge the gap between marketing objectives and technical implementation, ensuring every piece of data serves a clear business purpose."}</p>
                    </div>
                    <div class="card-grid two">
                        { for SERVICES.iter().map(render_service) }
                    </div>
                    <div class="section-cta">
                        <button class="dark-button" onclick={to_contact.clone()}>
                            {"Learn More About Our Services"}
                        </button>
                    </div>
                </div>
            </section>

            <section id={Section::Portfolio.anchor()} class="portfolio">
                <div class="container">
                    <div class="section-header">
                        <h2>{"Client Success Stories"}</h2>
                        <p>{"Real results from real implementations"}</p>
                    </div>
                    <div class="card-grid three">
                        { for PORTFOLIO.iter().map(render_case_study) }
                    </div>
                    <div class="section-cta">
                        <button class="dark-button" onclick={to_contact.clone()}>
                            {"Discuss Your Project"}
                        </button>
                    </div>
                </div>
            </section>

            <section id={Section::Testimonials.anchor()} class="testimonials">
                <div class="container">
                    <div class="section-header">
                        <h2>{"What Our Clients Say"}</h2>
                        <p>{"Trusted by marketing agencies and e-commerce brands worldwide"}</p>
                    </div>
                    <div class="card-grid three">
                        { for TESTIMONIALS.iter().map(render_testimonial) }
                    </div>
                </div>
            </section>

            <section class="cta-band">
                <div class="container narrow">
                    <h2>{"Ready to Transform Your Analytics?"}</h2>
                    <p>{"Get a free analytics audit and discover opportunities to improve your tracking, attribution, and ROI within 48 hours."}</p>
                    <div class="button-row centered">
                        <button class="primary-button" onclick={to_contact.clone()}>
                            {"⚡ Get Free Audit"}
                        </button>
                        <button class="outline-button light" onclick={to_contact}>
                            {"Contact Us"}
                        </button>
                    </div>
                    { render_highlights(CTA_HIGHLIGHTS) }
                </div>
            </section>

            <section class="scheduler">
                <div class="container narrow">
                    <div class="section-header">
                        <h2>{"Book Your Discovery Call"}</h2>
                        <p>{"Schedule a free 30-minute consultation to discuss your analytics needs"}</p>
                    </div>
                    <div class="scheduler-box">
                        <EmbedFrame
                            src={config::SCHEDULER_URL}
                            title="Schedule a Discovery Call"
                            height_px={config::SCHEDULER_FRAME_HEIGHT_PX}
                            fallback_hint="Having trouble with the calendar? You can also book directly:"
                            fallback_label="Open Calendly in New Tab"
                        />
                    </div>
                </div>
            </section>

            <style>
                {r#"
                .hero {
                    background: linear-gradient(135deg, #E0F8F7, #B8F0ED);
                    padding: 5rem 0;
                }

                .hero-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }

                .badge {
                    display: inline-block;
                    background: #ffffff;
                    color: #0F3A49;
                    border: 1px solid #4ECDC4;
                    border-radius: 999px;
                    padding: 0.25rem 0.75rem;
                    font-size: 0.85rem;
                }

                .hero h1 {
                    font-size: 3rem;
                    line-height: 1.15;
                    color: #111827;
                    margin: 1.5rem 0;
                }

                .hero h1 .accent {
                    color: #0F3A49;
                }

                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #4b5563;
                    line-height: 1.6;
                }

                .hero-visual {
                    position: relative;
                }

                .hero-visual img {
                    width: 100%;
                    border-radius: 8px;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }

                .live-badge {
                    position: absolute;
                    bottom: -1.5rem;
                    left: -1.5rem;
                    background: #ffffff;
                    padding: 1rem;
                    border-radius: 8px;
                    box-shadow: 0 10px 20px rgba(0, 0, 0, 0.1);
                    color: #0F3A49;
                    font-size: 0.875rem;
                    font-weight: 500;
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .pulse {
                    width: 0.75rem;
                    height: 0.75rem;
                    border-radius: 50%;
                    background: #4ECDC4;
                    animation: pulse 1.5s infinite;
                }

                @keyframes pulse {
                    50% { opacity: 0.4; }
                }

                .highlights {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    margin-top: 2rem;
                    font-size: 0.875rem;
                    color: #6b7280;
                }

                .cta-band .highlights {
                    justify-content: center;
                    color: #e5e7eb;
                }

                .stats {
                    padding: 4rem 0;
                    background: #ffffff;
                }

                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    text-align: center;
                }

                .stat-icon {
                    font-size: 1.5rem;
                }

                .stat-figure {
                    font-size: 2rem;
                    font-weight: 700;
                    color: #0F3A49;
                }

                .stat-label {
                    font-size: 0.875rem;
                    color: #4b5563;
                }

                .services {
                    background: #f9fafb;
                    padding: 5rem 0;
                }

                .portfolio,
                .scheduler {
                    background: #ffffff;
                    padding: 5rem 0;
                }

                .testimonials {
                    background: #E0F8F7;
                    padding: 5rem 0;
                }

                .card-title-row {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .card-icon {
                    font-size: 2rem;
                }

                .service-card p,
                .case-card p {
                    color: #4b5563;
                    font-size: 0.9rem;
                    line-height: 1.6;
                }

                .impact {
                    background: #E0F8F7;
                    border-left: 4px solid #4ECDC4;
                    border-radius: 8px;
                    padding: 1rem;
                    margin-top: 1rem;
                }

                .tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin: 1rem 0;
                }

                .tag {
                    background: #E0F8F7;
                    color: #0F3A49;
                    border-radius: 999px;
                    padding: 0.15rem 0.6rem;
                    font-size: 0.75rem;
                }

                .results,
                .author {
                    border-top: 1px solid #e5e7eb;
                    padding-top: 1rem;
                    color: #0F3A49;
                    font-size: 0.875rem;
                    font-weight: 500;
                }

                .stars {
                    color: #4ECDC4;
                    letter-spacing: 0.15rem;
                }

                .quote {
                    font-style: italic;
                    color: #374151;
                    line-height: 1.6;
                }

                .author-role {
                    color: #4b5563;
                    font-weight: 400;
                }

                .cta-band {
                    background: linear-gradient(90deg, #0F3A49, #2A6F97);
                    padding: 5rem 0;
                    text-align: center;
                    color: #ffffff;
                }

                .cta-band h2 {
                    font-size: 2.25rem;
                }

                .cta-band p {
                    font-size: 1.25rem;
                    color: #e5e7eb;
                }

                .scheduler-box {
                    background: #f9fafb;
                    border-radius: 8px;
                    padding: 2rem;
                }

                @media (max-width: 1024px) {
                    .hero-grid {
                        grid-template-columns: 1fr;
                    }

                    .stats-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }

                    .hero h1 {
                        font-size: 2.25rem;
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
    use crate::router::SiteProvider;
    use yew::ServerRenderer;

    #[function_component]
    fn HomeHarness() -> Html {
        html! {
            <SiteProvider>
                <Home />
            </SiteProvider>
        }
    }

    async fn render() -> String {
        ServerRenderer::<HomeHarness>::new()
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn exposes_an_anchor_for_every_section() {
        let html = render().await;
        for section in Section::ALL {
            let anchor = format!("id=\"{}\"", section.anchor());
            assert!(html.contains(&anchor), "missing {}", anchor);
        }
    }

    #[tokio::test]
    async fn renders_every_card() {
        let html = render().await;
        for case in PORTFOLIO {
            assert!(html.contains(case.results), "missing {}", case.title);
        }
        for testimonial in TESTIMONIALS {
            assert!(html.contains(testimonial.name));
        }
        assert!(html.contains("Strategic Analytics Services"));
    }

    #[tokio::test]
    async fn embeds_the_scheduler_with_a_fallback() {
        let html = render().await;
        assert!(html.contains(config::SCHEDULER_URL));
        assert!(html.contains("height: 700px"));
        assert!(html.contains("Open Calendly in New Tab"));
    }
}
