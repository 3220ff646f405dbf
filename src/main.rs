use log::info;
use yew::prelude::*;

mod config;
mod content;
mod dom;
mod legal;
mod router;

mod components {
    pub mod embed;
    pub mod footer;
    pub mod nav;
}

mod pages {
    pub mod contact;
    pub mod home;
    pub mod legal;
}

use components::{footer::Footer, nav::Nav};
use pages::{
    contact::Contact,
    home::Home,
    legal::{PrivacyPage, RefundPage, TermsPage},
};
use router::{use_site_state, Page, SiteProvider};

fn switch(page: Page) -> Html {
    match page {
        Page::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Page::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Page::Terms => {
            info!("Rendering Terms page");
            html! { <TermsPage /> }
        }
        Page::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPage /> }
        }
        Page::Refund => {
            info!("Rendering Refund page");
            html! { <RefundPage /> }
        }
    }
}

#[function_component]
fn CurrentPage() -> Html {
    let site = use_site_state();
    switch(site.page)
}

#[function_component]
fn Layout() -> Html {
    html! {
        <>
            <div class="site">
                <Nav />
                <main class="site-main">
                    <CurrentPage />
                </main>
                <Footer />
            </div>
            <style>
                {r#"
                * {
                    box-sizing: border-box;
                }

                body {
                    margin: 0;
                    font-family: system-ui, -apple-system, "Segoe UI", Roboto, Arial, sans-serif;
                    color: #111827;
                    background: #ffffff;
                }

                .site {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                }

                .site-main {
                    flex: 1;
                }

                .container {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .container.narrow {
                    max-width: 56rem;
                }

                .section-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .section-header h2 {
                    font-size: 2.25rem;
                    color: #0F3A49;
                }

                .section-header p {
                    font-size: 1.25rem;
                    color: #4b5563;
                    max-width: 48rem;
                    margin: 0 auto;
                }

                .section-cta {
                    text-align: center;
                    margin-top: 3rem;
                }

                .card {
                    background: #ffffff;
                    border: 1px solid #e5e7eb;
                    border-radius: 12px;
                    padding: 1.5rem;
                    transition: box-shadow 0.2s ease, border-color 0.2s ease;
                }

                .card:hover {
                    box-shadow: 0 10px 24px rgba(0, 0, 0, 0.08);
                    border-color: rgba(78, 205, 196, 0.3);
                }

                .card h3 {
                    color: #0F3A49;
                }

                .card-grid {
                    display: grid;
                    gap: 2rem;
                }

                .card-grid.two {
                    grid-template-columns: repeat(2, 1fr);
                }

                .card-grid.three {
                    grid-template-columns: repeat(3, 1fr);
                }

                .button-row {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    margin-top: 2rem;
                }

                .button-row.centered {
                    justify-content: center;
                }

                .primary-button,
                .outline-button,
                .dark-button {
                    padding: 0.75rem 1.5rem;
                    border-radius: 8px;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }

                .primary-button {
                    background: #4ECDC4;
                    color: #ffffff;
                    border: none;
                }

                .primary-button:hover {
                    background: #3BB8B0;
                }

                .outline-button {
                    background: transparent;
                    color: #0F3A49;
                    border: 1px solid #0F3A49;
                }

                .outline-button:hover {
                    background: #0F3A49;
                    color: #ffffff;
                }

                .outline-button.light {
                    color: #ffffff;
                    border-color: #ffffff;
                }

                .outline-button.small {
                    width: 100%;
                    padding: 0.4rem 0.75rem;
                    font-size: 0.8rem;
                    border-color: #4ECDC4;
                }

                .dark-button {
                    background: #0F3A49;
                    color: #ffffff;
                    border: none;
                }

                .dark-button:hover {
                    background: #0A2D37;
                }

                .muted {
                    color: #4b5563;
                    font-size: 0.875rem;
                }

                .centered {
                    text-align: center;
                }

                @media (max-width: 1024px) {
                    .card-grid.two,
                    .card-grid.three {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </>
    }
}

#[function_component]
fn App() -> Html {
    let landing = dom::location_fragment();

    html! {
        <SiteProvider landing={landing}>
            <Layout />
        </SiteProvider>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{window, Element, HtmlElement};
    use yew::AppHandle;

    use super::*;
    use crate::router::{use_navigate, NavTarget, Section, SiteState};

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Default)]
    struct Recorded {
        navigate: Option<Callback<NavTarget>>,
        state: SiteState,
    }

    type Slot = Rc<RefCell<Recorded>>;

    #[derive(Properties)]
    struct SlotProps {
        slot: Slot,
    }

    impl PartialEq for SlotProps {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.slot, &other.slot)
        }
    }

    /// Hands the navigate callback and the latest state back to the test.
    #[function_component]
    fn Recorder(props: &SlotProps) -> Html {
        let navigate = use_navigate();
        let state = use_site_state();
        *props.slot.borrow_mut() = Recorded {
            navigate: Some(navigate),
            state,
        };
        html! {}
    }

    #[function_component]
    fn Harness(props: &SlotProps) -> Html {
        html! {
            <SiteProvider>
                <Recorder slot={props.slot.clone()} />
                <Layout />
            </SiteProvider>
        }
    }

    struct Mounted {
        slot: Slot,
        root: Element,
        handle: AppHandle<Harness>,
    }

    impl Mounted {
        async fn new() -> Self {
            let document = window().unwrap().document().unwrap();
            let root = document.create_element("div").unwrap();
            document.body().unwrap().append_child(&root).unwrap();

            let slot = Slot::default();
            let handle = yew::Renderer::<Harness>::with_root_and_props(
                root.clone(),
                SlotProps { slot: slot.clone() },
            )
            .render();
            settle().await;
            Self { slot, root, handle }
        }

        fn navigate(&self, target: NavTarget) {
            let navigate = self.slot.borrow().navigate.clone().unwrap();
            navigate.emit(target);
        }

        fn state(&self) -> SiteState {
            self.slot.borrow().state.clone()
        }

        fn find(&self, selector: &str) -> Option<Element> {
            self.root.query_selector(selector).unwrap()
        }

        fn click(&self, element: Element) {
            element.dyn_into::<HtmlElement>().unwrap().click();
        }

        fn unmount(self) {
            self.handle.destroy();
            self.root.remove();
            window().unwrap().scroll_to_with_x_and_y(0.0, 0.0);
        }
    }

    async fn settle() {
        TimeoutFuture::new(50).await;
    }

    fn scroll_y() -> f64 {
        window().unwrap().scroll_y().unwrap()
    }

    #[wasm_bindgen_test]
    async fn navigating_resets_the_viewport() {
        let site = Mounted::new().await;
        window().unwrap().scroll_to_with_x_and_y(0.0, 600.0);
        assert!(scroll_y() > 0.0);

        site.navigate(NavTarget::Page(Page::Contact));
        assert_eq!(scroll_y(), 0.0);

        settle().await;
        assert_eq!(site.state().page, Page::Contact);
        assert!(site.find(".contact-page").is_some());
        assert_eq!(scroll_y(), 0.0);
        site.unmount();
    }

    #[wasm_bindgen_test]
    async fn section_link_reveals_the_section_on_home() {
        let site = Mounted::new().await;
        site.navigate(NavTarget::Page(Page::Contact));
        settle().await;

        site.navigate(NavTarget::Section(Section::Services));
        settle().await;

        let state = site.state();
        assert_eq!(state.page, Page::Home);
        assert_eq!(state.pending_section, None);
        assert!(site.find("#services").is_some());

        TimeoutFuture::new(1_500).await;
        assert!(scroll_y() > 0.0);
        site.unmount();
    }

    #[wasm_bindgen_test]
    async fn mobile_menu_closes_after_a_selection() {
        let site = Mounted::new().await;
        assert!(site.find(".nav-mobile").is_none());

        site.click(site.find(".burger-menu").unwrap());
        settle().await;
        assert!(site.find(".nav-mobile").is_some());

        let items = site.root.query_selector_all(".nav-link.mobile").unwrap();
        let contact = (0..items.length())
            .filter_map(|index| items.get(index))
            .find(|node| node.text_content().as_deref() == Some("Contact"))
            .unwrap();
        site.click(contact.dyn_into::<Element>().unwrap());
        settle().await;

        assert!(site.find(".nav-mobile").is_none());
        assert_eq!(site.state().page, Page::Contact);
        site.unmount();
    }
}
