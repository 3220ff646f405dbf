//! Viewport and window helpers. Failures are logged and otherwise ignored;
//! a scroll that cannot happen is not worth interrupting the visitor for.

use log::{debug, warn};
use wasm_bindgen::JsValue;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

fn report(action: &str, err: JsValue) {
    warn!("{} failed: {:?}", action, err);
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

fn smooth_scroll_to(top: f64) {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn smooth_scroll_to_top() {
    smooth_scroll_to(0.0);
}

/// Smooth-scrolls to the end of the document, where the scheduler lives.
pub fn scroll_to_bottom() {
    let height = window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
        .map(|root| root.scroll_height())
        .unwrap_or_default();
    smooth_scroll_to(f64::from(height));
}

/// Smooth-scrolls the element with `id` into view. Returns false if it is not in the document.
pub fn scroll_to_anchor(id: &str) -> bool {
    let element = window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));

    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => {
            debug!("No element #{} mounted, skipping scroll", id);
            false
        }
    }
}

pub fn open_in_new_tab(url: &str) {
    if let Some(window) = window() {
        if let Err(err) = window.open_with_url_and_target(url, "_blank") {
            report("Opening new tab", err);
        }
    }
}

/// Current URL fragment without the leading `#`.
pub fn location_fragment() -> String {
    let Some(window) = window() else {
        return String::new();
    };
    match window.location().hash() {
        Ok(hash) => hash.trim_start_matches('#').to_string(),
        Err(err) => {
            report("Reading location hash", err);
            String::new()
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn scroll_y() -> f64 {
        window().and_then(|window| window.scroll_y().ok()).unwrap_or_default()
    }

    fn tall_page() -> web_sys::Element {
        let document = window().unwrap().document().unwrap();
        let filler = document.create_element("div").unwrap();
        filler.set_attribute("style", "height: 5000px;").unwrap();
        document.body().unwrap().append_child(&filler).unwrap();
        filler
    }

    #[wasm_bindgen_test]
    fn missing_anchor_is_skipped() {
        assert!(!scroll_to_anchor("no-such-section"));
    }

    #[wasm_bindgen_test]
    fn scroll_to_top_resets_immediately() {
        let filler = tall_page();
        window().unwrap().scroll_to_with_x_and_y(0.0, 800.0);
        assert!(scroll_y() > 0.0);

        scroll_to_top();
        assert_eq!(scroll_y(), 0.0);
        filler.remove();
    }

    #[wasm_bindgen_test]
    async fn smooth_scroll_to_top_ends_at_the_top() {
        let filler = tall_page();
        window().unwrap().scroll_to_with_x_and_y(0.0, 800.0);
        assert!(scroll_y() > 0.0);

        smooth_scroll_to_top();
        TimeoutFuture::new(1_500).await;
        assert_eq!(scroll_y(), 0.0);
        filler.remove();
    }
}
