use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};
use yew::html::NodeRef;

use crate::controller::scroll::{parallax_offset, parse_speed, ScrollSample, Section, SectionBounds};
use crate::controller::timeline::BURST_LIFETIME_MS;

pub const PARALLAX_SELECTOR: &str = ".parallax";

pub fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

/// Moves every `.parallax` element by `scroll_y * data-speed`. Only the
/// transform changes, layout is untouched.
pub fn apply_parallax(scroll_y: f64) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(nodes) = document.query_selector_all(PARALLAX_SELECTOR) else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let speed = parse_speed(element.get_attribute("data-speed").as_deref());
        if let Err(e) = element.style().set_property(
            "transform",
            &format!("translateY({}px)", parallax_offset(scroll_y, speed)),
        ) {
            log::warn!("Failed to move parallax layer: {:?}", e);
        }
    }
}

/// Current scroll position, scrollable range and the bounds of every mounted
/// section.
pub fn read_scroll_sample(sections: &[(Section, NodeRef)]) -> Option<ScrollSample> {
    let window = web_sys::window()?;
    let scroll_y = window.scroll_y().ok()?;
    let root = window.document()?.document_element()?;
    let scrollable_height = (root.scroll_height() - root.client_height()) as f64;

    let sections = sections
        .iter()
        .filter_map(|(section, node)| {
            let element = node.cast::<HtmlElement>()?;
            Some((
                *section,
                SectionBounds {
                    top: element.offset_top() as f64,
                    height: element.offset_height() as f64,
                },
            ))
        })
        .collect();

    Some(ScrollSample {
        scroll_y,
        scrollable_height,
        sections,
    })
}

/// Calls `on_expire(generation)` once the burst's lifetime has passed.
pub fn schedule_burst_expiry<F>(generation: u64, on_expire: F)
where
    F: FnOnce(u64) + 'static,
{
    Timeout::new(BURST_LIFETIME_MS, move || on_expire(generation)).forget();
}

pub fn scroll_to(node: &NodeRef) {
    if let Some(element) = node.cast::<HtmlElement>() {
        let mut options = ScrollIntoViewOptions::new();
        options.behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("Failed to show alert: {:?}", e);
        }
    }
}
