#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ai_future::components::news::{NewsFeed, NewsFeedProps};
use ai_future::controller::news::{fallback_news, NewsState};
use ai_future::controller::scroll::{Section, DEFAULT_PARALLAX_SPEED};
use ai_future::controller::timeline::{
    ParticleBurst, TimelineState, BURST_LIFETIME_MS, BURST_SIZE,
};
use ai_future::utils::dom;
use ai_future::utils::listener::WindowListener;
use gloo_timers::future::TimeoutFuture;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlElement};
use yew::html::NodeRef;
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

fn fire(event_name: &str) {
    let window = web_sys::window().expect("no window");
    let event = Event::new(event_name).expect("create event");
    window.dispatch_event(&event).expect("dispatch event");
}

#[wasm_bindgen_test]
fn listener_is_released_on_drop() {
    let hits = Rc::new(Cell::new(0));
    let listener = {
        let hits = hits.clone();
        WindowListener::new("ai-future-test", move |_| hits.set(hits.get() + 1))
            .expect("listener registered")
    };

    fire("ai-future-test");
    fire("ai-future-test");
    assert_eq!(hits.get(), 2);

    drop(listener);
    fire("ai-future-test");
    assert_eq!(hits.get(), 2);
}

#[wasm_bindgen_test]
fn parallax_uses_data_speed_or_default() {
    let document = web_sys::window().unwrap().document().unwrap();
    let body = document.body().expect("body");

    let fast = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    fast.set_class_name("parallax");
    fast.set_attribute("data-speed", "0.25").unwrap();
    let plain = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    plain.set_class_name("parallax");
    body.append_child(&fast).unwrap();
    body.append_child(&plain).unwrap();

    dom::apply_parallax(200.0);

    assert_eq!(
        fast.style().get_property_value("transform").unwrap(),
        "translateY(50px)"
    );
    assert_eq!(
        plain.style().get_property_value("transform").unwrap(),
        format!("translateY({}px)", 200.0 * DEFAULT_PARALLAX_SPEED)
    );

    fast.remove();
    plain.remove();
}

#[wasm_bindgen_test]
fn unmounted_sections_are_skipped() {
    let refs: Vec<(Section, NodeRef)> = Section::ALL
        .iter()
        .map(|section| (*section, NodeRef::default()))
        .collect();
    let sample = dom::read_scroll_sample(&refs).expect("window available");
    assert!(sample.sections.is_empty());
    assert!(sample.scroll_y >= 0.0);
}

#[wasm_bindgen_test]
async fn burst_clears_after_its_lifetime() {
    let timeline = Rc::new(RefCell::new(TimelineState::default()));
    let burst = ParticleBurst::spawn(&mut StdRng::seed_from_u64(3), 1);
    timeline.borrow_mut().select(2050, burst);

    {
        let timeline = timeline.clone();
        dom::schedule_burst_expiry(1, move |generation| {
            timeline.borrow_mut().expire(generation)
        });
    }

    TimeoutFuture::new(BURST_LIFETIME_MS - 300).await;
    assert_eq!(timeline.borrow().particles().len(), BURST_SIZE);

    TimeoutFuture::new(600).await;
    assert!(timeline.borrow().particles().is_empty());
    assert_eq!(timeline.borrow().selected_year(), 2050);
}

fn mount_point() -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().expect("body").append_child(&root).unwrap();
    root
}

fn count(root: &Element, selector: &str) -> u32 {
    root.query_selector_all(selector).unwrap().length()
}

#[function_component]
fn DelayedFeed() -> Html {
    let news = use_state(NewsState::default);
    {
        let news = news.clone();
        use_effect_with_deps(
            move |_| {
                news.set(NewsState::Loaded(fallback_news(chrono::Utc::now())));
                || ()
            },
            (),
        );
    }
    html! { <NewsFeed news={(*news).clone()} /> }
}

#[wasm_bindgen_test]
async fn news_feed_shows_loading_until_articles_arrive() {
    let loading = mount_point();
    yew::Renderer::<NewsFeed>::with_root_and_props(
        loading.clone(),
        NewsFeedProps {
            news: NewsState::Loading,
        },
    )
    .render();

    let loaded = mount_point();
    yew::Renderer::<DelayedFeed>::with_root(loaded.clone()).render();

    TimeoutFuture::new(20).await;

    assert_eq!(count(&loading, ".news-loading"), 1);
    assert_eq!(count(&loading, ".news-card"), 0);

    assert_eq!(count(&loaded, ".news-loading"), 0);
    assert_eq!(count(&loaded, ".news-card"), 3);
    let text = loaded.text_content().unwrap_or_default();
    assert!(text.contains("Global AI Summit Addresses Ethical Development"));
    assert!(text.contains("Future Tech Review"));

    loading.remove();
    loaded.remove();
}
