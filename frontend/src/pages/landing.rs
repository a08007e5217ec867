use chrono::Datelike;
use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::contact::ContactForm;
use crate::components::countdown::CountdownDisplay;
use crate::components::cursor::CursorTrail;
use crate::components::nav::{Footer, NavBar};
use crate::components::news::NewsFeed;
use crate::components::stats::StatsGrid;
use crate::components::timeline::TimelineSlider;
use crate::config;
use crate::controller::scroll::Section;
use crate::controller::timeline::ParticleBurst;
use crate::controller::{countdown, stats, ViewAction, ViewState};
use crate::pages::content::{self, Card};
use crate::utils::dom;
use crate::utils::listener::WindowListener;
use crate::utils::news;

fn section_ref(refs: &[(Section, NodeRef)], section: Section) -> NodeRef {
    refs.iter()
        .find(|(candidate, _)| *candidate == section)
        .map(|(_, node)| node.clone())
        .unwrap_or_default()
}

fn render_cards(cards: &[Card]) -> Html {
    html! {
        <div class="timeline-grid">
            { for cards.iter().map(|card| html! {
                <article
                    class={classes!("timeline-card", "interactive-card", card.speed.is_some().then_some("parallax"))}
                    data-speed={card.speed.map(AttrValue::Static)}
                >
                    <span class="year">{card.tag}</span>
                    <h4>{card.title}</h4>
                    <p>{card.body}</p>
                </article>
            })}
        </div>
    }
}

fn cyber_eye(side: &'static str) -> Html {
    html! {
        <div class={side}>
            <div class="cyber-eye-container">
                <div class="cyber-eye">
                    <div class="eye-outer-ring">
                        <div class="eye-middle-ring">
                            <div class="eye-iris">
                                <div class="eye-pupil"></div>
                                <div class="eye-glow"></div>
                                <div class="eye-reflections">
                                    <div class="reflection reflection-1"></div>
                                    <div class="reflection reflection-2"></div>
                                    <div class="reflection reflection-3"></div>
                                </div>
                            </div>
                        </div>
                    </div>
                    <div class="eye-circuits">
                        { for (0..8).map(|i| html! { <div key={i.to_string()} class="circuit-line"></div> }) }
                    </div>
                    <div class="eye-particles">
                        { for (0..12).map(|i| html! { <div key={i.to_string()} class="eye-particle"></div> }) }
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let state = use_reducer(|| ViewState::new(config::get_countdown_target_ms(), dom::now_ms()));
    let section_refs = use_memo(
        |_| {
            Section::ALL
                .iter()
                .map(|section| (*section, NodeRef::default()))
                .collect::<Vec<_>>()
        },
        (),
    );
    let burst_generation = use_mut_ref(|| 0u64);

    // Countdown ticks once a second until the target passes
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |arrived| {
                let interval = (!*arrived).then(|| {
                    Interval::new(countdown::TICK_MS, move || {
                        dispatcher.dispatch(ViewAction::CountdownTick {
                            now_ms: dom::now_ms(),
                        });
                    })
                });
                move || drop(interval)
            },
            state.countdown.has_arrived(),
        );
    }

    // Statistics ramp, dropped once the final tick lands
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |complete| {
                let interval = (!*complete).then(|| {
                    Interval::new(stats::tick_interval_ms(), move || {
                        dispatcher.dispatch(ViewAction::StatsTick);
                    })
                });
                move || drop(interval)
            },
            state.stats.is_complete(),
        );
    }

    // Pointer trail
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::new("mousemove", move |event| {
                    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                        dispatcher.dispatch(ViewAction::PointerMoved {
                            x: mouse.client_x(),
                            y: mouse.client_y(),
                        });
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }

    // Parallax and section tracking run in the same handler call
    {
        let dispatcher = state.dispatcher();
        let section_refs = section_refs.clone();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::passive("scroll", move |_| {
                    if let Some(sample) = dom::read_scroll_sample(&section_refs) {
                        dom::apply_parallax(sample.scroll_y);
                        dispatcher.dispatch(ViewAction::Scrolled(sample));
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }

    // News is fetched once; failures come back as the fallback list
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let items = news::load_news(config::get_news_api_key()).await;
                    dispatcher.dispatch(ViewAction::NewsLoaded(items));
                });
                || ()
            },
            (),
        );
    }

    let on_section = {
        let dispatcher = state.dispatcher();
        let section_refs = section_refs.clone();
        Callback::from(move |section: Section| {
            dom::scroll_to(&section_ref(&section_refs, section));
            dispatcher.dispatch(ViewAction::SectionSelected(section));
        })
    };

    let on_year = {
        let dispatcher = state.dispatcher();
        let burst_generation = burst_generation.clone();
        Callback::from(move |year: u16| {
            let generation = {
                let mut counter = burst_generation.borrow_mut();
                *counter += 1;
                *counter
            };
            let burst = ParticleBurst::spawn(&mut rand::thread_rng(), generation);
            dispatcher.dispatch(ViewAction::YearSelected { year, burst });

            let dispatcher = dispatcher.clone();
            dom::schedule_burst_expiry(generation, move |generation| {
                dispatcher.dispatch(ViewAction::BurstExpired { generation });
            });
        })
    };

    let on_hover = {
        let dispatcher = state.dispatcher();
        Callback::from(move |year: Option<u16>| dispatcher.dispatch(ViewAction::YearHovered(year)))
    };

    html! {
        <div class="app mono-theme">
            <style>{LANDING_CSS}</style>
            <div class="scroll-progress" style={format!("width: {}%;", state.scroll.progress_percent)}></div>

            <div class="bg-dots layer layer-fast" aria-hidden="true"></div>
            <div class="bg-dots layer layer-mid" aria-hidden="true"></div>
            <div class="bg-dots layer layer-slow" aria-hidden="true"></div>

            <CursorTrail trail={state.pointer.clone()} />
            <NavBar active={state.scroll.active_section} on_select={on_section.clone()} />

            <section class="hero container" id={Section::Home.id()} ref={section_ref(&section_refs, Section::Home)}>
                { cyber_eye("hero-left-eye") }
                <div class="hero-center parallax" data-speed="0.28">
                    <h1 class="hero-title glitch-layers" data-text="THE AGE OF ARTIFICIAL INTELLIGENCE">
                        <span>{"THE AGE OF"}</span>
                        <span>{"ARTIFICIAL"}</span>
                        <span>{"INTELLIGENCE"}</span>
                    </h1>
                    <p class="hero-subtitle">{"Exploring the horizon where human consciousness meets machine intelligence"}</p>
                </div>
                { cyber_eye("hero-right-eye") }
            </section>

            <section class="future container" id={Section::About.id()} ref={section_ref(&section_refs, Section::About)}>
                <h2 class="section-title glitch-lite" data-text="The AI Revolution">{"The AI Revolution"}</h2>
                <p class="lead typewriter">{content::VISION}</p>
            </section>

            <CountdownDisplay remaining={state.countdown.remaining()} />
            <NewsFeed news={state.news.clone()} />
            <StatsGrid stats={state.stats.values()} />
            <TimelineSlider timeline={state.timeline.clone()} on_select={on_year} {on_hover} />

            <section class="timeline container" id={Section::Technologies.id()} ref={section_ref(&section_refs, Section::Technologies)}>
                <h3 class="section-title">{"Breakthrough AI Technologies"}</h3>
                { render_cards(&content::TECHNOLOGIES) }
            </section>

            <section class="timeline container" id={Section::Services.id()} ref={section_ref(&section_refs, Section::Services)}>
                <h3 class="section-title">{"Timeline of AI Evolution"}</h3>
                { render_cards(&content::EVOLUTION) }
            </section>

            <section class="voices container" id={Section::Predictions.id()} ref={section_ref(&section_refs, Section::Predictions)}>
                <h3 class="section-title">{"Visionary Insights"}</h3>
                <div class="quotes-grid">
                    { for content::QUOTES.iter().map(|(quote, author)| html! {
                        <div class="quote interactive-card">
                            <div class="quote-text">{format!("\"{}\"", quote)}</div>
                            <div class="quote-author">{format!("— {}", author)}</div>
                        </div>
                    })}
                </div>
            </section>

            <section class="future container industries">
                <h2 class="section-title">{"AI Transformation Across Industries"}</h2>
                { render_cards(&content::INDUSTRIES) }
            </section>

            <section class="contact container" id={Section::Contact.id()} ref={section_ref(&section_refs, Section::Contact)}>
                <h3 class="section-title">{"Join the AI Revolution"}</h3>
                <ContactForm />
            </section>

            <Footer on_select={on_section} year={chrono::Local::now().year()} />
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .mono-theme {
        --bg: #050505;
        --fg: #f5f5f5;
        --muted: #8a8a8a;
        --line: #222;
        --panel: #0d0d0d;
        --panel-strong: #1c1c1c;
        background: var(--bg);
        color: var(--fg);
        min-height: 100vh;
        overflow-x: hidden;
        cursor: none;
    }
    .container {
        max-width: 1200px;
        margin: 0 auto;
        padding: 100px 24px;
        border-bottom: 1px solid var(--line);
    }
    .scroll-progress {
        position: fixed;
        top: 0;
        left: 0;
        height: 3px;
        background: var(--fg);
        z-index: 1000;
    }
    .bg-dots {
        position: fixed;
        inset: 0;
        pointer-events: none;
        background-image: radial-gradient(rgba(255,255,255,0.08) 1px, transparent 1px);
    }
    .layer-fast { background-size: 24px 24px; }
    .layer-mid { background-size: 48px 48px; }
    .layer-slow { background-size: 96px 96px; }
    .cursor-dot, .cursor-outline, .cursor-trail-dot {
        position: fixed;
        pointer-events: none;
        border-radius: 50%;
        transform: translate(-50%, -50%);
        z-index: 999;
    }
    .cursor-dot { width: 8px; height: 8px; background: var(--fg); }
    .cursor-outline { width: 36px; height: 36px; border: 1px solid var(--muted); transition: left 0.12s, top 0.12s; }
    .cursor-trail-dot { width: 6px; height: 6px; background: var(--muted); }
    .nav-wrap {
        position: sticky;
        top: 0;
        z-index: 100;
        background: rgba(5,5,5,0.85);
        backdrop-filter: blur(8px);
        border-bottom: 1px solid var(--line);
    }
    .nav { display: flex; justify-content: space-between; align-items: center; padding: 18px 24px; border-bottom: none; }
    .brand { font-weight: 900; letter-spacing: 4px; }
    .nav-links { display: flex; gap: 28px; list-style: none; margin: 0; padding: 0; }
    .nav-links li { color: var(--muted); cursor: pointer; transition: color 0.2s; }
    .nav-links li.active, .nav-links li:hover { color: var(--fg); }
    .hero { display: grid; grid-template-columns: 1fr 2fr 1fr; align-items: center; min-height: 90vh; }
    .hero-title span { display: block; font-size: clamp(2.5rem, 6vw, 5rem); font-weight: 900; line-height: 1.05; }
    .hero-subtitle, .typewriter, .lead { color: var(--muted); line-height: 1.8; }
    .section-title { font-size: clamp(2rem, 4vw, 3rem); margin-bottom: 40px; }
    .cyber-eye { position: relative; width: 160px; height: 160px; margin: 0 auto; }
    .eye-outer-ring, .eye-middle-ring, .eye-iris { border-radius: 50%; border: 1px solid var(--muted); display: flex; align-items: center; justify-content: center; }
    .eye-outer-ring { width: 160px; height: 160px; }
    .eye-middle-ring { width: 110px; height: 110px; }
    .eye-iris { width: 64px; height: 64px; position: relative; }
    .eye-pupil { width: 22px; height: 22px; border-radius: 50%; background: var(--fg); }
    .count-holder, .stats-grid, .news-grid, .timeline-grid, .quotes-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
        gap: 30px;
    }
    .count-circle { aspect-ratio: 1; border-radius: 50%; border: 1px solid var(--line); display: flex; align-items: center; justify-content: center; }
    .count-inner .num { font-size: 3rem; font-weight: 900; }
    .count-inner .label, .stat-label { color: var(--muted); text-transform: uppercase; letter-spacing: 1px; }
    .arrival { font-size: 2rem; font-weight: 700; }
    .interactive-card { background: var(--panel); border: 1px solid var(--line); border-radius: 16px; padding: 30px; transition: transform 0.3s ease; }
    .interactive-card:hover { transform: translateY(-5px); }
    .stat-value { font-size: clamp(2.5rem, 4rem, 4.5rem); font-weight: 900; margin-bottom: 12px; }
    .stat-caption { color: var(--muted); font-size: 0.85rem; margin-top: 8px; font-style: italic; }
    .news-loading { text-align: center; color: var(--muted); }
    .news-card a { color: var(--fg); text-decoration: none; }
    .news-meta { display: flex; justify-content: space-between; font-size: 0.85rem; color: var(--muted); }
    .timeline-panel-wrap { max-width: 900px; margin: 0 auto; }
    .timeline-panel { position: relative; overflow: hidden; background: var(--panel); border: 1px solid var(--line); border-radius: 20px; padding: 60px 40px; }
    .timeline-particle {
        position: absolute;
        width: 4px;
        height: 4px;
        border-radius: 50%;
        background: var(--fg);
        pointer-events: none;
        animation: particleFade 1s ease-out forwards;
    }
    @keyframes particleFade {
        from { opacity: 1; transform: translate(0, 0) scale(1); }
        to { opacity: 0; transform: translate(var(--particle-x, 0), var(--particle-y, 0)) scale(0); }
    }
    .timeline-year { font-size: 5rem; font-weight: 900; transition: transform 0.3s ease; }
    .timeline-year.hovering { transform: scale(1.05); }
    .timeline-title { font-size: 2rem; font-weight: 700; margin-bottom: 16px; }
    .timeline-desc { color: var(--muted); line-height: 1.8; min-height: 80px; margin-bottom: 40px; }
    .timeline-progress { height: 4px; background: var(--line); border-radius: 2px; overflow: hidden; margin-bottom: 30px; }
    .timeline-progress-fill { height: 100%; background: linear-gradient(90deg, var(--fg), var(--muted)); transition: width 0.3s ease; }
    .timeline-milestones { display: flex; justify-content: space-between; margin-bottom: 30px; padding: 0 10px; }
    .milestone-dot { position: relative; width: 20px; height: 20px; border-radius: 50%; border: 2px solid var(--fg); cursor: pointer; transition: all 0.3s ease; }
    .milestone-label { position: absolute; bottom: 30px; left: 50%; transform: translateX(-50%); font-size: 0.75rem; color: var(--muted); opacity: 0; transition: opacity 0.3s ease; }
    .milestone-label.visible { opacity: 1; }
    .timeline-range input[type="range"] { width: 100%; height: 8px; border-radius: 4px; appearance: none; -webkit-appearance: none; outline: none; cursor: pointer; }
    .timeline-eras { display: flex; justify-content: space-between; margin-top: 16px; color: var(--muted); font-weight: 600; }
    .era-label { padding: 4px 12px; border-radius: 4px; }
    .era-label.active { background: var(--panel-strong); }
    .timeline-fact { margin-top: 30px; padding: 20px; border: 1px solid var(--line); border-radius: 12px; color: var(--muted); font-style: italic; }
    .timeline-fact strong { color: var(--fg); }
    .year { color: var(--muted); font-weight: 700; letter-spacing: 2px; }
    .quote-text { font-style: italic; line-height: 1.7; }
    .quote-author { color: var(--muted); margin-top: 16px; }
    .contact-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 40px; }
    .contact-item { display: flex; gap: 12px; margin-top: 12px; color: var(--muted); }
    .form-group input, .form-group textarea { width: 100%; background: transparent; border: 1px solid var(--line); color: var(--fg); padding: 14px; margin-bottom: 16px; border-radius: 8px; }
    .submit-btn { width: 100%; padding: 16px; background: var(--fg); color: var(--bg); border: none; border-radius: 8px; font-weight: 700; cursor: pointer; }
    .footer-inner { display: flex; justify-content: space-between; gap: 40px; border-bottom: none; }
    .footer-links { display: flex; gap: 60px; }
    .footer-column ul { list-style: none; padding: 0; color: var(--muted); }
    .footer-column li { margin-bottom: 8px; cursor: pointer; }
    .footer-bottom { text-align: center; color: var(--muted); border-top: 1px solid var(--line); }
    @media (max-width: 768px) {
        .hero { grid-template-columns: 1fr; }
        .nav-links { display: none; }
        .contact-grid, .footer-inner { grid-template-columns: 1fr; flex-direction: column; }
    }
"#;
