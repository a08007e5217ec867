use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::controller::timeline::{
    era_labels, future_percent, milestone_years, snap_year, TimelineState, FIRST_YEAR, LAST_YEAR,
    YEAR_STEP,
};

#[derive(Properties, PartialEq)]
pub struct TimelineSliderProps {
    pub timeline: TimelineState,
    pub on_select: Callback<u16>,
    pub on_hover: Callback<Option<u16>>,
}

fn dot_style(year: u16, selected: u16, hovered: Option<u16>) -> String {
    let is_selected = year == selected;
    let scale = if hovered == Some(year) {
        1.5
    } else if is_selected {
        1.2
    } else {
        1.0
    };
    format!(
        "background: {}; transform: scale({}); box-shadow: {};",
        if is_selected { "var(--fg)" } else { "var(--line)" },
        scale,
        if is_selected { "0 0 20px rgba(255,255,255,0.8)" } else { "none" },
    )
}

#[function_component]
pub fn TimelineSlider(props: &TimelineSliderProps) -> Html {
    let timeline = &props.timeline;
    let year = timeline.selected_year();
    let hovered = timeline.hovered_year();
    let content = timeline.content();
    let progress = timeline.progress_percent();

    let oninput = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(raw) = input.value().parse::<i32>() {
                on_select.emit(snap_year(raw));
            }
        })
    };

    html! {
        <section class="interactive-timeline container">
            <h3 class="section-title">{"Interactive AI Timeline"}</h3>
            <p class="typewriter">{"Slide through time to explore AI's evolution from today to 2100"}</p>
            <div class="timeline-panel-wrap">
                <div class="timeline-panel">
                    // keyed by burst so a new burst restarts the CSS animation
                    { for timeline.burst().into_iter().flat_map(|burst| {
                        burst.particles.iter().map(move |particle| (burst.generation, particle))
                    }).map(|(generation, particle)| html! {
                        <div
                            key={format!("{}-{}", generation, particle.id)}
                            class="timeline-particle"
                            style={format!(
                                "left: {}%; top: {}%; opacity: {}; --particle-x: {}px; --particle-y: {}px;",
                                particle.x, particle.y, particle.life, particle.vx * 25.0, particle.vy * 25.0
                            )}
                        />
                    })}

                    <div class={classes!("timeline-year", hovered.is_some().then_some("hovering"))}>
                        {year.to_string()}
                    </div>
                    <div class="timeline-title">{content.title}</div>
                    <div class="timeline-desc">{content.description}</div>

                    <div class="timeline-progress">
                        <div class="timeline-progress-fill" style={format!("width: {}%;", progress)}></div>
                    </div>

                    <div class="timeline-milestones">
                        { for milestone_years().map(|milestone| {
                            let on_select = props.on_select.clone();
                            let on_enter = props.on_hover.clone();
                            let on_leave = props.on_hover.clone();
                            html! {
                                <div
                                    key={milestone.to_string()}
                                    class="milestone-dot"
                                    style={dot_style(milestone, year, hovered)}
                                    onclick={Callback::from(move |_| on_select.emit(milestone))}
                                    onmouseenter={Callback::from(move |_| on_enter.emit(Some(milestone)))}
                                    onmouseleave={Callback::from(move |_| on_leave.emit(None))}
                                >
                                    <div class={classes!("milestone-label", (hovered == Some(milestone)).then_some("visible"))}>
                                        {milestone.to_string()}
                                    </div>
                                </div>
                            }
                        })}
                    </div>

                    <div class="timeline-range">
                        <input
                            type="range"
                            min={FIRST_YEAR.to_string()}
                            max={LAST_YEAR.to_string()}
                            step={YEAR_STEP.to_string()}
                            value={year.to_string()}
                            {oninput}
                            style={format!(
                                "background: linear-gradient(to right, var(--fg) 0%, var(--fg) {p}%, var(--line) {p}%, var(--line) 100%);",
                                p = progress
                            )}
                        />
                        <div class="timeline-eras">
                            { for era_labels(year).into_iter().map(|(label, active)| html! {
                                <span class={classes!("era-label", active.then_some("active"))}>{label.to_string()}</span>
                            })}
                        </div>
                    </div>

                    <div class="timeline-fact">
                        {"💡 "}<strong>{"Did you know?"}</strong>
                        {format!(
                            " You're exploring {}% into the future timeline. Keep sliding to discover what awaits humanity!",
                            future_percent(year)
                        )}
                    </div>
                </div>
            </div>
        </section>
    }
}
