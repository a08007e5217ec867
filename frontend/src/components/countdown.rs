use yew::prelude::*;

use crate::controller::countdown::{pad2, TimeLeft};

#[derive(Properties, PartialEq)]
pub struct CountdownProps {
    pub remaining: Option<TimeLeft>,
}

#[function_component(CountdownDisplay)]
pub fn countdown_display(props: &CountdownProps) -> Html {
    html! {
        <section class="countdown container">
            <h3 class="count-title">{"Countdown to the AI Singularity Era"}</h3>
            <div class="count-holder">
                if let Some(left) = props.remaining {
                    { for [
                        (left.days, "Days"),
                        (left.hours, "Hours"),
                        (left.minutes, "Minutes"),
                        (left.seconds, "Seconds"),
                    ].into_iter().map(|(value, label)| html! {
                        <div class="count-circle interactive-card">
                            <div class="count-inner">
                                <div class="num">{pad2(value)}</div>
                                <div class="label">{label}</div>
                            </div>
                        </div>
                    })}
                } else {
                    <div class="arrival">{"Welcome to the Singularity"}</div>
                }
            </div>
        </section>
    }
}
