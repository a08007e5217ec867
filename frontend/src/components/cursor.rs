use yew::prelude::*;

use crate::controller::pointer::{trail_fade, PointerTrail};

#[derive(Properties, PartialEq)]
pub struct CursorTrailProps {
    pub trail: PointerTrail,
}

#[function_component]
pub fn CursorTrail(props: &CursorTrailProps) -> Html {
    let (x, y) = props.trail.position();
    let len = props.trail.len();

    html! {
        <>
            <div class="cursor-trail">
                { for props.trail.dots().enumerate().map(|(index, dot)| {
                    // dots come oldest first
                    let fade = trail_fade(len - 1 - index, len);
                    html! {
                        <div
                            key={dot.id.to_string()}
                            class="cursor-trail-dot"
                            style={format!(
                                "left: {}px; top: {}px; opacity: {}; transform: translate(-50%, -50%) scale({});",
                                dot.x, dot.y, fade, fade
                            )}
                        ></div>
                    }
                })}
            </div>
            <div class="cursor-dot" style={format!("left: {}px; top: {}px;", x, y)}></div>
            <div class="cursor-outline" style={format!("left: {}px; top: {}px;", x, y)}></div>
        </>
    }
}
