use yew::prelude::*;

use crate::controller::scroll::Section;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub active: Section,
    pub on_select: Callback<Section>,
}

#[function_component]
pub fn NavBar(props: &NavBarProps) -> Html {
    html! {
        <header class="nav-wrap">
            <nav class="nav container">
                <div class="brand">{"AI FUTURE"}</div>
                <ul class="nav-links">
                    { for Section::ALL.iter().map(|section| {
                        let section = *section;
                        let on_select = props.on_select.clone();
                        html! {
                            <li
                                class={classes!((props.active == section).then_some("active"))}
                                onclick={Callback::from(move |_| on_select.emit(section))}
                            >
                                {section.nav_label()}
                            </li>
                        }
                    })}
                </ul>
            </nav>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_select: Callback<Section>,
    pub year: i32,
}

const RESOURCES: [&str; 5] = [
    "AI Research Papers",
    "Ethics Guidelines",
    "Developer APIs",
    "Learning Center",
    "Community Forum",
];

const FOLLOW: [&str; 5] = ["GitHub", "Research Blog", "LinkedIn", "Twitter/X", "YouTube"];

#[function_component]
pub fn Footer(props: &FooterProps) -> Html {
    html! {
        <footer class="footer">
            <div class="container footer-inner">
                <div class="footer-brand">
                    <div class="brand">{"AI FUTURE"}</div>
                    <p>{"Pioneering the responsible development of artificial intelligence for humanity's benefit."}</p>
                </div>
                <div class="footer-links">
                    <div class="footer-column">
                        <h5>{"Navigate"}</h5>
                        <ul>
                            { for Section::ALL.iter().map(|section| {
                                let section = *section;
                                let on_select = props.on_select.clone();
                                html! {
                                    <li onclick={Callback::from(move |_| on_select.emit(section))}>
                                        {section.footer_label()}
                                    </li>
                                }
                            })}
                        </ul>
                    </div>
                    <div class="footer-column">
                        <h5>{"Resources"}</h5>
                        <ul>{ for RESOURCES.iter().map(|item| html! { <li>{*item}</li> }) }</ul>
                    </div>
                    <div class="footer-column">
                        <h5>{"Follow"}</h5>
                        <ul>{ for FOLLOW.iter().map(|item| html! { <li>{*item}</li> }) }</ul>
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                <div class="container">
                    <p>{format!("© {} AI FUTURE — Building tomorrow's intelligence, responsibly. All rights reserved.", props.year)}</p>
                </div>
            </div>
        </footer>
    }
}
