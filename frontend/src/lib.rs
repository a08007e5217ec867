use yew::prelude::*;

pub mod components {
    pub mod contact;
    pub mod countdown;
    pub mod cursor;
    pub mod nav;
    pub mod news;
    pub mod stats;
    pub mod timeline;
}
pub mod config;
pub mod controller;
pub mod pages {
    pub mod content;
    pub mod landing;
}
pub mod utils {
    pub mod dom;
    pub mod listener;
    pub mod news;
}

use pages::landing::Landing;

#[function_component(App)]
pub fn app() -> Html {
    html! { <Landing /> }
}
