use yew::prelude::*;

use crate::controller::news::{format_published, NewsState};

#[derive(Properties, PartialEq)]
pub struct NewsFeedProps {
    pub news: NewsState,
}

#[function_component]
pub fn NewsFeed(props: &NewsFeedProps) -> Html {
    html! {
        <section class="ai-news container">
            <h3 class="section-title">{"Latest AI News"}</h3>
            <p class="typewriter">{"Stay updated with the latest developments in artificial intelligence"}</p>
            {
                match &props.news {
                    NewsState::Loading => html! {
                        <div class="news-loading">{"Loading latest AI news..."}</div>
                    },
                    NewsState::Loaded(items) => html! {
                        <div class="news-grid">
                            { for items.iter().map(|item| html! {
                                <article class="news-card interactive-card">
                                    <h4>
                                        <a href={item.url.clone()} target="_blank" rel="noopener noreferrer">
                                            {&item.title}
                                        </a>
                                    </h4>
                                    <p>{&item.description}</p>
                                    <div class="news-meta">
                                        <span>{&item.source_name}</span>
                                        <span>{format_published(&item.published_at)}</span>
                                    </div>
                                </article>
                            })}
                        </div>
                    },
                }
            }
        </section>
    }
}
