use yew::prelude::*;

use crate::controller::stats::Stats;

#[derive(Properties, PartialEq)]
pub struct StatsGridProps {
    pub stats: Stats,
}

#[function_component]
pub fn StatsGrid(props: &StatsGridProps) -> Html {
    let stats = props.stats;
    let cards = [
        (format!("{}B+", stats.ai_parameters), "AI Parameters Trained", "Leading models worldwide"),
        (format!("{}%", stats.adoption), "Increase in AI Adoption", "Enterprise sector growth"),
        (stats.countries.to_string(), "Countries Leading AI", "Global AI research hubs"),
        (format!("{}M+", stats.jobs), "Jobs Created by AI", "New opportunities emerging"),
    ];

    html! {
        <section class="ai-stats container">
            <h3 class="section-title">{"AI in Numbers"}</h3>
            <p class="typewriter">
                {"The exponential growth of artificial intelligence is reshaping our world at an unprecedented pace"}
            </p>
            <div class="stats-grid">
                { for cards.into_iter().map(|(value, label, caption)| html! {
                    <div class="stat-card interactive-card">
                        <div class="stat-value">{value}</div>
                        <div class="stat-label">{label}</div>
                        <div class="stat-caption">{caption}</div>
                    </div>
                })}
            </div>
        </section>
    }
}
