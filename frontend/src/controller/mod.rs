//! View state for the landing page.
//!
//! Every sub-controller owns one field of [`ViewState`] and nothing else. The
//! page never mutates these fields directly: browser events and timers are
//! turned into [`ViewAction`]s and applied one at a time, producing a new
//! snapshot each time. Clock reads and randomness happen at the call site and
//! travel inside the action, which keeps [`ViewState::apply`] deterministic.

pub mod countdown;
pub mod news;
pub mod pointer;
pub mod scroll;
pub mod stats;
pub mod timeline;

use std::rc::Rc;

use yew::functional::Reducible;

use countdown::Countdown;
use news::{NewsItem, NewsState};
use pointer::PointerTrail;
use scroll::{ScrollSample, ScrollState, Section};
use stats::StatsRamp;
use timeline::{ParticleBurst, TimelineState};

#[derive(Clone, Debug, PartialEq)]
pub enum ViewAction {
    CountdownTick { now_ms: i64 },
    StatsTick,
    PointerMoved { x: i32, y: i32 },
    Scrolled(ScrollSample),
    SectionSelected(Section),
    YearSelected { year: u16, burst: ParticleBurst },
    YearHovered(Option<u16>),
    BurstExpired { generation: u64 },
    NewsLoaded(Vec<NewsItem>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub countdown: Countdown,
    pub stats: StatsRamp,
    pub pointer: PointerTrail,
    pub scroll: ScrollState,
    pub timeline: TimelineState,
    pub news: NewsState,
}

impl ViewState {
    pub fn new(countdown_target_ms: i64, now_ms: i64) -> Self {
        Self {
            countdown: Countdown::new(countdown_target_ms, now_ms),
            stats: StatsRamp::default(),
            pointer: PointerTrail::default(),
            scroll: ScrollState::default(),
            timeline: TimelineState::default(),
            news: NewsState::Loading,
        }
    }

    pub fn apply(&self, action: ViewAction) -> Self {
        let mut next = self.clone();
        match action {
            ViewAction::CountdownTick { now_ms } => next.countdown.tick(now_ms),
            ViewAction::StatsTick => next.stats.tick(),
            ViewAction::PointerMoved { x, y } => next.pointer.record(x, y),
            ViewAction::Scrolled(sample) => next.scroll.observe(&sample),
            ViewAction::SectionSelected(section) => next.scroll.select(section),
            ViewAction::YearSelected { year, burst } => next.timeline.select(year, burst),
            ViewAction::YearHovered(year) => next.timeline.hover(year),
            ViewAction::BurstExpired { generation } => next.timeline.expire(generation),
            ViewAction::NewsLoaded(items) => next.news = NewsState::Loaded(items),
        }
        next
    }
}

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const TARGET: i64 = 2_524_608_000_000;

    fn state() -> ViewState {
        ViewState::new(TARGET, TARGET - 90_061_000)
    }

    #[test]
    fn starts_with_defaults() {
        let state = state();
        let left = state.countdown.remaining().unwrap();
        assert_eq!((left.days, left.hours, left.minutes, left.seconds), (1, 1, 1, 1));
        assert_eq!(state.stats.step(), 0);
        assert!(state.pointer.is_empty());
        assert_eq!(state.scroll.active_section, Section::Home);
        assert_eq!(state.timeline.selected_year(), 2025);
        assert_eq!(state.news, NewsState::Loading);
    }

    #[test]
    fn actions_only_touch_their_own_slice() {
        let before = state();
        let after = before.apply(ViewAction::PointerMoved { x: 10, y: 20 });
        assert_eq!(after.pointer.len(), 1);
        assert_eq!(after.countdown, before.countdown);
        assert_eq!(after.stats, before.stats);
        assert_eq!(after.scroll, before.scroll);
        assert_eq!(after.timeline, before.timeline);
        assert_eq!(after.news, before.news);
        // the original snapshot is untouched
        assert!(before.pointer.is_empty());
    }

    #[test]
    fn burst_lives_until_its_own_expiry() {
        let mut rng = StdRng::seed_from_u64(3);
        let burst = ParticleBurst::spawn(&mut rng, 1);
        let state = state().apply(ViewAction::YearSelected { year: 2045, burst });
        assert_eq!(state.timeline.particles().len(), 20);
        assert_eq!(state.timeline.content().title, "AGI Achieved");

        let state = state.apply(ViewAction::BurstExpired { generation: 1 });
        assert_eq!(state.timeline.particles().len(), 0);
        assert_eq!(state.timeline.selected_year(), 2045);
    }

    #[test]
    fn countdown_reaches_arrival_through_ticks() {
        let state = state()
            .apply(ViewAction::CountdownTick { now_ms: TARGET - 1_000 })
            .apply(ViewAction::CountdownTick { now_ms: TARGET });
        assert!(state.countdown.has_arrived());
        let state = state.apply(ViewAction::CountdownTick { now_ms: 0 });
        assert!(state.countdown.has_arrived());
    }

    #[test]
    fn navigation_and_scroll_share_the_active_section() {
        let state = state().apply(ViewAction::SectionSelected(Section::Contact));
        assert_eq!(state.scroll.active_section, Section::Contact);

        let sample = ScrollSample {
            scroll_y: 0.0,
            scrollable_height: 2_000.0,
            sections: vec![(Section::Home, scroll::SectionBounds { top: 0.0, height: 800.0 })],
        };
        let state = state.apply(ViewAction::Scrolled(sample));
        assert_eq!(state.scroll.active_section, Section::Home);
        assert_eq!(state.scroll.progress_percent, 0.0);
    }

    #[test]
    fn news_replaces_loading_placeholder() {
        let items = news::fallback_news(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        let state = state().apply(ViewAction::NewsLoaded(items.clone()));
        assert_eq!(state.news, NewsState::Loaded(items));
    }

    #[test]
    fn reducer_wraps_apply() {
        let state = Rc::new(state());
        let next = state.clone().reduce(ViewAction::StatsTick);
        assert_eq!(next.stats.step(), 1);
        assert_eq!(state.stats.step(), 0);
    }
}
