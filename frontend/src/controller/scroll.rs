/// Distance below the viewport top used as the anchor for section tracking.
pub const SECTION_LOOKAHEAD_PX: f64 = 100.0;
pub const DEFAULT_PARALLAX_SPEED: f64 = 0.4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Technologies,
    Services,
    Predictions,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Technologies,
        Section::Services,
        Section::Predictions,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Technologies => "technologies",
            Section::Services => "services",
            Section::Predictions => "predictions",
            Section::Contact => "contact",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "Vision",
            Section::Technologies => "Tech",
            Section::Services => "Timeline",
            Section::Predictions => "Insights",
            Section::Contact => "Connect",
        }
    }

    pub fn footer_label(self) -> &'static str {
        match self {
            Section::Technologies => "Technologies",
            other => other.nav_label(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, y: f64) -> bool {
        self.top <= y && y < self.top + self.height
    }
}

/// Geometry read from the document during one scroll event.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollSample {
    pub scroll_y: f64,
    pub scrollable_height: f64,
    pub sections: Vec<(Section, SectionBounds)>,
}

pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    scroll_y * speed
}

/// Reads a `data-speed` attribute value. Missing, unparseable and zero values
/// fall back to the default speed.
pub fn parse_speed(raw: Option<&str>) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|speed| speed.is_finite() && *speed != 0.0)
        .unwrap_or(DEFAULT_PARALLAX_SPEED)
}

/// First section, in `Section::ALL` order, whose bounds contain the anchor
/// point `scroll_y + SECTION_LOOKAHEAD_PX`.
pub fn active_section(scroll_y: f64, sections: &[(Section, SectionBounds)]) -> Option<Section> {
    let anchor = scroll_y + SECTION_LOOKAHEAD_PX;
    Section::ALL.iter().copied().find(|section| {
        sections
            .iter()
            .any(|(candidate, bounds)| candidate == section && bounds.contains(anchor))
    })
}

/// Percentage of the scrollable range covered. Not clamped: a document that
/// changes height mid-scroll can push this slightly outside [0, 100].
pub fn scroll_progress(scroll_y: f64, scrollable_height: f64) -> f64 {
    if scrollable_height <= 0.0 {
        return 0.0;
    }
    scroll_y / scrollable_height * 100.0
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    pub active_section: Section,
    pub progress_percent: f64,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            active_section: Section::Home,
            progress_percent: 0.0,
        }
    }
}

impl ScrollState {
    pub fn observe(&mut self, sample: &ScrollSample) {
        // between sections the previous highlight stays
        if let Some(section) = active_section(sample.scroll_y, &sample.sections) {
            self.active_section = section;
        }
        self.progress_percent = scroll_progress(sample.scroll_y, sample.scrollable_height);
    }

    pub fn select(&mut self, section: Section) {
        self.active_section = section;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<(Section, SectionBounds)> {
        let heights = [900.0, 600.0, 800.0, 700.0, 1000.0, 500.0];
        let mut top = 0.0;
        Section::ALL
            .iter()
            .zip(heights)
            .map(|(section, height)| {
                let bounds = SectionBounds { top, height };
                top += height;
                (*section, bounds)
            })
            .collect()
    }

    #[test]
    fn tracks_section_under_lookahead_anchor() {
        let sections = layout();
        assert_eq!(active_section(0.0, &sections), Some(Section::Home));
        // anchor at 900 is the first pixel of About
        assert_eq!(active_section(800.0, &sections), Some(Section::About));
        assert_eq!(active_section(799.0, &sections), Some(Section::Home));
        assert_eq!(active_section(3_000.0, &sections), Some(Section::Predictions));
        assert_eq!(active_section(10_000.0, &sections), None);
    }

    #[test]
    fn overlapping_sections_resolve_in_enumeration_order() {
        let sections = vec![
            (Section::Contact, SectionBounds { top: 0.0, height: 500.0 }),
            (Section::Services, SectionBounds { top: 0.0, height: 500.0 }),
        ];
        assert_eq!(active_section(0.0, &sections), Some(Section::Services));
    }

    #[test]
    fn keeps_previous_section_when_nothing_matches() {
        let mut state = ScrollState::default();
        state.observe(&ScrollSample {
            scroll_y: 1_000.0,
            scrollable_height: 4_000.0,
            sections: layout(),
        });
        assert_eq!(state.active_section, Section::About);

        state.observe(&ScrollSample {
            scroll_y: 1_000.0,
            scrollable_height: 4_000.0,
            sections: Vec::new(),
        });
        assert_eq!(state.active_section, Section::About);
        assert_eq!(state.progress_percent, 25.0);
    }

    #[test]
    fn progress_spans_zero_to_hundred() {
        assert_eq!(scroll_progress(0.0, 3_840.0), 0.0);
        assert!((scroll_progress(3_840.0, 3_840.0) - 100.0).abs() < 1e-9);
        assert!(scroll_progress(3_900.0, 3_840.0) > 100.0);
        assert_eq!(scroll_progress(50.0, 0.0), 0.0);
    }

    #[test]
    fn parallax_speed_parsing() {
        assert_eq!(parse_speed(Some("0.28")), 0.28);
        assert_eq!(parse_speed(Some(" 0.12 ")), 0.12);
        assert_eq!(parse_speed(Some("fast")), DEFAULT_PARALLAX_SPEED);
        assert_eq!(parse_speed(Some("0")), DEFAULT_PARALLAX_SPEED);
        assert_eq!(parse_speed(None), DEFAULT_PARALLAX_SPEED);
        assert_eq!(parallax_offset(500.0, 0.4), 200.0);
    }

    #[test]
    fn footer_uses_long_label_for_technologies() {
        assert_eq!(Section::Technologies.nav_label(), "Tech");
        assert_eq!(Section::Technologies.footer_label(), "Technologies");
        assert_eq!(Section::Contact.footer_label(), "Connect");
    }
}
