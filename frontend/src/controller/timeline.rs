use rand::Rng;

pub const FIRST_YEAR: u16 = 2025;
pub const LAST_YEAR: u16 = 2100;
pub const YEAR_STEP: u16 = 5;

pub const BURST_SIZE: usize = 20;
pub const BURST_LIFETIME_MS: u32 = 1_000;

const FALLBACK_TITLE: &str = "The Future Unfolds";
const FALLBACK_DESCRIPTION: &str = "Exploring the unknown...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Milestone {
    pub title: &'static str,
    pub description: &'static str,
}

const MILESTONES: [(u16, Milestone); 9] = [
    (2025, Milestone {
        title: "AI Integration",
        description: "AI assistants in every workplace, smart homes become standard, autonomous delivery widespread.",
    }),
    (2030, Milestone {
        title: "Smart Cities",
        description: "Urban centers fully integrated with AI systems for optimal resource management and traffic flow.",
    }),
    (2035, Milestone {
        title: "Medical AI",
        description: "AI diagnoses diseases before symptoms, personalized medicine becomes the norm.",
    }),
    (2040, Milestone {
        title: "Brain-AI Interface",
        description: "Direct neural connections allowing thought-to-machine communication become commercial.",
    }),
    (2045, Milestone {
        title: "AGI Achieved",
        description: "First true Artificial General Intelligence emerges, matching human cognition.",
    }),
    (2050, Milestone {
        title: "Human-AI Symbiosis",
        description: "Seamless integration between human and artificial intelligence, enhanced cognition.",
    }),
    (2060, Milestone {
        title: "Space AI",
        description: "AI-managed habitats on Mars and Moon, autonomous deep space exploration.",
    }),
    (2080, Milestone {
        title: "Post-Scarcity",
        description: "AI automation creates abundance, work becomes optional and creative.",
    }),
    (2100, Milestone {
        title: "Digital Consciousness",
        description: "Consciousness uploading reality, humans exist in both physical and digital realms.",
    }),
];

pub fn milestone_years() -> impl Iterator<Item = u16> {
    MILESTONES.iter().map(|(year, _)| *year)
}

pub fn year_to_content(year: u16) -> Milestone {
    MILESTONES
        .iter()
        .find(|(milestone_year, _)| *milestone_year == year)
        .map(|(_, milestone)| *milestone)
        .unwrap_or(Milestone {
            title: FALLBACK_TITLE,
            description: FALLBACK_DESCRIPTION,
        })
}

/// Clamps raw slider input into the year range and onto the 5-year grid.
pub fn snap_year(raw: i32) -> u16 {
    let clamped = raw.clamp(FIRST_YEAR as i32, LAST_YEAR as i32) as u16;
    let offset = clamped - FIRST_YEAR;
    FIRST_YEAR + offset - offset % YEAR_STEP
}

pub fn progress_percent(year: u16) -> f64 {
    year.saturating_sub(FIRST_YEAR) as f64 / (LAST_YEAR - FIRST_YEAR) as f64 * 100.0
}

/// Whole percent shown in the "into the future" fun fact.
pub fn future_percent(year: u16) -> u32 {
    progress_percent(year).floor() as u32
}

/// The three era labels under the slider, each with whether the selected year
/// falls in its highlight window.
pub fn era_labels(year: u16) -> [(u16, bool); 3] {
    [
        (2025, year <= 2030),
        (2050, (2045..=2055).contains(&year)),
        (2100, year >= 2095),
    ]
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub life: f64,
}

/// Short-lived decoration spawned on every year change. The velocity and life
/// fields only feed the CSS animation; the burst itself disappears when its
/// clear timeout fires.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleBurst {
    pub generation: u64,
    pub particles: Vec<Particle>,
}

impl ParticleBurst {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, generation: u64) -> Self {
        let particles = (0..BURST_SIZE)
            .map(|id| Particle {
                id,
                x: rng.gen_range(0.0..100.0),
                y: rng.gen_range(0.0..100.0),
                vx: rng.gen_range(-2.0..=2.0),
                vy: rng.gen_range(-2.0..=2.0),
                life: 1.0,
            })
            .collect();
        Self {
            generation,
            particles,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TimelineState {
    selected_year: u16,
    hovered_year: Option<u16>,
    burst: Option<ParticleBurst>,
}

impl Default for TimelineState {
    fn default() -> Self {
        Self {
            selected_year: FIRST_YEAR,
            hovered_year: None,
            burst: None,
        }
    }
}

impl TimelineState {
    /// Jumps straight to `year` and replaces any running burst.
    pub fn select(&mut self, year: u16, burst: ParticleBurst) {
        self.selected_year = snap_year(year as i32);
        self.burst = Some(burst);
    }

    /// Clears the burst spawned as `generation`. A newer burst is left alone so
    /// every burst stays visible for its full lifetime.
    pub fn expire(&mut self, generation: u64) {
        if self
            .burst
            .as_ref()
            .is_some_and(|burst| burst.generation == generation)
        {
            self.burst = None;
        }
    }

    pub fn hover(&mut self, year: Option<u16>) {
        self.hovered_year = year;
    }

    pub fn selected_year(&self) -> u16 {
        self.selected_year
    }

    pub fn hovered_year(&self) -> Option<u16> {
        self.hovered_year
    }

    pub fn burst(&self) -> Option<&ParticleBurst> {
        self.burst.as_ref()
    }

    pub fn particles(&self) -> &[Particle] {
        self.burst
            .as_ref()
            .map(|burst| burst.particles.as_slice())
            .unwrap_or(&[])
    }

    pub fn content(&self) -> Milestone {
        year_to_content(self.selected_year)
    }

    pub fn progress_percent(&self) -> f64 {
        progress_percent(self.selected_year)
    }
}
