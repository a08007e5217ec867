pub const RAMP_DURATION_MS: u32 = 2_500;
pub const RAMP_STEPS: u32 = 60;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub ai_parameters: u32,
    pub adoption: u32,
    pub countries: u32,
    pub jobs: u32,
}

pub const STAT_TARGETS: Stats = Stats {
    ai_parameters: 1750,
    adoption: 340,
    countries: 195,
    jobs: 97,
};

/// Milliseconds between ramp ticks. Timers take whole milliseconds, so the
/// fractional part of `duration / steps` is dropped.
pub fn tick_interval_ms() -> u32 {
    RAMP_DURATION_MS / RAMP_STEPS
}

/// Counter values after `step` of `RAMP_STEPS` ticks. The final step returns the
/// exact targets so float truncation can't leave a counter one short.
pub fn sample(step: u32) -> Stats {
    if step >= RAMP_STEPS {
        return STAT_TARGETS;
    }
    let progress = step as f64 / RAMP_STEPS as f64;
    let scale = |target: u32| (target as f64 * progress).floor() as u32;
    Stats {
        ai_parameters: scale(STAT_TARGETS.ai_parameters),
        adoption: scale(STAT_TARGETS.adoption),
        countries: scale(STAT_TARGETS.countries),
        jobs: scale(STAT_TARGETS.jobs),
    }
}

/// Number of ticks that have fired `elapsed_ms` after the ramp started.
pub fn step_for_elapsed(elapsed_ms: f64) -> u32 {
    if elapsed_ms <= 0.0 {
        return 0;
    }
    let steps = (elapsed_ms * RAMP_STEPS as f64 / RAMP_DURATION_MS as f64).floor();
    (steps as u32).min(RAMP_STEPS)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatsRamp {
    step: u32,
    values: Stats,
}

impl StatsRamp {
    pub fn at_elapsed(elapsed_ms: f64) -> Self {
        let step = step_for_elapsed(elapsed_ms);
        Self {
            step,
            values: sample(step),
        }
    }

    pub fn tick(&mut self) {
        if self.is_complete() {
            return;
        }
        self.step += 1;
        self.values = sample(self.step);
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn values(&self) -> Stats {
        self.values
    }

    pub fn is_complete(&self) -> bool {
        self.step >= RAMP_STEPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_array(stats: Stats) -> [u32; 4] {
        [stats.ai_parameters, stats.adoption, stats.countries, stats.jobs]
    }

    #[test]
    fn counters_never_decrease_and_land_on_targets() {
        let mut ramp = StatsRamp::default();
        assert_eq!(ramp.values(), Stats::default());

        let mut previous = as_array(ramp.values());
        for _ in 0..RAMP_STEPS {
            ramp.tick();
            let current = as_array(ramp.values());
            for (before, after) in previous.iter().zip(current.iter()) {
                assert!(after >= before);
            }
            previous = current;
        }

        assert!(ramp.is_complete());
        assert_eq!(ramp.values(), STAT_TARGETS);
        assert_eq!(as_array(ramp.values()), [1750, 340, 195, 97]);
    }

    #[test]
    fn extra_ticks_are_ignored() {
        let mut ramp = StatsRamp::default();
        for _ in 0..RAMP_STEPS + 10 {
            ramp.tick();
        }
        assert_eq!(ramp.step(), RAMP_STEPS);
        assert_eq!(ramp.values(), STAT_TARGETS);
    }

    #[test]
    fn intermediate_values_use_floor() {
        // 97 * 1/60 = 1.616..
        assert_eq!(sample(1).jobs, 1);
        // 195 * 30/60 = 97.5
        assert_eq!(sample(30).countries, 97);
        assert_eq!(sample(59).ai_parameters, 1720);
    }

    #[test]
    fn elapsed_sampling_matches_ticks() {
        assert_eq!(tick_interval_ms(), 41);
        assert_eq!(step_for_elapsed(-5.0), 0);
        assert_eq!(step_for_elapsed(0.0), 0);
        assert_eq!(step_for_elapsed(1_250.0), 30);
        assert_eq!(step_for_elapsed(10_000.0), RAMP_STEPS);

        let mut ticked = StatsRamp::default();
        for _ in 0..30 {
            ticked.tick();
        }
        assert_eq!(StatsRamp::at_elapsed(1_250.0), ticked);
        assert_eq!(StatsRamp::at_elapsed(2_500.0).values(), STAT_TARGETS);
    }
}
