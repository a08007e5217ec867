const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = MS_PER_SECOND * 60;
const MS_PER_HOUR: i64 = MS_PER_MINUTE * 60;
const MS_PER_DAY: i64 = MS_PER_HOUR * 24;

/// Cadence of the countdown refresh.
pub const TICK_MS: u32 = 1_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    pub fn total_seconds(&self) -> i64 {
        self.days * 86_400 + self.hours * 3_600 + self.minutes * 60 + self.seconds
    }
}

/// Splits `target_ms - now_ms` into days/hours/minutes/seconds with truncating
/// division. Returns `None` once the target has been reached.
pub fn time_left(target_ms: i64, now_ms: i64) -> Option<TimeLeft> {
    let diff = target_ms - now_ms;
    if diff <= 0 {
        return None;
    }
    Some(TimeLeft {
        days: diff / MS_PER_DAY,
        hours: (diff / MS_PER_HOUR) % 24,
        minutes: (diff / MS_PER_MINUTE) % 60,
        seconds: (diff / MS_PER_SECOND) % 60,
    })
}

/// Countdown to a fixed instant. Once the instant has passed it latches and
/// later ticks never bring a positive value back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    target_ms: i64,
    remaining: Option<TimeLeft>,
}

impl Countdown {
    pub fn new(target_ms: i64, now_ms: i64) -> Self {
        Self {
            target_ms,
            remaining: time_left(target_ms, now_ms),
        }
    }

    pub fn tick(&mut self, now_ms: i64) {
        if self.has_arrived() {
            return;
        }
        self.remaining = time_left(self.target_ms, now_ms);
    }

    pub fn remaining(&self) -> Option<TimeLeft> {
        self.remaining
    }

    pub fn has_arrived(&self) -> bool {
        self.remaining.is_none()
    }
}

pub fn pad2(value: i64) -> String {
    format!("{:02}", value)
}
