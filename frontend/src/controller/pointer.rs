use std::collections::VecDeque;

/// How many samples the cursor trail keeps.
pub const TRAIL_LEN: usize = 11;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrailDot {
    pub x: i32,
    pub y: i32,
    pub id: u64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointerTrail {
    position: (i32, i32),
    dots: VecDeque<TrailDot>,
    next_id: u64,
}

impl PointerTrail {
    /// Records one raw move event. No debouncing: every call adds a sample and
    /// the oldest one is dropped once the trail is full.
    pub fn record(&mut self, x: i32, y: i32) {
        self.position = (x, y);
        self.dots.push_back(TrailDot {
            x,
            y,
            id: self.next_id,
        });
        self.next_id += 1;
        while self.dots.len() > TRAIL_LEN {
            self.dots.pop_front();
        }
    }

    pub fn position(&self) -> (i32, i32) {
        self.position
    }

    /// Samples oldest first.
    pub fn dots(&self) -> impl Iterator<Item = &TrailDot> {
        self.dots.iter()
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }
}

/// Opacity and scale factor for a trail dot, where `rank` counts back from the
/// newest sample (0 = newest = 1.0).
pub fn trail_fade(rank: usize, len: usize) -> f64 {
    if len == 0 || rank >= len {
        return 0.0;
    }
    (len - rank) as f64 / len as f64
}
