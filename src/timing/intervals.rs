use log::debug;
use serde::Serialize;

use super::bezier::EasingCurve;

/// Window during which one object is visible, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }
}

/// Largest object count a form submission may ask for.
pub const MAX_OBJECTS: usize = 1_000_000;

/// Number of objects shown over the animation.
///
/// The product is floored, so a trailing partial frame is dropped.
/// Non-positive and non-finite products yield no objects.
pub fn object_count(frame_rate: f64, animation_length: f64) -> usize {
    let frames = frame_rate * animation_length;
    if !frames.is_finite() || frames <= 0.0 {
        return 0;
    }
    let count = frames.floor();
    if count < frames {
        debug!("dropping partial frame: {} frames floored to {}", frames, count);
    }
    count as usize
}

/// Raw visibility windows: one object per frame tick, each visible for
/// `frame_duration` or until the animation ends.
pub fn generate(frame_rate: f64, animation_length: f64, frame_duration: f64) -> Vec<Interval> {
    (0..object_count(frame_rate, animation_length))
        .map(|i| {
            let start = i as f64 / frame_rate;
            let end = (start + frame_duration).min(animation_length);
            Interval::new(start, end)
        })
        .collect()
}

/// Warps every interval through the easing curve. Output order and length
/// match the input; `animation_length` must be non-zero.
pub fn adjust(intervals: &[Interval], p1: f64, p2: f64, animation_length: f64) -> Vec<Interval> {
    let curve = EasingCurve::new(p1, p2);
    let ease = |time: f64| curve.evaluate(time / animation_length) * animation_length;
    intervals
        .iter()
        .map(|interval| Interval::new(ease(interval.start), ease(interval.end)))
        .collect()
}

/// Validated inputs for one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationRequest {
    pub frame_rate: f64,
    pub animation_length: f64,
    pub frame_duration: f64,
    pub curve: EasingCurve,
}

impl CalculationRequest {
    pub fn run(&self) -> Vec<Interval> {
        let raw = generate(self.frame_rate, self.animation_length, self.frame_duration);
        debug!(
            "generated {} intervals, easing with p1={} p2={}",
            raw.len(),
            self.curve.p1,
            self.curve.p2
        );
        adjust(&raw, self.curve.p1, self.curve.p2, self.animation_length)
    }
}
