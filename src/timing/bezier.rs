use serde::{Deserialize, Serialize};

/// Position on a cubic Bezier with four scalar control values.
pub fn cubic_bezier(t: f64, p0: f64, p1: f64, p2: f64, p3: f64) -> f64 {
    let u = 1.0 - t;
    let tt = t * t;
    let uu = u * u;
    uu * u * p0 + 3.0 * uu * t * p1 + 3.0 * u * tt * p2 + tt * t * p3
}

/// Easing value at `t` for a curve pinned at 0 and 1.
///
/// `t` is not clamped. Callers pass normalised time, which stays in [0,1]
/// as long as timestamps never exceed the animation length.
pub fn evaluate(t: f64, p1: f64, p2: f64) -> f64 {
    cubic_bezier(t, 0.0, p1, p2, 1.0)
}

/// The two interior control ordinates of an easing curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EasingCurve {
    pub p1: f64,
    pub p2: f64,
}

impl EasingCurve {
    pub const DEFAULT_P1: f64 = 0.25;
    pub const DEFAULT_P2: f64 = 0.75;

    pub fn new(p1: f64, p2: f64) -> Self {
        Self { p1, p2 }
    }

    pub fn evaluate(&self, t: f64) -> f64 {
        evaluate(t, self.p1, self.p2)
    }
}

impl Default for EasingCurve {
    fn default() -> Self {
        Self::new(Self::DEFAULT_P1, Self::DEFAULT_P2)
    }
}
