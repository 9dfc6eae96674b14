//! Piecewise-linear easing curves
//!
//! A curve is a table of (progress, value) control points sorted by
//! strictly increasing progress, starting at progress 0 and ending at 1.
//! Values may exceed 1.0 to overshoot.

/// A control point on an easing curve
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CurvePoint {
    /// Normalized time in [0, 1]
    pub progress: f32,
    /// Output at that time
    pub value: f32,
}

const fn p(progress: f32, value: f32) -> CurvePoint {
    CurvePoint { progress, value }
}

/// Spring response with overshoot, peaking at about 1.109 around a third
/// of the way through before settling back to 1.0
pub const SPRING_POINTS: [CurvePoint; 26] = [
    p(0.000, 0.000),
    p(0.025, 0.221),
    p(0.052, 0.421),
    p(0.080, 0.592),
    p(0.109, 0.733),
    p(0.140, 0.852),
    p(0.156, 0.901),
    p(0.173, 0.946),
    p(0.190, 0.984),
    p(0.208, 1.017),
    p(0.227, 1.045),
    p(0.247, 1.068),
    p(0.272, 1.089),
    p(0.299, 1.102),
    p(0.328, 1.109),
    p(0.361, 1.109),
    p(0.391, 1.105),
    p(0.425, 1.096),
    p(0.547, 1.052),
    p(0.598, 1.035),
    p(0.642, 1.024),
    p(0.686, 1.015),
    p(0.743, 1.007),
    p(0.807, 1.002),
    p(0.879, 1.000),
    p(1.000, 1.000),
];

const LINEAR_POINTS: [CurvePoint; 2] = [p(0.0, 0.0), p(1.0, 1.0)];

/// Stateless easing curve over a static control-point table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EasingCurve {
    points: &'static [CurvePoint],
}

impl Default for EasingCurve {
    fn default() -> Self {
        Self::SPRING
    }
}

impl EasingCurve {
    /// The spring curve used by every built-in animation
    pub const SPRING: EasingCurve = EasingCurve::new(&SPRING_POINTS);

    /// Identity mapping
    pub const LINEAR: EasingCurve = EasingCurve::new(&LINEAR_POINTS);

    /// Create a curve from a control-point table
    ///
    /// The table must be sorted by strictly increasing progress, start at
    /// progress 0 and end at progress 1.
    pub const fn new(points: &'static [CurvePoint]) -> Self {
        Self { points }
    }

    /// Control points of this curve
    pub fn points(&self) -> &'static [CurvePoint] {
        self.points
    }

    /// Map normalized progress `t` to the eased output
    ///
    /// Clamps to 0 at or below t = 0 and to 1 at or above t = 1. Inside the
    /// range, interpolates linearly between the bracketing control points.
    pub fn ease(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        for pair in self.points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t >= a.progress && t <= b.progress {
                let local_t = (t - a.progress) / (b.progress - a.progress);
                return a.value + (b.value - a.value) * local_t;
            }
        }

        // No bracket (NaN input or a malformed table): saturate
        1.0
    }
}

/// Ease `t` along the spring curve
pub fn ease(t: f32) -> f32 {
    EasingCurve::SPRING.ease(t)
}
