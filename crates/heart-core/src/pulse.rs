//! Heartbeat displacement curve and the frame clock that drives it.
//!
//! One cycle is a fast rise, a short hold, a second rise and a slow linear
//! return to zero. A speed multiplier `m` compresses the cycle to `1 / m`.

use crate::constants::{PULSE_DT, PULSE_T1, PULSE_T2, PULSE_T3, PULSE_V1};

/// Authored piecewise-linear pulse shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseCurve {
    pub t1: f32,
    pub t2: f32,
    pub t3: f32,
    pub v1: f32,
}

impl Default for PulseCurve {
    fn default() -> Self {
        Self {
            t1: PULSE_T1,
            t2: PULSE_T2,
            t3: PULSE_T3,
            v1: PULSE_V1,
        }
    }
}

impl PulseCurve {
    /// Height of the hold plateau.
    #[inline]
    pub fn d1(&self) -> f32 {
        self.v1 * self.t1
    }

    /// Peak displacement, reached at the end of the second rise.
    #[inline]
    pub fn d2(&self) -> f32 {
        self.d1() + self.v1 * (self.t3 - self.t2)
    }

    /// Slope of the return phase; brings the curve to zero at the cycle end.
    #[inline]
    pub fn v2(&self) -> f32 {
        -self.d2() / (1.0 - self.t3)
    }

    /// Displacement at time `t` for speed multiplier `m`, or `None` once
    /// `t` has reached the end of the cycle (`1 / m`).
    pub fn displacement(&self, t: f32, m: f32) -> Option<f32> {
        let s = t * m;
        if t < self.t1 / m {
            Some(s * self.v1)
        } else if t < self.t2 / m {
            Some(self.d1())
        } else if t < self.t3 / m {
            Some(self.d1() + (s - self.t2) * self.v1)
        } else if t < 1.0 / m {
            Some(self.d2() + (s - self.t3) * self.v2())
        } else {
            None
        }
    }
}

/// Frame-stepped animation clock.
///
/// `t` accumulates in `f64`; after `n` ticks it rounds to `n * dt` in `f32`,
/// so a cycle at speed `m` lasts exactly `1 / (m * dt)` ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseClock {
    pub t: f64,
    pub d: f32,
    pub dt: f64,
}

impl Default for PulseClock {
    fn default() -> Self {
        Self {
            t: 0.0,
            d: 0.0,
            dt: PULSE_DT,
        }
    }
}

impl PulseClock {
    /// Advance one frame and return the current displacement.
    ///
    /// On the frame the cycle completes, `t` wraps to zero and `d` keeps its
    /// previous value; the next tick starts the rise again.
    pub fn tick(&mut self, curve: &PulseCurve, m: f32) -> f32 {
        self.t += self.dt;
        match curve.displacement(self.t as f32, m) {
            Some(d) => self.d = d,
            None => self.t = 0.0,
        }
        self.d
    }
}
