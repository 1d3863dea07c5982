//! Animation timing: easing, tweens over elapsed time, and looping waves

use std::f32::consts::TAU;

/// Easing applied to normalized tween progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Cubic ease-out, the default for entry animations
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Map linear progress onto the eased curve, clamped to 0..=1
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// A one-shot animation segment positioned on a timeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub delay: f32,
    pub duration: f32,
    pub easing: Easing,
}

impl Tween {
    pub const fn new(delay: f32, duration: f32) -> Self {
        Self { delay, duration, easing: Easing::EaseOut }
    }

    pub const fn linear(delay: f32, duration: f32) -> Self {
        Self { delay, duration, easing: Easing::Linear }
    }

    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Shift the start later by an index-based stagger step
    pub fn staggered(self, index: usize, step: f32) -> Self {
        Self { delay: self.delay + index as f32 * step, ..self }
    }

    /// Eased progress in 0..=1 for a timeline position in seconds
    pub fn progress(&self, elapsed: f32) -> f32 {
        if self.duration <= 0.0 {
            return if elapsed >= self.delay { 1.0 } else { 0.0 };
        }
        self.easing.apply((elapsed - self.delay) / self.duration)
    }

    /// Interpolate from `from` to `to` over the tween
    pub fn sample(&self, elapsed: f32, from: f32, to: f32) -> f32 {
        from + (to - from) * self.progress(elapsed)
    }

    pub fn finished(&self, elapsed: f32) -> bool {
        elapsed >= self.delay + self.duration.max(0.0)
    }
}

/// A repeating wave for idle decorations (bobbing, pulsing, spinning).
/// A negative period runs the wave in reverse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopWave {
    pub period: f32,
    pub phase: f32,
}

impl LoopWave {
    pub const fn new(period: f32) -> Self {
        Self { period, phase: 0.0 }
    }

    pub const fn with_phase(period: f32, phase: f32) -> Self {
        Self { period, phase }
    }

    fn period_or_default(&self) -> f32 {
        if self.period.abs() < f32::EPSILON {
            1.0
        } else {
            self.period
        }
    }

    /// Sine wave in -1..=1
    pub fn signed(&self, elapsed: f32) -> f32 {
        (TAU * (elapsed / self.period_or_default() + self.phase)).sin()
    }

    /// Smooth 0..1..0 wave, starting at 0
    pub fn unit(&self, elapsed: f32) -> f32 {
        0.5 - 0.5 * (TAU * (elapsed / self.period_or_default() + self.phase)).cos()
    }

    /// Unit wave mapped onto lo..=hi
    pub fn between(&self, elapsed: f32, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.unit(elapsed)
    }

    /// Unbounded rotation angle in radians, one turn per period
    pub fn angle(&self, elapsed: f32) -> f32 {
        TAU * (elapsed / self.period_or_default() + self.phase)
    }
}

/// Frame-rate independent smoothing factor, referenced to 60 fps
pub fn smooth_factor(smoothing: f32, dt: f32) -> f32 {
    1.0 - (-smoothing * 60.0 * dt).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_clamps_and_hits_endpoints() {
        for easing in [Easing::Linear, Easing::EaseOut, Easing::EaseInOut] {
            assert_eq!(easing.apply(-1.0), 0.0);
            assert_eq!(easing.apply(0.0), 0.0);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6);
            assert!((easing.apply(2.0) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_ease_out_leads_linear() {
        assert!(Easing::EaseOut.apply(0.5) > Easing::Linear.apply(0.5));
    }

    #[test]
    fn test_tween_progress_window() {
        let tween = Tween::linear(0.4, 0.8);
        assert_eq!(tween.progress(0.0), 0.0);
        assert_eq!(tween.progress(0.4), 0.0);
        assert!((tween.progress(0.8) - 0.5).abs() < 1e-6);
        assert_eq!(tween.progress(1.2), 1.0);
        assert_eq!(tween.progress(10.0), 1.0);
        assert!(!tween.finished(1.1));
        assert!(tween.finished(1.2));
    }

    #[test]
    fn test_zero_duration_steps() {
        let tween = Tween::new(0.5, 0.0);
        assert_eq!(tween.progress(0.49), 0.0);
        assert_eq!(tween.progress(0.5), 1.0);
    }

    #[test]
    fn test_sample_interpolates() {
        let tween = Tween::linear(0.0, 1.0);
        assert_eq!(tween.sample(0.0, 30.0, 0.0), 30.0);
        assert_eq!(tween.sample(1.0, 30.0, 0.0), 0.0);
    }

    #[test]
    fn test_stagger_shifts_delay() {
        let base = Tween::new(0.3, 1.0);
        let third = base.staggered(2, 0.1);
        assert!((third.delay - 0.5).abs() < 1e-6);
        assert_eq!(third.duration, base.duration);
    }

    #[test]
    fn test_wave_ranges() {
        let wave = LoopWave::new(2.0);
        for step in 0..40 {
            let t = step as f32 * 0.1;
            assert!((-1.0..=1.0).contains(&wave.signed(t)));
            assert!((0.0..=1.0).contains(&wave.unit(t)));
        }
        assert!(wave.unit(0.0).abs() < 1e-6);
        assert!((wave.unit(1.0) - 1.0).abs() < 1e-6);
        assert!((wave.between(1.0, 1.0, 1.5) - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_negative_period_reverses() {
        let forward = LoopWave::new(2.0);
        let reverse = LoopWave::new(-2.0);
        assert!((forward.angle(0.5) + reverse.angle(0.5)).abs() < 1e-6);
    }

    #[test]
    fn test_smooth_factor_behaves() {
        let slow = smooth_factor(0.1, 1.0 / 60.0);
        let fast = smooth_factor(0.1, 1.0 / 15.0);
        assert!(slow > 0.0 && slow < 1.0);
        assert!(fast > slow);
    }
}
