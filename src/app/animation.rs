//! Frame-paced float interpolation.
//!
//! Animations here are visual interpolations over committed state, never a
//! source of logical state: the boolean that drives an animation flips
//! synchronously in the event handler, and the animation only chases the new
//! target on subsequent frame ticks. An animation advances solely through
//! explicit [`Animation::advance`] calls from the tick path, so there is
//! nothing to cancel and nothing that can race input handling.

/// Cubic ease-out curve.
///
/// Maps linear progress in `0.0..=1.0` to eased progress, fast at the start
/// and settling softly into the target. Input outside the range is clamped.
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let clamped = t.clamp(0.0, 1.0);
    let inv = 1.0 - clamped;
    1.0 - inv * inv * inv
}

/// An eased interpolation from one value toward a target.
///
/// Retargeting mid-flight restarts the curve from the currently interpolated
/// value, so the output is continuous even when the driving flag flips
/// faster than the animation settles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    from: f32,
    to: f32,
    /// Linear progress in `0.0..=1.0`; eased on read.
    progress: f32,
    /// Seconds for a full sweep.
    duration: f32,
}

impl Animation {
    /// Creates an animation already settled at `value`.
    #[must_use]
    pub const fn resting(value: f32, duration: f32) -> Self {
        Self {
            from: value,
            to: value,
            progress: 1.0,
            duration,
        }
    }

    /// Creates an animation running from `from` toward `to`.
    #[must_use]
    pub const fn running(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            progress: 0.0,
            duration,
        }
    }

    /// Points the animation at a new target.
    ///
    /// Starts from the currently interpolated value. Retargeting to the
    /// value the animation is already heading for is a no-op.
    pub fn retarget(&mut self, target: f32) {
        if (self.to - target).abs() < f32::EPSILON {
            return;
        }
        *self = Self::running(self.value(), target, self.duration);
    }

    /// Advances the animation by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if self.done() {
            return;
        }
        let step = if self.duration > 0.0 {
            dt / self.duration
        } else {
            1.0
        };
        self.progress = (self.progress + step.max(0.0)).min(1.0);
    }

    /// Returns the current interpolated value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.from + (self.to - self.from) * ease_out_cubic(self.progress)
    }

    /// Returns the value the animation is heading for.
    #[must_use]
    pub const fn target(&self) -> f32 {
        self.to
    }

    /// Returns whether the animation has settled at its target.
    #[must_use]
    pub fn done(&self) -> bool {
        self.progress >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_ease_out_cubic_bounds() {
        assert!(ease_out_cubic(0.0).abs() < EPS);
        assert!((ease_out_cubic(1.0) - 1.0).abs() < EPS);
        assert!((ease_out_cubic(2.0) - 1.0).abs() < EPS, "clamps above 1");
        assert!(ease_out_cubic(-1.0).abs() < EPS, "clamps below 0");
    }

    #[test]
    fn test_resting_animation_is_done() {
        let anim = Animation::resting(1.0, 0.25);
        assert!(anim.done());
        assert!((anim.value() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_advance_reaches_target() {
        let mut anim = Animation::running(1.0, 1.2, 0.25);
        assert!(!anim.done());
        anim.advance(1.0);
        assert!(anim.done());
        assert!((anim.value() - 1.2).abs() < EPS);
    }

    #[test]
    fn test_retarget_is_continuous() {
        let mut anim = Animation::running(1.0, 1.2, 0.25);
        anim.advance(0.1);
        let mid = anim.value();
        assert!(mid > 1.0 && mid < 1.2);

        anim.retarget(1.0);
        assert!(
            (anim.value() - mid).abs() < EPS,
            "retargeting starts from the interpolated value"
        );
        anim.advance(1.0);
        assert!((anim.value() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_retarget_to_current_target_is_noop() {
        let mut anim = Animation::running(1.0, 1.2, 0.25);
        anim.advance(0.1);
        let before = anim;
        anim.retarget(1.2);
        assert_eq!(anim, before);
    }
}
