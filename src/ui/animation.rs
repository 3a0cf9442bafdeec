// src/ui/animation.rs
//
// Keyframe animations for the success notice. Each runs once when the notice
// appears and holds its last frame afterwards.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// `cubic-bezier(0, 0, 0.58, 1)`
    EaseOut,
}

impl Easing {
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
        }
    }
}

/// Evaluates a CSS timing curve: finds the curve parameter whose x equals
/// `x`, then returns the matching y.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    let bezier = |a: f32, b: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
    };
    let slope = |a: f32, b: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * a + 6.0 * inv * s * (b - a) + 3.0 * s * s * (1.0 - b)
    };

    let mut s = x;
    for _ in 0..8 {
        let err = bezier(x1, x2, s) - x;
        if err.abs() < 1e-5 {
            return bezier(y1, y2, s);
        }
        let d = slope(x1, x2, s);
        if d.abs() < 1e-6 {
            break;
        }
        s = (s - err / d).clamp(0.0, 1.0);
    }

    // Newton stalled; bisect
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..32 {
        let value = bezier(x1, x2, s);
        if (value - x).abs() < 1e-5 {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    bezier(y1, y2, s)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub at: f32,
    pub scale: f32,
    pub opacity: f32,
}

const fn keyframe(at: f32, scale: f32, opacity: f32) -> Keyframe {
    Keyframe { at, scale, opacity }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub scale: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone)]
pub struct Animation {
    pub name: &'static str,
    pub duration: Duration,
    pub easing: Easing,
    keyframes: &'static [Keyframe],
}

const APPEAR_KEYFRAMES: [Keyframe; 2] = [keyframe(0.0, 0.8, 0.0), keyframe(1.0, 1.0, 1.0)];

const CHECK_KEYFRAMES: [Keyframe; 3] = [
    keyframe(0.0, 0.0, 1.0),
    keyframe(0.5, 1.2, 1.0),
    keyframe(1.0, 1.0, 1.0),
];

impl Animation {
    /// Card entrance: fade in while growing from 80%.
    pub fn success_appear() -> Self {
        Self {
            name: "success-appear",
            duration: Duration::from_millis(300),
            easing: Easing::EaseOut,
            keyframes: &APPEAR_KEYFRAMES,
        }
    }

    /// Check badge: pop past full size, then settle.
    pub fn success_check() -> Self {
        Self {
            name: "success-check",
            duration: Duration::from_millis(500),
            easing: Easing::EaseOut,
            keyframes: &CHECK_KEYFRAMES,
        }
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    /// Frame at `elapsed` since the animation started. The easing applies to
    /// each keyframe segment separately.
    pub fn sample(&self, elapsed: Duration) -> Frame {
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
        };

        let last = self.keyframes[self.keyframes.len() - 1];
        let segment = self
            .keyframes
            .windows(2)
            .find(|pair| progress <= pair[1].at);

        match segment {
            Some(pair) => {
                let (from, to) = (pair[0], pair[1]);
                let span = to.at - from.at;
                let local = if span <= f32::EPSILON { 1.0 } else { (progress - from.at) / span };
                let eased = self.easing.apply(local);
                Frame {
                    scale: lerp(from.scale, to.scale, eased),
                    opacity: lerp(from.opacity, to.opacity, eased),
                }
            }
            None => Frame {
                scale: last.scale,
                opacity: last.opacity,
            },
        }
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_contract_durations() {
        assert_eq!(Animation::success_appear().duration, Duration::from_millis(300));
        assert_eq!(Animation::success_check().duration, Duration::from_millis(500));
        assert_eq!(Animation::success_appear().easing, Easing::EaseOut);
        assert_eq!(Animation::success_check().easing, Easing::EaseOut);
    }

    #[test]
    fn test_ease_out_endpoints_and_shape() {
        assert!(approx(Easing::EaseOut.apply(0.0), 0.0));
        assert!(approx(Easing::EaseOut.apply(1.0), 1.0));
        // Ease-out front-loads progress
        assert!(Easing::EaseOut.apply(0.5) > 0.5);

        let mut previous = 0.0;
        for step in 1..=20 {
            let value = Easing::EaseOut.apply(step as f32 / 20.0);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn test_appear_frames() {
        let appear = Animation::success_appear();
        let start = appear.sample(Duration::ZERO);
        assert!(approx(start.scale, 0.8));
        assert!(approx(start.opacity, 0.0));

        let middle = appear.sample(Duration::from_millis(150));
        assert!(middle.scale > 0.9 && middle.scale < 1.0);

        let end = appear.sample(Duration::from_millis(300));
        assert!(approx(end.scale, 1.0));
        assert!(approx(end.opacity, 1.0));
    }

    #[test]
    fn test_check_overshoots_then_settles() {
        let check = Animation::success_check();
        assert!(approx(check.sample(Duration::ZERO).scale, 0.0));
        assert!(approx(check.sample(Duration::from_millis(250)).scale, 1.2));
        let settling = check.sample(Duration::from_millis(375)).scale;
        assert!(settling < 1.2 && settling > 1.0);
        assert!(approx(check.sample(Duration::from_millis(500)).scale, 1.0));
    }

    #[test]
    fn test_holds_last_frame() {
        let check = Animation::success_check();
        assert!(check.is_finished(Duration::from_secs(3)));
        assert!(approx(check.sample(Duration::from_secs(3)).scale, 1.0));
        assert!(!check.is_finished(Duration::from_millis(499)));
    }
}
