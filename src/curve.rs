//! Easing curves that shape a spin over time.
//!
//! A curve maps normalized elapsed time to normalized progress. Input is
//! nominally in `[0, 1]`, but the final tick of a spin may overshoot
//! slightly; the built-in curves clamp their input.

/// Maps normalized time to normalized rotation progress.
pub trait SpinCurve: Send + Sync + 'static {
    fn evaluate(&self, t: f32) -> f32;
}

impl<F> SpinCurve for F
where
    F: Fn(f32) -> f32 + Send + Sync + 'static,
{
    fn evaluate(&self, t: f32) -> f32 {
        self(t)
    }
}

/// Constant angular speed.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Linear;

impl SpinCurve for Linear {
    fn evaluate(&self, t: f32) -> f32 {
        t.clamp(0.0, 1.0)
    }
}

/// Starts fast and decelerates into the landing: `1 - (1 - t)^power`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EaseOut {
    pub power: f32,
}

impl Default for EaseOut {
    fn default() -> Self {
        Self { power: 3.0 }
    }
}

impl SpinCurve for EaseOut {
    fn evaluate(&self, t: f32) -> f32 {
        1.0 - (1.0 - t.clamp(0.0, 1.0)).powf(self.power)
    }
}

/// A single point on a [`KeyframeCurve`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
}

impl Keyframe {
    pub fn new(time: f32, value: f32) -> Self {
        Self { time, value }
    }
}

/// A piecewise-linear curve through a set of keys.
///
/// Before the first key and after the last, the curve holds that key's value.
/// An empty curve evaluates to `t`. Keys with a non-finite time or value
/// are dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyframeCurve {
    keys: Vec<Keyframe>,
}

impl KeyframeCurve {
    pub fn new(mut keys: Vec<Keyframe>) -> Self {
        keys.retain(|k| k.time.is_finite() && k.value.is_finite());
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self { keys }
    }

    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }
}

impl SpinCurve for KeyframeCurve {
    fn evaluate(&self, t: f32) -> f32 {
        let (Some(first), Some(last)) = (self.keys.first(), self.keys.last()) else {
            return t;
        };

        if t.is_nan() || t <= first.time {
            return first.value;
        }
        if t >= last.time {
            return last.value;
        }

        // `t` is strictly between the first and last key here.
        let next = self.keys.partition_point(|k| k.time <= t);
        let (a, b) = (self.keys[next - 1], self.keys[next]);
        let span = b.time - a.time;

        if span <= f32::EPSILON {
            return b.value;
        }

        a.value + (b.value - a.value) * (t - a.time) / span
    }
}

/// A serializable choice of built-in curve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveConfig {
    Linear,
    EaseOut { power: f32 },
    Keyframes(Vec<Keyframe>),
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self::EaseOut {
            power: EaseOut::default().power,
        }
    }
}

impl CurveConfig {
    pub fn build(&self) -> Box<dyn SpinCurve> {
        match self {
            Self::Linear => Box::new(Linear),
            Self::EaseOut { power } => Box::new(EaseOut { power: *power }),
            Self::Keyframes(keys) => Box::new(KeyframeCurve::new(keys.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-5,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn ease_out_endpoints() {
        let curve = EaseOut::default();
        assert_close(curve.evaluate(0.0), 0.0);
        assert_close(curve.evaluate(1.0), 1.0);
        assert_close(curve.evaluate(1.2), 1.0);
        assert!(curve.evaluate(0.5) > 0.5);
    }

    #[test]
    fn ease_out_is_monotonic() {
        let curve = EaseOut::default();
        let mut previous = 0.0;
        for i in 1..=100 {
            let value = curve.evaluate(i as f32 / 100.0);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn closures_are_curves() {
        let curve: Box<dyn SpinCurve> = Box::new(|t: f32| t * t);
        assert_close(curve.evaluate(0.5), 0.25);
    }

    #[test]
    fn keyframes_interpolate() {
        let curve = KeyframeCurve::new(vec![
            Keyframe::new(1.0, 1.0),
            Keyframe::new(0.0, 0.0),
            Keyframe::new(0.5, 0.8),
        ]);

        assert_eq!(curve.keys()[1].time, 0.5);
        assert_close(curve.evaluate(0.25), 0.4);
        assert_close(curve.evaluate(0.5), 0.8);
        assert_close(curve.evaluate(0.75), 0.9);
    }

    #[test]
    fn keyframes_hold_at_the_ends() {
        let curve = KeyframeCurve::new(vec![Keyframe::new(0.2, 0.1), Keyframe::new(0.8, 0.9)]);

        assert_close(curve.evaluate(0.0), 0.1);
        assert_close(curve.evaluate(1.5), 0.9);
        assert_close(KeyframeCurve::default().evaluate(0.3), 0.3);
    }

    #[test]
    fn non_finite_keys_are_dropped() {
        let curve = KeyframeCurve::new(vec![
            Keyframe::new(-f32::NAN, 5.0),
            Keyframe::new(0.0, 0.0),
            Keyframe::new(f32::NAN, 3.0),
            Keyframe::new(0.5, f32::INFINITY),
            Keyframe::new(f32::NEG_INFINITY, 2.0),
            Keyframe::new(1.0, 1.0),
        ]);
        let clean = KeyframeCurve::new(vec![Keyframe::new(0.0, 0.0), Keyframe::new(1.0, 1.0)]);

        assert_eq!(curve, clean);
        for t in [-1.0, 0.0, 0.25, 0.5, 0.999, 1.0, 2.0] {
            assert_close(curve.evaluate(t), clean.evaluate(t));
        }
        assert_close(curve.evaluate(f32::NAN), 0.0);

        let built = CurveConfig::Keyframes(vec![
            Keyframe::new(-f32::NAN, 1.0),
            Keyframe::new(0.0, 0.0),
            Keyframe::new(1.0, 1.0),
        ])
        .build();
        assert_close(built.evaluate(0.5), 0.5);
    }

    #[test]
    fn config_builds_matching_curve() {
        let curve = CurveConfig::Linear.build();
        assert_close(curve.evaluate(0.3), 0.3);

        let curve = CurveConfig::default().build();
        assert_close(curve.evaluate(0.5), EaseOut::default().evaluate(0.5));
    }
}
