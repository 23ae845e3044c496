use crate::{
    curve::CurveConfig,
    geometry::{DEFAULT_LANDING_PADDING, DEFAULT_REVOLUTIONS_PER_SECOND},
    segment::SegmentData,
};

/// Everything needed to set up a wheel.
///
/// ```
/// # use bevy_roulette::prelude::*;
/// let config = RouletteConfig::new(vec![
///     SegmentData::text("Gold", 100),
///     SegmentData::text("Silver", 60),
///     SegmentData::text("Bronze", 40),
/// ])
/// .with_spin_duration(3.0);
///
/// let roulette = Roulette::setup(config, &mut ()).unwrap();
/// assert_eq!(roulette.selector().total_weight(), 200);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(default, bound(deserialize = "I: serde::Deserialize<'de> + Default"))
)]
pub struct RouletteConfig<I> {
    pub segments: Vec<SegmentData<I>>,
    /// Length of a spin, in seconds.
    pub spin_duration: f32,
    /// Extra full turns per second of spin time.
    pub revolutions_per_second: f32,
    /// Fraction of each half-segment the wheel never rests in.
    pub landing_padding: f32,
    pub curve: CurveConfig,
}

impl<I> Default for RouletteConfig<I> {
    fn default() -> Self {
        Self {
            segments: Vec::new(),
            spin_duration: 5.0,
            revolutions_per_second: DEFAULT_REVOLUTIONS_PER_SECOND,
            landing_padding: DEFAULT_LANDING_PADDING,
            curve: CurveConfig::default(),
        }
    }
}

impl<I> RouletteConfig<I> {
    pub fn new(segments: Vec<SegmentData<I>>) -> Self {
        Self {
            segments,
            ..Default::default()
        }
    }

    pub fn with_spin_duration(mut self, seconds: f32) -> Self {
        self.spin_duration = seconds;
        self
    }

    pub fn with_revolutions_per_second(mut self, revolutions: f32) -> Self {
        self.revolutions_per_second = revolutions;
        self
    }

    pub fn with_landing_padding(mut self, padding: f32) -> Self {
        self.landing_padding = padding;
        self
    }

    pub fn with_curve(mut self, curve: CurveConfig) -> Self {
        self.curve = curve;
        self
    }
}
