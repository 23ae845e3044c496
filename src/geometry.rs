use crate::{error::RouletteError, segment::Segment};
use rand::Rng;
use std::time::Duration;

/// Degrees in one revolution.
pub const FULL_TURN: f32 = 360.0;

/// The fraction of each half-segment kept clear of the divider lines.
pub const DEFAULT_LANDING_PADDING: f32 = 0.25;

/// Extra full revolutions per second of spin time.
pub const DEFAULT_REVOLUTIONS_PER_SECOND: f32 = 2.0;

/// Angular layout of a wheel with evenly sized segments.
///
/// All angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    segment_count: usize,
    segment_width: f32,
    half_width_padded: f32,
}

impl WheelGeometry {
    pub fn new(segment_count: usize, landing_padding: f32) -> Result<Self, RouletteError> {
        if segment_count == 0 {
            return Err(RouletteError::EmptyWheel);
        }
        if !(0.0..1.0).contains(&landing_padding) {
            return Err(RouletteError::InvalidPadding(landing_padding));
        }

        let segment_width = FULL_TURN / segment_count as f32;
        let half_width = segment_width * 0.5;

        Ok(Self {
            segment_count,
            segment_width,
            half_width_padded: half_width * (1.0 - landing_padding),
        })
    }

    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    pub fn segment_width(&self) -> f32 {
        self.segment_width
    }

    pub fn half_width(&self) -> f32 {
        self.segment_width * 0.5
    }

    /// Half of the landing range, with padding removed on each side.
    pub fn half_width_padded(&self) -> f32 {
        self.half_width_padded
    }

    pub fn center_angle(&self, index: usize) -> f32 {
        self.segment_width * index as f32
    }

    /// The `[left, right]` range the wheel may come to rest in for `index`.
    ///
    /// Bounds are reduced with a truncating remainder, so the first
    /// segment's left bound is negative rather than wrapped. If the
    /// reduction would still invert the range, the right bound is carried
    /// over a full turn so `left <= right` always holds.
    pub fn landing_bounds(&self, index: usize) -> (f32, f32) {
        let center = self.center_angle(index);
        let left = (center - self.half_width_padded) % FULL_TURN;
        let mut right = (center + self.half_width_padded) % FULL_TURN;

        if left > right {
            right += FULL_TURN;
        }

        (left, right)
    }

    /// Pick a random resting angle inside the padded range of `index`.
    pub fn draw_landing<R: Rng + ?Sized>(&self, rng: &mut R, index: usize) -> f32 {
        let (left, right) = self.landing_bounds(index);
        rng.random_range(left..=right)
    }

    /// Where a spin must end to rest on `landing` after spinning for `duration`.
    pub fn target_angle(landing: f32, duration: Duration, revolutions_per_second: f32) -> f32 {
        landing + FULL_TURN * duration.as_secs_f32() * revolutions_per_second
    }

    /// Placement of every piece and divider line around the wheel.
    pub fn layout<'a, I>(&self, segments: &'a [Segment<I>]) -> Vec<PiecePlacement<'a, I>> {
        segments
            .iter()
            .map(|segment| {
                let angle = self.center_angle(segment.index);
                PiecePlacement {
                    segment,
                    angle,
                    divider_angle: angle + self.half_width(),
                }
            })
            .collect()
    }
}

/// Where a renderer should put one segment's piece and its trailing divider.
#[derive(Debug)]
pub struct PiecePlacement<'a, I> {
    pub segment: &'a Segment<I>,
    /// Rotation of the piece around the wheel's center.
    pub angle: f32,
    /// Rotation of the divider line that follows the piece.
    pub divider_angle: f32,
}

/// Draws the static parts of a wheel.
///
/// [`Roulette::setup`](crate::Roulette::setup) calls [`Renderer::layout`]
/// exactly once, before the wheel can be spun.
pub trait Renderer<I> {
    fn layout(&mut self, pieces: &[PiecePlacement<'_, I>]);
}

/// A renderer that draws nothing.
impl<I> Renderer<I> for () {
    fn layout(&mut self, _: &[PiecePlacement<'_, I>]) {}
}
