use crate::{
    curve::SpinCurve,
    geometry::WheelGeometry,
    segment::Segment,
    selector::WeightedSelector,
};
use bevy_log::prelude::*;
use rand::Rng;
use std::time::Duration;

/// Called once with the selected segment when a spin completes.
pub type OnComplete<I> = Box<dyn FnOnce(&Segment<I>) + Send + Sync + 'static>;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "reflect", derive(bevy_reflect::Reflect))]
pub enum SpinPhase {
    #[default]
    Idle,
    Spinning,
}

/// The animation state of a single wheel.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "reflect", derive(bevy_reflect::Reflect))]
pub struct SpinState {
    pub phase: SpinPhase,
    /// The most recently selected segment.
    ///
    /// Only meaningful once a spin has started.
    pub selected_index: usize,
    pub elapsed: Duration,
    pub landing_angle: f32,
    pub target_angle: f32,
    /// Current visual rotation, in degrees.
    pub rotation: f32,
}

impl SpinState {
    pub fn is_spinning(&self) -> bool {
        self.phase == SpinPhase::Spinning
    }
}

/// The outcome chosen when a spin starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    pub selected_index: usize,
    pub landing_angle: f32,
    pub target_angle: f32,
}

/// The result of advancing a spin by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinTick {
    /// No spin is in progress.
    Idle,
    Spinning { rotation: f32, progress: f32 },
    /// The spin finished on this tick, landing on the given segment.
    Completed(usize),
}

/// Drives a wheel from idle, through a timed eased rotation, and back.
pub struct SpinController<I> {
    selector: WeightedSelector<I>,
    geometry: WheelGeometry,
    curve: Box<dyn SpinCurve>,
    duration: Duration,
    revolutions_per_second: f32,
    state: SpinState,
    on_complete: Option<OnComplete<I>>,
}

impl<I> SpinController<I> {
    pub fn new(
        selector: WeightedSelector<I>,
        geometry: WheelGeometry,
        curve: Box<dyn SpinCurve>,
        duration: Duration,
        revolutions_per_second: f32,
    ) -> Self {
        Self {
            selector,
            geometry,
            curve,
            duration,
            revolutions_per_second,
            state: SpinState::default(),
            on_complete: None,
        }
    }

    /// Start spinning towards a weighted random segment.
    ///
    /// Returns `None` without touching any state if a spin is
    /// already in progress; `on_complete` is dropped uncalled.
    pub fn spin<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        on_complete: Option<OnComplete<I>>,
    ) -> Option<SpinPlan> {
        if self.state.is_spinning() {
            debug!("ignoring spin request: wheel is already spinning");
            return None;
        }

        let index = self.selector.draw(rng);
        Some(self.begin(index, rng, on_complete))
    }

    /// Start spinning towards a predetermined segment.
    ///
    /// Returns `None` if a spin is in progress or `index` is out of range.
    pub fn spin_to<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        rng: &mut R,
        on_complete: Option<OnComplete<I>>,
    ) -> Option<SpinPlan> {
        if self.state.is_spinning() {
            debug!("ignoring spin request: wheel is already spinning");
            return None;
        }
        if index >= self.selector.len() {
            warn!(
                "ignoring spin request: segment {index} is out of range for a wheel of {}",
                self.selector.len()
            );
            return None;
        }

        Some(self.begin(index, rng, on_complete))
    }

    fn begin<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        rng: &mut R,
        on_complete: Option<OnComplete<I>>,
    ) -> SpinPlan {
        let landing_angle = self.geometry.draw_landing(rng, index);
        let target_angle =
            WheelGeometry::target_angle(landing_angle, self.duration, self.revolutions_per_second);

        debug!(
            "spinning to segment {index} (center {}), landing at {landing_angle}, target {target_angle}",
            self.geometry.center_angle(index)
        );

        self.state = SpinState {
            phase: SpinPhase::Spinning,
            selected_index: index,
            elapsed: Duration::ZERO,
            landing_angle,
            target_angle,
            rotation: 0.0,
        };
        self.on_complete = on_complete;

        SpinPlan {
            selected_index: index,
            landing_angle,
            target_angle,
        }
    }

    /// Advance the spin by `delta`.
    ///
    /// The completion callback runs on the tick where progress reaches `1`.
    pub fn tick(&mut self, delta: Duration) -> SpinTick {
        if !self.state.is_spinning() {
            return SpinTick::Idle;
        }

        self.state.elapsed += delta;
        let progress = self.state.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let t = self.curve.evaluate(progress);
        self.state.rotation = lerp(0.0, self.state.target_angle, t);

        if progress < 1.0 {
            return SpinTick::Spinning {
                rotation: self.state.rotation,
                progress,
            };
        }

        self.state.phase = SpinPhase::Idle;
        let index = self.state.selected_index;

        if let Some(on_complete) = self.on_complete.take() {
            on_complete(&self.selector.segments()[index]);
        }

        SpinTick::Completed(index)
    }

    /// Stop a spin in progress without reporting a result.
    ///
    /// The wheel keeps its current rotation and any completion callback is
    /// dropped. Returns whether a spin was cancelled.
    pub fn cancel(&mut self) -> bool {
        if !self.state.is_spinning() {
            return false;
        }

        debug!(
            "cancelled spin to segment {} after {:?}",
            self.state.selected_index, self.state.elapsed
        );
        self.state.phase = SpinPhase::Idle;
        self.on_complete = None;
        true
    }

    pub fn state(&self) -> &SpinState {
        &self.state
    }

    pub fn is_spinning(&self) -> bool {
        self.state.is_spinning()
    }

    pub fn rotation(&self) -> f32 {
        self.state.rotation
    }

    pub fn selected_index(&self) -> usize {
        self.state.selected_index
    }

    pub fn selected_segment(&self) -> &Segment<I> {
        &self.selector.segments()[self.state.selected_index]
    }

    pub fn selector(&self) -> &WeightedSelector<I> {
        &self.selector
    }

    pub fn geometry(&self) -> &WheelGeometry {
        &self.geometry
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub(crate) fn set_curve(&mut self, curve: Box<dyn SpinCurve>) {
        self.curve = curve;
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
