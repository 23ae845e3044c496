use crate::{
    config::RouletteConfig,
    curve::SpinCurve,
    error::RouletteError,
    geometry::{Renderer, WheelGeometry},
    selector::WeightedSelector,
    spin::SpinController,
    Threaded,
};
use bevy_ecs::prelude::*;
use bevy_log::prelude::*;
use std::time::Duration;

/// A weighted-chance roulette wheel.
///
/// This dereferences to its [`SpinController`], so spins can be driven
/// directly or through [`SpinRoulette`](crate::app::SpinRoulette) events.
#[derive(Component)]
pub struct Roulette<I: Threaded>(SpinController<I>);

impl<I: Threaded> Roulette<I> {
    /// Validate `config`, build the weight table, and lay out the wheel.
    ///
    /// `renderer` is called exactly once. An empty segment list, a spin
    /// duration that doesn't fit a nonzero [`Duration`], or an invalid
    /// speed or padding is rejected here, so a `Roulette` can always be spun.
    pub fn setup<R>(config: RouletteConfig<I>, renderer: &mut R) -> Result<Self, RouletteError>
    where
        R: Renderer<I> + ?Sized,
    {
        let RouletteConfig {
            segments,
            spin_duration,
            revolutions_per_second,
            landing_padding,
            curve,
        } = config;

        if !spin_duration.is_finite() || spin_duration <= 0.0 {
            return Err(RouletteError::InvalidDuration(spin_duration));
        }
        let duration = Duration::try_from_secs_f32(spin_duration)
            .ok()
            .filter(|d| !d.is_zero())
            .ok_or(RouletteError::InvalidDuration(spin_duration))?;

        if !revolutions_per_second.is_finite() || revolutions_per_second < 0.0 {
            return Err(RouletteError::InvalidRevolutions(revolutions_per_second));
        }

        let selector = WeightedSelector::setup(segments)?;
        let geometry = WheelGeometry::new(selector.len(), landing_padding)?;

        renderer.layout(&geometry.layout(selector.segments()));

        info!(
            "roulette ready: {} segments, total weight {}",
            selector.len(),
            selector.total_weight()
        );

        Ok(Self(SpinController::new(
            selector,
            geometry,
            curve.build(),
            duration,
            revolutions_per_second,
        )))
    }

    /// Replace the configured curve with a custom one.
    pub fn with_curve(mut self, curve: impl SpinCurve) -> Self {
        self.0.set_curve(Box::new(curve));
        self
    }
}

/// Set up a [`Roulette`] and spawn it as a new entity.
pub fn spawn_roulette<I, R>(
    config: RouletteConfig<I>,
    renderer: &mut R,
    commands: &mut Commands,
) -> Result<Entity, RouletteError>
where
    I: Threaded,
    R: Renderer<I> + ?Sized,
{
    let roulette = Roulette::setup(config, renderer)?;
    Ok(commands.spawn(roulette).id())
}

impl<I: Threaded> core::ops::Deref for Roulette<I> {
    type Target = SpinController<I>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<I: Threaded> core::ops::DerefMut for Roulette<I> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
