use crate::{Threaded, roulette::Roulette, segment::Segment, spin::SpinTick};
use bevy_app::prelude::*;
use bevy_ecs::{prelude::*, system::SystemId};
use bevy_log::prelude::*;
use bevy_time::Time;
use std::marker::PhantomData;

/// `bevy_roulette`'s plugin.
///
/// `I` is the icon type carried by each segment. Add one plugin
/// per icon type in use.
pub struct RoulettePlugin<I>(PhantomData<fn() -> I>);

impl<I> Default for RoulettePlugin<I> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

/// Sets for every `bevy_roulette` system.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum RouletteSets {
    /// Start and cancel spins from incoming requests.
    Spin,

    /// Advance spinning wheels and report completed spins.
    Animate,
}

impl<I: Threaded + Clone> Plugin for RoulettePlugin<I> {
    fn build(&self, app: &mut App) {
        app.add_event::<SpinRoulette<I>>()
            .add_event::<CancelSpin>()
            .add_event::<SpinCompleted<I>>()
            .add_systems(
                Update,
                (
                    (start_spins::<I>, cancel_spins::<I>)
                        .chain()
                        .in_set(RouletteSets::Spin),
                    animate_roulettes::<I>.in_set(RouletteSets::Animate),
                ),
            )
            .configure_sets(Update, RouletteSets::Animate.after(RouletteSets::Spin));
    }
}

/// Ask a [`Roulette`] to spin.
///
/// Requests for a wheel that is already spinning are ignored,
/// along with their callback.
#[derive(Event, Debug, Clone)]
pub struct SpinRoulette<I: Threaded> {
    pub roulette: Entity,
    /// A one-shot system run with the selected segment once the spin completes.
    pub on_complete: Option<SystemId<In<Segment<I>>>>,
}

impl<I: Threaded> SpinRoulette<I> {
    pub fn new(roulette: Entity) -> Self {
        Self {
            roulette,
            on_complete: None,
        }
    }

    pub fn with_callback(mut self, system: SystemId<In<Segment<I>>>) -> Self {
        self.on_complete = Some(system);
        self
    }
}

/// Stop a spinning wheel without reporting a result.
#[derive(Event, Debug, Clone, Copy)]
pub struct CancelSpin {
    pub roulette: Entity,
}

/// Written once for every spin that runs to completion.
#[derive(Event, Debug, Clone)]
pub struct SpinCompleted<I: Threaded> {
    pub roulette: Entity,
    pub segment: Segment<I>,
}

/// The callback registered by the spin in progress.
#[derive(Component)]
struct SpinCallback<I: Threaded>(SystemId<In<Segment<I>>>);

fn start_spins<I: Threaded>(
    mut requests: EventReader<SpinRoulette<I>>,
    mut roulettes: Query<&mut Roulette<I>>,
    mut commands: Commands,
) {
    let mut rng = rand::rng();

    for request in requests.read() {
        let Ok(mut roulette) = roulettes.get_mut(request.roulette) else {
            warn!(
                "spin requested for entity {:?}, which has no roulette",
                request.roulette
            );
            continue;
        };

        if roulette.spin(&mut rng, None).is_none() {
            continue;
        }

        let mut entity = commands.entity(request.roulette);
        match request.on_complete {
            Some(system) => entity.insert(SpinCallback(system)),
            None => entity.remove::<SpinCallback<I>>(),
        };
    }
}

fn cancel_spins<I: Threaded>(
    mut requests: EventReader<CancelSpin>,
    mut roulettes: Query<&mut Roulette<I>>,
    mut commands: Commands,
) {
    for request in requests.read() {
        let Ok(mut roulette) = roulettes.get_mut(request.roulette) else {
            continue;
        };

        if roulette.cancel() {
            commands
                .entity(request.roulette)
                .remove::<SpinCallback<I>>();
        }
    }
}

fn animate_roulettes<I: Threaded + Clone>(
    mut roulettes: Query<(Entity, &mut Roulette<I>, Option<&SpinCallback<I>>)>,
    time: Res<Time>,
    mut completed: EventWriter<SpinCompleted<I>>,
    mut commands: Commands,
) {
    for (entity, mut roulette, callback) in roulettes.iter_mut() {
        if !roulette.is_spinning() {
            continue;
        }

        let SpinTick::Completed(index) = roulette.tick(time.delta()) else {
            continue;
        };

        let segment = roulette.selected_segment().clone();
        debug!(
            "roulette {entity:?} landed on segment {index} \"{}\"",
            segment.description
        );

        if let Some(callback) = callback {
            commands.run_system_with(callback.0, segment.clone());
            commands.entity(entity).remove::<SpinCallback<I>>();
        }

        completed.write(SpinCompleted {
            roulette: entity,
            segment,
        });
    }
}
