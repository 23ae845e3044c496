use bevy::{log::LogPlugin, prelude::*};
use bevy_roulette::prelude::*;

fn main() {
    App::new()
        .add_plugins((
            MinimalPlugins,
            LogPlugin::default(),
            RoulettePlugin::<()>::default(),
        ))
        .add_systems(Startup, setup)
        .add_systems(Update, (announce, spin_again))
        .run();
}

#[derive(Resource)]
struct Announce(bevy::ecs::system::SystemId<In<Segment<()>>>);

fn setup(mut commands: Commands) {
    info!("Starting up");

    let config = RouletteConfig::new(vec![
        SegmentData::text("100 gold", 100),
        SegmentData::text("Health potion", 60),
        SegmentData::text("Legendary sword", 40),
        // Coerced to a chance of 1.
        SegmentData::text("Cursed ring", 0),
    ])
    .with_spin_duration(2.0);

    match spawn_roulette(config, &mut LogLayout, &mut commands) {
        Ok(wheel) => info!("spawned roulette {wheel:?}"),
        Err(e) => error!("unable to spawn roulette: {e}"),
    }

    let callback = commands.register_system(|In(segment): In<Segment<()>>| {
        println!("You won: {}", segment.description);
    });
    commands.insert_resource(Announce(callback));
}

/// Logs where each piece would be drawn.
struct LogLayout;

impl Renderer<()> for LogLayout {
    fn layout(&mut self, pieces: &[PiecePlacement<'_, ()>]) {
        for piece in pieces {
            info!(
                "piece \"{}\" at {}°, divider at {}°",
                piece.segment.description, piece.angle, piece.divider_angle
            );
        }
    }
}

fn announce(mut reader: EventReader<SpinCompleted<()>>) {
    for event in reader.read() {
        info!(
            "roulette {:?} stopped on \"{}\" (chance {})",
            event.roulette,
            event.segment.description,
            event.segment.chance()
        );
    }
}

fn spin_again(
    roulettes: Query<(Entity, &Roulette<()>)>,
    announce: Res<Announce>,
    mut writer: EventWriter<SpinRoulette<()>>,
) {
    for (entity, roulette) in roulettes.iter() {
        if !roulette.is_spinning() {
            writer.write(SpinRoulette::new(entity).with_callback(announce.0));
        }
    }
}
