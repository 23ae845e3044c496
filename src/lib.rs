//! A weighted-chance roulette wheel for Bevy.
//!
//! Each segment of the wheel carries a selection weight. Spinning draws a
//! weighted random segment, then eases the wheel through a number of full
//! turns until it rests somewhere inside that segment.
//!
//! ```
//! # use bevy_roulette::prelude::*;
//! # use std::time::Duration;
//! let config = RouletteConfig::new(vec![
//!     // Selected half of the time.
//!     SegmentData::text("100 gold", 100),
//!     SegmentData::text("Health potion", 60),
//!     SegmentData::text("Legendary sword", 40),
//! ]);
//!
//! let mut roulette = Roulette::setup(config, &mut ()).unwrap();
//!
//! roulette.spin(
//!     &mut rand::rng(),
//!     Some(Box::new(|segment: &Segment<()>| {
//!         println!("You won: {}", segment.description);
//!     })),
//! );
//!
//! // Drive the spin from your frame loop.
//! while roulette.is_spinning() {
//!     roulette.tick(Duration::from_millis(16));
//! }
//! ```
//!
//! Inside a Bevy app, add [`RoulettePlugin`], spawn a [`Roulette`]
//! component, and send [`SpinRoulette`](app::SpinRoulette) events.

#![allow(clippy::type_complexity)]

pub mod app;
pub mod config;
pub mod curve;
pub mod error;
pub mod geometry;
pub mod roulette;
pub mod segment;
pub mod selector;
pub mod spin;

pub use crate::app::{RoulettePlugin, RouletteSets};
pub use crate::roulette::{Roulette, spawn_roulette};

pub mod prelude {
    pub use crate::{Roulette, RoulettePlugin, RouletteSets, spawn_roulette};

    pub use crate::app::{CancelSpin, SpinCompleted, SpinRoulette};

    pub use crate::config::RouletteConfig;

    pub use crate::curve::{CurveConfig, EaseOut, Keyframe, KeyframeCurve, Linear, SpinCurve};

    pub use crate::error::RouletteError;

    pub use crate::geometry::{PiecePlacement, Renderer, WheelGeometry};

    pub use crate::segment::{Segment, SegmentData};

    pub use crate::selector::WeightedSelector;

    pub use crate::spin::{OnComplete, SpinController, SpinPlan, SpinState, SpinTick};

    pub use crate::Threaded;
}

/// Shorthand for `Send + Sync + 'static`
pub trait Threaded: Send + Sync + 'static {}
impl<T> Threaded for T where T: Send + Sync + 'static {}
