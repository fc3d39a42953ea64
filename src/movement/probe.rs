//! Movement domain: surface probing behind a small capability trait.
//!
//! The state machine only needs "did a box swept this way hit anything on
//! this layer". The game answers that with avian's `SpatialQuery`; tests
//! answer it with scripted contacts.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, MovementTuning};

pub trait SurfaceProbe {
    /// Sweep a box of `half_extents` from `center` along `direction` for
    /// `distance` and return how many `layer` colliders it touched.
    fn box_cast(
        &self,
        center: Vec2,
        half_extents: Vec2,
        direction: Dir2,
        distance: f32,
        layer: GameLayer,
    ) -> usize;
}

/// Surface contacts sampled for one fixed step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    pub ground: bool,
    pub wall_left: bool,
    pub wall_right: bool,
}

impl Contacts {
    pub fn probe<P: SurfaceProbe + ?Sized>(probe: &P, position: Vec2, tuning: &MovementTuning) -> Self {
        let ground = &tuning.ground_probe;
        let ground_hits: usize = [GameLayer::Ground, GameLayer::Clone]
            .into_iter()
            .map(|layer| {
                probe.box_cast(
                    position + ground.offset(),
                    ground.half_extents(),
                    Dir2::NEG_Y,
                    ground.distance,
                    layer,
                )
            })
            .sum();

        let wall = &tuning.wall_probe;
        let right_hits = probe.box_cast(
            position + Vec2::new(wall.offset_x, wall.offset_y),
            wall.half_extents(),
            Dir2::X,
            wall.distance,
            GameLayer::Wall,
        );
        let left_hits = probe.box_cast(
            position + Vec2::new(-wall.offset_x, wall.offset_y),
            wall.half_extents(),
            Dir2::NEG_X,
            wall.distance,
            GameLayer::Wall,
        );

        Self {
            ground: ground_hits > 0,
            wall_left: left_hits > 0,
            wall_right: right_hits > 0,
        }
    }
}

/// `SurfaceProbe` backed by the physics world.
pub struct AvianProbe<'a, 'w, 's> {
    pub query: &'a SpatialQuery<'w, 's>,
}

impl SurfaceProbe for AvianProbe<'_, '_, '_> {
    fn box_cast(
        &self,
        center: Vec2,
        half_extents: Vec2,
        direction: Dir2,
        distance: f32,
        layer: GameLayer,
    ) -> usize {
        let shape = Collider::rectangle(half_extents.x * 2.0, half_extents.y * 2.0);
        let filter = SpatialQueryFilter::from_mask(layer);
        let config = ShapeCastConfig::from_max_distance(distance);

        self.query
            .cast_shape(&shape, center, 0.0, direction, &config, &filter)
            .map_or(0, |_| 1)
    }
}
