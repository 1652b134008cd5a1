//! Most recently composed pose.
//!
//! Written by [`compose_scene`](crate::systems::compose::compose_scene) so the
//! debug overlay can show what was drawn without resolving again.

use bevy_ecs::prelude::Resource;

use crate::systems::animation::Resolution;

#[derive(Resource, Debug, Clone, Default)]
pub struct LastResolution(pub Option<Resolution>);
