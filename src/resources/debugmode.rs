//! Debug toggle resource.
//!
//! The mere presence of this resource enables the debug overlay drawn on top
//! of the presented surface. Remove it to disable debug behavior.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the overlay shows frame and state details.
#[derive(Resource, Clone, Copy, Debug)]
pub struct DebugMode {}
